use std::collections::BTreeMap;

use nulldb_core::{Column, TableDefinition};

/// Name of the bookkeeping table every registry starts with.
pub const SCHEMA_INFO_TABLE: &str = "schema_info";

/// Options accepted by `create_table`.
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Add the implicit primary key column (on by default).
    pub id: bool,
    /// Name for the implicit primary key column; defaults to `id`.
    pub primary_key: Option<String>,
    /// Mark the table temporary.
    pub temporary: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            id: true,
            primary_key: None,
            temporary: false,
        }
    }
}

/// In-memory mapping of table name to definition.
///
/// The reserved bookkeeping entry exists from construction; entries are
/// added by `create_table` and never removed.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    tables: BTreeMap<String, TableDefinition>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        let mut tables = BTreeMap::new();
        tables.insert(
            SCHEMA_INFO_TABLE.to_string(),
            TableDefinition::new(SCHEMA_INFO_TABLE),
        );
        Self { tables }
    }

    /// Define (or silently overwrite) a table.
    ///
    /// Unless `options.id` is false, an auto-increment primary key named
    /// by `options.primary_key` (default `id`) comes first; the builder
    /// then appends the remaining columns in declaration order.
    pub fn create_table<F>(
        &mut self,
        name: &str,
        options: TableOptions,
        builder: F,
    ) -> &TableDefinition
    where
        F: FnOnce(&mut TableDefinition),
    {
        let mut table = TableDefinition::new(name);
        table.is_temporary = options.temporary;

        if options.id {
            table.primary_key(options.primary_key.as_deref().unwrap_or("id"));
        }
        builder(&mut table);

        self.tables.insert(name.to_string(), table);
        &self.tables[name]
    }

    /// All known table names, reserved entry included.
    pub fn table_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    /// Columns of `name` as uniform descriptors; empty when unknown.
    pub fn columns_of(&self, name: &str) -> Vec<Column> {
        match self.tables.get(name) {
            Some(table) => table.columns.iter().map(Column::from).collect(),
            None => Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&TableDefinition> {
        self.tables.get(name)
    }

    /// True while only the reserved bookkeeping entry exists.
    pub fn is_pristine(&self) -> bool {
        self.tables.len() <= 1
    }

    /// Iterate over stored definitions.
    pub fn tables(&self) -> impl Iterator<Item = &TableDefinition> {
        self.tables.values()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
