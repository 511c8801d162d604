use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::ColumnKind;
use crate::value::Value;

/// A single column declaration inside a table definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ColumnDefinition {
    pub name: String,
    pub kind: ColumnKind,
    pub is_nullable: bool,
    pub default: Option<Value>,
}

impl ColumnDefinition {
    /// Create a nullable column of `kind` with no default.
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_nullable: true,
            default: None,
        }
    }

    /// Mark the column NOT NULL.
    pub fn not_null(mut self) -> Self {
        self.is_nullable = false;
        self
    }

    /// Attach a default value.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// An in-memory table declaration: name, ordered columns, temporary flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
    pub is_temporary: bool,
}

impl TableDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            is_temporary: false,
        }
    }

    /// Append a nullable column of `kind`.
    pub fn column(&mut self, name: impl Into<String>, kind: ColumnKind) -> &mut Self {
        self.columns.push(ColumnDefinition::new(name, kind));
        self
    }

    /// Append a fully specified column.
    pub fn push_column(&mut self, column: ColumnDefinition) -> &mut Self {
        self.columns.push(column);
        self
    }

    /// Append the auto-increment primary key column.
    pub fn primary_key(&mut self, name: impl Into<String>) -> &mut Self {
        self.columns
            .push(ColumnDefinition::new(name, ColumnKind::PrimaryKey).not_null());
        self
    }
}

/// Uniform column descriptor handed back to introspection callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub is_nullable: bool,
    pub default: Option<Value>,
}

impl From<&ColumnDefinition> for Column {
    fn from(definition: &ColumnDefinition) -> Self {
        Self {
            name: definition.name.clone(),
            kind: definition.kind,
            is_nullable: definition.is_nullable,
            default: definition.default.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_declaration_order() {
        let mut table = TableDefinition::new("users");
        table.primary_key("id");
        table.column("name", ColumnKind::String);
        table.column("created_at", ColumnKind::Datetime);

        let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["id", "name", "created_at"]);
        assert!(!table.columns[0].is_nullable);
        assert!(table.columns[1].is_nullable);
    }
}
