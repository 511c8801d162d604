use std::cell::Cell;

use nulldb_core::{Column, ColumnKind, NativeType, TableDefinition, Value, native_type, validate_tables};

use crate::config::AdapterConfig;
use crate::error::{AdapterError, AdapterResult};
use crate::loader::SchemaLoader;
use crate::registry::{SchemaRegistry, TableOptions};
use crate::strategy::{Strategy, StrategyGuard};

/// One row of an intercepted result set.
pub type Row = Vec<Value>;

/// Marker for the SQL-generation visitor a host may attach.
///
/// Held for the host's benefit only; the adapter never invokes it.
pub trait SqlVisitor {}

// The only raw DDL the adapter tolerates. Non-unique index statements
// interpolate an empty uniqueness fragment, hence the double space.
const CREATE_INDEX_PREFIX: &str = "CREATE  INDEX";

/// Connection contract a host ORM consumes.
pub trait DatabaseAdapter {
    /// Identifier reported to the host (e.g. `nulldb`).
    fn adapter_name(&self) -> &'static str;

    /// Declare (or silently overwrite) a table.
    fn create_table(
        &mut self,
        name: &str,
        options: TableOptions,
        builder: &mut dyn FnMut(&mut TableDefinition),
    ) -> AdapterResult<()>;

    /// Column descriptors for `table_name`; empty when unknown.
    ///
    /// The first call may populate the registry from the configured
    /// schema definition.
    fn columns(&mut self, table_name: &str) -> AdapterResult<Vec<Column>>;

    /// All known table names.
    fn table_names(&self) -> Vec<String>;

    /// Native type metadata for a declared column kind.
    fn native_type(&self, kind: ColumnKind) -> NativeType {
        native_type(kind)
    }

    /// Run raw query text outside the typed surface.
    fn execute(&self, sql: &str) -> AdapterResult<()>;

    fn rename_table(&self, table_name: &str, new_name: &str) -> AdapterResult<()>;

    fn change_column(
        &self,
        table_name: &str,
        column_name: &str,
        kind: ColumnKind,
    ) -> AdapterResult<()>;

    fn change_column_default(
        &self,
        table_name: &str,
        column_name: &str,
        default: Option<Value>,
    ) -> AdapterResult<()>;

    fn rename_column(
        &self,
        table_name: &str,
        column_name: &str,
        new_column_name: &str,
    ) -> AdapterResult<()>;

    fn select_rows(&self, sql: &str) -> AdapterResult<Vec<Row>>;

    fn insert(&self, sql: &str) -> AdapterResult<()>;
}

/// Adapter that satisfies the connection contract without a database.
pub struct NullAdapter {
    config: AdapterConfig,
    registry: SchemaRegistry,
    strategy: Cell<Strategy>,
    loader: Box<dyn SchemaLoader>,
    visitor: Option<Box<dyn SqlVisitor>>,
    loaded: bool,
}

impl NullAdapter {
    pub fn new(config: AdapterConfig, loader: impl SchemaLoader + 'static) -> Self {
        let strategy = Cell::new(config.strategy);
        Self {
            config,
            registry: SchemaRegistry::new(),
            strategy,
            loader: Box::new(loader),
            visitor: None,
            loaded: false,
        }
    }

    /// Attach the host's SQL-generation visitor.
    pub fn with_visitor(mut self, visitor: Box<dyn SqlVisitor>) -> Self {
        self.visitor = Some(visitor);
        self
    }

    pub fn visitor(&self) -> Option<&dyn SqlVisitor> {
        self.visitor.as_deref()
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Currently active strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy.get()
    }

    /// Install `strategy` until the returned guard is dropped.
    pub fn push_strategy(&self, strategy: Strategy) -> StrategyGuard<'_> {
        tracing::debug!(event = "strategy_pushed", strategy = %strategy);
        StrategyGuard::install(&self.strategy, strategy)
    }

    /// Run `f` under the named strategy, restoring the prior strategy
    /// afterwards whether or not `f` succeeded.
    ///
    /// Fails with `InvalidStrategy`, leaving the current strategy
    /// untouched, when the name is not `raise` or `noop`.
    pub fn with_strategy<T>(
        &self,
        strategy: &str,
        f: impl FnOnce() -> AdapterResult<T>,
    ) -> AdapterResult<T> {
        let strategy: Strategy = strategy.parse()?;
        let _guard = self.push_strategy(strategy);
        f()
    }

    fn ensure_loaded(&mut self) -> AdapterResult<()> {
        if self.loaded || !self.registry.is_pristine() {
            return Ok(());
        }

        let path = self.config.resolved_schema_path();
        tracing::info!(event = "schema_load_started", path = %path.display());
        self.loader.load(&path, &mut self.registry)?;
        validate_tables(self.registry.tables())
            .map_err(|err| AdapterError::SchemaLoad(err.to_string()))?;
        self.loaded = true;
        tracing::info!(
            event = "schema_load_finished",
            tables = self.registry.table_names().len()
        );
        Ok(())
    }

    fn raise_or_noop<T>(&self, operation: &'static str, value: T) -> AdapterResult<T> {
        match self.strategy.get() {
            Strategy::Raise => Err(AdapterError::Disconnected),
            Strategy::Noop => {
                tracing::debug!(event = "operation_skipped", operation = operation);
                Ok(value)
            }
        }
    }
}

impl DatabaseAdapter for NullAdapter {
    fn adapter_name(&self) -> &'static str {
        "nulldb"
    }

    fn create_table(
        &mut self,
        name: &str,
        options: TableOptions,
        builder: &mut dyn FnMut(&mut TableDefinition),
    ) -> AdapterResult<()> {
        self.registry.create_table(name, options, |table| builder(table));
        Ok(())
    }

    fn columns(&mut self, table_name: &str) -> AdapterResult<Vec<Column>> {
        self.ensure_loaded()?;
        Ok(self.registry.columns_of(table_name))
    }

    fn table_names(&self) -> Vec<String> {
        self.registry.table_names()
    }

    fn execute(&self, sql: &str) -> AdapterResult<()> {
        if sql.trim_start().starts_with(CREATE_INDEX_PREFIX) {
            tracing::debug!(event = "index_creation_skipped");
            return Ok(());
        }
        Err(AdapterError::Unsupported(sql.to_string()))
    }

    fn rename_table(&self, _table_name: &str, _new_name: &str) -> AdapterResult<()> {
        self.raise_or_noop("rename_table", ())
    }

    fn change_column(
        &self,
        _table_name: &str,
        _column_name: &str,
        _kind: ColumnKind,
    ) -> AdapterResult<()> {
        self.raise_or_noop("change_column", ())
    }

    fn change_column_default(
        &self,
        _table_name: &str,
        _column_name: &str,
        _default: Option<Value>,
    ) -> AdapterResult<()> {
        self.raise_or_noop("change_column_default", ())
    }

    fn rename_column(
        &self,
        _table_name: &str,
        _column_name: &str,
        _new_column_name: &str,
    ) -> AdapterResult<()> {
        self.raise_or_noop("rename_column", ())
    }

    fn select_rows(&self, _sql: &str) -> AdapterResult<Vec<Row>> {
        self.raise_or_noop("select_rows", Vec::new())
    }

    fn insert(&self, _sql: &str) -> AdapterResult<()> {
        self.raise_or_noop("insert", ())
    }
}
