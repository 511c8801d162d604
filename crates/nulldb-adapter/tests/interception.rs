use nulldb_adapter::{
    AdapterConfig, AdapterError, DISCONNECTED_MESSAGE, DatabaseAdapter, NullAdapter, Strategy,
    empty_schema,
};
use nulldb_core::{ColumnKind, Value};

fn adapter_with(strategy: Strategy) -> NullAdapter {
    let config = AdapterConfig {
        strategy,
        ..AdapterConfig::default()
    };
    NullAdapter::new(config, empty_schema)
}

fn assert_disconnected(result: Result<(), AdapterError>) {
    let err = result.unwrap_err();
    assert!(matches!(err, AdapterError::Disconnected));
    assert_eq!(err.to_string(), DISCONNECTED_MESSAGE);
}

#[test]
fn raise_strategy_fails_every_intercepted_operation() {
    let adapter = adapter_with(Strategy::Raise);

    assert_disconnected(adapter.rename_table("users", "people"));
    assert_disconnected(adapter.change_column("users", "name", ColumnKind::Text));
    assert_disconnected(adapter.change_column_default(
        "users",
        "name",
        Some(Value::Text("anonymous".to_string())),
    ));
    assert_disconnected(adapter.rename_column("users", "name", "full_name"));
    assert_disconnected(adapter.insert("INSERT INTO users (name) VALUES ('x')"));
    assert!(matches!(
        adapter.select_rows("SELECT * FROM users").unwrap_err(),
        AdapterError::Disconnected
    ));

    // Nothing was mutated by the failed calls.
    assert_eq!(adapter.table_names(), vec!["schema_info".to_string()]);
}

#[test]
fn noop_strategy_returns_defaults_and_mutates_nothing() {
    let adapter = adapter_with(Strategy::Noop);

    adapter.rename_table("users", "people").expect("noop");
    adapter
        .change_column("users", "name", ColumnKind::Text)
        .expect("noop");
    adapter
        .change_column_default("users", "name", None)
        .expect("noop");
    adapter
        .rename_column("users", "name", "full_name")
        .expect("noop");
    adapter
        .insert("INSERT INTO users (name) VALUES ('x')")
        .expect("noop");

    let rows = adapter.select_rows("SELECT * FROM users").expect("noop");
    assert!(rows.is_empty());

    assert_eq!(adapter.table_names(), vec!["schema_info".to_string()]);
}

#[test]
fn with_strategy_restores_after_a_normal_return() {
    let adapter = adapter_with(Strategy::Raise);

    adapter
        .with_strategy("noop", || {
            assert_eq!(adapter.strategy(), Strategy::Noop);
            adapter.insert("INSERT INTO users (name) VALUES ('x')")
        })
        .expect("noop block");

    assert_eq!(adapter.strategy(), Strategy::Raise);
}

#[test]
fn with_strategy_restores_after_an_error() {
    let adapter = adapter_with(Strategy::Raise);

    let result: Result<(), AdapterError> = adapter.with_strategy("noop", || {
        Err(AdapterError::Unsupported("forced failure".to_string()))
    });
    assert!(result.is_err());
    assert_eq!(adapter.strategy(), Strategy::Raise);
}

#[test]
fn with_strategy_rejects_unknown_names_and_keeps_state() {
    let adapter = adapter_with(Strategy::Noop);

    let err = adapter
        .with_strategy("transactional", || Ok(()))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "\"transactional\" is not a valid strategy - valid values are noop and raise"
    );
    assert_eq!(adapter.strategy(), Strategy::Noop);
}

#[test]
fn with_strategy_nests() {
    let adapter = adapter_with(Strategy::Raise);

    adapter
        .with_strategy("noop", || {
            adapter.with_strategy("raise", || {
                assert_eq!(adapter.strategy(), Strategy::Raise);
                Ok(())
            })?;
            assert_eq!(adapter.strategy(), Strategy::Noop);
            Ok(())
        })
        .expect("nested blocks");

    assert_eq!(adapter.strategy(), Strategy::Raise);
}

#[test]
fn push_strategy_guard_restores_on_drop() {
    let adapter = adapter_with(Strategy::Raise);

    let guard = adapter.push_strategy(Strategy::Noop);
    assert_eq!(adapter.strategy(), Strategy::Noop);
    drop(guard);
    assert_eq!(adapter.strategy(), Strategy::Raise);
}

#[test]
fn execute_skips_index_creation() {
    let adapter = adapter_with(Strategy::Raise);

    adapter
        .execute("CREATE  INDEX index_users_on_name ON users (name)")
        .expect("index creation is a no-op");
    adapter
        .execute("  CREATE  INDEX index_users_on_email ON users (email)")
        .expect("leading whitespace is tolerated");
}

#[test]
fn execute_rejects_everything_else() {
    let adapter = adapter_with(Strategy::Noop);

    let err = adapter.execute("SELECT 1").unwrap_err();
    assert!(matches!(err, AdapterError::Unsupported(_)));
    assert!(err.to_string().contains("SELECT 1"));

    // Unique index creation never matched the tolerated form.
    assert!(adapter.execute("CREATE UNIQUE INDEX idx ON users (name)").is_err());
}

#[test]
fn adapter_reports_its_name_and_types() {
    let adapter = adapter_with(Strategy::Raise);
    assert_eq!(adapter.adapter_name(), "nulldb");
    assert_eq!(adapter.native_type(ColumnKind::String).sql_type(), "varchar(255)");
}
