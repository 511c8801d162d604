use std::path::Path;

use nulldb_adapter::{
    AdapterConfig, AdapterResult, DatabaseAdapter, NullAdapter, SchemaRegistry, TableOptions,
};
use nulldb_core::{ColumnDefinition, ColumnKind, Value, native_type};

fn main() -> AdapterResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = AdapterConfig::from_toml_str(
        r#"
strategy = "raise"
schema_path = "db/schema.toml"
"#,
    )?;

    let loader = |_path: &Path, registry: &mut SchemaRegistry| -> AdapterResult<()> {
        registry.create_table("users", TableOptions::default(), |table| {
            table.column("name", ColumnKind::String);
            table.push_column(
                ColumnDefinition::new("active", ColumnKind::Boolean)
                    .not_null()
                    .with_default(Value::Boolean(true)),
            );
        });
        registry.create_table("posts", TableOptions::default(), |table| {
            table.column("user_id", ColumnKind::Integer);
            table.column("body", ColumnKind::Text);
        });
        Ok(())
    };

    let mut adapter = NullAdapter::new(config, loader);

    for column in adapter.columns("users")? {
        println!(
            "users.{} {}",
            column.name,
            native_type(column.kind).sql_type()
        );
    }
    println!("tables: {}", adapter.table_names().join(", "));

    // Migrations and queries are intercepted; under `noop` they just
    // return their defaults.
    adapter.with_strategy("noop", || {
        adapter.rename_table("posts", "articles")?;
        let rows = adapter.select_rows("SELECT * FROM users")?;
        println!("select returned {} rows", rows.len());
        Ok(())
    })?;

    // Back on the `raise` strategy, the same call fails fast.
    match adapter.select_rows("SELECT * FROM users") {
        Err(err) => println!("disconnected: {err}"),
        Ok(_) => unreachable!("raise strategy always fails"),
    }

    Ok(())
}
