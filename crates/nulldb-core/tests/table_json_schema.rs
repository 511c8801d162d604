use jsonschema::JSONSchema;
use nulldb_core::{ColumnDefinition, ColumnKind, TableDefinition, Value};
use schemars::schema_for;

#[test]
fn table_instances_validate_against_emitted_schema() {
    let schema = schema_for!(TableDefinition);
    let schema_json = serde_json::to_value(&schema).expect("serialize json schema");
    let compiled = JSONSchema::compile(&schema_json).expect("compile json schema");

    let mut table = TableDefinition::new("users");
    table.primary_key("id");
    table.column("name", ColumnKind::String);
    table.push_column(
        ColumnDefinition::new("active", ColumnKind::Boolean)
            .not_null()
            .with_default(Value::Boolean(true)),
    );

    let instance = serde_json::to_value(&table).expect("serialize table");
    assert!(compiled.is_valid(&instance), "instance should validate");
}

#[test]
fn rejects_unknown_column_kind() {
    let schema = schema_for!(TableDefinition);
    let schema_json = serde_json::to_value(&schema).expect("serialize json schema");
    let compiled = JSONSchema::compile(&schema_json).expect("compile json schema");

    let instance = serde_json::json!({
        "name": "users",
        "columns": [
            {
                "name": "id",
                "kind": "uuid",
                "is_nullable": false,
                "default": null
            }
        ],
        "is_temporary": false
    });
    assert!(!compiled.is_valid(&instance));
}
