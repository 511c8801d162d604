use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Declared column type, covering the fixed set a schema definition may use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    PrimaryKey,
    String,
    Text,
    Integer,
    Float,
    Decimal,
    Datetime,
    Timestamp,
    Time,
    Date,
    Binary,
    Boolean,
}

/// Dialect-facing SQL type for a declared column kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeType {
    /// SQL type name as a backend would report it.
    pub sql_name: &'static str,
    /// Default length limit, when the dialect carries one.
    pub limit: Option<u32>,
}

impl NativeType {
    /// Render the type the way column DDL prints it (e.g. `varchar(255)`).
    pub fn sql_type(&self) -> String {
        match self.limit {
            Some(limit) => format!("{}({})", self.sql_name, limit),
            None => self.sql_name.to_string(),
        }
    }
}

/// Fixed mapping from declared kinds to MySQL-flavored native types,
/// so column metadata resembles a real backend's.
pub fn native_type(kind: ColumnKind) -> NativeType {
    match kind {
        ColumnKind::PrimaryKey => NativeType {
            sql_name: "int(11) DEFAULT NULL auto_increment PRIMARY KEY",
            limit: None,
        },
        ColumnKind::String => NativeType {
            sql_name: "varchar",
            limit: Some(255),
        },
        ColumnKind::Text => NativeType {
            sql_name: "text",
            limit: None,
        },
        ColumnKind::Integer => NativeType {
            sql_name: "int",
            limit: Some(11),
        },
        ColumnKind::Float => NativeType {
            sql_name: "float",
            limit: None,
        },
        ColumnKind::Decimal => NativeType {
            sql_name: "decimal",
            limit: None,
        },
        ColumnKind::Datetime | ColumnKind::Timestamp => NativeType {
            sql_name: "datetime",
            limit: None,
        },
        ColumnKind::Time => NativeType {
            sql_name: "time",
            limit: None,
        },
        ColumnKind::Date => NativeType {
            sql_name: "date",
            limit: None,
        },
        ColumnKind::Binary => NativeType {
            sql_name: "blob",
            limit: None,
        },
        ColumnKind::Boolean => NativeType {
            sql_name: "tinyint",
            limit: Some(1),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_types_match_the_dialect_table() {
        assert_eq!(native_type(ColumnKind::String).sql_type(), "varchar(255)");
        assert_eq!(native_type(ColumnKind::Integer).sql_type(), "int(11)");
        assert_eq!(native_type(ColumnKind::Boolean).sql_type(), "tinyint(1)");
        assert_eq!(native_type(ColumnKind::Binary).sql_type(), "blob");
        assert_eq!(
            native_type(ColumnKind::Timestamp),
            native_type(ColumnKind::Datetime)
        );
    }
}
