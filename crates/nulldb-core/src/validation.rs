use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::schema::TableDefinition;

/// Validate internal consistency of a set of table definitions.
///
/// This checks:
/// - empty table and column names
/// - duplicate column names within a table
pub fn validate_tables<'a, I>(tables: I) -> Result<()>
where
    I: IntoIterator<Item = &'a TableDefinition>,
{
    for table in tables {
        if table.name.is_empty() {
            return Err(Error::InvalidSchema("empty table name".to_string()));
        }

        let mut columns = BTreeSet::new();
        for column in &table.columns {
            if column.name.is_empty() {
                return Err(Error::InvalidSchema(format!(
                    "empty column name in table: {}",
                    table.name
                )));
            }
            if !columns.insert(column.name.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "duplicate column name: {}.{}",
                    table.name, column.name
                )));
            }
        }
    }

    Ok(())
}
