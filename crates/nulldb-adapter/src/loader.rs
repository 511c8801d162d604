use std::path::Path;

use crate::error::AdapterResult;
use crate::registry::SchemaRegistry;

/// Populates the registry from an external schema definition.
///
/// The adapter resolves the definition's location and invokes the
/// loader at most once per instance; the loader is expected to call
/// back into the registry to declare every table the application uses.
/// The adapter never parses the definition itself.
pub trait SchemaLoader {
    fn load(&self, schema_path: &Path, registry: &mut SchemaRegistry) -> AdapterResult<()>;
}

impl<F> SchemaLoader for F
where
    F: Fn(&Path, &mut SchemaRegistry) -> AdapterResult<()>,
{
    fn load(&self, schema_path: &Path, registry: &mut SchemaRegistry) -> AdapterResult<()> {
        self(schema_path, registry)
    }
}

/// Loader that declares nothing; for adapters whose schema is defined
/// programmatically through `create_table`.
pub fn empty_schema(_schema_path: &Path, _registry: &mut SchemaRegistry) -> AdapterResult<()> {
    Ok(())
}
