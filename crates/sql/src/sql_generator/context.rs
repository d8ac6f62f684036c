use pgvs_common::AdapterProperties;

/// Per-statement information the generator needs besides the tree itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlGenerationContext {
    pub catalog_name: Option<String>,
    pub schema_name: Option<String>,
}

impl SqlGenerationContext {
    pub fn new(catalog_name: Option<&str>, schema_name: Option<&str>) -> Self {
        Self {
            catalog_name: catalog_name.map(str::to_string),
            schema_name: schema_name.map(str::to_string),
        }
    }

    pub fn from_properties(properties: &AdapterProperties) -> Self {
        Self::new(properties.catalog_name(), properties.schema_name())
    }
}
