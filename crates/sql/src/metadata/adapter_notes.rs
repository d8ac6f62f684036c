use serde::{Deserialize, Serialize};

/// Remote type information stored with every discovered column and read back
/// during SQL generation.
///
/// Serialized as `{"jdbcDataType":93,"typeName":"timestamp"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnAdapterNotes {
    pub jdbc_data_type: i32,
    pub type_name: String,
}

impl ColumnAdapterNotes {
    pub fn new(jdbc_data_type: i32, type_name: impl Into<String>) -> Self {
        Self {
            jdbc_data_type,
            type_name: type_name.into(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(notes: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(notes)
    }
}
