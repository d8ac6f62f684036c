use crate::metadata::adapter_notes::ColumnAdapterNotes;
use crate::metadata::types::{CanonicalType, RemoteTypeDescriptor};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    pub name: String,
    /// JSON produced by [`ColumnAdapterNotes`].
    pub adapter_notes: String,
    pub data_type: CanonicalType,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

fn default_nullable() -> bool {
    true
}

impl ColumnMetadata {
    pub fn new(
        name: impl Into<String>,
        adapter_notes: impl Into<String>,
        data_type: CanonicalType,
    ) -> Self {
        Self {
            name: name.into(),
            adapter_notes: adapter_notes.into(),
            data_type,
            nullable: true,
            comment: None,
        }
    }

    pub fn remote_type(&self) -> Result<ColumnAdapterNotes, serde_json::Error> {
        ColumnAdapterNotes::from_json(&self.adapter_notes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMetadata {
    pub name: String,
    pub columns: Vec<ColumnMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl TableMetadata {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnMetadata>) -> Self {
        Self {
            name: name.into(),
            columns,
            comment: None,
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Frozen result of one discovery pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataSnapshot {
    pub tables: Vec<TableMetadata>,
}

impl MetadataSnapshot {
    pub fn table(&self, name: &str) -> Option<&TableMetadata> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.name.as_str())
    }
}

/// Column as reported by the remote catalog, before any folding or mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteColumn {
    pub name: String,
    pub descriptor: RemoteTypeDescriptor,
    pub nullable: bool,
    pub comment: Option<String>,
}

impl RemoteColumn {
    pub fn new(name: impl Into<String>, descriptor: RemoteTypeDescriptor) -> Self {
        Self {
            name: name.into(),
            descriptor,
            nullable: true,
            comment: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTable {
    pub name: String,
    pub columns: Vec<RemoteColumn>,
    pub comment: Option<String>,
}

impl RemoteTable {
    pub fn new(name: impl Into<String>, columns: Vec<RemoteColumn>) -> Self {
        Self {
            name: name.into(),
            columns,
            comment: None,
        }
    }
}
