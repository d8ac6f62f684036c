//! Column and table metadata, remote type descriptors and the canonical type system.

pub mod adapter_notes;
pub mod model;
pub mod type_mapper;
pub mod types;

pub use adapter_notes::ColumnAdapterNotes;
pub use model::{
    ColumnMetadata, MetadataSnapshot, RemoteColumn, RemoteTable, TableMetadata,
};
pub use type_mapper::{DefaultTypeMapper, TypeMapper};
pub use types::{
    CanonicalType, Charset, RemoteTypeCode, RemoteTypeDescriptor, MAX_CHARACTER_LENGTH,
    MAX_EXACT_NUMERIC_PRECISION,
};
