use pgvs_common::properties::{CONNECTION_NAME_PROPERTY, SCHEMA_NAME_PROPERTY};
use pgvs_common::AdapterProperties;
use pgvs_sql::ast::{SqlColumn, SqlTable};
use pgvs_sql::metadata::{ColumnAdapterNotes, ColumnMetadata, TableMetadata, TypeMapper};
use pgvs_sql::metadata::RemoteTypeDescriptor;
use pgvs_sql::dialects::postgres::PostgresTypeMapper;

#[allow(dead_code)]
pub fn init_tracing() {
    let _ = pgvs_common::telemetry::init_logging("debug");
}

#[allow(dead_code)]
pub fn properties() -> AdapterProperties {
    AdapterProperties::new()
        .with(CONNECTION_NAME_PROPERTY, "PG_CONNECTION")
        .with(SCHEMA_NAME_PROPERTY, "test_schema")
}

/// Column metadata as discovery would produce it for a remote type.
#[allow(dead_code)]
pub fn column_metadata(name: &str, type_code: i32, type_name: &str) -> ColumnMetadata {
    let notes = ColumnAdapterNotes::new(type_code, type_name)
        .to_json()
        .expect("adapter notes serialize");
    let data_type = PostgresTypeMapper::new().map_type(&RemoteTypeDescriptor::new(type_code, type_name));
    ColumnMetadata::new(name, notes, data_type)
}

#[allow(dead_code)]
pub fn column(id: u32, name: &str, type_code: i32, type_name: &str) -> SqlColumn {
    SqlColumn::new(id, column_metadata(name, type_code, type_name))
}

/// `CLICKS(USER_ID int4, URL varchar)`, named the way upper-case folding exposes it.
#[allow(dead_code)]
pub fn clicks_table() -> SqlTable {
    SqlTable::new(TableMetadata::new(
        "CLICKS",
        vec![
            column_metadata("USER_ID", 4, "int4"),
            column_metadata("URL", 12, "varchar"),
        ],
    ))
}

#[allow(dead_code)]
pub fn typed_table(name: &str, columns: &[(&str, i32, &str)]) -> SqlTable {
    SqlTable::new(TableMetadata::new(
        name,
        columns
            .iter()
            .map(|(column, code, type_name)| column_metadata(column, *code, type_name))
            .collect(),
    ))
}
