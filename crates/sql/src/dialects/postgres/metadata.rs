//! Turns the remote catalog listing into the frozen metadata snapshot.

use crate::dialects::postgres::identifiers::CaseFolding;
use crate::dialects::postgres::table_filter::TableFilter;
use crate::metadata::{
    ColumnAdapterNotes, ColumnMetadata, MetadataSnapshot, RemoteColumn, RemoteTable,
    TableMetadata, TypeMapper,
};
use pgvs_error::PgvsError;

pub struct PostgresMetadataReader<'a> {
    folding: CaseFolding,
    filter: TableFilter,
    type_mapper: &'a dyn TypeMapper,
}

impl<'a> PostgresMetadataReader<'a> {
    pub fn new(folding: CaseFolding, filter: TableFilter, type_mapper: &'a dyn TypeMapper) -> Self {
        Self {
            folding,
            filter,
            type_mapper,
        }
    }

    /// Filters, folds and maps every table. The first rejected table aborts the read.
    pub fn read(&self, tables: &[RemoteTable]) -> Result<MetadataSnapshot, PgvsError> {
        let mut snapshot = MetadataSnapshot::default();
        for table in tables {
            if !self.filter.is_included(&table.name)? {
                continue;
            }
            snapshot.tables.push(self.read_table(table)?);
        }
        tracing::debug!(
            target: "metadata",
            remote_tables = tables.len(),
            exposed_tables = snapshot.tables.len(),
            "Read remote metadata"
        );
        Ok(snapshot)
    }

    fn read_table(&self, table: &RemoteTable) -> Result<TableMetadata, PgvsError> {
        let columns = table
            .columns
            .iter()
            .map(|column| self.read_column(column))
            .collect::<Result<Vec<_>, _>>()?;
        let mut metadata = TableMetadata::new(self.folding.fold(&table.name), columns);
        metadata.comment = table.comment.clone();
        Ok(metadata)
    }

    fn read_column(&self, column: &RemoteColumn) -> Result<ColumnMetadata, PgvsError> {
        let descriptor = &column.descriptor;
        let notes = ColumnAdapterNotes::new(descriptor.type_code, descriptor.type_name.clone());
        let mut metadata = ColumnMetadata::new(
            self.folding.fold_column_name(&column.name),
            notes.to_json()?,
            self.type_mapper.map_type(descriptor),
        );
        metadata.nullable = column.nullable;
        metadata.comment = column.comment.clone();
        Ok(metadata)
    }
}
