use crate::metadata::{
    CanonicalType, DefaultTypeMapper, RemoteTypeCode, RemoteTypeDescriptor, TypeMapper,
};

/// PostgreSQL overrides on top of [`DefaultTypeMapper`].
///
/// Opaque and driver-specific types are exposed as text; generated SQL casts
/// them to VARCHAR so the values actually arrive as text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresTypeMapper {
    fallback: DefaultTypeMapper,
}

impl PostgresTypeMapper {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TypeMapper for PostgresTypeMapper {
    fn map_type(&self, descriptor: &RemoteTypeDescriptor) -> CanonicalType {
        let mapped = match descriptor.code() {
            RemoteTypeCode::Other if descriptor.type_name == "varbit" => {
                CanonicalType::varchar_utf8(descriptor.precision_or_size)
            }
            RemoteTypeCode::Other
            | RemoteTypeCode::SqlXml
            | RemoteTypeCode::Distinct
            | RemoteTypeCode::Binary => CanonicalType::max_varchar_utf8(),
            _ => return self.fallback.map_type(descriptor),
        };
        tracing::trace!(
            target: "metadata",
            type_name = %descriptor.type_name,
            type_code = descriptor.type_code,
            mapped = %mapped,
            "Mapped PostgreSQL specific type"
        );
        mapped
    }
}
