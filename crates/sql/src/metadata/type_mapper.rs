use crate::metadata::types::{
    CanonicalType, RemoteTypeCode, RemoteTypeDescriptor, MAX_EXACT_NUMERIC_PRECISION,
};

/// Maps a remote column type onto the canonical type system.
///
/// Mapping is total: unrecognised types degrade to the maximum UTF-8 character type.
pub trait TypeMapper: Send + Sync {
    fn map_type(&self, descriptor: &RemoteTypeDescriptor) -> CanonicalType;
}

/// Dialect-independent mapping of the standard JDBC type codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTypeMapper;

impl DefaultTypeMapper {
    fn integer(descriptor: &RemoteTypeDescriptor, fallback_precision: u32) -> CanonicalType {
        let precision = match u32::try_from(descriptor.precision_or_size) {
            Ok(p) if (1..=MAX_EXACT_NUMERIC_PRECISION).contains(&p) => p,
            _ => fallback_precision,
        };
        CanonicalType::ExactNumeric {
            precision,
            scale: 0,
        }
    }

    fn decimal(descriptor: &RemoteTypeDescriptor) -> CanonicalType {
        let precision = u32::try_from(descriptor.precision_or_size).ok();
        let scale = u32::try_from(descriptor.decimal_scale).unwrap_or(0);
        match precision {
            Some(p) if (1..=MAX_EXACT_NUMERIC_PRECISION).contains(&p) && scale <= p => {
                CanonicalType::ExactNumeric {
                    precision: p,
                    scale,
                }
            }
            _ => CanonicalType::Double,
        }
    }
}

impl TypeMapper for DefaultTypeMapper {
    fn map_type(&self, descriptor: &RemoteTypeDescriptor) -> CanonicalType {
        match descriptor.code() {
            RemoteTypeCode::Boolean => CanonicalType::Boolean,
            RemoteTypeCode::Bit if descriptor.precision_or_size <= 1 => CanonicalType::Boolean,
            RemoteTypeCode::Bit => CanonicalType::varchar_utf8(descriptor.precision_or_size),
            RemoteTypeCode::TinyInt => Self::integer(descriptor, 3),
            RemoteTypeCode::SmallInt => Self::integer(descriptor, 5),
            RemoteTypeCode::Integer => Self::integer(descriptor, 10),
            RemoteTypeCode::BigInt => Self::integer(descriptor, 19),
            RemoteTypeCode::Decimal | RemoteTypeCode::Numeric => Self::decimal(descriptor),
            RemoteTypeCode::Real | RemoteTypeCode::Float | RemoteTypeCode::Double => {
                CanonicalType::Double
            }
            RemoteTypeCode::Char
            | RemoteTypeCode::NChar
            | RemoteTypeCode::Varchar
            | RemoteTypeCode::NVarchar
            | RemoteTypeCode::LongVarchar
            | RemoteTypeCode::LongNVarchar
            | RemoteTypeCode::Clob
            | RemoteTypeCode::NClob => CanonicalType::varchar_utf8(descriptor.precision_or_size),
            RemoteTypeCode::Date => CanonicalType::Date,
            RemoteTypeCode::Timestamp => CanonicalType::Timestamp {
                with_local_time_zone: false,
            },
            RemoteTypeCode::TimestampWithTimezone => CanonicalType::Timestamp {
                with_local_time_zone: true,
            },
            RemoteTypeCode::Time | RemoteTypeCode::TimeWithTimezone => {
                CanonicalType::varchar_utf8(100)
            }
            _ => CanonicalType::max_varchar_utf8(),
        }
    }
}
