//! Remote type descriptors and the canonical type system they are mapped into.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest character type the federation engine can hold.
pub const MAX_CHARACTER_LENGTH: u32 = 2_000_000;

/// Largest exact-numeric precision the federation engine can hold.
pub const MAX_EXACT_NUMERIC_PRECISION: u32 = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Charset {
    Utf8,
    Ascii,
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Charset::Utf8 => f.write_str("UTF8"),
            Charset::Ascii => f.write_str("ASCII"),
        }
    }
}

/// Logical column type on the federation engine side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CanonicalType {
    Boolean,
    ExactNumeric { precision: u32, scale: u32 },
    Double,
    Date,
    Timestamp { with_local_time_zone: bool },
    Character { length: u32, charset: Charset },
    MaxCharacter { charset: Charset },
}

impl CanonicalType {
    pub fn max_varchar_utf8() -> Self {
        CanonicalType::MaxCharacter {
            charset: Charset::Utf8,
        }
    }

    /// Character type of `length`, or the maximum one when the length is unknown or too large.
    pub fn varchar_utf8(length: i32) -> Self {
        match u32::try_from(length) {
            Ok(length) if (1..=MAX_CHARACTER_LENGTH).contains(&length) => CanonicalType::Character {
                length,
                charset: Charset::Utf8,
            },
            _ => Self::max_varchar_utf8(),
        }
    }

    /// Type name usable inside a `CAST` on the remote side, without charset decoration.
    pub fn sql_name(&self) -> String {
        match self {
            CanonicalType::Boolean => "BOOLEAN".to_string(),
            CanonicalType::ExactNumeric { precision, scale } => {
                format!("DECIMAL({}, {})", precision, scale)
            }
            CanonicalType::Double => "DOUBLE PRECISION".to_string(),
            CanonicalType::Date => "DATE".to_string(),
            CanonicalType::Timestamp {
                with_local_time_zone: false,
            } => "TIMESTAMP".to_string(),
            CanonicalType::Timestamp {
                with_local_time_zone: true,
            } => "TIMESTAMP WITH TIME ZONE".to_string(),
            CanonicalType::Character { length, .. } => format!("VARCHAR({})", length),
            CanonicalType::MaxCharacter { .. } => format!("VARCHAR({})", MAX_CHARACTER_LENGTH),
        }
    }
}

/// Rendered in the federation engine's DDL form, e.g. `VARCHAR(2000000) UTF8`.
impl fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalType::Boolean => f.write_str("BOOLEAN"),
            CanonicalType::ExactNumeric { precision, scale } => {
                write!(f, "DECIMAL({}, {})", precision, scale)
            }
            CanonicalType::Double => f.write_str("DOUBLE"),
            CanonicalType::Date => f.write_str("DATE"),
            CanonicalType::Timestamp {
                with_local_time_zone: false,
            } => f.write_str("TIMESTAMP"),
            CanonicalType::Timestamp {
                with_local_time_zone: true,
            } => f.write_str("TIMESTAMP WITH LOCAL TIME ZONE"),
            CanonicalType::Character { length, charset } => {
                write!(f, "VARCHAR({}) {}", length, charset)
            }
            CanonicalType::MaxCharacter { charset } => {
                write!(f, "VARCHAR({}) {}", MAX_CHARACTER_LENGTH, charset)
            }
        }
    }
}

/// JDBC type codes reported by the remote driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteTypeCode {
    Bit,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Float,
    Real,
    Double,
    Numeric,
    Decimal,
    Char,
    Varchar,
    LongVarchar,
    Date,
    Time,
    Timestamp,
    Binary,
    VarBinary,
    LongVarBinary,
    Null,
    Other,
    JavaObject,
    Distinct,
    Struct,
    Array,
    Blob,
    Clob,
    Ref,
    DataLink,
    Boolean,
    RowId,
    NChar,
    NVarchar,
    LongNVarchar,
    NClob,
    SqlXml,
    RefCursor,
    TimeWithTimezone,
    TimestampWithTimezone,
    Unknown(i32),
}

impl RemoteTypeCode {
    pub fn from_code(code: i32) -> Self {
        match code {
            -7 => Self::Bit,
            -6 => Self::TinyInt,
            5 => Self::SmallInt,
            4 => Self::Integer,
            -5 => Self::BigInt,
            6 => Self::Float,
            7 => Self::Real,
            8 => Self::Double,
            2 => Self::Numeric,
            3 => Self::Decimal,
            1 => Self::Char,
            12 => Self::Varchar,
            -1 => Self::LongVarchar,
            91 => Self::Date,
            92 => Self::Time,
            93 => Self::Timestamp,
            -2 => Self::Binary,
            -3 => Self::VarBinary,
            -4 => Self::LongVarBinary,
            0 => Self::Null,
            1111 => Self::Other,
            2000 => Self::JavaObject,
            2001 => Self::Distinct,
            2002 => Self::Struct,
            2003 => Self::Array,
            2004 => Self::Blob,
            2005 => Self::Clob,
            2006 => Self::Ref,
            70 => Self::DataLink,
            16 => Self::Boolean,
            -8 => Self::RowId,
            -15 => Self::NChar,
            -9 => Self::NVarchar,
            -16 => Self::LongNVarchar,
            2011 => Self::NClob,
            2009 => Self::SqlXml,
            2012 => Self::RefCursor,
            2013 => Self::TimeWithTimezone,
            2014 => Self::TimestampWithTimezone,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::Bit => -7,
            Self::TinyInt => -6,
            Self::SmallInt => 5,
            Self::Integer => 4,
            Self::BigInt => -5,
            Self::Float => 6,
            Self::Real => 7,
            Self::Double => 8,
            Self::Numeric => 2,
            Self::Decimal => 3,
            Self::Char => 1,
            Self::Varchar => 12,
            Self::LongVarchar => -1,
            Self::Date => 91,
            Self::Time => 92,
            Self::Timestamp => 93,
            Self::Binary => -2,
            Self::VarBinary => -3,
            Self::LongVarBinary => -4,
            Self::Null => 0,
            Self::Other => 1111,
            Self::JavaObject => 2000,
            Self::Distinct => 2001,
            Self::Struct => 2002,
            Self::Array => 2003,
            Self::Blob => 2004,
            Self::Clob => 2005,
            Self::Ref => 2006,
            Self::DataLink => 70,
            Self::Boolean => 16,
            Self::RowId => -8,
            Self::NChar => -15,
            Self::NVarchar => -9,
            Self::LongNVarchar => -16,
            Self::NClob => 2011,
            Self::SqlXml => 2009,
            Self::RefCursor => 2012,
            Self::TimeWithTimezone => 2013,
            Self::TimestampWithTimezone => 2014,
            Self::Unknown(code) => *code,
        }
    }
}

/// What the remote catalog says about one column's type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoteTypeDescriptor {
    pub type_code: i32,
    pub type_name: String,
    pub precision_or_size: i32,
    pub decimal_scale: i32,
}

impl RemoteTypeDescriptor {
    pub fn new(type_code: i32, type_name: impl Into<String>) -> Self {
        Self {
            type_code,
            type_name: type_name.into(),
            precision_or_size: 0,
            decimal_scale: 0,
        }
    }

    pub fn with_size(mut self, precision_or_size: i32) -> Self {
        self.precision_or_size = precision_or_size;
        self
    }

    pub fn with_scale(mut self, decimal_scale: i32) -> Self {
        self.decimal_scale = decimal_scale;
        self
    }

    pub fn code(&self) -> RemoteTypeCode {
        RemoteTypeCode::from_code(self.type_code)
    }
}
