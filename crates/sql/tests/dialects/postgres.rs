//! PostgreSQL dialect surface as the federation engine sees it.

use crate::fixtures::*;
use pgvs_sql::capabilities::{LiteralCapability, MainCapability, PredicateCapability};
use pgvs_sql::metadata::{CanonicalType, Charset, RemoteTypeDescriptor};
use pgvs_sql::sql_generator::{NullSorting, SqlDialect};

#[test]
fn test_dialect_identity() {
    with_dialect!(dialect, ctx, {
        assert_eq!(dialect.name(), "POSTGRESQL");
        assert_eq!(dialect.default_null_sorting(), NullSorting::High);
        assert!(dialect.requires_schema_qualified_table_names(&ctx));
        assert!(!dialect.requires_catalog_qualified_table_names(&ctx));
        assert_eq!(ctx.schema_name.as_deref(), Some("test_schema"));
    });
}

#[test]
fn test_quoting_follows_identifier_mapping() {
    with_dialect!(dialect, _ctx, {
        assert_eq!(dialect.quote_identifier("ABC").to_string(), "\"abc\"");
        assert_eq!(dialect.quote_identifier("AbCde").to_string(), "\"abcde\"");
        assert_eq!(dialect.quote_identifier("\"tableName").to_string(), "\"\"\"tablename\"");
    });
    with_dialect!(dialect, _ctx, [IDENTIFIER_MAPPING_PROPERTY => "PRESERVE_ORIGINAL_CASE"], {
        assert_eq!(dialect.quote_identifier("AbCde").to_string(), "\"AbCde\"");
    });
}

#[test]
fn test_capabilities() {
    with_dialect!(dialect, _ctx, {
        let capabilities = dialect.capabilities();
        for main in [
            MainCapability::SelectlistProjection,
            MainCapability::FilterExpressions,
            MainCapability::AggregateGroupByExpression,
            MainCapability::OrderByExpression,
            MainCapability::Limit,
            MainCapability::LimitWithOffset,
            MainCapability::JoinTypeInner,
        ] {
            assert!(capabilities.supports_main(main), "{}", main);
        }
        assert!(capabilities.supports_predicate(PredicateCapability::Like));
        assert!(capabilities.supports_literal(LiteralCapability::String));
        assert!(!capabilities.supports_scalar_function(ScalarFunction::Round));
        assert!(!capabilities.supports_scalar_function(ScalarFunction::StX));
        assert!(capabilities.supports_scalar_function(ScalarFunction::AddDays));
    });
}

#[test]
fn test_capabilities_serialize_with_wire_names() {
    with_dialect!(dialect, _ctx, {
        let json = serde_json::to_value(dialect.capabilities()).unwrap();
        let scalar = json["scalar_functions"].as_array().unwrap();
        assert!(scalar.iter().any(|v| v == "ADD_DAYS"));
        assert!(!scalar.iter().any(|v| v == "ROUND"));
    });
}

#[test]
fn test_remote_type_mapping() {
    with_dialect!(dialect, _ctx, {
        let cases = [
            (RemoteTypeDescriptor::new(16, "bool"), CanonicalType::Boolean),
            (
                RemoteTypeDescriptor::new(1111, "varbit").with_size(0),
                CanonicalType::MaxCharacter {
                    charset: Charset::Utf8,
                },
            ),
            (
                RemoteTypeDescriptor::new(2009, "xml"),
                CanonicalType::max_varchar_utf8(),
            ),
            (
                RemoteTypeDescriptor::new(12, "varchar").with_size(40),
                CanonicalType::Character {
                    length: 40,
                    charset: Charset::Utf8,
                },
            ),
            (
                RemoteTypeDescriptor::new(2, "numeric").with_size(40).with_scale(2),
                CanonicalType::Double,
            ),
            (RemoteTypeDescriptor::new(8, "float8"), CanonicalType::Double),
            (RemoteTypeDescriptor::new(91, "date"), CanonicalType::Date),
        ];
        for (descriptor, expected) in cases {
            assert_eq!(dialect.map_remote_type(&descriptor), expected, "{:?}", descriptor);
        }
    });
}
