use crate::fixtures::*;
use pgvs_error::{ErrorCode, ErrorContext};
use pgvs_sql::metadata::{CanonicalType, ColumnMetadata, TableMetadata};

fn broken_column() -> SqlColumn {
    SqlColumn::new(
        0,
        ColumnMetadata::new("TS", "{not json", CanonicalType::Date),
    )
}

#[test]
fn test_unreadable_adapter_notes_abort_generation() {
    with_dialect!(dialect, ctx, {
        let table = SqlTable::new(TableMetadata::new("T", vec![broken_column().metadata]));
        let statement = SqlStatementSelect::new(
            SqlSelectList::Expressions(vec![broken_column().into()]),
            table,
        );
        let err = dialect.compile(&statement.into(), &ctx).unwrap_err();
        assert_eq!(err.code, ErrorCode::ColumnTypeUnresolved);
        assert!(err.is_generation_error());
        assert!(matches!(
            err.context,
            Some(ErrorContext::Generation { ref dialect, .. }) if dialect == "POSTGRESQL"
        ));
    });
}

#[test]
fn test_unreadable_adapter_notes_in_wildcard() {
    with_dialect!(dialect, ctx, {
        let table = SqlTable::new(TableMetadata::new("T", vec![broken_column().metadata]));
        let statement = SqlStatementSelect::new(SqlSelectList::Wildcard, table);
        let err = dialect.compile(&statement.into(), &ctx).unwrap_err();
        assert_eq!(err.code, ErrorCode::ColumnTypeUnresolved);
    });
}

#[test]
fn test_unreadable_adapter_notes_outside_projection_are_fine() {
    with_dialect!(dialect, ctx, {
        let node: SqlNode = SqlPredicate::IsNull(broken_column().into()).into();
        assert_eq!(dialect.compile(&node, &ctx).unwrap(), "\"ts\" IS NULL");
    });
}

#[test]
fn test_interval_rewrite_with_wrong_arity() {
    with_dialect!(dialect, ctx, {
        let node = SqlNode::scalar(
            ScalarFunction::AddDays,
            vec![column(0, "D", 91, "date").into()],
        );
        let err = dialect.compile(&node, &ctx).unwrap_err();
        assert_eq!(err.code, ErrorCode::MalformedFunctionCall);
    });
}

#[test]
fn test_infix_operator_with_wrong_arity() {
    with_dialect!(dialect, ctx, {
        let node = SqlNode::scalar(ScalarFunction::Mult, vec![SqlNode::exact_numeric(2)]);
        let err = dialect.compile(&node, &ctx).unwrap_err();
        assert_eq!(err.code, ErrorCode::MalformedFunctionCall);
    });
}

#[test]
fn test_empty_connectives_are_rejected() {
    with_dialect!(dialect, ctx, {
        for predicate in [
            SqlPredicate::And(vec![]),
            SqlPredicate::Or(vec![]),
            SqlPredicate::InConstList {
                expression: SqlNode::exact_numeric(1),
                values: vec![],
            },
        ] {
            let err = dialect.compile(&predicate.into(), &ctx).unwrap_err();
            assert_eq!(err.code, ErrorCode::UnsupportedNode);
        }
    });
}

#[test]
fn test_from_clause_must_be_table_or_join() {
    with_dialect!(dialect, ctx, {
        let statement = SqlStatementSelect::new(SqlSelectList::Wildcard, SqlNode::exact_numeric(1));
        let err = dialect.compile(&statement.into(), &ctx).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedNode);
    });
}

#[test]
fn test_empty_select_list_is_rejected() {
    with_dialect!(dialect, ctx, {
        let statement = SqlStatementSelect::new(SqlSelectList::Expressions(vec![]), clicks_table());
        let err = dialect.compile(&statement.into(), &ctx).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnsupportedNode);
    });
}

#[test]
fn test_non_finite_doubles_are_cast() {
    with_dialect!(dialect, ctx, {
        let node: SqlNode = SqlLiteral::Double(f64::INFINITY).into();
        assert_eq!(
            dialect.compile(&node, &ctx).unwrap(),
            "CAST('Infinity' AS DOUBLE PRECISION)"
        );
    });
}

#[test]
fn test_configuration_errors() {
    init_tracing();
    let cases = [
        (properties().with("UNKNOWN_PROPERTY", "x"), ErrorCode::UnsupportedProperty),
        (
            pgvs_common::AdapterProperties::new().with("SCHEMA_NAME", "s"),
            ErrorCode::MissingRequiredProperty,
        ),
        (properties().with("SQL_DIALECT", "EXASOL"), ErrorCode::UnsupportedDialect),
        (
            properties().with(IDENTIFIER_MAPPING_PROPERTY, "convert_to_upper"),
            ErrorCode::InvalidIdentifierMapping,
        ),
        (
            properties().with("IGNORE_ERRORS", "POSTGRESQL_UPPERCASE_TABLES,OTHER"),
            ErrorCode::UnknownIgnoredError,
        ),
        (properties().with("LOG_LEVEL", "LOUD"), ErrorCode::InvalidLogLevel),
    ];
    for (properties, code) in cases {
        let err = PostgresDialect::new(properties).unwrap_err();
        assert_eq!(err.code, code, "{}", err);
        assert!(err.is_config_error());
        assert!(err.hint.is_some());
    }
}

#[test]
fn test_identifier_mapping_suggestion() {
    let err = PostgresDialect::new(properties().with(IDENTIFIER_MAPPING_PROPERTY, "CONVERT_TO_UPPR"))
        .unwrap_err();
    assert_eq!(err.hint.as_deref(), Some("Did you mean 'CONVERT_TO_UPPER'?"));
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn test_dialect_from_property_file() {
    let dialect = PostgresDialect::from_file(&fixture("adapter.yaml")).unwrap();
    assert_eq!(dialect.case_folding(), CaseFolding::PreserveOriginalCase);
    assert_eq!(dialect.generation_context().schema_name.as_deref(), Some("sales"));
    assert!(dialect.is_table_included("Audit").unwrap());
}

#[test]
fn test_malformed_property_file() {
    let path = fixture("nested.yaml");
    let err = PostgresDialect::from_file(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidConfigFile);
    assert_eq!(err.context, Some(ErrorContext::ConfigFile { file_path: path }));
}
