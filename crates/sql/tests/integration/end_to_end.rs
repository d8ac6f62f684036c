use crate::fixtures::*;
use anyhow::{Context, Result};
use pgvs_sql::dialects::postgres::{
    SERIAL_TYPE_CASTS, TYPE_NAMES_CAST_TO_VARCHAR, TYPE_NAMES_NOT_SUPPORTED,
};
use pgvs_sql::metadata::{ColumnMetadata, RemoteColumn, RemoteTable, RemoteTypeDescriptor};

fn user_id() -> SqlNode {
    column(0, "USER_ID", 4, "int4").into()
}

fn url() -> SqlNode {
    column(1, "URL", 12, "varchar").into()
}

fn count(argument: SqlNode) -> SqlNode {
    SqlNode::aggregate(AggregateFunction::Count, vec![argument], false)
}

fn select_from_clicks(select_list: SqlSelectList) -> SqlStatementSelect {
    SqlStatementSelect::new(select_list, clicks_table())
}

#[test]
fn test_full_select_statement() {
    with_dialect!(dialect, ctx, {
        let statement = select_from_clicks(SqlSelectList::Expressions(vec![
            user_id(),
            count(url()),
        ]))
        .with_where(SqlPredicate::Less(SqlNode::exact_numeric(1), user_id()))
        .with_group_by(SqlGroupBy {
            expressions: vec![user_id()],
        })
        .with_having(SqlPredicate::Less(SqlNode::exact_numeric(1), count(url())))
        .with_order_by(SqlOrderBy::ascending(vec![user_id()]))
        .with_limit(SqlLimit::new(10));

        let sql = dialect.compile(&statement.into(), &ctx).unwrap();
        assert_eq!(
            sql,
            "SELECT \"user_id\", COUNT(\"url\") FROM \"test_schema\".\"clicks\" \
             WHERE 1 < \"user_id\" GROUP BY \"user_id\" HAVING 1 < COUNT(\"url\") \
             ORDER BY \"user_id\" LIMIT 10"
        );
        assert_parses(&sql);
    });
}

#[test]
fn test_preserve_case_keeps_identifiers() {
    with_dialect!(dialect, ctx, [IDENTIFIER_MAPPING_PROPERTY => "PRESERVE_ORIGINAL_CASE"], {
        let table = typed_table("MixedCase", &[("Id", 4, "int4")]);
        let statement = SqlStatementSelect::new(
            SqlSelectList::Expressions(vec![column(0, "Id", 4, "int4").into()]),
            table,
        );
        let sql = dialect.compile(&statement.into(), &ctx).unwrap();
        assert_eq!(sql, "SELECT \"Id\" FROM \"test_schema\".\"MixedCase\"");
    });
}

#[test]
fn test_any_value_selects_constant() {
    with_dialect!(dialect, ctx, {
        let sql = dialect
            .compile(&select_from_clicks(SqlSelectList::AnyValue).into(), &ctx)
            .unwrap();
        assert_eq!(sql, "SELECT 1 FROM \"test_schema\".\"clicks\"");
    });
}

#[test]
fn test_wildcard_stays_when_no_cast_needed() {
    with_dialect!(dialect, ctx, {
        let sql = dialect
            .compile(&select_from_clicks(SqlSelectList::Wildcard).into(), &ctx)
            .unwrap();
        assert_eq!(sql, "SELECT * FROM \"test_schema\".\"clicks\"");
    });
}

#[test]
fn test_wildcard_expands_with_casts() {
    with_dialect!(dialect, ctx, {
        let table = typed_table(
            "EVENTS",
            &[
                ("ID", 4, "serial"),
                ("PAYLOAD", 1111, "jsonb"),
                ("RAW", -2, "bytea"),
                ("NAME", 12, "varchar"),
            ],
        );
        let statement = SqlStatementSelect::new(SqlSelectList::Wildcard, table);
        let sql = dialect.compile(&statement.into(), &ctx).unwrap();
        assert_eq!(
            sql,
            "SELECT CAST(\"id\" AS INTEGER), CAST(\"payload\" AS VARCHAR), \
             CAST('bytea NOT SUPPORTED' AS VARCHAR) AS not_supported, \"name\" \
             FROM \"test_schema\".\"events\""
        );
        assert_parses(&sql);
    });
}

#[test]
fn test_wildcard_over_join_qualifies_columns() {
    with_dialect!(dialect, ctx, {
        let left = typed_table("A", &[("ID", 4, "int4"), ("DOC", 1111, "json")]).with_alias("A");
        let right = typed_table("B", &[("ID", 4, "int4")]).with_alias("B2");
        let condition = SqlPredicate::Equal(
            column(0, "ID", 4, "int4").with_table_alias("A").into(),
            column(0, "ID", 4, "int4").with_table_alias("B2").into(),
        );
        let join = SqlJoin {
            join_type: JoinType::Inner,
            left: left.into(),
            right: right.into(),
            condition: condition.into(),
        };
        let statement = SqlStatementSelect::new(SqlSelectList::Wildcard, join);
        let sql = dialect.compile(&statement.into(), &ctx).unwrap();
        assert_eq!(
            sql,
            "SELECT \"a\".\"id\", CAST(\"a\".\"doc\" AS VARCHAR), \"b2\".\"id\" \
             FROM \"test_schema\".\"a\" INNER JOIN \"test_schema\".\"b\" AS \"b2\" \
             ON \"a\".\"id\" = \"b2\".\"id\""
        );
        assert_parses(&sql);
    });
}

#[test]
fn test_every_listed_remote_type_gets_its_projection() {
    with_dialect!(dialect, ctx, {
        let mut expectations: Vec<(&str, String)> = Vec::new();
        for &type_name in TYPE_NAMES_CAST_TO_VARCHAR {
            expectations.push((type_name, "CAST(\"value\" AS VARCHAR)".to_string()));
        }
        for &(type_name, target) in SERIAL_TYPE_CASTS {
            expectations.push((type_name, format!("CAST(\"value\" AS {})", target)));
        }
        for &type_name in TYPE_NAMES_NOT_SUPPORTED {
            expectations.push((
                type_name,
                format!("CAST('{} NOT SUPPORTED' AS VARCHAR) AS not_supported", type_name),
            ));
        }

        for (type_name, projection) in expectations {
            let table = typed_table("T", &[("VALUE", 1111, type_name)]);
            for select_list in [
                SqlSelectList::Wildcard,
                SqlSelectList::Expressions(vec![column(0, "VALUE", 1111, type_name).into()]),
            ] {
                let statement = SqlStatementSelect::new(select_list, table.clone());
                let sql = dialect.compile(&statement.into(), &ctx).unwrap();
                assert_eq!(
                    sql,
                    format!("SELECT {} FROM \"test_schema\".\"t\"", projection),
                    "{}",
                    type_name
                );
                if TYPE_NAMES_NOT_SUPPORTED.contains(&type_name) {
                    assert!(!sql.contains("\"value\""), "{}", sql);
                }
                assert_parses(&sql);
            }
        }
    });
}

#[test]
fn test_negation_never_forms_a_line_comment() {
    with_dialect!(dialect, ctx, {
        let negated = SqlNode::scalar(ScalarFunction::Neg, vec![SqlNode::exact_numeric(-5)]);
        let statement = select_from_clicks(SqlSelectList::Expressions(vec![negated.clone()]))
            .with_where(SqlPredicate::Less(negated, user_id()));
        let sql = dialect.compile(&statement.into(), &ctx).unwrap();
        assert_eq!(
            sql,
            "SELECT -(-5) FROM \"test_schema\".\"clicks\" WHERE -(-5) < \"user_id\""
        );
        assert!(!sql.contains("--"));
        assert_parses(&sql);

        let twice = SqlNode::scalar(
            ScalarFunction::Neg,
            vec![SqlNode::scalar(ScalarFunction::Neg, vec![user_id()])],
        );
        let statement = select_from_clicks(SqlSelectList::Expressions(vec![twice]))
            .with_where(SqlPredicate::IsNotNull(user_id()));
        let sql = dialect.compile(&statement.into(), &ctx).unwrap();
        assert_eq!(
            sql,
            "SELECT -(-(\"user_id\")) FROM \"test_schema\".\"clicks\" WHERE \"user_id\" IS NOT NULL"
        );
        assert!(!sql.contains("--"));
        assert_parses(&sql);
    });
}

#[test]
fn test_projected_columns_are_cast_individually() {
    with_dialect!(dialect, ctx, {
        let table = typed_table("T", &[("U", 1111, "uuid"), ("N", 4, "int4")]);
        let statement = SqlStatementSelect::new(
            SqlSelectList::Expressions(vec![
                column(0, "U", 1111, "uuid").into(),
                column(1, "N", 4, "int4").into(),
            ]),
            table,
        )
        .with_where(SqlPredicate::IsNotNull(column(0, "U", 1111, "uuid").into()));
        let sql = dialect.compile(&statement.into(), &ctx).unwrap();
        assert_eq!(
            sql,
            "SELECT CAST(\"u\" AS VARCHAR), \"n\" FROM \"test_schema\".\"t\" WHERE \"u\" IS NOT NULL"
        );
    });
}

#[test]
fn test_date_increment_uses_make_interval() {
    with_dialect!(dialect, ctx, {
        let node = SqlNode::scalar(
            ScalarFunction::AddDays,
            vec![
                column(0, "test_column", 91, "date").into(),
                SqlNode::exact_numeric(10),
            ],
        );
        assert_eq!(
            dialect.compile(&node, &ctx).unwrap(),
            "\"test_column\" + make_interval(days => 10)"
        );
    });
}

#[test]
fn test_group_concat_becomes_string_agg() {
    with_dialect!(dialect, ctx, {
        let node: SqlNode = SqlFunctionAggregateGroupConcat {
            argument: SqlNode::string("test"),
            distinct: false,
            order_by: None,
            separator: Some("'".to_string()),
        }
        .into();
        assert_eq!(
            dialect.compile(&node, &ctx).unwrap(),
            "STRING_AGG(E'test', E'''')"
        );

        let node: SqlNode = SqlFunctionAggregateGroupConcat {
            argument: url(),
            distinct: true,
            order_by: Some(SqlOrderBy::ascending(vec![url()])),
            separator: None,
        }
        .into();
        assert_eq!(
            dialect.compile(&node, &ctx).unwrap(),
            "STRING_AGG(DISTINCT \"url\", ',')"
        );
    });
}

#[test]
fn test_string_literal_escaping() {
    with_dialect!(dialect, ctx, {
        for (value, expected) in [
            ("ab", "E'ab'"),
            ("a'b", "E'a''b'"),
            ("a''b", "E'a''''b'"),
            ("'ab'", "E'''ab'''"),
            ("a\\b", "E'a\\\\b'"),
            ("a\\'b", "E'a\\\\''b'"),
        ] {
            assert_eq!(dialect.compile(&SqlNode::string(value), &ctx).unwrap(), expected);
        }
    });
}

#[test]
fn test_order_by_descending_and_nulls() {
    with_dialect!(dialect, ctx, {
        let statement = select_from_clicks(SqlSelectList::Expressions(vec![user_id()]))
            .with_order_by(SqlOrderBy {
                items: vec![
                    SqlOrderByItem {
                        expression: user_id(),
                        ascending: false,
                        nulls_last: true,
                    },
                    SqlOrderByItem {
                        expression: url(),
                        ascending: true,
                        nulls_last: false,
                    },
                    SqlOrderByItem {
                        expression: url(),
                        ascending: false,
                        nulls_last: false,
                    },
                ],
            })
            .with_limit(SqlLimit::new(5).with_offset(20));
        let sql = dialect.compile(&statement.into(), &ctx).unwrap();
        assert!(sql.ends_with(
            "ORDER BY \"user_id\" DESC NULLS LAST, \"url\" NULLS FIRST, \"url\" DESC LIMIT 5 OFFSET 20"
        ));
        assert_parses(&sql);
    });
}

#[test]
fn test_predicates_render_through_dialect() {
    with_dialect!(dialect, ctx, {
        let predicate = SqlPredicate::And(vec![
            SqlPredicate::LikeRegexp {
                expression: url(),
                pattern: SqlNode::string("^http"),
            }
            .into(),
            SqlPredicate::Not(
                SqlPredicate::InConstList {
                    expression: user_id(),
                    values: vec![SqlNode::exact_numeric(1), SqlNode::exact_numeric(2)],
                }
                .into(),
            )
            .into(),
            SqlPredicate::Between {
                expression: user_id(),
                low: SqlNode::exact_numeric(0),
                high: SqlLiteral::Double(9.0).into(),
            }
            .into(),
        ]);
        assert_eq!(
            dialect.compile(&predicate.into(), &ctx).unwrap(),
            "(\"url\" ~ E'^http' AND NOT (\"user_id\" IN (1, 2)) AND \"user_id\" BETWEEN 0 AND 9.0)"
        );
    });
}

#[test]
fn test_scalar_functions() {
    with_dialect!(dialect, ctx, {
        let cases: Vec<(SqlNode, &str)> = vec![
            (
                SqlNode::scalar(ScalarFunction::Substr, vec![url(), SqlNode::exact_numeric(1)]),
                "SUBSTRING(\"url\", 1)",
            ),
            (
                SqlNode::scalar(ScalarFunction::Year, vec![column(0, "D", 91, "date").into()]),
                "DATE_PART('YEAR',\"d\")",
            ),
            (SqlNode::scalar(ScalarFunction::CurrentDate, vec![]), "CURRENT_DATE"),
            (
                SqlNode::scalar(ScalarFunction::Add, vec![user_id(), SqlNode::exact_numeric(1)]),
                "(\"user_id\" + 1)",
            ),
            (
                SqlNode::scalar(ScalarFunction::Upper, vec![url()]),
                "UPPER(\"url\")",
            ),
        ];
        for (node, expected) in cases {
            assert_eq!(dialect.compile(&node, &ctx).unwrap(), expected);
        }
    });
}

#[test]
fn test_case_extract_and_cast() {
    with_dialect!(dialect, ctx, {
        let case: SqlNode = SqlFunctionScalarCase {
            basis: None,
            branches: vec![SqlCaseBranch {
                when: SqlPredicate::IsNull(url()).into(),
                then: SqlNode::string("none"),
            }],
            else_result: Some(url()),
        }
        .into();
        assert_eq!(
            dialect.compile(&case, &ctx).unwrap(),
            "CASE WHEN \"url\" IS NULL THEN E'none' ELSE \"url\" END"
        );

        let extract: SqlNode = SqlFunctionScalarExtract {
            unit: "month".to_string(),
            argument: column(0, "D", 91, "date").into(),
        }
        .into();
        assert_eq!(
            dialect.compile(&extract, &ctx).unwrap(),
            "EXTRACT(MONTH FROM \"d\")"
        );

        let cast: SqlNode = SqlFunctionScalarCast {
            argument: user_id(),
            data_type: pgvs_sql::metadata::CanonicalType::max_varchar_utf8(),
        }
        .into();
        assert_eq!(
            dialect.compile(&cast, &ctx).unwrap(),
            "CAST(\"user_id\" AS VARCHAR(2000000))"
        );
    });
}

#[test]
fn test_generation_is_deterministic() {
    with_dialect!(dialect, ctx, {
        let statement: SqlNode = select_from_clicks(SqlSelectList::Wildcard)
            .with_where(SqlPredicate::Equal(url(), SqlNode::string("x")))
            .into();
        let first = dialect.compile(&statement, &ctx).unwrap();
        for _ in 0..5 {
            assert_eq!(dialect.compile(&statement, &ctx).unwrap(), first);
        }
    });
}

#[test]
fn test_columns_built_from_metadata_snapshot() -> Result<()> {
    with_dialect!(dialect, ctx, {
        let snapshot = dialect.read_metadata(&[RemoteTable::new(
            "clicks",
            vec![RemoteColumn::new(
                "user_id",
                RemoteTypeDescriptor::new(4, "int4").with_size(10),
            )],
        )])?;
        let table = snapshot.table("CLICKS").context("table is exposed")?.clone();
        let user_id: ColumnMetadata = table.column("USER_ID").context("column is folded")?.clone();
        let statement = SqlStatementSelect::new(
            SqlSelectList::Expressions(vec![SqlColumn::new(0, user_id).into()]),
            SqlTable::new(table),
        );
        assert_eq!(
            dialect.compile(&statement.into(), &ctx)?,
            "SELECT \"user_id\" FROM \"test_schema\".\"clicks\""
        );
    });
    Ok(())
}
