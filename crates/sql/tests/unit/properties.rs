//! Property-based checks for the dialect building blocks.

use pgvs_sql::ast::ScalarFunction;
use pgvs_sql::capabilities::AggregateFunctionCapability;
use pgvs_sql::dialects::postgres::{CaseFolding, PostgresTypeMapper, TableFilter, DISABLED_SCALAR_FUNCTIONS};
use pgvs_sql::metadata::{RemoteTypeDescriptor, TypeMapper, MAX_CHARACTER_LENGTH};
use pgvs_sql::PostgresDialect;
use proptest::prelude::*;

fn dialect() -> PostgresDialect {
    PostgresDialect::new(crate::common::properties()).expect("valid properties")
}

proptest! {
    #[test]
    fn fold_is_idempotent(name in "[A-Za-z_][A-Za-z0-9_ \"]{0,20}") {
        for folding in [CaseFolding::ConvertToUpper, CaseFolding::PreserveOriginalCase] {
            let once = folding.fold(&name);
            prop_assert_eq!(folding.fold(&once), once.clone());
            let column = folding.fold_column_name(&name);
            prop_assert_eq!(folding.fold_column_name(&column), column.clone());
        }
    }

    #[test]
    fn preserve_case_is_identity(name in "\\PC{0,24}") {
        let folding = CaseFolding::PreserveOriginalCase;
        prop_assert_eq!(folding.fold(&name), name.clone());
        prop_assert_eq!(folding.fold_column_name(&name), name.clone());
    }

    #[test]
    fn type_mapping_is_total_and_deterministic(
        code in prop::sample::select(vec![-7, -6, -5, -4, -3, -2, -1, 1, 2, 3, 4, 5, 6, 7, 8, 12, 16, 91, 92, 93, 1111, 2001, 2009, 2014]),
        size in -5i32..5_000_000,
        scale in -5i32..60,
        type_name in "[a-z0-9]{1,10}",
    ) {
        let mapper = PostgresTypeMapper::new();
        let descriptor = RemoteTypeDescriptor::new(code, type_name).with_size(size).with_scale(scale);
        let first = mapper.map_type(&descriptor);
        prop_assert_eq!(mapper.map_type(&descriptor), first);
        if let pgvs_sql::metadata::CanonicalType::Character { length, .. } = first {
            prop_assert!((1..=MAX_CHARACTER_LENGTH).contains(&length));
        }
    }

    #[test]
    fn lowercase_tables_are_always_included(name in "[a-z0-9_]{1,20}", ignore in any::<bool>()) {
        for folding in [CaseFolding::ConvertToUpper, CaseFolding::PreserveOriginalCase] {
            prop_assert!(TableFilter::new(folding, ignore).is_included(&name).unwrap());
        }
    }
}

#[test]
fn scalar_capabilities_exclude_exactly_the_disabled_set() {
    let dialect = dialect();
    let capabilities = dialect.capabilities();
    for function in DISABLED_SCALAR_FUNCTIONS {
        assert!(
            !capabilities.supports_scalar_function(*function),
            "{} must not be advertised",
            function
        );
    }
    for function in ScalarFunction::ALL {
        if !function.is_geospatial() && !DISABLED_SCALAR_FUNCTIONS.contains(function) {
            assert!(capabilities.supports_scalar_function(*function), "{}", function);
        }
    }
}

#[test]
fn advertised_aggregates_cover_what_generation_needs() {
    let dialect = dialect();
    let capabilities = dialect.capabilities();
    assert!(capabilities.supports_aggregate_function(AggregateFunctionCapability::GroupConcat));
    assert!(!capabilities.supports_aggregate_function(AggregateFunctionCapability::ApproximateCountDistinct));
    assert!(capabilities.supports_aggregate_function(AggregateFunctionCapability::CountStar));
}
