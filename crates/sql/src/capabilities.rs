//! Capability declaration.
//!
//! A dialect announces which query features the remote engine executes
//! natively. The federation engine only pushes down what is declared here.

use crate::ast::{AggregateFunction, ScalarFunction};
use crate::macros::named_enum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

named_enum! {
    pub enum MainCapability {
        SelectlistProjection => "SELECTLIST_PROJECTION",
        SelectlistExpressions => "SELECTLIST_EXPRESSIONS",
        FilterExpressions => "FILTER_EXPRESSIONS",
        AggregateSingleGroup => "AGGREGATE_SINGLE_GROUP",
        AggregateGroupByColumn => "AGGREGATE_GROUP_BY_COLUMN",
        AggregateGroupByExpression => "AGGREGATE_GROUP_BY_EXPRESSION",
        AggregateGroupByTuple => "AGGREGATE_GROUP_BY_TUPLE",
        AggregateHaving => "AGGREGATE_HAVING",
        OrderByColumn => "ORDER_BY_COLUMN",
        OrderByExpression => "ORDER_BY_EXPRESSION",
        Limit => "LIMIT",
        LimitWithOffset => "LIMIT_WITH_OFFSET",
        Join => "JOIN",
        JoinTypeInner => "JOIN_TYPE_INNER",
        JoinTypeLeftOuter => "JOIN_TYPE_LEFT_OUTER",
        JoinTypeRightOuter => "JOIN_TYPE_RIGHT_OUTER",
        JoinTypeFullOuter => "JOIN_TYPE_FULL_OUTER",
        JoinConditionEqui => "JOIN_CONDITION_EQUI",
        JoinConditionAll => "JOIN_CONDITION_ALL",
    }
}

named_enum! {
    pub enum PredicateCapability {
        And => "AND",
        Or => "OR",
        Not => "NOT",
        Equal => "EQUAL",
        NotEqual => "NOTEQUAL",
        Less => "LESS",
        LessEqual => "LESSEQUAL",
        Like => "LIKE",
        LikeEscape => "LIKE_ESCAPE",
        RegexpLike => "REGEXP_LIKE",
        Between => "BETWEEN",
        InConstList => "IN_CONSTLIST",
        IsNull => "IS_NULL",
        IsNotNull => "IS_NOT_NULL",
        IsJson => "IS_JSON",
        IsNotJson => "IS_NOT_JSON",
    }
}

named_enum! {
    pub enum LiteralCapability {
        Null => "NULL",
        Bool => "BOOL",
        Date => "DATE",
        Timestamp => "TIMESTAMP",
        TimestampUtc => "TIMESTAMP_UTC",
        Double => "DOUBLE",
        ExactNumeric => "EXACTNUMERIC",
        String => "STRING",
        Interval => "INTERVAL",
    }
}

named_enum! {
    pub enum AggregateFunctionCapability {
        Count => "COUNT",
        CountStar => "COUNT_STAR",
        CountDistinct => "COUNT_DISTINCT",
        CountTuple => "COUNT_TUPLE",
        Sum => "SUM",
        SumDistinct => "SUM_DISTINCT",
        Min => "MIN",
        Max => "MAX",
        Avg => "AVG",
        AvgDistinct => "AVG_DISTINCT",
        Median => "MEDIAN",
        FirstValue => "FIRST_VALUE",
        LastValue => "LAST_VALUE",
        Stddev => "STDDEV",
        StddevDistinct => "STDDEV_DISTINCT",
        StddevPop => "STDDEV_POP",
        StddevPopDistinct => "STDDEV_POP_DISTINCT",
        StddevSamp => "STDDEV_SAMP",
        StddevSampDistinct => "STDDEV_SAMP_DISTINCT",
        Variance => "VARIANCE",
        VarianceDistinct => "VARIANCE_DISTINCT",
        VarPop => "VAR_POP",
        VarPopDistinct => "VAR_POP_DISTINCT",
        VarSamp => "VAR_SAMP",
        VarSampDistinct => "VAR_SAMP_DISTINCT",
        GroupConcat => "GROUP_CONCAT",
        ApproximateCountDistinct => "APPROXIMATE_COUNT_DISTINCT",
        Every => "EVERY",
        Some => "SOME",
    }
}

impl AggregateFunctionCapability {
    /// Capability a concrete aggregate call needs, or `None` if no capability covers it.
    pub fn required_for(function: AggregateFunction, distinct: bool, arity: usize) -> Option<Self> {
        use AggregateFunction as F;
        use AggregateFunctionCapability as C;

        let capability = match (function, distinct) {
            (F::Count, false) if arity == 0 => C::CountStar,
            (F::Count, false) if arity > 1 => C::CountTuple,
            (F::Count, false) => C::Count,
            (F::Count, true) => C::CountDistinct,
            (F::Sum, false) => C::Sum,
            (F::Sum, true) => C::SumDistinct,
            (F::Min, _) => C::Min,
            (F::Max, _) => C::Max,
            (F::Avg, false) => C::Avg,
            (F::Avg, true) => C::AvgDistinct,
            (F::Median, false) => C::Median,
            (F::FirstValue, false) => C::FirstValue,
            (F::LastValue, false) => C::LastValue,
            (F::Stddev, false) => C::Stddev,
            (F::Stddev, true) => C::StddevDistinct,
            (F::StddevPop, false) => C::StddevPop,
            (F::StddevPop, true) => C::StddevPopDistinct,
            (F::StddevSamp, false) => C::StddevSamp,
            (F::StddevSamp, true) => C::StddevSampDistinct,
            (F::Variance, false) => C::Variance,
            (F::Variance, true) => C::VarianceDistinct,
            (F::VarPop, false) => C::VarPop,
            (F::VarPop, true) => C::VarPopDistinct,
            (F::VarSamp, false) => C::VarSamp,
            (F::VarSamp, true) => C::VarSampDistinct,
            (F::ApproximateCountDistinct, _) => C::ApproximateCountDistinct,
            (F::Every, false) => C::Every,
            (F::Some, false) => C::Some,
            _ => return None,
        };
        Some(capability)
    }
}

/// Immutable set of everything a dialect can push down.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    main: BTreeSet<MainCapability>,
    predicates: BTreeSet<PredicateCapability>,
    literals: BTreeSet<LiteralCapability>,
    aggregate_functions: BTreeSet<AggregateFunctionCapability>,
    scalar_functions: BTreeSet<ScalarFunction>,
}

impl Capabilities {
    pub fn builder() -> CapabilitiesBuilder {
        CapabilitiesBuilder::default()
    }

    pub fn supports_main(&self, capability: MainCapability) -> bool {
        self.main.contains(&capability)
    }

    pub fn supports_predicate(&self, capability: PredicateCapability) -> bool {
        self.predicates.contains(&capability)
    }

    pub fn supports_literal(&self, capability: LiteralCapability) -> bool {
        self.literals.contains(&capability)
    }

    pub fn supports_aggregate_function(&self, capability: AggregateFunctionCapability) -> bool {
        self.aggregate_functions.contains(&capability)
    }

    pub fn supports_scalar_function(&self, function: ScalarFunction) -> bool {
        self.scalar_functions.contains(&function)
    }

    pub fn main_capabilities(&self) -> &BTreeSet<MainCapability> {
        &self.main
    }

    pub fn predicate_capabilities(&self) -> &BTreeSet<PredicateCapability> {
        &self.predicates
    }

    pub fn literal_capabilities(&self) -> &BTreeSet<LiteralCapability> {
        &self.literals
    }

    pub fn aggregate_function_capabilities(&self) -> &BTreeSet<AggregateFunctionCapability> {
        &self.aggregate_functions
    }

    pub fn scalar_function_capabilities(&self) -> &BTreeSet<ScalarFunction> {
        &self.scalar_functions
    }
}

#[derive(Debug, Default)]
pub struct CapabilitiesBuilder {
    inner: Capabilities,
}

impl CapabilitiesBuilder {
    pub fn main(mut self, capabilities: impl IntoIterator<Item = MainCapability>) -> Self {
        self.inner.main.extend(capabilities);
        self
    }

    pub fn predicates(
        mut self,
        capabilities: impl IntoIterator<Item = PredicateCapability>,
    ) -> Self {
        self.inner.predicates.extend(capabilities);
        self
    }

    pub fn literals(mut self, capabilities: impl IntoIterator<Item = LiteralCapability>) -> Self {
        self.inner.literals.extend(capabilities);
        self
    }

    pub fn aggregate_functions(
        mut self,
        capabilities: impl IntoIterator<Item = AggregateFunctionCapability>,
    ) -> Self {
        self.inner.aggregate_functions.extend(capabilities);
        self
    }

    pub fn scalar_functions(mut self, functions: impl IntoIterator<Item = ScalarFunction>) -> Self {
        self.inner.scalar_functions.extend(functions);
        self
    }

    pub fn build(self) -> Capabilities {
        self.inner
    }
}
