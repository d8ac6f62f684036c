use crate::ast::ScalarFunction;
use crate::capabilities::{
    AggregateFunctionCapability, Capabilities, LiteralCapability, MainCapability,
    PredicateCapability,
};

const MAIN_CAPABILITIES: &[MainCapability] = &[
    MainCapability::SelectlistProjection,
    MainCapability::SelectlistExpressions,
    MainCapability::FilterExpressions,
    MainCapability::AggregateSingleGroup,
    MainCapability::AggregateGroupByColumn,
    MainCapability::AggregateGroupByExpression,
    MainCapability::AggregateGroupByTuple,
    MainCapability::AggregateHaving,
    MainCapability::OrderByColumn,
    MainCapability::OrderByExpression,
    MainCapability::Limit,
    MainCapability::LimitWithOffset,
    MainCapability::Join,
    MainCapability::JoinTypeInner,
    MainCapability::JoinTypeLeftOuter,
    MainCapability::JoinTypeRightOuter,
    MainCapability::JoinTypeFullOuter,
    MainCapability::JoinConditionEqui,
];

const PREDICATE_CAPABILITIES: &[PredicateCapability] = &[
    PredicateCapability::And,
    PredicateCapability::Or,
    PredicateCapability::Not,
    PredicateCapability::Equal,
    PredicateCapability::NotEqual,
    PredicateCapability::Less,
    PredicateCapability::LessEqual,
    PredicateCapability::Like,
    PredicateCapability::LikeEscape,
    PredicateCapability::Between,
    PredicateCapability::RegexpLike,
    PredicateCapability::InConstList,
    PredicateCapability::IsNull,
    PredicateCapability::IsNotNull,
];

const LITERAL_CAPABILITIES: &[LiteralCapability] = &[
    LiteralCapability::Bool,
    LiteralCapability::Null,
    LiteralCapability::Date,
    LiteralCapability::Timestamp,
    LiteralCapability::TimestampUtc,
    LiteralCapability::Double,
    LiteralCapability::ExactNumeric,
    LiteralCapability::String,
];

const AGGREGATE_FUNCTION_CAPABILITIES: &[AggregateFunctionCapability] = &[
    AggregateFunctionCapability::Count,
    AggregateFunctionCapability::CountStar,
    AggregateFunctionCapability::CountDistinct,
    AggregateFunctionCapability::Sum,
    AggregateFunctionCapability::SumDistinct,
    AggregateFunctionCapability::Min,
    AggregateFunctionCapability::Max,
    AggregateFunctionCapability::Avg,
    AggregateFunctionCapability::AvgDistinct,
    AggregateFunctionCapability::Median,
    AggregateFunctionCapability::FirstValue,
    AggregateFunctionCapability::LastValue,
    AggregateFunctionCapability::Stddev,
    AggregateFunctionCapability::StddevDistinct,
    AggregateFunctionCapability::StddevPop,
    AggregateFunctionCapability::StddevPopDistinct,
    AggregateFunctionCapability::StddevSamp,
    AggregateFunctionCapability::StddevSampDistinct,
    AggregateFunctionCapability::Variance,
    AggregateFunctionCapability::VarianceDistinct,
    AggregateFunctionCapability::VarPop,
    AggregateFunctionCapability::VarPopDistinct,
    AggregateFunctionCapability::VarSamp,
    AggregateFunctionCapability::VarSampDistinct,
    AggregateFunctionCapability::GroupConcat,
];

/// Scalar functions withheld from pushdown even though PostgreSQL has something similar.
pub const DISABLED_SCALAR_FUNCTIONS: &[ScalarFunction] = &[
    // implementation is very hard
    ScalarFunction::SecondsBetween,
    ScalarFunction::MinutesBetween,
    ScalarFunction::HoursBetween,
    ScalarFunction::DaysBetween,
    ScalarFunction::MonthsBetween,
    ScalarFunction::YearsBetween,
    // PostgreSQL rounds 0.5 down while the federation engine rounds it up
    ScalarFunction::Round,
    // precision issues
    ScalarFunction::Second,
    // no PostgreSQL equivalent
    ScalarFunction::ColognePhonetic,
    // fails for boolean, PostgreSQL renders booleans differently as text
    ScalarFunction::Concat,
    // not implemented, strpos could probably cover it
    ScalarFunction::Instr,
    // does not respect the session time zone of the federation engine
    ScalarFunction::PosixTime,
    // simply not implemented
    ScalarFunction::Dump,
    ScalarFunction::EditDistance,
    ScalarFunction::Insert,
    ScalarFunction::Locate,
    ScalarFunction::RegexpInstr,
    ScalarFunction::RegexpSubstr,
    ScalarFunction::Soundex,
    ScalarFunction::Space,
    ScalarFunction::Unicode,
    ScalarFunction::Unicodechr,
    ScalarFunction::Dbtimezone,
    ScalarFunction::FromPosixTime,
    ScalarFunction::Hour,
    ScalarFunction::Sessiontimezone,
    ScalarFunction::IsNumber,
    ScalarFunction::IsBoolean,
    ScalarFunction::IsDate,
    ScalarFunction::IsDsinterval,
    ScalarFunction::IsYminterval,
    ScalarFunction::IsTimestamp,
    ScalarFunction::ToChar,
    ScalarFunction::ToDate,
    ScalarFunction::ToNumber,
    ScalarFunction::ToTimestamp,
    ScalarFunction::BitAnd,
    ScalarFunction::BitCheck,
    ScalarFunction::BitLrotate,
    ScalarFunction::BitLshift,
    ScalarFunction::BitNot,
    ScalarFunction::BitOr,
    ScalarFunction::BitRrotate,
    ScalarFunction::BitRshift,
    ScalarFunction::BitSet,
    ScalarFunction::BitToNum,
    ScalarFunction::BitXor,
    ScalarFunction::HashtypeMd5,
    ScalarFunction::HashSha1,
    ScalarFunction::HashtypeSha1,
    ScalarFunction::HashSha256,
    ScalarFunction::HashtypeSha256,
    ScalarFunction::HashSha512,
    ScalarFunction::HashtypeSha512,
    ScalarFunction::HashTiger,
    ScalarFunction::HashtypeTiger,
    ScalarFunction::Nullifzero,
    ScalarFunction::Zeroifnull,
    ScalarFunction::MinScale,
    ScalarFunction::Numtoyminterval,
    ScalarFunction::JsonValue,
    ScalarFunction::ToDsinterval,
    ScalarFunction::ConvertTz,
    ScalarFunction::Numtodsinterval,
    ScalarFunction::ToYminterval,
    ScalarFunction::Cast,
    ScalarFunction::SysGuid,
    ScalarFunction::Systimestamp,
    ScalarFunction::CurrentStatement,
    ScalarFunction::CurrentUser,
    ScalarFunction::Sysdate,
    ScalarFunction::CurrentSession,
];

/// Every known scalar function except geospatial ones and the disabled list.
fn enabled_scalar_functions() -> impl Iterator<Item = ScalarFunction> {
    ScalarFunction::ALL
        .iter()
        .copied()
        .filter(|f| !f.is_geospatial() && !DISABLED_SCALAR_FUNCTIONS.contains(f))
}

pub(crate) fn postgres_capabilities() -> Capabilities {
    Capabilities::builder()
        .main(MAIN_CAPABILITIES.iter().copied())
        .predicates(PREDICATE_CAPABILITIES.iter().copied())
        .literals(LITERAL_CAPABILITIES.iter().copied())
        .aggregate_functions(AGGREGATE_FUNCTION_CAPABILITIES.iter().copied())
        .scalar_functions(enabled_scalar_functions())
        .build()
}
