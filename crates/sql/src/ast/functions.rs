//! Function identities known to the federation engine.

use crate::macros::named_enum;

named_enum! {
    /// Every scalar function the engine can ask a dialect to push down.
    pub enum ScalarFunction {
        // numeric
        Abs => "ABS",
        Acos => "ACOS",
        Asin => "ASIN",
        Atan => "ATAN",
        Atan2 => "ATAN2",
        Ceil => "CEIL",
        Cos => "COS",
        Cosh => "COSH",
        Cot => "COT",
        Degrees => "DEGREES",
        Div => "DIV",
        Exp => "EXP",
        Floor => "FLOOR",
        Ln => "LN",
        Log => "LOG",
        MinScale => "MIN_SCALE",
        Mod => "MOD",
        Power => "POWER",
        Radians => "RADIANS",
        Rand => "RAND",
        Round => "ROUND",
        Sign => "SIGN",
        Sin => "SIN",
        Sinh => "SINH",
        Sqrt => "SQRT",
        Tan => "TAN",
        Tanh => "TANH",
        Trunc => "TRUNC",
        // string
        Ascii => "ASCII",
        BitLength => "BIT_LENGTH",
        Chr => "CHR",
        ColognePhonetic => "COLOGNE_PHONETIC",
        Concat => "CONCAT",
        Dump => "DUMP",
        EditDistance => "EDIT_DISTANCE",
        Initcap => "INITCAP",
        Insert => "INSERT",
        Instr => "INSTR",
        Length => "LENGTH",
        Locate => "LOCATE",
        Lower => "LOWER",
        Lpad => "LPAD",
        Ltrim => "LTRIM",
        OctetLength => "OCTET_LENGTH",
        RegexpInstr => "REGEXP_INSTR",
        RegexpReplace => "REGEXP_REPLACE",
        RegexpSubstr => "REGEXP_SUBSTR",
        Repeat => "REPEAT",
        Replace => "REPLACE",
        Reverse => "REVERSE",
        Right => "RIGHT",
        Rpad => "RPAD",
        Rtrim => "RTRIM",
        Soundex => "SOUNDEX",
        Space => "SPACE",
        Substr => "SUBSTR",
        Translate => "TRANSLATE",
        Trim => "TRIM",
        Unicode => "UNICODE",
        Unicodechr => "UNICODECHR",
        Upper => "UPPER",
        // date and time
        AddDays => "ADD_DAYS",
        AddHours => "ADD_HOURS",
        AddMinutes => "ADD_MINUTES",
        AddMonths => "ADD_MONTHS",
        AddSeconds => "ADD_SECONDS",
        AddWeeks => "ADD_WEEKS",
        AddYears => "ADD_YEARS",
        ConvertTz => "CONVERT_TZ",
        CurrentDate => "CURRENT_DATE",
        CurrentTimestamp => "CURRENT_TIMESTAMP",
        DateTrunc => "DATE_TRUNC",
        Day => "DAY",
        DaysBetween => "DAYS_BETWEEN",
        Dbtimezone => "DBTIMEZONE",
        Extract => "EXTRACT",
        FromPosixTime => "FROM_POSIX_TIME",
        Hour => "HOUR",
        HoursBetween => "HOURS_BETWEEN",
        Localtimestamp => "LOCALTIMESTAMP",
        Minute => "MINUTE",
        MinutesBetween => "MINUTES_BETWEEN",
        Month => "MONTH",
        MonthsBetween => "MONTHS_BETWEEN",
        Numtodsinterval => "NUMTODSINTERVAL",
        Numtoyminterval => "NUMTOYMINTERVAL",
        PosixTime => "POSIX_TIME",
        Second => "SECOND",
        SecondsBetween => "SECONDS_BETWEEN",
        Sessiontimezone => "SESSIONTIMEZONE",
        Sysdate => "SYSDATE",
        Systimestamp => "SYSTIMESTAMP",
        Week => "WEEK",
        Year => "YEAR",
        YearsBetween => "YEARS_BETWEEN",
        // geospatial
        StX => "ST_X",
        StY => "ST_Y",
        StEndpoint => "ST_ENDPOINT",
        StIsclosed => "ST_ISCLOSED",
        StIsring => "ST_ISRING",
        StLength => "ST_LENGTH",
        StNumpoints => "ST_NUMPOINTS",
        StPointn => "ST_POINTN",
        StStartpoint => "ST_STARTPOINT",
        StArea => "ST_AREA",
        StExteriorring => "ST_EXTERIORRING",
        StInteriorringn => "ST_INTERIORRINGN",
        StNuminteriorrings => "ST_NUMINTERIORRINGS",
        StGeometryn => "ST_GEOMETRYN",
        StNumgeometries => "ST_NUMGEOMETRIES",
        StBoundary => "ST_BOUNDARY",
        StBuffer => "ST_BUFFER",
        StCentroid => "ST_CENTROID",
        StContains => "ST_CONTAINS",
        StConvexhull => "ST_CONVEXHULL",
        StCrosses => "ST_CROSSES",
        StDifference => "ST_DIFFERENCE",
        StDimension => "ST_DIMENSION",
        StDisjoint => "ST_DISJOINT",
        StDistance => "ST_DISTANCE",
        StEnvelope => "ST_ENVELOPE",
        StEquals => "ST_EQUALS",
        StForce2d => "ST_FORCE2D",
        StGeometrytype => "ST_GEOMETRYTYPE",
        StIntersection => "ST_INTERSECTION",
        StIntersects => "ST_INTERSECTS",
        StIsempty => "ST_ISEMPTY",
        StIssimple => "ST_ISSIMPLE",
        StOverlaps => "ST_OVERLAPS",
        StSetsrid => "ST_SETSRID",
        StSymdifference => "ST_SYMDIFFERENCE",
        StTouches => "ST_TOUCHES",
        StTransform => "ST_TRANSFORM",
        StUnion => "ST_UNION",
        StWithin => "ST_WITHIN",
        // conversion
        Cast => "CAST",
        IsNumber => "IS_NUMBER",
        IsBoolean => "IS_BOOLEAN",
        IsDate => "IS_DATE",
        IsDsinterval => "IS_DSINTERVAL",
        IsYminterval => "IS_YMINTERVAL",
        IsTimestamp => "IS_TIMESTAMP",
        ToChar => "TO_CHAR",
        ToDate => "TO_DATE",
        ToDsinterval => "TO_DSINTERVAL",
        ToYminterval => "TO_YMINTERVAL",
        ToNumber => "TO_NUMBER",
        ToTimestamp => "TO_TIMESTAMP",
        // bitwise
        BitAnd => "BIT_AND",
        BitCheck => "BIT_CHECK",
        BitLrotate => "BIT_LROTATE",
        BitLshift => "BIT_LSHIFT",
        BitNot => "BIT_NOT",
        BitOr => "BIT_OR",
        BitRrotate => "BIT_RROTATE",
        BitRshift => "BIT_RSHIFT",
        BitSet => "BIT_SET",
        BitToNum => "BIT_TO_NUM",
        BitXor => "BIT_XOR",
        // other
        Case => "CASE",
        CurrentSchema => "CURRENT_SCHEMA",
        CurrentSession => "CURRENT_SESSION",
        CurrentStatement => "CURRENT_STATEMENT",
        CurrentUser => "CURRENT_USER",
        Greatest => "GREATEST",
        HashMd5 => "HASH_MD5",
        HashtypeMd5 => "HASHTYPE_MD5",
        HashSha1 => "HASH_SHA1",
        HashtypeSha1 => "HASHTYPE_SHA1",
        HashSha256 => "HASH_SHA256",
        HashtypeSha256 => "HASHTYPE_SHA256",
        HashSha512 => "HASH_SHA512",
        HashtypeSha512 => "HASHTYPE_SHA512",
        HashTiger => "HASH_TIGER",
        HashtypeTiger => "HASHTYPE_TIGER",
        JsonValue => "JSON_VALUE",
        Least => "LEAST",
        Nullifzero => "NULLIFZERO",
        SysGuid => "SYS_GUID",
        Zeroifnull => "ZEROIFNULL",
        // operators
        Neg => "NEG",
        Add => "ADD",
        Sub => "SUB",
        Mult => "MULT",
        FloatDiv => "FLOAT_DIV",
    }
}

impl ScalarFunction {
    pub fn is_geospatial(&self) -> bool {
        self.name().starts_with("ST_")
    }
}

named_enum! {
    pub enum AggregateFunction {
        Count => "COUNT",
        Sum => "SUM",
        Min => "MIN",
        Max => "MAX",
        Avg => "AVG",
        Median => "MEDIAN",
        FirstValue => "FIRST_VALUE",
        LastValue => "LAST_VALUE",
        Stddev => "STDDEV",
        StddevPop => "STDDEV_POP",
        StddevSamp => "STDDEV_SAMP",
        Variance => "VARIANCE",
        VarPop => "VAR_POP",
        VarSamp => "VAR_SAMP",
        ApproximateCountDistinct => "APPROXIMATE_COUNT_DISTINCT",
        Every => "EVERY",
        Some => "SOME",
    }
}
