//! Keyword table: a stable, sorted, case-normalized array of reserved/unreserved words with
//! binary-search lookup (§9 "Keyword table" design note).
//!
//! Grounded on `other_examples/23ca3007_sqlparser-rs-sqlparser-rs__src-dialect-keywords.rs.rs`'s
//! `define_keywords!` table: a flat sorted word list doubling as both the `Keyword` enum
//! definition and the lookup array, so the two can never drift out of sync.

use strum_macros::AsRefStr;

macro_rules! keywords {
    ($($kw:ident),* $(,)?) => {
        /// A resolved SQL keyword, or [`Keyword::NoKeyword`] when a word is a plain identifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
        #[strum(serialize_all = "UPPERCASE")]
        pub enum Keyword {
            /// Sentinel: the word did not resolve to a known keyword.
            NoKeyword,
            $($kw),*
        }

        /// Every keyword spelling, sorted ascending so [`Keyword::lookup`] can binary-search it.
        pub const ALL_KEYWORDS: &[&str] = &[$(stringify!($kw)),*];

        /// `Keyword` values in the same order as [`ALL_KEYWORDS`]; index `i` of one names the
        /// same keyword as index `i` of the other.
        const KEYWORD_VARIANTS: &[Keyword] = &[$(Keyword::$kw),*];
    };
}

keywords!(
    ABS,
    ADD,
    ALL,
    ALTER,
    ALWAYS,
    ANALYZE,
    AND,
    ANTI,
    ANY,
    APPLY,
    ARRAY,
    AS,
    ASC,
    ASCENDING,
    ASOF,
    AT,
    ATTACH,
    AUTHORIZATION,
    AUTOINCREMENT,
    AUTO_INCREMENT,
    BEGIN,
    BETWEEN,
    BIGDECIMAL,
    BIGINT,
    BIGNUMERIC,
    BINARY,
    BLOB,
    BOOL,
    BOOLEAN,
    BOTH,
    BY,
    BYPASS,
    BYTEA,
    BYTES,
    CALL,
    CASCADE,
    CASE,
    CAST,
    CHAIN,
    CHAR,
    CHARACTER,
    CHARSET,
    CHECK,
    CLOB,
    CLUSTER,
    CLUSTERED,
    COLLATE,
    COLUMN,
    COLUMNS,
    COMMENT,
    COMMIT,
    COMMITTED,
    CONFLICT,
    CONNECT,
    CONSTRAINT,
    CONVERT,
    COPY,
    CREATE,
    CROSS,
    CUBE,
    CURRENT,
    CURRENT_DATE,
    CURRENT_TIME,
    CURRENT_TIMESTAMP,
    CURRENT_USER,
    CURSOR,
    DATABASE,
    DATE,
    DATETIME,
    DAY,
    DEALLOCATE,
    DEC,
    DECIMAL,
    DECLARE,
    DEFAULT,
    DEFERRED,
    DEFINE,
    DELETE,
    DENSE_RANK,
    DESC,
    DESCRIBE,
    DETACH,
    DICTIONARY,
    DISTINCT,
    DISTRIBUTE,
    DO,
    DOUBLE,
    DROP,
    ELSE,
    ELSEIF,
    END,
    ENGINE,
    ENUM,
    ESCAPE,
    EXCEPT,
    EXCHANGE,
    EXCLUDE,
    EXCLUSIVE,
    EXEC,
    EXECUTE,
    EXISTS,
    EXPLAIN,
    EXTERNAL,
    EXTRACT,
    FALSE,
    FETCH,
    FILE_FORMAT,
    FILTER,
    FIRST,
    FLOAT,
    FLUSH,
    FOLLOWING,
    FOR,
    FOREIGN,
    FROM,
    FULL,
    FUNCTION,
    GENERATED,
    GLOBAL,
    GRANT,
    GROUP,
    GROUPING,
    GROUPS,
    HAVING,
    HIVE,
    HOUR,
    IDENTITY,
    IF,
    IGNORE,
    ILIKE,
    IMMEDIATE,
    IN,
    INDEX,
    INNER,
    INSERT,
    INSTALL,
    INT,
    INTEGER,
    INTERSECT,
    INTERVAL,
    INTO,
    IS,
    JOIN,
    JSON,
    JSONB,
    KEY,
    KEYS,
    KILL,
    LANGUAGE,
    LAST,
    LATERAL,
    LEADING,
    LEFT,
    LIKE,
    LIMIT,
    LOAD,
    LOCAL,
    LOCATION,
    LOCK,
    LOCKED,
    MACRO,
    MAP,
    MATCH,
    MATCHED,
    MATCH_CONDITION,
    MATCH_RECOGNIZE,
    MATERIALIZED,
    MAXVALUE,
    MEASURES,
    MEDIUMINT,
    MERGE,
    MINUTE,
    MINVALUE,
    MODIFY,
    MODULE,
    MONTH,
    NAME,
    NAMES,
    NATIONAL,
    NATURAL,
    NCHAR,
    NCLOB,
    NEXT,
    NO,
    NOT,
    NOTHING,
    NOWAIT,
    NULL,
    NULLS,
    NUMERIC,
    NVARCHAR,
    OBJECT,
    OF,
    OFFSET,
    ON,
    ONLY,
    OPERATOR,
    OPTION,
    OPTIONS,
    OR,
    ORDER,
    OUTER,
    OVER,
    OVERLAY,
    OVERWRITE,
    OWNER,
    PARTITION,
    PATTERN,
    PERCENT,
    PIVOT,
    PLACING,
    POSITION,
    PRAGMA,
    PRECEDING,
    PRECISION,
    PREPARE,
    PRIMARY,
    PRIOR,
    PROCEDURE,
    QUALIFY,
    QUOTE,
    RAISE,
    RANGE,
    RANK,
    READ,
    REAL,
    RECURSIVE,
    REFERENCES,
    REGEXP,
    RELEASE,
    RENAME,
    REPEATABLE,
    REPLACE,
    RESPECT,
    RESTRICT,
    RETURN,
    RETURNING,
    RETURNS,
    REVOKE,
    RIGHT,
    RLIKE,
    ROLE,
    ROLLBACK,
    ROLLUP,
    ROW,
    ROWID,
    ROWS,
    ROW_NUMBER,
    SAFE_CAST,
    SAMPLE,
    SAVEPOINT,
    SCHEMA,
    SECOND,
    SECRET,
    SECURITY,
    SELECT,
    SEMI,
    SEQUENCE,
    SERIALIZABLE,
    SESSION,
    SET,
    SETS,
    SHARE,
    SHOW,
    SIMILAR,
    SKIP,
    SMALLINT,
    SOME,
    SQL,
    STABLE,
    STAGE,
    START,
    STATISTICS,
    STORAGE,
    STORED,
    STRAIGHT_JOIN,
    STRICT,
    STRING,
    STRUCT,
    SUBSTRING,
    SYMMETRIC,
    SYNONYM,
    SYSTEM,
    TABLE,
    TABLES,
    TABLESAMPLE,
    TBLPROPERTIES,
    TEMP,
    TEMPORARY,
    TERSE,
    TEXT,
    THEN,
    TIES,
    TIME,
    TIMESTAMP,
    TINYINT,
    TO,
    TOP,
    TRAILING,
    TRANSACTION,
    TRIGGER,
    TRIM,
    TRUE,
    TRUNCATE,
    TRY_CAST,
    TYPE,
    UNBOUNDED,
    UNCOMMITTED,
    UNION,
    UNIQUE,
    UNKNOWN,
    UNLOGGED,
    UNNEST,
    UNPIVOT,
    UNSIGNED,
    UPDATE,
    URL,
    USE,
    USING,
    UUID,
    VALUE,
    VALUES,
    VARBINARY,
    VARCHAR,
    VARYING,
    VERBOSE,
    VIEW,
    VIRTUAL,
    VOLATILE,
    WHEN,
    WHERE,
    WINDOW,
    WITH,
    WITHIN,
    WITHOUT,
    WORK,
    WRITE,
    XOR,
    YEAR,
    ZONE,
);

impl Keyword {
    /// Case-insensitive resolution of a scanned word to a keyword id, by binary search over the
    /// sorted [`ALL_KEYWORDS`] table. Returns [`Keyword::NoKeyword`] for plain identifiers.
    pub fn lookup(word: &str) -> Keyword {
        if !word.is_ascii() {
            return Keyword::NoKeyword;
        }
        let upper = word.to_ascii_uppercase();
        match ALL_KEYWORDS.binary_search(&upper.as_str()) {
            Ok(idx) => KEYWORD_VARIANTS[idx],
            Err(_) => Keyword::NoKeyword,
        }
    }

    pub fn is_keyword(&self) -> bool {
        !matches!(self, Keyword::NoKeyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_keywords_is_sorted() {
        let mut sorted = ALL_KEYWORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(ALL_KEYWORDS, sorted.as_slice());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Keyword::lookup("select"), Keyword::SELECT);
        assert_eq!(Keyword::lookup("SELECT"), Keyword::SELECT);
        assert_eq!(Keyword::lookup("SeLeCt"), Keyword::SELECT);
    }

    #[test]
    fn lookup_rejects_non_keyword() {
        assert_eq!(Keyword::lookup("my_table"), Keyword::NoKeyword);
    }

    #[test]
    fn variants_align_with_table() {
        for (i, name) in ALL_KEYWORDS.iter().enumerate() {
            assert_eq!(KEYWORD_VARIANTS[i].as_ref(), *name);
        }
    }
}
