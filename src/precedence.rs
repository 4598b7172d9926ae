//! The Pratt precedence ladder (§4.4).
//!
//! No close analogue exists in the teacher crate (`sqruff`'s grammar combinators have no notion
//! of numeric binding power); the constants here are transcribed directly from the spec's ladder
//! and the dialect overrides it calls out, mirroring how the real `sqlparser-rs` keeps precedence
//! as a flat set of `u8` constants consulted by `Parser::get_next_precedence`.

/// A binding power. Higher binds tighter. `0` means "not an infix position".
pub type Precedence = u8;

pub const UNKNOWN: Precedence = 0;
pub const OR: Precedence = 5;
pub const AND: Precedence = 10;
pub const UNARY_NOT: Precedence = 15;
pub const PG_OTHER: Precedence = 16;
pub const IS: Precedence = 17;
pub const LIKE: Precedence = 19;
pub const BETWEEN_LIKE: Precedence = 20;
pub const PIPE: Precedence = 21;
pub const CARET: Precedence = 22;
pub const AMPERSAND: Precedence = 23;
pub const XOR: Precedence = 24;
pub const PLUS_MINUS: Precedence = 30;
pub const MUL_DIV_MOD: Precedence = 40;
pub const AT_TIME_ZONE: Precedence = 41;
pub const DOUBLE_COLON: Precedence = 50;

/// Postgres lifts `BETWEEN`/`LIKE` above equality, and gives `COLLATE`, bracket subscript, and
/// `::` cast their own higher slots (§4.4 "Postgres overrides").
pub const PG_BETWEEN_LIKE: Precedence = 60;
pub const PG_COLLATE: Precedence = 120;
pub const PG_SUBSCRIPT: Precedence = 130;
pub const PG_DOUBLE_COLON: Precedence = 140;

/// Snowflake lifts `:` (JSON path access) to cast-level precedence.
pub const SNOWFLAKE_COLON: Precedence = DOUBLE_COLON;
