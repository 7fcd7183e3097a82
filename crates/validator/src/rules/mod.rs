//! Built-in rules
//!
//! Every rule is a small struct with a factory function of the same name in
//! snake_case. The message of each rule is fixed at construction.
//!
//! - **Length**: [`MinLength`], [`MaxLength`]
//! - **Character class**: [`HasUppercase`], [`HasLowercase`], [`HasNumber`], [`HasSymbol`]
//! - **Format**: [`IsEmail`], [`MatchesRegex`]
//! - **Closures**: [`rule_fn`], [`message_fn`]

pub mod charset;
pub mod format;
pub mod func;
pub mod length;

pub use charset::{
    HasLowercase, HasNumber, HasSymbol, HasUppercase, SYMBOLS, has_lowercase, has_number,
    has_symbol, has_uppercase,
};
pub use format::{IsEmail, MatchesRegex, is_email, matches_regex};
pub use func::{MessageFn, message_fn, rule_fn};
pub use length::{MaxLength, MinLength, max_length, min_length};
