//! Input parsing.
//!
//! Turns loosely formatted text into a validated [`SubnetSpec`](crate::models::SubnetSpec):
//! - [`normalize`] - ordered rewrite rules for separators and whitespace
//! - [`parser`] - tokenizing plus IP, mask and prefix validation
//! - [`error`] - [`ParseError`] and its [`ErrorKind`]

mod error;
mod normalize;
mod parser;

pub use error::{ErrorKind, ParseError, ParseResult};
pub use normalize::{normalize, normalize_rules, NormalizeRule};
pub use parser::{parse_ip, parse_mask_or_prefix, parse_subnet, tokenize};
