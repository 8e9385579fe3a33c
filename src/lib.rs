//! subnet-explain - IPv4 subnet calculator with a byte-by-byte explanation.
//!
//! Accepts `IP/PREFIX` or `IP MASK` (also with `-` or `:` as separator),
//! derives the subnet facts and explains how they were calculated.
//!
//! # Examples
//! ```
//! let report = subnet_explain::explain_input("192.0.2.10/27").unwrap();
//! assert_eq!(report.facts.broadcast.to_string(), "192.0.2.31");
//! assert_eq!(report.facts.usable_hosts, 30);
//! ```

pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod parsing;
pub mod processing;

pub use config::{Config, OutputFormat, RunMode};
pub use models::{BinaryBreakdown, SubnetFacts, SubnetSpec};
pub use parsing::{parse_subnet, ErrorKind, ParseError};
pub use processing::{explain_input, run, InputReport, SubnetReport};
