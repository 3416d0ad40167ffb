//! Command-line argument tokenizer.
//!
//! Classifies a flat sequence of arguments into typed parameter records:
//!
//! - long options: `--name`, `--name:value`, `--name=value`, `--name:` `value`
//! - short options: `-x`, `+x`, `-x:value`, `-x=value`, `-x:` `value`
//! - short clusters: `-xyz`, `-xyz:value`, `-xyz=value`, `-xyz:` `value`
//!   (a value only ever belongs to the last character)
//! - property style: `name:` `value`
//!
//! A [`ScannerState`] holds the argument view and two cursors (argument and
//! in-cluster character). Each [`ScannerState::step`] fills one
//! [`Parameter`] and reports failures through [`Fault`]; the iterator
//! surface ([`ScannerState::next_parameter`]) maps the same outcomes onto
//! [`ScanError`]. Whether a name is actually known is left to the caller.
//!
//! # Example
//!
//! ```
//! use argtoken_core::*;
//!
//! let args = ["--verbose", "-xyz", "+o:out.txt", "name:", "Bob"];
//! let mut state = ScannerState::start(&args, 0);
//! let mut record = Parameter::new();
//! let mut seen = Vec::new();
//!
//! while state.step(&mut record) {
//!     seen.push(record.token().map(|t| format!("{t:?}")).unwrap_or_default());
//! }
//! assert_eq!(state.fault(), Some(Fault::NoArgumentsAvailable));
//! assert_eq!(seen.len(), 6);
//! assert_eq!(
//!     seen[4],
//!     format!("{:?}", Token::Short { prefix: ShortPrefix::Plus, name: 'o', value: Some("out.txt") })
//! );
//! ```

mod error;
mod lexeme;
mod state;
mod step;
mod types;

pub use error::ScanError;
pub use lexeme::Lexeme;
pub use state::ScannerState;
pub use types::*;
