//! codeset notation engine
//!
//! This crate expands compact notations for hierarchical codes (such as ICD
//! diagnosis codes) into explicit lists of concrete codes.
//!
//! # Notations
//!
//! - **Hyphen** `K50-K53`: numeric range over the code's number, no universe needed
//! - **Star** `K50*`, `*5`, `K*5`: wildcard prefix/suffix match against a code universe
//! - **Colon** `K50:K53`: positional slice of the code universe
//! - **Regex** `K5[01]`: prefix-anchored regular expression over the code universe
//!
//! [`expand_code`] chains hyphen, star, and colon expansion in that fixed order
//! (or runs regex alone), then deduplicates and sorts.
//!
//! # Example
//!
//! ```
//! use codeset_notation::{expand_code, CodeInput, CodeUniverse, ExpandOptions};
//!
//! let universe = CodeUniverse::new(["K500", "K501", "K509", "K51", "K52", "L100"]);
//!
//! let codes = expand_code(
//!     &CodeInput::from("K50*"),
//!     Some(&universe),
//!     &ExpandOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(codes.codes().unwrap(), ["K500", "K501", "K509"]);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error type and stable error codes
//! - [`input`]: Input and output shapes (single, sequence, mapping)
//! - [`universe`]: The ordered code universe
//! - [`options`]: Pipeline options
//! - [`hyphen`], [`star`], [`colon`], [`pattern`]: Individual expanders
//! - [`expand`]: The pipeline
//! - [`normalize`]: Dot and zero stripping helpers

pub mod colon;
pub mod error;
pub mod expand;
pub mod hyphen;
pub mod input;
pub mod normalize;
pub mod options;
pub mod pattern;
pub mod star;
pub mod universe;

// Re-export commonly used types at the crate root
pub use colon::{expand_colon, expand_colon_str};
pub use error::{Notation, NotationError, Result};
pub use expand::{expand_code, expand_code_str};
pub use hyphen::{expand_hyphen, expand_hyphen_str};
pub use input::{CodeInput, CodeSet};
pub use normalize::{drop_dots, drop_zeros, has_notation, ZeroSide};
pub use options::ExpandOptions;
pub use pattern::{expand_regex, expand_regex_str};
pub use star::{expand_star, expand_star_str};
pub use universe::CodeUniverse;
