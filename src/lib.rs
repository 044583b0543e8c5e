//! # domainfix
//!
//! Suggests corrections for mistyped email domains, e.g. `gmal.com` to
//! `gmail.com`, and leaves the input alone when no confident correction
//! exists.
//!
//! ## Features
//!
//! - Exact lookup table for truncated provider names (`gmail` to `gmail.com`)
//! - Ratcliff/Obershelp block matching against common provider domains
//! - Edit-distance and frequency-weighted alternatives
//! - Loadable reference data and a small command line front end
//!
//! ```
//! use domainfix::{Algorithm, suggest, suggest_with};
//!
//! assert_eq!(suggest("yahuo.com"), "yahoo.com");
//! assert_eq!(suggest_with("gmal.com", 0.77, None, Algorithm::Frequency), "gmail.com");
//! ```

pub mod cli;
pub mod error;
pub mod spelling;

pub use spelling::scorer::{Algorithm, DomainScorer};
pub use spelling::suggest::{DomainSuggester, SuggestOptions, suggest, suggest_with};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
