//! Spelling correction for email domains.
//!
//! This module suggests the provider domain a user most likely meant when
//! typing an address, e.g. `gmal.com` for `gmail.com`. An exact typo table is
//! checked first, then one of several similarity algorithms scores the
//! candidate against a list of common provider domains.

pub mod dictionary;
pub mod domains;
pub mod levenshtein;
pub mod scorer;
pub mod sequence_matcher;
pub mod suggest;

// Re-export commonly used types
pub use dictionary::*;
pub use domains::*;
pub use levenshtein::*;
pub use scorer::*;
pub use sequence_matcher::*;
pub use suggest::*;
