//! Text normalization and character-class screening.
//!
//! Every scoring policy runs its inputs through [`normalize`] before looking at
//! words, then screens the normalized pair with the predicates in [`charset`]:
//!
//! 1. **Lowercase** the raw text
//! 2. **Punctuation** (ASCII plus a few typographic marks) becomes a space
//! 3. **Accented letters** from a fixed table become their base letter
//! 4. **Spaces** are collapsed and the ends trimmed
//!
//! Anything the tables do not cover survives normalization untouched. That is
//! what [`charset::is_clean`] and [`charset::is_foreign_script`] detect.
//!
//! ## Example
//!
//! ```
//! use lexalign::text::{normalize, charset::is_clean};
//!
//! let s = normalize("  Beyoncé — Halo (Remix) ");
//! assert_eq!(s.as_str(), "beyonce halo remix");
//! assert!(is_clean(s.as_str()));
//! ```

pub mod charset;
pub mod normalize;
pub mod tables;

pub use normalize::{normalize, NormalizedString};
