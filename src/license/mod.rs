//! Non-commercial license classification.
//!
//! - [`keyword`]: broad substring matching over the license text, with a
//!   guard against the `Inc.` corporate suffix and a legacy-array fallback.
//! - [`spdx`]: exact match against the Creative Commons NC identifiers.
//! - [`registry`]: the [`Classifier`](registry::Classifier) contract, the
//!   built-in name table, and the runner that tags verdicts with provenance.

pub mod keyword;
pub mod registry;
pub mod spdx;
