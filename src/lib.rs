//! Detect dependencies whose license restricts use to non-commercial purposes.
//!
//! The core is [`license`]: two classifiers behind one
//! [`Classifier`](license::registry::Classifier) contract and a registry that
//! runs a chosen set of them over a [`LicenseDeclaration`](models::LicenseDeclaration).
//! [`scanner`] reads declarations out of a `node_modules` tree, [`audit`]
//! classifies a whole scan, and [`report`] renders the result.

pub mod audit;
pub mod config;
pub mod license;
pub mod models;
pub mod report;
pub mod scanner;
