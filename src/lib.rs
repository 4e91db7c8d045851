//! Python extension module for `cmipsearch`.
//!
//! Rust users should depend on `cmipsearch-core` directly; its public items are
//! re-exported here for convenience.

pub mod python;

pub use cmipsearch_core::catalog::Catalog;
pub use cmipsearch_core::errors::{CmipError, CmipResult};
pub use cmipsearch_core::package::{package_info, PackageInfo};
pub use cmipsearch_core::{cmip6_experiments, cmip6_models, Experiment};
