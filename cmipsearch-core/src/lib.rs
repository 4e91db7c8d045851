//! Registries of CMIP6 model names and experiment identifiers.
//!
//! ```rust
//! use cmipsearch_core::{cmip6_experiments, cmip6_models};
//!
//! assert!(cmip6_models().contains(&"CESM2"));
//! assert_eq!(cmip6_experiments().first(), Some(&"historical"));
//! ```

pub mod catalog;
pub mod experiment;
pub mod model;
pub mod package;
pub mod python;
pub mod registry;

pub mod errors;

pub use experiment::{cmip6_experiments, Experiment};
pub use model::cmip6_models;
