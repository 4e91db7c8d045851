//! Owned, serialisable copy of the model and experiment lists.
//!
//! A [`Catalog`] starts from the built-in tables via [`Catalog::cmip6`] and can be
//! written to or read from TOML and JSON. Whatever is loaded must satisfy the
//! same invariants as the built-in registries: non-empty lists with no duplicates.
//!
//! ```toml
//! models = ["CESM2", "UKESM1-0-LL"]
//! experiments = ["historical", "ssp585"]
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::CmipResult;
use crate::experiment::cmip6_experiments;
use crate::model::cmip6_models;
use crate::registry::{check_entries, RegistryKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Model names, in catalog order
    pub models: Vec<String>,
    /// Experiment identifiers, in catalog order
    pub experiments: Vec<String>,
}

impl Catalog {
    /// Catalog holding the built-in CMIP6 tables.
    pub fn cmip6() -> Self {
        Self {
            models: cmip6_models().iter().map(|s| s.to_string()).collect(),
            experiments: cmip6_experiments().iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Check that both lists are non-empty and free of duplicates.
    pub fn verify(&self) -> CmipResult<()> {
        check_entries(
            RegistryKind::Model.label(),
            self.models.iter().map(String::as_str),
        )?;
        check_entries(
            RegistryKind::Experiment.label(),
            self.experiments.iter().map(String::as_str),
        )
    }

    pub fn contains_model(&self, name: &str) -> bool {
        self.models.iter().any(|m| m == name)
    }

    pub fn contains_experiment(&self, id: &str) -> bool {
        self.experiments.iter().any(|e| e == id)
    }

    /// Read a catalog from TOML and verify it.
    pub fn from_toml_str(s: &str) -> CmipResult<Self> {
        let catalog: Catalog = toml::from_str(s)?;
        catalog.verified()
    }

    pub fn to_toml_string(&self) -> CmipResult<String> {
        debug!(
            "Writing catalog with {} models and {} experiments as TOML",
            self.models.len(),
            self.experiments.len()
        );
        Ok(toml::to_string(self)?)
    }

    /// Read a catalog from JSON and verify it.
    pub fn from_json_str(s: &str) -> CmipResult<Self> {
        let catalog: Catalog = serde_json::from_str(s)?;
        catalog.verified()
    }

    pub fn to_json_string(&self) -> CmipResult<String> {
        debug!(
            "Writing catalog with {} models and {} experiments as JSON",
            self.models.len(),
            self.experiments.len()
        );
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn verified(self) -> CmipResult<Self> {
        if let Err(e) = self.verify() {
            warn!("Rejected catalog: {}", e);
            return Err(e);
        }
        debug!(
            "Loaded catalog with {} models and {} experiments",
            self.models.len(),
            self.experiments.len()
        );
        Ok(self)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::cmip6()
    }
}
