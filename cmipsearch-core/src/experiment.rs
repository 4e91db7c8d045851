//! CMIP6 experiment identifiers.
//!
//! The registry holds the historical run and the ScenarioMIP pathways for which
//! archive holdings are tracked. `historical` comes first by convention.
//!
//! Identifiers are available both as plain strings ([`cmip6_experiments`]) and as
//! the typed [`Experiment`] enum, which converts to and from the archive spelling.
//!
//! ```rust
//! use cmipsearch_core::experiment::{cmip6_experiments, Experiment};
//!
//! assert_eq!(cmip6_experiments()[0], "historical");
//!
//! let exp: Experiment = "ssp534-over".parse().unwrap();
//! assert_eq!(exp, Experiment::Ssp534Over);
//! assert!(exp.is_scenario());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CmipError, CmipResult};
use crate::registry::{Registry, RegistryKind};

/// Known CMIP6 experiment identifiers.
pub const CMIP6_EXPERIMENTS: [&str; 8] = [
    "historical",
    "ssp119",
    "ssp126",
    "ssp245",
    "ssp370",
    "ssp434",
    "ssp534-over",
    "ssp585",
];

/// Global registry over [`CMIP6_EXPERIMENTS`].
pub static EXPERIMENT_REGISTRY: Registry =
    Registry::new(RegistryKind::Experiment, &CMIP6_EXPERIMENTS);

/// All known CMIP6 experiment identifiers, in registry order.
pub fn cmip6_experiments() -> &'static [&'static str] {
    EXPERIMENT_REGISTRY.names()
}

/// A CMIP6 experiment.
///
/// Serialises as the archive identifier, e.g. `Experiment::Ssp534Over` is
/// written as `"ssp534-over"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Experiment {
    /// Historical simulation, 1850 to 2014
    #[serde(rename = "historical")]
    Historical,
    #[serde(rename = "ssp119")]
    Ssp119,
    #[serde(rename = "ssp126")]
    Ssp126,
    #[serde(rename = "ssp245")]
    Ssp245,
    #[serde(rename = "ssp370")]
    Ssp370,
    #[serde(rename = "ssp434")]
    Ssp434,
    /// SSP5-8.5 until 2040 followed by aggressive mitigation
    #[serde(rename = "ssp534-over")]
    Ssp534Over,
    #[serde(rename = "ssp585")]
    Ssp585,
}

impl Experiment {
    /// Every experiment, in registry order.
    pub const ALL: [Experiment; 8] = [
        Experiment::Historical,
        Experiment::Ssp119,
        Experiment::Ssp126,
        Experiment::Ssp245,
        Experiment::Ssp370,
        Experiment::Ssp434,
        Experiment::Ssp534Over,
        Experiment::Ssp585,
    ];

    /// Archive identifier (`experiment_id`) of the experiment.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Experiment::Historical => "historical",
            Experiment::Ssp119 => "ssp119",
            Experiment::Ssp126 => "ssp126",
            Experiment::Ssp245 => "ssp245",
            Experiment::Ssp370 => "ssp370",
            Experiment::Ssp434 => "ssp434",
            Experiment::Ssp534Over => "ssp534-over",
            Experiment::Ssp585 => "ssp585",
        }
    }

    /// Whether this is a ScenarioMIP pathway rather than the historical run.
    pub const fn is_scenario(&self) -> bool {
        !matches!(self, Experiment::Historical)
    }

    /// Parse an archive identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CmipError::UnknownExperiment`] if `id` is not registered.
    pub fn from_id(id: &str) -> CmipResult<Self> {
        let index = EXPERIMENT_REGISTRY
            .position(id)
            .ok_or_else(|| CmipError::UnknownExperiment(id.to_string()))?;
        Ok(Experiment::ALL[index])
    }
}

impl fmt::Display for Experiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Experiment {
    type Err = CmipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Experiment::from_id(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experiments_exact() {
        assert_eq!(
            cmip6_experiments(),
            [
                "historical",
                "ssp119",
                "ssp126",
                "ssp245",
                "ssp370",
                "ssp434",
                "ssp534-over",
                "ssp585",
            ]
        );
        assert!(EXPERIMENT_REGISTRY.verify().is_ok());
    }

    #[test]
    fn test_experiments_are_stable_across_calls() {
        assert_eq!(cmip6_experiments(), cmip6_experiments());
        assert!(std::ptr::eq(cmip6_experiments(), cmip6_experiments()));
    }

    #[test]
    fn test_enum_matches_registry() {
        let ids: Vec<&str> = Experiment::ALL.iter().map(|e| e.as_str()).collect();
        assert_eq!(ids, cmip6_experiments());
    }

    #[test]
    fn test_parse() {
        for exp in Experiment::ALL {
            assert_eq!(exp.as_str().parse::<Experiment>().unwrap(), exp);
        }
        assert_eq!(
            Experiment::from_id("historical").unwrap(),
            Experiment::Historical
        );
    }

    #[test]
    fn test_parse_unknown() {
        for id in ["SSP585", "ssp534", "piControl", ""] {
            assert!(matches!(
                id.parse::<Experiment>(),
                Err(CmipError::UnknownExperiment(name)) if name == id
            ));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Experiment::Ssp534Over), "ssp534-over");
        assert_eq!(Experiment::Ssp245.to_string(), "ssp245");
    }

    #[test]
    fn test_is_scenario() {
        assert!(!Experiment::Historical.is_scenario());
        assert_eq!(
            Experiment::ALL.iter().filter(|e| e.is_scenario()).count(),
            7
        );
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Experiment::Ssp534Over).unwrap();
        assert_eq!(json, "\"ssp534-over\"");

        let parsed: Experiment = serde_json::from_str("\"historical\"").unwrap();
        assert_eq!(parsed, Experiment::Historical);

        assert!(serde_json::from_str::<Experiment>("\"ssp999\"").is_err());
    }
}
