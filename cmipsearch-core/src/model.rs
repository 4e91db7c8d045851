//! CMIP6 model names.
//!
//! The table lists every `source_id` known to contribute CMIP6 data, in the order
//! the entries were added. Code that indexes by position relies on that order, so
//! new models are appended rather than sorted in.
//!
//! The list is maintained by hand against the ESGF data holdings summary:
//! <https://pcmdi.llnl.gov/CMIP6/ArchiveStatistics/esgf_data_holdings/ScenarioMIP/index.html>
//!
//! # Usage
//!
//! ```rust
//! use cmipsearch_core::model::{cmip6_models, MODEL_REGISTRY};
//!
//! assert!(cmip6_models().contains(&"UKESM1-0-LL"));
//! assert_eq!(MODEL_REGISTRY.position("ACCESS-CM2"), Some(1));
//! ```

use crate::registry::{Registry, RegistryKind};

/// Known CMIP6 model names.
pub const CMIP6_MODELS: [&str; 95] = [
    "AOP-v1-5",
    "ACCESS-CM2",
    "ACCESS-ESM1-5",
    "ARTS-2-3",
    "AWI-CM-1-1-HR",
    "AWI-CM-1-1-LR",
    "AWI-CM-1-1-MR",
    "AWI-ESM-1-1-LR",
    "BCC-CSM2-MR",
    "BCC-ESM1",
    "CAMS-CSM1-0",
    "CAS-ESM2-0",
    "CESM1-1-CAM5-CMIP5",
    "CESM2",
    "CESM2-FV2",
    "CESM2-WACCM",
    "CESM2-WACCM-FV2",
    "CIESM",
    "CMCC-CM2-HR4",
    "CMCC-CM2-SR5",
    "CMCC-CM2-VHR4",
    "CMCC-ESM2",
    "CNRM-CM6-1",
    "CNRM-CM6-1-HR",
    "CNRM-ESM2-1",
    "CanESM5",
    "CanESM5-CanOE",
    "E3SM-1-0",
    "E3SM-1-1",
    "E3SM-1-1-ECA",
    "EC-Earth3",
    "EC-Earth3-LR",
    "EC-Earth3-Veg",
    "EC-Earth3-Veg-LR",
    "EC-Earth3P",
    "EC-Earth3P-HR",
    "ECMWF-IFS-HR",
    "ECMWF-IFS-LR",
    "ECMWF-IFS-MR",
    "FGOALS-f3-H",
    "FGOALS-f3-L",
    "FGOALS-g3",
    "FIO-ESM-2-0",
    "GFDL-AM4",
    "GFDL-CM4",
    "GFDL-CM4C192",
    "GFDL-ESM2M",
    "GFDL-ESM4",
    "GFDL-GRTCODE",
    "GFDL-OM4p5B",
    "GFDL-RFM-DISORT",
    "GISS-E2-1-G",
    "GISS-E2-1-G-CC",
    "GISS-E2-1-H",
    "GISS-E2-2-G",
    "GISS-E3-G",
    "HadGEM3-GC31-HH",
    "HadGEM3-GC31-HM",
    "HadGEM3-GC31-LL",
    "HadGEM3-GC31-LM",
    "HadGEM3-GC31-MH",
    "HadGEM3-GC31-MM",
    "IITM-ESM",
    "INM-CM4-8",
    "INM-CM5-0",
    "INM-CM5-H",
    "IPSL-CM6A-ATM-HR",
    "IPSL-CM6A-LR",
    "KACE-1-0-G",
    "LBLRTM-12-8",
    "MCM-UA-1-0",
    "MIROC-ES2H-NB",
    "MIROC-ES2L",
    "MIROC6",
    "MPI-ESM-1-2-HAM",
    "MPI-ESM1-2-HR",
    "MPI-ESM1-2-LR",
    "MPI-ESM1-2-XR",
    "MRI-AGCM3-2-H",
    "MRI-AGCM3-2-S",
    "MRI-ESM2-0",
    "NESM3",
    "NICAM16-7S",
    "NICAM16-8S",
    "NICAM16-9S",
    "NorCPM1",
    "NorESM1-F",
    "NorESM2-LM",
    "NorESM2-MM",
    "RRTMG-LW-4-91",
    "RRTMG-SW-4-02",
    "RTE-RRTMGP-181204",
    "SAM0-UNICON",
    "TaiESM1",
    "UKESM1-0-LL",
];

/// Global registry over [`CMIP6_MODELS`].
pub static MODEL_REGISTRY: Registry = Registry::new(RegistryKind::Model, &CMIP6_MODELS);

/// All known CMIP6 model names, in registry order.
///
/// The returned slice is shared and immutable; every call yields the same data.
pub fn cmip6_models() -> &'static [&'static str] {
    MODEL_REGISTRY.names()
}
