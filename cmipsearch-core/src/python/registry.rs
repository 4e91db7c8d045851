//! Python access to the model and experiment registries.
//!
//! The list accessors return a new Python list on every call, so callers may
//! modify the result freely without affecting the registry.

use pyo3::prelude::*;

use crate::experiment::{Experiment, EXPERIMENT_REGISTRY};
use crate::model::MODEL_REGISTRY;
use crate::package;

/// Python wrapper for [`Experiment`].
#[pyclass(name = "Experiment", module = "cmipsearch.core")]
#[derive(Clone)]
pub struct PyExperiment(pub Experiment);

#[pymethods]
impl PyExperiment {
    /// Look up an experiment by its archive identifier.
    ///
    /// Raises `ValueError` if the identifier is not registered.
    #[staticmethod]
    pub fn from_id(id: &str) -> PyResult<Self> {
        Ok(PyExperiment(Experiment::from_id(id)?))
    }

    /// Every experiment, in registry order.
    #[staticmethod]
    pub fn all() -> Vec<PyExperiment> {
        Experiment::ALL.into_iter().map(PyExperiment).collect()
    }

    /// Archive identifier, e.g. "ssp585".
    #[getter]
    pub fn id(&self) -> &'static str {
        self.0.as_str()
    }

    #[getter]
    pub fn is_scenario(&self) -> bool {
        self.0.is_scenario()
    }

    fn __repr__(&self) -> String {
        format!("Experiment('{}')", self.0)
    }

    fn __str__(&self) -> &'static str {
        self.0.as_str()
    }

    fn __eq__(&self, other: &PyExperiment) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::hash::{Hash, Hasher};
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

/// List the known CMIP6 model names.
///
/// # Example
///
/// ```python
/// from cmipsearch.core import cmip6_models
///
/// assert "CESM2" in cmip6_models()
/// ```
#[pyfunction]
pub fn cmip6_models() -> Vec<&'static str> {
    MODEL_REGISTRY.iter().collect()
}

/// List the known CMIP6 experiment identifiers, starting with "historical".
#[pyfunction]
pub fn cmip6_experiments() -> Vec<&'static str> {
    EXPERIMENT_REGISTRY.iter().collect()
}

/// Check whether `name` is a registered model name (case-sensitive).
#[pyfunction]
pub fn is_known_model(name: &str) -> bool {
    MODEL_REGISTRY.contains(name)
}

/// Check whether `id` is a registered experiment identifier (case-sensitive).
#[pyfunction]
pub fn is_known_experiment(id: &str) -> bool {
    EXPERIMENT_REGISTRY.contains(id)
}

/// Distribution metadata as a dictionary.
#[pyfunction]
pub fn package_info(py: Python<'_>) -> PyResult<PyObject> {
    Ok(pythonize::pythonize(py, &package::package_info())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_accessors_match_registries() {
        assert_eq!(cmip6_models(), crate::model::cmip6_models());
        assert_eq!(cmip6_experiments(), crate::experiment::cmip6_experiments());
    }

    #[test]
    fn test_lists_are_fresh_copies() {
        let mut models = cmip6_models();
        models.clear();
        assert_eq!(cmip6_models().len(), MODEL_REGISTRY.len());
    }

    #[test]
    fn test_known_checks() {
        assert!(is_known_model("UKESM1-0-LL"));
        assert!(!is_known_model("UKESM"));
        assert!(is_known_experiment("ssp370"));
        assert!(!is_known_experiment("SSP370"));
    }

    #[test]
    fn test_experiment_wrapper() {
        let exp = PyExperiment::from_id("ssp534-over").unwrap();
        assert_eq!(exp.id(), "ssp534-over");
        assert!(exp.is_scenario());
        assert_eq!(exp.__repr__(), "Experiment('ssp534-over')");
        assert!(exp.__eq__(&PyExperiment(Experiment::Ssp534Over)));

        let ids: Vec<_> = PyExperiment::all().iter().map(|e| e.id()).collect();
        assert_eq!(ids, crate::experiment::cmip6_experiments());
    }
}
