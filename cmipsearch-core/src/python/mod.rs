//! Python bindings for the CMIP6 registries.
//!
//! Exposed to Python as `cmipsearch._lib.core`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::errors::CmipError;

pub mod registry;

pub use registry::PyExperiment;

impl From<CmipError> for PyErr {
    fn from(e: CmipError) -> PyErr {
        PyValueError::new_err(e.to_string())
    }
}

#[pymodule]
pub fn core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyExperiment>()?;
    m.add_function(wrap_pyfunction!(registry::cmip6_models, m)?)?;
    m.add_function(wrap_pyfunction!(registry::cmip6_experiments, m)?)?;
    m.add_function(wrap_pyfunction!(registry::is_known_model, m)?)?;
    m.add_function(wrap_pyfunction!(registry::is_known_experiment, m)?)?;
    m.add_function(wrap_pyfunction!(registry::package_info, m)?)?;
    Ok(())
}
