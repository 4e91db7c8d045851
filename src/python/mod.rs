use cmipsearch_core::python::core;
use log::debug;
use pyo3::prelude::*;
use pyo3::wrap_pymodule;

#[pymodule]
#[pyo3(name = "_lib")]
fn cmipsearch(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_wrapped(wrap_pymodule!(core))?;

    set_path(m, "cmipsearch._lib.core", "core")?;

    debug!("Initialised cmipsearch._lib {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

/// Make `module` importable under its dotted `path`.
fn set_path(m: &Bound<'_, PyModule>, path: &str, module: &str) -> PyResult<()> {
    let submodule = m.getattr(module)?;
    m.py()
        .import_bound("sys")?
        .getattr("modules")?
        .set_item(path, submodule)
}
