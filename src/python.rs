//! Python extension module over [`crate::binding`].
//!
//! Exposed as `c_cc_0` with `normalize_ws_process_single(text)` and
//! `canonicize(text, names, strict=False)`.

use pyo3::exceptions::{PyOSError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyString;

use crate::binding::{self, HostArg};
use crate::error::CanonError;
use crate::pipeline::PipelineOptions;
use crate::registry;

impl From<CanonError> for PyErr {
    fn from(err: CanonError) -> PyErr {
        match err {
            CanonError::ArgumentType { .. } => PyTypeError::new_err(err.to_string()),
            CanonError::UnknownCanonicizer { .. } => PyValueError::new_err(err.to_string()),
            CanonError::Io(e) => PyOSError::new_err(e.to_string()),
        }
    }
}

/// Copy the text out of a Python object, or `None` if it is not a `str`.
fn extract_text(value: &Bound<'_, PyAny>) -> PyResult<Option<String>> {
    match value.downcast::<PyString>() {
        Ok(s) => Ok(Some(s.to_cow()?.into_owned())),
        Err(_) => Ok(None),
    }
}

fn host_arg<'a>(text: Option<&'a str>, value: &Bound<'_, PyAny>) -> HostArg<'a> {
    match text {
        Some(t) => HostArg::Text(t),
        None => HostArg::Other {
            type_name: value
                .get_type()
                .name()
                .map(|n| n.to_string())
                .unwrap_or_else(|_| "object".to_string()),
        },
    }
}

/// Normalize whitespace (text)
#[pyfunction]
#[pyo3(text_signature = "(text)")]
fn normalize_ws_process_single(text: &Bound<'_, PyAny>) -> PyResult<String> {
    let owned = extract_text(text)?;
    Ok(binding::normalize_ws_process_single(host_arg(owned.as_deref(), text))?)
}

/// Run the named canonicizers, in order, over text.
#[pyfunction]
#[pyo3(signature = (text, names, strict = false))]
fn canonicize(text: &Bound<'_, PyAny>, names: Vec<String>, strict: bool) -> PyResult<String> {
    let owned = extract_text(text)?;
    let options = PipelineOptions { strict };
    Ok(binding::canonicize(host_arg(owned.as_deref(), text), &names, &options)?)
}

#[pymodule]
fn c_cc_0(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__doc__", binding::MODULE_DOC)?;
    m.add_function(wrap_pyfunction!(normalize_ws_process_single, m)?)?;
    m.add_function(wrap_pyfunction!(canonicize, m)?)?;
    m.add("CANONICIZERS", registry::available().to_vec())?;
    Ok(())
}
