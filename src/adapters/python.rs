//! Python Bindings for Circle Pair
//!
//! Exposes the Rust classifier to Python via PyO3.
//!
//! ## Usage
//! ```python
//! from circle_pair import CirclePair
//!
//! pair = CirclePair([2, 2, 5, 1, 2, 1])
//! pair.classify()      # 'Disjoint-inside'
//! pair.overlap_area()  # area of the nested unit circle
//! pair.distance        # 1.0
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PySequence};

use crate::core::{CirclePair, PairError};

fn pair_err(e: PairError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// A pair of circles with distance, overlap area and classification
#[pyclass(name = "CirclePair")]
pub struct PyCirclePair {
    inner: CirclePair,
}

#[pymethods]
impl PyCirclePair {
    /// Build a pair from a sequence of six values: Ax, Ay, Ar, Bx, By, Br
    ///
    /// Raises ValueError unless all six values are plain ints or floats
    /// with positive radii.
    #[new]
    fn new(values: &PySequence) -> PyResult<Self> {
        let len = values.len()?;
        if len != 6 {
            return Err(pair_err(PairError::ArgumentCount { got: len }));
        }

        let mut numbers = [0.0f64; 6];
        for (index, slot) in numbers.iter_mut().enumerate() {
            let item = values.get_item(index)?;

            // bool is an int subtype in Python and would extract as 0/1;
            // the contract rejects it outright.
            if item.is_instance_of::<PyBool>() {
                return Err(pair_err(PairError::ArgumentType {
                    index,
                    found: "bool".to_string(),
                }));
            }

            *slot = item.extract::<f64>().map_err(|_| {
                pair_err(PairError::ArgumentType {
                    index,
                    found: item.get_type().name().unwrap_or("unknown").to_string(),
                })
            })?;
        }

        CirclePair::from_values(&numbers)
            .map(|inner| Self { inner })
            .map_err(pair_err)
    }

    /// Classify the pair, returning one of the five canonical labels
    fn classify(&self) -> &'static str {
        self.inner.classify().as_str()
    }

    /// Area of the intersection of the two discs
    fn overlap_area(&self) -> f64 {
        self.inner.overlap_area()
    }

    #[getter]
    fn distance(&self) -> f64 {
        self.inner.distance()
    }

    #[getter]
    fn area_a(&self) -> f64 {
        self.inner.area_a()
    }

    #[getter]
    fn area_b(&self) -> f64 {
        self.inner.area_b()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

#[pymodule]
fn circle_pair(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyCirclePair>()?;
    Ok(())
}
