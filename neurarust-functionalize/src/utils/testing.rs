//! Assertion helpers shared by unit and integration tests.

use approx::abs_diff_eq;

use crate::tensor::Tensor;
use crate::types::DType;

/// Tolerance used when round-tripping float values through several views.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Flattens every element into `f64` components (complex values contribute
/// their real then imaginary part).
fn components(tensor: &Tensor) -> Vec<f64> {
    let flat = match tensor.dtype() {
        DType::F32 => tensor.get_f32_data().map(|v| v.into_iter().map(f64::from).collect()),
        DType::F64 => tensor.get_f64_data(),
        DType::C64 => tensor
            .get_c64_data()
            .map(|v| v.into_iter().flat_map(|c| [f64::from(c.re), f64::from(c.im)]).collect()),
        DType::C128 => tensor
            .get_c128_data()
            .map(|v| v.into_iter().flat_map(|c| [c.re, c.im]).collect()),
    };
    flat.expect("Failed to read tensor data in test helper")
}

/// Checks that a real tensor has `expected_shape` and holds `expected_data`
/// within `tolerance`. Panics otherwise.
pub fn check_tensor_near(actual: &Tensor, expected_shape: &[usize], expected_data: &[f64], tolerance: f64) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    assert!(!actual.dtype().is_complex(), "check_tensor_near expects a real tensor");
    let actual_data = components(actual);
    assert_eq!(actual_data.len(), expected_data.len(), "Data length mismatch");
    for (i, (a, e)) in actual_data.iter().zip(expected_data.iter()).enumerate() {
        if !abs_diff_eq!(*a, *e, epsilon = tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, tolerance={:?}",
                i, a, e, tolerance
            );
        }
    }
}

/// Asserts that two tensors have the same dtype, the same shape and
/// element-wise close values.
pub fn assert_tensors_close(actual: &Tensor, expected: &Tensor, tolerance: f64) {
    assert_eq!(actual.dtype(), expected.dtype(), "DType mismatch");
    assert_eq!(actual.shape(), expected.shape(), "Shape mismatch");
    let a = components(actual);
    let e = components(expected);
    for (i, (x, y)) in a.iter().zip(e.iter()).enumerate() {
        if !abs_diff_eq!(*x, *y, epsilon = tolerance) {
            panic!(
                "Tensors differ at component {}: actual={:?}, expected={:?}, tolerance={:?}",
                i, x, y, tolerance
            );
        }
    }
}
