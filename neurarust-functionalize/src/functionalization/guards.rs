//! Inverses of view operators the functionalization pass cannot handle.
//!
//! Reaching any of these is a bug in the caller: the pass must never build
//! these views in the first place. They log and panic unconditionally; no
//! `Result` is ever returned.

use log::error;

use super::backend::ViewOps;
use crate::error::NeuraRustError;

fn internal_assert(message: &str) -> ! {
    error!("{}", message);
    panic!("internal assert failed: {}", message);
}

fn sparse_accessor(name: &str) -> ! {
    internal_assert(&format!(
        "Attempted to call {}() during the functionalization pass. For now, sparse tensors aren't supported during functionalization",
        name
    ))
}

pub fn fw_primal_inverse<T: ViewOps>(_base: &T, _mutated_view: &T, _level: i64) -> Result<T, NeuraRustError> {
    internal_assert(
        "Attempted to call _fw_primal() during the functionalization pass. For now, this is not supported.",
    )
}

pub fn as_strided_inverse<T: ViewOps>(
    _base: &T,
    _mutated_view: &T,
    _size: &[usize],
    _stride: &[usize],
    _storage_offset: Option<usize>,
) -> Result<T, NeuraRustError> {
    internal_assert("as_strided has not been implemented in the functionalization pass yet")
}

pub fn private_indices_inverse<T: ViewOps>(_base: &T, _mutated_view: &T) -> Result<T, NeuraRustError> {
    sparse_accessor("_indices")
}

pub fn private_values_inverse<T: ViewOps>(_base: &T, _mutated_view: &T) -> Result<T, NeuraRustError> {
    sparse_accessor("_values")
}

pub fn indices_inverse<T: ViewOps>(_base: &T, _mutated_view: &T) -> Result<T, NeuraRustError> {
    sparse_accessor("indices")
}

pub fn values_inverse<T: ViewOps>(_base: &T, _mutated_view: &T) -> Result<T, NeuraRustError> {
    sparse_accessor("values")
}

pub fn crow_indices_inverse<T: ViewOps>(_base: &T, _mutated_view: &T) -> Result<T, NeuraRustError> {
    sparse_accessor("crow_indices")
}

pub fn col_indices_inverse<T: ViewOps>(_base: &T, _mutated_view: &T) -> Result<T, NeuraRustError> {
    sparse_accessor("col_indices")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::{self, Tensor};

    fn pair() -> (Tensor, Tensor) {
        let base = tensor::arange(&[2, 2]).unwrap();
        let view = base.clone();
        (base, view)
    }

    #[test]
    #[should_panic(expected = "_fw_primal() during the functionalization pass")]
    fn test_fw_primal_panics() {
        let (base, view) = pair();
        let _ = fw_primal_inverse(&base, &view, 0);
    }

    #[test]
    #[should_panic(expected = "as_strided has not been implemented")]
    fn test_as_strided_panics() {
        let (base, view) = pair();
        let _ = as_strided_inverse(&base, &view, &[2, 2], &[2, 1], None);
    }

    #[test]
    #[should_panic(expected = "Attempted to call crow_indices()")]
    fn test_crow_indices_panics() {
        let (base, view) = pair();
        let _ = crow_indices_inverse(&base, &view);
    }

    #[test]
    #[should_panic(expected = "sparse tensors aren't supported")]
    fn test_private_values_panics() {
        let (base, view) = pair();
        let _ = private_values_inverse(&base, &view);
    }
}
