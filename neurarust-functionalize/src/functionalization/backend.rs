//! The tensor operations the view inverses are written against.

use crate::error::NeuraRustError;
use crate::tensor::Tensor;
use crate::types::DType;

/// Operations a tensor type must provide for the view-inverse table to run on it.
///
/// Implementations must be pure: every method returns a new value and leaves
/// `self` (and any tensor sharing its storage) unchanged. The scatter methods
/// return a copy of `self` with a region replaced by `src`; everything outside
/// that region must be preserved exactly.
pub trait ViewOps: Clone + Sized {
    fn sizes(&self) -> Vec<usize>;
    fn strides(&self) -> Vec<usize>;
    fn dtype(&self) -> DType;

    fn rank(&self) -> usize {
        self.sizes().len()
    }

    fn permute(&self, dims: &[i64]) -> Result<Self, NeuraRustError>;
    fn unsqueeze(&self, dim: i64) -> Result<Self, NeuraRustError>;
    /// Removes `dim` when its extent is 1, otherwise returns the tensor as is.
    fn squeeze_dim(&self, dim: i64) -> Result<Self, NeuraRustError>;
    fn view(&self, size: &[i64]) -> Result<Self, NeuraRustError>;
    fn view_dtype(&self, dtype: DType) -> Result<Self, NeuraRustError>;
    fn reshape_alias(&self, size: &[usize], stride: &[usize]) -> Result<Self, NeuraRustError>;
    fn transpose(&self, dim0: i64, dim1: i64) -> Result<Self, NeuraRustError>;
    fn t(&self) -> Result<Self, NeuraRustError>;

    fn conj(&self) -> Result<Self, NeuraRustError>;
    /// Materialized negation.
    fn neg(&self) -> Result<Self, NeuraRustError>;
    fn resolve_conj(&self) -> Result<Self, NeuraRustError>;
    fn view_as_real(&self) -> Result<Self, NeuraRustError>;
    fn view_as_complex(&self) -> Result<Self, NeuraRustError>;

    fn diagonal_scatter(&self, src: &Self, offset: i64, dim1: i64, dim2: i64) -> Result<Self, NeuraRustError>;
    fn select_scatter(&self, src: &Self, dim: i64, index: i64) -> Result<Self, NeuraRustError>;
    fn slice_scatter(
        &self,
        src: &Self,
        dim: i64,
        start: Option<i64>,
        end: Option<i64>,
        step: i64,
    ) -> Result<Self, NeuraRustError>;
    /// Sums broadcast dimensions away to reach `size`.
    fn sum_to(&self, size: &[usize]) -> Result<Self, NeuraRustError>;
    /// Folds `unfold` windows back into `input_sizes`, adding overlapping contributions.
    fn unfold_backward(&self, input_sizes: &[usize], dimension: i64, size: usize, step: usize)
        -> Result<Self, NeuraRustError>;
}

impl ViewOps for Tensor {
    fn sizes(&self) -> Vec<usize> {
        self.shape()
    }

    fn strides(&self) -> Vec<usize> {
        self.layout().strides.clone()
    }

    fn dtype(&self) -> DType {
        Tensor::dtype(self)
    }

    fn rank(&self) -> usize {
        Tensor::rank(self)
    }

    fn permute(&self, dims: &[i64]) -> Result<Self, NeuraRustError> {
        Tensor::permute(self, dims)
    }

    fn unsqueeze(&self, dim: i64) -> Result<Self, NeuraRustError> {
        Tensor::unsqueeze(self, dim)
    }

    fn squeeze_dim(&self, dim: i64) -> Result<Self, NeuraRustError> {
        Tensor::squeeze_dim(self, dim)
    }

    fn view(&self, size: &[i64]) -> Result<Self, NeuraRustError> {
        Tensor::view(self, size)
    }

    fn view_dtype(&self, dtype: DType) -> Result<Self, NeuraRustError> {
        Tensor::view_dtype(self, dtype)
    }

    fn reshape_alias(&self, size: &[usize], stride: &[usize]) -> Result<Self, NeuraRustError> {
        Tensor::reshape_alias(self, size, stride)
    }

    fn transpose(&self, dim0: i64, dim1: i64) -> Result<Self, NeuraRustError> {
        Tensor::transpose(self, dim0, dim1)
    }

    fn t(&self) -> Result<Self, NeuraRustError> {
        Tensor::t(self)
    }

    fn conj(&self) -> Result<Self, NeuraRustError> {
        Tensor::conj(self)
    }

    fn neg(&self) -> Result<Self, NeuraRustError> {
        Tensor::neg(self)
    }

    fn resolve_conj(&self) -> Result<Self, NeuraRustError> {
        Tensor::resolve_conj(self)
    }

    fn view_as_real(&self) -> Result<Self, NeuraRustError> {
        Tensor::view_as_real(self)
    }

    fn view_as_complex(&self) -> Result<Self, NeuraRustError> {
        Tensor::view_as_complex(self)
    }

    fn diagonal_scatter(&self, src: &Self, offset: i64, dim1: i64, dim2: i64) -> Result<Self, NeuraRustError> {
        Tensor::diagonal_scatter(self, src, offset, dim1, dim2)
    }

    fn select_scatter(&self, src: &Self, dim: i64, index: i64) -> Result<Self, NeuraRustError> {
        Tensor::select_scatter(self, src, dim, index)
    }

    fn slice_scatter(
        &self,
        src: &Self,
        dim: i64,
        start: Option<i64>,
        end: Option<i64>,
        step: i64,
    ) -> Result<Self, NeuraRustError> {
        Tensor::slice_scatter(self, src, dim, start, end, step)
    }

    fn sum_to(&self, size: &[usize]) -> Result<Self, NeuraRustError> {
        Tensor::sum_to(self, size)
    }

    fn unfold_backward(
        &self,
        input_sizes: &[usize],
        dimension: i64,
        size: usize,
        step: usize,
    ) -> Result<Self, NeuraRustError> {
        Tensor::unfold_backward(self, input_sizes, dimension, size, step)
    }
}
