use crate::error::NeuraRustError;
use crate::ops;
use crate::tensor::Tensor;
use crate::types::DType;

/// View-producing methods of `Tensor`.
///
/// Each method delegates to the matching `ops::view::*_op` function. Unless
/// stated otherwise the result shares storage with `self` and only its shape,
/// strides, offset or lazy flags differ.
impl Tensor {
    /// Reorders dimensions. `dims` must be a permutation of `0..rank`;
    /// negative entries count from the end.
    ///
    /// # Example
    /// ```
    /// use neurarust_functionalize::tensor;
    ///
    /// let t = tensor::arange(&[2, 3, 4]).unwrap();
    /// let p = t.permute(&[2, 0, 1]).unwrap();
    /// assert_eq!(p.shape(), vec![4, 2, 3]);
    /// assert!(p.shares_storage(&t));
    /// ```
    pub fn permute(&self, dims: &[i64]) -> Result<Tensor, NeuraRustError> {
        ops::view::permute_op(self, dims)
    }

    /// Swaps two dimensions.
    pub fn transpose(&self, dim0: i64, dim1: i64) -> Result<Tensor, NeuraRustError> {
        ops::view::transpose_op(self, dim0, dim1)
    }

    /// Transposes a tensor of rank at most 2.
    pub fn t(&self) -> Result<Tensor, NeuraRustError> {
        ops::view::t_op(self)
    }

    /// Removes every dimension of extent 1.
    pub fn squeeze(&self) -> Result<Tensor, NeuraRustError> {
        ops::view::squeeze_op(self)
    }

    /// Removes `dim` if its extent is 1; otherwise returns an alias.
    pub fn squeeze_dim(&self, dim: i64) -> Result<Tensor, NeuraRustError> {
        ops::view::squeeze_dim_op(self, dim)
    }

    /// Inserts a dimension of extent 1 at `dim` (valid range `[-rank-1, rank]`).
    pub fn unsqueeze(&self, dim: i64) -> Result<Tensor, NeuraRustError> {
        ops::view::unsqueeze_op(self, dim)
    }

    /// Broadcasts to `size` with stride-0 dimensions.
    pub fn expand(&self, size: &[i64]) -> Result<Tensor, NeuraRustError> {
        ops::view::expand_op(self, size)
    }

    /// Reshapes without copying. At most one entry of `size` may be `-1`.
    ///
    /// # Errors
    /// `InvalidView` if the strides of `self` cannot express the new shape.
    ///
    /// # Example
    /// ```
    /// use neurarust_functionalize::tensor;
    ///
    /// let t = tensor::arange(&[2, 6]).unwrap();
    /// assert_eq!(t.view(&[3, -1]).unwrap().shape(), vec![3, 4]);
    /// assert!(t.transpose(0, 1).unwrap().view(&[12]).is_err());
    /// ```
    pub fn view(&self, size: &[i64]) -> Result<Tensor, NeuraRustError> {
        ops::view::view_op(self, size)
    }

    /// Reinterprets the element bytes as `dtype`. See [`ops::view::view_dtype_op`].
    pub fn view_dtype(&self, dtype: DType) -> Result<Tensor, NeuraRustError> {
        ops::view::view_dtype_op(self, dtype)
    }

    /// View with explicitly given shape and strides at the current offset.
    pub fn reshape_alias(&self, size: &[usize], stride: &[usize]) -> Result<Tensor, NeuraRustError> {
        ops::view::reshape_alias_op(self, size, stride)
    }

    pub fn as_strided(&self, size: &[usize], stride: &[usize], storage_offset: Option<usize>) -> Result<Tensor, NeuraRustError> {
        ops::view::as_strided_op(self, size, stride, storage_offset)
    }

    /// `start:end:step` along `dim`, with Python-style bound clamping.
    pub fn slice(&self, dim: i64, start: Option<i64>, end: Option<i64>, step: i64) -> Result<Tensor, NeuraRustError> {
        ops::view::slice_op(self, dim, start, end, step)
    }

    pub fn narrow(&self, dim: i64, start: usize, length: usize) -> Result<Tensor, NeuraRustError> {
        ops::view::narrow_op(self, dim, start, length)
    }

    pub fn select(&self, dim: i64, index: i64) -> Result<Tensor, NeuraRustError> {
        ops::view::select_op(self, dim, index)
    }

    pub fn split(&self, split_size: usize, dim: i64) -> Result<Vec<Tensor>, NeuraRustError> {
        ops::view::split_op(self, split_size, dim)
    }

    pub fn split_with_sizes(&self, split_sizes: &[usize], dim: i64) -> Result<Vec<Tensor>, NeuraRustError> {
        ops::view::split_with_sizes_op(self, split_sizes, dim)
    }

    pub fn unbind(&self, dim: i64) -> Result<Vec<Tensor>, NeuraRustError> {
        ops::view::unbind_op(self, dim)
    }

    pub fn diagonal(&self, offset: i64, dim1: i64, dim2: i64) -> Result<Tensor, NeuraRustError> {
        ops::view::diagonal_op(self, offset, dim1, dim2)
    }

    /// Sliding windows along `dimension`; windows may overlap when `step < size`.
    pub fn unfold(&self, dimension: i64, size: usize, step: usize) -> Result<Tensor, NeuraRustError> {
        ops::view::unfold_op(self, dimension, size, step)
    }

    pub fn alias(&self) -> Result<Tensor, NeuraRustError> {
        ops::view::alias_op(self)
    }

    pub fn detach(&self) -> Result<Tensor, NeuraRustError> {
        ops::view::detach_op(self)
    }

    /// Lazy conjugate (flips the conjugate flag of complex tensors).
    pub fn conj(&self) -> Result<Tensor, NeuraRustError> {
        ops::view::conj_op(self)
    }

    /// Lazy negation (flips the negate flag).
    pub fn neg_view(&self) -> Result<Tensor, NeuraRustError> {
        ops::view::neg_view_op(self)
    }

    /// Negation into fresh storage. Not a view.
    pub fn neg(&self) -> Result<Tensor, NeuraRustError> {
        ops::arithmetic::neg_op(self)
    }

    pub fn resolve_conj(&self) -> Result<Tensor, NeuraRustError> {
        ops::view::resolve_conj_op(self)
    }

    pub fn resolve_neg(&self) -> Result<Tensor, NeuraRustError> {
        ops::view::resolve_neg_op(self)
    }

    pub fn view_as_real(&self) -> Result<Tensor, NeuraRustError> {
        ops::view::view_as_real_op(self)
    }

    pub fn view_as_complex(&self) -> Result<Tensor, NeuraRustError> {
        ops::view::view_as_complex_op(self)
    }

    /// Copy of `self` with `self[start:end:step]` along `dim` replaced by `src`.
    pub fn slice_scatter(
        &self,
        src: &Tensor,
        dim: i64,
        start: Option<i64>,
        end: Option<i64>,
        step: i64,
    ) -> Result<Tensor, NeuraRustError> {
        ops::scatter::slice_scatter_op(self, src, dim, start, end, step)
    }

    pub fn select_scatter(&self, src: &Tensor, dim: i64, index: i64) -> Result<Tensor, NeuraRustError> {
        ops::scatter::select_scatter_op(self, src, dim, index)
    }

    pub fn diagonal_scatter(&self, src: &Tensor, offset: i64, dim1: i64, dim2: i64) -> Result<Tensor, NeuraRustError> {
        ops::scatter::diagonal_scatter_op(self, src, offset, dim1, dim2)
    }

    /// Sums broadcast dimensions away so the result has shape `size`.
    pub fn sum_to(&self, size: &[usize]) -> Result<Tensor, NeuraRustError> {
        ops::reduction::sum_to_op(self, size)
    }

    /// Folds `unfold` windows held by `self` back into shape `input_sizes`.
    pub fn unfold_backward(&self, input_sizes: &[usize], dimension: i64, size: usize, step: usize) -> Result<Tensor, NeuraRustError> {
        ops::scatter::unfold_backward_op(self, input_sizes, dimension, size, step)
    }
}
