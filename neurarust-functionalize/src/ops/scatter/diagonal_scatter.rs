use super::{scatter_into_region, ScatterMode};
use crate::error::NeuraRustError;
use crate::ops::view::diagonal::diagonal_layout;
use crate::tensor::Tensor;
use crate::tensor_data::Layout;

/// Copy of `base` whose `(dim1, dim2)` diagonal at `offset` is replaced by `src`.
pub fn diagonal_scatter_op(
    base: &Tensor,
    src: &Tensor,
    offset: i64,
    dim1: i64,
    dim2: i64,
) -> Result<Tensor, NeuraRustError> {
    let region = diagonal_layout(&Layout::contiguous(&base.shape()), offset, dim1, dim2)?;
    scatter_into_region(base, src, &region, ScatterMode::Overwrite, "diagonal_scatter")
}
