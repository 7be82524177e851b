use super::{scatter_into_region, ScatterMode};
use crate::error::NeuraRustError;
use crate::ops::view::slice::slice_layout;
use crate::tensor::Tensor;
use crate::tensor_data::Layout;

/// Copy of `base` with `base[start:end:step]` along `dim` replaced by `src`.
///
/// Bounds follow the same normalization as `slice_op`.
pub fn slice_scatter_op(
    base: &Tensor,
    src: &Tensor,
    dim: i64,
    start: Option<i64>,
    end: Option<i64>,
    step: i64,
) -> Result<Tensor, NeuraRustError> {
    let region = slice_layout(&Layout::contiguous(&base.shape()), dim, start, end, step)?;
    scatter_into_region(base, src, &region, ScatterMode::Overwrite, "slice_scatter")
}
