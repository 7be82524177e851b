use super::{scatter_into_region, ScatterMode};
use crate::error::NeuraRustError;
use crate::ops::view::select::select_layout;
use crate::tensor::Tensor;
use crate::tensor_data::Layout;

/// Copy of `base` with position `index` along `dim` replaced by `src`.
/// `src` has the shape of `base` without `dim`.
pub fn select_scatter_op(base: &Tensor, src: &Tensor, dim: i64, index: i64) -> Result<Tensor, NeuraRustError> {
    let region = select_layout(&Layout::contiguous(&base.shape()), dim, index)?;
    scatter_into_region(base, src, &region, ScatterMode::Overwrite, "select_scatter")
}
