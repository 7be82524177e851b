// neurarust-functionalize/src/ops/view/slice.rs

use super::utils::require_rank;
use crate::dim::maybe_wrap_dim;
use crate::error::NeuraRustError;
use crate::tensor::Tensor;
use crate::tensor_data::Layout;

/// A validated `start:end:step` range along one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceRange {
    /// The starting index (inclusive) in the original dimension.
    pub start: usize,
    /// The step size for the slice.
    pub step: usize,
    /// The number of elements selected in this dimension.
    pub size: usize,
}

impl SliceRange {
    /// Normalizes optional, possibly negative bounds against `dim_size`.
    ///
    /// Missing `start` means 0 and missing `end` means "to the end". Negative
    /// bounds count from the end. Bounds are clamped to `[0, dim_size]` and an
    /// `end` before `start` yields an empty range.
    pub fn normalize(start: Option<i64>, end: Option<i64>, step: i64, dim_size: usize) -> Result<Self, NeuraRustError> {
        if step <= 0 {
            return Err(NeuraRustError::invalid_view("slice", "slice step must be positive"));
        }
        let size = dim_size as i64;
        let mut start = start.unwrap_or(0);
        let mut end = end.unwrap_or(i64::MAX);
        if start < 0 {
            start += size;
        }
        if end < 0 {
            end += size;
        }
        let start = start.clamp(0, size);
        let end = end.clamp(start, size);
        let len = if end > start { (end - start - 1) / step + 1 } else { 0 };
        Ok(SliceRange {
            start: start as usize,
            step: step as usize,
            size: len as usize,
        })
    }
}

pub(crate) fn slice_layout(
    layout: &Layout,
    dim: i64,
    start: Option<i64>,
    end: Option<i64>,
    step: i64,
) -> Result<Layout, NeuraRustError> {
    require_rank(layout.rank(), "slice")?;
    let d = maybe_wrap_dim(dim, layout.rank())?;
    let range = SliceRange::normalize(start, end, step, layout.shape[d])?;
    let mut out = layout.clone();
    if range.size > 0 {
        out.offset += range.start * layout.strides[d];
    }
    out.shape[d] = range.size;
    // stride along a single-element dimension is never used to step
    if range.size > 1 {
        out.strides[d] *= range.step;
    }
    Ok(out)
}

/// View of `input` restricted to `start:end:step` along `dim`.
pub fn slice_op(
    input: &Tensor,
    dim: i64,
    start: Option<i64>,
    end: Option<i64>,
    step: i64,
) -> Result<Tensor, NeuraRustError> {
    let layout = slice_layout(input.layout(), dim, start, end, step)?;
    input.restride(layout, "slice")
}

/// `length` elements of `dim` starting at `start` (no clamping).
pub fn narrow_op(input: &Tensor, dim: i64, start: usize, length: usize) -> Result<Tensor, NeuraRustError> {
    let dim_size = input.size(dim)?;
    if start + length > dim_size {
        return Err(NeuraRustError::invalid_view(
            "narrow",
            format!("start ({}) + length ({}) exceeds dimension size ({})", start, length, dim_size),
        ));
    }
    slice_op(input, dim, Some(start as i64), Some((start + length) as i64), 1)
}

#[cfg(test)]
#[path = "slice_test.rs"]
mod tests;
