//! Out-of-place scatters: each returns a copy of a base tensor in which the
//! region a view operator would select has been overwritten by a source tensor.
//!
//! The region is obtained by applying the matching `*_layout` view function to
//! a contiguous layout of the base shape, so a scatter addresses exactly the
//! elements its view reads.

pub mod diagonal_scatter;
pub mod select_scatter;
pub mod slice_scatter;
pub mod unfold_backward;

pub use diagonal_scatter::diagonal_scatter_op;
pub use select_scatter::select_scatter_op;
pub use slice_scatter::slice_scatter_op;
pub use unfold_backward::unfold_backward_op;

use log::trace;

use crate::error::NeuraRustError;
use crate::tensor::Tensor;
use crate::tensor_data::Layout;
use crate::types::Element;
use crate::with_element_type;

/// How source values combine with what is already in the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScatterMode {
    Overwrite,
    /// Elements addressed more than once receive the sum of every write.
    Accumulate,
}

fn scatter_kernel<T: Element>(
    base: &Tensor,
    src: &Tensor,
    region: &Layout,
    mode: ScatterMode,
) -> Result<Tensor, NeuraRustError> {
    let mut out = base.to_vec::<T>()?;
    let values = src.to_vec::<T>()?;
    for (offset, value) in region.offsets().zip(values) {
        out[offset] = match mode {
            ScatterMode::Overwrite => value,
            ScatterMode::Accumulate => out[offset] + value,
        };
    }
    Tensor::from_vec(out, base.shape())
}

/// Writes `src` into `region` of a contiguous copy of `base`.
///
/// `region` must be a layout over `Layout::contiguous(base.shape())`.
pub(crate) fn scatter_into_region(
    base: &Tensor,
    src: &Tensor,
    region: &Layout,
    mode: ScatterMode,
    operation: &str,
) -> Result<Tensor, NeuraRustError> {
    if src.dtype() != base.dtype() {
        return Err(NeuraRustError::DataTypeMismatch {
            expected: base.dtype(),
            actual: src.dtype(),
            operation: operation.to_string(),
        });
    }
    if src.shape() != region.shape {
        return Err(NeuraRustError::ShapeMismatch {
            expected: region.shape.clone(),
            actual: src.shape(),
            operation: operation.to_string(),
        });
    }
    trace!(
        "{}: writing {} elements into base of shape {:?} ({:?})",
        operation,
        region.numel(),
        base.shape(),
        mode
    );
    with_element_type!(base.dtype(), T => scatter_kernel::<T>(base, src, region, mode))
}
