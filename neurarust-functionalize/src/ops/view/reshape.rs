use crate::error::NeuraRustError;
use crate::tensor::utils::infer_size;
use crate::tensor::Tensor;
use crate::tensor_data::Layout;

/// Computes strides that let a tensor with `old_shape`/`old_strides` be viewed as
/// `new_shape` without copying, or `None` when some new dimension would have to
/// span two non-contiguous chunks of the old layout.
///
/// Dimensions are matched in contiguous "chunks": a run of old dimensions that
/// are laid out contiguously relative to each other can be regrouped freely.
pub fn compute_stride(old_shape: &[usize], old_strides: &[usize], new_shape: &[usize]) -> Option<Vec<usize>> {
    if old_shape.is_empty() {
        return Some(vec![1; new_shape.len()]);
    }

    let numel: usize = old_shape.iter().product();
    if numel == 0 && old_shape == new_shape {
        return Some(old_strides.to_vec());
    }

    let mut new_strides = vec![0usize; new_shape.len()];
    if numel == 0 {
        for view_d in (0..new_shape.len()).rev() {
            new_strides[view_d] = if view_d == new_shape.len() - 1 {
                1
            } else {
                new_shape[view_d + 1].max(1) * new_strides[view_d + 1]
            };
        }
        return Some(new_strides);
    }

    let mut view_d = new_shape.len() as isize - 1;
    let mut chunk_base_stride = *old_strides.last()?;
    let mut tensor_numel = 1usize;
    let mut view_numel = 1usize;
    for tensor_d in (0..old_shape.len()).rev() {
        tensor_numel *= old_shape[tensor_d];
        let chunk_ends = tensor_d == 0
            || (old_shape[tensor_d - 1] != 1 && old_strides[tensor_d - 1] != tensor_numel * chunk_base_stride);
        if chunk_ends {
            while view_d >= 0 && (view_numel < tensor_numel || new_shape[view_d as usize] == 1) {
                new_strides[view_d as usize] = view_numel * chunk_base_stride;
                view_numel *= new_shape[view_d as usize];
                view_d -= 1;
            }
            if view_numel != tensor_numel {
                return None;
            }
            if tensor_d > 0 {
                chunk_base_stride = old_strides[tensor_d - 1];
                tensor_numel = 1;
                view_numel = 1;
            }
        }
    }
    if view_d != -1 {
        return None;
    }
    Some(new_strides)
}

pub(crate) fn view_layout(layout: &Layout, size: &[i64]) -> Result<Layout, NeuraRustError> {
    let new_shape = infer_size(size, layout.numel(), "view")?;
    let new_strides = compute_stride(&layout.shape, &layout.strides, &new_shape).ok_or_else(|| {
        NeuraRustError::invalid_view(
            "view",
            "view size is not compatible with input tensor's size and stride (at least one dimension spans across two contiguous subspaces)",
        )
    })?;
    Ok(Layout::new(new_shape, new_strides, layout.offset))
}

/// Reinterprets `input` with a new shape sharing the same storage. At most one
/// entry of `size` may be `-1`.
pub fn view_op(input: &Tensor, size: &[i64]) -> Result<Tensor, NeuraRustError> {
    let layout = view_layout(input.layout(), size)?;
    input.restride(layout, "view")
}

/// Puts the given `size` and `stride` on the storage of `input`, keeping its offset.
///
/// Unlike [`view_op`] nothing is inferred: the caller supplies a stride that is
/// known to be valid for the storage (as reshape does when it can avoid a copy).
pub fn reshape_alias_op(input: &Tensor, size: &[usize], stride: &[usize]) -> Result<Tensor, NeuraRustError> {
    if size.len() != stride.len() {
        return Err(NeuraRustError::RankMismatch {
            expected: size.len(),
            actual: stride.len(),
        });
    }
    let layout = Layout::new(size.to_vec(), stride.to_vec(), input.offset());
    input.restride(layout, "_reshape_alias")
}

#[cfg(test)]
#[path = "reshape_test.rs"]
mod tests;
