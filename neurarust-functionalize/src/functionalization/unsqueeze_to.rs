//! Re-inserting the size-1 axes a squeeze removed.

use super::backend::ViewOps;
use crate::dim::maybe_wrap_dim;
use crate::error::NeuraRustError;

/// Inserts a size-1 axis into `tensor` at every position where `sizes` has
/// extent 1, scanning left to right.
pub fn unsqueeze_to<T: ViewOps>(tensor: &T, sizes: &[usize]) -> Result<T, NeuraRustError> {
    let mut result = tensor.clone();
    for (dim, &size) in sizes.iter().enumerate() {
        if size == 1 {
            result = result.unsqueeze(dim as i64)?;
        }
    }
    Ok(result)
}

/// Inserts a size-1 axis at `dim` if `sizes` has extent 1 there; otherwise
/// returns `tensor` unchanged. `dim` is wrapped against the rank of `sizes`.
///
/// A scalar `sizes` never gets an axis inserted.
pub fn unsqueeze_to_dim<T: ViewOps>(tensor: &T, dim: i64, sizes: &[usize]) -> Result<T, NeuraRustError> {
    let d = maybe_wrap_dim(dim, sizes.len())?;
    if !sizes.is_empty() && sizes[d] == 1 {
        return tensor.unsqueeze(d as i64);
    }
    Ok(tensor.clone())
}
