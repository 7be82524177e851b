use crate::dim::maybe_wrap_dim;
use crate::error::NeuraRustError;

/// Wraps and validates permutation axes: every axis of `rank` must appear exactly once.
pub fn validate_permutation(rank: usize, dims: &[i64]) -> Result<Vec<usize>, NeuraRustError> {
    if dims.len() != rank {
        return Err(NeuraRustError::RankMismatch {
            expected: rank,
            actual: dims.len(),
        });
    }
    let mut seen = vec![false; rank];
    let mut wrapped = Vec::with_capacity(rank);
    for &axis in dims {
        let axis_w = maybe_wrap_dim(axis, rank)?;
        if seen[axis_w] {
            return Err(NeuraRustError::InvalidPermutation {
                dims: dims.to_vec(),
                rank,
            });
        }
        seen[axis_w] = true;
        wrapped.push(axis_w);
    }
    Ok(wrapped)
}

/// Calculates the new shape after permutation.
pub fn permute_shape(shape: &[usize], dims: &[usize]) -> Vec<usize> {
    dims.iter().map(|&axis| shape[axis]).collect()
}

/// Calculates the new strides after permutation.
pub fn permute_strides(strides: &[usize], dims: &[usize]) -> Vec<usize> {
    dims.iter().map(|&axis| strides[axis]).collect()
}

/// Rejects view operators that index into a dimension of a 0-dim tensor.
pub(crate) fn require_rank(rank: usize, operation: &str) -> Result<(), NeuraRustError> {
    if rank == 0 {
        return Err(NeuraRustError::invalid_view(
            operation,
            format!("{}() cannot be applied to a 0-dim tensor", operation),
        ));
    }
    Ok(())
}
