//! Dimension wraparound shared by the view operators and their inverses.

use crate::error::NeuraRustError;

/// Maps a possibly negative axis index into `[0, rank)`.
///
/// Negative indices count from the last axis (`-1` is `rank - 1`). A rank-0
/// tensor wraps as if it had rank 1, so `0` and `-1` are both valid for
/// scalars and map to `0`.
///
/// # Errors
/// `DimOutOfRange` if `dim` is outside `[-rank, rank - 1]`.
pub fn maybe_wrap_dim(dim: i64, rank: usize) -> Result<usize, NeuraRustError> {
    let rank = rank.max(1) as i64;
    let min = -rank;
    let max = rank - 1;
    if dim < min || dim > max {
        return Err(NeuraRustError::DimOutOfRange { dim, min, max });
    }
    Ok(if dim < 0 { (dim + rank) as usize } else { dim as usize })
}

/// Wraps every entry of `dims` against `rank`.
pub fn maybe_wrap_dims(dims: &[i64], rank: usize) -> Result<Vec<usize>, NeuraRustError> {
    dims.iter().map(|&d| maybe_wrap_dim(d, rank)).collect()
}
