//! One inverse per view operator.
//!
//! Every function takes the base the view was taken from, the current value of
//! the view and the arguments the view was built with, and returns a new base
//! in which the viewed region holds the view's value. Nothing is mutated.
//!
//! Which part of `base` each inverse reads is recorded by
//! [`ViewOpKind::base_usage`](super::ViewOpKind::base_usage).

use super::backend::ViewOps;
use super::unsqueeze_to::{unsqueeze_to, unsqueeze_to_dim};
use crate::dim::{maybe_wrap_dim, maybe_wrap_dims};
use crate::error::NeuraRustError;
use crate::types::DType;

/// Extent of `dim` in `base`, with `dim` wrapped. Rank-0 bases have no extent to split.
fn wrapped_dim_size<T: ViewOps>(base: &T, dim: i64, operation: &str) -> Result<(usize, usize), NeuraRustError> {
    let sizes = base.sizes();
    let d = maybe_wrap_dim(dim, sizes.len())?;
    match sizes.get(d) {
        Some(&size) => Ok((d, size)),
        None => Err(NeuraRustError::invalid_view(
            operation,
            "cannot be applied to a 0-dim tensor",
        )),
    }
}

fn chunk_out_of_range(index: usize, dim: usize, size: usize) -> NeuraRustError {
    NeuraRustError::IndexOutOfRange {
        index: index as i64,
        dim,
        size,
    }
}

/// Writes `chunk` over `[start, end)` of dimension `dim`. Bounds past the
/// extent are clamped by the slice, so they fit in `i64`.
fn slice_scatter_chunk<T: ViewOps>(base: &T, chunk: &T, dim: usize, start: usize, end: usize) -> Result<T, NeuraRustError> {
    let start = start.min(end) as i64;
    base.slice_scatter(chunk, dim as i64, Some(start), Some(end as i64), 1)
}

fn sizes_as_i64(sizes: &[usize]) -> Vec<i64> {
    sizes.iter().map(|&s| s as i64).collect()
}

pub fn view_as_real_inverse<T: ViewOps>(_base: &T, mutated_view: &T) -> Result<T, NeuraRustError> {
    mutated_view.view_as_complex()
}

/// The pending conjugate is resolved first so that it is not carried through
/// the real reinterpretation.
pub fn view_as_complex_inverse<T: ViewOps>(_base: &T, mutated_view: &T) -> Result<T, NeuraRustError> {
    mutated_view.resolve_conj()?.view_as_real()
}

pub fn conj_inverse<T: ViewOps>(_base: &T, mutated_view: &T) -> Result<T, NeuraRustError> {
    mutated_view.conj()
}

pub fn neg_view_inverse<T: ViewOps>(_base: &T, mutated_view: &T) -> Result<T, NeuraRustError> {
    mutated_view.neg()
}

pub fn diagonal_inverse<T: ViewOps>(
    base: &T,
    mutated_view: &T,
    offset: i64,
    dim1: i64,
    dim2: i64,
) -> Result<T, NeuraRustError> {
    base.diagonal_scatter(mutated_view, offset, dim1, dim2)
}

/// Expanded elements all alias one base element, so their values are summed
/// back into it.
pub fn expand_inverse<T: ViewOps>(
    base: &T,
    mutated_view: &T,
    _size: &[i64],
    _implicit: bool,
) -> Result<T, NeuraRustError> {
    mutated_view.sum_to(&base.sizes())
}

/// Applies the permutation that undoes `dims` to `tensor`.
pub fn apply_inverse_permutation<T: ViewOps>(tensor: &T, dims: &[i64]) -> Result<T, NeuraRustError> {
    let rank = tensor.rank();
    let wrapped = maybe_wrap_dims(dims, rank)?;
    let mut inverse = vec![0i64; wrapped.len()];
    for (i, &d) in wrapped.iter().enumerate() {
        if d >= inverse.len() {
            return Err(NeuraRustError::InvalidPermutation {
                dims: dims.to_vec(),
                rank,
            });
        }
        inverse[d] = i as i64;
    }
    tensor.permute(&inverse)
}

pub fn permute_inverse<T: ViewOps>(_base: &T, mutated_view: &T, dims: &[i64]) -> Result<T, NeuraRustError> {
    apply_inverse_permutation(mutated_view, dims)
}

pub fn reshape_alias_inverse<T: ViewOps>(
    base: &T,
    mutated_view: &T,
    _size: &[usize],
    _stride: &[usize],
) -> Result<T, NeuraRustError> {
    mutated_view.reshape_alias(&base.sizes(), &base.strides())
}

pub fn select_inverse<T: ViewOps>(base: &T, mutated_view: &T, dim: i64, index: i64) -> Result<T, NeuraRustError> {
    base.select_scatter(mutated_view, dim, index)
}

pub fn detach_inverse<T: ViewOps>(_base: &T, mutated_view: &T) -> Result<T, NeuraRustError> {
    Ok(mutated_view.clone())
}

pub fn slice_inverse<T: ViewOps>(
    base: &T,
    mutated_view: &T,
    dim: i64,
    start: Option<i64>,
    end: Option<i64>,
    step: i64,
) -> Result<T, NeuraRustError> {
    base.slice_scatter(mutated_view, dim, start, end, step)
}

/// Chunk `index` covers `[index * split_size, min((index + 1) * split_size, dim_size))`.
/// Indices past the last chunk the forward split produces are rejected.
pub fn split_inverse<T: ViewOps>(
    base: &T,
    mutated_view: &T,
    index: usize,
    split_size: usize,
    dim: i64,
) -> Result<T, NeuraRustError> {
    let (d, dim_size) = wrapped_dim_size(base, dim, "split")?;
    let chunk_count = if split_size == 0 {
        1
    } else {
        dim_size.div_ceil(split_size).max(1)
    };
    if index >= chunk_count {
        return Err(chunk_out_of_range(index, d, chunk_count));
    }
    let start = index * split_size;
    let end = start.saturating_add(split_size).min(dim_size);
    slice_scatter_chunk(base, mutated_view, d, start, end)
}

/// Chunk `index` starts at the sum of the sizes before it.
pub fn split_with_sizes_inverse<T: ViewOps>(
    base: &T,
    mutated_view: &T,
    index: usize,
    split_sizes: &[usize],
    dim: i64,
) -> Result<T, NeuraRustError> {
    let (d, dim_size) = wrapped_dim_size(base, dim, "split_with_sizes")?;
    let length = *split_sizes
        .get(index)
        .ok_or_else(|| chunk_out_of_range(index, d, split_sizes.len()))?;
    let start = split_sizes[..index]
        .iter()
        .try_fold(0usize, |acc, &s| acc.checked_add(s))
        .ok_or_else(|| chunk_out_of_range(index, d, dim_size))?;
    let end = start.saturating_add(length).min(dim_size);
    slice_scatter_chunk(base, mutated_view, d, start, end)
}

pub fn squeeze_inverse<T: ViewOps>(base: &T, mutated_view: &T) -> Result<T, NeuraRustError> {
    unsqueeze_to(mutated_view, &base.sizes())
}

/// Squeezing a dimension whose extent is not 1 did nothing, and neither does this.
pub fn squeeze_dim_inverse<T: ViewOps>(base: &T, mutated_view: &T, dim: i64) -> Result<T, NeuraRustError> {
    unsqueeze_to_dim(mutated_view, dim, &base.sizes())
}

pub fn t_inverse<T: ViewOps>(_base: &T, mutated_view: &T) -> Result<T, NeuraRustError> {
    mutated_view.t()
}

pub fn transpose_inverse<T: ViewOps>(_base: &T, mutated_view: &T, dim0: i64, dim1: i64) -> Result<T, NeuraRustError> {
    mutated_view.transpose(dim0, dim1)
}

pub fn unsqueeze_inverse<T: ViewOps>(_base: &T, mutated_view: &T, dim: i64) -> Result<T, NeuraRustError> {
    mutated_view.squeeze_dim(dim)
}

pub fn unbind_inverse<T: ViewOps>(base: &T, mutated_view: &T, index: i64, dim: i64) -> Result<T, NeuraRustError> {
    let (d, _) = wrapped_dim_size(base, dim, "unbind")?;
    base.select_scatter(mutated_view, d as i64, index)
}

pub fn view_inverse<T: ViewOps>(base: &T, mutated_view: &T, _size: &[i64]) -> Result<T, NeuraRustError> {
    mutated_view.view(&sizes_as_i64(&base.sizes()))
}

pub fn view_dtype_inverse<T: ViewOps>(base: &T, mutated_view: &T, _dtype: DType) -> Result<T, NeuraRustError> {
    mutated_view.view_dtype(base.dtype())
}

/// Elements read by several overlapping windows (`step < size`) receive the
/// sum of every window's value.
pub fn unfold_inverse<T: ViewOps>(
    base: &T,
    mutated_view: &T,
    dimension: i64,
    size: usize,
    step: usize,
) -> Result<T, NeuraRustError> {
    mutated_view.unfold_backward(&base.sizes(), dimension, size, step)
}

pub fn alias_inverse<T: ViewOps>(_base: &T, mutated_view: &T) -> Result<T, NeuraRustError> {
    Ok(mutated_view.clone())
}

#[cfg(test)]
#[path = "inverses_test.rs"]
mod tests;
