use super::select::select_op;
use super::slice::narrow_op;
use super::utils::require_rank;
use crate::dim::maybe_wrap_dim;
use crate::error::NeuraRustError;
use crate::tensor::Tensor;

/// Splits `dim` into chunks of `split_size`; the last chunk may be smaller.
pub fn split_op(input: &Tensor, split_size: usize, dim: i64) -> Result<Vec<Tensor>, NeuraRustError> {
    require_rank(input.rank(), "split")?;
    let d = maybe_wrap_dim(dim, input.rank())?;
    let dim_size = input.layout().shape[d];
    if split_size == 0 && dim_size != 0 {
        return Err(NeuraRustError::invalid_view(
            "split",
            format!("split_size can only be 0 if dimension size is 0, but got dimension size of {}", dim_size),
        ));
    }
    let num_splits = if split_size == 0 {
        1
    } else {
        dim_size.div_ceil(split_size).max(1)
    };
    let mut chunks = Vec::with_capacity(num_splits);
    for i in 0..num_splits {
        let start = i * split_size;
        let length = split_size.min(dim_size.saturating_sub(start));
        chunks.push(narrow_op(input, d as i64, start, length)?);
    }
    Ok(chunks)
}

/// Splits `dim` into consecutive chunks whose extents are `split_sizes`.
pub fn split_with_sizes_op(input: &Tensor, split_sizes: &[usize], dim: i64) -> Result<Vec<Tensor>, NeuraRustError> {
    require_rank(input.rank(), "split_with_sizes")?;
    let d = maybe_wrap_dim(dim, input.rank())?;
    let dim_size = input.layout().shape[d];
    let total: usize = split_sizes.iter().sum();
    if total != dim_size {
        return Err(NeuraRustError::invalid_view(
            "split_with_sizes",
            format!(
                "split_sizes {:?} must sum exactly to the size of dimension {} ({}), but got sum {}",
                split_sizes, d, dim_size, total
            ),
        ));
    }
    let mut start = 0;
    let mut chunks = Vec::with_capacity(split_sizes.len());
    for &length in split_sizes {
        chunks.push(narrow_op(input, d as i64, start, length)?);
        start += length;
    }
    Ok(chunks)
}

/// One view per position along `dim`, each with `dim` removed.
pub fn unbind_op(input: &Tensor, dim: i64) -> Result<Vec<Tensor>, NeuraRustError> {
    require_rank(input.rank(), "unbind")?;
    let d = maybe_wrap_dim(dim, input.rank())?;
    (0..input.layout().shape[d])
        .map(|i| select_op(input, d as i64, i as i64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor;

    #[test]
    fn test_split_last_chunk_is_clamped() -> Result<(), NeuraRustError> {
        let t = tensor::arange(&[7])?;
        let chunks = split_op(&t, 3, 0)?;
        let shapes: Vec<Vec<usize>> = chunks.iter().map(|c| c.shape()).collect();
        assert_eq!(shapes, vec![vec![3], vec![3], vec![1]]);
        assert_eq!(chunks[2].get_f32_data()?, vec![6.0]);
        Ok(())
    }

    #[test]
    fn test_split_zero_size() -> Result<(), NeuraRustError> {
        let t = tensor::arange(&[0, 2])?;
        assert_eq!(split_op(&t, 0, 0)?.len(), 1);
        let u = tensor::arange(&[3])?;
        assert!(split_op(&u, 0, 0).is_err());
        Ok(())
    }

    #[test]
    fn test_split_with_sizes() -> Result<(), NeuraRustError> {
        let t = tensor::arange(&[2, 6])?;
        let chunks = split_with_sizes_op(&t, &[1, 2, 3], -1)?;
        assert_eq!(chunks[1].get_f32_data()?, vec![1.0, 2.0, 7.0, 8.0]);
        assert_eq!(chunks[2].shape(), vec![2, 3]);
        assert!(split_with_sizes_op(&t, &[1, 2], 1).is_err());
        Ok(())
    }

    #[test]
    fn test_unbind() -> Result<(), NeuraRustError> {
        let t = tensor::arange(&[2, 3])?;
        let parts = unbind_op(&t, 1)?;
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2].get_f32_data()?, vec![2.0, 5.0]);
        Ok(())
    }
}
