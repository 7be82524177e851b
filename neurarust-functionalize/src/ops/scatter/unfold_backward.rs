use super::{scatter_into_region, ScatterMode};
use crate::error::NeuraRustError;
use crate::ops::view::unfold::unfold_layout;
use crate::tensor::{self, Tensor};
use crate::tensor_data::Layout;

/// Folds windows produced by `unfold(dimension, size, step)` back into a
/// tensor of shape `input_sizes`.
///
/// Every window element is added to the position it was read from. Positions
/// covered by several windows (`step < size`) receive the sum of all of them;
/// positions covered by none are zero.
pub fn unfold_backward_op(
    grad: &Tensor,
    input_sizes: &[usize],
    dimension: i64,
    size: usize,
    step: usize,
) -> Result<Tensor, NeuraRustError> {
    let region = unfold_layout(&Layout::contiguous(input_sizes), dimension, size, step)?;
    let zero = tensor::zeros_dtype(input_sizes, grad.dtype())?;
    scatter_into_region(&zero, grad, &region, ScatterMode::Accumulate, "unfold_backward")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::view::unfold_op;

    #[test]
    fn test_unfold_backward_non_overlapping_roundtrip() -> Result<(), NeuraRustError> {
        let t = tensor::arange(&[6])?;
        let windows = unfold_op(&t, 0, 3, 3)?;
        assert_eq!(unfold_backward_op(&windows, &[6], 0, 3, 3)?, t);
        Ok(())
    }

    #[test]
    fn test_unfold_backward_accumulates_overlap() -> Result<(), NeuraRustError> {
        let ones = tensor::ones(&[3, 2])?;
        // windows [0,1], [1,2], [2,3] over a length-4 dimension
        let folded = unfold_backward_op(&ones, &[4], 0, 2, 1)?;
        assert_eq!(folded.get_f32_data()?, vec![1.0, 2.0, 2.0, 1.0]);
        Ok(())
    }

    #[test]
    fn test_unfold_backward_zeroes_uncovered_tail() -> Result<(), NeuraRustError> {
        let ones = tensor::ones(&[2, 2])?;
        // windows [0,1], [3,4]; positions 2 and 5 are never read
        let folded = unfold_backward_op(&ones, &[6], 0, 2, 3)?;
        assert_eq!(folded.get_f32_data()?, vec![1.0, 1.0, 0.0, 1.0, 1.0, 0.0]);
        Ok(())
    }

    #[test]
    fn test_unfold_backward_inner_dim() -> Result<(), NeuraRustError> {
        let t = tensor::arange(&[2, 4])?;
        let windows = unfold_op(&t, 1, 2, 2)?;
        assert_eq!(windows.shape(), vec![2, 2, 2]);
        assert_eq!(unfold_backward_op(&windows, &[2, 4], -1, 2, 2)?, t);
        Ok(())
    }
}
