use crate::dim::maybe_wrap_dim;
use crate::error::NeuraRustError;
use crate::tensor::Tensor;
use crate::tensor_data::Layout;

/// Number of windows of `size` taken every `step` elements from a dimension of `dim_size`.
pub(crate) fn unfold_window_count(dim_size: usize, size: usize, step: usize) -> usize {
    (dim_size - size) / step + 1
}

/// Sliding windows of `size` elements taken every `step` elements along
/// `dimension`. The window count replaces `dimension` and the window contents
/// become a new trailing dimension.
pub(crate) fn unfold_layout(layout: &Layout, dimension: i64, size: usize, step: usize) -> Result<Layout, NeuraRustError> {
    let rank = layout.rank();
    let d = maybe_wrap_dim(dimension, rank)?;
    let max_size = if rank == 0 { 1 } else { layout.shape[d] };
    if size > max_size {
        return Err(NeuraRustError::invalid_view(
            "unfold",
            format!("maximum size for tensor at dimension {} is {} but size is {}", d, max_size, size),
        ));
    }
    if step == 0 {
        return Err(NeuraRustError::invalid_view("unfold", "step is 0 but must be > 0"));
    }

    if rank == 0 {
        return Ok(Layout::new(vec![size], vec![1], layout.offset));
    }
    let mut out = layout.clone();
    out.shape[d] = unfold_window_count(max_size, size, step);
    out.strides[d] = layout.strides[d] * step;
    out.shape.push(size);
    out.strides.push(layout.strides[d]);
    Ok(out)
}

pub fn unfold_op(input: &Tensor, dimension: i64, size: usize, step: usize) -> Result<Tensor, NeuraRustError> {
    let layout = unfold_layout(input.layout(), dimension, size, step)?;
    input.restride(layout, "unfold")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor;

    #[test]
    fn test_unfold_non_overlapping() -> Result<(), NeuraRustError> {
        let t = tensor::arange(&[6])?;
        let u = unfold_op(&t, 0, 2, 2)?;
        assert_eq!(u.shape(), vec![3, 2]);
        assert_eq!(u.get_f32_data()?, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        Ok(())
    }

    #[test]
    fn test_unfold_overlapping_windows() -> Result<(), NeuraRustError> {
        let t = tensor::arange(&[2, 5])?;
        let u = unfold_op(&t, -1, 3, 1)?;
        assert_eq!(u.shape(), vec![2, 3, 3]);
        assert_eq!(
            u.get_f32_data()?[..9].to_vec(),
            vec![0.0, 1.0, 2.0, 1.0, 2.0, 3.0, 2.0, 3.0, 4.0]
        );
        Ok(())
    }

    #[test]
    fn test_unfold_invalid_arguments() -> Result<(), NeuraRustError> {
        let t = tensor::arange(&[4])?;
        assert!(matches!(unfold_op(&t, 0, 5, 1), Err(NeuraRustError::InvalidView { .. })));
        assert!(matches!(unfold_op(&t, 0, 2, 0), Err(NeuraRustError::InvalidView { .. })));
        Ok(())
    }

    #[test]
    fn test_unfold_scalar() -> Result<(), NeuraRustError> {
        let t = Tensor::new(vec![5.0], vec![])?;
        let u = unfold_op(&t, 0, 1, 1)?;
        assert_eq!(u.shape(), vec![1]);
        assert_eq!(u.get_f32_data()?, vec![5.0]);
        Ok(())
    }
}
