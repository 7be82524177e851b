use crate::dim::maybe_wrap_dim;
use crate::error::NeuraRustError;
use crate::tensor::Tensor;
use crate::tensor_data::Layout;

pub(crate) fn transpose_layout(layout: &Layout, dim0: i64, dim1: i64) -> Result<Layout, NeuraRustError> {
    let rank = layout.rank();
    let d0 = maybe_wrap_dim(dim0, rank)?;
    let d1 = maybe_wrap_dim(dim1, rank)?;
    let mut out = layout.clone();
    if rank == 0 || d0 == d1 {
        return Ok(out);
    }
    out.shape.swap(d0, d1);
    out.strides.swap(d0, d1);
    Ok(out)
}

/// Swaps dimensions `dim0` and `dim1`.
pub fn transpose_op(input: &Tensor, dim0: i64, dim1: i64) -> Result<Tensor, NeuraRustError> {
    let layout = transpose_layout(input.layout(), dim0, dim1)?;
    input.restride(layout, "transpose")
}

/// Matrix transpose: tensors of rank <= 2 only, rank 0 and 1 are returned unchanged.
pub fn t_op(input: &Tensor) -> Result<Tensor, NeuraRustError> {
    let rank = input.rank();
    if rank > 2 {
        return Err(NeuraRustError::invalid_view(
            "t",
            format!("t() expects a tensor with <= 2 dimensions, but self is {}D", rank),
        ));
    }
    if rank < 2 {
        return input.restride(input.layout().clone(), "t");
    }
    transpose_op(input, 0, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor;

    #[test]
    fn test_transpose_basic() -> Result<(), NeuraRustError> {
        let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])?;
        let tt = transpose_op(&t, 0, 1)?;
        assert_eq!(tt.shape(), vec![3, 2]);
        assert!(!tt.is_contiguous());
        assert_eq!(tt.get_f32_data()?, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        Ok(())
    }

    #[test]
    fn test_transpose_negative_dims() -> Result<(), NeuraRustError> {
        let t = tensor::arange(&[2, 3, 4])?;
        assert_eq!(transpose_op(&t, 0, -1)?, transpose_op(&t, 0, 2)?);
        Ok(())
    }

    #[test]
    fn test_transpose_out_of_range() -> Result<(), NeuraRustError> {
        let t = tensor::arange(&[2, 3])?;
        assert!(matches!(transpose_op(&t, 0, 2), Err(NeuraRustError::DimOutOfRange { .. })));
        Ok(())
    }

    #[test]
    fn test_t_rank_rules() -> Result<(), NeuraRustError> {
        let v = tensor::arange(&[4])?;
        assert_eq!(t_op(&v)?.shape(), vec![4]);
        let m = tensor::arange(&[2, 5])?;
        assert_eq!(t_op(&m)?.shape(), vec![5, 2]);
        let c = tensor::arange(&[2, 2, 2])?;
        assert!(matches!(t_op(&c), Err(NeuraRustError::InvalidView { .. })));
        Ok(())
    }
}
