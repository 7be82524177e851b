use crate::error::NeuraRustError;
use crate::ops::view::expand::expand_op;
use crate::tensor::{self, Tensor};

#[test]
fn test_expand_singleton_column() -> Result<(), NeuraRustError> {
    let t = Tensor::new(vec![1.0, 2.0, 3.0], vec![3, 1])?;
    let e = expand_op(&t, &[3, 4])?;
    assert_eq!(e.shape(), vec![3, 4]);
    assert_eq!(e.strides(), vec![1, 0]);
    assert_eq!(
        e.get_f32_data()?,
        vec![1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0, 3.0]
    );
    Ok(())
}

#[test]
fn test_expand_new_leading_dims_and_keep() -> Result<(), NeuraRustError> {
    let t = tensor::arange(&[3])?;
    let e = expand_op(&t, &[2, -1])?;
    assert_eq!(e.shape(), vec![2, 3]);
    assert_eq!(e.get_f32_data()?, vec![0.0, 1.0, 2.0, 0.0, 1.0, 2.0]);
    Ok(())
}

#[test]
fn test_expand_non_singleton_mismatch() -> Result<(), NeuraRustError> {
    let t = tensor::arange(&[2, 3])?;
    assert!(matches!(expand_op(&t, &[2, 4]), Err(NeuraRustError::InvalidView { .. })));
    assert!(matches!(expand_op(&t, &[3]), Err(NeuraRustError::InvalidView { .. })));
    assert!(matches!(expand_op(&t, &[-1, 2, 3]), Err(NeuraRustError::InvalidView { .. })));
    Ok(())
}
