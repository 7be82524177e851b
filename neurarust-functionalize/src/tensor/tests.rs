// neurarust-functionalize/src/tensor/tests.rs

use super::*;
use approx::assert_relative_eq;
use num_complex::Complex64;

#[test]
fn test_tensor_creation() -> Result<(), NeuraRustError> {
    let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2])?;
    assert_eq!(t.shape(), vec![2, 2]);
    assert_eq!(t.numel(), 4);
    assert_eq!(t.strides(), vec![2, 1]);
    assert_eq!(t.offset(), 0);
    assert_eq!(t.dtype(), DType::F32);
    assert!(t.is_contiguous());
    Ok(())
}

#[test]
fn test_tensor_creation_error() {
    let result = Tensor::new(vec![1.0, 2.0, 3.0], vec![2, 2]);
    assert!(matches!(
        result,
        Err(NeuraRustError::TensorCreationError { data_len: 3, .. })
    ));
}

#[test]
fn test_scalar_tensor() -> Result<(), NeuraRustError> {
    let t = Tensor::new_f64(vec![2.5], vec![])?;
    assert_eq!(t.rank(), 0);
    assert_eq!(t.numel(), 1);
    assert_eq!(t.size(0)?, 1);
    assert_eq!(t.size(-1)?, 1);
    assert_relative_eq!(t.get_f64_data()?[0], 2.5);
    Ok(())
}

#[test]
fn test_size_negative_dim() -> Result<(), NeuraRustError> {
    let t = create::arange(&[2, 3, 4])?;
    assert_eq!(t.size(-1)?, 4);
    assert_eq!(t.size(-3)?, 2);
    assert!(matches!(t.size(3), Err(NeuraRustError::DimOutOfRange { .. })));
    Ok(())
}

#[test]
fn test_to_vec_wrong_type() -> Result<(), NeuraRustError> {
    let t = create::arange(&[2])?;
    assert!(matches!(
        t.to_vec::<f64>(),
        Err(NeuraRustError::DataTypeMismatch { .. })
    ));
    Ok(())
}

#[test]
fn test_contiguous_materializes_view() -> Result<(), NeuraRustError> {
    let t = create::arange(&[2, 3])?;
    let tt = t.transpose(0, 1)?;
    assert!(!tt.is_contiguous());
    let c = tt.contiguous()?;
    assert!(c.is_contiguous());
    assert!(!c.shares_storage(&t));
    assert_eq!(c.get_f32_data()?, vec![0.0, 3.0, 1.0, 4.0, 2.0, 5.0]);
    Ok(())
}

#[test]
fn test_contiguous_applies_lazy_flags() -> Result<(), NeuraRustError> {
    let t = Tensor::new_c128(vec![Complex64::new(1.0, 1.0)], vec![1])?;
    let c = t.conj()?.neg_view()?.contiguous()?;
    assert!(!c.is_conj());
    assert!(!c.is_neg());
    assert_eq!(c.get_c128_data()?, vec![Complex64::new(-1.0, 1.0)]);
    Ok(())
}

#[test]
fn test_equality_ignores_layout() -> Result<(), NeuraRustError> {
    let t = create::arange(&[2, 2])?;
    let other = Tensor::new(vec![0.0, 1.0, 2.0, 3.0], vec![2, 2])?;
    assert_eq!(t, other);
    assert_ne!(t, t.t()?);
    assert_ne!(t, create::zeros_f64(&[2, 2])?);
    Ok(())
}

#[test]
fn test_views_share_storage() -> Result<(), NeuraRustError> {
    let t = create::arange(&[4, 4])?;
    let views = vec![
        t.permute(&[1, 0])?,
        t.unsqueeze(0)?,
        t.expand(&[2, 4, 4])?,
        t.view(&[16])?,
        t.slice(0, Some(1), None, 2)?,
        t.select(1, 2)?,
        t.diagonal(0, 0, 1)?,
        t.unfold(1, 2, 1)?,
        t.alias()?,
        t.detach()?,
        t.neg_view()?,
    ];
    for v in &views {
        assert!(v.shares_storage(&t));
    }
    Ok(())
}

#[test]
fn test_scatter_methods_do_not_alias() -> Result<(), NeuraRustError> {
    let t = create::arange(&[3, 3])?;
    let src = create::zeros(&[3])?;
    let out = t.select_scatter(&src, 0, 1)?;
    assert!(!out.shares_storage(&t));
    assert_eq!(t.select(0, 1)?.get_f32_data()?, vec![3.0, 4.0, 5.0]);
    assert_eq!(out.select(0, 1)?.get_f32_data()?, vec![0.0, 0.0, 0.0]);
    Ok(())
}
