use super::*;
use crate::tensor;
use num_complex::Complex64;

fn sample_c128() -> Result<Tensor, NeuraRustError> {
    Tensor::new_c128(
        vec![
            Complex64::new(1.0, 2.0),
            Complex64::new(-3.0, 0.5),
            Complex64::new(0.0, -1.0),
            Complex64::new(4.0, 4.0),
        ],
        vec![2, 2],
    )
}

#[test]
fn test_conj_flips_flag_on_complex() -> Result<(), NeuraRustError> {
    let t = sample_c128()?;
    let c = conj_op(&t)?;
    assert!(c.is_conj());
    assert!(c.shares_storage(&t));
    assert_eq!(c.get_c128_data()?[0], Complex64::new(1.0, -2.0));
    assert!(!conj_op(&c)?.is_conj());
    Ok(())
}

#[test]
fn test_conj_is_noop_on_real() -> Result<(), NeuraRustError> {
    let t = tensor::arange(&[3])?;
    let c = conj_op(&t)?;
    assert!(!c.is_conj());
    assert_eq!(c, t);
    Ok(())
}

#[test]
fn test_neg_view_is_lazy() -> Result<(), NeuraRustError> {
    let t = tensor::arange(&[3])?;
    let n = neg_view_op(&t)?;
    assert!(n.is_neg());
    assert!(n.shares_storage(&t));
    assert_eq!(n.get_f32_data()?, vec![0.0, -1.0, -2.0]);
    let r = resolve_neg_op(&n)?;
    assert!(!r.is_neg());
    assert!(!r.shares_storage(&t));
    assert_eq!(r.get_f32_data()?, vec![0.0, -1.0, -2.0]);
    Ok(())
}

#[test]
fn test_resolve_conj_without_flag_aliases() -> Result<(), NeuraRustError> {
    let t = sample_c128()?;
    let r = resolve_conj_op(&t)?;
    assert!(r.shares_storage(&t));
    Ok(())
}

#[test]
fn test_view_as_real_layout() -> Result<(), NeuraRustError> {
    let t = sample_c128()?;
    let r = view_as_real_op(&t)?;
    assert_eq!(r.shape(), vec![2, 2, 2]);
    assert_eq!(r.dtype(), DType::F64);
    assert_eq!(
        r.get_f64_data()?,
        vec![1.0, 2.0, -3.0, 0.5, 0.0, -1.0, 4.0, 4.0]
    );
    Ok(())
}

#[test]
fn test_view_as_real_requires_resolved_conj() -> Result<(), NeuraRustError> {
    let t = sample_c128()?;
    let c = conj_op(&t)?;
    assert!(matches!(
        view_as_real_op(&c),
        Err(NeuraRustError::UnsupportedOperation(_))
    ));
    let r = view_as_real_op(&resolve_conj_op(&c)?)?;
    assert_eq!(r.get_f64_data()?[..2].to_vec(), vec![1.0, -2.0]);
    Ok(())
}

#[test]
fn test_view_as_real_rejects_real_input() -> Result<(), NeuraRustError> {
    let t = tensor::arange(&[2])?;
    assert!(view_as_real_op(&t).is_err());
    Ok(())
}

#[test]
fn test_view_as_complex_pairs_last_dim() -> Result<(), NeuraRustError> {
    let t = tensor::arange(&[3, 2])?;
    let c = view_as_complex_op(&t)?;
    assert_eq!(c.shape(), vec![3]);
    assert_eq!(c.dtype(), DType::C64);
    assert_eq!(c.get_c64_data()?[2], num_complex::Complex32::new(4.0, 5.0));
    Ok(())
}

#[test]
fn test_view_as_complex_requires_trailing_two() -> Result<(), NeuraRustError> {
    let t = tensor::arange(&[2, 3])?;
    assert!(matches!(
        view_as_complex_op(&t),
        Err(NeuraRustError::UnsupportedOperation(_))
    ));
    Ok(())
}
