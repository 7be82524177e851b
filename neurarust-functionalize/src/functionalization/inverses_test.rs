use super::*;
use crate::tensor::{self, Tensor};
use num_complex::Complex64;

#[test]
fn test_permute_inverse_roundtrip() -> Result<(), NeuraRustError> {
    let base = tensor::arange(&[2, 3, 4])?;
    let view = base.permute(&[2, 0, 1])?;
    let restored = permute_inverse(&base, &view, &[2, 0, 1])?;
    assert_eq!(restored.shape(), vec![2, 3, 4]);
    assert_eq!(restored, base);
    Ok(())
}

#[test]
fn test_apply_inverse_permutation_negative_dims() -> Result<(), NeuraRustError> {
    let base = tensor::arange(&[2, 3, 4])?;
    let view = base.permute(&[-1, 0, -2])?;
    assert_eq!(apply_inverse_permutation(&view, &[-1, 0, -2])?, base);
    Ok(())
}

#[test]
fn test_transpose_and_t_are_self_inverse() -> Result<(), NeuraRustError> {
    let base = tensor::arange(&[3, 4])?;
    let view = base.t()?;
    assert_eq!(t_inverse(&base, &view)?, base);
    let view = base.transpose(0, -1)?;
    assert_eq!(transpose_inverse(&base, &view, 0, -1)?, base);
    Ok(())
}

#[test]
fn test_expand_inverse_sums_broadcast_axis() -> Result<(), NeuraRustError> {
    let base = Tensor::new(vec![1.0, 2.0, 3.0], vec![3, 1])?;
    let mutated = tensor::arange(&[3, 4])?;
    let restored = expand_inverse(&base, &mutated, &[3, 4], false)?;
    assert_eq!(restored.shape(), vec![3, 1]);
    assert_eq!(restored.get_f32_data()?, vec![6.0, 22.0, 38.0]);
    Ok(())
}

#[test]
fn test_slice_inverse_preserves_outside_and_skipped() -> Result<(), NeuraRustError> {
    let base = tensor::arange(&[6])?;
    let mutated = tensor::full(&[2], -1.0)?;
    let restored = slice_inverse(&base, &mutated, 0, Some(1), Some(5), 2)?;
    assert_eq!(restored.get_f32_data()?, vec![0.0, -1.0, 2.0, -1.0, 4.0, 5.0]);
    Ok(())
}

#[test]
fn test_split_inverse_last_chunk_clamped() -> Result<(), NeuraRustError> {
    let base = tensor::arange(&[7])?;
    let mutated = tensor::full(&[1], 100.0)?;
    let restored = split_inverse(&base, &mutated, 2, 3, 0)?;
    assert_eq!(
        restored.get_f32_data()?,
        vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 100.0]
    );
    Ok(())
}

#[test]
fn test_split_with_sizes_inverse_prefix_sum() -> Result<(), NeuraRustError> {
    let base = tensor::arange(&[2, 6])?;
    let mutated = tensor::zeros(&[2, 2])?;
    let restored = split_with_sizes_inverse(&base, &mutated, 1, &[1, 2, 3], -1)?;
    assert_eq!(
        restored.get_f32_data()?,
        vec![0.0, 0.0, 0.0, 3.0, 4.0, 5.0, 6.0, 0.0, 0.0, 9.0, 10.0, 11.0]
    );
    assert!(matches!(
        split_with_sizes_inverse(&base, &mutated, 3, &[1, 2, 3], -1),
        Err(NeuraRustError::IndexOutOfRange { .. })
    ));
    Ok(())
}

#[test]
fn test_split_inverse_rejects_missing_chunk() -> Result<(), NeuraRustError> {
    let base = tensor::arange(&[7])?;
    let empty = tensor::zeros(&[0])?;
    assert!(matches!(
        split_inverse(&base, &empty, 3, 3, 0),
        Err(NeuraRustError::IndexOutOfRange { index: 3, dim: 0, size: 3 })
    ));
    assert!(matches!(
        split_inverse(&base, &empty, usize::MAX, 3, 0),
        Err(NeuraRustError::IndexOutOfRange { .. })
    ));
    Ok(())
}

#[test]
fn test_split_with_sizes_inverse_overflowing_offsets() -> Result<(), NeuraRustError> {
    let base = tensor::arange(&[7])?;
    let empty = tensor::zeros(&[0])?;
    assert!(matches!(
        split_with_sizes_inverse(&base, &empty, 2, &[usize::MAX, usize::MAX, 0], 0),
        Err(NeuraRustError::IndexOutOfRange { .. })
    ));
    assert!(matches!(
        split_with_sizes_inverse(&base, &empty, usize::MAX, &[3, 4], 0),
        Err(NeuraRustError::IndexOutOfRange { .. })
    ));
    // offsets past the extent leave the base untouched
    assert_eq!(split_with_sizes_inverse(&base, &empty, 1, &[usize::MAX, 0], 0)?, base);
    Ok(())
}

#[test]
fn test_split_inverse_on_scalar_base_fails() -> Result<(), NeuraRustError> {
    let base = Tensor::new(vec![1.0], vec![])?;
    assert!(split_inverse(&base, &base, 0, 1, 0).is_err());
    Ok(())
}

#[test]
fn test_select_and_unbind_inverse() -> Result<(), NeuraRustError> {
    let base = tensor::arange(&[2, 3])?;
    let mutated = Tensor::new(vec![-1.0, -2.0], vec![2])?;
    let a = select_inverse(&base, &mutated, 1, 1)?;
    let b = unbind_inverse(&base, &mutated, 1, -1)?;
    assert_eq!(a, b);
    assert_eq!(a.get_f32_data()?, vec![0.0, -1.0, 2.0, 3.0, -2.0, 5.0]);
    Ok(())
}

#[test]
fn test_diagonal_inverse_offset() -> Result<(), NeuraRustError> {
    let base = tensor::arange(&[3, 3])?;
    let mutated = Tensor::new(vec![-1.0, -1.0], vec![2])?;
    let restored = diagonal_inverse(&base, &mutated, 1, 0, 1)?;
    assert_eq!(
        restored.get_f32_data()?,
        vec![0.0, -1.0, 2.0, 3.0, 4.0, -1.0, 6.0, 7.0, 8.0]
    );
    Ok(())
}

#[test]
fn test_squeeze_inverses() -> Result<(), NeuraRustError> {
    let base = tensor::arange(&[1, 3, 1, 2])?;
    let view = base.squeeze()?;
    assert_eq!(squeeze_inverse(&base, &view)?.shape(), vec![1, 3, 1, 2]);

    let view = base.squeeze_dim(2)?;
    assert_eq!(squeeze_dim_inverse(&base, &view, 2)?.shape(), vec![1, 3, 1, 2]);

    let base = tensor::arange(&[3, 5, 2])?;
    let view = base.squeeze_dim(1)?;
    assert_eq!(view.shape(), vec![3, 5, 2]);
    assert_eq!(squeeze_dim_inverse(&base, &view, 1)?.shape(), vec![3, 5, 2]);
    Ok(())
}

#[test]
fn test_unsqueeze_inverse() -> Result<(), NeuraRustError> {
    let base = tensor::arange(&[3, 2])?;
    let view = base.unsqueeze(-1)?;
    assert_eq!(view.shape(), vec![3, 2, 1]);
    assert_eq!(unsqueeze_inverse(&base, &view, -1)?, base);
    Ok(())
}

#[test]
fn test_view_inverses() -> Result<(), NeuraRustError> {
    let base = tensor::arange(&[2, 6])?;
    let view = base.view(&[3, 4])?;
    assert_eq!(view_inverse(&base, &view, &[3, 4])?, base);

    let view = base.view_dtype(DType::C64)?;
    assert_eq!(view_dtype_inverse(&base, &view, DType::C64)?, base);

    let view = base.reshape_alias(&[4, 3], &[3, 1])?;
    assert_eq!(reshape_alias_inverse(&base, &view, &[4, 3], &[3, 1])?, base);
    Ok(())
}

#[test]
fn test_conj_and_neg_inverses() -> Result<(), NeuraRustError> {
    let base = Tensor::new_c128(
        vec![Complex64::new(1.0, 2.0), Complex64::new(-1.0, 0.5)],
        vec![2],
    )?;
    let view = base.conj()?;
    assert_eq!(conj_inverse(&base, &view)?, base);
    let view = base.neg_view()?;
    let restored = neg_view_inverse(&base, &view)?;
    assert_eq!(restored, base);
    assert!(!restored.is_neg());
    Ok(())
}

#[test]
fn test_complex_real_inverses() -> Result<(), NeuraRustError> {
    let base = Tensor::new_c128(vec![Complex64::new(1.0, 2.0)], vec![1])?;
    let as_real = base.view_as_real()?;
    assert_eq!(view_as_real_inverse(&base, &as_real)?, base);

    let real_base = tensor::arange(&[2, 2])?;
    let as_complex = real_base.view_as_complex()?.conj()?;
    let restored = view_as_complex_inverse(&real_base, &as_complex)?;
    assert_eq!(restored.get_f32_data()?, vec![0.0, -1.0, 2.0, -3.0]);
    Ok(())
}

#[test]
fn test_identity_inverses() -> Result<(), NeuraRustError> {
    let base = tensor::arange(&[2, 2])?;
    let mutated = tensor::ones(&[2, 2])?;
    assert_eq!(alias_inverse(&base, &mutated)?, mutated);
    assert_eq!(detach_inverse(&base, &mutated)?, mutated);
    Ok(())
}

#[test]
fn test_unfold_inverse_overlap() -> Result<(), NeuraRustError> {
    let base = tensor::arange(&[5])?;
    let view = base.unfold(0, 3, 1)?;
    let restored = unfold_inverse(&base, &view, 0, 3, 1)?;
    // positions are covered by 1, 2, 3, 2, 1 windows
    assert_eq!(restored.get_f32_data()?, vec![0.0, 2.0, 6.0, 6.0, 4.0]);
    Ok(())
}
