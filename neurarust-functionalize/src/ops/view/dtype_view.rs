use log::debug;

use crate::error::NeuraRustError;
use crate::tensor::Tensor;
use crate::types::{DType, Element};
use crate::with_element_type;

/// Output shape of reinterpreting `shape` from `from` to `to`.
fn dtype_view_shape(shape: &[usize], last_stride: Option<usize>, from: DType, to: DType) -> Result<Vec<usize>, NeuraRustError> {
    let from_size = from.element_size();
    let to_size = to.element_size();
    if from_size == to_size {
        return Ok(shape.to_vec());
    }
    let (last, stride) = match (shape.last(), last_stride) {
        (Some(&last), Some(stride)) => (last, stride),
        _ => {
            return Err(NeuraRustError::invalid_view(
                "view.dtype",
                format!(
                    "self.dim() cannot be 0 to view {:?} as {:?} (different element sizes)",
                    from, to
                ),
            ))
        }
    };
    if stride != 1 && last > 1 {
        return Err(NeuraRustError::invalid_view(
            "view.dtype",
            format!("self.stride(-1) must be 1 to view {:?} as {:?} (different element sizes)", from, to),
        ));
    }
    let mut out = shape.to_vec();
    let n = out.len();
    if from_size > to_size {
        out[n - 1] = last * (from_size / to_size);
    } else {
        let ratio = to_size / from_size;
        if last % ratio != 0 {
            return Err(NeuraRustError::invalid_view(
                "view.dtype",
                format!(
                    "self.size(-1) must be divisible by {} to view {:?} as {:?} (different element sizes), but got {}",
                    ratio, from, to, last
                ),
            ));
        }
        out[n - 1] = last / ratio;
    }
    Ok(out)
}

fn decode_all<T: Element>(bytes: &[u8]) -> Vec<T> {
    bytes
        .chunks_exact(T::DTYPE.element_size())
        .map(T::read_le_bytes)
        .collect()
}

/// Reinterprets the bytes of `input` as elements of `dtype`.
///
/// Same-dtype requests alias the input. Other requests produce a tensor
/// holding the reinterpreted values in fresh storage, since buffers are typed.
/// When element sizes differ the last dimension is scaled by the size ratio.
pub fn view_dtype_op(input: &Tensor, dtype: DType) -> Result<Tensor, NeuraRustError> {
    if input.dtype() == dtype {
        return input.restride(input.layout().clone(), "view.dtype");
    }
    if input.is_conj() || input.is_neg() {
        return Err(NeuraRustError::UnsupportedOperation(
            "view.dtype is not supported on tensors with pending conjugate or negative bits; resolve them first"
                .to_string(),
        ));
    }
    let shape = input.shape();
    let out_shape = dtype_view_shape(&shape, input.strides().last().copied(), input.dtype(), dtype)?;

    let mut bytes = Vec::with_capacity(input.numel() * input.dtype().element_size());
    with_element_type!(input.dtype(), S => {
        for value in input.to_vec::<S>()? {
            value.write_le_bytes(&mut bytes);
        }
    });
    debug!(
        "view.dtype: reinterpreting {} bytes from {:?} to {:?}",
        bytes.len(),
        input.dtype(),
        dtype
    );
    with_element_type!(dtype, D => Tensor::from_vec(decode_all::<D>(&bytes), out_shape))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor;
    use num_complex::{Complex32, Complex64};

    #[test]
    fn test_same_dtype_aliases() -> Result<(), NeuraRustError> {
        let t = tensor::arange(&[2, 2])?;
        let v = view_dtype_op(&t, DType::F32)?;
        assert!(v.shares_storage(&t));
        Ok(())
    }

    #[test]
    fn test_f32_as_c64_halves_last_dim() -> Result<(), NeuraRustError> {
        let t = tensor::arange(&[2, 4])?;
        let v = view_dtype_op(&t, DType::C64)?;
        assert_eq!(v.shape(), vec![2, 2]);
        assert_eq!(v.get_c64_data()?[3], Complex32::new(6.0, 7.0));
        Ok(())
    }

    #[test]
    fn test_c128_as_f64_doubles_last_dim() -> Result<(), NeuraRustError> {
        let t = Tensor::new_c128(vec![Complex64::new(1.5, -2.5)], vec![1])?;
        let v = view_dtype_op(&t, DType::F64)?;
        assert_eq!(v.shape(), vec![2]);
        assert_eq!(v.get_f64_data()?, vec![1.5, -2.5]);
        Ok(())
    }

    #[test]
    fn test_bits_survive_reinterpretation() -> Result<(), NeuraRustError> {
        let t = Tensor::new(vec![1.0, -0.0, 3.25], vec![3])?;
        let there = view_dtype_op(&t, DType::C64);
        // odd trailing size cannot be paired up
        assert!(matches!(there, Err(NeuraRustError::InvalidView { .. })));

        let f64s = Tensor::new_f64(vec![0.1, 2.0], vec![2])?;
        let c = view_dtype_op(&f64s, DType::C64)?;
        let back = view_dtype_op(&c, DType::F64)?;
        assert_eq!(back, f64s);
        Ok(())
    }

    #[test]
    fn test_scalar_with_different_size_rejected() -> Result<(), NeuraRustError> {
        let t = Tensor::new(vec![1.0], vec![])?;
        assert!(view_dtype_op(&t, DType::F64).is_err());
        Ok(())
    }

    #[test]
    fn test_pending_neg_rejected() -> Result<(), NeuraRustError> {
        let t = crate::ops::view::complex::neg_view_op(&tensor::arange(&[2])?)?;
        assert!(matches!(
            view_dtype_op(&t, DType::C64),
            Err(NeuraRustError::UnsupportedOperation(_))
        ));
        Ok(())
    }
}
