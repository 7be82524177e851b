use std::fmt::Debug;
use std::ops::{Add, Neg};
use std::sync::Arc;

use num_complex::{Complex32, Complex64};
use num_traits::Zero;

use crate::buffer::Buffer;

/// Defines the possible data types for Tensor elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit floating-point type.
    F32,
    /// 64-bit floating-point type.
    F64,
    /// Complex number made of two `f32` (real, imaginary).
    C64,
    /// Complex number made of two `f64` (real, imaginary).
    C128,
}

impl DType {
    /// Size of one element in bytes.
    pub fn element_size(&self) -> usize {
        match self {
            DType::F32 => 4,
            DType::F64 => 8,
            DType::C64 => 8,
            DType::C128 => 16,
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, DType::C64 | DType::C128)
    }

    /// The real dtype of the components of a complex dtype.
    pub fn to_real(&self) -> DType {
        match self {
            DType::C64 => DType::F32,
            DType::C128 => DType::F64,
            other => *other,
        }
    }

    /// The complex dtype whose components are of this real dtype.
    pub fn to_complex(&self) -> DType {
        match self {
            DType::F32 => DType::C64,
            DType::F64 => DType::C128,
            other => *other,
        }
    }
}

/// Scalar types that can be stored in a tensor buffer.
///
/// Kernels in `ops` are written once, generically over `Element`, and
/// dispatched on the runtime [`DType`] with [`with_element_type!`].
pub trait Element:
    Copy + Debug + PartialEq + Zero + Add<Output = Self> + Neg<Output = Self> + Send + Sync + 'static
{
    const DTYPE: DType;

    /// Complex conjugate; the identity for real types.
    fn conj(self) -> Self;

    /// Appends the little-endian byte encoding of `self` to `out`.
    fn write_le_bytes(self, out: &mut Vec<u8>);

    /// Decodes one element from exactly `DTYPE.element_size()` bytes.
    fn read_le_bytes(bytes: &[u8]) -> Self;

    fn into_buffer(data: Vec<Self>) -> Buffer;

    fn buffer_slice(buffer: &Buffer) -> Option<&[Self]>;
}

fn le_4(bytes: &[u8]) -> [u8; 4] {
    let mut out = [0u8; 4];
    out.copy_from_slice(&bytes[..4]);
    out
}

fn le_8(bytes: &[u8]) -> [u8; 8] {
    let mut out = [0u8; 8];
    out.copy_from_slice(&bytes[..8]);
    out
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    fn conj(self) -> Self {
        self
    }

    fn write_le_bytes(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }

    fn read_le_bytes(bytes: &[u8]) -> Self {
        f32::from_le_bytes(le_4(bytes))
    }

    fn into_buffer(data: Vec<Self>) -> Buffer {
        Buffer::F32(Arc::new(data))
    }

    fn buffer_slice(buffer: &Buffer) -> Option<&[Self]> {
        match buffer {
            Buffer::F32(data) => Some(data.as_slice()),
            _ => None,
        }
    }
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;

    fn conj(self) -> Self {
        self
    }

    fn write_le_bytes(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }

    fn read_le_bytes(bytes: &[u8]) -> Self {
        f64::from_le_bytes(le_8(bytes))
    }

    fn into_buffer(data: Vec<Self>) -> Buffer {
        Buffer::F64(Arc::new(data))
    }

    fn buffer_slice(buffer: &Buffer) -> Option<&[Self]> {
        match buffer {
            Buffer::F64(data) => Some(data.as_slice()),
            _ => None,
        }
    }
}

impl Element for Complex32 {
    const DTYPE: DType = DType::C64;

    fn conj(self) -> Self {
        Complex32::conj(&self)
    }

    fn write_le_bytes(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.re.to_le_bytes());
        out.extend_from_slice(&self.im.to_le_bytes());
    }

    fn read_le_bytes(bytes: &[u8]) -> Self {
        Complex32::new(
            f32::from_le_bytes(le_4(bytes)),
            f32::from_le_bytes(le_4(&bytes[4..])),
        )
    }

    fn into_buffer(data: Vec<Self>) -> Buffer {
        Buffer::C64(Arc::new(data))
    }

    fn buffer_slice(buffer: &Buffer) -> Option<&[Self]> {
        match buffer {
            Buffer::C64(data) => Some(data.as_slice()),
            _ => None,
        }
    }
}

impl Element for Complex64 {
    const DTYPE: DType = DType::C128;

    fn conj(self) -> Self {
        Complex64::conj(&self)
    }

    fn write_le_bytes(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.re.to_le_bytes());
        out.extend_from_slice(&self.im.to_le_bytes());
    }

    fn read_le_bytes(bytes: &[u8]) -> Self {
        Complex64::new(
            f64::from_le_bytes(le_8(bytes)),
            f64::from_le_bytes(le_8(&bytes[8..])),
        )
    }

    fn into_buffer(data: Vec<Self>) -> Buffer {
        Buffer::C128(Arc::new(data))
    }

    fn buffer_slice(buffer: &Buffer) -> Option<&[Self]> {
        match buffer {
            Buffer::C128(data) => Some(data.as_slice()),
            _ => None,
        }
    }
}

/// Runs `$body` with `$T` bound to the Rust element type of `$dtype`.
///
/// ```ignore
/// with_element_type!(tensor.dtype(), T => tensor.to_vec::<T>().map(|v| v.len()))
/// ```
#[macro_export]
macro_rules! with_element_type {
    ($dtype:expr, $T:ident => $body:expr) => {
        match $dtype {
            $crate::types::DType::F32 => {
                type $T = f32;
                $body
            }
            $crate::types::DType::F64 => {
                type $T = f64;
                $body
            }
            $crate::types::DType::C64 => {
                type $T = $crate::num_complex::Complex32;
                $body
            }
            $crate::types::DType::C128 => {
                type $T = $crate::num_complex::Complex64;
                $body
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip_bytes<T: Element>(value: T) -> T {
        let mut bytes = Vec::new();
        value.write_le_bytes(&mut bytes);
        assert_eq!(bytes.len(), T::DTYPE.element_size());
        T::read_le_bytes(&bytes)
    }

    #[test]
    fn test_element_sizes_match_encoding() {
        assert_eq!(roundtrip_bytes(1.5f32), 1.5f32);
        assert_eq!(roundtrip_bytes(-2.25f64), -2.25f64);
        assert_eq!(roundtrip_bytes(Complex32::new(1.0, -3.0)), Complex32::new(1.0, -3.0));
        assert_eq!(roundtrip_bytes(Complex64::new(0.5, 7.0)), Complex64::new(0.5, 7.0));
    }

    #[test]
    fn test_real_complex_pairs() {
        assert_eq!(DType::C64.to_real(), DType::F32);
        assert_eq!(DType::F64.to_complex(), DType::C128);
        assert!(DType::C128.is_complex());
        assert!(!DType::F32.is_complex());
    }

    #[test]
    fn test_conj_is_identity_for_reals() {
        assert_eq!(Element::conj(3.0f32), 3.0f32);
        assert_eq!(Element::conj(Complex64::new(1.0, 2.0)), Complex64::new(1.0, -2.0));
    }
}
