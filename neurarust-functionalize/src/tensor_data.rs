// src/tensor_data.rs
use std::sync::Arc;

use crate::buffer::Buffer;
use crate::error::NeuraRustError;
use crate::tensor::iter_utils::StridedOffsets;
use crate::tensor::utils::calculate_strides;
use crate::types::{DType, Element};

/// Shape, strides and storage offset of a tensor, all counted in elements.
///
/// Every view operator is a pure function from one `Layout` to another, which
/// lets the scatter primitives reuse the exact same addressing logic on a
/// fresh contiguous layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub shape: Vec<usize>,
    pub strides: Vec<usize>,
    pub offset: usize,
}

impl Layout {
    pub fn new(shape: Vec<usize>, strides: Vec<usize>, offset: usize) -> Self {
        Layout { shape, strides, offset }
    }

    /// Row-major layout for `shape` starting at offset 0.
    pub fn contiguous(shape: &[usize]) -> Self {
        Layout {
            shape: shape.to_vec(),
            strides: calculate_strides(shape),
            offset: 0,
        }
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    /// Number of storage elements this layout needs (highest addressed offset + 1).
    /// An empty layout needs `offset` elements.
    pub fn required_storage(&self) -> usize {
        if self.shape.iter().any(|&s| s == 0) {
            return self.offset;
        }
        let max_relative: usize = self
            .shape
            .iter()
            .zip(self.strides.iter())
            .map(|(&size, &stride)| (size - 1) * stride)
            .sum();
        self.offset + max_relative + 1
    }

    /// Checks if the layout is row-major contiguous (size-1 dimensions are ignored).
    pub fn is_contiguous(&self) -> bool {
        let mut expected_stride = 1;
        for i in (0..self.shape.len()).rev() {
            let size = self.shape[i];
            if size == 0 {
                return true;
            }
            if size != 1 {
                if self.strides[i] != expected_stride {
                    return false;
                }
                expected_stride *= size;
            }
        }
        true
    }

    /// Iterator over the storage offsets of every element, in row-major logical order.
    pub fn offsets(&self) -> StridedOffsets<'_> {
        StridedOffsets::new(&self.shape, &self.strides, self.offset)
    }
}

/// Internal storage and metadata for a Tensor.
///
/// `TensorData` is never mutated once built. Views are new `TensorData`
/// values sharing `buffer` with a different `layout` or different lazy flags.
#[derive(Debug)]
pub struct TensorData {
    pub(crate) buffer: Arc<Buffer>,
    pub(crate) dtype: DType,
    pub(crate) layout: Layout,
    /// Lazy conjugation: values read through this tensor are conjugated.
    pub(crate) is_conj: bool,
    /// Lazy negation: values read through this tensor are negated.
    pub(crate) is_neg: bool,
}

impl TensorData {
    /// Creates a contiguous `TensorData` owning `data`.
    ///
    /// # Errors
    /// Returns `NeuraRustError::TensorCreationError` if the length of `data` does not match
    /// the number of elements specified by `shape`.
    pub fn new<T: Element>(data: Vec<T>, shape: Vec<usize>) -> Result<Self, NeuraRustError> {
        let numel: usize = shape.iter().product();
        if data.len() != numel {
            return Err(NeuraRustError::TensorCreationError {
                data_len: data.len(),
                shape,
            });
        }
        Ok(TensorData {
            buffer: Arc::new(T::into_buffer(data)),
            dtype: T::DTYPE,
            layout: Layout::contiguous(&shape),
            is_conj: false,
            is_neg: false,
        })
    }

    /// Creates a view sharing `buffer` with a new layout.
    ///
    /// # Errors
    /// Returns `NeuraRustError::StorageOutOfBounds` if `layout` addresses elements past the
    /// end of the buffer.
    pub(crate) fn new_view(
        buffer: Arc<Buffer>,
        layout: Layout,
        is_conj: bool,
        is_neg: bool,
        operation: &str,
    ) -> Result<Self, NeuraRustError> {
        let required = layout.required_storage();
        if required > buffer.len() {
            return Err(NeuraRustError::StorageOutOfBounds {
                required,
                available: buffer.len(),
                operation: operation.to_string(),
            });
        }
        Ok(TensorData {
            dtype: buffer.dtype(),
            buffer,
            layout,
            is_conj,
            is_neg,
        })
    }

    pub fn buffer(&self) -> &Arc<Buffer> {
        &self.buffer
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn numel(&self) -> usize {
        self.layout.numel()
    }

    /// Reads every logical element in row-major order, applying the lazy
    /// conjugate and negate flags.
    pub(crate) fn gather<T: Element>(&self, operation: &str) -> Result<Vec<T>, NeuraRustError> {
        let storage = T::buffer_slice(&self.buffer).ok_or_else(|| NeuraRustError::DataTypeMismatch {
            expected: T::DTYPE,
            actual: self.dtype,
            operation: operation.to_string(),
        })?;
        let conj = self.is_conj;
        let neg = self.is_neg;
        Ok(self
            .layout
            .offsets()
            .map(|offset| {
                let mut value = storage[offset];
                if conj {
                    value = value.conj();
                }
                if neg {
                    value = -value;
                }
                value
            })
            .collect())
    }
}
