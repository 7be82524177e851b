// src/tensor/mod.rs

use std::sync::Arc;

use num_complex::{Complex32, Complex64};

use crate::error::NeuraRustError;
use crate::tensor_data::{Layout, TensorData};
use crate::types::{DType, Element};
use crate::with_element_type;

pub mod create;
pub mod iter_utils;
pub mod utils;
mod view_methods;

pub use create::{arange, full, ones, rand, rand_seeded, randn, randn_seeded, zeros, zeros_dtype, zeros_f64, zeros_like};

/// An immutable multi-dimensional array value.
///
/// `Tensor` is a cheap handle (`Arc<TensorData>`): cloning it, or taking a view
/// of it, never copies element data. No operation mutates a tensor; every
/// operation returns a new one, which is what the functionalization pass
/// expects of its values.
#[derive(Debug, Clone)]
pub struct Tensor {
    pub(crate) data: Arc<TensorData>,
}

impl Tensor {
    /// Creates a new F32 tensor with contiguous strides.
    pub fn new(data_vec: Vec<f32>, shape: Vec<usize>) -> Result<Self, NeuraRustError> {
        Self::from_vec(data_vec, shape)
    }

    /// Creates a new F64 tensor with contiguous strides.
    pub fn new_f64(data_vec: Vec<f64>, shape: Vec<usize>) -> Result<Self, NeuraRustError> {
        Self::from_vec(data_vec, shape)
    }

    /// Creates a new complex (two `f32`) tensor with contiguous strides.
    pub fn new_c64(data_vec: Vec<Complex32>, shape: Vec<usize>) -> Result<Self, NeuraRustError> {
        Self::from_vec(data_vec, shape)
    }

    /// Creates a new complex (two `f64`) tensor with contiguous strides.
    pub fn new_c128(data_vec: Vec<Complex64>, shape: Vec<usize>) -> Result<Self, NeuraRustError> {
        Self::from_vec(data_vec, shape)
    }

    pub fn from_vec<T: Element>(data_vec: Vec<T>, shape: Vec<usize>) -> Result<Self, NeuraRustError> {
        Ok(Tensor::from_data(TensorData::new(data_vec, shape)?))
    }

    pub(crate) fn from_data(data: TensorData) -> Self {
        Tensor { data: Arc::new(data) }
    }

    /// Builds a view of `self` sharing its storage.
    pub(crate) fn with_layout(
        &self,
        layout: Layout,
        is_conj: bool,
        is_neg: bool,
        operation: &str,
    ) -> Result<Tensor, NeuraRustError> {
        let data = TensorData::new_view(Arc::clone(&self.data.buffer), layout, is_conj, is_neg, operation)?;
        Ok(Tensor::from_data(data))
    }

    /// Builds a view of `self` with a new layout and the same lazy flags.
    pub(crate) fn restride(&self, layout: Layout, operation: &str) -> Result<Tensor, NeuraRustError> {
        self.with_layout(layout, self.data.is_conj, self.data.is_neg, operation)
    }

    pub fn read_data(&self) -> &TensorData {
        &self.data
    }

    pub fn layout(&self) -> &Layout {
        &self.data.layout
    }

    pub fn dtype(&self) -> DType {
        self.data.dtype
    }

    pub fn shape(&self) -> Vec<usize> {
        self.data.layout.shape.clone()
    }

    pub fn strides(&self) -> Vec<usize> {
        self.data.layout.strides.clone()
    }

    /// Storage offset of the first element.
    pub fn offset(&self) -> usize {
        self.data.layout.offset
    }

    pub fn rank(&self) -> usize {
        self.data.layout.rank()
    }

    pub fn numel(&self) -> usize {
        self.data.numel()
    }

    /// Extent of dimension `dim` (negative indices count from the end).
    pub fn size(&self, dim: i64) -> Result<usize, NeuraRustError> {
        let d = crate::dim::maybe_wrap_dim(dim, self.rank())?;
        if self.rank() == 0 {
            return Ok(1);
        }
        Ok(self.data.layout.shape[d])
    }

    pub fn is_contiguous(&self) -> bool {
        self.data.layout.is_contiguous()
    }

    /// True when values read through this tensor are lazily conjugated.
    pub fn is_conj(&self) -> bool {
        self.data.is_conj
    }

    /// True when values read through this tensor are lazily negated.
    pub fn is_neg(&self) -> bool {
        self.data.is_neg
    }

    /// True when both tensors read from the same storage.
    pub fn shares_storage(&self, other: &Tensor) -> bool {
        Arc::ptr_eq(&self.data.buffer, &other.data.buffer)
    }

    /// Materializes the logical values in row-major order.
    ///
    /// # Errors
    /// `DataTypeMismatch` if `T` is not the element type of this tensor.
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>, NeuraRustError> {
        self.data.gather::<T>("to_vec")
    }

    pub fn get_f32_data(&self) -> Result<Vec<f32>, NeuraRustError> {
        self.to_vec::<f32>()
    }

    pub fn get_f64_data(&self) -> Result<Vec<f64>, NeuraRustError> {
        self.to_vec::<f64>()
    }

    pub fn get_c64_data(&self) -> Result<Vec<Complex32>, NeuraRustError> {
        self.to_vec::<Complex32>()
    }

    pub fn get_c128_data(&self) -> Result<Vec<Complex64>, NeuraRustError> {
        self.to_vec::<Complex64>()
    }

    /// Returns a tensor with fresh contiguous storage and no lazy flags set.
    pub fn contiguous(&self) -> Result<Tensor, NeuraRustError> {
        let shape = self.shape();
        with_element_type!(self.dtype(), T => {
            let values = self.data.gather::<T>("contiguous")?;
            Tensor::from_vec(values, shape)
        })
    }
}

/// Value equality: same dtype, same shape and same logical elements.
/// Layout, storage sharing and lazy flags are not compared.
impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        if self.dtype() != other.dtype() || self.shape() != other.shape() {
            return false;
        }
        with_element_type!(self.dtype(), T => {
            match (self.to_vec::<T>(), other.to_vec::<T>()) {
                (Ok(a), Ok(b)) => a == b,
                _ => false,
            }
        })
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
