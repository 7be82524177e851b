use std::sync::Arc;

use num_complex::{Complex32, Complex64};

use crate::types::DType;

/// Typed CPU storage shared between a tensor and its views.
///
/// Each variant wraps its data in an `Arc` so views can share the same
/// storage without copying. Storage is never written after creation.
#[derive(Debug, Clone)]
pub enum Buffer {
    F32(Arc<Vec<f32>>),
    F64(Arc<Vec<f64>>),
    C64(Arc<Vec<Complex32>>),
    C128(Arc<Vec<Complex64>>),
}

impl Buffer {
    pub fn dtype(&self) -> DType {
        match self {
            Buffer::F32(_) => DType::F32,
            Buffer::F64(_) => DType::F64,
            Buffer::C64(_) => DType::C64,
            Buffer::C128(_) => DType::C128,
        }
    }

    /// Number of elements held by the storage.
    pub fn len(&self) -> usize {
        match self {
            Buffer::F32(data) => data.len(),
            Buffer::F64(data) => data.len(),
            Buffer::C64(data) => data.len(),
            Buffer::C128(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
