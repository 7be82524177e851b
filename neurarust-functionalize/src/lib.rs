//! # neurarust-functionalize
//!
//! The view-inverse registry of a tensor functionalization pass.
//!
//! When a program mutates a view of a tensor, the functionalization pass turns
//! the mutation into pure operations. It needs, for every view operator, a
//! function that takes the original base tensor and the mutated view and
//! returns a new base whose viewed region holds the mutated values. Those
//! functions live in [`functionalization`]; the tensor backend they are
//! written against lives in [`tensor`] and [`ops`].

pub mod buffer;
pub mod dim;
pub mod error;
pub mod functionalization;
pub mod ops;
pub mod tensor;
pub mod tensor_data;
pub mod types;
pub mod utils;

pub use error::NeuraRustError;
pub use functionalization::{BaseUsage, ViewOp, ViewOpKind, ViewOps};
pub use tensor::Tensor;
pub use types::DType;

// Re-export crates used in public signatures and exported macros.
pub use num_complex;
pub use num_traits;
