//! # Tensor Operations Module (`ops`)
//!
//! Reference implementations of the primitives the view-inverse registry
//! is written against.
//!
//! - [`view`]: operators producing aliasing views (permute, slice, diagonal, unfold, ...).
//! - [`scatter`]: out-of-place writes of a source tensor into a region of a base tensor.
//! - [`reduction`]: `sum_to`, the reduction that undoes broadcasting.
//! - [`arithmetic`]: materialized element-wise negation.
//!
//! Every operation is an `xxx_op` free function returning a new tensor; the
//! `Tensor` methods in `tensor::view_methods` delegate to them.

pub mod arithmetic;
pub mod reduction;
pub mod scatter;
pub mod view;
