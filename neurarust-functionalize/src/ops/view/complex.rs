//! Conjugate/negate flag views and real <-> complex reinterpretation.
//!
//! Storage is typed per dtype, so `view_as_real` and `view_as_complex` cannot
//! alias their input the way a byte-addressed allocator would. They
//! materialize the reinterpreted values instead; the values are identical to
//! what an aliasing view would read.

use log::debug;
use num_complex::{Complex, Complex32, Complex64};

use crate::error::NeuraRustError;
use crate::tensor::Tensor;
use crate::types::DType;

/// Lazy complex conjugate. Flips the conjugate flag of complex tensors and
/// returns real tensors unchanged.
pub fn conj_op(input: &Tensor) -> Result<Tensor, NeuraRustError> {
    let flag = if input.dtype().is_complex() {
        !input.is_conj()
    } else {
        input.is_conj()
    };
    input.with_layout(input.layout().clone(), flag, input.is_neg(), "_conj")
}

/// Lazy negation: flips the negate flag.
pub fn neg_view_op(input: &Tensor) -> Result<Tensor, NeuraRustError> {
    input.with_layout(input.layout().clone(), input.is_conj(), !input.is_neg(), "_neg_view")
}

/// Materializes a pending conjugation. Tensors without the flag are aliased.
pub fn resolve_conj_op(input: &Tensor) -> Result<Tensor, NeuraRustError> {
    if !input.is_conj() {
        return input.restride(input.layout().clone(), "resolve_conj");
    }
    debug!("resolve_conj: materializing {} conjugated elements", input.numel());
    input.contiguous()
}

/// Materializes a pending negation. Tensors without the flag are aliased.
pub fn resolve_neg_op(input: &Tensor) -> Result<Tensor, NeuraRustError> {
    if !input.is_neg() {
        return input.restride(input.layout().clone(), "resolve_neg");
    }
    debug!("resolve_neg: materializing {} negated elements", input.numel());
    input.contiguous()
}

fn interleave<R: Copy>(values: &[Complex<R>]) -> Vec<R> {
    values.iter().flat_map(|c| [c.re, c.im]).collect()
}

fn pair_up<R: Copy>(values: &[R]) -> Vec<Complex<R>> {
    values.chunks_exact(2).map(|pair| Complex::new(pair[0], pair[1])).collect()
}

/// Views a complex tensor as a real tensor with a trailing dimension of 2
/// holding (real, imaginary).
///
/// # Errors
/// `UnsupportedOperation` for real inputs and for inputs with a pending
/// conjugation, which must be resolved first.
pub fn view_as_real_op(input: &Tensor) -> Result<Tensor, NeuraRustError> {
    if !input.dtype().is_complex() {
        return Err(NeuraRustError::UnsupportedOperation(
            "view_as_real is only supported for complex tensors".to_string(),
        ));
    }
    if input.is_conj() {
        return Err(NeuraRustError::UnsupportedOperation(
            "view_as_real doesn't work on unresolved conjugated tensors; call resolve_conj() first".to_string(),
        ));
    }
    let mut shape = input.shape();
    shape.push(2);
    debug!("view_as_real: materializing {} complex elements", input.numel());
    match input.dtype() {
        DType::C64 => {
            let values = input.to_vec::<Complex32>()?;
            Tensor::from_vec(interleave(&values), shape)
        }
        DType::C128 => {
            let values = input.to_vec::<Complex64>()?;
            Tensor::from_vec(interleave(&values), shape)
        }
        other => Err(NeuraRustError::InternalError(format!(
            "view_as_real reached non-complex dtype {:?}",
            other
        ))),
    }
}

/// Views a real tensor whose last dimension is 2 as a complex tensor.
pub fn view_as_complex_op(input: &Tensor) -> Result<Tensor, NeuraRustError> {
    let mut shape = input.shape();
    if shape.last() != Some(&2) {
        return Err(NeuraRustError::UnsupportedOperation(
            "view_as_complex requires a tensor with a last dimension of size 2".to_string(),
        ));
    }
    shape.pop();
    debug!("view_as_complex: materializing {} real elements", input.numel());
    match input.dtype() {
        DType::F32 => {
            let values = input.to_vec::<f32>()?;
            Tensor::from_vec(pair_up(&values), shape)
        }
        DType::F64 => {
            let values = input.to_vec::<f64>()?;
            Tensor::from_vec(pair_up(&values), shape)
        }
        other => Err(NeuraRustError::UnsupportedOperation(format!(
            "view_as_complex is only supported for F32 and F64 tensors, got {:?}",
            other
        ))),
    }
}

#[cfg(test)]
#[path = "complex_test.rs"]
mod tests;
