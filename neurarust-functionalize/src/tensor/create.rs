// src/tensor/create.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal, Uniform};

use crate::error::NeuraRustError;
use crate::tensor::Tensor;
use crate::types::{DType, Element};
use crate::with_element_type;

/// Creates a new F32 tensor filled with zeros.
pub fn zeros(shape: &[usize]) -> Result<Tensor, NeuraRustError> {
    full(shape, 0.0)
}

/// Creates a new F64 tensor filled with zeros.
pub fn zeros_f64(shape: &[usize]) -> Result<Tensor, NeuraRustError> {
    let numel = shape.iter().product();
    Tensor::new_f64(vec![0.0; numel], shape.to_vec())
}

/// Zero tensor of the given shape and element type.
pub(crate) fn zeros_typed<T: Element>(shape: &[usize]) -> Result<Tensor, NeuraRustError> {
    let numel = shape.iter().product();
    Tensor::from_vec(vec![T::zero(); numel], shape.to_vec())
}

/// Creates a zero tensor with the same shape and dtype as `tensor`.
pub fn zeros_like(tensor: &Tensor) -> Result<Tensor, NeuraRustError> {
    let shape = tensor.shape();
    with_element_type!(tensor.dtype(), T => zeros_typed::<T>(&shape))
}

/// Zero tensor of the given shape and dtype.
pub fn zeros_dtype(shape: &[usize], dtype: DType) -> Result<Tensor, NeuraRustError> {
    with_element_type!(dtype, T => zeros_typed::<T>(shape))
}

/// Creates a new F32 tensor filled with ones.
pub fn ones(shape: &[usize]) -> Result<Tensor, NeuraRustError> {
    full(shape, 1.0)
}

/// Creates a new F32 tensor filled with `value`.
pub fn full(shape: &[usize], value: f32) -> Result<Tensor, NeuraRustError> {
    let numel = shape.iter().product();
    Tensor::new(vec![value; numel], shape.to_vec())
}

/// F32 tensor holding `0, 1, 2, ...` in row-major order.
///
/// Distinct values make it easy to see which base element ended up where.
pub fn arange(shape: &[usize]) -> Result<Tensor, NeuraRustError> {
    let numel: usize = shape.iter().product();
    Tensor::new((0..numel).map(|x| x as f32).collect(), shape.to_vec())
}

/// F32 tensor with values drawn uniformly from `[0, 1)`.
pub fn rand(shape: &[usize]) -> Result<Tensor, NeuraRustError> {
    rand_with(&mut rand::thread_rng(), shape)
}

/// F32 tensor with values drawn from the standard normal distribution.
pub fn randn(shape: &[usize]) -> Result<Tensor, NeuraRustError> {
    randn_with(&mut rand::thread_rng(), shape)
}

/// Reproducible variant of [`rand`].
pub fn rand_seeded(shape: &[usize], seed: u64) -> Result<Tensor, NeuraRustError> {
    rand_with(&mut StdRng::seed_from_u64(seed), shape)
}

/// Reproducible variant of [`randn`].
pub fn randn_seeded(shape: &[usize], seed: u64) -> Result<Tensor, NeuraRustError> {
    randn_with(&mut StdRng::seed_from_u64(seed), shape)
}

fn rand_with<R: Rng>(rng: &mut R, shape: &[usize]) -> Result<Tensor, NeuraRustError> {
    let numel: usize = shape.iter().product();
    let dist = Uniform::new(0.0f32, 1.0f32);
    let data: Vec<f32> = (0..numel).map(|_| dist.sample(&mut *rng)).collect();
    Tensor::new(data, shape.to_vec())
}

fn randn_with<R: Rng>(rng: &mut R, shape: &[usize]) -> Result<Tensor, NeuraRustError> {
    let numel: usize = shape.iter().product();
    let data: Vec<f32> = (0..numel)
        .map(|_| {
            let value: f32 = StandardNormal.sample(&mut *rng);
            value
        })
        .collect();
    Tensor::new(data, shape.to_vec())
}
