use log::trace;

use crate::error::NeuraRustError;
use crate::tensor::iter_utils::CoordIter;
use crate::tensor::utils::{calculate_strides, coord_to_index};
use crate::tensor::Tensor;
use crate::types::Element;
use crate::with_element_type;

/// Dimensions of `shape` that must be summed away to reach `target`.
///
/// Leading dimensions missing from `target` are always reduced; the others are
/// reduced where `target` has extent 1 and `shape` does not.
fn reduction_axes(shape: &[usize], target: &[usize]) -> Result<Vec<usize>, NeuraRustError> {
    let incompatible = || NeuraRustError::ShapeMismatch {
        expected: target.to_vec(),
        actual: shape.to_vec(),
        operation: "sum_to".to_string(),
    };
    if target.len() > shape.len() {
        return Err(incompatible());
    }
    let rank_diff = shape.len() - target.len();
    let mut axes: Vec<usize> = (0..rank_diff).collect();
    for (i, &target_dim) in target.iter().enumerate() {
        let current = shape[rank_diff + i];
        if current == target_dim {
            continue;
        }
        if target_dim == 1 {
            axes.push(rank_diff + i);
        } else {
            return Err(incompatible());
        }
    }
    Ok(axes)
}

fn sum_to_kernel<T: Element>(input: &Tensor, target: &[usize]) -> Result<Tensor, NeuraRustError> {
    let shape = input.shape();
    let rank_diff = shape.len() - target.len();
    let target_strides = calculate_strides(target);
    let numel: usize = target.iter().product();
    let mut out = vec![T::zero(); numel];

    let values = input.to_vec::<T>()?;
    for (coords, value) in CoordIter::new(&shape).zip(values) {
        let reduced: Vec<usize> = coords[rank_diff..]
            .iter()
            .zip(target.iter())
            .map(|(&c, &t)| if t == 1 { 0 } else { c })
            .collect();
        let index = coord_to_index(&reduced, &target_strides);
        out[index] = out[index] + value;
    }
    Tensor::from_vec(out, target.to_vec())
}

/// Sums `input` down to `size`, undoing a broadcast.
///
/// # Errors
/// `ShapeMismatch` if `input` could not have been broadcast from `size`.
pub fn sum_to_op(input: &Tensor, size: &[usize]) -> Result<Tensor, NeuraRustError> {
    let shape = input.shape();
    let axes = reduction_axes(&shape, size)?;
    if axes.is_empty() {
        return Ok(input.clone());
    }
    trace!("sum_to: reducing {:?} -> {:?} over axes {:?}", shape, size, axes);
    with_element_type!(input.dtype(), T => sum_to_kernel::<T>(input, size))
}
