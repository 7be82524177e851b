use crate::error::NeuraRustError;
use crate::tensor::Tensor;
use crate::with_element_type;

/// Element-wise negation into fresh contiguous storage.
///
/// Unlike `neg_view_op` this reads through any lazy flags and produces a
/// tensor with no flags set.
pub fn neg_op(input: &Tensor) -> Result<Tensor, NeuraRustError> {
    let shape = input.shape();
    with_element_type!(input.dtype(), T => {
        let values: Vec<T> = input.to_vec::<T>()?.into_iter().map(|v| -v).collect();
        Tensor::from_vec(values, shape)
    })
}
