use super::utils;
use crate::error::NeuraRustError;
use crate::tensor::Tensor;
use crate::tensor_data::Layout;

pub(crate) fn permute_layout(layout: &Layout, dims: &[i64]) -> Result<Layout, NeuraRustError> {
    let dims_w = utils::validate_permutation(layout.rank(), dims)?;
    Ok(Layout::new(
        utils::permute_shape(&layout.shape, &dims_w),
        utils::permute_strides(&layout.strides, &dims_w),
        layout.offset,
    ))
}

/// Reorders the dimensions of `input` according to `dims`. Negative axes are wrapped.
pub fn permute_op(input: &Tensor, dims: &[i64]) -> Result<Tensor, NeuraRustError> {
    let layout = permute_layout(input.layout(), dims)?;
    input.restride(layout, "permute")
}

#[cfg(test)]
#[path = "permute_test.rs"]
mod tests;
