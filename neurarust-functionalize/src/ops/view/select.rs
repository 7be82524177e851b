use super::utils::require_rank;
use crate::dim::maybe_wrap_dim;
use crate::error::NeuraRustError;
use crate::tensor::Tensor;
use crate::tensor_data::Layout;

pub(crate) fn select_layout(layout: &Layout, dim: i64, index: i64) -> Result<Layout, NeuraRustError> {
    require_rank(layout.rank(), "select")?;
    let d = maybe_wrap_dim(dim, layout.rank())?;
    let size = layout.shape[d];
    let index_w = if index < 0 { index + size as i64 } else { index };
    if index_w < 0 || index_w >= size as i64 {
        return Err(NeuraRustError::IndexOutOfRange { index, dim: d, size });
    }
    let mut out = layout.clone();
    out.offset += index_w as usize * layout.strides[d];
    out.shape.remove(d);
    out.strides.remove(d);
    Ok(out)
}

/// Picks position `index` along `dim`, removing that dimension.
pub fn select_op(input: &Tensor, dim: i64, index: i64) -> Result<Tensor, NeuraRustError> {
    let layout = select_layout(input.layout(), dim, index)?;
    input.restride(layout, "select")
}
