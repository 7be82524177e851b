use crate::dim::maybe_wrap_dim;
use crate::error::NeuraRustError;
use crate::tensor::Tensor;
use crate::tensor_data::Layout;

/// Removes every dimension of size 1.
pub(crate) fn squeeze_layout(layout: &Layout) -> Layout {
    let (shape, strides): (Vec<usize>, Vec<usize>) = layout
        .shape
        .iter()
        .zip(layout.strides.iter())
        .filter(|(&size, _)| size != 1)
        .map(|(&size, &stride)| (size, stride))
        .unzip();
    Layout::new(shape, strides, layout.offset)
}

/// Removes dimension `dim` if it has size 1, otherwise leaves the layout unchanged.
pub(crate) fn squeeze_dim_layout(layout: &Layout, dim: i64) -> Result<Layout, NeuraRustError> {
    let d = maybe_wrap_dim(dim, layout.rank())?;
    let mut out = layout.clone();
    if layout.rank() > 0 && layout.shape[d] == 1 {
        out.shape.remove(d);
        out.strides.remove(d);
    }
    Ok(out)
}

/// Inserts a dimension of size 1 at `dim`, where `dim` may range over `[-(rank+1), rank]`.
pub(crate) fn unsqueeze_layout(layout: &Layout, dim: i64) -> Result<Layout, NeuraRustError> {
    let rank = layout.rank();
    let d = maybe_wrap_dim(dim, rank + 1)?;
    let new_stride = if d >= rank {
        1
    } else {
        layout.shape[d] * layout.strides[d]
    };
    let mut out = layout.clone();
    out.shape.insert(d, 1);
    out.strides.insert(d, new_stride);
    Ok(out)
}

pub fn squeeze_op(input: &Tensor) -> Result<Tensor, NeuraRustError> {
    input.restride(squeeze_layout(input.layout()), "squeeze")
}

pub fn squeeze_dim_op(input: &Tensor, dim: i64) -> Result<Tensor, NeuraRustError> {
    let layout = squeeze_dim_layout(input.layout(), dim)?;
    input.restride(layout, "squeeze")
}

pub fn unsqueeze_op(input: &Tensor, dim: i64) -> Result<Tensor, NeuraRustError> {
    let layout = unsqueeze_layout(input.layout(), dim)?;
    input.restride(layout, "unsqueeze")
}
