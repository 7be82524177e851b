use crate::dim::maybe_wrap_dim;
use crate::error::NeuraRustError;
use crate::tensor::Tensor;
use crate::tensor_data::Layout;

/// Diagonal of the `(dim1, dim2)` plane, shifted by `offset` (positive offsets
/// move above the main diagonal). Both dimensions are removed and the diagonal
/// is appended as the last dimension.
pub(crate) fn diagonal_layout(layout: &Layout, offset: i64, dim1: i64, dim2: i64) -> Result<Layout, NeuraRustError> {
    let rank = layout.rank();
    if rank < 2 {
        return Err(NeuraRustError::invalid_view(
            "diagonal",
            format!("diagonal() requires a tensor with at least 2 dimensions, got {}", rank),
        ));
    }
    let d1 = maybe_wrap_dim(dim1, rank)?;
    let d2 = maybe_wrap_dim(dim2, rank)?;
    if d1 == d2 {
        return Err(NeuraRustError::invalid_view(
            "diagonal",
            format!("diagonal dimensions cannot be identical {}, {}", dim1, dim2),
        ));
    }

    let size1 = layout.shape[d1] as i64;
    let size2 = layout.shape[d2] as i64;
    let diag_size = if offset >= 0 {
        size1.min(size2 - offset).max(0)
    } else {
        (size1 + offset).min(size2).max(0)
    } as usize;

    let mut out = layout.clone();
    if diag_size > 0 {
        if offset >= 0 {
            out.offset += offset as usize * layout.strides[d2];
        } else {
            out.offset += offset.unsigned_abs() as usize * layout.strides[d1];
        }
    }
    let diag_stride = layout.strides[d1] + layout.strides[d2];
    let (first, second) = if d1 > d2 { (d1, d2) } else { (d2, d1) };
    out.shape.remove(first);
    out.strides.remove(first);
    out.shape.remove(second);
    out.strides.remove(second);
    out.shape.push(diag_size);
    out.strides.push(diag_stride);
    Ok(out)
}

pub fn diagonal_op(input: &Tensor, offset: i64, dim1: i64, dim2: i64) -> Result<Tensor, NeuraRustError> {
    let layout = diagonal_layout(input.layout(), offset, dim1, dim2)?;
    input.restride(layout, "diagonal")
}
