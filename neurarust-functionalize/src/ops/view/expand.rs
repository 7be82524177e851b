use crate::error::NeuraRustError;
use crate::tensor::Tensor;
use crate::tensor_data::Layout;

/// Broadcasts singleton dimensions to `size` and prepends new leading
/// dimensions. Expanded dimensions get stride 0, so no data is copied.
/// A target size of `-1` keeps the existing extent.
pub(crate) fn expand_layout(layout: &Layout, size: &[i64]) -> Result<Layout, NeuraRustError> {
    let rank = layout.rank();
    let target_rank = size.len();
    if target_rank < rank {
        return Err(NeuraRustError::invalid_view(
            "expand",
            format!(
                "the number of sizes provided ({}) must be greater or equal to the number of dimensions in the tensor ({})",
                target_rank, rank
            ),
        ));
    }

    let mut new_shape = vec![0usize; target_rank];
    let mut new_strides = vec![0usize; target_rank];
    for i in (0..target_rank).rev() {
        let offset = target_rank - 1 - i;
        let existing = if offset < rank {
            let d = rank - 1 - offset;
            Some((layout.shape[d], layout.strides[d]))
        } else {
            None
        };
        let requested = size[i];

        match existing {
            Some((current, stride)) => {
                let target = if requested == -1 { current as i64 } else { requested };
                if target < 0 {
                    return Err(NeuraRustError::invalid_view(
                        "expand",
                        format!("invalid size {} at dimension {}", requested, i),
                    ));
                }
                let target = target as usize;
                if current == target {
                    new_shape[i] = target;
                    new_strides[i] = stride;
                } else if current == 1 {
                    new_shape[i] = target;
                    new_strides[i] = 0;
                } else {
                    return Err(NeuraRustError::invalid_view(
                        "expand",
                        format!(
                            "the expanded size of the tensor ({}) must match the existing size ({}) at non-singleton dimension {}",
                            target, current, i
                        ),
                    ));
                }
            }
            None => {
                if requested < 0 {
                    return Err(NeuraRustError::invalid_view(
                        "expand",
                        format!("the expanded size {} is not allowed in a leading, non-existing dimension {}", requested, i),
                    ));
                }
                new_shape[i] = requested as usize;
                new_strides[i] = 0;
            }
        }
    }
    Ok(Layout::new(new_shape, new_strides, layout.offset))
}

/// Creates a broadcast view of `input` with shape `size`.
pub fn expand_op(input: &Tensor, size: &[i64]) -> Result<Tensor, NeuraRustError> {
    let layout = expand_layout(input.layout(), size)?;
    input.restride(layout, "expand")
}

#[cfg(test)]
#[path = "expand_test.rs"]
mod tests;
