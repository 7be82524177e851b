use crate::error::NeuraRustError;

/// Calculates the strides for a given shape.
/// Strides represent the number of elements to skip in the flattened data array
/// to move one step along each dimension.
///
/// Example:
/// shape = [2, 3] -> strides = [3, 1]
/// shape = [2, 2, 2] -> strides = [4, 2, 1]
pub fn calculate_strides(shape: &[usize]) -> Vec<usize> {
    if shape.is_empty() {
        return vec![];
    }
    let rank = shape.len();
    let mut strides = vec![1; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Linear row-major index of `coords` under contiguous `strides`.
pub fn coord_to_index(coords: &[usize], strides: &[usize]) -> usize {
    coords.iter().zip(strides.iter()).map(|(&c, &s)| c * s).sum()
}

/// Resolves a requested shape that may contain a single `-1` against `numel`.
///
/// # Errors
/// `InvalidView` if more than one dimension is `-1`, a dimension is below `-1`,
/// or the requested shape cannot hold exactly `numel` elements.
pub fn infer_size(requested: &[i64], numel: usize, operation: &str) -> Result<Vec<usize>, NeuraRustError> {
    let mut inferred: Option<usize> = None;
    let mut known: usize = 1;
    for (i, &size) in requested.iter().enumerate() {
        if size == -1 {
            if inferred.is_some() {
                return Err(NeuraRustError::invalid_view(operation, "only one dimension can be inferred"));
            }
            inferred = Some(i);
        } else if size < 0 {
            return Err(NeuraRustError::invalid_view(operation, format!("invalid shape dimension {}", size)));
        } else {
            known *= size as usize;
        }
    }

    let mut shape: Vec<usize> = requested.iter().map(|&s| s.max(0) as usize).collect();
    match inferred {
        Some(i) => {
            if known == 0 || numel % known != 0 {
                return Err(NeuraRustError::invalid_view(
                    operation,
                    format!("shape {:?} is invalid for input of size {}", requested, numel),
                ));
            }
            shape[i] = numel / known;
        }
        None => {
            if known != numel {
                return Err(NeuraRustError::invalid_view(
                    operation,
                    format!("shape {:?} is invalid for input of size {}", requested, numel),
                ));
            }
        }
    }
    Ok(shape)
}
