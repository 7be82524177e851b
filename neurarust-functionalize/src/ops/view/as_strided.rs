use crate::error::NeuraRustError;
use crate::tensor::Tensor;
use crate::tensor_data::Layout;

/// Raw strided view over the storage of `input`.
///
/// `storage_offset` defaults to the current offset of `input`. The resulting
/// layout must stay inside the storage.
pub fn as_strided_op(
    input: &Tensor,
    size: &[usize],
    stride: &[usize],
    storage_offset: Option<usize>,
) -> Result<Tensor, NeuraRustError> {
    if size.len() != stride.len() {
        return Err(NeuraRustError::RankMismatch {
            expected: size.len(),
            actual: stride.len(),
        });
    }
    let offset = storage_offset.unwrap_or_else(|| input.offset());
    input.restride(Layout::new(size.to_vec(), stride.to_vec(), offset), "as_strided")
}
