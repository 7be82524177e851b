use crate::error::NeuraRustError;
use crate::tensor::Tensor;

/// A new tensor handle over exactly the same storage, layout and flags.
pub fn alias_op(input: &Tensor) -> Result<Tensor, NeuraRustError> {
    input.restride(input.layout().clone(), "alias")
}

/// Same as [`alias_op`]; tensors carry no autograd metadata to drop.
pub fn detach_op(input: &Tensor) -> Result<Tensor, NeuraRustError> {
    input.restride(input.layout().clone(), "detach")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::view::transpose::transpose_op;
    use crate::tensor;

    #[test]
    fn test_alias_keeps_layout_and_storage() -> Result<(), NeuraRustError> {
        let t = transpose_op(&tensor::arange(&[2, 3])?, 0, 1)?;
        let a = alias_op(&t)?;
        assert!(a.shares_storage(&t));
        assert_eq!(a.layout(), t.layout());
        assert_eq!(detach_op(&t)?, t);
        Ok(())
    }
}
