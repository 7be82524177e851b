//! # Functionalization: view inverses
//!
//! The functionalization pass removes mutation from a program. When a view
//! of some base tensor is mutated, the pass needs a new base that reflects
//! the mutation. This module supplies it, one operator at a time:
//!
//! - [`inverses`]: `<op>_inverse(base, mutated_view, args...)` for every
//!   invertible view operator.
//! - [`guards`]: inverses of operators the pass does not support. They panic.
//! - [`unsqueeze_to`]: re-inserting squeezed axes.
//! - [`ViewOp`] / [`ViewOpKind`]: the operator table, dispatching by tag.
//! - [`ViewOps`]: the tensor operations the inverses are written against,
//!   implemented for [`Tensor`](crate::tensor::Tensor).
//!
//! ```
//! use neurarust_functionalize::tensor;
//! use neurarust_functionalize::ViewOp;
//!
//! let base = tensor::arange(&[3, 4]).unwrap();
//! let op = ViewOp::Select { dim: 0, index: 1 };
//! let mutated = tensor::zeros(&[4]).unwrap();
//! let new_base = op.inverse(&base, &mutated).unwrap();
//! assert_eq!(new_base.select(0, 1).unwrap(), mutated);
//! assert_eq!(new_base.select(0, 0).unwrap(), base.select(0, 0).unwrap());
//! ```

pub mod backend;
pub mod guards;
pub mod inverses;
pub mod unsqueeze_to;
pub mod view_op;

pub use backend::ViewOps;
pub use unsqueeze_to::{unsqueeze_to, unsqueeze_to_dim};
pub use view_op::{BaseUsage, ViewOp, ViewOpKind};
