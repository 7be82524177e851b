// neurarust-functionalize/src/ops/view/mod.rs

//! View operators. Each one is a pure function on [`Layout`](crate::tensor_data::Layout)
//! plus a thin `_op` wrapper that re-strides the input's storage.

pub mod alias;
pub mod as_strided;
pub mod complex;
pub mod diagonal;
pub mod dtype_view;
pub mod expand;
pub mod permute;
pub mod reshape;
pub mod select;
pub mod slice;
pub mod split;
pub mod squeeze_unsqueeze;
pub mod transpose;
pub mod unfold;

pub mod utils;

pub use alias::{alias_op, detach_op};
pub use as_strided::as_strided_op;
pub use complex::{conj_op, neg_view_op, resolve_conj_op, resolve_neg_op, view_as_complex_op, view_as_real_op};
pub use diagonal::diagonal_op;
pub use dtype_view::view_dtype_op;
pub use expand::expand_op;
pub use permute::permute_op;
pub use reshape::{reshape_alias_op, view_op};
pub use select::select_op;
pub use slice::{narrow_op, slice_op, SliceRange};
pub use split::{split_op, split_with_sizes_op, unbind_op};
pub use squeeze_unsqueeze::{squeeze_dim_op, squeeze_op, unsqueeze_op};
pub use transpose::{t_op, transpose_op};
pub use unfold::unfold_op;
