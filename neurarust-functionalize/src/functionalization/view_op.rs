//! The closed set of view operators and their dispatch.

use std::fmt;
use std::str::FromStr;

use log::trace;

use super::backend::ViewOps;
use super::guards;
use super::inverses;
use crate::dim::maybe_wrap_dim;
use crate::error::NeuraRustError;
use crate::tensor::Tensor;
use crate::types::DType;

/// What an inverse reads from the base tensor it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseUsage {
    /// The base is ignored; the inverse only transforms the mutated view.
    Unused,
    /// Only metadata of the base is read (sizes, strides or dtype).
    ShapeOnly,
    /// The base's values are kept outside the region the view covers.
    ShapeAndValues,
}

/// Tag identifying one entry of the view-inverse table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewOpKind {
    FwPrimal,
    ViewAsReal,
    ViewAsComplex,
    Conj,
    NegView,
    AsStrided,
    Diagonal,
    Expand,
    Permute,
    ReshapeAlias,
    Select,
    Detach,
    Slice,
    Split,
    SplitWithSizes,
    Squeeze,
    SqueezeDim,
    T,
    Transpose,
    Unsqueeze,
    PrivateIndices,
    PrivateValues,
    Indices,
    Values,
    CrowIndices,
    ColIndices,
    Unbind,
    View,
    ViewDtype,
    Unfold,
    Alias,
}

impl ViewOpKind {
    pub const ALL: [ViewOpKind; 31] = [
        ViewOpKind::FwPrimal,
        ViewOpKind::ViewAsReal,
        ViewOpKind::ViewAsComplex,
        ViewOpKind::Conj,
        ViewOpKind::NegView,
        ViewOpKind::AsStrided,
        ViewOpKind::Diagonal,
        ViewOpKind::Expand,
        ViewOpKind::Permute,
        ViewOpKind::ReshapeAlias,
        ViewOpKind::Select,
        ViewOpKind::Detach,
        ViewOpKind::Slice,
        ViewOpKind::Split,
        ViewOpKind::SplitWithSizes,
        ViewOpKind::Squeeze,
        ViewOpKind::SqueezeDim,
        ViewOpKind::T,
        ViewOpKind::Transpose,
        ViewOpKind::Unsqueeze,
        ViewOpKind::PrivateIndices,
        ViewOpKind::PrivateValues,
        ViewOpKind::Indices,
        ViewOpKind::Values,
        ViewOpKind::CrowIndices,
        ViewOpKind::ColIndices,
        ViewOpKind::Unbind,
        ViewOpKind::View,
        ViewOpKind::ViewDtype,
        ViewOpKind::Unfold,
        ViewOpKind::Alias,
    ];

    /// Operator name, with the overload after a dot where there is more than one.
    pub fn name(&self) -> &'static str {
        match self {
            ViewOpKind::FwPrimal => "_fw_primal",
            ViewOpKind::ViewAsReal => "view_as_real",
            ViewOpKind::ViewAsComplex => "view_as_complex",
            ViewOpKind::Conj => "_conj",
            ViewOpKind::NegView => "_neg_view",
            ViewOpKind::AsStrided => "as_strided",
            ViewOpKind::Diagonal => "diagonal",
            ViewOpKind::Expand => "expand",
            ViewOpKind::Permute => "permute",
            ViewOpKind::ReshapeAlias => "_reshape_alias",
            ViewOpKind::Select => "select",
            ViewOpKind::Detach => "detach",
            ViewOpKind::Slice => "slice",
            ViewOpKind::Split => "split",
            ViewOpKind::SplitWithSizes => "split_with_sizes",
            ViewOpKind::Squeeze => "squeeze",
            ViewOpKind::SqueezeDim => "squeeze.dim",
            ViewOpKind::T => "t",
            ViewOpKind::Transpose => "transpose",
            ViewOpKind::Unsqueeze => "unsqueeze",
            ViewOpKind::PrivateIndices => "_indices",
            ViewOpKind::PrivateValues => "_values",
            ViewOpKind::Indices => "indices",
            ViewOpKind::Values => "values",
            ViewOpKind::CrowIndices => "crow_indices",
            ViewOpKind::ColIndices => "col_indices",
            ViewOpKind::Unbind => "unbind",
            ViewOpKind::View => "view",
            ViewOpKind::ViewDtype => "view.dtype",
            ViewOpKind::Unfold => "unfold",
            ViewOpKind::Alias => "alias",
        }
    }

    /// Name of the function in [`inverses`] (or [`guards`]) implementing this entry.
    pub fn inverse_name(&self) -> &'static str {
        match self {
            ViewOpKind::FwPrimal => "fw_primal_inverse",
            ViewOpKind::ViewAsReal => "view_as_real_inverse",
            ViewOpKind::ViewAsComplex => "view_as_complex_inverse",
            ViewOpKind::Conj => "conj_inverse",
            ViewOpKind::NegView => "neg_view_inverse",
            ViewOpKind::AsStrided => "as_strided_inverse",
            ViewOpKind::Diagonal => "diagonal_inverse",
            ViewOpKind::Expand => "expand_inverse",
            ViewOpKind::Permute => "permute_inverse",
            ViewOpKind::ReshapeAlias => "reshape_alias_inverse",
            ViewOpKind::Select => "select_inverse",
            ViewOpKind::Detach => "detach_inverse",
            ViewOpKind::Slice => "slice_inverse",
            ViewOpKind::Split => "split_inverse",
            ViewOpKind::SplitWithSizes => "split_with_sizes_inverse",
            ViewOpKind::Squeeze => "squeeze_inverse",
            ViewOpKind::SqueezeDim => "squeeze_dim_inverse",
            ViewOpKind::T => "t_inverse",
            ViewOpKind::Transpose => "transpose_inverse",
            ViewOpKind::Unsqueeze => "unsqueeze_inverse",
            ViewOpKind::PrivateIndices => "private_indices_inverse",
            ViewOpKind::PrivateValues => "private_values_inverse",
            ViewOpKind::Indices => "indices_inverse",
            ViewOpKind::Values => "values_inverse",
            ViewOpKind::CrowIndices => "crow_indices_inverse",
            ViewOpKind::ColIndices => "col_indices_inverse",
            ViewOpKind::Unbind => "unbind_inverse",
            ViewOpKind::View => "view_inverse",
            ViewOpKind::ViewDtype => "view_dtype_inverse",
            ViewOpKind::Unfold => "unfold_inverse",
            ViewOpKind::Alias => "alias_inverse",
        }
    }

    /// False for the entries whose inverse always panics.
    pub fn is_supported(&self) -> bool {
        !matches!(
            self,
            ViewOpKind::FwPrimal
                | ViewOpKind::AsStrided
                | ViewOpKind::PrivateIndices
                | ViewOpKind::PrivateValues
                | ViewOpKind::Indices
                | ViewOpKind::Values
                | ViewOpKind::CrowIndices
                | ViewOpKind::ColIndices
        )
    }

    /// True when the view covers a sub-region of the base and the inverse
    /// writes it back with a scatter.
    pub fn is_scatter(&self) -> bool {
        matches!(
            self,
            ViewOpKind::Diagonal
                | ViewOpKind::Select
                | ViewOpKind::Slice
                | ViewOpKind::Split
                | ViewOpKind::SplitWithSizes
                | ViewOpKind::Unbind
        )
    }

    pub fn base_usage(&self) -> BaseUsage {
        if self.is_scatter() {
            return BaseUsage::ShapeAndValues;
        }
        match self {
            ViewOpKind::Expand
            | ViewOpKind::ReshapeAlias
            | ViewOpKind::Squeeze
            | ViewOpKind::SqueezeDim
            | ViewOpKind::View
            | ViewOpKind::ViewDtype
            | ViewOpKind::Unfold => BaseUsage::ShapeOnly,
            _ => BaseUsage::Unused,
        }
    }
}

impl fmt::Display for ViewOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewOpKind {
    type Err = NeuraRustError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewOpKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| NeuraRustError::UnsupportedOperation(format!("'{}' is not a known view operator", s)))
    }
}

/// A view operator together with the arguments it was called with.
///
/// Multi-output operators (`split`, `split_with_sizes`, `unbind`) carry the
/// index of the output the view is.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewOp {
    FwPrimal { level: i64 },
    ViewAsReal,
    ViewAsComplex,
    Conj,
    NegView,
    AsStrided { size: Vec<usize>, stride: Vec<usize>, storage_offset: Option<usize> },
    Diagonal { offset: i64, dim1: i64, dim2: i64 },
    Expand { size: Vec<i64>, implicit: bool },
    Permute { dims: Vec<i64> },
    ReshapeAlias { size: Vec<usize>, stride: Vec<usize> },
    Select { dim: i64, index: i64 },
    Detach,
    Slice { dim: i64, start: Option<i64>, end: Option<i64>, step: i64 },
    Split { index: usize, split_size: usize, dim: i64 },
    SplitWithSizes { index: usize, split_sizes: Vec<usize>, dim: i64 },
    Squeeze,
    SqueezeDim { dim: i64 },
    T,
    Transpose { dim0: i64, dim1: i64 },
    Unsqueeze { dim: i64 },
    PrivateIndices,
    PrivateValues,
    Indices,
    Values,
    CrowIndices,
    ColIndices,
    Unbind { index: i64, dim: i64 },
    View { size: Vec<i64> },
    ViewDtype { dtype: DType },
    Unfold { dimension: i64, size: usize, step: usize },
    Alias,
}

impl ViewOp {
    pub fn kind(&self) -> ViewOpKind {
        match self {
            ViewOp::FwPrimal { .. } => ViewOpKind::FwPrimal,
            ViewOp::ViewAsReal => ViewOpKind::ViewAsReal,
            ViewOp::ViewAsComplex => ViewOpKind::ViewAsComplex,
            ViewOp::Conj => ViewOpKind::Conj,
            ViewOp::NegView => ViewOpKind::NegView,
            ViewOp::AsStrided { .. } => ViewOpKind::AsStrided,
            ViewOp::Diagonal { .. } => ViewOpKind::Diagonal,
            ViewOp::Expand { .. } => ViewOpKind::Expand,
            ViewOp::Permute { .. } => ViewOpKind::Permute,
            ViewOp::ReshapeAlias { .. } => ViewOpKind::ReshapeAlias,
            ViewOp::Select { .. } => ViewOpKind::Select,
            ViewOp::Detach => ViewOpKind::Detach,
            ViewOp::Slice { .. } => ViewOpKind::Slice,
            ViewOp::Split { .. } => ViewOpKind::Split,
            ViewOp::SplitWithSizes { .. } => ViewOpKind::SplitWithSizes,
            ViewOp::Squeeze => ViewOpKind::Squeeze,
            ViewOp::SqueezeDim { .. } => ViewOpKind::SqueezeDim,
            ViewOp::T => ViewOpKind::T,
            ViewOp::Transpose { .. } => ViewOpKind::Transpose,
            ViewOp::Unsqueeze { .. } => ViewOpKind::Unsqueeze,
            ViewOp::PrivateIndices => ViewOpKind::PrivateIndices,
            ViewOp::PrivateValues => ViewOpKind::PrivateValues,
            ViewOp::Indices => ViewOpKind::Indices,
            ViewOp::Values => ViewOpKind::Values,
            ViewOp::CrowIndices => ViewOpKind::CrowIndices,
            ViewOp::ColIndices => ViewOpKind::ColIndices,
            ViewOp::Unbind { .. } => ViewOpKind::Unbind,
            ViewOp::View { .. } => ViewOpKind::View,
            ViewOp::ViewDtype { .. } => ViewOpKind::ViewDtype,
            ViewOp::Unfold { .. } => ViewOpKind::Unfold,
            ViewOp::Alias => ViewOpKind::Alias,
        }
    }

    /// Runs this operator's inverse: a new base in which the region this view
    /// covers holds `mutated_view`.
    ///
    /// # Panics
    /// For unsupported operators (see [`ViewOpKind::is_supported`]).
    pub fn inverse<T: ViewOps>(&self, base: &T, mutated_view: &T) -> Result<T, NeuraRustError> {
        trace!("functionalization: {} for {:?}", self.kind().inverse_name(), self);
        match self {
            ViewOp::FwPrimal { level } => guards::fw_primal_inverse(base, mutated_view, *level),
            ViewOp::ViewAsReal => inverses::view_as_real_inverse(base, mutated_view),
            ViewOp::ViewAsComplex => inverses::view_as_complex_inverse(base, mutated_view),
            ViewOp::Conj => inverses::conj_inverse(base, mutated_view),
            ViewOp::NegView => inverses::neg_view_inverse(base, mutated_view),
            ViewOp::AsStrided { size, stride, storage_offset } => {
                guards::as_strided_inverse(base, mutated_view, size, stride, *storage_offset)
            }
            ViewOp::Diagonal { offset, dim1, dim2 } => {
                inverses::diagonal_inverse(base, mutated_view, *offset, *dim1, *dim2)
            }
            ViewOp::Expand { size, implicit } => inverses::expand_inverse(base, mutated_view, size, *implicit),
            ViewOp::Permute { dims } => inverses::permute_inverse(base, mutated_view, dims),
            ViewOp::ReshapeAlias { size, stride } => inverses::reshape_alias_inverse(base, mutated_view, size, stride),
            ViewOp::Select { dim, index } => inverses::select_inverse(base, mutated_view, *dim, *index),
            ViewOp::Detach => inverses::detach_inverse(base, mutated_view),
            ViewOp::Slice { dim, start, end, step } => {
                inverses::slice_inverse(base, mutated_view, *dim, *start, *end, *step)
            }
            ViewOp::Split { index, split_size, dim } => {
                inverses::split_inverse(base, mutated_view, *index, *split_size, *dim)
            }
            ViewOp::SplitWithSizes { index, split_sizes, dim } => {
                inverses::split_with_sizes_inverse(base, mutated_view, *index, split_sizes, *dim)
            }
            ViewOp::Squeeze => inverses::squeeze_inverse(base, mutated_view),
            ViewOp::SqueezeDim { dim } => inverses::squeeze_dim_inverse(base, mutated_view, *dim),
            ViewOp::T => inverses::t_inverse(base, mutated_view),
            ViewOp::Transpose { dim0, dim1 } => inverses::transpose_inverse(base, mutated_view, *dim0, *dim1),
            ViewOp::Unsqueeze { dim } => inverses::unsqueeze_inverse(base, mutated_view, *dim),
            ViewOp::PrivateIndices => guards::private_indices_inverse(base, mutated_view),
            ViewOp::PrivateValues => guards::private_values_inverse(base, mutated_view),
            ViewOp::Indices => guards::indices_inverse(base, mutated_view),
            ViewOp::Values => guards::values_inverse(base, mutated_view),
            ViewOp::CrowIndices => guards::crow_indices_inverse(base, mutated_view),
            ViewOp::ColIndices => guards::col_indices_inverse(base, mutated_view),
            ViewOp::Unbind { index, dim } => inverses::unbind_inverse(base, mutated_view, *index, *dim),
            ViewOp::View { size } => inverses::view_inverse(base, mutated_view, size),
            ViewOp::ViewDtype { dtype } => inverses::view_dtype_inverse(base, mutated_view, *dtype),
            ViewOp::Unfold { dimension, size, step } => {
                inverses::unfold_inverse(base, mutated_view, *dimension, *size, *step)
            }
            ViewOp::Alias => inverses::alias_inverse(base, mutated_view),
        }
    }

    /// Replays this operator on `base`, producing the view it describes.
    ///
    /// # Errors
    /// `UnsupportedOperation` for forward-mode and sparse accessors, which
    /// have no meaning for a dense tensor; `IndexOutOfRange` when a
    /// multi-output operator has no output at the stored index.
    pub fn apply(&self, base: &Tensor) -> Result<Tensor, NeuraRustError> {
        trace!("functionalization: replaying {:?}", self);
        match self {
            ViewOp::ViewAsReal => base.view_as_real(),
            ViewOp::ViewAsComplex => base.view_as_complex(),
            ViewOp::Conj => base.conj(),
            ViewOp::NegView => base.neg_view(),
            ViewOp::AsStrided { size, stride, storage_offset } => base.as_strided(size, stride, *storage_offset),
            ViewOp::Diagonal { offset, dim1, dim2 } => base.diagonal(*offset, *dim1, *dim2),
            ViewOp::Expand { size, .. } => base.expand(size),
            ViewOp::Permute { dims } => base.permute(dims),
            ViewOp::ReshapeAlias { size, stride } => base.reshape_alias(size, stride),
            ViewOp::Select { dim, index } => base.select(*dim, *index),
            ViewOp::Detach => base.detach(),
            ViewOp::Slice { dim, start, end, step } => base.slice(*dim, *start, *end, *step),
            ViewOp::Split { index, split_size, dim } => {
                let d = maybe_wrap_dim(*dim, base.rank())?;
                pick_output(base.split(*split_size, *dim)?, *index, d)
            }
            ViewOp::SplitWithSizes { index, split_sizes, dim } => {
                let d = maybe_wrap_dim(*dim, base.rank())?;
                pick_output(base.split_with_sizes(split_sizes, *dim)?, *index, d)
            }
            ViewOp::Squeeze => base.squeeze(),
            ViewOp::SqueezeDim { dim } => base.squeeze_dim(*dim),
            ViewOp::T => base.t(),
            ViewOp::Transpose { dim0, dim1 } => base.transpose(*dim0, *dim1),
            ViewOp::Unsqueeze { dim } => base.unsqueeze(*dim),
            // unbind(dim)[index] is exactly select(dim, index)
            ViewOp::Unbind { index, dim } => base.select(*dim, *index),
            ViewOp::View { size } => base.view(size),
            ViewOp::ViewDtype { dtype } => base.view_dtype(*dtype),
            ViewOp::Unfold { dimension, size, step } => base.unfold(*dimension, *size, *step),
            ViewOp::Alias => base.alias(),
            ViewOp::FwPrimal { .. }
            | ViewOp::PrivateIndices
            | ViewOp::PrivateValues
            | ViewOp::Indices
            | ViewOp::Values
            | ViewOp::CrowIndices
            | ViewOp::ColIndices => Err(NeuraRustError::UnsupportedOperation(format!(
                "{} is not available on dense tensors without forward-mode AD",
                self.kind().name()
            ))),
        }
    }
}

fn pick_output(mut outputs: Vec<Tensor>, index: usize, dim: usize) -> Result<Tensor, NeuraRustError> {
    let count = outputs.len();
    if index >= count {
        return Err(NeuraRustError::IndexOutOfRange {
            index: index as i64,
            dim,
            size: count,
        });
    }
    Ok(outputs.swap_remove(index))
}

#[cfg(test)]
#[path = "view_op_test.rs"]
mod tests;
