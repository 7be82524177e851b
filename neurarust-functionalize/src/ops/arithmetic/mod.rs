pub mod neg;

pub use neg::neg_op;
