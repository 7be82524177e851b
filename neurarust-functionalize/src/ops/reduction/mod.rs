pub mod sum_to;

pub use sum_to::sum_to_op;
