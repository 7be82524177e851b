use neurarust_functionalize::tensor::{self, Tensor};

/// Installs `env_logger` once for the whole test binary.
/// Run with `RUST_LOG=trace` to see every dispatched inverse.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// F32 base whose element at flat position `i` holds `i`, so any view of it
/// reveals which base positions it covers.
#[allow(dead_code)]
pub fn indexed_base(shape: &[usize]) -> Tensor {
    tensor::arange(shape).expect("Failed to create indexed base")
}

/// Random replacement values for a view of the given shape.
#[allow(dead_code)]
pub fn mutation_for(view: &Tensor, seed: u64) -> Tensor {
    tensor::randn_seeded(&view.shape(), seed).expect("Failed to create mutation")
}
