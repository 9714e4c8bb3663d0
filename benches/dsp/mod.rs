//! Benchmarks for sample-level primitives.

mod align;
mod gain;
mod mix;
mod phase;

pub use align::bench_align;
pub use gain::bench_gain;
pub use mix::bench_mix;
pub use phase::bench_phase;
