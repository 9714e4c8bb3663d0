//! Real-world scenario benchmarks.
//!
//! These run complete renders the way a request would, from decoded buffers
//! to the interleaved stereo result.

mod render;

pub use render::bench_render;
