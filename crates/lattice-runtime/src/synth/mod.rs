//! Deterministic graph synthesis.
//!
//! Turns an arbitrary identifier into a layered random DAG through a fixed
//! pipeline: [`hash::seed_for_id`] folds the identifier into a non-zero
//! 64-bit seed, [`rng::SeededRng`] stretches the seed into a reproducible
//! number stream, and [`synthesize`] drives the stream through graph
//! construction. The same identifier always yields the same graph.

mod generator;
mod hash;
mod rng;

pub use generator::synthesize;
pub use hash::seed_for_id;
pub use rng::SeededRng;
