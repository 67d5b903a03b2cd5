//! Blue-noise dither masks by greedy pairwise swapping.
//!
//! A mask is a square grid of byte samples. Its quality is scored by a
//! pairwise energy that is large when cells are both *close* on the torus and
//! *similar* in value. Optimization repeatedly swaps two random cells and
//! keeps the swap only if the total energy strictly decreases, pushing similar
//! values apart until the mask looks like blue noise.
//!
//! ## Usage
//!
//! ```
//! use bluenoise_swap::{BlueNoise, MaskConfig};
//!
//! let mut noise = BlueNoise::generate(MaskConfig::default().with_size(8))?;
//!
//! // Call once per frame/tick of the host application.
//! for _ in 0..4 {
//!     noise.step();
//! }
//!
//! let mut mono = Vec::new();
//! noise.export_mono(&mut mono);
//! assert_eq!(mono.len(), 8 * 8);
//! # Ok::<(), bluenoise_swap::MaskError>(())
//! ```
//!
//! ## Energy
//!
//! For cells `i != j` with toroidal displacement `(dx, dy)` and values
//! `vᵢ`, `vⱼ`:
//!
//! *E = Σ₍ⱼ < ᵢ₎ exp(-(dx² + dy²) / σ - √|vᵢ - vⱼ|)*, σ = 2.1 by default.
//!
//! Evaluating `E` is O(M²) for M = N² cells; with the `rayon` feature the rows
//! of the sum are spread over worker threads (see [`Reducer`]).
//!
//! ## Determinism
//!
//! Everything is driven by a seeded xoshiro128** stream. Parallel evaluation
//! merges per-row partial sums in index order, so results do not depend on the
//! number of threads.
//!
//! ## Cargo Features
//!
//! - `rayon` (default) -- parallel energy evaluation.
//! - `image` (default) -- [`image`](https://docs.rs/image) buffers and PNG
//!   output of the mask.
//! - `serde` -- `Serialize`/`Deserialize` for [`MaskConfig`] and friends.

mod config;
mod energy;
mod error;
mod grid;
mod metric;
mod optimizer;
mod random;
mod reduce;

pub use config::*;
pub use energy::*;
pub use error::*;
pub use grid::*;
pub use metric::*;
pub use optimizer::*;
pub use random::*;
pub use reduce::*;
