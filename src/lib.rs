//! `human-random`: weighted random selection that avoids short-term repeats.
//!
//! Uniform sampling looks "broken" to humans: the same element showing up
//! twice in a row is perfectly likely and perfectly annoying. This crate
//! implements a stateful categorical sampler where a just-picked element is
//! excluded for a configurable number of picks (*cooldown*) and then ramps
//! back to its baseline weight over a further period (*recovery*), while
//! long-run frequencies still converge to the configured weights.
//!
//! Exposed modules:
//! - `sampler`: the index-only core: probability curve, cooldown/recovery
//!   state machine, peek/commit separation, counter snapshots for
//!   persistence.
//! - `items`: a generic wrapper that maps drawn indices through an owned
//!   collection.
//!
//! Randomness is an injected capability (`Box<dyn FnMut() -> f64>` yielding
//! uniforms in `[0, 1)`); [`source_from_rng`] adapts any [`rand::Rng`].

#![forbid(unsafe_code)]

pub mod items;
pub mod sampler;

pub use items::ItemSampler;
pub use sampler::{source_from_rng, CooldownSampler, RandomSource, SamplerError, SamplerOptions};
