//! Cooldown-weighted categorical sampling over indices.
//!
//! After an index is committed it is fully excluded for `cooldown` picks, then
//! ramps back toward its baseline weight over a further `recovery` picks. The
//! instantaneous mass of an item whose counter is `s` is:
//!
//! \[
//! p(s) = \begin{cases}
//!   0 & s > \mathrm{recovery} \\
//!   (m^{-s} + \mathrm{step} \cdot s) \cdot w_i & \text{otherwise}
//! \end{cases}
//! \]
//!
//! where `step = m^(-recovery) / recovery` when normalization is on (0
//! otherwise). Long-run frequencies still converge to the configured weights;
//! only short-range autocorrelation is suppressed.
//!
//! Notes:
//! - Randomness is injected at construction as a [`RandomSource`] closure.
//!   There is no ambient `rand::rng()` fallback inside the sampler; use
//!   [`source_from_rng`] to adapt any [`rand::Rng`], which also gives
//!   deterministic tests via a seeded generator.
//! - Peeking and committing are separate: [`CooldownSampler::peek`] is a pure
//!   function of the cached draw and the current counters.

use std::fmt;

use rand::Rng;

/// Source of uniform draws in `[0, 1)`, called once per commit.
pub type RandomSource = Box<dyn FnMut() -> f64>;

/// Adapt any owned RNG into a [`RandomSource`].
pub fn source_from_rng<R: Rng + 'static>(mut rng: R) -> RandomSource {
    Box::new(move || rng.random::<f64>())
}

/// Errors for sampler construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SamplerError {
    /// The pool has no items to select from.
    EmptyPool,
}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPool => write!(f, "pool must contain at least one item"),
        }
    }
}

impl std::error::Error for SamplerError {}

/// Tuning knobs for a [`CooldownSampler`].
///
/// Every field is optional; defaults are derived from the pool size at
/// construction: `cooldown = count / 5` (clamped to `count - 1`),
/// `recovery = count / 3`, `multiplier = 1.3`, `normalize = true`, all
/// weights equal.
#[derive(Debug, Clone, Default)]
pub struct SamplerOptions {
    cooldown: Option<usize>,
    recovery: Option<usize>,
    multiplier: Option<f64>,
    normalize: Option<bool>,
    weights: Option<Vec<f64>>,
}

impl SamplerOptions {
    /// Number of picks during which a just-chosen item cannot be chosen again.
    ///
    /// Clamped to `count - 1` at construction, since at least one item must
    /// stay selectable.
    pub fn cooldown(mut self, picks: usize) -> Self {
        self.cooldown = Some(picks);
        self
    }

    /// Number of picks after cooldown during which the item's probability
    /// ramps back to baseline.
    pub fn recovery(mut self, picks: usize) -> Self {
        self.recovery = Some(picks);
        self
    }

    /// Decay base of the recovery curve. Should be `> 0`, typically `> 1`.
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    /// Shift the recovery curve so the probability right after cooldown
    /// starts near zero instead of jumping to `multiplier^(-recovery)`.
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = Some(normalize);
        self
    }

    /// Static per-item weight coefficients.
    ///
    /// Adjusted to the pool size at construction (truncated, or padded
    /// with `1.0`). Non-finite or negative entries are accepted as-is and
    /// simply distort the distribution; they never cause a panic.
    pub fn weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }
}

/// A stateful weighted sampler that suppresses short-term repeats.
///
/// Each of the `count` indices carries a counter in
/// `[0, cooldown + recovery]`. Committing a pick via [`next`](Self::next)
/// resets the chosen counter to the maximum and decrements every other
/// counter (floored at 0). Counters above `recovery` mean "fully excluded";
/// counters in `(0, recovery]` mean "partially recovered"; 0 means fully
/// eligible.
///
/// [`peek`](Self::peek) previews the upcoming pick without consuming
/// randomness or touching the counters, so repeated peeks agree until the
/// next commit.
pub struct CooldownSampler {
    cooldown: usize,
    recovery: usize,
    multiplier: f64,
    step: f64,
    weights: Option<Vec<f64>>,
    state: Vec<usize>,
    cached: f64,
    source: RandomSource,
}

impl fmt::Debug for CooldownSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CooldownSampler")
            .field("count", &self.state.len())
            .field("cooldown", &self.cooldown)
            .field("recovery", &self.recovery)
            .field("multiplier", &self.multiplier)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl CooldownSampler {
    /// Create a sampler over `count` indices with every counter at 0.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::EmptyPool`] if `count == 0`.
    pub fn new(
        count: usize,
        options: SamplerOptions,
        source: RandomSource,
    ) -> Result<Self, SamplerError> {
        Self::with_state(count, options, source, Vec::new())
    }

    /// Create a sampler adopting previously persisted counters, e.g. a
    /// snapshot taken from [`state`](Self::state).
    ///
    /// The counters are copied in and adjusted to length `count` (truncated,
    /// or padded with zeros). Entries above `cooldown + recovery` are
    /// accepted: such items sit in the dead zone until their counter
    /// decrements back into range.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::EmptyPool`] if `count == 0`.
    pub fn with_state(
        count: usize,
        options: SamplerOptions,
        mut source: RandomSource,
        mut state: Vec<usize>,
    ) -> Result<Self, SamplerError> {
        if count == 0 {
            return Err(SamplerError::EmptyPool);
        }

        let cooldown = options.cooldown.unwrap_or(count / 5).min(count - 1);
        let recovery = options.recovery.unwrap_or(count / 3);
        let multiplier = options.multiplier.unwrap_or(1.3);
        let normalize = options.normalize.unwrap_or(true);

        let step = if normalize && recovery > 0 {
            multiplier.powf(-(recovery as f64)) / recovery as f64
        } else {
            0.0
        };

        let mut weights = options.weights;
        if let Some(w) = weights.as_mut() {
            w.resize(count, 1.0);
        }

        state.resize(count, 0);

        // One draw up front so the first peek already has randomness to use.
        let cached = source();

        Ok(Self {
            cooldown,
            recovery,
            multiplier,
            step,
            weights,
            state,
            cached,
            source,
        })
    }

    /// Number of selectable indices.
    pub fn count(&self) -> usize {
        self.state.len()
    }

    /// Effective cooldown length (after clamping).
    pub fn cooldown(&self) -> usize {
        self.cooldown
    }

    /// Recovery length.
    pub fn recovery(&self) -> usize {
        self.recovery
    }

    /// Read-only snapshot of the per-item counters, suitable for
    /// persistence and later [`with_state`](Self::with_state).
    pub fn state(&self) -> &[usize] {
        &self.state
    }

    /// Instantaneous probability mass of `index` at counter value `counter`.
    fn mass(&self, index: usize, counter: usize) -> f64 {
        if counter > self.recovery {
            return 0.0;
        }
        let curve = self.multiplier.powf(-(counter as f64)) + self.step * counter as f64;
        match &self.weights {
            Some(w) => curve * w[index],
            None => curve,
        }
    }

    /// Two-pass weighted draw against the cached uniform.
    fn peek_with(&self, ignore_state: bool) -> usize {
        let count = self.state.len();

        let mut sum = 0.0;
        for i in 0..count {
            let s = if ignore_state { 0 } else { self.state[i] };
            sum += self.mass(i, s);
        }

        let value = self.cached * sum;
        let mut acc = 0.0;
        for i in 0..count {
            let s = if ignore_state { 0 } else { self.state[i] };
            let prob = self.mass(i, s);
            if value >= acc && value < acc + prob {
                return i;
            }
            acc += prob;
        }

        // Rounding at the right edge of the last interval, or a degenerate
        // state with zero total mass: uniform pick, ignoring state and
        // weights. `cached < 1.0`, so the result is in range.
        (self.cached * count as f64) as usize
    }

    fn next_with(&mut self, ignore_state: bool) -> usize {
        let index = self.peek_with(ignore_state);

        for counter in &mut self.state {
            *counter = counter.saturating_sub(1);
        }
        self.state[index] = self.cooldown + self.recovery;

        self.cached = (self.source)();
        index
    }

    /// Preview the index the next commit would return.
    ///
    /// Pure with respect to the sampler: no randomness is consumed and no
    /// counter changes, so consecutive peeks return the same index.
    pub fn peek(&self) -> usize {
        self.peek_with(false)
    }

    /// Like [`peek`](Self::peek), but weigh every item as if its counter
    /// were 0 (weights still apply). The real counters are untouched.
    pub fn peek_ignoring_state(&self) -> usize {
        self.peek_with(true)
    }

    /// Commit a pick: select an index, reset its counter to
    /// `cooldown + recovery`, decrement all other counters (floored at 0),
    /// and draw fresh randomness for the next pick.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> usize {
        self.next_with(false)
    }

    /// Commit a pick selected as if no counter were set.
    ///
    /// Only the selection weighting ignores the counters; the bookkeeping
    /// (decrement + reset of the chosen index) still happens.
    pub fn next_ignoring_state(&mut self) -> usize {
        self.next_with(true)
    }

    /// Zero every counter, making all items fully eligible again.
    ///
    /// Configuration and the cached draw are untouched.
    pub fn reset(&mut self) {
        self.state.fill(0);
    }
}
