//! Item-mapping layer over the index sampler.
//!
//! [`ItemSampler`] owns an ordered collection and a [`CooldownSampler`] sized
//! to it: `peek`/`next` return references into the collection, while the
//! `*_index` accessors expose the raw index for callers that key external
//! bookkeeping (persistence, logging) off positions.

use std::fmt;

use crate::sampler::{CooldownSampler, RandomSource, SamplerError, SamplerOptions};

/// A [`CooldownSampler`] that returns elements of an owned collection.
pub struct ItemSampler<T> {
    items: Vec<T>,
    sampler: CooldownSampler,
}

impl<T: fmt::Debug> fmt::Debug for ItemSampler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemSampler")
            .field("items", &self.items)
            .field("sampler", &self.sampler)
            .finish()
    }
}

impl<T> ItemSampler<T> {
    /// Create a sampler over `items`, every counter starting at 0.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::EmptyPool`] if `items` is empty.
    pub fn new(
        items: Vec<T>,
        options: SamplerOptions,
        source: RandomSource,
    ) -> Result<Self, SamplerError> {
        let sampler = CooldownSampler::new(items.len(), options, source)?;
        Ok(Self { items, sampler })
    }

    /// Create a sampler adopting previously persisted counters.
    ///
    /// See [`CooldownSampler::with_state`] for how `state` is adjusted.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::EmptyPool`] if `items` is empty.
    pub fn with_state(
        items: Vec<T>,
        options: SamplerOptions,
        source: RandomSource,
        state: Vec<usize>,
    ) -> Result<Self, SamplerError> {
        let sampler = CooldownSampler::with_state(items.len(), options, source, state)?;
        Ok(Self { items, sampler })
    }

    /// Preview the item the next commit would return.
    pub fn peek(&self) -> &T {
        &self.items[self.sampler.peek()]
    }

    /// Preview as if no counter were set (weights still apply).
    pub fn peek_ignoring_state(&self) -> &T {
        &self.items[self.sampler.peek_ignoring_state()]
    }

    /// Commit a pick and return the chosen item.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> &T {
        let index = self.sampler.next();
        &self.items[index]
    }

    /// Commit a pick selected as if no counter were set. Counter
    /// bookkeeping still runs.
    pub fn next_ignoring_state(&mut self) -> &T {
        let index = self.sampler.next_ignoring_state();
        &self.items[index]
    }

    /// Index variant of [`peek`](Self::peek).
    pub fn peek_index(&self) -> usize {
        self.sampler.peek()
    }

    /// Index variant of [`peek_ignoring_state`](Self::peek_ignoring_state).
    pub fn peek_index_ignoring_state(&self) -> usize {
        self.sampler.peek_ignoring_state()
    }

    /// Index variant of [`next`](Self::next).
    pub fn next_index(&mut self) -> usize {
        self.sampler.next()
    }

    /// Index variant of [`next_ignoring_state`](Self::next_ignoring_state).
    pub fn next_index_ignoring_state(&mut self) -> usize {
        self.sampler.next_ignoring_state()
    }

    /// Zero every counter. See [`CooldownSampler::reset`].
    pub fn reset(&mut self) {
        self.sampler.reset();
    }

    /// Read-only snapshot of the per-item counters.
    pub fn state(&self) -> &[usize] {
        self.sampler.state()
    }

    /// The collection being sampled, in index order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The underlying index sampler.
    pub fn sampler(&self) -> &CooldownSampler {
        &self.sampler
    }
}
