use crate::core::RepeatSource;
use rand::rngs::ThreadRng;
use rand::Rng;
use std::collections::VecDeque;

/// Uniform replication counts drawn from a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomRepeats<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomRepeats<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomRepeats<ThreadRng> {
    /// Unseeded source used by the command line.
    pub fn from_thread_rng() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> RepeatSource for RandomRepeats<R> {
    fn next_count(&mut self, min: usize, max: usize) -> usize {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}

/// Replays a fixed list of counts, clamped into `[min, max]`.
/// Once the list runs out every draw returns `min`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRepeats {
    counts: VecDeque<usize>,
}

impl ScriptedRepeats {
    pub fn new(counts: impl IntoIterator<Item = usize>) -> Self {
        Self {
            counts: counts.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.counts.len()
    }
}

impl RepeatSource for ScriptedRepeats {
    fn next_count(&mut self, min: usize, max: usize) -> usize {
        self.counts
            .pop_front()
            .map(|count| count.clamp(min, max.max(min)))
            .unwrap_or(min)
    }
}
