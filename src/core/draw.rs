use crate::core::{Assignment, ForbiddenPairs};
use crate::utils::error::DrawError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;
pub const MIN_PARTICIPANTS: usize = 2;

/// 隨機循環抽籤引擎
///
/// Each attempt shuffles the participants, reads the shuffled order as a
/// single cycle and keeps it only if no adjacent pair is forbidden. Gives up
/// with [`DrawError::NoValidAssignment`] once `max_attempts` is spent; an
/// infeasible roster and an unlucky streak look the same from outside.
pub struct DrawEngine<R: Rng = StdRng> {
    rng: R,
    max_attempts: usize,
}

impl DrawEngine<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// 有 seed 時可重現結果，否則使用系統亂數
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}

impl Default for DrawEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> DrawEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// A budget of zero is raised to one attempt.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn draw<F: ForbiddenPairs + ?Sized>(
        &mut self,
        participants: &[String],
        forbidden: &F,
    ) -> Result<Assignment, DrawError> {
        let mut order = unique_in_order(participants);
        if order.len() < MIN_PARTICIPANTS {
            tracing::warn!(
                "Cannot draw with {} participant(s), need at least {}",
                order.len(),
                MIN_PARTICIPANTS
            );
            return Err(DrawError::InsufficientParticipants {
                required: MIN_PARTICIPANTS,
                found: order.len(),
            });
        }

        tracing::debug!(
            "Starting draw for {} participants (budget: {} attempts)",
            order.len(),
            self.max_attempts
        );

        for attempt in 1..=self.max_attempts {
            shuffle(&mut order, &mut self.rng);

            if let Some((giver, receiver)) = first_forbidden_link(&order, forbidden) {
                tracing::trace!("Attempt {} rejected: {} -> {}", attempt, giver, receiver);
                continue;
            }

            tracing::info!("Draw succeeded after {} attempt(s)", attempt);
            return Ok(Assignment::from_cycle(&order));
        }

        tracing::warn!(
            "No valid assignment found after {} attempts",
            self.max_attempts
        );
        Err(DrawError::NoValidAssignment {
            attempts: self.max_attempts,
        })
    }
}

/// 重複的名字只保留第一次出現的位置，避免自己抽到自己
fn unique_in_order(participants: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    participants
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}

/// Fisher-Yates: from the last index down, swap with a uniform index in `[0, i]`.
fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// 找出循環中第一組違反限制的相鄰配對
fn first_forbidden_link<'a, F: ForbiddenPairs + ?Sized>(
    order: &'a [String],
    forbidden: &F,
) -> Option<(&'a str, &'a str)> {
    let n = order.len();
    (0..n)
        .map(|i| (order[i].as_str(), order[(i + 1) % n].as_str()))
        .find(|(giver, receiver)| forbidden.is_forbidden(giver, receiver))
}
