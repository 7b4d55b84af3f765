//! Puzzle generation: candidate numbers, target and display order.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::errors::domain::DomainError;

/// Smallest candidate count that leaves at least one value out of the target.
pub const MIN_CANDIDATES: usize = 3;
/// Inclusive range every candidate value is drawn from.
pub const CANDIDATE_MIN: u8 = 1;
pub const CANDIDATE_MAX: u8 = 10;
/// Trailing generated values that never contribute to the target.
pub const EXCLUDED_FROM_TARGET: usize = 2;

/// Immutable puzzle for a single round.
///
/// Candidates are kept in generation order alongside the permutation that
/// produced the display order, so the target-forming subset can always be
/// located again by display index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleInstance {
    /// Values in generation order.
    candidates: Vec<u8>,
    /// `permutation[display_index]` is the generation index shown there.
    permutation: Vec<usize>,
    /// Values in the order they are shown to the player.
    display_order: Vec<u8>,
    /// Sum of the first `candidates.len() - 2` generated values.
    target: u32,
}

impl PuzzleInstance {
    /// Build an instance from explicit generation-order values and a
    /// display permutation (`display_order[i] = values[permutation[i]]`).
    pub fn from_generation(values: Vec<u8>, permutation: Vec<usize>) -> Result<Self, DomainError> {
        require_candidate_count(values.len())?;

        if let Some(bad) = values
            .iter()
            .find(|v| !(CANDIDATE_MIN..=CANDIDATE_MAX).contains(*v))
        {
            return Err(DomainError::invalid_instance(format!(
                "candidate value {bad} outside {CANDIDATE_MIN}..={CANDIDATE_MAX}"
            )));
        }

        if permutation.len() != values.len() {
            return Err(DomainError::invalid_instance(format!(
                "permutation has {} entries, expected {}",
                permutation.len(),
                values.len()
            )));
        }

        let mut seen = vec![false; values.len()];
        for &gen_idx in &permutation {
            match seen.get_mut(gen_idx) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => {
                    return Err(DomainError::invalid_instance(format!(
                        "generation index {gen_idx} appears twice in permutation"
                    )))
                }
                None => {
                    return Err(DomainError::invalid_instance(format!(
                        "generation index {gen_idx} out of range"
                    )))
                }
            }
        }

        let target = values[..values.len() - EXCLUDED_FROM_TARGET]
            .iter()
            .map(|&v| u32::from(v))
            .sum();
        let display_order = permutation.iter().map(|&gen_idx| values[gen_idx]).collect();

        Ok(Self {
            candidates: values,
            permutation,
            display_order,
            target,
        })
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Values in generation order.
    pub fn candidates(&self) -> &[u8] {
        &self.candidates
    }

    pub fn display_order(&self) -> &[u8] {
        &self.display_order
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Value shown at `index`, if the index is on the board.
    pub fn value_at(&self, index: usize) -> Option<u8> {
        self.display_order.get(index).copied()
    }

    /// Display indices holding the generated values the target was built from.
    ///
    /// Selecting exactly these always wins. Other subsets may sum to the
    /// target too; this is just the one the round was constructed around.
    pub fn reference_solution(&self) -> Vec<usize> {
        let included = self.candidates.len() - EXCLUDED_FROM_TARGET;
        self.permutation
            .iter()
            .enumerate()
            .filter(|&(_, &gen_idx)| gen_idx < included)
            .map(|(display_idx, _)| display_idx)
            .collect()
    }
}

fn require_candidate_count(candidate_count: usize) -> Result<(), DomainError> {
    if candidate_count < MIN_CANDIDATES {
        return Err(DomainError::invalid_configuration(format!(
            "candidate_count must be >= {MIN_CANDIDATES}, got {candidate_count}"
        )));
    }
    Ok(())
}

/// Generate a puzzle using the caller's RNG.
///
/// Values are drawn independently and uniformly from `1..=10`; the display
/// order is a uniform shuffle of generation positions, so every arrangement
/// of the values is reachable.
pub fn generate_with_rng<R: Rng + ?Sized>(
    candidate_count: usize,
    rng: &mut R,
) -> Result<PuzzleInstance, DomainError> {
    require_candidate_count(candidate_count)?;

    let values: Vec<u8> = (0..candidate_count)
        .map(|_| rng.random_range(CANDIDATE_MIN..=CANDIDATE_MAX))
        .collect();

    let mut permutation: Vec<usize> = (0..candidate_count).collect();
    permutation.shuffle(rng);

    PuzzleInstance::from_generation(values, permutation)
}

/// Generate a puzzle from the thread-local RNG.
pub fn generate(candidate_count: usize) -> Result<PuzzleInstance, DomainError> {
    generate_with_rng(candidate_count, &mut rand::rng())
}

/// Generate a puzzle fully determined by `seed`.
pub fn generate_seeded(candidate_count: usize, seed: u64) -> Result<PuzzleInstance, DomainError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_with_rng(candidate_count, &mut rng)
}
