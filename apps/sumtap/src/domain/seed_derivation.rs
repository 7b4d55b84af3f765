//! RNG seed derivation for reproducible sessions.
//!
//! A configured session seed fixes the whole sequence of rounds: each
//! "play again" derives its own puzzle seed from the session seed and the
//! round number.

/// Derive the puzzle seed for a round.
///
/// # Arguments
///
/// * `session_seed` - Seed supplied through configuration
/// * `round_no` - 1-based round number within the session
///
/// # Returns
///
/// Derived seed that is unique per (session, round) combination.
pub fn derive_round_seed(session_seed: u64, round_no: u64) -> u64 {
    // Odd multiplier spreads consecutive rounds across the seed space
    session_seed
        .wrapping_add(round_no.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(1)
}
