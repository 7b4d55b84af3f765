use crate::domain::puzzle::PuzzleInstance;
use crate::domain::round::RoundEngine;

/// Generation order for the worked example: target = 4 + 5 + 3 = 12.
pub const SCENARIO_A_VALUES: [u8; 5] = [4, 5, 3, 7, 2];
/// Display order becomes [2, 3, 4, 7, 5].
pub const SCENARIO_A_PERMUTATION: [usize; 5] = [4, 2, 0, 3, 1];

#[derive(Debug, Clone)]
pub struct MakeRoundArgs {
    pub values: Vec<u8>,
    pub permutation: Vec<usize>,
    pub initial_seconds: u32,
}

impl Default for MakeRoundArgs {
    fn default() -> Self {
        Self {
            values: SCENARIO_A_VALUES.to_vec(),
            permutation: SCENARIO_A_PERMUTATION.to_vec(),
            initial_seconds: 10,
        }
    }
}

pub fn make_instance(args: &MakeRoundArgs) -> PuzzleInstance {
    PuzzleInstance::from_generation(args.values.clone(), args.permutation.clone())
        .expect("fixture instance must be valid")
}

pub fn make_engine(args: MakeRoundArgs) -> RoundEngine {
    let instance = make_instance(&args);
    RoundEngine::new(instance, args.initial_seconds).expect("fixture seconds must be positive")
}
