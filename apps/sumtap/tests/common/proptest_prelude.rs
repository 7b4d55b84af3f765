// Proptest prelude, shared by the property test binaries via `include!`.
//
// Env knobs:
// - PROPTEST_CASES: cases per property (default 64)
// - PROPTEST_MAX_SHRINK_MS: cap on shrinking time in milliseconds

fn proptest_env_u32(key: &str) -> Option<u32> {
    std::env::var(key).ok().and_then(|s| s.trim().parse::<u32>().ok())
}

pub fn proptest_prelude_config() -> proptest::prelude::ProptestConfig {
    let base = proptest::prelude::ProptestConfig::default();

    proptest::prelude::ProptestConfig {
        // No regression files for integration tests
        failure_persistence: None,
        cases: proptest_env_u32("PROPTEST_CASES").unwrap_or(64).max(1),
        max_shrink_time: proptest_env_u32("PROPTEST_MAX_SHRINK_MS").unwrap_or(base.max_shrink_time),
        ..base
    }
}
