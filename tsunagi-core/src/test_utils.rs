//! Shared test utilities for `tsunagi-core`.

use std::env;

use proptest::test_runner::Config as ProptestConfig;

/// Environment variable overriding the number of cases per property.
const PBT_CASES_ENV_KEY: &str = "TSUNAGI_PBT_CASES";

/// Builds the proptest configuration shared by every property suite.
///
/// `TSUNAGI_PBT_CASES` overrides `default_cases`; an unparsable or zero value
/// is reported and ignored.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases: read_cases(default_cases),
        ..ProptestConfig::default()
    }
}

fn read_cases(default_cases: u32) -> u32 {
    let Ok(raw) = env::var(PBT_CASES_ENV_KEY) else {
        return default_cases;
    };
    match raw.trim().parse::<u32>() {
        Ok(cases) if cases > 0 => cases,
        _ => {
            tracing::warn!(
                env = PBT_CASES_ENV_KEY,
                raw = %raw,
                "invalid property-test case override; using default",
            );
            default_cases
        }
    }
}
