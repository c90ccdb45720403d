//! Determinism of the Kruskal implementation.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::MstBuilder;

use super::types::MstFixture;

/// Number of repeated builds compared against the first.
const REPETITIONS: usize = 4;

/// Builds the forest repeatedly and requires identical results each time,
/// including which of several equal-weight edges is chosen.
pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let context = fixture.describe();
    let builder = MstBuilder::new().with_indexing(fixture.indexing);
    let baseline = builder
        .build(fixture.node_count, &fixture.edges)
        .map_err(|err| TestCaseError::fail(format!("build failed: {err} ({context})")))?;

    for run in 1..=REPETITIONS {
        let repeat = builder
            .build(fixture.node_count, &fixture.edges)
            .map_err(|err| TestCaseError::fail(format!("build failed: {err} ({context})")))?;
        if repeat != baseline {
            return Err(TestCaseError::fail(format!(
                "run {run} produced {:?}, first run produced {:?} ({context})",
                repeat.edges(),
                baseline.edges()
            )));
        }
    }
    Ok(())
}
