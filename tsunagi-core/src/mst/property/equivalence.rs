//! Oracle equivalence for the Kruskal implementation.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::MstBuilder;

use super::{oracle::prim_forest, types::MstFixture};

/// Checks that the forest weight and component count match Prim's algorithm.
///
/// Tied weights may select different edges, so only the total and the
/// component count are compared.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let context = fixture.describe();
    let result = MstBuilder::new()
        .with_indexing(fixture.indexing)
        .build(fixture.node_count, &fixture.edges)
        .map_err(|err| TestCaseError::fail(format!("build failed: {err} ({context})")))?;
    let expected = prim_forest(fixture.node_count, fixture.indexing, &fixture.edges);

    if u64::from(result.total_weight()) != expected.total_weight {
        return Err(TestCaseError::fail(format!(
            "kruskal total {} differs from oracle total {} ({context})",
            result.total_weight(),
            expected.total_weight
        )));
    }
    if result.component_count() != expected.component_count {
        return Err(TestCaseError::fail(format!(
            "kruskal found {} components, oracle found {} ({context})",
            result.component_count(),
            expected.component_count
        )));
    }
    Ok(())
}
