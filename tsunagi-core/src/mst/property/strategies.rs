//! Graph generators for MST property-based tests.
//!
//! Generators work on zero-based slots and translate to the fixture's
//! labelling convention when an edge is pushed, so every strategy covers both
//! conventions.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Edge, NodeIndexing};

use super::types::{MstFixture, WeightDistribution};

/// Minimum node count for generated graphs.
const MIN_NODES: usize = 2;
/// Maximum node count for sparse and weighted graphs.
const MAX_NODES: usize = 48;
/// Maximum node count for dense graphs.
const DENSE_MAX_NODES: usize = 24;
/// Upper bound (exclusive) for continuous weights.
const MAX_WEIGHT: u32 = 1_000;

/// Generates fixtures across every distribution and both labelling conventions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>(), any::<bool>()).prop_map(
        |(distribution, seed, one_based)| {
            let indexing = if one_based {
                NodeIndexing::OneBased
            } else {
                NodeIndexing::ZeroBased
            };
            let mut rng = SmallRng::seed_from_u64(seed);
            generate_fixture(distribution, indexing, &mut rng)
        },
    )
}

/// Generates a fixture for an explicit distribution.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    indexing: NodeIndexing,
    rng: &mut SmallRng,
) -> MstFixture {
    let mut builder = EdgeListBuilder::new(indexing);
    let node_count = match distribution {
        WeightDistribution::Unique => unique_weights(&mut builder, rng),
        WeightDistribution::ManyIdentical => identical_weights(&mut builder, rng),
        WeightDistribution::Sparse => sparse(&mut builder, rng),
        WeightDistribution::Dense => dense(&mut builder, rng),
        WeightDistribution::Disconnected => disconnected(&mut builder, rng),
    };
    MstFixture {
        node_count,
        indexing,
        edges: builder.edges,
        distribution,
    }
}

/// Accumulates edges, translating slots into labels.
struct EdgeListBuilder {
    base: usize,
    edges: Vec<Edge<u32>>,
}

impl EdgeListBuilder {
    fn new(indexing: NodeIndexing) -> Self {
        Self {
            base: indexing.base(),
            edges: Vec::new(),
        }
    }

    fn push(&mut self, left: usize, right: usize, weight: u32) {
        self.edges
            .push(Edge::new(left + self.base, right + self.base, weight));
    }

    /// Adds each pair of `offset..offset + size` with `probability`.
    fn random_pairs(
        &mut self,
        offset: usize,
        size: usize,
        probability: f64,
        rng: &mut SmallRng,
        mut weight: impl FnMut(&mut SmallRng) -> u32,
    ) {
        for left in offset..offset + size {
            for right in (left + 1)..offset + size {
                if rng.gen_bool(probability) {
                    let value = weight(rng);
                    self.push(left, right, value);
                }
            }
        }
    }
}

fn unique_weights(builder: &mut EdgeListBuilder, rng: &mut SmallRng) -> usize {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let pair_count = node_count * (node_count - 1) / 2;
    let mut pool: Vec<u32> = (1..=u32::try_from(pair_count).unwrap_or(u32::MAX)).collect();
    shuffle(&mut pool, rng);
    let probability = rng.gen_range(0.2..=0.6);
    builder.random_pairs(0, node_count, probability, rng, |_| {
        pool.pop().unwrap_or(MAX_WEIGHT)
    });
    node_count
}

fn identical_weights(builder: &mut EdgeListBuilder, rng: &mut SmallRng) -> usize {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let pool: Vec<u32> = (0..rng.gen_range(1..=3))
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let probability = rng.gen_range(0.3..=0.7);
    builder.random_pairs(0, node_count, probability, rng, |r| {
        pool[r.gen_range(0..pool.len())]
    });
    node_count
}

fn sparse(builder: &mut EdgeListBuilder, rng: &mut SmallRng) -> usize {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut order: Vec<usize> = (0..node_count).collect();
    shuffle(&mut order, rng);
    for pair in order.windows(2) {
        builder.push(pair[0], pair[1], rng.gen_range(1..MAX_WEIGHT));
    }
    // Extras may repeat an existing pair or loop back onto a node.
    for _ in 0..rng.gen_range(0..=node_count) {
        let left = rng.gen_range(0..node_count);
        let right = rng.gen_range(0..node_count);
        builder.push(left, right, rng.gen_range(1..MAX_WEIGHT));
    }
    node_count
}

fn dense(builder: &mut EdgeListBuilder, rng: &mut SmallRng) -> usize {
    let node_count = rng.gen_range(MIN_NODES..=DENSE_MAX_NODES);
    let probability = rng.gen_range(0.7..=0.95);
    builder.random_pairs(0, node_count, probability, rng, |r| {
        r.gen_range(1..MAX_WEIGHT)
    });
    node_count
}

fn disconnected(builder: &mut EdgeListBuilder, rng: &mut SmallRng) -> usize {
    let mut offset = 0;
    for _ in 0..rng.gen_range(2..=5) {
        let size = rng.gen_range(1..=10);
        let probability = rng.gen_range(0.3..=0.8);
        builder.random_pairs(offset, size, probability, rng, |r| {
            r.gen_range(1..MAX_WEIGHT)
        });
        offset += size;
    }
    offset
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
