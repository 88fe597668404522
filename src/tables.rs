//! Precomputed pattern statistics shared by the orbit enumeration: the
//! common-neighbor tables, per-edge triangle counts, and full 5-clique
//! counts.

use crate::adjacency::AdjacencyOracle;
use crate::graph::Graph;
use crate::keys::{NodePair, NodeTriple};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

// ============================================================================
// Common-neighbor tables
// ============================================================================

/// Counts of nodes adjacent to every member of a pair or triple.
///
/// The pair table covers all pairs with at least one common neighbor. The
/// triple table is only populated for triples `{a, b, c}` whose induced
/// subgraph carries at least 2 of the 3 possible edges; the downstream
/// identities only ever consult such triples.
pub struct CommonCounts {
    pairs: FxHashMap<NodePair, u64>,
    triples: FxHashMap<NodeTriple, u64>,
}

impl CommonCounts {
    /// Builds both tables by walking every node's neighbor list.
    ///
    /// A node `x` contributes 1 to `pairs[{a, b}]` for each pair of its
    /// neighbors, and 1 to `triples[{a, b, c}]` for each neighbor triple
    /// that meets the edge-density condition.
    pub fn build<A: AdjacencyOracle>(g: &Graph, oracle: &A) -> Self {
        let mut pairs: FxHashMap<NodePair, u64> = FxHashMap::default();
        let mut triples: FxHashMap<NodeTriple, u64> = FxHashMap::default();
        for x in 0..g.node_count() as u32 {
            let nbrs = g.neighbors(x);
            for (i, &a) in nbrs.iter().enumerate() {
                for (j, &b) in nbrs.iter().enumerate().skip(i + 1) {
                    *pairs.entry(NodePair::new(a, b)).or_insert(0) += 1;
                    for &c in &nbrs[j + 1..] {
                        let span = u32::from(oracle.are_adjacent(g, a, b))
                            + u32::from(oracle.are_adjacent(g, a, c))
                            + u32::from(oracle.are_adjacent(g, b, c));
                        if span < 2 {
                            continue;
                        }
                        *triples.entry(NodeTriple::new(a, b, c)).or_insert(0) += 1;
                    }
                }
            }
        }
        Self { pairs, triples }
    }

    /// Number of nodes adjacent to both members of `pair`; 0 when absent.
    /// Lookups never insert.
    #[inline(always)]
    pub fn pair(&self, pair: NodePair) -> u64 {
        self.pairs.get(&pair).copied().unwrap_or(0)
    }

    /// Number of nodes adjacent to all members of `triple`; 0 when absent.
    /// Lookups never insert.
    #[inline(always)]
    pub fn triple(&self, triple: NodeTriple) -> u64 {
        self.triples.get(&triple).copied().unwrap_or(0)
    }
}

// ============================================================================
// Per-edge triangle counts
// ============================================================================

/// For each edge `{x, y}`, the number of triangles it spans, i.e.
/// `|N(x) ∩ N(y)|`, by a two-pointer merge of the sorted neighbor lists.
pub fn triangle_counts(g: &Graph) -> Vec<u64> {
    let mut triangles = vec![0u64; g.edge_count()];
    for (e, pair) in g.edges().iter().enumerate() {
        let xs = g.neighbors(pair.lo());
        let ys = g.neighbors(pair.hi());
        let (mut xi, mut yi) = (0, 0);
        while xi < xs.len() && yi < ys.len() {
            match xs[xi].cmp(&ys[yi]) {
                Ordering::Equal => {
                    triangles[e] += 1;
                    xi += 1;
                    yi += 1;
                }
                Ordering::Less => xi += 1,
                Ordering::Greater => yi += 1,
            }
        }
    }
    triangles
}

// ============================================================================
// Full 5-clique counts
// ============================================================================

/// For each node, the number of 5-cliques containing it.
///
/// Cliques are enumerated once each by descending node rank: `x > y > z`,
/// then a pair `zz < zzz` drawn from the common neighborhood. The scratch
/// buffers hold candidate extensions and are reused across iterations.
pub fn five_clique_counts<A: AdjacencyOracle>(g: &Graph, oracle: &A) -> Vec<u64> {
    let n = g.node_count();
    let mut counts = vec![0u64; n];
    let mut neigh: Vec<u32> = Vec::with_capacity(n);
    let mut neigh2: Vec<u32> = Vec::with_capacity(n);

    for x in 0..n as u32 {
        for &y in g.neighbors(x) {
            if y >= x {
                break;
            }
            neigh.clear();
            for &z in g.neighbors(y) {
                if z >= y {
                    break;
                }
                if oracle.are_adjacent(g, x, z) {
                    neigh.push(z);
                }
            }
            for (i, &z) in neigh.iter().enumerate() {
                neigh2.clear();
                for &zz in &neigh[i + 1..] {
                    if oracle.are_adjacent(g, z, zz) {
                        neigh2.push(zz);
                    }
                }
                for (i2, &zz) in neigh2.iter().enumerate() {
                    for &zzz in &neigh2[i2 + 1..] {
                        if oracle.are_adjacent(g, zz, zzz) {
                            counts[x as usize] += 1;
                            counts[y as usize] += 1;
                            counts[z as usize] += 1;
                            counts[zz as usize] += 1;
                            counts[zzz as usize] += 1;
                        }
                    }
                }
            }
        }
    }
    counts
}

// ============================================================================
// Tests
// ============================================================================
