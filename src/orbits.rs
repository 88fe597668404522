//! The orbit-counting session: per-node enumeration of rooted graphlet
//! patterns, feeding the triangular identity system.
//!
//! For every node `x` the session runs two passes. Pass A counts the small
//! orbits 0..=3 and fills `common_x` (length-2 path counts from `x`). Pass B
//! walks eleven rooted 4-node patterns, counting orbits 4..=14 directly and
//! accumulating the auxiliary sums consumed by [`crate::solve`]. The pattern
//! predicates and their ordering constraints canonicalize each embedding with
//! the exact multiplicities the identity system is calibrated against, so
//! they must not be reordered or "simplified".

use crate::adjacency::{AdjacencyOracle, DenseAdjacency, SortedAdjacency};
use crate::graph::Graph;
use crate::keys::{NodePair, NodeTriple};
use crate::solve::{self, AuxSums, InvariantViolation};
use crate::tables::{self, CommonCounts};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Number of graphlet orbits on 2..=5 nodes.
pub const ORBIT_COUNT: usize = 73;

// ============================================================================
// Entry points
// ============================================================================

/// Counts, for every node of `graph`, how often it takes part in each of the
/// 73 graphlet orbits.
///
/// Picks the dense adjacency back-end when its bit matrix fits the size cap,
/// the sorted-list back-end otherwise. Both produce identical results.
///
/// # Errors
/// Returns an [`InvariantViolation`] if the solver detects corrupt counts;
/// this indicates a bug, not a property of the input graph.
pub fn count_orbits(graph: Graph) -> Result<OrbitCounts, InvariantViolation> {
    if DenseAdjacency::fits(graph.node_count()) {
        count_orbits_with::<DenseAdjacency>(graph)
    } else {
        count_orbits_with::<SortedAdjacency>(graph)
    }
}

/// Like [`count_orbits`], with the adjacency back-end chosen by the caller.
///
/// # Errors
/// See [`count_orbits`].
pub fn count_orbits_with<A: AdjacencyOracle>(graph: Graph) -> Result<OrbitCounts, InvariantViolation> {
    OrbitSession::<A>::new(graph).run()
}

// ============================================================================
// Result matrix
// ============================================================================

/// The n x 73 orbit matrix produced by a counting session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrbitCounts {
    n: usize,
    values: Vec<u64>,
}

impl OrbitCounts {
    fn zeroed(n: usize) -> Self {
        Self {
            n,
            values: vec![0; n * ORBIT_COUNT],
        }
    }

    /// Number of nodes (rows).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// The 73 orbit counts of node `x`.
    #[inline]
    pub fn row(&self, x: u32) -> &[u64] {
        let start = x as usize * ORBIT_COUNT;
        &self.values[start..start + ORBIT_COUNT]
    }

    #[inline]
    fn row_mut(&mut self, x: u32) -> &mut [u64] {
        let start = x as usize * ORBIT_COUNT;
        &mut self.values[start..start + ORBIT_COUNT]
    }

    /// Renders the matrix as text: one line per node, 73 space-separated
    /// decimal counts, a newline after every line.
    pub fn format(&self) -> String {
        let mut out = String::with_capacity(self.values.len() * 2);
        for x in 0..self.n {
            for (k, value) in self.row(x as u32).iter().enumerate() {
                if k != 0 {
                    out.push(' ');
                }
                out.push_str(&value.to_string());
            }
            out.push('\n');
        }
        out
    }

    /// Writes the text rendering to `w`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        for x in 0..self.n {
            for (k, value) in self.row(x as u32).iter().enumerate() {
                if k != 0 {
                    write!(w, " ")?;
                }
                write!(w, "{value}")?;
            }
            writeln!(w)?;
        }
        Ok(())
    }

    /// Writes the text rendering to a file, buffered.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut w = io::BufWriter::new(File::create(path)?);
        self.write_to(&mut w)?;
        w.flush()
    }
}

// ============================================================================
// Session
// ============================================================================

/// Owns the graph, the precomputed tables, and the per-iteration scratch for
/// one counting run.
struct OrbitSession<A> {
    graph: Graph,
    oracle: A,
    common: CommonCounts,
    triangles: Vec<u64>,
    five_cliques: Vec<u64>,
    common_x: Vec<u32>,
    common_x_touched: Vec<u32>,
    common_a: Vec<u32>,
    common_a_touched: Vec<u32>,
}

impl<A: AdjacencyOracle> OrbitSession<A> {
    fn new(graph: Graph) -> Self {
        let oracle = A::build(&graph);
        let common = CommonCounts::build(&graph, &oracle);
        let triangles = tables::triangle_counts(&graph);
        let five_cliques = tables::five_clique_counts(&graph, &oracle);
        let n = graph.node_count();
        Self {
            graph,
            oracle,
            common,
            triangles,
            five_cliques,
            common_x: vec![0; n],
            common_x_touched: Vec::with_capacity(n),
            common_a: vec![0; n],
            common_a_touched: Vec::with_capacity(n),
        }
    }

    fn run(mut self) -> Result<OrbitCounts, InvariantViolation> {
        let n = self.graph.node_count();
        let mut orbits = OrbitCounts::zeroed(n);
        for x in 0..n as u32 {
            let row = orbits.row_mut(x);
            self.small_orbits(x, row);
            let aux = self.rooted_patterns(x, row);
            solve::solve_row(x, &aux, self.five_cliques[x as usize], row)?;
        }
        Ok(orbits)
    }

    /// Pass A: orbits 0..=3 and the `common_x` scratch table, which maps each
    /// node reachable by a length-2 path from `x` (excluding neighbors of
    /// `x`) to the number of such paths.
    fn small_orbits(&mut self, x: u32, row: &mut [u64]) {
        let Self {
            graph,
            oracle,
            common_x,
            common_x_touched,
            ..
        } = self;
        let g: &Graph = graph;
        let oracle: &A = oracle;

        // Reset costs O(|touched|), not O(n).
        for &t in common_x_touched.iter() {
            common_x[t as usize] = 0;
        }
        common_x_touched.clear();

        row[0] = u64::from(g.degree(x));
        let nbrs = g.neighbors(x);
        for (i, &a) in nbrs.iter().enumerate() {
            for &b in &nbrs[i + 1..] {
                if oracle.are_adjacent(g, a, b) {
                    row[3] += 1;
                } else {
                    row[2] += 1;
                }
            }
            for &b in g.neighbors(a) {
                if b == x || oracle.are_adjacent(g, x, b) {
                    continue;
                }
                row[1] += 1;
                if common_x[b as usize] == 0 {
                    common_x_touched.push(b);
                }
                common_x[b as usize] += 1;
            }
        }
    }

    /// Pass B: the rooted 4-node patterns for orbits 4..=14 and their
    /// auxiliary sums.
    fn rooted_patterns(&mut self, x: u32, row: &mut [u64]) -> AuxSums {
        let Self {
            graph,
            oracle,
            common,
            triangles,
            common_x,
            common_a,
            common_a_touched,
            ..
        } = self;
        let g: &Graph = graph;
        let oracle: &A = oracle;
        let common: &CommonCounts = common;
        let triangles: &[u64] = triangles;
        let common_x: &[u32] = common_x;

        let deg = |v: u32| i64::from(g.degree(v));
        let tri = |e: u32| triangles[e as usize] as i64;
        let adj = |u: u32, v: u32| oracle.are_adjacent(g, u, v);
        let c2 = |u: u32, v: u32| common.pair(NodePair::new(u, v)) as i64;
        let c3 = |u: u32, v: u32, w: u32| common.triple(NodeTriple::new(u, v, w)) as i64;

        let mut f = AuxSums::default();
        let inc_x = g.incidence(x);

        for nx1 in 0..inc_x.len() {
            let (a, xa) = inc_x[nx1];

            // common_a[c]: length-2 paths from a, rebuilt for this neighbor.
            for &t in common_a_touched.iter() {
                common_a[t as usize] = 0;
            }
            common_a_touched.clear();
            for &b in g.neighbors(a) {
                for &c in g.neighbors(b) {
                    if c == a || adj(a, c) {
                        continue;
                    }
                    if common_a[c as usize] == 0 {
                        common_a_touched.push(c);
                    }
                    common_a[c as usize] += 1;
                }
            }

            // orbit 14: tetrahedron on {x, a, b, c}
            for nx2 in nx1 + 1..inc_x.len() {
                let (b, xb) = inc_x[nx2];
                if !adj(a, b) {
                    continue;
                }
                for nx3 in nx2 + 1..inc_x.len() {
                    let (c, xc) = inc_x[nx3];
                    if !adj(a, c) || !adj(b, c) {
                        continue;
                    }
                    row[14] += 1;
                    f.f70 += c3(a, b, c) - 1;
                    if tri(xa) > 2 && tri(xb) > 2 {
                        f.f71 += c3(x, a, b) - 1;
                    }
                    if tri(xa) > 2 && tri(xc) > 2 {
                        f.f71 += c3(x, a, c) - 1;
                    }
                    if tri(xb) > 2 && tri(xc) > 2 {
                        f.f71 += c3(x, b, c) - 1;
                    }
                    f.f67 += tri(xa) - 2 + tri(xb) - 2 + tri(xc) - 2;
                    f.f66 += c2(a, b) - 2 + c2(a, c) - 2 + c2(b, c) - 2;
                    f.f58 += deg(x) - 3;
                    f.f57 += deg(a) - 3 + deg(b) - 3 + deg(c) - 3;
                }
            }

            // orbit 13: diamond with the x-a diagonal present
            for nx2 in 0..inc_x.len() {
                let (b, xb) = inc_x[nx2];
                if !adj(a, b) {
                    continue;
                }
                for nx3 in nx2 + 1..inc_x.len() {
                    let (c, xc) = inc_x[nx3];
                    if !adj(a, c) || adj(b, c) {
                        continue;
                    }
                    row[13] += 1;
                    if tri(xb) > 1 && tri(xc) > 1 {
                        f.f69 += c3(x, b, c) - 1;
                    }
                    f.f68 += c3(a, b, c) - 1;
                    f.f64 += c2(b, c) - 2;
                    f.f61 += tri(xb) - 1 + tri(xc) - 1;
                    f.f60 += c2(a, b) - 1 + c2(a, c) - 1;
                    f.f55 += tri(xa) - 2;
                    f.f48 += deg(b) - 2 + deg(c) - 2;
                    f.f42 += deg(x) - 3;
                    f.f41 += deg(a) - 3;
                }
            }

            // orbit 12: diamond with the a-b diagonal, x on the rim
            for nx2 in nx1 + 1..inc_x.len() {
                let (b, _) = inc_x[nx2];
                if !adj(a, b) {
                    continue;
                }
                for &(c, ac) in g.incidence(a) {
                    if c == x || adj(x, c) || !adj(b, c) {
                        continue;
                    }
                    row[12] += 1;
                    if tri(ac) > 1 {
                        f.f65 += c3(a, b, c);
                    }
                    f.f63 += i64::from(common_x[c as usize]) - 2;
                    f.f59 += tri(ac) - 1 + c2(b, c) - 1;
                    f.f54 += c2(a, b) - 2;
                    f.f47 += deg(x) - 2;
                    f.f46 += deg(c) - 2;
                    f.f40 += deg(a) - 3 + deg(b) - 3;
                }
            }

            // orbit 8: 4-cycle x-a-c-b
            for nx2 in nx1 + 1..inc_x.len() {
                let (b, xb) = inc_x[nx2];
                if adj(a, b) {
                    continue;
                }
                for &(c, ac) in g.incidence(a) {
                    if c == x || adj(x, c) || !adj(b, c) {
                        continue;
                    }
                    row[8] += 1;
                    if tri(ac) > 0 {
                        f.f62 += c3(a, b, c);
                    }
                    f.f53 += tri(xa) + tri(xb);
                    f.f51 += tri(ac) + c2(c, b);
                    f.f50 += i64::from(common_x[c as usize]) - 2;
                    f.f49 += i64::from(common_a[b as usize]) - 2;
                    f.f38 += deg(x) - 2;
                    f.f37 += deg(a) - 2 + deg(b) - 2;
                    f.f36 += deg(c) - 2;
                }
            }

            // orbit 11: paw centered on x (triangle x-a-b, pendant c)
            for nx2 in nx1 + 1..inc_x.len() {
                let (b, _) = inc_x[nx2];
                if !adj(a, b) {
                    continue;
                }
                for nx3 in 0..inc_x.len() {
                    let (c, xc) = inc_x[nx3];
                    if c == a || c == b || adj(a, c) || adj(b, c) {
                        continue;
                    }
                    row[11] += 1;
                    f.f44 += tri(xc);
                    f.f33 += deg(x) - 3;
                    f.f30 += deg(c) - 1;
                    f.f26 += deg(a) - 2 + deg(b) - 2;
                }
            }

            // orbit 10: paw centered on b, x on the triangle rim
            for nx2 in 0..inc_x.len() {
                let (b, _) = inc_x[nx2];
                if !adj(a, b) {
                    continue;
                }
                for &(c, bc) in g.incidence(b) {
                    if c == x || c == a || adj(a, c) || adj(x, c) {
                        continue;
                    }
                    row[10] += 1;
                    f.f52 += i64::from(common_a[c as usize]) - 1;
                    f.f43 += tri(bc);
                    f.f32 += deg(b) - 3;
                    f.f29 += deg(c) - 1;
                    f.f25 += deg(a) - 2;
                }
            }

            // orbit 9: paw centered on a, x pendant
            let inc_a = g.incidence(a);
            for na1 in 0..inc_a.len() {
                let (b, ab) = inc_a[na1];
                if b == x || adj(x, b) {
                    continue;
                }
                for na2 in na1 + 1..inc_a.len() {
                    let (c, ac) = inc_a[na2];
                    if c == x || !adj(b, c) || adj(x, c) {
                        continue;
                    }
                    row[9] += 1;
                    if tri(ab) > 1 && tri(ac) > 1 {
                        f.f56 += c3(a, b, c);
                    }
                    f.f45 += c2(b, c) - 1;
                    f.f39 += tri(ab) - 1 + tri(ac) - 1;
                    f.f31 += deg(a) - 3;
                    f.f28 += deg(x) - 1;
                    f.f24 += deg(b) - 2 + deg(c) - 2;
                }
            }

            // orbit 4: path x-a-b-c, x at the end
            for &(b, _) in inc_a {
                if b == x || adj(x, b) {
                    continue;
                }
                for &(c, bc) in g.incidence(b) {
                    if c == a || adj(a, c) || adj(x, c) {
                        continue;
                    }
                    row[4] += 1;
                    f.f35 += i64::from(common_a[c as usize]) - 1;
                    f.f34 += i64::from(common_x[c as usize]);
                    f.f27 += tri(bc);
                    f.f18 += deg(b) - 2;
                    f.f16 += deg(x) - 1;
                    f.f15 += deg(c) - 1;
                }
            }

            // orbit 5: path a-x-b-c, x inner
            for &b in g.neighbors(x) {
                if b == a || adj(a, b) {
                    continue;
                }
                for &c in g.neighbors(b) {
                    if c == x || adj(a, c) || adj(x, c) {
                        continue;
                    }
                    row[5] += 1;
                    f.f17 += deg(a) - 1;
                }
            }

            // orbit 6: claw centered on a, x a leaf
            let nbrs_a = g.neighbors(a);
            for (i, &b) in nbrs_a.iter().enumerate() {
                if b == x || adj(x, b) {
                    continue;
                }
                for &c in &nbrs_a[i + 1..] {
                    if c == x || adj(x, c) || adj(b, c) {
                        continue;
                    }
                    row[6] += 1;
                    f.f22 += deg(a) - 3;
                    f.f20 += deg(x) - 1;
                    f.f19 += deg(b) - 1 + deg(c) - 1;
                }
            }

            // orbit 7: claw centered on x
            for nx2 in nx1 + 1..inc_x.len() {
                let (b, _) = inc_x[nx2];
                if adj(a, b) {
                    continue;
                }
                for nx3 in nx2 + 1..inc_x.len() {
                    let (c, _) = inc_x[nx3];
                    if adj(a, c) || adj(b, c) {
                        continue;
                    }
                    row[7] += 1;
                    f.f23 += deg(x) - 3;
                    f.f21 += deg(a) - 1 + deg(b) - 1 + deg(c) - 1;
                }
            }
        }

        f
    }
}

// ============================================================================
// Tests
// ============================================================================
