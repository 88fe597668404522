//! Recovery of orbits 15..72 from the enumerated counts.
//!
//! The enumeration pass counts orbits 0..14 directly and accumulates one
//! auxiliary sum per derived orbit. Each identity below expresses one sum as
//! a positive integer combination of higher orbits plus a multiple of its
//! target orbit, so the system is triangular and solves in descending orbit
//! order. The identities are those of the orbit-counting method of Hočevar &
//! Demšar (Bioinformatics, 2014) and are a fixed constant of the problem.
//!
//! On well-formed graphs every right-hand side is a non-negative multiple of
//! its divisor. Anything else means the enumeration is corrupt and surfaces
//! as an [`InvariantViolation`].

use std::fmt;

/// Auxiliary pattern sums for one node, one accumulator per derived orbit.
#[derive(Clone, Copy, Debug, Default)]
#[allow(missing_docs)]
pub struct AuxSums {
    pub f15: i64,
    pub f16: i64,
    pub f17: i64,
    pub f18: i64,
    pub f19: i64,
    pub f20: i64,
    pub f21: i64,
    pub f22: i64,
    pub f23: i64,
    pub f24: i64,
    pub f25: i64,
    pub f26: i64,
    pub f27: i64,
    pub f28: i64,
    pub f29: i64,
    pub f30: i64,
    pub f31: i64,
    pub f32: i64,
    pub f33: i64,
    pub f34: i64,
    pub f35: i64,
    pub f36: i64,
    pub f37: i64,
    pub f38: i64,
    pub f39: i64,
    pub f40: i64,
    pub f41: i64,
    pub f42: i64,
    pub f43: i64,
    pub f44: i64,
    pub f45: i64,
    pub f46: i64,
    pub f47: i64,
    pub f48: i64,
    pub f49: i64,
    pub f50: i64,
    pub f51: i64,
    pub f52: i64,
    pub f53: i64,
    pub f54: i64,
    pub f55: i64,
    pub f56: i64,
    pub f57: i64,
    pub f58: i64,
    pub f59: i64,
    pub f60: i64,
    pub f61: i64,
    pub f62: i64,
    pub f63: i64,
    pub f64: i64,
    pub f65: i64,
    pub f66: i64,
    pub f67: i64,
    pub f68: i64,
    pub f69: i64,
    pub f70: i64,
    pub f71: i64,
}

/// A core assertion failed while solving: the inputs cannot have come from a
/// correct enumeration over a well-formed graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// An orbit count came out negative.
    NegativeCount {
        /// Node being solved.
        node: u32,
        /// Target orbit.
        orbit: usize,
        /// The negative right-hand side.
        value: i64,
    },
    /// A right-hand side was not divisible by its divisor.
    InexactDivision {
        /// Node being solved.
        node: u32,
        /// Target orbit.
        orbit: usize,
        /// The right-hand side.
        numerator: i64,
        /// The fixed divisor of the identity.
        divisor: i64,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::NegativeCount { node, orbit, value } => write!(
                f,
                "orbit {orbit} of node {node} solved to negative value {value}"
            ),
            InvariantViolation::InexactDivision {
                node,
                orbit,
                numerator,
                divisor,
            } => write!(
                f,
                "orbit {orbit} of node {node}: {numerator} is not divisible by {divisor}"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

#[inline]
fn solved(node: u32, orbit: usize, numerator: i64, divisor: i64) -> Result<i64, InvariantViolation> {
    if numerator < 0 {
        return Err(InvariantViolation::NegativeCount {
            node,
            orbit,
            value: numerator,
        });
    }
    if numerator % divisor != 0 {
        return Err(InvariantViolation::InexactDivision {
            node,
            orbit,
            numerator,
            divisor,
        });
    }
    Ok(numerator / divisor)
}

/// Solves the triangular system for one node.
///
/// `row` holds the directly enumerated orbits 0..=14 on entry; on success
/// orbits 15..=72 are filled in. `five_cliques` is the node's full 5-clique
/// count, which *is* orbit 72.
///
/// # Errors
/// Returns an [`InvariantViolation`] if any identity yields a negative count
/// or an inexact division.
pub fn solve_row(
    node: u32,
    f: &AuxSums,
    five_cliques: u64,
    row: &mut [u64],
) -> Result<(), InvariantViolation> {
    debug_assert_eq!(row.len(), 73);
    let mut o = [0i64; 73];
    o[72] = five_cliques as i64;
    o[71] = solved(node, 71, f.f71 - 12 * o[72], 2)?;
    o[70] = solved(node, 70, f.f70 - 4 * o[72], 1)?;
    o[69] = solved(node, 69, f.f69 - 2 * o[71], 4)?;
    o[68] = solved(node, 68, f.f68 - 2 * o[71], 1)?;
    o[67] = solved(node, 67, f.f67 - 12 * o[72] - 4 * o[71], 1)?;
    o[66] = solved(node, 66, f.f66 - 12 * o[72] - 2 * o[71] - 3 * o[70], 1)?;
    o[65] = solved(node, 65, f.f65 - 3 * o[70], 2)?;
    o[64] = solved(node, 64, f.f64 - 2 * o[71] - 4 * o[69] - o[68], 1)?;
    o[63] = solved(node, 63, f.f63 - 3 * o[70] - 2 * o[68], 1)?;
    o[62] = solved(node, 62, f.f62 - o[68], 2)?;
    o[61] = solved(node, 61, f.f61 - 4 * o[71] - 8 * o[69] - 2 * o[67], 2)?;
    o[60] = solved(node, 60, f.f60 - 4 * o[71] - 2 * o[68] - 2 * o[67], 1)?;
    o[59] = solved(node, 59, f.f59 - 6 * o[70] - 2 * o[68] - 4 * o[65], 1)?;
    o[58] = solved(node, 58, f.f58 - 4 * o[72] - 2 * o[71] - o[67], 1)?;
    o[57] = solved(
        node,
        57,
        f.f57 - 12 * o[72] - 4 * o[71] - 3 * o[70] - o[67] - 2 * o[66],
        1,
    )?;
    o[56] = solved(node, 56, f.f56 - 2 * o[65], 3)?;
    o[55] = solved(node, 55, f.f55 - 2 * o[71] - 2 * o[67], 3)?;
    o[54] = solved(node, 54, f.f54 - 3 * o[70] - o[66] - 2 * o[65], 2)?;
    o[53] = solved(node, 53, f.f53 - 2 * o[68] - 2 * o[64] - 2 * o[63], 1)?;
    o[52] = solved(node, 52, f.f52 - 2 * o[66] - 2 * o[64] - o[59], 2)?;
    o[51] = solved(node, 51, f.f51 - 2 * o[68] - 2 * o[63] - 4 * o[62], 1)?;
    o[50] = solved(node, 50, f.f50 - o[68] - 2 * o[63], 3)?;
    o[49] = solved(node, 49, f.f49 - o[68] - o[64] - 2 * o[62], 2)?;
    o[48] = solved(
        node,
        48,
        f.f48 - 4 * o[71] - 8 * o[69] - 2 * o[68] - 2 * o[67] - 2 * o[64] - 2 * o[61] - o[60],
        1,
    )?;
    o[47] = solved(
        node,
        47,
        f.f47 - 3 * o[70] - 2 * o[68] - o[66] - o[63] - o[60],
        1,
    )?;
    o[46] = solved(
        node,
        46,
        f.f46 - 3 * o[70] - 2 * o[68] - 2 * o[65] - o[63] - o[59],
        1,
    )?;
    o[45] = solved(node, 45, f.f45 - 2 * o[65] - 2 * o[62] - 3 * o[56], 1)?;
    o[44] = solved(node, 44, f.f44 - o[67] - 2 * o[61], 4)?;
    o[43] = solved(node, 43, f.f43 - 2 * o[66] - o[60] - o[59], 2)?;
    o[42] = solved(
        node,
        42,
        f.f42 - 2 * o[71] - 4 * o[69] - 2 * o[67] - 2 * o[61] - 3 * o[55],
        1,
    )?;
    o[41] = solved(
        node,
        41,
        f.f41 - 2 * o[71] - o[68] - 2 * o[67] - o[60] - 3 * o[55],
        1,
    )?;
    o[40] = solved(
        node,
        40,
        f.f40 - 6 * o[70] - 2 * o[68] - 2 * o[66] - 4 * o[65] - o[60] - o[59] - 4 * o[54],
        1,
    )?;
    o[39] = solved(node, 39, f.f39 - 4 * o[65] - o[59] - 6 * o[56], 2)?;
    o[38] = solved(
        node,
        38,
        f.f38 - o[68] - o[64] - 2 * o[63] - o[53] - 3 * o[50],
        1,
    )?;
    o[37] = solved(
        node,
        37,
        f.f37 - 2 * o[68] - 2 * o[64] - 2 * o[63] - 4 * o[62] - o[53] - o[51] - 4 * o[49],
        1,
    )?;
    o[36] = solved(
        node,
        36,
        f.f36 - o[68] - 2 * o[63] - 2 * o[62] - o[51] - 3 * o[50],
        1,
    )?;
    o[35] = solved(node, 35, f.f35 - o[59] - 2 * o[52] - 2 * o[45], 2)?;
    o[34] = solved(node, 34, f.f34 - o[59] - 2 * o[52] - o[51], 2)?;
    o[33] = solved(
        node,
        33,
        f.f33 - o[67] - 2 * o[61] - 3 * o[58] - 4 * o[44] - 2 * o[42],
        2,
    )?;
    o[32] = solved(
        node,
        32,
        f.f32 - 2 * o[66] - o[60] - o[59] - 2 * o[57] - 2 * o[43] - 2 * o[41] - o[40],
        2,
    )?;
    o[31] = solved(
        node,
        31,
        f.f31 - 2 * o[65] - o[59] - 3 * o[56] - o[43] - 2 * o[39],
        1,
    )?;
    o[30] = solved(
        node,
        30,
        f.f30 - o[67] - o[63] - 2 * o[61] - o[53] - 4 * o[44],
        1,
    )?;
    o[29] = solved(
        node,
        29,
        f.f29 - 2 * o[66] - 2 * o[64] - o[60] - o[59] - o[53] - 2 * o[52] - 2 * o[43],
        1,
    )?;
    o[28] = solved(
        node,
        28,
        f.f28 - 2 * o[65] - 2 * o[62] - o[59] - o[51] - o[43],
        1,
    )?;
    o[27] = solved(node, 27, f.f27 - o[59] - o[51] - 2 * o[45], 2)?;
    o[26] = solved(
        node,
        26,
        f.f26 - 2 * o[67] - 2 * o[63] - 2 * o[61] - 6 * o[58] - o[53] - 2 * o[47] - 2 * o[42],
        1,
    )?;
    o[25] = solved(
        node,
        25,
        f.f25 - 2 * o[66] - 2 * o[64] - o[59] - 2 * o[57] - 2 * o[52] - o[48] - o[40],
        2,
    )?;
    o[24] = solved(
        node,
        24,
        f.f24 - 4 * o[65] - 4 * o[62] - o[59] - 6 * o[56] - o[51] - 2 * o[45] - 2 * o[39],
        1,
    )?;
    o[23] = solved(node, 23, f.f23 - o[55] - o[42] - 2 * o[33], 4)?;
    o[22] = solved(
        node,
        22,
        f.f22 - 2 * o[54] - o[40] - o[39] - o[32] - 2 * o[31],
        3,
    )?;
    o[21] = solved(
        node,
        21,
        f.f21 - 3 * o[55] - 3 * o[50] - 2 * o[42] - 2 * o[38] - 2 * o[33],
        1,
    )?;
    o[20] = solved(
        node,
        20,
        f.f20 - 2 * o[54] - 2 * o[49] - o[40] - o[37] - o[32],
        1,
    )?;
    o[19] = solved(
        node,
        19,
        f.f19 - 4 * o[54] - 4 * o[49] - o[40] - 2 * o[39] - o[37] - 2 * o[35] - 2 * o[31],
        1,
    )?;
    o[18] = solved(
        node,
        18,
        f.f18 - o[59] - o[51] - 2 * o[46] - 2 * o[45] - 2 * o[36] - 2 * o[27] - o[24],
        2,
    )?;
    o[17] = solved(
        node,
        17,
        f.f17 - o[60] - o[53] - o[51] - o[48] - o[37] - 2 * o[34] - 2 * o[30],
        2,
    )?;
    o[16] = solved(
        node,
        16,
        f.f16 - o[59] - 2 * o[52] - o[51] - 2 * o[46] - 2 * o[36] - 2 * o[34] - o[29],
        1,
    )?;
    o[15] = solved(
        node,
        15,
        f.f15 - o[59] - 2 * o[52] - o[51] - 2 * o[45] - 2 * o[35] - 2 * o[34] - 2 * o[27],
        1,
    )?;

    for (k, slot) in row.iter_mut().enumerate().skip(15) {
        *slot = o[k] as u64;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_inputs_solve_to_zero() {
        let mut row = [0u64; 73];
        solve_row(0, &AuxSums::default(), 0, &mut row).unwrap();
        assert_eq!(row, [0u64; 73]);
    }

    #[test]
    fn five_clique_count_is_orbit_72() {
        // K5 seen from one node: four tetrahedra, every auxiliary sum at its
        // clique-saturated value.
        let f = AuxSums {
            f71: 12,
            f70: 4,
            f67: 12,
            f66: 12,
            f58: 4,
            f57: 12,
            ..AuxSums::default()
        };
        let mut row = [0u64; 73];
        row[0] = 4;
        row[3] = 6;
        row[14] = 4;
        solve_row(0, &f, 1, &mut row).unwrap();
        assert_eq!(row[72], 1);
        for k in 15..72 {
            assert_eq!(row[k], 0, "orbit {k}");
        }
    }

    #[test]
    fn detects_inexact_division() {
        let f = AuxSums {
            f17: 3,
            ..AuxSums::default()
        };
        let mut row = [0u64; 73];
        let err = solve_row(7, &f, 0, &mut row).unwrap_err();
        assert_eq!(
            err,
            InvariantViolation::InexactDivision {
                node: 7,
                orbit: 17,
                numerator: 3,
                divisor: 2
            }
        );
    }

    #[test]
    fn detects_negative_count() {
        let f = AuxSums {
            f70: -1,
            ..AuxSums::default()
        };
        let mut row = [0u64; 73];
        let err = solve_row(3, &f, 0, &mut row).unwrap_err();
        assert_eq!(
            err,
            InvariantViolation::NegativeCount {
                node: 3,
                orbit: 70,
                value: -1
            }
        );
    }
}
