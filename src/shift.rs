//! The coin-conditioned position shift operator.
//!
//! The position space has `sites = 2t+1` basis states, exactly enough to hold
//! every position reachable in `t` steps from the center, so the cyclic
//! wraparound at the edges is never exercised before the final step.

use crate::algebra::{creal, czero, kron, outer, CMatrix};
use crate::error::WalkError;
use crate::states::{ket0, ket1};

/// Cyclic permutation rolling each basis state down the lattice:
/// |j⟩ → |j+1 mod sites⟩ (the identity with every row moved down one, the last
/// row wrapping to the top). This is the left-chirality block of the shift.
pub fn shift_left(sites: usize) -> CMatrix {
    CMatrix::from_fn(sites, sites, |r, c| {
        if (c + 1) % sites == r {
            creal(1.0)
        } else {
            czero()
        }
    })
}

/// Cyclic permutation rolling each basis state up the lattice:
/// |j⟩ → |j−1 mod sites⟩. The right-chirality block of the shift.
pub fn shift_right(sites: usize) -> CMatrix {
    CMatrix::from_fn(sites, sites, |r, c| {
        if (r + 1) % sites == c {
            creal(1.0)
        } else {
            czero()
        }
    })
}

/// Build the `2·sites`-dimensional conditional shift for a `t`-step walk:
///
/// ```text
/// S = |0⟩⟨0| ⊗ shift_left + |1⟩⟨1| ⊗ shift_right
/// ```
///
/// Each block is a permutation matrix, so S is unitary. Returns
/// `WalkError::InvalidStepCount` for `t = 0`.
pub fn shift(t: usize) -> Result<CMatrix, WalkError> {
    if t == 0 {
        return Err(WalkError::InvalidStepCount);
    }
    let sites = 2 * t + 1;
    let k0 = ket0();
    let k1 = ket1();
    Ok(kron(&outer(&k0, &k0), &shift_left(sites)) + kron(&outer(&k1, &k1), &shift_right(sites)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{is_unitary, kron_vec, CVector};
    use crate::states::position_basis;

    /// Every row and column of a permutation matrix holds exactly one
    /// unit-magnitude entry.
    fn assert_permutation(m: &CMatrix) {
        let n = m.nrows();
        assert_eq!(n, m.ncols());
        for r in 0..n {
            let hits: Vec<usize> = (0..n).filter(|&c| m[(r, c)].norm() > 1e-12).collect();
            assert_eq!(hits.len(), 1, "row {r} has {} nonzeros", hits.len());
            assert!((m[(r, hits[0])].norm() - 1.0).abs() < 1e-12);
        }
        for c in 0..n {
            let hits = (0..n).filter(|&r| m[(r, c)].norm() > 1e-12).count();
            assert_eq!(hits, 1, "column {c} has {hits} nonzeros");
        }
    }

    #[test]
    fn shift_blocks_are_permutations() {
        for sites in [3, 5, 7, 11] {
            assert_permutation(&shift_left(sites));
            assert_permutation(&shift_right(sites));
        }
    }

    #[test]
    fn shift_left_increments_position() {
        let sl = shift_left(5);
        for j in 0..5 {
            let moved = &sl * position_basis(5, j);
            let expect = position_basis(5, (j + 1) % 5);
            assert!((moved - expect).norm() < 1e-12);
        }
    }

    #[test]
    fn shift_right_decrements_position() {
        let sr = shift_right(5);
        for j in 0..5 {
            let moved = &sr * position_basis(5, j);
            let expect = position_basis(5, (j + 4) % 5);
            assert!((moved - expect).norm() < 1e-12);
        }
    }

    #[test]
    fn blocks_are_mutually_inverse() {
        for sites in [3, 7] {
            let prod = shift_left(sites) * shift_right(sites);
            assert!((prod - crate::algebra::identity(sites)).norm() < 1e-12);
        }
    }

    #[test]
    fn shift_is_unitary_and_permutation() {
        for t in 1..=6 {
            let s = shift(t).unwrap();
            assert_eq!(s.nrows(), 2 * (2 * t + 1));
            assert!(is_unitary(&s, 1e-9));
            assert_permutation(&s);
        }
    }

    #[test]
    fn shift_moves_coin_conditioned() {
        let t = 2;
        let sites = 2 * t + 1;
        let s = shift(t).unwrap();

        // Coin |0⟩ at center moves to center+1.
        let psi0: CVector = kron_vec(&crate::states::ket0(), &position_basis(sites, t));
        let out0 = &s * psi0;
        let expect0 = kron_vec(&crate::states::ket0(), &position_basis(sites, t + 1));
        assert!((out0 - expect0).norm() < 1e-12);

        // Coin |1⟩ at center moves to center−1.
        let psi1: CVector = kron_vec(&crate::states::ket1(), &position_basis(sites, t));
        let out1 = &s * psi1;
        let expect1 = kron_vec(&crate::states::ket1(), &position_basis(sites, t - 1));
        assert!((out1 - expect1).norm() < 1e-12);
    }

    #[test]
    fn zero_steps_rejected() {
        assert_eq!(shift(0), Err(WalkError::InvalidStepCount));
    }
}
