//! Coin and position basis states.
//!
//! The four standard coin inputs are exposed as constructors rather than
//! globals so callers pass them explicitly. All constructors return unit-norm
//! vectors by construction.

use std::f64::consts::FRAC_1_SQRT_2;

use num_complex::Complex;

use crate::algebra::{creal, czero, CVector};

/// Coin basis state |0⟩.
pub fn ket0() -> CVector {
    CVector::from_vec(vec![creal(1.0), czero()])
}

/// Coin basis state |1⟩.
pub fn ket1() -> CVector {
    CVector::from_vec(vec![czero(), creal(1.0)])
}

/// The symmetric coin state (|0⟩ + i|1⟩)/√2.
///
/// Feeding this to a balanced (45°) coin gives the left-right symmetric walk.
pub fn ket_plus_i() -> CVector {
    CVector::from_vec(vec![
        creal(FRAC_1_SQRT_2),
        Complex::new(0.0, FRAC_1_SQRT_2),
    ])
}

/// The antisymmetric coin state (|0⟩ − i|1⟩)/√2.
pub fn ket_minus_i() -> CVector {
    CVector::from_vec(vec![
        creal(FRAC_1_SQRT_2),
        Complex::new(0.0, -FRAC_1_SQRT_2),
    ])
}

/// Position basis state |index⟩ in a `sites`-dimensional position space.
pub fn position_basis(sites: usize, index: usize) -> CVector {
    assert!(index < sites, "basis index {index} out of range for {sites} sites");
    CVector::from_fn(sites, |i, _| if i == index { creal(1.0) } else { czero() })
}

/// Whether the vector has unit norm within `tol`.
pub fn is_normalized(v: &CVector, tol: f64) -> bool {
    (v.norm() - 1.0).abs() < tol
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_states_are_normalized() {
        for state in [ket0(), ket1(), ket_plus_i(), ket_minus_i()] {
            assert!(is_normalized(&state, 1e-12));
        }
    }

    #[test]
    fn ket0_ket1_orthogonal() {
        let ip: Complex<f64> = ket0().dotc(&ket1());
        assert!(ip.norm() < 1e-15);
    }

    #[test]
    fn plus_minus_i_orthogonal() {
        let ip: Complex<f64> = ket_plus_i().dotc(&ket_minus_i());
        assert!(ip.norm() < 1e-12);
    }

    #[test]
    fn position_basis_is_a_delta() {
        let v = position_basis(5, 2);
        assert_eq!(v.len(), 5);
        for i in 0..5 {
            let expect = if i == 2 { 1.0 } else { 0.0 };
            assert_eq!(v[i], creal(expect));
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn position_basis_index_out_of_range_panics() {
        position_basis(3, 3);
    }

    #[test]
    fn norm_check_rejects_scaled_vector() {
        let v = ket0() * creal(0.7);
        assert!(!is_normalized(&v, 1e-9));
    }
}
