//! Dense complex matrix primitives for operator construction.
//!
//! Everything above this module works in terms of `CMatrix`/`CVector` —
//! dynamically sized dense matrices of `Complex<f64>` — plus a handful of free
//! functions: conjugate transpose, Kronecker product, trace, outer product, and
//! the unitarity/trace diagnostics used to observe numerical drift.
//!
//! Shape agreement between operands is a construction invariant, so mismatches
//! here are asserted, not returned as errors.

use nalgebra::{DMatrix, DVector};
use num_complex::Complex;
use num_traits::{One, Zero};

/// Dense complex matrix, dimensions fixed at construction.
pub type CMatrix = DMatrix<Complex<f64>>;

/// Dense complex column vector.
pub type CVector = DVector<Complex<f64>>;

/// The n×n identity.
pub fn identity(n: usize) -> CMatrix {
    CMatrix::identity(n, n)
}

/// Conjugate transpose A†.
pub fn dagger(a: &CMatrix) -> CMatrix {
    a.adjoint()
}

/// Trace of a square matrix.
pub fn trace(a: &CMatrix) -> Complex<f64> {
    assert_eq!(a.nrows(), a.ncols(), "trace requires a square matrix");
    a.trace()
}

/// Kronecker (tensor) product A ⊗ B.
pub fn kron(a: &CMatrix, b: &CMatrix) -> CMatrix {
    a.kronecker(b)
}

/// Kronecker product of state vectors, a ⊗ b.
pub fn kron_vec(a: &CVector, b: &CVector) -> CVector {
    let m = b.len();
    CVector::from_fn(a.len() * m, |i, _| a[i / m] * b[i % m])
}

/// Outer product |a⟩⟨b|.
pub fn outer(a: &CVector, b: &CVector) -> CMatrix {
    a * b.adjoint()
}

/// Frobenius deviation from unitarity, ‖U·U† − I‖.
pub fn unitarity_error(u: &CMatrix) -> f64 {
    assert_eq!(u.nrows(), u.ncols(), "unitarity check requires a square matrix");
    (u * u.adjoint() - identity(u.nrows())).norm()
}

/// Whether U is unitary within the given tolerance.
pub fn is_unitary(u: &CMatrix, tol: f64) -> bool {
    unitarity_error(u) < tol
}

/// |tr(ρ) − 1|, the trace drift of a density matrix.
pub fn trace_deviation(rho: &CMatrix) -> f64 {
    (trace(rho) - Complex::one()).norm()
}

/// Real zero as a complex scalar.
pub fn czero() -> Complex<f64> {
    Complex::zero()
}

/// Real `x` as a complex scalar.
pub fn creal(x: f64) -> Complex<f64> {
    Complex::new(x, 0.0)
}
