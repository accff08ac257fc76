//! Projective measurement onto lattice positions.

use crate::algebra::{identity, kron, outer, trace, CMatrix};
use crate::error::WalkError;
use crate::states::position_basis;

/// Measure the position distribution of an evolved density matrix.
///
/// For each sampled position index `i`, builds the projector `I₂ ⊗ |i⟩⟨i|`
/// (identity on the coin subspace) and records `p_i = |tr(ρ·P_i)|`. The
/// absolute value guards against floating-point sign noise on a quantity that
/// is real and non-negative.
///
/// `stride = 1` samples every position; `stride = 2` samples only even-indexed
/// positions, which skips the parity-forbidden sites where a centered walk has
/// exactly zero probability.
///
/// ρ must be square with dimension `2·(2t+1)`; anything else is a
/// `DimensionMismatch` since ρ is caller-supplied.
pub fn measure(t: usize, rho: &CMatrix, stride: usize) -> Result<Vec<f64>, WalkError> {
    if t == 0 {
        return Err(WalkError::InvalidStepCount);
    }
    if stride == 0 {
        return Err(WalkError::InvalidStride);
    }
    let sites = 2 * t + 1;
    let dim = 2 * sites;
    if rho.nrows() != dim || rho.ncols() != dim {
        return Err(WalkError::DimensionMismatch {
            expected: dim,
            actual: rho.nrows(),
        });
    }

    let coin_id = identity(2);
    let mut prob = Vec::with_capacity(sites / stride + 1);
    for i in (0..sites).step_by(stride) {
        let site = position_basis(sites, i);
        let projector = kron(&coin_id, &outer(&site, &site));
        let p = trace(&(rho * projector)).norm();
        prob.push(p);
    }
    Ok(prob)
}
