//! Density-matrix evolution of the walk.
//!
//! The initial state is the pure product |ψ⟩ = coin ⊗ |position = t⟩, with the
//! walker on the center site of the `2t+1`-site lattice (lattice position 0).
//! Evolution conjugates ρ by the walk unitary once per step. Trace drift is
//! logged after the loop so long runs stay observable without ever failing.

use log::{debug, warn};

use crate::algebra::{dagger, kron_vec, outer, trace_deviation, CMatrix, CVector};
use crate::error::{WalkError, DRIFT_TOL, NORM_TOL};
use crate::states::{is_normalized, position_basis};
use crate::walk::walk;

/// Evolve the walker for `t` steps and return the final density matrix.
///
/// Builds ρ₀ = |ψ⟩⟨ψ| from the coin state and the centered position state,
/// then applies `ρ ← W ρ W†` exactly `t` times.
///
/// Fails fast on `t = 0`, on a coin state of the wrong dimension, and on a
/// coin state that is not unit-norm within `NORM_TOL` — the engine never
/// normalizes on the caller's behalf.
pub fn evolve(t: usize, qubit_state: &CVector, coin_angle: f64) -> Result<CMatrix, WalkError> {
    if t == 0 {
        return Err(WalkError::InvalidStepCount);
    }
    if qubit_state.len() != 2 {
        return Err(WalkError::DimensionMismatch {
            expected: 2,
            actual: qubit_state.len(),
        });
    }
    if !is_normalized(qubit_state, NORM_TOL) {
        return Err(WalkError::NotNormalized {
            norm: qubit_state.norm(),
        });
    }

    let sites = 2 * t + 1;
    let psi = kron_vec(qubit_state, &position_basis(sites, t));
    let mut rho = outer(&psi, &psi);

    let w = walk(t, coin_angle)?;
    let w_dag = dagger(&w);
    for _ in 0..t {
        rho = &w * rho * &w_dag;
    }

    let drift = trace_deviation(&rho);
    debug!("trace drift after {t} steps: {drift:.3e}");
    if drift > DRIFT_TOL {
        warn!("density matrix trace drifted by {drift:.3e} after {t} steps");
    }

    Ok(rho)
}
