//! The single-step walk unitary.

use crate::algebra::{identity, kron, CMatrix};
use crate::coin::coin;
use crate::error::WalkError;
use crate::shift::shift;

/// Build the evolution unitary for one walk step on a `t`-step lattice:
/// `W = S · (C ⊗ I_sites)` — coin rotation first, then the conditional shift.
///
/// W is `2·(2t+1)`-dimensional and unitary as a product of unitaries.
pub fn walk(t: usize, coin_angle: f64) -> Result<CMatrix, WalkError> {
    let sites = 2 * t + 1;
    let s = shift(t)?;
    Ok(s * kron(&coin(coin_angle), &identity(sites)))
}
