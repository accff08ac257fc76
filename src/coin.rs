//! The SU(2) coin operator.

use crate::algebra::{creal, CMatrix};

/// Build the 2×2 coin unitary for a coin angle given in degrees:
///
/// ```text
/// C(θ) = [ cos θ   sin θ ]
///        [ sin θ  −cos θ ]
/// ```
///
/// This is a Hermitian reflection for every angle (C = C†, C·C = I), so any
/// real input yields a valid unitary. θ = 45° is the balanced coin that splits
/// amplitude equally between the two shift directions.
pub fn coin(coin_angle: f64) -> CMatrix {
    let theta = coin_angle.to_radians();
    let (sin, cos) = theta.sin_cos();
    CMatrix::from_row_slice(2, 2, &[creal(cos), creal(sin), creal(sin), creal(-cos)])
}
