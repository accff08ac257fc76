//! # coined-walk-sim
//!
//! Exact simulator for a discrete-time quantum walk (DTQW) of a single walker
//! on a one-dimensional lattice, coupled to a two-level coin.
//!
//! The walker lives on `sites = 2t+1` lattice positions, enough to hold every
//! reachable position after `t` steps from the center. One evolution step is
//! the unitary `W = S · (C ⊗ I)`: a coin rotation followed by a shift that
//! moves the walker one site in the direction selected by the coin basis state.
//! The state is carried as a density matrix `ρ` on coin⊗position and evolved by
//! conjugation `ρ ← W ρ W†`, so the engine extends directly to mixed inputs
//! even though the shipped initial states are pure.
//!
//! After `t` steps the position distribution is read off by projective
//! measurement, and its variance σ²(t) quantifies the spreading: ballistic
//! (σ² ∝ t²) for a balanced coin, in contrast to the diffusive σ² ∝ t of the
//! classical random walk.
//!
//! ## Usage
//!
//! ```
//! use coined_walk_sim::prelude::*;
//!
//! // |0⟩+i|1⟩ / √2 coin, balanced (45°) coin operator, 5 steps.
//! let state = ket_plus_i();
//! let sigma_sq = variance(5, &state, 45.0, VarianceMethod::Weighted).unwrap();
//! assert!(sigma_sq > 1.0);
//! ```
//!
//! Cost scales steeply with `t`: the operators are dense `2(2t+1)`-dimensional
//! matrices and each run performs `t` conjugations, so a sweep over `1..=T`
//! costs O(T⁵). The `parallel` feature (on by default) runs sweep entries on
//! rayon workers; every run is independent.

pub mod algebra;
pub mod error;
pub mod states;
pub mod coin;
pub mod shift;
pub mod walk;
pub mod evolution;
pub mod measurement;
pub mod variance;

pub mod prelude {
    pub use crate::algebra::*;
    pub use crate::error::*;
    pub use crate::states::*;
    pub use crate::coin::*;
    pub use crate::shift::*;
    pub use crate::walk::*;
    pub use crate::evolution::*;
    pub use crate::measurement::*;
    pub use crate::variance::*;
}
