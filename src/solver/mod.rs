//! cert-manager DNS-01 solver backed by DNSPod.

pub mod constants;
pub mod errors;
pub mod impls;
pub mod traits;
pub mod types;

pub use errors::{ConfigError, SolverError};
pub use traits::Solver;
pub use types::{
    ChallengeAction, ChallengeRequest, DnsPodSolver, IssuerConfig, SecretKeySelector,
};
