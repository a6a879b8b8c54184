pub mod probe;
pub mod result;

pub mod prelude {
    pub use super::probe::{ProbeError, Prober};
    pub use super::result::{ProbeFailure, ProbeResult};
}
