//! Escape routing: fans trace stubs out of dense pad fields and bundles
//! them into ordered rivers.

pub mod river;
pub mod stub;

use thiserror::Error;

pub use river::{Escape, MismatchPolicy, River};
pub use stub::{Bend, TraceStub};

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("cannot interleave pad groups of different sizes ({left} vs {right})")]
    InterleaveMismatch { left: usize, right: usize },
}
