//! Delay Port
//!
//! The fixed settle and convergence waits go through this port so that the
//! deploy sequence can be exercised without sleeping.

use std::time::Duration;

/// Unconditional wait
pub trait Delay: Send + Sync {
    fn wait(&self, duration: Duration);
}
