//! Thread-sleep delay

use std::thread;
use std::time::Duration;

use crate::domain::ports::Delay;

/// Blocks the calling thread for the full duration
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn wait(&self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}
