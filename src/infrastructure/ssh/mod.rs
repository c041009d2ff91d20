//! OpenSSH-backed remote sessions

mod process;
mod session;

pub use session::{SshConnector, SshSession};
