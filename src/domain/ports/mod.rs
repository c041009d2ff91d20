//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure provides the concrete implementations.

pub mod delay;
pub mod deploy_events;
pub mod document_repository;
pub mod remote_session;

pub use delay::Delay;
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use document_repository::DocumentRepository;
pub use remote_session::{CommandOutput, RemoteSession, SessionConnector, SessionError};
