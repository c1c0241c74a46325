//! Nimbus Core — resource model and domain error taxonomy shared by the
//! controller and its store collaborators.

pub mod error;
pub mod resources;

pub use error::{DomainError, ErrorKind};
pub use resources::{Environment, Function, HttpTrigger, Metadata, Resource};
