//! Managed resource kinds: functions, HTTP triggers, and environments.
//!
//! These are the wire types stores accept and produce. The dispatch layer
//! never inspects them; it moves serialized payloads through opaquely.

use serde::{Deserialize, Serialize};

/// Identity shared by every resource kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Resource name, unique within its kind.
    pub name: String,
    /// Store-assigned identifier, absent until the resource is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

impl Metadata {
    /// Creates metadata for a named resource with no uid assigned yet.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uid: None,
        }
    }
}

/// A deployable function and the environment it runs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    /// Resource identity.
    pub metadata: Metadata,
    /// Reference to the environment the function executes in.
    pub environment: Metadata,
    /// Source or package reference for the function body.
    pub code: String,
}

/// An HTTP trigger mapping a URL pattern onto a function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpTrigger {
    /// Resource identity.
    pub metadata: Metadata,
    /// URL pattern the trigger matches.
    pub url_pattern: String,
    /// Reference to the function the trigger invokes.
    pub function: Metadata,
}

/// A runtime environment functions execute in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Resource identity.
    pub metadata: Metadata,
    /// Container image providing the runtime.
    pub run_container_image_url: String,
}

/// Uniform access to resource identity, letting a store be generic over
/// the resource kind it manages.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Singular kind label used in store messages (e.g. `"function"`).
    fn kind() -> &'static str;

    /// The resource's metadata.
    fn metadata(&self) -> &Metadata;

    /// Mutable access to the metadata, so a store can assign a uid.
    fn metadata_mut(&mut self) -> &mut Metadata;

    /// The resource's name.
    fn name(&self) -> &str {
        &self.metadata().name
    }
}

impl Resource for Function {
    fn kind() -> &'static str {
        "function"
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

impl Resource for HttpTrigger {
    fn kind() -> &'static str {
        "httptrigger"
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

impl Resource for Environment {
    fn kind() -> &'static str {
        "environment"
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}
