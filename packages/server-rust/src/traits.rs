use async_trait::async_trait;
use bytes::Bytes;

/// Store collaborator for one resource kind.
/// Implementations: in-memory (tests, development), etcd/SQL (future).
///
/// Payloads cross this seam as opaque serialized bytes: the store owns the
/// wire format, validation rules, and any consistency guarantees. Domain
/// failures are raised as [`nimbus_core::DomainError`] carried inside
/// `anyhow::Error`, so the API layer can recover the classification by
/// downcast while non-domain errors pass through untyped.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// List every resource of this kind.
    async fn list(&self) -> anyhow::Result<Bytes>;

    /// Create a resource from a serialized payload, returning the stored form.
    async fn create(&self, payload: Bytes) -> anyhow::Result<Bytes>;

    /// Fetch a single resource by name.
    async fn get(&self, name: &str) -> anyhow::Result<Bytes>;

    /// Replace a named resource with a serialized payload, returning the stored form.
    async fn update(&self, name: &str, payload: Bytes) -> anyhow::Result<Bytes>;

    /// Delete a single resource by name.
    async fn delete(&self, name: &str) -> anyhow::Result<Bytes>;
}
