//! In-memory [`ResourceStore`] implementation.
//!
//! Suitable for development and testing. Resources live in a
//! `RwLock<HashMap>` keyed by name; payloads are JSON.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;

use nimbus_core::{DomainError, Resource};

use crate::traits::ResourceStore;

/// In-memory store for one resource kind.
///
/// Generic over the resource type so the same implementation backs
/// functions, HTTP triggers, and environments. An optional capacity bound
/// turns create into a `NoSpace` failure once reached.
pub struct MemoryStore<T> {
    entries: RwLock<HashMap<String, T>>,
    capacity: Option<usize>,
    uid_counter: AtomicU64,
}

impl<T> MemoryStore<T> {
    /// Creates an empty, unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity: None,
            uid_counter: AtomicU64::new(0),
        }
    }

    /// Creates an empty store that rejects creates beyond `capacity` entries.
    #[must_use]
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity: Some(capacity),
            uid_counter: AtomicU64::new(0),
        }
    }

    /// Number of stored resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the store holds no resources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> MemoryStore<T> {
    fn next_uid(&self) -> String {
        let n = self.uid_counter.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n}", T::kind())
    }
}

fn decode<T: Resource + DeserializeOwned>(payload: &Bytes) -> Result<T, DomainError> {
    serde_json::from_slice(payload).map_err(|err| {
        DomainError::invalid_argument(format!("invalid {} payload: {err}", T::kind()))
    })
}

fn encode<T: Serialize>(value: &T) -> anyhow::Result<Bytes> {
    Ok(Bytes::from(serde_json::to_vec(value)?))
}

#[async_trait]
impl<T> ResourceStore for MemoryStore<T>
where
    T: Resource + Serialize + DeserializeOwned,
{
    async fn list(&self) -> anyhow::Result<Bytes> {
        let entries = self.entries.read();
        let mut all: Vec<&T> = entries.values().collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        encode(&all)
    }

    async fn create(&self, payload: Bytes) -> anyhow::Result<Bytes> {
        let mut resource: T = decode(&payload)?;
        if resource.name().is_empty() {
            return Err(
                DomainError::invalid_argument(format!("{} name must not be empty", T::kind()))
                    .into(),
            );
        }
        let mut entries = self.entries.write();
        if let Some(capacity) = self.capacity {
            if entries.len() >= capacity {
                return Err(DomainError::no_space(format!(
                    "{} store is full ({capacity} entries)",
                    T::kind()
                ))
                .into());
            }
        }
        if entries.contains_key(resource.name()) {
            return Err(DomainError::invalid_argument(format!(
                "{} {} already exists",
                T::kind(),
                resource.name()
            ))
            .into());
        }
        resource.metadata_mut().uid = Some(self.next_uid());
        let stored = encode(&resource)?;
        entries.insert(resource.name().to_string(), resource);
        Ok(stored)
    }

    async fn get(&self, name: &str) -> anyhow::Result<Bytes> {
        let entries = self.entries.read();
        let resource = entries
            .get(name)
            .ok_or_else(|| DomainError::not_found(format!("{} {name} not found", T::kind())))?;
        encode(resource)
    }

    async fn update(&self, name: &str, payload: Bytes) -> anyhow::Result<Bytes> {
        let mut resource: T = decode(&payload)?;
        if resource.name() != name {
            return Err(DomainError::invalid_argument(format!(
                "{} name {} does not match path {name}",
                T::kind(),
                resource.name()
            ))
            .into());
        }
        let mut entries = self.entries.write();
        let existing = entries
            .get(name)
            .ok_or_else(|| DomainError::not_found(format!("{} {name} not found", T::kind())))?;
        // The uid is store-assigned and survives updates.
        resource.metadata_mut().uid = existing.metadata().uid.clone();
        let stored = encode(&resource)?;
        entries.insert(name.to_string(), resource);
        Ok(stored)
    }

    async fn delete(&self, name: &str) -> anyhow::Result<Bytes> {
        let mut entries = self.entries.write();
        entries
            .remove(name)
            .ok_or_else(|| DomainError::not_found(format!("{} {name} not found", T::kind())))?;
        Ok(Bytes::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_core::{ErrorKind, Function, Metadata};

    fn function_payload(name: &str) -> Bytes {
        let function = Function {
            metadata: Metadata::named(name),
            environment: Metadata::named("node"),
            code: "code".to_string(),
        };
        Bytes::from(serde_json::to_vec(&function).unwrap())
    }

    fn domain_kind(err: &anyhow::Error) -> Option<ErrorKind> {
        err.downcast_ref::<DomainError>().map(|e| e.kind)
    }

    #[tokio::test]
    async fn create_get_delete_round_trip() {
        let store = MemoryStore::<Function>::new();

        let stored = store.create(function_payload("hello")).await.unwrap();
        let created: Function = serde_json::from_slice(&stored).unwrap();
        assert_eq!(created.metadata.name, "hello");
        assert!(created.metadata.uid.is_some());

        let fetched = store.get("hello").await.unwrap();
        assert_eq!(fetched, stored);

        store.delete("hello").await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let store = MemoryStore::<Function>::new();
        let err = store.get("nope").await.unwrap_err();
        assert_eq!(domain_kind(&err), Some(ErrorKind::NotFound));
        assert!(err.to_string().contains("function nope not found"));
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let store = MemoryStore::<Function>::new();
        let err = store.delete("nope").await.unwrap_err();
        assert_eq!(domain_kind(&err), Some(ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn create_duplicate_is_invalid_argument() {
        let store = MemoryStore::<Function>::new();
        store.create(function_payload("hello")).await.unwrap();
        let err = store.create(function_payload("hello")).await.unwrap_err();
        assert_eq!(domain_kind(&err), Some(ErrorKind::InvalidArgument));
    }

    #[tokio::test]
    async fn create_garbage_payload_is_invalid_argument() {
        let store = MemoryStore::<Function>::new();
        let err = store
            .create(Bytes::from_static(b"not json"))
            .await
            .unwrap_err();
        assert_eq!(domain_kind(&err), Some(ErrorKind::InvalidArgument));
    }

    #[tokio::test]
    async fn create_empty_name_is_invalid_argument() {
        let store = MemoryStore::<Function>::new();
        let err = store.create(function_payload("")).await.unwrap_err();
        assert_eq!(domain_kind(&err), Some(ErrorKind::InvalidArgument));
    }

    #[tokio::test]
    async fn create_beyond_capacity_is_no_space() {
        let store = MemoryStore::<Function>::with_capacity_limit(1);
        store.create(function_payload("a")).await.unwrap();
        let err = store.create(function_payload("b")).await.unwrap_err();
        assert_eq!(domain_kind(&err), Some(ErrorKind::NoSpace));
    }

    #[tokio::test]
    async fn update_preserves_uid_and_replaces_body() {
        let store = MemoryStore::<Function>::new();
        let stored = store.create(function_payload("hello")).await.unwrap();
        let created: Function = serde_json::from_slice(&stored).unwrap();

        let mut changed = created.clone();
        changed.code = "v2".to_string();
        let payload = Bytes::from(serde_json::to_vec(&changed).unwrap());
        let updated = store.update("hello", payload).await.unwrap();
        let updated: Function = serde_json::from_slice(&updated).unwrap();

        assert_eq!(updated.code, "v2");
        assert_eq!(updated.metadata.uid, created.metadata.uid);
    }

    #[tokio::test]
    async fn update_name_mismatch_is_invalid_argument() {
        let store = MemoryStore::<Function>::new();
        store.create(function_payload("hello")).await.unwrap();
        let err = store
            .update("hello", function_payload("other"))
            .await
            .unwrap_err();
        assert_eq!(domain_kind(&err), Some(ErrorKind::InvalidArgument));
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let store = MemoryStore::<Function>::new();
        let err = store
            .update("ghost", function_payload("ghost"))
            .await
            .unwrap_err();
        assert_eq!(domain_kind(&err), Some(ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn list_returns_all_sorted_by_name() {
        let store = MemoryStore::<Function>::new();
        store.create(function_payload("b")).await.unwrap();
        store.create(function_payload("a")).await.unwrap();

        let listed = store.list().await.unwrap();
        let all: Vec<Function> = serde_json::from_slice(&listed).unwrap();
        let names: Vec<&str> = all.iter().map(|f| f.metadata.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
