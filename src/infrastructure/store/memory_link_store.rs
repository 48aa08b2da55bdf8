//! In-memory tracked-link store.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::entities::{NewTrackedLink, TrackedLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

struct Inner {
    links: Vec<TrackedLink>,
    next_id: i64,
}

/// [`LinkRepository`] backed by an in-process table.
///
/// All data lives for the lifetime of the process; the lock is never held
/// across an await point.
pub struct MemoryLinkStore {
    inner: RwLock<Inner>,
}

impl MemoryLinkStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::with_links(Vec::new())
    }

    /// Creates a store pre-populated with the given links.
    ///
    /// Id assignment for subsequently created links continues after the
    /// highest seeded id.
    pub fn with_links(links: Vec<TrackedLink>) -> Self {
        let next_id = links.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Inner { links, next_id }),
        }
    }
}

impl Default for MemoryLinkStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkStore {
    async fn list(&self) -> Result<Vec<TrackedLink>, AppError> {
        let inner = self.inner.read().expect("link store lock poisoned");
        Ok(inner.links.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TrackedLink>, AppError> {
        let inner = self.inner.read().expect("link store lock poisoned");
        Ok(inner.links.iter().find(|l| l.id == id).cloned())
    }

    async fn create(&self, new_link: NewTrackedLink) -> Result<TrackedLink, AppError> {
        let mut inner = self.inner.write().expect("link store lock poisoned");

        let link = TrackedLink {
            id: inner.next_id,
            kind: new_link.kind,
            name: new_link.name,
            base_url: new_link.base_url,
            params: new_link.params,
            views: new_link.views,
            clicks: new_link.clicks,
            conversions: new_link.conversions,
            created_at: Utc::now(),
        };
        inner.next_id += 1;
        inner.links.push(link.clone());

        Ok(link)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.inner.write().expect("link store lock poisoned");
        let before = inner.links.len();
        inner.links.retain(|l| l.id != id);
        Ok(inner.links.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LinkKind;
    use crate::utils::tracking::TrackingParams;

    fn new_link(name: &str) -> NewTrackedLink {
        NewTrackedLink {
            kind: LinkKind::SingleProduct,
            name: name.to_string(),
            base_url: "https://shop.example.com/p/x".to_string(),
            params: TrackingParams::default(),
            views: 10,
            clicks: 5,
            conversions: 1,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = MemoryLinkStore::new();

        let first = store.create(new_link("a")).await.unwrap();
        let second = store.create(new_link("b")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = MemoryLinkStore::new();
        let created = store.create(new_link("a")).await.unwrap();

        let found = store.find_by_id(created.id).await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "a");

        assert!(store.find_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryLinkStore::new();
        let created = store.create(new_link("a")).await.unwrap();

        assert!(store.delete(created.id).await.unwrap());
        assert!(!store.delete(created.id).await.unwrap());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seeded_ids_continue_after_max() {
        let store = MemoryLinkStore::with_links(vec![TrackedLink {
            id: 7,
            kind: LinkKind::Collection,
            name: "seeded".to_string(),
            base_url: "https://shop.example.com/c/x".to_string(),
            params: TrackingParams::default(),
            views: 0,
            clicks: 0,
            conversions: 0,
            created_at: Utc::now(),
        }]);

        let created = store.create(new_link("a")).await.unwrap();
        assert_eq!(created.id, 8);
    }
}
