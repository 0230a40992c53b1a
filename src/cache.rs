//! Memoized boundary projection keyed by region slug.
//!
//! At most one projection runs per slug under concurrent requests: callers
//! racing on the same key serialize on that key's slot lock while other keys
//! proceed independently. Published entries are immutable `Arc`s; nothing is
//! ever mutated in place.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::RawGeometry;
use crate::engine::{self, ProjectedBoundary};
use crate::error::RenderError;

type Slot = Arc<Mutex<Option<Arc<ProjectedBoundary>>>>;

/// Single-flight memoization of projected boundaries.
#[derive(Default)]
pub struct BoundaryCache {
    slots: Mutex<HashMap<String, Slot>>,
}

impl BoundaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached projection for `slug`, computing it from `raw` on
    /// first use.
    ///
    /// Failures are not cached: a later call with usable data for the same
    /// slug computes normally.
    pub fn get_or_project(
        &self,
        slug: &str,
        raw: &RawGeometry,
    ) -> Result<Arc<ProjectedBoundary>, RenderError> {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
            slots.entry(slug.to_string()).or_default().clone()
        };

        let mut entry = slot.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(cached) = entry.as_ref() {
            return Ok(cached.clone());
        }

        let projected = Arc::new(engine::project_boundary(raw)?);
        *entry = Some(projected.clone());
        Ok(projected)
    }

    /// Whether a projection has been published for `slug`.
    pub fn contains(&self, slug: &str) -> bool {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots
            .get(slug)
            .is_some_and(|slot| slot.lock().unwrap_or_else(|e| e.into_inner()).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn square() -> RawGeometry {
        RawGeometry {
            geometry_type: "Polygon".to_string(),
            coordinates: json!([[
                [-0.20, 51.54],
                [-0.16, 51.54],
                [-0.16, 51.57],
                [-0.20, 51.57],
                [-0.20, 51.54]
            ]]),
        }
    }

    #[test]
    fn test_second_lookup_returns_published_entry() {
        let cache = BoundaryCache::new();

        let first = cache.get_or_project("camden", &square()).unwrap();
        let second = cache.get_or_project("camden", &square()).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(cache.contains("camden"));
    }

    #[test]
    fn test_slugs_are_independent() {
        let cache = BoundaryCache::new();

        cache.get_or_project("camden", &square()).unwrap();
        assert!(!cache.contains("islington"));
    }

    #[test]
    fn test_failures_are_not_cached() {
        let cache = BoundaryCache::new();
        let bad = RawGeometry {
            geometry_type: "Polygon".to_string(),
            coordinates: json!([]),
        };

        assert!(cache.get_or_project("camden", &bad).is_err());
        assert!(!cache.contains("camden"));

        // The same slug succeeds once usable data arrives
        assert!(cache.get_or_project("camden", &square()).is_ok());
        assert!(cache.contains("camden"));
    }

    #[test]
    fn test_concurrent_same_key_computes_once() {
        let cache = Arc::new(BoundaryCache::new());
        let raw = square();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = cache.clone();
                let raw = raw.clone();
                std::thread::spawn(move || cache.get_or_project("camden", &raw).unwrap())
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for result in &results[1..] {
            assert!(Arc::ptr_eq(&results[0], result));
        }
    }
}
