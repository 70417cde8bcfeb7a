//! Server-side tour state, one entry per browser.
//!
//! Every sign-in is tied to a visit id carried in its own cookie. Only ids
//! issued here are served. The registry holds at most `capacity` visits and
//! evicts the least recently used one, completion flags included.

use std::collections::HashMap;
use std::sync::Arc;

use strum::IntoEnumIterator;
use tracing::debug;
use uuid::Uuid;

use crate::auth::role::Role;
use crate::auth::storage::{KeyValueStore, ScopedStorage, StorageError};
use crate::navigation::tour::{tour_completed_key, TourEngine};

/// Visits kept before the oldest is evicted.
pub const MAX_VISITS: usize = 10_000;

struct Visit {
    storage: Arc<dyn KeyValueStore>,
    engine: TourEngine,
    last_used: u64,
}

pub struct VisitRegistry {
    storage: Arc<dyn KeyValueStore>,
    capacity: usize,
    visits: HashMap<Uuid, Visit>,
    clock: u64,
}

impl VisitRegistry {
    pub fn new(storage: Arc<dyn KeyValueStore>, capacity: usize) -> Self {
        Self {
            storage,
            capacity: capacity.max(1),
            visits: HashMap::new(),
            clock: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.visits.contains_key(id)
    }

    /// Records a sign-in and returns its visit id.
    ///
    /// A known id is kept, with any tour in progress abandoned and its
    /// completion flags left alone. An unknown or missing id gets a fresh one.
    pub fn begin(&mut self, existing: Option<Uuid>) -> Result<Uuid, StorageError> {
        let now = self.tick();

        if let Some(id) = existing {
            if let Some(visit) = self.visits.get_mut(&id) {
                visit.engine.set_role(None);
                visit.last_used = now;
                return Ok(id);
            }
        }

        if self.visits.len() >= self.capacity {
            self.evict_oldest()?;
        }

        let id = Uuid::new_v4();
        let storage: Arc<dyn KeyValueStore> =
            Arc::new(ScopedStorage::new(self.storage.clone(), id.to_string()));
        self.visits.insert(
            id,
            Visit {
                engine: TourEngine::new(storage.clone()),
                storage,
                last_used: now,
            },
        );
        debug!("Issued visit {id} ({} active)", self.visits.len());
        Ok(id)
    }

    /// The tour engine for an issued visit. `None` for ids never issued or
    /// already evicted.
    pub fn engine_mut(&mut self, id: &Uuid) -> Option<&mut TourEngine> {
        let now = self.tick();
        let visit = self.visits.get_mut(id)?;
        visit.last_used = now;
        Some(&mut visit.engine)
    }

    /// Sign-out: drops any tour in progress, keeps the visit and its flags.
    pub fn reset(&mut self, id: &Uuid) {
        if let Some(visit) = self.visits.get_mut(id) {
            visit.engine.set_role(None);
        }
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn evict_oldest(&mut self) -> Result<(), StorageError> {
        let oldest = self
            .visits
            .iter()
            .min_by_key(|(_, visit)| visit.last_used)
            .map(|(id, _)| *id);

        if let Some(visit) = oldest.and_then(|id| self.visits.remove(&id)) {
            for role in Role::iter() {
                visit.storage.remove(&tour_completed_key(role))?;
            }
            debug!("Evicted least recently used visit");
        }
        Ok(())
    }
}
