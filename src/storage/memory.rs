use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use uuid::Uuid;

use super::{EntityStore, Keyed, OutcomeWriter, StoreError};
use crate::models::matches::Match;
use crate::models::team::Team;

/// In-memory keyed store. Stand-in for an external persistence collaborator;
/// read-your-writes holds because every access goes through the same map.
pub struct InMemoryStore<T> {
    rows: RwLock<HashMap<Uuid, T>>,
}

impl<T> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed + Clone + Send + Sync> EntityStore<T> for InMemoryStore<T> {
    fn find_by_id(&self, id: Uuid) -> Result<Option<T>, StoreError> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        Ok(rows.get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<T>, StoreError> {
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        let mut all: Vec<T> = rows.values().cloned().collect();
        // Stable listing order across calls
        all.sort_by_key(|row| row.id());
        Ok(all)
    }

    fn save(&self, mut entity: T) -> Result<T, StoreError> {
        if entity.id().is_nil() {
            entity.set_id(Uuid::new_v4());
        }
        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        rows.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        Ok(rows.remove(&id).is_some())
    }
}

/// Applies a confirmed outcome to the match and team stores under one lock,
/// so no reader can observe the match completed without the team updates.
pub struct InMemoryOutcomeWriter {
    matches: Arc<InMemoryStore<Match>>,
    teams: Arc<InMemoryStore<Team>>,
    commit_lock: Mutex<()>,
}

impl InMemoryOutcomeWriter {
    pub fn new(matches: Arc<InMemoryStore<Match>>, teams: Arc<InMemoryStore<Team>>) -> Self {
        Self {
            matches,
            teams,
            commit_lock: Mutex::new(()),
        }
    }
}

impl OutcomeWriter for InMemoryOutcomeWriter {
    fn commit_outcome(&self, m: Match, victor: Team, loser: Team) -> Result<Match, StoreError> {
        let _guard = self.commit_lock.lock().unwrap_or_else(|e| e.into_inner());
        // Teams land before the status flip; in-memory saves cannot fail, so
        // the three writes are never observed partially.
        self.teams.save(victor)?;
        self.teams.save(loser)?;
        self.matches.save(m)
    }
}
