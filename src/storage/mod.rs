pub mod memory;

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::models::league::League;
use crate::models::matches::Match;
use crate::models::team::Team;
use crate::models::user::User;
use self::memory::{InMemoryOutcomeWriter, InMemoryStore};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Entities addressable by a single uuid key.
pub trait Keyed {
    fn id(&self) -> Uuid;
    fn set_id(&mut self, id: Uuid);
}

/// Keyed persistence contract the core consumes from its external
/// collaborators, one store per entity type. `find_all` is a fresh snapshot
/// per call, and reads observe prior writes through the same store.
pub trait EntityStore<T>: Send + Sync {
    fn find_by_id(&self, id: Uuid) -> Result<Option<T>, StoreError>;
    fn find_all(&self) -> Result<Vec<T>, StoreError>;
    /// Upsert. Assigns an id to nil-id entities and returns the stored value.
    fn save(&self, entity: T) -> Result<T, StoreError>;
    /// Returns whether a record was removed.
    fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// Writes a confirmed outcome — the completed match plus both updated team
/// records — as one commit. A partial commit must never be observable: a
/// match marked completed implies its team statistics landed too.
pub trait OutcomeWriter: Send + Sync {
    fn commit_outcome(&self, m: Match, victor: Team, loser: Team) -> Result<Match, StoreError>;
}

impl Keyed for User {
    fn id(&self) -> Uuid {
        self.id
    }
    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }
}

impl Keyed for Team {
    fn id(&self) -> Uuid {
        self.id
    }
    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }
}

impl Keyed for League {
    fn id(&self) -> Uuid {
        self.id
    }
    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }
}

impl Keyed for Match {
    fn id(&self) -> Uuid {
        self.id
    }
    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }
}

/// The bundle of stores the services run against, shared across workers.
#[derive(Clone)]
pub struct AppStores {
    pub users: Arc<dyn EntityStore<User>>,
    pub teams: Arc<dyn EntityStore<Team>>,
    pub leagues: Arc<dyn EntityStore<League>>,
    pub matches: Arc<dyn EntityStore<Match>>,
    pub outcomes: Arc<dyn OutcomeWriter>,
}

impl AppStores {
    /// Self-contained backend for the standalone binary and the tests. A
    /// database-backed deployment supplies its own implementations of the
    /// same traits.
    pub fn in_memory() -> Self {
        let teams = Arc::new(InMemoryStore::<Team>::new());
        let matches = Arc::new(InMemoryStore::<Match>::new());
        let outcomes = Arc::new(InMemoryOutcomeWriter::new(matches.clone(), teams.clone()));
        Self {
            users: Arc::new(InMemoryStore::new()),
            leagues: Arc::new(InMemoryStore::new()),
            teams,
            matches,
            outcomes,
        }
    }
}
