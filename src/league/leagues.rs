use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::league::error::ServiceError;
use crate::models::league::{CreateLeagueRequest, League};
use crate::models::user::User;
use crate::storage::{AppStores, EntityStore};

/// League lifecycle around the reconciliation core. Creation registers the
/// league with its owner; deletion unlinks it from the owner first, so a
/// reader never finds a league id on a user that no longer resolves.
pub struct LeagueService {
    leagues: Arc<dyn EntityStore<League>>,
    users: Arc<dyn EntityStore<User>>,
}

impl LeagueService {
    pub fn new(stores: &AppStores) -> Self {
        Self {
            leagues: stores.leagues.clone(),
            users: stores.users.clone(),
        }
    }

    pub fn create_league(&self, request: &CreateLeagueRequest) -> Result<League, ServiceError> {
        let mut owner = self.require_owner(request.owner_id)?;

        let now = Utc::now();
        let league = self.leagues.save(League {
            id: Uuid::nil(),
            owner_id: request.owner_id,
            name: request.name.clone(),
            description: request.description.clone(),
            created_at: now,
            updated_at: now,
        })?;

        owner.league_ids.push(league.id);
        owner.updated_at = now;
        self.users.save(owner)?;

        tracing::info!("🏆 Created league {} for owner {}", league.id, league.owner_id);
        Ok(league)
    }

    pub fn delete_league(&self, id: Uuid) -> Result<(), ServiceError> {
        let league = self.require_league(id)?;
        let mut owner = self.require_owner(league.owner_id)?;

        // Owner's collection first, league record second
        owner.league_ids.retain(|league_id| *league_id != id);
        owner.updated_at = Utc::now();
        self.users.save(owner)?;
        self.leagues.delete_by_id(id)?;
        Ok(())
    }

    /// `None` lists every league as a fresh snapshot; `Some(id)` yields
    /// exactly that league.
    pub fn find_leagues(&self, id: Option<Uuid>) -> Result<Vec<League>, ServiceError> {
        match id {
            None => Ok(self.leagues.find_all()?),
            Some(id) => Ok(vec![self.require_league(id)?]),
        }
    }

    fn require_league(&self, id: Uuid) -> Result<League, ServiceError> {
        self.leagues.find_by_id(id)?.ok_or_else(|| {
            ServiceError::NotFound(format!("league with id {} was not found", id))
        })
    }

    fn require_owner(&self, id: Uuid) -> Result<User, ServiceError> {
        self.users.find_by_id(id)?.ok_or_else(|| {
            ServiceError::NotFound(format!("user with id {} was not found", id))
        })
    }
}
