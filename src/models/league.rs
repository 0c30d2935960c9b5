use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A league groups teams and matches under exactly one owner. The owner is
/// the arbiter for conflicted matches. Matches and teams refer back to the
/// league by id only.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct League {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateLeagueRequest {
    pub name: String,
    pub description: Option<String>,
    pub owner_id: Uuid,
}
