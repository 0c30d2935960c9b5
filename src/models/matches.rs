use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A competitive fixture between two teams of the same league. Victor, loser
/// and scores stay unset until the first report lands; after that the record
/// only changes through the reconciliation protocol.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Match {
    pub id: Uuid,
    pub league_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub home_score: i32,
    pub away_score: i32,
    pub victor_id: Option<Uuid>,
    pub loser_id: Option<Uuid>,
    pub status: MatchStatus,
    /// Identity of the last reporter, used to reject a second report from
    /// the same side.
    pub updated_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Match {
    /// Whether the given team plays in this match.
    pub fn involves(&self, team_id: Uuid) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

/// Lifecycle of a match:
/// `InProgress` → `PendingReport` → `Completed`, or `PendingReport` →
/// `InConflict` → `Completed` via owner resolution. `Completed` is terminal.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    InProgress,
    PendingReport,
    InConflict,
    Completed,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchStatus::InProgress => "in_progress",
            MatchStatus::PendingReport => "pending_report",
            MatchStatus::InConflict => "in_conflict",
            MatchStatus::Completed => "completed",
        };
        write!(f, "{}", label)
    }
}

// Request/Response DTOs

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateMatchRequest {
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub league_id: Uuid,
}

/// One side's account of a finished match. Transient: consumed once by the
/// reconciliation service and echoed back with the resulting match status.
/// `reported_by` carries the reporter identity, or the resolver identity on
/// the resolution path.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchReport {
    pub match_id: Uuid,
    pub victor_id: Uuid,
    pub loser_id: Uuid,
    pub home_score: i32,
    pub away_score: i32,
    pub reported_by: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MatchStatus>,
}

impl MatchReport {
    pub fn with_status(&self, status: MatchStatus) -> Self {
        Self {
            status: Some(status),
            ..self.clone()
        }
    }
}
