use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Team {
    pub id: Uuid,
    pub league_id: Uuid,
    pub owner_id: Uuid,
    pub team_name: String,
    pub team_description: Option<String>,
    /// Win/loss record and rating are mutated only as the side effect of a
    /// confirmed match completion.
    pub wins: i32,
    pub losses: i32,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to register a new team
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TeamRegistrationRequest {
    pub team_name: String,
    pub team_description: Option<String>,
    pub league_id: Uuid,
    pub owner_id: Uuid,
}

impl TeamRegistrationRequest {
    /// Validate team registration request
    pub fn validate(&self) -> Result<(), String> {
        let name = self.team_name.trim();
        if name.is_empty() {
            return Err("Team name cannot be empty".to_string());
        }

        if name.len() < 2 {
            return Err("Team name must be at least 2 characters".to_string());
        }

        if name.len() > 50 {
            return Err("Team name cannot exceed 50 characters".to_string());
        }

        if !name.chars().any(|c| c.is_alphanumeric()) {
            return Err("Team name must contain at least one letter or number".to_string());
        }

        Ok(())
    }
}
