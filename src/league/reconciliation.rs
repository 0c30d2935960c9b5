use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use crate::league::error::ServiceError;
use crate::league::rating;
use crate::models::league::League;
use crate::models::matches::{CreateMatchRequest, Match, MatchReport, MatchStatus};
use crate::models::team::Team;
use crate::storage::{AppStores, EntityStore, OutcomeWriter};

/// Serializes report handling per match id, so a read-validate-write never
/// interleaves with another writer of the same match. Two racing first
/// reports therefore cannot both observe an in-progress match.
struct MatchLocks {
    inner: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl MatchLocks {
    fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    fn for_match(&self, id: Uuid) -> Arc<Mutex<()>> {
        let mut locks = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        locks.entry(id).or_default().clone()
    }
}

/// Reconciles the two sides' independently submitted result reports into a
/// single authoritative outcome, escalating to the league owner when they
/// disagree.
pub struct ReconciliationService {
    matches: Arc<dyn EntityStore<Match>>,
    teams: Arc<dyn EntityStore<Team>>,
    leagues: Arc<dyn EntityStore<League>>,
    outcomes: Arc<dyn OutcomeWriter>,
    locks: MatchLocks,
}

impl ReconciliationService {
    pub fn new(stores: &AppStores) -> Self {
        Self {
            matches: stores.matches.clone(),
            teams: stores.teams.clone(),
            leagues: stores.leagues.clone(),
            outcomes: stores.outcomes.clone(),
            locks: MatchLocks::new(),
        }
    }

    /// Create a match between two distinct teams of a league, ready to
    /// receive reports.
    pub fn create_match(&self, request: &CreateMatchRequest) -> Result<Match, ServiceError> {
        if request.home_team_id == request.away_team_id {
            return Err(ServiceError::Validation(
                "a team cannot play itself".to_string(),
            ));
        }
        self.require_league(request.league_id)?;
        self.require_team(request.home_team_id)?;
        self.require_team(request.away_team_id)?;

        let now = Utc::now();
        let saved = self.matches.save(Match {
            id: Uuid::nil(),
            league_id: request.league_id,
            home_team_id: request.home_team_id,
            away_team_id: request.away_team_id,
            home_score: 0,
            away_score: 0,
            victor_id: None,
            loser_id: None,
            status: MatchStatus::InProgress,
            updated_by: None,
            created_at: now,
            updated_at: now,
        })?;

        tracing::info!(
            "🆕 Created match {} ({} vs {})",
            saved.id,
            saved.home_team_id,
            saved.away_team_id
        );
        Ok(saved)
    }

    /// `None` lists every match as a fresh snapshot; `Some(id)` yields
    /// exactly that match.
    pub fn find_matches(&self, id: Option<Uuid>) -> Result<Vec<Match>, ServiceError> {
        match id {
            None => Ok(self.matches.find_all()?),
            Some(id) => Ok(vec![self.require_match(id)?]),
        }
    }

    /// Apply one side's result report. The first report parks the match as
    /// pending; the second either confirms it (stats and ratings update) or
    /// conflicts it for the league owner to resolve.
    pub fn report_result(&self, report: &MatchReport) -> Result<MatchReport, ServiceError> {
        let lock = self.locks.for_match(report.match_id);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());

        let match_record = self.require_match(report.match_id)?;
        let (victor, loser) = self.validated_sides(&match_record, report)?;

        match match_record.status {
            MatchStatus::InProgress => self.initial_report(match_record, report),
            MatchStatus::PendingReport => {
                self.completion_report(match_record, victor, loser, report)
            }
            MatchStatus::InConflict => Err(ServiceError::Validation(format!(
                "match {} can only be updated by the league owner due to conflict",
                match_record.id
            ))),
            MatchStatus::Completed => Err(ServiceError::Validation(format!(
                "a match with status {} cannot be updated",
                match_record.status
            ))),
        }
    }

    /// Force a final outcome on a conflicted match. Only the owner of the
    /// match's league may do this; the resolution input becomes the truth.
    pub fn resolve_conflict(&self, report: &MatchReport) -> Result<MatchReport, ServiceError> {
        let lock = self.locks.for_match(report.match_id);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut match_record = self.require_match(report.match_id)?;
        let (victor, loser) = self.validated_sides(&match_record, report)?;

        let league = self.require_league(match_record.league_id)?;
        if league.owner_id != report.reported_by {
            return Err(ServiceError::Validation(
                "only the league owner can resolve a conflict".to_string(),
            ));
        }
        if match_record.status != MatchStatus::InConflict {
            return Err(ServiceError::Validation(
                "this match is not in a conflict that needs to be resolved".to_string(),
            ));
        }

        match_record.victor_id = Some(report.victor_id);
        match_record.loser_id = Some(report.loser_id);
        match_record.home_score = report.home_score;
        match_record.away_score = report.away_score;
        match_record.updated_by = Some(report.reported_by);
        self.finalize(match_record, victor, loser)?;

        Ok(report.with_status(MatchStatus::Completed))
    }

    /// Remove a match record entirely. Upstream callers use this to discard
    /// fixtures that will never be played.
    pub fn delete_match(&self, id: Uuid) -> Result<(), ServiceError> {
        let lock = self.locks.for_match(id);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());

        if !self.matches.delete_by_id(id)? {
            return Err(ServiceError::NotFound(format!(
                "match with id {} was not found",
                id
            )));
        }
        Ok(())
    }

    /// Existence and membership checks shared by reporting and resolution:
    /// both teams must exist, both must play in this match, they must differ,
    /// and scores must be non-negative.
    fn validated_sides(
        &self,
        match_record: &Match,
        report: &MatchReport,
    ) -> Result<(Team, Team), ServiceError> {
        let victor = self.require_team(report.victor_id)?;
        let loser = self.require_team(report.loser_id)?;

        if !match_record.involves(report.victor_id) {
            return Err(ServiceError::Validation(format!(
                "the reported victor was not part of match {}",
                match_record.id
            )));
        }
        if !match_record.involves(report.loser_id) {
            return Err(ServiceError::Validation(format!(
                "the reported loser was not part of match {}",
                match_record.id
            )));
        }
        if report.victor_id == report.loser_id {
            return Err(ServiceError::Validation(
                "the reported victor and loser must be different teams".to_string(),
            ));
        }
        if report.home_score < 0 || report.away_score < 0 {
            return Err(ServiceError::Validation(
                "scores cannot be negative".to_string(),
            ));
        }

        Ok((victor, loser))
    }

    fn initial_report(
        &self,
        mut match_record: Match,
        report: &MatchReport,
    ) -> Result<MatchReport, ServiceError> {
        match_record.victor_id = Some(report.victor_id);
        match_record.loser_id = Some(report.loser_id);
        match_record.home_score = report.home_score;
        match_record.away_score = report.away_score;
        match_record.status = MatchStatus::PendingReport;
        match_record.updated_by = Some(report.reported_by);
        match_record.updated_at = Utc::now();
        self.matches.save(match_record)?;

        Ok(report.with_status(MatchStatus::PendingReport))
    }

    fn completion_report(
        &self,
        mut match_record: Match,
        victor: Team,
        loser: Team,
        report: &MatchReport,
    ) -> Result<MatchReport, ServiceError> {
        if match_record.updated_by == Some(report.reported_by) {
            return Err(ServiceError::Conflict(format!(
                "this side has already reported match {}; waiting on the opposing report",
                match_record.id
            )));
        }

        // The stored victor was already validated against the match sides,
        // so a single comparison settles agreement.
        if match_record.victor_id != Some(report.victor_id) {
            self.mark_conflicted(&mut match_record)?;
            return Err(ServiceError::Conflict(
                "the team status assignments are conflicted".to_string(),
            ));
        }
        if match_record.home_score != report.home_score
            || match_record.away_score != report.away_score
        {
            self.mark_conflicted(&mut match_record)?;
            return Err(ServiceError::Conflict(
                "the reported and stored scores are conflicted".to_string(),
            ));
        }

        match_record.updated_by = Some(report.reported_by);
        self.finalize(match_record, victor, loser)?;

        Ok(report.with_status(MatchStatus::Completed))
    }

    fn mark_conflicted(&self, match_record: &mut Match) -> Result<(), ServiceError> {
        match_record.status = MatchStatus::InConflict;
        match_record.updated_at = Utc::now();
        self.matches.save(match_record.clone())?;
        tracing::warn!(
            "⚠️ Match {} entered conflict, league owner must resolve",
            match_record.id
        );
        Ok(())
    }

    /// Confirmed completion: bump records, run the rating engine, and commit
    /// the match together with both team updates.
    fn finalize(
        &self,
        mut match_record: Match,
        mut victor: Team,
        mut loser: Team,
    ) -> Result<(), ServiceError> {
        victor.wins += 1;
        loser.losses += 1;
        let (victor_rating, loser_rating) = rating::updated_ratings(victor.rating, loser.rating);
        victor.rating = victor_rating;
        loser.rating = loser_rating;

        let now = Utc::now();
        victor.updated_at = now;
        loser.updated_at = now;
        match_record.status = MatchStatus::Completed;
        match_record.updated_at = now;

        let match_id = match_record.id;
        self.outcomes.commit_outcome(match_record, victor, loser)?;
        tracing::info!("🏁 Match {} completed, records and ratings updated", match_id);
        Ok(())
    }

    fn require_match(&self, id: Uuid) -> Result<Match, ServiceError> {
        self.matches.find_by_id(id)?.ok_or_else(|| {
            ServiceError::NotFound(format!("match with id {} was not found", id))
        })
    }

    fn require_team(&self, id: Uuid) -> Result<Team, ServiceError> {
        self.teams.find_by_id(id)?.ok_or_else(|| {
            ServiceError::NotFound(format!("team with id {} was not found", id))
        })
    }

    fn require_league(&self, id: Uuid) -> Result<League, ServiceError> {
        self.leagues.find_by_id(id)?.ok_or_else(|| {
            ServiceError::NotFound(format!("league with id {} was not found", id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::User;

    struct Fixture {
        stores: AppStores,
        service: ReconciliationService,
        league_id: Uuid,
        owner_id: Uuid,
        home_id: Uuid,
        away_id: Uuid,
    }

    fn fixture() -> Fixture {
        let stores = AppStores::in_memory();
        let now = Utc::now();

        let owner = stores
            .users
            .save(User {
                id: Uuid::nil(),
                username: "owner".to_string(),
                email: "owner@example.com".to_string(),
                league_ids: vec![],
                created_at: now,
                updated_at: now,
            })
            .unwrap();
        let league = stores
            .leagues
            .save(League {
                id: Uuid::nil(),
                owner_id: owner.id,
                name: "Test League".to_string(),
                description: None,
                created_at: now,
                updated_at: now,
            })
            .unwrap();
        let home = stores.teams.save(team(league.id, owner.id, "Home")).unwrap();
        let away = stores.teams.save(team(league.id, owner.id, "Away")).unwrap();

        Fixture {
            service: ReconciliationService::new(&stores),
            league_id: league.id,
            owner_id: owner.id,
            home_id: home.id,
            away_id: away.id,
            stores,
        }
    }

    fn team(league_id: Uuid, owner_id: Uuid, name: &str) -> Team {
        let now = Utc::now();
        Team {
            id: Uuid::nil(),
            league_id,
            owner_id,
            team_name: name.to_string(),
            team_description: None,
            wins: 0,
            losses: 0,
            rating: rating::DEFAULT_RATING,
            created_at: now,
            updated_at: now,
        }
    }

    fn report(fx: &Fixture, match_id: Uuid, reporter: Uuid) -> MatchReport {
        MatchReport {
            match_id,
            victor_id: fx.home_id,
            loser_id: fx.away_id,
            home_score: 3,
            away_score: 1,
            reported_by: reporter,
            status: None,
        }
    }

    fn created_match(fx: &Fixture) -> Match {
        fx.service
            .create_match(&CreateMatchRequest {
                home_team_id: fx.home_id,
                away_team_id: fx.away_id,
                league_id: fx.league_id,
            })
            .unwrap()
    }

    fn stored_match(fx: &Fixture, id: Uuid) -> Match {
        fx.stores.matches.find_by_id(id).unwrap().unwrap()
    }

    fn stored_team(fx: &Fixture, id: Uuid) -> Team {
        fx.stores.teams.find_by_id(id).unwrap().unwrap()
    }

    #[test]
    fn create_match_starts_in_progress() {
        let fx = fixture();
        let m = created_match(&fx);
        assert_eq!(m.status, MatchStatus::InProgress);
        assert!(m.victor_id.is_none());
        assert!(m.loser_id.is_none());
        assert!(!m.id.is_nil());
    }

    #[test]
    fn create_match_rejects_a_team_playing_itself() {
        let fx = fixture();
        let err = fx
            .service
            .create_match(&CreateMatchRequest {
                home_team_id: fx.home_id,
                away_team_id: fx.home_id,
                league_id: fx.league_id,
            })
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn create_match_requires_known_league_and_teams() {
        let fx = fixture();
        let err = fx
            .service
            .create_match(&CreateMatchRequest {
                home_team_id: fx.home_id,
                away_team_id: Uuid::new_v4(),
                league_id: fx.league_id,
            })
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let err = fx
            .service
            .create_match(&CreateMatchRequest {
                home_team_id: fx.home_id,
                away_team_id: fx.away_id,
                league_id: Uuid::new_v4(),
            })
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn first_report_parks_the_match_as_pending() {
        let fx = fixture();
        let m = created_match(&fx);

        let out = fx.service.report_result(&report(&fx, m.id, fx.home_id)).unwrap();
        assert_eq!(out.status, Some(MatchStatus::PendingReport));

        let stored = stored_match(&fx, m.id);
        assert_eq!(stored.status, MatchStatus::PendingReport);
        assert_eq!(stored.victor_id, Some(fx.home_id));
        assert_eq!(stored.loser_id, Some(fx.away_id));
        assert_eq!(stored.home_score, 3);
        assert_eq!(stored.away_score, 1);
        assert_eq!(stored.updated_by, Some(fx.home_id));

        // No rating or record movement on a single report
        assert_eq!(stored_team(&fx, fx.home_id).rating, rating::DEFAULT_RATING);
        assert_eq!(stored_team(&fx, fx.home_id).wins, 0);
        assert_eq!(stored_team(&fx, fx.away_id).losses, 0);
    }

    #[test]
    fn duplicate_reporter_is_rejected_without_a_transition() {
        let fx = fixture();
        let m = created_match(&fx);

        fx.service.report_result(&report(&fx, m.id, fx.home_id)).unwrap();
        let err = fx
            .service
            .report_result(&report(&fx, m.id, fx.home_id))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(stored_match(&fx, m.id).status, MatchStatus::PendingReport);
    }

    #[test]
    fn agreeing_reports_complete_the_match_exactly_once() {
        let fx = fixture();
        let m = created_match(&fx);

        fx.service.report_result(&report(&fx, m.id, fx.home_id)).unwrap();
        let out = fx.service.report_result(&report(&fx, m.id, fx.away_id)).unwrap();
        assert_eq!(out.status, Some(MatchStatus::Completed));

        let stored = stored_match(&fx, m.id);
        assert_eq!(stored.status, MatchStatus::Completed);
        assert_eq!(stored.updated_by, Some(fx.away_id));

        let home = stored_team(&fx, fx.home_id);
        let away = stored_team(&fx, fx.away_id);
        assert_eq!(home.wins, 1);
        assert_eq!(home.losses, 0);
        assert_eq!(away.wins, 0);
        assert_eq!(away.losses, 1);
        // One rating exchange, zero-sum
        assert!(home.rating > rating::DEFAULT_RATING);
        assert!(away.rating < rating::DEFAULT_RATING);
        assert_eq!(home.rating + away.rating, 2 * rating::DEFAULT_RATING);
    }

    #[test]
    fn disagreeing_victor_puts_the_match_in_conflict() {
        let fx = fixture();
        let m = created_match(&fx);

        fx.service.report_result(&report(&fx, m.id, fx.home_id)).unwrap();

        let mut disagreeing = report(&fx, m.id, fx.away_id);
        disagreeing.victor_id = fx.away_id;
        disagreeing.loser_id = fx.home_id;
        let err = fx.service.report_result(&disagreeing).unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(stored_match(&fx, m.id).status, MatchStatus::InConflict);

        // No stats were touched on the way into conflict
        assert_eq!(stored_team(&fx, fx.home_id).wins, 0);
        assert_eq!(stored_team(&fx, fx.away_id).losses, 0);

        // Any further report is turned away until the owner resolves
        let err = fx
            .service
            .report_result(&report(&fx, m.id, fx.home_id))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn score_mismatch_puts_the_match_in_conflict() {
        let fx = fixture();
        let m = created_match(&fx);

        fx.service.report_result(&report(&fx, m.id, fx.home_id)).unwrap();

        let mut mismatched = report(&fx, m.id, fx.away_id);
        mismatched.home_score = 2;
        let err = fx.service.report_result(&mismatched).unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(stored_match(&fx, m.id).status, MatchStatus::InConflict);
    }

    #[test]
    fn owner_resolution_completes_a_conflicted_match() {
        let fx = fixture();
        let m = created_match(&fx);

        fx.service.report_result(&report(&fx, m.id, fx.home_id)).unwrap();
        let mut disagreeing = report(&fx, m.id, fx.away_id);
        disagreeing.victor_id = fx.away_id;
        disagreeing.loser_id = fx.home_id;
        let _ = fx.service.report_result(&disagreeing);

        let resolution = report(&fx, m.id, fx.owner_id);
        let out = fx.service.resolve_conflict(&resolution).unwrap();
        assert_eq!(out.status, Some(MatchStatus::Completed));

        let stored = stored_match(&fx, m.id);
        assert_eq!(stored.status, MatchStatus::Completed);
        assert_eq!(stored.victor_id, Some(fx.home_id));
        assert_eq!(stored.home_score, 3);
        assert_eq!(stored.away_score, 1);

        assert_eq!(stored_team(&fx, fx.home_id).wins, 1);
        assert_eq!(stored_team(&fx, fx.away_id).losses, 1);
    }

    #[test]
    fn non_owner_resolution_is_rejected_without_mutation() {
        let fx = fixture();
        let m = created_match(&fx);

        fx.service.report_result(&report(&fx, m.id, fx.home_id)).unwrap();
        let mut disagreeing = report(&fx, m.id, fx.away_id);
        disagreeing.victor_id = fx.away_id;
        disagreeing.loser_id = fx.home_id;
        let _ = fx.service.report_result(&disagreeing);

        let err = fx
            .service
            .resolve_conflict(&report(&fx, m.id, fx.home_id))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(stored_match(&fx, m.id).status, MatchStatus::InConflict);
        assert_eq!(stored_team(&fx, fx.home_id).wins, 0);
    }

    #[test]
    fn resolution_requires_a_conflicted_match() {
        let fx = fixture();
        let m = created_match(&fx);

        fx.service.report_result(&report(&fx, m.id, fx.home_id)).unwrap();
        let err = fx
            .service
            .resolve_conflict(&report(&fx, m.id, fx.owner_id))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(stored_match(&fx, m.id).status, MatchStatus::PendingReport);
    }

    #[test]
    fn completed_matches_reject_further_calls() {
        let fx = fixture();
        let m = created_match(&fx);

        fx.service.report_result(&report(&fx, m.id, fx.home_id)).unwrap();
        fx.service.report_result(&report(&fx, m.id, fx.away_id)).unwrap();

        let err = fx
            .service
            .report_result(&report(&fx, m.id, fx.home_id))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let err = fx
            .service
            .resolve_conflict(&report(&fx, m.id, fx.owner_id))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        // Stats were applied exactly once
        assert_eq!(stored_team(&fx, fx.home_id).wins, 1);
        assert_eq!(stored_team(&fx, fx.away_id).losses, 1);
    }

    #[test]
    fn report_rejects_outsider_and_self_paired_sides() {
        let fx = fixture();
        let m = created_match(&fx);
        let outsider = fx
            .stores
            .teams
            .save(team(fx.league_id, fx.owner_id, "Outsider"))
            .unwrap();

        let mut outsider_report = report(&fx, m.id, fx.home_id);
        outsider_report.victor_id = outsider.id;
        let err = fx.service.report_result(&outsider_report).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let mut self_paired = report(&fx, m.id, fx.home_id);
        self_paired.loser_id = fx.home_id;
        let err = fx.service.report_result(&self_paired).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn report_rejects_unknown_references() {
        let fx = fixture();
        let m = created_match(&fx);

        let err = fx
            .service
            .report_result(&report(&fx, Uuid::new_v4(), fx.home_id))
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let mut ghost_team = report(&fx, m.id, fx.home_id);
        ghost_team.victor_id = Uuid::new_v4();
        let err = fx.service.report_result(&ghost_team).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn report_rejects_negative_scores() {
        let fx = fixture();
        let m = created_match(&fx);

        let mut negative = report(&fx, m.id, fx.home_id);
        negative.away_score = -1;
        let err = fx.service.report_result(&negative).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(stored_match(&fx, m.id).status, MatchStatus::InProgress);
    }

    #[test]
    fn find_matches_lists_all_or_exactly_one() {
        let fx = fixture();
        assert!(fx.service.find_matches(None).unwrap().is_empty());

        let m = created_match(&fx);
        assert_eq!(fx.service.find_matches(None).unwrap().len(), 1);
        assert_eq!(fx.service.find_matches(Some(m.id)).unwrap()[0].id, m.id);

        let err = fx.service.find_matches(Some(Uuid::new_v4())).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn delete_match_removes_the_record() {
        let fx = fixture();
        let m = created_match(&fx);

        fx.service.delete_match(m.id).unwrap();
        let err = fx.service.find_matches(Some(m.id)).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let err = fx.service.delete_match(m.id).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn racing_identical_reports_settle_exactly_once() {
        let fx = fixture();
        let m = created_match(&fx);

        let first = report(&fx, m.id, fx.home_id);
        let second = report(&fx, m.id, fx.away_id);
        std::thread::scope(|scope| {
            scope.spawn(|| {
                let _ = fx.service.report_result(&first);
            });
            scope.spawn(|| {
                let _ = fx.service.report_result(&second);
            });
        });

        // Whichever report lands second sees the other's commit, so agreeing
        // reports always converge on a single completion.
        assert_eq!(stored_match(&fx, m.id).status, MatchStatus::Completed);
        assert_eq!(stored_team(&fx, fx.home_id).wins, 1);
        assert_eq!(stored_team(&fx, fx.away_id).losses, 1);
        assert_eq!(
            stored_team(&fx, fx.home_id).rating + stored_team(&fx, fx.away_id).rating,
            2 * rating::DEFAULT_RATING
        );
    }
}
