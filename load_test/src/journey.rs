//! The simulated-user journey: one complete tournament lifecycle.
//!
//! Create 32 teams, one tournament, and 8 groups; spread the teams over the
//! groups round-robin; then poll pending matches and submit scores until the
//! service reports the tournament finished. Every HTTP call is timed and
//! recorded against a stable request name; failures are recorded the same
//! way and the journey carries on best-effort.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tournament_client::{
    ClientResult, NewGroup, NewTeam, NewTournament, Score, ScoreUpdate, TeamRef, TournamentApi,
};

use crate::metrics::collector::MetricsCollector;

pub const TEAM_COUNT: usize = 32;
pub const GROUP_COUNT: usize = 8;
pub const GROUPS_PER_CONFERENCE: usize = 4;
pub const CONFERENCES: [&str; 2] = ["AFC", "NFC"];

const TOURNAMENT_YEAR: i32 = 2025;
const HOME_SCORE: i32 = 6;
const VISITOR_SCORE: i32 = 7;

// Stable request names for metrics, one per endpoint.
pub const POST_TEAMS: &str = "POST /teams";
pub const POST_TOURNAMENTS: &str = "POST /tournaments";
pub const POST_GROUPS: &str = "POST /tournaments/{id}/groups";
pub const PATCH_GROUP_TEAMS: &str = "PATCH /tournaments/{id}/groups/{gid}/teams";
pub const GET_TOURNAMENT: &str = "GET /tournaments/{id}";
pub const GET_PENDING_MATCHES: &str = "GET /tournaments/{id}/matches?showMatches=pending";
pub const PATCH_MATCH_SCORE: &str = "PATCH /tournaments/{id}/matches/{mid}";

/// Pacing and bounds for one journey.
#[derive(Debug, Clone)]
pub struct JourneyConfig {
    /// Pause between pending-match polls.
    pub poll_interval: Duration,
    /// Upper bound on the poll loop. The server reporting the tournament
    /// finished is the normal exit; this keeps a wedged server from
    /// hanging a simulated user forever.
    pub max_poll: Duration,
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
            max_poll: Duration::from_secs(300),
        }
    }
}

/// How a journey ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneyOutcome {
    /// The tournament reported finished.
    Finished,
    /// The tournament could not be created; nothing else to drive.
    TournamentCreateFailed,
    /// The poll loop hit its bound before the tournament finished.
    PollDeadlineExceeded,
}

impl JourneyOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, JourneyOutcome::Finished)
    }
}

/// Run one complete simulated-user iteration.
pub async fn run(
    api: &dyn TournamentApi,
    collector: &MetricsCollector,
    config: &JourneyConfig,
) -> JourneyOutcome {
    Journey {
        api,
        collector,
        config,
    }
    .run()
    .await
}

struct Journey<'a> {
    api: &'a dyn TournamentApi,
    collector: &'a MetricsCollector,
    config: &'a JourneyConfig,
}

impl Journey<'_> {
    async fn run(&self) -> JourneyOutcome {
        let team_ids = self.create_teams().await;

        let Some(tournament_id) = self
            .timed(
                POST_TOURNAMENTS,
                self.api.create_tournament(&NewTournament::generated(TOURNAMENT_YEAR)),
            )
            .await
        else {
            // Every later URL embeds the tournament id.
            return JourneyOutcome::TournamentCreateFailed;
        };

        let group_ids = self.create_groups(&tournament_id).await;
        self.assign_teams(&tournament_id, &team_ids, &group_ids).await;
        self.settle_matches(&tournament_id).await
    }

    async fn create_teams(&self) -> Vec<String> {
        let mut team_ids = Vec::with_capacity(TEAM_COUNT);
        for _ in 0..TEAM_COUNT {
            if let Some(id) = self
                .timed(POST_TEAMS, self.api.create_team(&NewTeam::generated()))
                .await
            {
                team_ids.push(id);
            }
        }
        team_ids
    }

    async fn create_groups(&self, tournament_id: &str) -> Vec<Option<String>> {
        let mut group_ids = Vec::with_capacity(GROUP_COUNT);
        for conference in CONFERENCES {
            for _ in 0..GROUPS_PER_CONFERENCE {
                let id = self
                    .timed(
                        POST_GROUPS,
                        self.api
                            .create_group(tournament_id, &NewGroup::generated(conference)),
                    )
                    .await;
                group_ids.push(id);
            }
        }
        group_ids
    }

    /// Team i goes to group i mod 8, one single-element PATCH per team.
    async fn assign_teams(
        &self,
        tournament_id: &str,
        team_ids: &[String],
        group_ids: &[Option<String>],
    ) {
        for (index, team_id) in team_ids.iter().enumerate() {
            let Some(group_id) = &group_ids[index % group_ids.len()] else {
                tracing::debug!(
                    "Skipping assignment of team {}: group slot unavailable",
                    team_id
                );
                continue;
            };

            let body = [TeamRef {
                id: team_id.clone(),
            }];
            self.timed(
                PATCH_GROUP_TEAMS,
                self.api.assign_teams(tournament_id, group_id, &body),
            )
            .await;
        }
    }

    async fn settle_matches(&self, tournament_id: &str) -> JourneyOutcome {
        let poll_deadline = Instant::now() + self.config.max_poll;

        loop {
            let pending = self
                .timed(GET_PENDING_MATCHES, self.api.pending_matches(tournament_id))
                .await
                .unwrap_or_default();

            for pending_match in &pending {
                // A match is only scored once both participants are resolved.
                if pending_match.is_ready() {
                    let update = ScoreUpdate {
                        score: Score {
                            home: HOME_SCORE,
                            visitor: VISITOR_SCORE,
                        },
                    };
                    self.timed(
                        PATCH_MATCH_SCORE,
                        self.api.update_score(tournament_id, &pending_match.id, &update),
                    )
                    .await;
                }
            }

            let finished = self
                .timed(GET_TOURNAMENT, self.api.get_tournament(tournament_id))
                .await
                .map(|status| status.is_finished())
                .unwrap_or(false);
            if finished {
                return JourneyOutcome::Finished;
            }

            if Instant::now() >= poll_deadline {
                tracing::warn!(
                    "Tournament {} still unfinished after {:?}, abandoning journey",
                    tournament_id,
                    self.config.max_poll
                );
                return JourneyOutcome::PollDeadlineExceeded;
            }

            tokio::time::sleep(self.config.poll_interval).await;
        }
    }

    /// Time one API call and record the result under its request name.
    /// Failures are logged and swallowed; the journey continues.
    async fn timed<T>(
        &self,
        name: &'static str,
        call: impl Future<Output = ClientResult<T>>,
    ) -> Option<T> {
        let start = Instant::now();
        match call.await {
            Ok(value) => {
                let duration_ms = start.elapsed().as_millis() as u64;
                self.collector.request_succeeded(name, duration_ms);
                Some(value)
            }
            Err(error) => {
                let duration_ms = start.elapsed().as_millis() as u64;
                tracing::warn!("{} failed: {}", name, error);
                self.collector.request_failed(name, duration_ms);
                None
            }
        }
    }
}
