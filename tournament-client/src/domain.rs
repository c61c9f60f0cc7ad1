//! Request and response payload types for the tournament service.
//!
//! All entities are owned and persisted by the service; these types only
//! describe what goes over the wire. Server-assigned identifiers travel in
//! a Location-style response header, not in response bodies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /teams`.
#[derive(Debug, Clone, Serialize)]
pub struct NewTeam {
    pub name: String,
}

impl NewTeam {
    /// A team with a unique generated name.
    pub fn generated() -> Self {
        Self {
            name: format!("Team {}", Uuid::new_v4()),
        }
    }
}

/// Body of `POST /tournaments`.
///
/// The service models the finished flag as the string `"yes"`/`"no"`.
#[derive(Debug, Clone, Serialize)]
pub struct NewTournament {
    pub name: String,
    pub year: i32,
    pub finished: String,
}

impl NewTournament {
    /// An unfinished tournament with a unique generated name.
    pub fn generated(year: i32) -> Self {
        Self {
            name: format!("Tournament - {}", Uuid::new_v4()),
            year,
            finished: "no".to_string(),
        }
    }
}

/// Body of `POST /tournaments/{id}/groups`.
#[derive(Debug, Clone, Serialize)]
pub struct NewGroup {
    pub name: String,
    pub region: String,
    pub conference: String,
}

impl NewGroup {
    /// A group with generated name and region, in the given conference.
    pub fn generated(conference: &str) -> Self {
        Self {
            name: format!("Group - {}", Uuid::new_v4()),
            region: format!("Region - {}", Uuid::new_v4()),
            conference: conference.to_string(),
        }
    }
}

/// Element of the `PATCH /tournaments/{id}/groups/{gid}/teams` body, which
/// is a JSON array of these.
#[derive(Debug, Clone, Serialize)]
pub struct TeamRef {
    pub id: String,
}

/// A match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: i32,
    pub visitor: i32,
}

/// Body of `PATCH /tournaments/{id}/matches/{mid}`.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreUpdate {
    pub score: Score,
}

/// Subset of `GET /tournaments/{id}` the harness cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct TournamentStatus {
    #[serde(default)]
    pub finished: String,
}

impl TournamentStatus {
    pub fn is_finished(&self) -> bool {
        self.finished == "yes"
    }
}

/// One side of a match. The id is the empty string while the participant
/// is still unresolved (earlier rounds not yet played).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchSlot {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Element of the `GET /tournaments/{id}/matches?showMatches=pending`
/// response array. Fields the harness does not use are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PendingMatch {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub home: MatchSlot,
    #[serde(default)]
    pub visitor: MatchSlot,
}

impl PendingMatch {
    /// A match can only be scored once both participants are resolved.
    pub fn is_ready(&self) -> bool {
        !self.home.id.is_empty() && !self.visitor.id.is_empty()
    }
}
