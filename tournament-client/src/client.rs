//! HTTP client for the tournament service.

use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::{Response, StatusCode};
use tracing::debug;

use crate::domain::{
    NewGroup, NewTeam, NewTournament, PendingMatch, ScoreUpdate, TeamRef, TournamentStatus,
};
use crate::error::{ClientError, ClientResult};
use crate::options::ClientOptions;

/// Client trait for tournament service operations.
///
/// One method per endpoint the harness drives. Implementations must be
/// shareable across simulated users.
#[async_trait]
pub trait TournamentApi: Send + Sync {
    /// `POST /teams`. Returns the server-assigned team id.
    async fn create_team(&self, team: &NewTeam) -> ClientResult<String>;

    /// `POST /tournaments`. Returns the server-assigned tournament id.
    async fn create_tournament(&self, tournament: &NewTournament) -> ClientResult<String>;

    /// `POST /tournaments/{id}/groups`. Returns the server-assigned group id.
    async fn create_group(&self, tournament_id: &str, group: &NewGroup) -> ClientResult<String>;

    /// `PATCH /tournaments/{id}/groups/{gid}/teams` with an array of team refs.
    async fn assign_teams(
        &self,
        tournament_id: &str,
        group_id: &str,
        teams: &[TeamRef],
    ) -> ClientResult<()>;

    /// `GET /tournaments/{id}`.
    async fn get_tournament(&self, tournament_id: &str) -> ClientResult<TournamentStatus>;

    /// `GET /tournaments/{id}/matches?showMatches=pending`.
    async fn pending_matches(&self, tournament_id: &str) -> ClientResult<Vec<PendingMatch>>;

    /// `PATCH /tournaments/{id}/matches/{mid}`. The service answers 204.
    async fn update_score(
        &self,
        tournament_id: &str,
        match_id: &str,
        update: &ScoreUpdate,
    ) -> ClientResult<()>;
}

/// `reqwest`-backed implementation of [`TournamentApi`].
///
/// Holds a single connection pool shared by every simulated user. No
/// retries and no backoff: a request either succeeds against the expected
/// status set or comes back as an error.
#[derive(Debug, Clone)]
pub struct HttpTournamentClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTournamentClient {
    pub fn new(options: ClientOptions) -> ClientResult<Self> {
        debug!(
            "Creating tournament client for {} with {}s timeout",
            options.base_url,
            options.timeout.as_secs()
        );
        let http = reqwest::Client::builder()
            .timeout(options.timeout)
            .user_agent(&options.user_agent)
            .build()
            .map_err(|source| ClientError::Transport {
                operation: "build client",
                source,
            })?;

        Ok(Self {
            http,
            base_url: options.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> ClientResult<Response> {
        request
            .send()
            .await
            .map_err(|source| ClientError::Transport { operation, source })
    }

    /// Checks the 200/201 creation contract and pulls the new identifier
    /// out of the Location header.
    fn created_id(operation: &'static str, response: &Response) -> ClientResult<String> {
        expect_status(operation, response.status(), &[StatusCode::OK, StatusCode::CREATED])?;
        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
            .ok_or(ClientError::MissingLocation { operation })
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        operation: &'static str,
        response: Response,
    ) -> ClientResult<T> {
        expect_status(operation, response.status(), &[StatusCode::OK, StatusCode::CREATED])?;
        response
            .json()
            .await
            .map_err(|source| ClientError::InvalidBody { operation, source })
    }
}

fn expect_status(
    operation: &'static str,
    status: StatusCode,
    expected: &[StatusCode],
) -> ClientResult<()> {
    if expected.contains(&status) {
        Ok(())
    } else {
        Err(ClientError::UnexpectedStatus { operation, status })
    }
}

#[async_trait]
impl TournamentApi for HttpTournamentClient {
    async fn create_team(&self, team: &NewTeam) -> ClientResult<String> {
        let operation = "create team";
        let request = self.http.post(self.url("/teams")).json(team);
        let response = self.send(operation, request).await?;
        Self::created_id(operation, &response)
    }

    async fn create_tournament(&self, tournament: &NewTournament) -> ClientResult<String> {
        let operation = "create tournament";
        let request = self.http.post(self.url("/tournaments")).json(tournament);
        let response = self.send(operation, request).await?;
        Self::created_id(operation, &response)
    }

    async fn create_group(&self, tournament_id: &str, group: &NewGroup) -> ClientResult<String> {
        let operation = "create group";
        let request = self
            .http
            .post(self.url(&format!("/tournaments/{tournament_id}/groups")))
            .json(group);
        let response = self.send(operation, request).await?;
        Self::created_id(operation, &response)
    }

    async fn assign_teams(
        &self,
        tournament_id: &str,
        group_id: &str,
        teams: &[TeamRef],
    ) -> ClientResult<()> {
        let operation = "assign teams";
        let request = self
            .http
            .patch(self.url(&format!(
                "/tournaments/{tournament_id}/groups/{group_id}/teams"
            )))
            .json(teams);
        let response = self.send(operation, request).await?;

        // Assignment returns no identifier; any success code will do.
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::UnexpectedStatus { operation, status })
        }
    }

    async fn get_tournament(&self, tournament_id: &str) -> ClientResult<TournamentStatus> {
        let operation = "get tournament";
        let request = self.http.get(self.url(&format!("/tournaments/{tournament_id}")));
        let response = self.send(operation, request).await?;
        Self::read_json(operation, response).await
    }

    async fn pending_matches(&self, tournament_id: &str) -> ClientResult<Vec<PendingMatch>> {
        let operation = "pending matches";
        let request = self
            .http
            .get(self.url(&format!("/tournaments/{tournament_id}/matches")))
            .query(&[("showMatches", "pending")]);
        let response = self.send(operation, request).await?;
        Self::read_json(operation, response).await
    }

    async fn update_score(
        &self,
        tournament_id: &str,
        match_id: &str,
        update: &ScoreUpdate,
    ) -> ClientResult<()> {
        let operation = "update score";
        let request = self
            .http
            .patch(self.url(&format!(
                "/tournaments/{tournament_id}/matches/{match_id}"
            )))
            .json(update);
        let response = self.send(operation, request).await?;
        expect_status(operation, response.status(), &[StatusCode::NO_CONTENT])
    }
}
