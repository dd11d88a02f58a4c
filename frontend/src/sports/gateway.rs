use async_trait::async_trait;

use super::{
    fallback,
    models::{MatchSummary, PlayerSummary, TeamSummary},
};
use crate::{
    api::{LeagueRecord, SportsApi},
    config::SportsDataMode,
    error::{SportsError, TransportError},
};

/// Upper bound on matches returned by the live strategy.
pub const MAX_MATCHES: usize = 10;

/// Sports data lookups. Teams and matches depend on the strategy; the
/// remaining lookups always go to the live API.
#[async_trait]
pub trait SportsGateway: Send + Sync {
    fn mode(&self) -> SportsDataMode;

    fn api(&self) -> &SportsApi;

    async fn teams_by_league(&self, league: &str) -> Result<Vec<TeamSummary>, SportsError>;

    async fn matches_by_league(
        &self,
        league_id: &str,
        season: &str,
    ) -> Result<Vec<MatchSummary>, SportsError>;

    async fn players_by_team(&self, team: &str) -> Result<Vec<PlayerSummary>, SportsError> {
        let records = self
            .api()
            .search_players(team)
            .await
            .map_err(lookup("players"))?;
        Ok(records
            .into_iter()
            .filter_map(PlayerSummary::from_record)
            .collect())
    }

    async fn search_teams(&self, query: &str) -> Result<Vec<TeamSummary>, SportsError> {
        let records = self
            .api()
            .search_teams(query)
            .await
            .map_err(lookup("teams"))?;
        Ok(records
            .into_iter()
            .filter_map(TeamSummary::from_record)
            .collect())
    }

    async fn team_details(&self, team_id: &str) -> Result<Option<TeamSummary>, SportsError> {
        let record = self
            .api()
            .lookup_team(team_id)
            .await
            .map_err(lookup("team"))?;
        Ok(record.and_then(TeamSummary::from_record))
    }

    async fn player_details(&self, player_id: &str) -> Result<Option<PlayerSummary>, SportsError> {
        let record = self
            .api()
            .lookup_player(player_id)
            .await
            .map_err(lookup("player"))?;
        Ok(record.and_then(PlayerSummary::from_record))
    }

    async fn all_leagues(&self) -> Result<Vec<LeagueRecord>, SportsError> {
        self.api().all_leagues().await.map_err(lookup("leagues"))
    }

    async fn next_events(&self, team_id: &str) -> Result<Vec<MatchSummary>, SportsError> {
        let records = self
            .api()
            .events_next(team_id)
            .await
            .map_err(lookup("next events"))?;
        Ok(records
            .into_iter()
            .filter_map(MatchSummary::from_record)
            .collect())
    }

    async fn last_events(&self, team_id: &str) -> Result<Vec<MatchSummary>, SportsError> {
        let records = self
            .api()
            .events_last(team_id)
            .await
            .map_err(lookup("last events"))?;
        Ok(records
            .into_iter()
            .filter_map(MatchSummary::from_record)
            .collect())
    }
}

fn lookup(resource: &'static str) -> impl FnOnce(TransportError) -> SportsError {
    move |source| {
        tracing::warn!(resource, error = %source, "sports lookup failed");
        SportsError::Lookup { resource, source }
    }
}

/// Serves the bundled sample teams and matches whatever the input; never
/// touches the network for those two queries.
pub struct OfflineSportsGateway {
    api: SportsApi,
}

impl OfflineSportsGateway {
    pub fn new(api: SportsApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SportsGateway for OfflineSportsGateway {
    fn mode(&self) -> SportsDataMode {
        SportsDataMode::Offline
    }

    fn api(&self) -> &SportsApi {
        &self.api
    }

    async fn teams_by_league(&self, league: &str) -> Result<Vec<TeamSummary>, SportsError> {
        tracing::debug!(league, "serving sample teams");
        Ok(fallback::sample_teams())
    }

    async fn matches_by_league(
        &self,
        league_id: &str,
        season: &str,
    ) -> Result<Vec<MatchSummary>, SportsError> {
        tracing::debug!(league_id, season, "serving sample matches");
        Ok(fallback::sample_matches())
    }
}

/// Live lookups; transport failures and empty results surface as
/// `DataUnavailable` with no sample substitution.
pub struct LiveSportsGateway {
    api: SportsApi,
}

impl LiveSportsGateway {
    pub fn new(api: SportsApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SportsGateway for LiveSportsGateway {
    fn mode(&self) -> SportsDataMode {
        SportsDataMode::Live
    }

    fn api(&self) -> &SportsApi {
        &self.api
    }

    async fn teams_by_league(&self, league: &str) -> Result<Vec<TeamSummary>, SportsError> {
        let unavailable = || SportsError::DataUnavailable {
            league: league.to_string(),
        };
        let records = self.api.search_all_teams(league).await.map_err(|err| {
            tracing::warn!(league, error = %err, "teams lookup failed");
            unavailable()
        })?;
        let teams: Vec<_> = records
            .into_iter()
            .filter_map(TeamSummary::from_record)
            .collect();
        if teams.is_empty() {
            tracing::warn!(league, "no teams returned");
            return Err(unavailable());
        }
        tracing::debug!(league, count = teams.len(), "teams loaded");
        Ok(teams)
    }

    async fn matches_by_league(
        &self,
        league_id: &str,
        season: &str,
    ) -> Result<Vec<MatchSummary>, SportsError> {
        let unavailable = || SportsError::DataUnavailable {
            league: league_id.to_string(),
        };
        let records = self
            .api
            .season_events(league_id, season)
            .await
            .map_err(|err| {
                tracing::warn!(league_id, season, error = %err, "matches lookup failed");
                unavailable()
            })?;
        let matches: Vec<_> = records
            .into_iter()
            .filter_map(MatchSummary::from_record)
            .take(MAX_MATCHES)
            .collect();
        if matches.is_empty() {
            tracing::warn!(league_id, season, "no matches returned");
            return Err(unavailable());
        }
        Ok(matches)
    }
}

/// Picks the strategy for this deployment.
pub fn build_gateway(mode: SportsDataMode, api: SportsApi) -> Box<dyn SportsGateway> {
    match mode {
        SportsDataMode::Offline => Box::new(OfflineSportsGateway::new(api)),
        SportsDataMode::Live => Box::new(LiveSportsGateway::new(api)),
    }
}
