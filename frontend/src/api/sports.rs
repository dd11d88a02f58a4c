use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use super::{
    client::Transport,
    types::{EventRecord, LeagueRecord, PlayerRecord, TeamRecord},
};
use crate::error::TransportError;

/// Thin wrapper over the sports data endpoints. Envelopes come back with
/// the list under a fixed key, which may be `null` or missing.
#[derive(Clone)]
pub struct SportsApi {
    transport: Arc<dyn Transport>,
    api_key: String,
}

impl SportsApi {
    pub fn new(transport: Arc<dyn Transport>, api_key: impl Into<String>) -> Self {
        Self {
            transport,
            api_key: api_key.into(),
        }
    }

    fn path(&self, endpoint: &str) -> String {
        format!("/{}/{}", self.api_key, endpoint)
    }

    async fn list<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
        key: &str,
    ) -> Result<Vec<T>, TransportError> {
        let raw = self.transport.get(&self.path(endpoint), query).await?;
        list_field(raw, key)
    }

    pub async fn search_all_teams(&self, league: &str) -> Result<Vec<TeamRecord>, TransportError> {
        self.list("search_all_teams.php", &[("l", league)], "teams")
            .await
    }

    pub async fn season_events(
        &self,
        league_id: &str,
        season: &str,
    ) -> Result<Vec<EventRecord>, TransportError> {
        self.list(
            "eventsseason.php",
            &[("id", league_id), ("s", season)],
            "events",
        )
        .await
    }

    pub async fn search_players(&self, team: &str) -> Result<Vec<PlayerRecord>, TransportError> {
        self.list("searchplayers.php", &[("t", team)], "player")
            .await
    }

    pub async fn search_teams(&self, query: &str) -> Result<Vec<TeamRecord>, TransportError> {
        self.list("searchteams.php", &[("t", query)], "teams").await
    }

    pub async fn lookup_team(&self, team_id: &str) -> Result<Option<TeamRecord>, TransportError> {
        let teams: Vec<TeamRecord> = self
            .list("lookupteam.php", &[("id", team_id)], "teams")
            .await?;
        Ok(teams.into_iter().next())
    }

    pub async fn lookup_player(
        &self,
        player_id: &str,
    ) -> Result<Option<PlayerRecord>, TransportError> {
        let players: Vec<PlayerRecord> = self
            .list("lookupplayer.php", &[("id", player_id)], "players")
            .await?;
        Ok(players.into_iter().next())
    }

    pub async fn all_leagues(&self) -> Result<Vec<LeagueRecord>, TransportError> {
        self.list("all_leagues.php", &[], "leagues").await
    }

    pub async fn events_next(&self, team_id: &str) -> Result<Vec<EventRecord>, TransportError> {
        self.list("eventsnext.php", &[("id", team_id)], "events")
            .await
    }

    pub async fn events_last(&self, team_id: &str) -> Result<Vec<EventRecord>, TransportError> {
        self.list("eventslast.php", &[("id", team_id)], "results")
            .await
    }
}

fn list_field<T: DeserializeOwned>(raw: Value, key: &str) -> Result<Vec<T>, TransportError> {
    match raw {
        Value::Object(mut map) => match map.remove(key) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(list) => serde_json::from_value(list)
                .map_err(|e| TransportError::Decode(format!("{}: {}", key, e))),
        },
        Value::Null => Ok(Vec::new()),
        other => Err(TransportError::Decode(format!(
            "expected object with `{}`, got {}",
            key, other
        ))),
    }
}
