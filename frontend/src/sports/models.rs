use serde::{Deserialize, Serialize};

use crate::api::{EventRecord, PlayerRecord, TeamRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub id: String,
    pub name: String,
    pub badge: Option<String>,
    pub league: Option<String>,
    pub sport: Option<String>,
    pub stadium: Option<String>,
}

impl TeamSummary {
    /// `None` when the record lacks an id or a name.
    pub fn from_record(record: TeamRecord) -> Option<Self> {
        Some(Self {
            id: present(record.id)?,
            name: present(record.name)?,
            badge: record.badge,
            league: record.league,
            sport: record.sport,
            stadium: record.stadium,
        })
    }
}

/// Scores stay string-encoded as the upstream sends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub id: String,
    pub name: String,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub home_score: Option<String>,
    pub away_score: Option<String>,
    pub date: Option<String>,
    pub status: Option<String>,
}

impl MatchSummary {
    pub fn from_record(record: EventRecord) -> Option<Self> {
        Some(Self {
            id: present(record.id)?,
            name: present(record.name)?,
            home_team: record.home_team,
            away_team: record.away_team,
            home_score: record.home_score,
            away_score: record.away_score,
            date: record.date,
            status: record.status,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: String,
    pub name: String,
    pub team: Option<String>,
    pub position: Option<String>,
    pub nationality: Option<String>,
    pub thumbnail: Option<String>,
}

impl PlayerSummary {
    pub fn from_record(record: PlayerRecord) -> Option<Self> {
        Some(Self {
            id: present(record.id)?,
            name: present(record.name)?,
            team: record.team,
            position: record.position,
            nationality: record.nationality,
            thumbnail: record.thumbnail,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
