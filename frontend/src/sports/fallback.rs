//! Sample payloads served by the offline strategy.

use super::models::{MatchSummary, TeamSummary};

const SAMPLE_LEAGUE: &str = "English Premier League";

fn team(id: &str, name: &str, badge: &str, stadium: &str) -> TeamSummary {
    TeamSummary {
        id: id.into(),
        name: name.into(),
        badge: Some(badge.into()),
        league: Some(SAMPLE_LEAGUE.into()),
        sport: Some("Soccer".into()),
        stadium: Some(stadium.into()),
    }
}

fn finished(
    id: &str,
    home: &str,
    away: &str,
    home_score: &str,
    away_score: &str,
    date: &str,
) -> MatchSummary {
    MatchSummary {
        id: id.into(),
        name: format!("{} vs {}", home, away),
        home_team: Some(home.into()),
        away_team: Some(away.into()),
        home_score: Some(home_score.into()),
        away_score: Some(away_score.into()),
        date: Some(date.into()),
        status: Some("Match Finished".into()),
    }
}

pub fn sample_teams() -> Vec<TeamSummary> {
    vec![
        team(
            "133604",
            "Arsenal",
            "https://logos-world.net/wp-content/uploads/2020/06/Arsenal-Logo.png",
            "Emirates Stadium",
        ),
        team(
            "133602",
            "Manchester United",
            "https://logos-world.net/wp-content/uploads/2020/06/Manchester-United-Logo.png",
            "Old Trafford",
        ),
        team(
            "133599",
            "Liverpool",
            "https://logos-world.net/wp-content/uploads/2020/06/Liverpool-Logo.png",
            "Anfield",
        ),
        team(
            "133613",
            "Chelsea",
            "https://logos-world.net/wp-content/uploads/2020/06/Chelsea-Logo.png",
            "Stamford Bridge",
        ),
    ]
}

pub fn sample_matches() -> Vec<MatchSummary> {
    vec![
        finished("441617", "Arsenal", "Manchester United", "3", "1", "2024-01-20"),
        finished("441618", "Liverpool", "Chelsea", "2", "1", "2024-01-21"),
        finished("441619", "Manchester City", "Tottenham", "4", "0", "2024-01-22"),
    ]
}
