//! Fixed catalog of supported sports. No network involved.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct League {
    pub id: &'static str,
    pub name: &'static str,
    pub country: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sport {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub emoji: &'static str,
    pub leagues: &'static [League],
}

const fn league(id: &'static str, name: &'static str, country: &'static str) -> League {
    League { id, name, country }
}

static SPORTS: [Sport; 8] = [
    Sport {
        id: "soccer",
        name: "Soccer",
        icon: "football",
        emoji: "⚽",
        leagues: &[
            league("4328", "English Premier League", "England"),
            league("4335", "La Liga", "Spain"),
            league("4331", "Bundesliga", "Germany"),
            league("4332", "Serie A", "Italy"),
            league("4334", "Ligue 1", "France"),
        ],
    },
    Sport {
        id: "basketball",
        name: "Basketball",
        icon: "basketball",
        emoji: "🏀",
        leagues: &[
            league("4387", "NBA", "USA"),
            league("4607", "NCAA", "USA"),
        ],
    },
    Sport {
        id: "american_football",
        name: "American Football",
        icon: "american-football",
        emoji: "🏈",
        leagues: &[
            league("4391", "NFL", "USA"),
            league("4479", "NCAA Football", "USA"),
        ],
    },
    Sport {
        id: "baseball",
        name: "Baseball",
        icon: "baseball",
        emoji: "⚾",
        leagues: &[
            league("4424", "MLB", "USA"),
            league("4591", "Nippon Professional Baseball", "Japan"),
        ],
    },
    Sport {
        id: "ice_hockey",
        name: "Ice Hockey",
        icon: "snow",
        emoji: "🏒",
        leagues: &[
            league("4380", "NHL", "USA"),
            league("4920", "KHL", "Russia"),
        ],
    },
    Sport {
        id: "tennis",
        name: "Tennis",
        icon: "tennisball",
        emoji: "🎾",
        leagues: &[
            league("4464", "ATP World Tour", "World"),
            league("4517", "WTA Tour", "World"),
        ],
    },
    Sport {
        id: "cricket",
        name: "Cricket",
        icon: "baseball-outline",
        emoji: "🏏",
        leagues: &[
            league("4460", "Indian Premier League", "India"),
            league("4461", "Big Bash League", "Australia"),
        ],
    },
    Sport {
        id: "rugby",
        name: "Rugby",
        icon: "american-football-outline",
        emoji: "🏉",
        leagues: &[
            league("4714", "Six Nations Championship", "Europe"),
            league("4446", "Super Rugby", "Southern Hemisphere"),
        ],
    },
];

pub fn supported_sports() -> &'static [Sport] {
    &SPORTS
}

pub fn find_sport(sport_id: &str) -> Option<&'static Sport> {
    SPORTS.iter().find(|sport| sport.id == sport_id)
}

/// Leagues for `sport_id`, in catalog order; empty for unknown sports.
pub fn leagues_by_sport(sport_id: &str) -> &'static [League] {
    find_sport(sport_id)
        .map(|sport| sport.leagues)
        .unwrap_or(&[])
}
