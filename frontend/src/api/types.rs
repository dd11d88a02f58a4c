use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `POST /auth/login` success body. Only `id`, `username` and
/// `accessToken` are guaranteed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub id: i64,
    pub username: String,
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// `POST /users/add` body.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub image: String,
}

/// `POST /users/add` and `GET /users/{id}` body. The endpoint echoes what
/// it was given plus an `id`; it never issues a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Identity held by an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub image: Option<String>,
}

/// Normalised result of login and registration.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    pub user: SessionUser,
    pub token: String,
}

impl fmt::Debug for AuthenticatedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatedUser")
            .field("user", &self.user)
            .field("token", &crate::logging::mask_secret(&self.token))
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    #[serde(rename = "idTeam", default)]
    pub id: Option<String>,
    #[serde(rename = "strTeam", default)]
    pub name: Option<String>,
    #[serde(rename = "strTeamBadge", alias = "strBadge", default)]
    pub badge: Option<String>,
    #[serde(rename = "strLeague", default)]
    pub league: Option<String>,
    #[serde(rename = "strSport", default)]
    pub sport: Option<String>,
    #[serde(rename = "strStadium", default)]
    pub stadium: Option<String>,
    #[serde(rename = "strCountry", default)]
    pub country: Option<String>,
    #[serde(rename = "intFormedYear", default)]
    pub formed_year: Option<String>,
    #[serde(rename = "strDescriptionEN", default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "idEvent", default)]
    pub id: Option<String>,
    #[serde(rename = "strEvent", default)]
    pub name: Option<String>,
    #[serde(rename = "strHomeTeam", default)]
    pub home_team: Option<String>,
    #[serde(rename = "strAwayTeam", default)]
    pub away_team: Option<String>,
    #[serde(rename = "intHomeScore", default)]
    pub home_score: Option<String>,
    #[serde(rename = "intAwayScore", default)]
    pub away_score: Option<String>,
    #[serde(rename = "dateEvent", default)]
    pub date: Option<String>,
    #[serde(rename = "strStatus", default)]
    pub status: Option<String>,
    #[serde(rename = "strLeague", default)]
    pub league: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "idPlayer", default)]
    pub id: Option<String>,
    #[serde(rename = "strPlayer", default)]
    pub name: Option<String>,
    #[serde(rename = "strTeam", default)]
    pub team: Option<String>,
    #[serde(rename = "strPosition", default)]
    pub position: Option<String>,
    #[serde(rename = "strNationality", default)]
    pub nationality: Option<String>,
    #[serde(rename = "strThumb", default)]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueRecord {
    #[serde(rename = "idLeague", default)]
    pub id: Option<String>,
    #[serde(rename = "strLeague", default)]
    pub name: Option<String>,
    #[serde(rename = "strSport", default)]
    pub sport: Option<String>,
    #[serde(rename = "strLeagueAlternate", default)]
    pub alternate_name: Option<String>,
}
