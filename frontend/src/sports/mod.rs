pub mod catalog;
pub mod fallback;
pub mod gateway;
pub mod models;

pub use catalog::{find_sport, leagues_by_sport, supported_sports, League, Sport};
pub use gateway::{
    build_gateway, LiveSportsGateway, OfflineSportsGateway, SportsGateway, MAX_MATCHES,
};
pub use models::{MatchSummary, PlayerSummary, TeamSummary};
