//! Client core for the Sportify app: session state, identity and sports
//! data gateways, and the screen controllers that sit on top of them.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod pages;
pub mod sports;
pub mod state;
pub mod validation;

use std::sync::Arc;

use api::{ApiClient, AuthGateway, SportsApi};
use config::Config;
use error::TransportError;
use sports::SportsGateway;
use state::AuthService;

/// Everything a running client needs, wired from one configuration.
pub struct App {
    pub config: Config,
    pub auth: AuthService,
    pub sports: Box<dyn SportsGateway>,
}

impl App {
    pub fn new(config: Config) -> Result<Self, TransportError> {
        let auth_client = Arc::new(ApiClient::auth(&config)?);
        let sports_client = Arc::new(ApiClient::sports(&config)?);
        tracing::info!(
            sports_mode = %config.sports_data_mode,
            auth_api = %auth_client.base_url(),
            sports_api = %sports_client.base_url(),
            "client initialised"
        );

        let auth = AuthService::new(AuthGateway::new(auth_client));
        let sports = sports::build_gateway(
            config.sports_data_mode,
            SportsApi::new(sports_client, config.sports_api_key.clone()),
        );

        Ok(Self {
            config,
            auth,
            sports,
        })
    }
}
