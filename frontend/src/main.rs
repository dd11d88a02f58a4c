use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::sync::Arc;

use sportify_frontend::{
    config::{Config, SportsDataMode},
    logging,
    pages::{Alerts, LoginViewModel, Navigator, RegisterViewModel, Route},
    sports, App,
};

#[derive(Parser)]
#[command(name = "sportify", about = "Sports scores, rosters and results")]
struct Cli {
    /// Overrides SPORTS_DATA_MODE for this run.
    #[arg(long, value_parser = parse_mode)]
    mode: Option<SportsDataMode>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the supported sports.
    Sports,
    /// List the leagues of one sport.
    Leagues { sport: String },
    /// Teams of a league, by name.
    Teams { league: String },
    /// Season matches of a league, by id.
    Matches {
        league_id: String,
        #[arg(long, default_value = "2023-2024")]
        season: String,
    },
    /// Players of a team, by name.
    Players { team: String },
    /// Sign in against the identity API.
    Login { username: String, password: String },
    /// Create an account against the identity API.
    Register(RegisterArgs),
}

#[derive(Args)]
struct RegisterArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    confirm_password: String,
}

fn parse_mode(raw: &str) -> Result<SportsDataMode, String> {
    raw.parse().map_err(|e: anyhow::Error| e.to_string())
}

struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn push(&self, route: Route) {
        tracing::info!(route = route.path(), "navigate");
    }

    fn replace(&self, route: Route) {
        tracing::info!(route = route.path(), "navigate (replace)");
    }
}

struct TerminalAlerts;

impl Alerts for TerminalAlerts {
    fn alert(&self, title: &str, message: &str) {
        eprintln!("{}: {}", title, message);
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init(logging::DEFAULT_FILTER);

    let cli = Cli::parse();
    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(mode) = cli.mode {
        config.sports_data_mode = mode;
    }
    let app = App::new(config).context("failed to build HTTP clients")?;

    match cli.command {
        Command::Sports => print_json(sports::supported_sports())?,
        Command::Leagues { sport } => print_json(sports::leagues_by_sport(&sport))?,
        Command::Teams { league } => print_json(&app.sports.teams_by_league(&league).await?)?,
        Command::Matches { league_id, season } => {
            print_json(&app.sports.matches_by_league(&league_id, &season).await?)?
        }
        Command::Players { team } => print_json(&app.sports.players_by_team(&team).await?)?,
        Command::Login { username, password } => {
            let mut vm = LoginViewModel::new(
                app.auth.clone(),
                Arc::new(TerminalNavigator),
                Arc::new(TerminalAlerts),
            );
            vm.form.username = username;
            vm.form.password = password;
            vm.submit().await?;
            print_json(&app.auth.session().user())?;
        }
        Command::Register(args) => {
            let mut vm = RegisterViewModel::new(
                app.auth.clone(),
                Arc::new(TerminalNavigator),
                Arc::new(TerminalAlerts),
            );
            vm.form.first_name = args.first_name;
            vm.form.last_name = args.last_name;
            vm.form.username = args.username;
            vm.form.email = args.email;
            vm.form.password = args.password;
            vm.form.confirm_password = args.confirm_password;
            vm.submit().await?;
            print_json(&app.auth.session().user())?;
        }
    }

    Ok(())
}
