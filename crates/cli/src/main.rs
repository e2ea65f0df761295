// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use time::macros::format_description;
use time::{Date, OffsetDateTime, Time};
use tour_planner::{
    CascadeReport, Planner, SearchOutcome, StatusKind, SubmitOutcome, SubmitReport,
};
use tour_planner_client::{ClientConfig, DEFAULT_CONFIG_FILE, HttpGateway};
use tour_planner_domain::{EventToken, Point, Staff, TerritoryToken};
use tracing::info;

const DEFAULT_ORIGIN: &str = "http://localhost:5000";

/// Tour Planner - create and schedule tour actions from the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Store the bearer token and gateway base URL
    Configure {
        /// Bearer token for the remote tour API
        #[arg(long)]
        token: Option<String>,
        /// Base URL of the gateway
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Verify the configured token and base URL work
    Test,
    /// List territories
    Territories,
    /// List events
    Events,
    /// List points for a territory and event
    Points {
        /// Territory ident
        #[arg(long)]
        territory: String,
        /// Event name
        #[arg(long)]
        event: String,
    },
    /// List staff available today in a territory
    Staff {
        /// Territory ident
        #[arg(long)]
        territory: String,
    },
    /// Create an action end to end
    Create(CreateArgs),
}

#[derive(clap::Args, Debug)]
struct CreateArgs {
    /// Action name
    #[arg(long)]
    name: String,
    /// Territory ident
    #[arg(long)]
    territory: String,
    /// Event name (ignored with --velo)
    #[arg(long)]
    event: Option<String>,
    /// Point ident to search for (ignored with --velo)
    #[arg(long)]
    point: Option<String>,
    /// Staff ident or name to search for
    #[arg(long)]
    staff: String,
    /// Action date, YYYY-MM-DD
    #[arg(long)]
    date: String,
    /// Window start, HH:MM
    #[arg(long)]
    from: String,
    /// Window end, HH:MM; four hours after start when omitted
    #[arg(long)]
    to: Option<String>,
    /// Use the fixed Velo event and point
    #[arg(long)]
    velo: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli: Cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Commands::Configure { token, base_url } = &cli.command {
        return run_configure(&cli.config, token.as_deref(), base_url.as_deref());
    }

    let config: ClientConfig = ClientConfig::load(&cli.config, DEFAULT_ORIGIN)?;
    if !config.is_token_configured() {
        return Err("no bearer token configured; run `tour-planner configure --token <token>` first".into());
    }
    let gateway: HttpGateway = HttpGateway::from_config(&config);

    match cli.command {
        Commands::Configure { .. } => unreachable!("handled above"),
        Commands::Test => run_test(&gateway).await,
        Commands::Territories => run_territories(gateway).await,
        Commands::Events => run_events(gateway).await,
        Commands::Points { territory, event } => run_points(gateway, &territory, &event).await,
        Commands::Staff { territory } => run_staff(gateway, &territory).await,
        Commands::Create(args) => run_create(gateway, &args).await,
    }
}

fn run_configure(
    path: &Path,
    token: Option<&str>,
    base_url: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config: ClientConfig = ClientConfig::load(path, DEFAULT_ORIGIN)?;
    if let Some(token) = token {
        config.bearer_token = token.to_string();
    }
    if let Some(base_url) = base_url {
        config.base_url = base_url.to_string();
    }
    config.save(path)?;
    println!("Configuration saved to {}", path.display());
    if !config.is_token_configured() {
        println!("Warning: the stored bearer token looks too short to be usable");
    }
    Ok(())
}

async fn run_test(gateway: &HttpGateway) -> Result<(), Box<dyn std::error::Error>> {
    gateway.test_connection().await?;
    println!("Connection OK");
    Ok(())
}

async fn run_territories(gateway: HttpGateway) -> Result<(), Box<dyn std::error::Error>> {
    let mut planner: Planner<HttpGateway> = Planner::new(gateway, OffsetDateTime::now_utc());
    fail_on_errors(&planner.refresh_territories().await)?;
    for territory in planner.territories() {
        println!("{}\t{}", territory.ident, territory.uuid);
    }
    Ok(())
}

async fn run_events(gateway: HttpGateway) -> Result<(), Box<dyn std::error::Error>> {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let mut planner: Planner<HttpGateway> = Planner::new(gateway, now);
    fail_on_errors(&planner.refresh_territories().await)?;
    let Some(territory) = planner.territories().first().cloned() else {
        return Err("no territories available".into());
    };
    let token: String = TerritoryToken::encode(&territory);
    fail_on_errors(&planner.select_territory(&token, now.date()).await)?;
    for event in planner.events() {
        println!("{}\t{}", event.name, event.uuid);
    }
    Ok(())
}

async fn run_points(
    gateway: HttpGateway,
    territory_ident: &str,
    event_name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let mut planner: Planner<HttpGateway> = Planner::new(gateway, now);
    select_territory_by_ident(&mut planner, territory_ident, now.date()).await?;
    select_event_by_name(&mut planner, event_name).await?;
    for point in planner.points() {
        println!("{}", planner.point_label(point));
    }
    Ok(())
}

async fn run_staff(
    gateway: HttpGateway,
    territory_ident: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let mut planner: Planner<HttpGateway> = Planner::new(gateway, now);
    select_territory_by_ident(&mut planner, territory_ident, now.date()).await?;
    for staff in planner.staff() {
        println!("{}", staff.display_label());
    }
    Ok(())
}

async fn run_create(
    gateway: HttpGateway,
    args: &CreateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let mut planner: Planner<HttpGateway> = Planner::new(gateway, now);

    select_territory_by_ident(&mut planner, &args.territory, now.date()).await?;

    if args.velo {
        fail_on_errors(&planner.set_special_mode(true).await)?;
    } else {
        let event_name: &str = args
            .event
            .as_deref()
            .ok_or("--event is required without --velo")?;
        select_event_by_name(&mut planner, event_name).await?;

        let point_query: &str = args
            .point
            .as_deref()
            .ok_or("--point is required without --velo")?;
        let point: Point = match planner.search_points(point_query) {
            SearchOutcome::Matches(matches) if !matches.is_empty() => matches[0].clone(),
            _ => return Err(format!("no point matches '{point_query}'").into()),
        };
        info!(point = %planner.point_label(&point), "point selected");
        planner.select_point(&point);
    }

    let staff: Staff = match planner.search_staff(&args.staff) {
        SearchOutcome::Matches(matches) if !matches.is_empty() => matches[0].clone(),
        _ => return Err(format!("no staff member matches '{}'", args.staff).into()),
    };
    info!(staff = %staff.display_label(), "staff selected");
    planner.select_staff(&staff);

    planner.set_name(&args.name);
    planner.set_date(parse_date(&args.date)?);
    planner.set_from_time(parse_time(&args.from)?);
    if let Some(to) = &args.to {
        planner.set_to_time(parse_time(to)?);
    }

    let report: SubmitReport = planner.submit(now).await;
    for message in &report.messages {
        println!("{}", message.text);
    }
    match report.outcome {
        SubmitOutcome::Succeeded { ident } => {
            info!(%ident, auto_accepted = report.auto_accepted, "submission finished");
            Ok(())
        }
        SubmitOutcome::Failed { message } => Err(message.into()),
    }
}

async fn select_territory_by_ident(
    planner: &mut Planner<HttpGateway>,
    ident: &str,
    today: Date,
) -> Result<(), Box<dyn std::error::Error>> {
    fail_on_errors(&planner.refresh_territories().await)?;
    let Some(territory) = planner
        .territories()
        .iter()
        .find(|territory| territory.ident.eq_ignore_ascii_case(ident))
        .cloned()
    else {
        return Err(format!("no territory with ident '{ident}'").into());
    };
    let token: String = TerritoryToken::encode(&territory);
    fail_on_errors(&planner.select_territory(&token, today).await)
}

async fn select_event_by_name(
    planner: &mut Planner<HttpGateway>,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(event) = planner
        .events()
        .iter()
        .find(|event| event.name.eq_ignore_ascii_case(name))
        .cloned()
    else {
        return Err(format!("no event named '{name}'").into());
    };
    let token: String = EventToken::encode(&event);
    fail_on_errors(&planner.select_event(&token).await)
}

fn fail_on_errors(report: &CascadeReport) -> Result<(), Box<dyn std::error::Error>> {
    for message in &report.messages {
        if message.kind == StatusKind::Error {
            return Err(message.text.clone().into());
        }
        println!("{}", message.text);
    }
    Ok(())
}

fn parse_date(raw: &str) -> Result<Date, Box<dyn std::error::Error>> {
    Ok(Date::parse(
        raw,
        &format_description!("[year]-[month]-[day]"),
    )?)
}

fn parse_time(raw: &str) -> Result<Time, Box<dyn std::error::Error>> {
    Ok(Time::parse(raw, &format_description!("[hour]:[minute]"))?)
}
