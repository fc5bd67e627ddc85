use crate::{handle_plan_request, Catalog, PayloadSchema, Planner, VacationPlan, VacationRequest};
use anyhow::{bail, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use serde_json::Value;
use tokio::io::AsyncReadExt;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const CATALOG_ENV: &str = "VACATION_PLANNER_CATALOG";

fn command() -> Command {
    Command::new("vacation-planner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rank vacation destinations for a traveler request and print the plan as JSON")
        .arg(
            Arg::new("request")
                .help("Path to a request JSON file, or `-` to read from stdin")
                .required_unless_present("schema")
                .index(1),
        )
        .arg(
            Arg::new("catalog")
                .short('c')
                .long("catalog")
                .value_name("PATH")
                .env(CATALOG_ENV)
                .help("JSON destination catalog to use instead of the built-in one"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .action(ArgAction::SetTrue)
                .help("Print single-line JSON"),
        )
        .arg(
            Arg::new("schema")
                .long("schema")
                .value_name("KIND")
                .value_parser(["request", "plan"])
                .help("Print the JSON Schema for requests or plans and exit"),
        )
}

/// CLI entry point for the vacation planner
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = command().get_matches();
    let compact = matches.get_flag("compact");

    if let Some(kind) = matches.get_one::<String>("schema") {
        let schema = match kind.as_str() {
            "plan" => VacationPlan::schema(),
            _ => VacationRequest::schema(),
        };
        print_json(schema.schema_json(), compact)?;
        return Ok(());
    }

    let planner = build_planner(&matches)?;
    let payload = read_payload(&matches).await?;

    let response = handle_plan_request(&planner, &payload);
    print_json(&response, compact)?;

    if !response.is_success() {
        error!(status = response.status, "vacation plan request failed");
        return Err(anyhow::anyhow!("request failed with status {}", response.status).into());
    }

    info!("vacation plan generated");
    Ok(())
}

fn build_planner(matches: &ArgMatches) -> anyhow::Result<Planner> {
    let planner = Planner::new();

    match matches.get_one::<String>("catalog") {
        Some(path) => {
            let catalog = Catalog::from_json_file(path)
                .with_context(|| format!("failed to load catalog from {path}"))?;
            Ok(planner.with_catalog(catalog))
        }
        None => Ok(planner),
    }
}

async fn read_payload(matches: &ArgMatches) -> anyhow::Result<Value> {
    let Some(source) = matches.get_one::<String>("request") else {
        bail!("a request file is required");
    };

    let raw = if source == "-" {
        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .context("failed to read request from stdin")?;
        buffer
    } else {
        tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("failed to read request file {source}"))?
    };

    serde_json::from_str(&raw).context("request is not valid JSON")
}

fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> anyhow::Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}
