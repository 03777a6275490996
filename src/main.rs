mod display;

use anyhow::Context;
use clap::{Parser, Subcommand};
use display::output::{
    display_catalogue, display_error, display_info, display_query, display_success,
};
use riot_endpoints::catalogue::{self, CATALOGUE};
use riot_endpoints::config::Config;
use riot_endpoints::{AppError, Query, RiotApi};
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(name = "riotq")]
#[command(about = "Build Riot API requests from the endpoint catalogue", long_about = None)]
struct Args {
    /// Routing value, e.g. a platform (na1, euw1), region (americas) or shard (eu).
    /// Passed through as given; pbe1 and esports work too
    #[arg(short, long, global = true)]
    routing: Option<String>,

    /// Log request assembly to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every endpoint and method
    List {
        /// Only show this endpoint (e.g. league-v4)
        endpoint: Option<String>,
    },
    /// Assemble the request for one method without sending it
    Call {
        /// Endpoint name, e.g. match-v5
        endpoint: String,

        /// Method name, e.g. by-puuid
        method: String,

        /// Positional path parameters, in order
        args: Vec<String>,

        /// Query option as key=value (repeatable), e.g. --opt count=20
        #[arg(short, long = "opt", value_name = "KEY=VALUE")]
        opts: Vec<String>,
    },
}

/// Stands in for a network dispatcher: stamps the record and returns it as
/// JSON instead of sending it.
fn dry_run(query: &mut Query) -> Result<Value, serde_json::Error> {
    query.mark_sent();
    serde_json::to_value(&*query)
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = run(args) {
        display_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Command::List { endpoint } => {
            let shown = match endpoint {
                Some(name) => {
                    let found = CATALOGUE
                        .iter()
                        .position(|r| r.name == name)
                        .ok_or(AppError::UnknownEndpoint(name))?;
                    &CATALOGUE[found..=found]
                }
                None => CATALOGUE,
            };
            display_catalogue(shown);
        }
        Command::Call {
            endpoint,
            method,
            args: positional,
            opts,
        } => {
            let config = match args.routing {
                Some(routing) => Config::new(routing)?,
                None => Config::from_env().context("loading RIOT_ROUTING")?,
            };
            let options = opts
                .iter()
                .map(|raw| catalogue::parse_option(raw))
                .collect::<Result<Vec<_>, _>>()?;

            display_info(&format!(
                "Building {} {} for routing {}",
                endpoint, method, config.routing
            ));

            let api = RiotApi::new(dry_run as fn(&mut Query) -> Result<Value, serde_json::Error>);
            let record = catalogue::invoke(
                &api,
                &endpoint,
                &method,
                &config.routing,
                &positional,
                &options,
            )??;

            display_success("Request assembled");
            display_query(&record);
        }
    }

    Ok(())
}
