use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use pgrest::{routes, state};
use pgrest_configuration::environment::ProcessEnvironment;
use pgrest_configuration::{
    configuration_jsonschema, make_runtime_configuration, parse_configuration,
    ParsedConfiguration,
};

#[derive(Parser)]
#[command(name = "pgrest", version, about = "Generic read access to a PostgreSQL database over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server.
    Serve(ServeArgs),
    /// Print the JSON schema of the configuration file.
    PrintSchema,
}

#[derive(Args)]
struct ServeArgs {
    /// Configuration file, or a directory containing `configuration.json`.
    #[arg(long, env = "PGREST_CONFIG", value_name = "PATH")]
    configuration: Option<PathBuf>,
    /// Address to listen on, IPv4 or IPv6.
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::PrintSchema => {
            println!("{}", serde_json::to_string_pretty(&configuration_jsonschema())?);
            Ok(())
        }
        Command::Serve(args) => serve(args).await,
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    env_logger::init();

    let parsed = match &args.configuration {
        Some(path) => parse_configuration(path)
            .await
            .with_context(|| format!("could not read configuration from {}", path.display()))?,
        None => ParsedConfiguration::empty(),
    };
    let configuration = make_runtime_configuration(parsed, ProcessEnvironment)?;
    let state = state::create_state(configuration).await?;
    let router = routes::create_router(state);

    let address = listen_address(&args);
    tracing::info!(%address, "starting server");

    axum::Server::bind(&address)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}

fn listen_address(args: &ServeArgs) -> SocketAddr {
    SocketAddr::new(args.host, args.port)
}
