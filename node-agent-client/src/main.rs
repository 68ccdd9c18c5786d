//! Node Agent client command line.
//!
//! Invokes exactly one of the two Node Agent web service operations per
//! run: `--ping`, or `--handle_rtml` with an RTML file. The operation
//! result goes to stdout (or to `--output` for returned RTML); progress
//! narration goes to the log on stderr.

use clap::Parser;
use env_logger::Env;
use log::info;
use node_agent_client::{NodeAgentClient, NodeAgentError, rtml_file};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "node-agent-client", about = "Node Agent Client.")]
struct Cli {
    /// Hostname hosting the Node Agent web service container
    #[arg(long, default_value = "ltproxy")]
    hostname: String,

    /// Port number the Node Agent web service container is running on
    #[arg(long = "port_number", default_value = "8080")]
    port_number: String,

    /// Username to authenticate the web service call with
    #[arg(long, default_value = "eng")]
    username: String,

    /// Password to authenticate the web service call with
    #[arg(long, default_value = "none")]
    password: String,

    /// Call the ping web service
    #[arg(long)]
    ping: bool,

    /// Call the handle_rtml web service with the specified RTML filename
    /// as input
    #[arg(long = "handle_rtml", value_name = "RTML_FILE")]
    handle_rtml: Option<PathBuf>,

    /// Save the RTML returned by handle_rtml in the specified filename
    /// instead of printing it
    #[arg(long, value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), NodeAgentError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    // No operation selected means no network traffic at all.
    if !cli.ping && cli.handle_rtml.is_none() {
        println!("No method to invoke: please specify --ping or --handle_rtml <rtml_filename>");
        return Ok(());
    }

    info!(
        "Initialising web service to host {}:{}",
        cli.hostname, cli.port_number
    );
    info!(
        "Using username {} and password {}",
        cli.username, cli.password
    );

    let client =
        NodeAgentClient::new(&cli.hostname, &cli.port_number, &cli.username, &cli.password).await?;

    if cli.ping {
        info!("Invoking the Node Agent ping() method");
        let reply = client.ping().await?;
        println!("{reply}");
    } else if let Some(input) = cli.handle_rtml {
        info!("Loading RTML from file {}", input.display());
        let rtml_document = rtml_file::load(&input)?;

        info!("Invoking the Node Agent handle_rtml() method");
        let returned = client.handle_rtml(&rtml_document).await?;

        match cli.output {
            Some(output) => {
                info!("Saving the returned RTML document to file {}", output.display());
                rtml_file::save(&output, &returned)?;
            }
            None => println!("{returned}"),
        }
    }

    Ok(())
}
