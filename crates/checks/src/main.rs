//! `scolo-check` - CLI runner for the compliance check tools.
//!
//! The investigation agent invokes checks as shell commands, e.g.
//! `scolo-check sanctions "Some Entity"`. The JSON result record goes to
//! stdout; progress chatter goes to stderr so it never pollutes the
//! machine-readable output.

use clap::{Parser, Subcommand};
use serde_json::json;

#[derive(Parser)]
#[command(name = "scolo-check")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run a single compliance check and print its JSON result")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Screen an entity against sanctions lists
    Sanctions { entity: String },
    /// Screen a person for PEP status
    #[command(name = "pep_check")]
    PepCheck { entity: String },
    /// Search news sources for adverse media
    #[command(name = "adverse_media")]
    AdverseMedia { entity: String },
    /// Assess geographic risk for a country
    #[command(name = "geo_risk")]
    GeoRisk { country: String },
    /// Search business registries for a company
    #[command(name = "business_registry")]
    BusinessRegistry { entity: String },
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Sanctions { entity } => scolo_checks::sanctions::check(entity),
        Command::PepCheck { entity } => scolo_checks::pep_check::check(entity),
        Command::AdverseMedia { entity } => scolo_checks::adverse_media::check(entity),
        Command::GeoRisk { country } => scolo_checks::geo_risk::check(country),
        Command::BusinessRegistry { entity } => scolo_checks::business_registry::check(entity),
    };

    match serde_json::to_string_pretty(&result) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            println!("{}", json!({ "error": e.to_string() }));
            std::process::exit(1);
        }
    }
}
