//! Print the OpenAPI document as JSON, to stdout or a file.

use std::path::PathBuf;

use backend::doc::ApiDoc;
use clap::Parser;
use utoipa::OpenApi;

/// Command-line options for `openapi-dump`.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Write the users API OpenAPI document")]
struct Args {
    /// Destination file. Prints to stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let json = ApiDoc::openapi().to_pretty_json()?;
    match args.output {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}
