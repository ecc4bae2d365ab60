//! Print the OpenAPI document as JSON, to stdout or to `--output`.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use post_aggregator::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, Parser)]
#[command(about = "Print the post aggregator OpenAPI document")]
struct Args {
    /// Write the document to this file instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(|err| io::Error::other(format!("serialise OpenAPI document: {err}")))?;
    match args.output {
        Some(path) => std::fs::write(path, json),
        None => writeln!(io::stdout().lock(), "{json}"),
    }
}
