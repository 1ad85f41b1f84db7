//! Vertex Color Editor
//!
//! Demo host application: an editable mesh, a selection list standing in
//! for viewport selection, and the vertex color panel. Every edit dispatches
//! a change notification through the handler registry, which is where the
//! auto-pick guard runs.

mod app;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Vertex color editing demo
#[derive(Parser, Debug)]
#[command(name = "vcolor")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log filter (e.g. info, debug, vcolor_edit=trace)
    #[arg(short, long, default_value = "info")]
    log: String,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = app::run() {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}
