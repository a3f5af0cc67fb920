use anyhow::Result;
use clap::Parser;
use ratefinder::{lookup::QueryOutcome, process::RateRecord, render, Catalog, Config};
use reqwest::Client;
use serde_json::json;
use std::{
    io::{self, Write},
    path::PathBuf,
};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "Look up freight rates by origin and destination port")]
struct Args {
    /// YAML config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Workbook path or http(s) URL; overrides the config
    #[arg(long)]
    source: Option<String>,
    /// Origin port, exactly as listed
    #[arg(long, default_value = "")]
    pol: String,
    /// Destination port, exactly as listed
    #[arg(long, default_value = "")]
    pod: String,
    /// Only print the origin and destination lists
    #[arg(long)]
    list: bool,
    /// Emit JSON instead of text tables
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ratefinder=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    // ─── 2) configuration ────────────────────────────────────────────
    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => Config::from_yaml_file(path)?,
        None => Config::default(),
    };
    if let Some(source) = args.source.clone() {
        config.source = source;
    }
    info!(source = %config.source, "startup");

    // ─── 3) one-shot load ────────────────────────────────────────────
    let catalog = match Catalog::load(&Client::new(), &config).await {
        Ok(c) => c,
        Err(e) => {
            error!("load failed: {:#}", e);
            return Err(e);
        }
    };

    // ─── 4) query + render ───────────────────────────────────────────
    let outcome = catalog.search(&args.pol, &args.pod);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.json {
        let matches: &[&RateRecord] = match &outcome {
            QueryOutcome::Matches(m) => m.as_slice(),
            _ => &[],
        };
        let value = if args.list {
            json!(catalog.index)
        } else {
            json!({
                "origins": catalog.index.origins,
                "destinations": catalog.index.destinations,
                "matches": matches,
                "local_charges": catalog.local_charges,
                "remarks": catalog.remarks,
            })
        };
        serde_json::to_writer_pretty(&mut out, &value)?;
        writeln!(out)?;
        return Ok(());
    }

    render::write_choices(&mut out, "POL", &catalog.index.origins)?;
    render::write_choices(&mut out, "POD", &catalog.index.destinations)?;
    if args.list {
        return Ok(());
    }

    writeln!(out)?;
    render::write_outcome(&mut out, &outcome)?;
    writeln!(out)?;
    render::write_local_charges(
        &mut out,
        &config.local_charges_sheet,
        catalog.local_charges.as_deref(),
    )?;
    writeln!(out)?;
    render::write_remarks(&mut out, catalog.remarks.as_deref())?;

    info!("all done");
    Ok(())
}
