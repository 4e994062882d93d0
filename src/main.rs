//! CLI entry point for tpsp.
//!
//! Wires the fixed pipeline: parse arguments, fetch the current line
//! statuses, filter by the requested service, render as a table or JSON.

use std::str::FromStr;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tpsp::error::TpspError;
use tpsp::fetch::{API_URL, BasicClient, fetch_line_statuses};
use tpsp::filter::filter_by_service;
use tpsp::model::Service;
use tpsp::output::{render_json, render_table};
use tracing_subscriber::EnvFilter;

const COPYRIGHT_INFO: &str = "
The person who associated a work with this deed has dedicated the work to the
public domain by waiving all of his or her rights to the work worldwide under
copyright law, including all related and neighboring rights, to the extent
allowed by law.

You can copy, modify, distribute and perform the work, even for commercial
purposes, all without asking permission.

AFFIRMER OFFERS THE WORK AS-IS AND MAKES NO REPRESENTATIONS OR WARRANTIES OF
ANY KIND CONCERNING THE WORK, EXPRESS, IMPLIED, STATUTORY OR OTHERWISE,
INCLUDING WITHOUT LIMITATION WARRANTIES OF TITLE, MERCHANTABILITY, FITNESS FOR
A PARTICULAR PURPOSE, NON INFRINGEMENT, OR THE ABSENCE OF LATENT OR OTHER
DEFECTS, ACCURACY, OR THE PRESENT OR ABSENCE OF ERRORS, WHETHER OR NOT
DISCOVERABLE, ALL TO THE GREATEST EXTENT PERMISSIBLE UNDER APPLICABLE LAW.

For more information, please see
<http://creativecommons.org/publicdomain/zero/1.0/>
";

const AFTER_HELP: &str = "\
Services:
    metro          Show Metro lines only
    cptm           Show CPTM lines only
    viamobilidade  Show ViaMobilidade lines only
    viaquatro      Show ViaQuatro lines only

    If no service is specified, all lines are shown.

Examples:
    $ tpsp
    # => shows the current state of all lines

    $ tpsp metro
    # => shows the current state of all Metro lines

    $ tpsp cptm --json
    # => shows the current state of all CPTM lines in JSON format

This is a Free and Open-Source Software (FOSS).
Project page: <https://github.com/caian-org/tpsp>";

#[derive(Parser)]
#[command(name = "tpsp")]
#[command(version, about = "CLI for Sao Paulo public transportation line status")]
#[command(disable_version_flag = true)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Service to show (all services when omitted)
    #[arg(value_name = "SERVICE")]
    service: Option<String>,

    /// Show the output in JSON format
    #[arg(short, long)]
    json: bool,

    /// Show the program version and exit
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    /// Show the copyright information and exit
    #[arg(long)]
    copyright: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the rendered output; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // usage errors exit 1; help and version print to stdout and exit 0
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    if cli.copyright {
        println!("{COPYRIGHT_INFO}");
        return Ok(());
    }

    let service = cli.service.as_deref().map(Service::from_str).transpose()?;

    let client = BasicClient::new()?;
    let resp = fetch_line_statuses(&client, API_URL).await?;
    if !resp.status {
        return Err(TpspError::Unsuccessful.into());
    }

    let lines = filter_by_service(resp.data, service);
    if lines.is_empty() {
        return Err(TpspError::NoLines.into());
    }

    println!();
    if cli.json {
        println!("{}", render_json(&lines)?);
    } else {
        print!("{}", render_table(&lines));
    }

    Ok(())
}
