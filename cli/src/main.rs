mod config;
mod render;

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use typedex_dex::InfoService;

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::parse();
    let service = config.load_service()?;

    let mut stdout = io::stdout().lock();
    let all_found = if config.names.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            eprintln!("Enter a Pokémon name to discover its weaknesses, strengths and counters.");
        }
        lookup_all(&service, stdin.lock().lines(), config.json, &mut stdout)?
    } else {
        let names = config.names.iter().cloned().map(Ok);
        lookup_all(&service, names, config.json, &mut stdout)?
    };

    Ok(exit_code(all_found))
}

/// Answer every non-blank name in order; returns whether all were found
fn lookup_all(
    service: &InfoService,
    names: impl IntoIterator<Item = io::Result<String>>,
    json: bool,
    out: &mut impl Write,
) -> Result<bool> {
    let mut all_found = true;
    for name in names {
        let name = name?;
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        all_found &= lookup(service, name, json, out)?;
    }
    Ok(all_found)
}

/// Print the result for one name; returns whether it was found
fn lookup(service: &InfoService, name: &str, json: bool, out: &mut impl Write) -> Result<bool> {
    match service.get_info(name) {
        Ok(info) => {
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
            } else {
                writeln!(out, "{}", render::render_text(&info))?;
            }
            out.flush()?;
            Ok(true)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Lookup failed");
            eprintln!("{} ({})", render::NOT_FOUND_MESSAGE, name);
            Ok(false)
        }
    }
}

fn exit_code(all_found: bool) -> ExitCode {
    if all_found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
