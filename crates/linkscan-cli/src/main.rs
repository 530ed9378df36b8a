mod cli;
mod render;

use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use linkscan_core::{AiSettings, ScanResult};

use crate::cli::{Args, Command, SetArgs, SettingsCommand};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let path = args
        .settings
        .clone()
        .unwrap_or_else(linkscan_core::settings_path);
    let color = !args.no_color && io::stdout().is_terminal();

    match args.command {
        Command::Scan { url, json } => scan(&path, &url, json, color).await,
        Command::Tips { json } => tips(&path, json).await,
        Command::Settings(SettingsCommand::Show) => {
            show_settings(&path);
            Ok(ExitCode::SUCCESS)
        }
        Command::Settings(SettingsCommand::Set(set)) => {
            save_settings(&path, set)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_settings(path: &Path) -> AiSettings {
    linkscan_core::read_settings_from(path).with_env()
}

async fn scan(path: &Path, url: &str, json: bool, color: bool) -> Result<ExitCode> {
    let settings = load_settings(path);
    let outcome = linkscan_ai::analyze_link(&settings, url).await;

    if json {
        let failed = outcome.is_err();
        let result = match outcome {
            Ok(report) => ScanResult::success(url, report),
            Err(e) => {
                tracing::error!("analysis failed: {e}");
                ScanResult::failure(url, e)
            }
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS });
    }

    let report = outcome.with_context(|| format!("analysis of {url} failed"))?;
    print!("{}", render::render_report(url, &report, color));
    Ok(ExitCode::SUCCESS)
}

async fn tips(path: &Path, json: bool) -> Result<ExitCode> {
    let settings = load_settings(path);
    let tips = linkscan_ai::get_tips(&settings).await;
    if json {
        println!("{}", serde_json::to_string_pretty(&tips)?);
    } else {
        print!("{}", render::render_tips(&tips));
    }
    Ok(ExitCode::SUCCESS)
}

fn show_settings(path: &Path) {
    let settings = load_settings(path);
    println!("settings: {}", path.display());
    println!("provider: {}", settings.provider);
    println!("model:    {}", settings.model);
    println!("api key:  {}", settings.masked_key());
    println!("configured: {}", linkscan_core::ai_configured(&settings));
}

fn apply_set(mut settings: AiSettings, set: SetArgs) -> AiSettings {
    if let Some(provider) = set.provider {
        settings.provider = provider;
    }
    if let Some(model) = set.model {
        settings.model = model;
    }
    // Empty key means "keep existing"
    if let Some(key) = set.api_key.filter(|k| !k.is_empty()) {
        settings.api_key = key;
    }
    settings
}

fn save_settings(path: &Path, set: SetArgs) -> Result<()> {
    if set.provider.is_none() && set.model.is_none() && set.api_key.is_none() {
        bail!("nothing to change: pass --provider, --model or --api-key");
    }
    // Stored without env overrides so a one-off API_KEY never lands on disk.
    let settings = apply_set(linkscan_core::read_settings_from(path), set);
    linkscan_core::write_settings_to(path, &settings)
        .with_context(|| format!("saving {}", path.display()))?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}
