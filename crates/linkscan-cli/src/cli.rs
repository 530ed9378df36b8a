use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "linkscan",
    version,
    about = "Check links for phishing and fraud risk with a hosted AI model"
)]
pub(crate) struct Args {
    /// Settings file (defaults to ~/.linkscan/settings.json)
    #[arg(long, global = true)]
    pub(crate) settings: Option<PathBuf>,
    /// Disable colored output
    #[arg(long, global = true)]
    pub(crate) no_color: bool,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Analyze a URL (or text decoded from a QR code)
    Scan {
        url: String,
        /// Print the scan result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fetch seasonal security tips
    Tips {
        #[arg(long)]
        json: bool,
    },
    /// Show or change AI provider settings
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Subcommand, Debug)]
pub(crate) enum SettingsCommand {
    Show,
    Set(SetArgs),
}

#[derive(ClapArgs, Debug, Default)]
pub(crate) struct SetArgs {
    #[arg(long)]
    pub(crate) provider: Option<String>,
    #[arg(long)]
    pub(crate) model: Option<String>,
    /// Empty keeps the stored key
    #[arg(long)]
    pub(crate) api_key: Option<String>,
}
