use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use deezer_export::{cli, config, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Opens the form when omitted
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Open the export form
    Form,

    /// Export a playlist without the form
    Export(ExportOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ExportOptions {
    /// ARL token (defaults to DEEZER_ARL)
    #[clap(long)]
    pub token: Option<String>,

    /// Playlist id or playlist URL
    #[clap(long)]
    pub playlist: String,

    /// Output file or directory (defaults to the export directory)
    #[clap(long, short)]
    pub output: Option<PathBuf>,

    /// Print the rows as a table before writing the workbook
    #[clap(long)]
    pub preview: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Skipping .env file, using defaults. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Form) {
        Command::Form => cli::form().await,
        Command::Export(opt) => cli::export(opt.token, opt.playlist, opt.output, opt.preview).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
