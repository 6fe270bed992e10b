//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for ctrl-build
#[derive(Parser, Debug)]
#[command(name = "ctrl-build")]
#[command(author, version, about = "Rewrite machine-sounding text in a chosen register")]
#[command(long_about = r#"
ctrl-build sends text to a generation model with a register-specific
instruction, scrubs the model's answer, and returns the refined text.

Run `serve` to expose the HTTP API, or `refine` to use a running server from
the terminal.

Configuration files are loaded from (in priority order):
1. CTRL_BUILD_<SECTION>__<KEY>               Environment
2. --config <path>                           Explicit config file
3. ./ctrl-build.toml                         Project-level config
4. ~/.config/ctrl-build/config.toml          Global config

Example:
  ctrl-build serve --port 3000
  ctrl-build refine --mode Academic "we did the thing and it kinda worked"
  pbpaste | ctrl-build refine --mode LOWERCASE -
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API
    Serve(ServeArgs),
    /// Refine text through a running server
    Refine(RefineArgs),
    /// List the available modes
    Modes,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Interface to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides server.port)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug)]
pub struct RefineArgs {
    /// Text to refine; `-` or omitted reads standard input
    pub text: Option<String>,

    /// Mode key, e.g. Academic or LOWERCASE
    #[arg(short, long, default_value = "Standard")]
    pub mode: String,

    /// Server base URL (overrides client.base_url)
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Access token to refine as a signed-in user
    #[arg(long, env = "CTRL_BUILD_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Print the result at once
    #[arg(long)]
    pub instant: bool,
}

impl RefineArgs {
    /// Whether the text should come from standard input.
    pub fn reads_stdin(&self) -> bool {
        matches!(self.text.as_deref(), None | Some("-"))
    }
}
