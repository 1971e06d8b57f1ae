//! Command-line argument definitions (clap derive).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use panel_api::admin::types::{ExportStatus, RedeemCodeStatus, RedeemCodeType};

use crate::output::OutputFormat;

/// Administer the panel's redeem codes from the command line.
#[derive(Debug, Parser)]
#[command(name = "panelctl", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Panel server URL (e.g. https://panel.example.com)
    #[arg(long, global = true, env = "PANEL_SERVER")]
    pub server: Option<String>,

    /// Admin API token
    #[arg(long, global = true, env = "PANEL_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Configuration profile to use
    #[arg(short = 'p', long, global = true, env = "PANEL_PROFILE")]
    pub profile: Option<String>,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Accept invalid TLS certificates (self-signed panels)
    #[arg(short = 'k', long, global = true)]
    pub insecure: bool,

    /// Request timeout in seconds [default: 30]
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage redeem codes
    Redeem(RedeemArgs),

    /// Inspect panelctl configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── redeem ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RedeemArgs {
    #[command(subcommand)]
    pub command: RedeemCommand,
}

#[derive(Debug, Subcommand)]
pub enum RedeemCommand {
    /// List redeem codes, paginated and filterable
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = 20)]
        page_size: u32,

        /// Filter by code type
        #[arg(long = "type", value_enum)]
        code_type: Option<CodeTypeArg>,

        /// Filter by status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,

        /// Free-text search over codes
        #[arg(long)]
        search: Option<String>,
    },

    /// Show a single redeem code
    Get {
        /// Redeem code id
        id: i64,
    },

    /// Generate a batch of new redeem codes
    Generate {
        /// Number of codes to generate
        #[arg(long, default_value_t = 1)]
        count: u32,

        /// Code type
        #[arg(long = "type", value_enum)]
        code_type: CodeTypeArg,

        /// Value per code (balance amount or subscription quantity)
        #[arg(long)]
        value: f64,

        /// Subscription group id (subscription type only)
        #[arg(long)]
        group: Option<i64>,

        /// Validity window in days (subscription type only)
        #[arg(long)]
        validity_days: Option<i64>,
    },

    /// Delete a single redeem code
    Delete {
        /// Redeem code id
        id: i64,
    },

    /// Delete multiple redeem codes by id
    BatchDelete {
        /// Redeem code ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,
    },

    /// Force-expire a redeem code
    Expire {
        /// Redeem code id
        id: i64,
    },

    /// Show aggregate redeem-code statistics
    Stats,

    /// Export redeem codes as CSV
    Export {
        /// Filter by code type
        #[arg(long = "type", value_enum)]
        code_type: Option<CodeTypeArg>,

        /// Filter by status (unused is not supported by the export endpoint)
        #[arg(long, value_enum)]
        status: Option<ExportStatusArg>,

        /// Write to this file instead of stdout
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,
    },
}

// ── config / completions ────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration (token redacted)
    Show,

    /// Print the configuration file path
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

// ── Value-enum bridges to API types ─────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CodeTypeArg {
    Balance,
    Subscription,
}

impl From<CodeTypeArg> for RedeemCodeType {
    fn from(arg: CodeTypeArg) -> Self {
        match arg {
            CodeTypeArg::Balance => Self::Balance,
            CodeTypeArg::Subscription => Self::Subscription,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Active,
    Used,
    Expired,
    Unused,
}

impl From<StatusArg> for RedeemCodeStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Active => Self::Active,
            StatusArg::Used => Self::Used,
            StatusArg::Expired => Self::Expired,
            StatusArg::Unused => Self::Unused,
        }
    }
}

/// Export deliberately offers no `unused` filter; the server does not
/// support it there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportStatusArg {
    Active,
    Used,
    Expired,
}

impl From<ExportStatusArg> for ExportStatus {
    fn from(arg: ExportStatusArg) -> Self {
        match arg {
            ExportStatusArg::Active => Self::Active,
            ExportStatusArg::Used => Self::Used,
            ExportStatusArg::Expired => Self::Expired,
        }
    }
}
