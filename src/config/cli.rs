use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the admin-caching binary.
#[derive(Debug, Parser)]
#[command(
    name = "admin-caching",
    version,
    about = "Compute locale-aware cache keys for admin rows"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "ADMIN_CACHING_CONFIG_FILE",
        value_name = "PATH",
        value_hint = ValueHint::FilePath
    )]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the cache key of one admin row.
    Key(KeyArgs),
    /// List registered admins and their caching policy.
    Admins(AdminsArgs),
}

#[derive(Debug, Args, Clone)]
pub struct KeyArgs {
    #[command(flatten)]
    pub overrides: SettingsOverrides,

    /// Model label of the result object, e.g. `auth.Group`.
    #[arg(long = "model", value_name = "LABEL")]
    pub model: String,

    /// Primary key of the result object.
    #[arg(long = "pk", value_name = "PK")]
    pub pk: String,

    /// Admin path to use instead of the registered one.
    #[arg(long = "admin", value_name = "PATH")]
    pub admin: Option<String>,

    /// Language to activate while computing the key.
    #[arg(long = "language", value_name = "CODE", conflicts_with = "no_language")]
    pub language: Option<String>,

    /// Compute the key with every language deactivated.
    #[arg(long = "no-language", action = clap::ArgAction::SetTrue)]
    pub no_language: bool,
}

#[derive(Debug, Args, Default, Clone)]
pub struct AdminsArgs {
    #[command(flatten)]
    pub overrides: SettingsOverrides,
}

#[derive(Debug, Args, Default, Clone)]
pub struct SettingsOverrides {
    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,

    /// Toggle internationalization.
    #[arg(
        long = "use-i18n",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub use_i18n: Option<bool>,

    /// Toggle localized formatting.
    #[arg(
        long = "use-l10n",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub use_l10n: Option<bool>,

    /// Override the default language code.
    #[arg(long = "language-code", value_name = "CODE")]
    pub language_code: Option<String>,
}

impl Command {
    pub fn overrides(&self) -> &SettingsOverrides {
        match self {
            Command::Key(args) => &args.overrides,
            Command::Admins(args) => &args.overrides,
        }
    }
}
