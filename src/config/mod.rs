pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "crm-toolkit")]
#[command(about = "Document validation, CEP lookup and route gating for CRM forms")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check a CPF or CNPJ; exits with 1 when invalid
    Validate { document: String },

    /// Apply the CPF/CNPJ mask
    Format { document: String },

    /// Look up an address by postal code
    Cep { code: String },

    /// Decide whether a request path passes the route gate
    Gate {
        path: String,

        #[arg(long, help = "Raw Cookie header value")]
        cookie: Option<String>,
    },

    /// Apply the currency mask, reading digits as cents
    Currency { input: String },

    /// Apply the phone mask
    Phone { input: String },
}
