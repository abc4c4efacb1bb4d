pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::cep::{format_cep, CepLookup};
pub use crate::core::document::{format_document, is_valid_cnpj, is_valid_cpf, is_valid_document};
pub use crate::core::gate::{Access, GateDecision, GateRules, RouteGate};
pub use domain::model::{Address, Document, DocumentKind};
pub use utils::error::{Result, ToolkitError};
