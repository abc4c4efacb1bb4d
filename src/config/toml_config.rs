use crate::core::cep::{CepLookup, DEFAULT_CEP_ENDPOINT};
use crate::core::gate::{GateRules, RouteGate};
use crate::utils::error::{Result, ToolkitError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub lookup: LookupConfig,
    pub gate: GateRules,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CEP_ENDPOINT.to_string(),
            timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl TomlConfig {
    /// Loads the TOML file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML text, expanding `${VAR}` references from the environment.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ToolkitError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| ToolkitError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("lookup.endpoint", &self.lookup.endpoint)?;
        validation::validate_range("lookup.timeout_seconds", self.lookup.timeout_seconds, 1, 120)?;

        validation::validate_non_empty_string("gate.cookie_name", &self.gate.cookie_name)?;
        validation::validate_non_empty_string("gate.redirect_param", &self.gate.redirect_param)?;
        validation::validate_route_path("gate.login_path", &self.gate.login_path)?;
        for path in &self.gate.public_exact {
            validation::validate_route_path("gate.public_exact", path)?;
        }
        for prefix in &self.gate.public_prefixes {
            validation::validate_route_path("gate.public_prefixes", prefix)?;
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ToolkitError::InvalidConfigValueError {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
                reason: format!("Valid levels: {}", valid_levels.join(", ")),
            });
        }

        Ok(())
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup.timeout_seconds)
    }

    pub fn build_lookup(&self) -> Result<CepLookup> {
        CepLookup::new(self.lookup.endpoint.clone(), self.lookup_timeout())
    }

    pub fn build_gate(&self) -> RouteGate {
        RouteGate::new(self.gate.clone())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
