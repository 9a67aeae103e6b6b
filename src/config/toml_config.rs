use crate::adapters::{ChainedBlacklist, EnvBlacklist, StaticBlacklist, DEFAULT_BLACKLIST_ENV};
use crate::core::analyzer::PhoneAnalyzer;
use crate::core::signals::{AreaCodeSets, DEFAULT_SUSPICIOUS_AREA_CODES, DEFAULT_TOLL_FREE_AREA_CODES};
use crate::utils::error::{Result, SpamsenseError};
use crate::utils::validation::{validate_area_codes, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings loaded from an optional TOML file. Every section may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpamsenseConfig {
    #[serde(default)]
    pub blacklist: BlacklistConfig,
    #[serde(default)]
    pub area_codes: AreaCodeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlacklistConfig {
    #[serde(default = "default_env_var")]
    pub env_var: String,
    #[serde(default)]
    pub numbers: Vec<String>,
}

impl Default for BlacklistConfig {
    fn default() -> Self {
        Self {
            env_var: default_env_var(),
            numbers: Vec::new(),
        }
    }
}

fn default_env_var() -> String {
    DEFAULT_BLACKLIST_ENV.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaCodeConfig {
    pub suspicious: Option<Vec<String>>,
    pub toll_free: Option<Vec<String>>,
}

impl SpamsenseConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SpamsenseError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| SpamsenseError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn area_code_sets(&self) -> AreaCodeSets {
        let suspicious = match &self.area_codes.suspicious {
            Some(codes) => codes.clone(),
            None => DEFAULT_SUSPICIOUS_AREA_CODES.map(String::from).to_vec(),
        };
        let toll_free = match &self.area_codes.toll_free {
            Some(codes) => codes.clone(),
            None => DEFAULT_TOLL_FREE_AREA_CODES.map(String::from).to_vec(),
        };
        AreaCodeSets::new(suspicious, toll_free)
    }

    /// Static entries from the file plus the environment variable, re-read per call.
    pub fn blacklist_source(&self) -> ChainedBlacklist {
        ChainedBlacklist::new()
            .with(StaticBlacklist::new(&self.blacklist.numbers))
            .with(EnvBlacklist::new(self.blacklist.env_var.clone()))
    }

    pub fn build_analyzer(&self) -> PhoneAnalyzer<ChainedBlacklist> {
        PhoneAnalyzer::with_area_codes(self.blacklist_source(), self.area_code_sets())
    }
}

impl Validate for SpamsenseConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("blacklist.env_var", &self.blacklist.env_var)?;

        if let Some(codes) = &self.area_codes.suspicious {
            validate_area_codes("area_codes.suspicious", codes)?;
        }
        if let Some(codes) = &self.area_codes.toll_free {
            validate_area_codes("area_codes.toll_free", codes)?;
        }

        Ok(())
    }
}
