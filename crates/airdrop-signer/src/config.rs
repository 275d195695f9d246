use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::service::AmountPolicy;

/// Overrides `signer.private_key` when set and non-empty.
pub const PRIVATE_KEY_ENV: &str = "AIRDROP_SIGNER_PRIVATE_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub signer: SignerConfig,
    #[serde(default)]
    pub amount: AmountConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
}

#[derive(Clone, Default, Deserialize)]
pub struct SignerConfig {
    /// Hex private key or an `env:VAR` reference
    #[serde(default)]
    pub private_key: String,
}

impl fmt::Debug for SignerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignerConfig")
            .field("private_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AmountConfig {
    pub per_unit: u64,
}

impl Default for AmountConfig {
    fn default() -> Self {
        Self { per_unit: 1 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResolverConfig {
    /// JSON table of provider payloads keyed by external identity
    pub profiles_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_toml(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed reading config file: {}", path.display()))?;
        Self::from_toml_str(&raw, |name| std::env::var(name).ok())
    }

    /// Parses `raw` resolving environment lookups through `env`.
    pub fn from_toml_str(raw: &str, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg: AppConfig = toml::from_str(raw).context("failed parsing config toml")?;

        // Env override (explicit) first.
        if let Some(v) = env(PRIVATE_KEY_ENV) {
            if !v.trim().is_empty() {
                cfg.signer.private_key = v;
            }
        }

        // Resolve env:VAR references.
        cfg.signer.private_key = resolve_env_ref(&cfg.signer.private_key, &env)?;

        if cfg.signer.private_key.trim().is_empty() {
            return Err(anyhow!("signer.private_key is required (or set {PRIVATE_KEY_ENV})"));
        }
        if cfg.amount.per_unit == 0 {
            return Err(anyhow!("amount.per_unit must be > 0"));
        }

        Ok(cfg)
    }

    pub fn amount_policy(&self) -> AmountPolicy {
        AmountPolicy {
            per_unit: self.amount.per_unit,
        }
    }
}

pub fn resolve_env_ref(value: &str, env: impl Fn(&str) -> Option<String>) -> Result<String> {
    const PREFIX: &str = "env:";
    if let Some(var) = value.strip_prefix(PREFIX) {
        let var = var.trim();
        if var.is_empty() {
            return Err(anyhow!("invalid env ref: {value}"));
        }
        return env(var).ok_or_else(|| anyhow!("missing env var {var} for {value}"));
    }
    Ok(value.to_string())
}
