use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Number;

use crate::error::SignerError;

/// Validated `{profile, subCount}` tuple, the only thing the signer takes
/// from the profile provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    pub profile: String,
    pub sub_count: u64,
}

impl ProfileRecord {
    pub fn validate(&self) -> Result<(), SignerError> {
        if self.profile.trim().is_empty() {
            return Err(SignerError::InvalidProfile("profile is empty".to_string()));
        }
        Ok(())
    }
}

/// Looks up the profile behind an external identity (a social handle, say).
/// Output is untrusted until validated.
pub trait ProfileResolver: Send + Sync {
    fn resolve(&self, identity: &str) -> Result<ProfileRecord, SignerError>;
}

/// Raw provider response. Every field is optional here so that a missing
/// field becomes a validation error instead of a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderPayload {
    pub status: Option<String>,
    pub profile: Option<String>,
    pub sub_count: Option<Number>,
}

impl ProviderPayload {
    pub fn validate(&self) -> Result<ProfileRecord, SignerError> {
        match self.status.as_deref() {
            Some("active") => {}
            Some(other) => {
                return Err(SignerError::InvalidProfile(format!("account status is {other:?}")));
            }
            None => return Err(SignerError::InvalidProfile("status is missing".to_string())),
        }

        let profile = self
            .profile
            .clone()
            .ok_or_else(|| SignerError::InvalidProfile("profile is missing".to_string()))?;

        let sub_count = match &self.sub_count {
            None => return Err(SignerError::InvalidProfile("sub_count is missing".to_string())),
            Some(n) => match n.as_u64() {
                Some(count) => count,
                None if n.as_i64().is_some() => {
                    return Err(SignerError::InvalidProfile(format!("sub_count {n} is negative")));
                }
                None => {
                    return Err(SignerError::InvalidProfile(format!("sub_count {n} is not an integer")));
                }
            },
        };

        let record = ProfileRecord { profile, sub_count };
        record.validate()?;
        Ok(record)
    }
}

/// Parses and validates one provider response body.
pub fn parse_provider_payload(body: &str) -> Result<ProfileRecord, SignerError> {
    let payload: ProviderPayload = serde_json::from_str(body)
        .map_err(|e| SignerError::InvalidProfile(format!("malformed provider payload: {e}")))?;
    payload.validate()
}

/// Resolver over a fixed identity -> payload table, loaded from a JSON
/// object such as `{"elonmusk": {"status": "active", "profile": "44196397", "sub_count": 1000}}`.
#[derive(Debug, Clone, Default)]
pub struct StaticProfileResolver {
    entries: HashMap<String, ProviderPayload>,
}

impl StaticProfileResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(raw: &str) -> Result<Self, SignerError> {
        let entries: HashMap<String, ProviderPayload> = serde_json::from_str(raw)
            .map_err(|e| SignerError::UpstreamProfileUnavailable(format!("malformed profile table: {e}")))?;
        Ok(Self { entries })
    }

    pub fn from_file(path: &Path) -> Result<Self, SignerError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SignerError::UpstreamProfileUnavailable(format!("failed reading {}: {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    pub fn insert(&mut self, identity: impl Into<String>, payload: ProviderPayload) {
        self.entries.insert(identity.into(), payload);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ProfileResolver for StaticProfileResolver {
    fn resolve(&self, identity: &str) -> Result<ProfileRecord, SignerError> {
        self.entries
            .get(identity)
            .ok_or_else(|| SignerError::UpstreamProfileUnavailable(format!("no profile data for {identity:?}")))?
            .validate()
    }
}
