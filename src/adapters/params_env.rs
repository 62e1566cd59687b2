// SPDX-License-Identifier: MIT OR Apache-2.0

//! CI parameters environment source adapter.
//!
//! The CI server injects the parameters of a triggered build into the child
//! process as one environment variable holding a bracketed blob, e.g.
//! `[product:scylla, regions:["us-east-1","us-west-2"]]`. This adapter
//! parses that blob once into a read-only [`PropSource`].

use crate::domain::{PropError, PropKey, PropValue, Result};
use crate::ports::PropSource;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::env;

static LIST_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+):(\[[^\]]+\])").expect("valid list pattern"));

static SCALAR_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+):([^,]*)").expect("valid scalar pattern"));

/// A read-only parameter source over a CI-injected environment variable.
///
/// Scalar parameters are exposed verbatim (trimmed); list parameters are
/// validated as JSON arrays and exposed in compact JSON form. List spans are
/// extracted before the scalar pass, so a multi-item list can never leak
/// fragments into scalar matches.
///
/// # Examples
///
/// ```
/// use pipecfg::adapters::ParamsEnvSource;
/// use pipecfg::ports::PropSource;
///
/// let source = ParamsEnvSource::from_value(
///     r#"[product:scylla, regions:["us-east-1","us-west-2"]]"#,
/// ).unwrap();
///
/// assert_eq!(source.get_str("product").unwrap().unwrap().as_str(), "scylla");
/// assert_eq!(
///     source.get_str("regions").unwrap().unwrap().as_str(),
///     r#"["us-east-1","us-west-2"]"#
/// );
/// assert!(source.get_str("missing").unwrap().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ParamsEnvSource {
    /// Name of the environment variable holding the blob
    var: String,
    /// Parsed parameters
    values: HashMap<String, String>,
}

impl ParamsEnvSource {
    /// The environment variable the CI server sets by default.
    pub const DEFAULT_VAR: &'static str = "JENKINS_PARAMS";

    /// Reads the parameters blob from [`Self::DEFAULT_VAR`].
    ///
    /// An unset variable yields an empty source, not an error; a build
    /// without parameters is normal.
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(Self::DEFAULT_VAR)
    }

    /// Reads the parameters blob from the named environment variable.
    pub fn from_env_var(var: impl Into<String>) -> Result<Self> {
        let var = var.into();
        let values = match env::var(&var) {
            Ok(raw) => parse_blob(&raw)?,
            Err(_) => HashMap::new(),
        };
        Ok(ParamsEnvSource { var, values })
    }

    /// Parses a parameters blob directly, without touching the environment.
    pub fn from_value(raw: &str) -> Result<Self> {
        Ok(ParamsEnvSource {
            var: Self::DEFAULT_VAR.to_string(),
            values: parse_blob(raw)?,
        })
    }

    /// Returns the environment variable name this source reads.
    pub fn var_name(&self) -> &str {
        &self.var
    }
}

fn parse_blob(raw: &str) -> Result<HashMap<String, String>> {
    let raw = raw.trim();
    let inner = raw
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(raw);

    let mut values = HashMap::new();

    // list parameters first, removed from the text before the scalar pass
    for caps in LIST_PARAM.captures_iter(inner) {
        let key = caps[1].to_string();
        let body = &caps[2];
        let parsed: serde_json::Value =
            serde_json::from_str(body).map_err(|e| PropError::ParseError {
                message: format!("list parameter '{}' is not valid JSON: {}", key, body),
                source: Some(Box::new(e)),
            })?;
        let normalized = serde_json::to_string(&parsed).map_err(|e| PropError::ParseError {
            message: format!("list parameter '{}' cannot be re-serialized", key),
            source: Some(Box::new(e)),
        })?;
        values.insert(key, normalized);
    }
    let remainder = LIST_PARAM.replace_all(inner, "");

    for caps in SCALAR_PARAM.captures_iter(&remainder) {
        let key = caps[1].to_string();
        let value = caps[2].trim().to_string();
        values.insert(key, value);
    }

    Ok(values)
}

impl PropSource for ParamsEnvSource {
    fn name(&self) -> &str {
        "params-env"
    }

    fn get(&self, key: &PropKey) -> Result<Option<PropValue>> {
        Ok(self
            .values
            .get(key.as_str())
            .map(|v| PropValue::from(v.as_str())))
    }

    fn all_keys(&self) -> Result<Vec<PropKey>> {
        Ok(self
            .values
            .keys()
            .map(|k| PropKey::from(k.as_str()))
            .collect())
    }

    fn reload(&mut self) -> Result<()> {
        self.values = match env::var(&self.var) {
            Ok(raw) => parse_blob(&raw)?,
            Err(_) => HashMap::new(),
        };
        Ok(())
    }
}
