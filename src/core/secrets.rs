//! Secret fetching.
//!
//! Each secret reference resolves to a JSON object stored in the secret
//! store. Every entry of that object becomes one `KEY=VALUE` pair.

use std::collections::HashSet;

use async_trait::async_trait;
use serde_json::error::Category;
use serde_json::{Map, Value};
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::core::constants::PAIR_SEPARATOR;
use crate::core::types::{EnvPair, SecretReference};
use crate::error::SecretError;

/// Source of secret payloads.
#[async_trait]
pub trait SecretProvider: Send + Sync {
    /// Fetch the string payload stored at `reference`.
    ///
    /// `Ok(None)` means the secret exists but holds no string payload.
    async fn secret_string(&self, reference: &str) -> Result<Option<String>, SecretError>;
}

/// Fetch one secret and flatten it into `KEY=VALUE` pairs.
///
/// # Errors
///
/// Returns `SecretError` if the provider call fails, the secret has no
/// string payload, or the payload is not a JSON object.
pub async fn fetch_secret<P>(provider: &P, reference: &str) -> Result<Vec<EnvPair>, SecretError>
where
    P: SecretProvider + ?Sized,
{
    let payload = provider
        .secret_string(reference)
        .await?
        .map(Zeroizing::new)
        .ok_or_else(|| SecretError::EmptyPayload(reference.to_string()))?;
    parse_payload(reference, &payload)
}

/// Parse a flat JSON object payload into `KEY=VALUE` pairs, in key order.
pub fn parse_payload(reference: &str, payload: &str) -> Result<Vec<EnvPair>, SecretError> {
    let entries: Map<String, Value> =
        serde_json::from_str(payload).map_err(|e| SecretError::InvalidPayload {
            reference: reference.to_string(),
            message: describe_parse_error(&e),
        })?;

    let pairs = entries
        .iter()
        .map(|(key, value)| {
            info!(secret_name = %key, "found secret value");
            format!("{}{}{}", key, PAIR_SEPARATOR, render_value(value))
        })
        .collect();
    Ok(pairs)
}

/// Describe a payload parse failure without echoing any part of the payload.
///
/// serde_json quotes offending values in its messages, so only the error
/// category and position are kept.
fn describe_parse_error(err: &serde_json::Error) -> String {
    match err.classify() {
        Category::Data => "payload is not a JSON object".to_string(),
        Category::Syntax => format!("invalid JSON at line {} column {}", err.line(), err.column()),
        Category::Eof => "unexpected end of JSON".to_string(),
        Category::Io => "unable to read JSON".to_string(),
    }
}

/// Render a payload value as environment text.
///
/// Strings are used as-is, `null` is empty, and everything else is its
/// compact JSON form.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Fetch every reference and concatenate the results.
///
/// A failing reference is logged and skipped; it never aborts the batch.
/// Keys repeated across secrets are kept in order, so the later value wins
/// on lookup.
pub async fn resolve_all_secrets<P>(provider: &P, references: &[SecretReference]) -> Vec<EnvPair>
where
    P: SecretProvider + ?Sized,
{
    let mut resolved = Vec::new();
    let mut seen = HashSet::new();

    for reference in references {
        let pairs = match fetch_secret(provider, reference).await {
            Ok(pairs) => pairs,
            Err(e) => {
                warn!(reference = %reference, error = %e, "no valid secret value(s) found");
                continue;
            }
        };

        for pair in pairs {
            let key = pair_key(&pair).to_string();
            if !seen.insert(key.clone()) {
                warn!(
                    secret_name = %key,
                    reference = %reference,
                    "duplicate secret key; later value wins"
                );
            }
            resolved.push(pair);
        }
    }

    resolved
}

/// Key half of a `KEY=VALUE` pair.
pub fn pair_key(pair: &str) -> &str {
    pair.split_once(PAIR_SEPARATOR).map_or(pair, |(key, _)| key)
}
