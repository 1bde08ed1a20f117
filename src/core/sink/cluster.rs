//! Kubernetes Secret sink.
//!
//! Writes resolved pairs into the data map of a named Secret. An existing
//! Secret has its data map replaced outright; keys from earlier runs that
//! no longer resolve are dropped.

use std::collections::BTreeMap;

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::ByteString;
use kube::api::{Api, PostParams};
use tracing::info;

use crate::core::constants::{PAIR_SEPARATOR, SECRET_TYPE};
use crate::core::types::EnvPair;
use crate::error::SinkError;

/// What the sink did to the Secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Updated,
}

/// Namespaced get/create/replace access to Secrets.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Namespace this store operates in.
    fn namespace(&self) -> &str;

    /// Fetch a Secret, or `None` if it does not exist.
    async fn get(&self, name: &str) -> Result<Option<Secret>, SinkError>;

    async fn create(&self, secret: &Secret) -> Result<Secret, SinkError>;

    async fn replace(&self, name: &str, secret: &Secret) -> Result<Secret, SinkError>;
}

/// [`SecretStore`] backed by the Kubernetes API.
pub struct KubeSecrets {
    api: Api<Secret>,
    namespace: String,
}

impl KubeSecrets {
    pub fn new(client: kube::Client, namespace: &str) -> Self {
        Self {
            api: Api::namespaced(client, namespace),
            namespace: namespace.to_string(),
        }
    }

    fn error(&self, action: &'static str, name: &str, err: kube::Error) -> SinkError {
        SinkError::Store {
            action,
            namespace: self.namespace.clone(),
            name: name.to_string(),
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl SecretStore for KubeSecrets {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    async fn get(&self, name: &str) -> Result<Option<Secret>, SinkError> {
        self.api
            .get_opt(name)
            .await
            .map_err(|e| self.error("get", name, e))
    }

    async fn create(&self, secret: &Secret) -> Result<Secret, SinkError> {
        let name = secret.metadata.name.as_deref().unwrap_or_default();
        self.api
            .create(&PostParams::default(), secret)
            .await
            .map_err(|e| self.error("create", name, e))
    }

    async fn replace(&self, name: &str, secret: &Secret) -> Result<Secret, SinkError> {
        self.api
            .replace(name, &PostParams::default(), secret)
            .await
            .map_err(|e| self.error("update", name, e))
    }
}

/// Convert `KEY=VALUE` pairs into a Secret data map.
///
/// # Errors
///
/// Returns `SinkError::MalformedPair` for any pair that does not split into
/// exactly a non-empty key and a value on `=`.
pub fn build_secret_data(pairs: &[EnvPair]) -> Result<BTreeMap<String, ByteString>, SinkError> {
    pairs
        .iter()
        .map(|pair| {
            let mut parts = pair.split(PAIR_SEPARATOR);
            match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(value), None) if !key.is_empty() => {
                    Ok((key.to_string(), ByteString(value.as_bytes().to_vec())))
                }
                _ => Err(SinkError::MalformedPair(pair.clone())),
            }
        })
        .collect()
}

/// Create the Secret `name` holding `pairs`, or replace its data if it exists.
///
/// # Errors
///
/// Returns `SinkError` if a pair is malformed or the store rejects a call.
/// Malformed pairs are caught before the store is contacted.
pub async fn create_or_update<S>(
    store: &S,
    name: &str,
    pairs: &[EnvPair],
) -> Result<Outcome, SinkError>
where
    S: SecretStore + ?Sized,
{
    let data = build_secret_data(pairs)?;

    match store.get(name).await? {
        None => {
            info!(
                namespace = store.namespace(),
                name,
                keys = data.len(),
                "creating Kubernetes secret"
            );
            let secret = Secret {
                metadata: ObjectMeta {
                    name: Some(name.to_string()),
                    namespace: Some(store.namespace().to_string()),
                    ..ObjectMeta::default()
                },
                data: Some(data),
                type_: Some(SECRET_TYPE.to_string()),
                ..Secret::default()
            };
            store.create(&secret).await?;
            Ok(Outcome::Created)
        }
        Some(mut existing) => {
            info!(
                namespace = store.namespace(),
                name,
                keys = data.len(),
                "updating Kubernetes secret"
            );
            existing.data = Some(data);
            store.replace(name, &existing).await?;
            Ok(Outcome::Updated)
        }
    }
}
