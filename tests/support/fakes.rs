//! In-memory providers standing in for STS, IAM, Secrets Manager and the
//! Kubernetes API.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;

use fetch_secrets::core::identity::IdentityProvider;
use fetch_secrets::core::secrets::SecretProvider;
use fetch_secrets::core::sink::cluster::SecretStore;
use fetch_secrets::core::tags::{Tag, TagProvider};
use fetch_secrets::error::{IdentityError, SecretError, SinkError, TagError};

/// Identity provider returning a fixed ARN.
pub struct FakeIdentity(pub String);

#[async_trait]
impl IdentityProvider for FakeIdentity {
    async fn caller_arn(&self) -> Result<String, IdentityError> {
        Ok(self.0.clone())
    }
}

/// Tag provider keyed by role name; unknown roles fail.
#[derive(Default)]
pub struct FakeTags {
    roles: HashMap<String, Vec<Tag>>,
}

impl FakeTags {
    pub fn with_role(mut self, role: &str, tags: &[(&str, &str)]) -> Self {
        let tags = tags.iter().map(|(k, v)| Tag::new(*k, *v)).collect();
        self.roles.insert(role.to_string(), tags);
        self
    }
}

#[async_trait]
impl TagProvider for FakeTags {
    async fn role_tags(&self, role: &str) -> Result<Vec<Tag>, TagError> {
        self.roles
            .get(role)
            .cloned()
            .ok_or_else(|| TagError::Provider {
                role: role.to_string(),
                message: "NoSuchEntity".to_string(),
            })
    }
}

/// Secret store keyed by reference; unknown references fail.
/// Records every reference requested, in order.
#[derive(Default)]
pub struct FakeSecrets {
    payloads: HashMap<String, Option<String>>,
    requested: Mutex<Vec<String>>,
}

impl FakeSecrets {
    pub fn with_secret(mut self, reference: &str, payload: &str) -> Self {
        self.payloads
            .insert(reference.to_string(), Some(payload.to_string()));
        self
    }

    pub fn with_binary_secret(mut self, reference: &str) -> Self {
        self.payloads.insert(reference.to_string(), None);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl SecretProvider for FakeSecrets {
    async fn secret_string(&self, reference: &str) -> Result<Option<String>, SecretError> {
        self.requested.lock().unwrap().push(reference.to_string());
        self.payloads
            .get(reference)
            .cloned()
            .ok_or_else(|| SecretError::Provider {
                reference: reference.to_string(),
                message: "ResourceNotFoundException".to_string(),
            })
    }
}

/// Single-namespace Kubernetes Secret store.
#[derive(Default)]
pub struct FakeSecretStore {
    secrets: Mutex<BTreeMap<String, Secret>>,
    writes: Mutex<usize>,
}

impl FakeSecretStore {
    pub fn data(&self, name: &str) -> Option<BTreeMap<String, ByteString>> {
        self.secrets.lock().unwrap().get(name)?.data.clone()
    }

    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

#[async_trait]
impl SecretStore for FakeSecretStore {
    fn namespace(&self) -> &str {
        "consumer"
    }

    async fn get(&self, name: &str) -> Result<Option<Secret>, SinkError> {
        Ok(self.secrets.lock().unwrap().get(name).cloned())
    }

    async fn create(&self, secret: &Secret) -> Result<Secret, SinkError> {
        let name = secret.metadata.name.clone().unwrap_or_default();
        *self.writes.lock().unwrap() += 1;
        self.secrets.lock().unwrap().insert(name, secret.clone());
        Ok(secret.clone())
    }

    async fn replace(&self, name: &str, secret: &Secret) -> Result<Secret, SinkError> {
        *self.writes.lock().unwrap() += 1;
        self.secrets
            .lock()
            .unwrap()
            .insert(name.to_string(), secret.clone());
        Ok(secret.clone())
    }
}

/// Bytes of a UTF-8 string, as stored in a Secret.
pub fn bytes(s: &str) -> ByteString {
    ByteString(s.as_bytes().to_vec())
}
