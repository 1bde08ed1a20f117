//! Kube command.
//!
//! Resolves secrets and writes them into a Kubernetes Secret.

use tracing::info;

use crate::cli::session;
use crate::core::config::Settings;
use crate::core::pipeline::Deadline;
use crate::core::sink::cluster::{create_or_update, KubeSecrets};
use crate::error::{ConfigError, Error, Result};

/// Create or update `namespace/secret_name` with the resolved secrets.
pub fn execute(settings: &Settings, namespace: &str, secret_name: &str) -> Result<()> {
    settings.validate()?;
    let deadline = Deadline::start(settings.timeout);

    session::runtime()?.block_on(async {
        let client = deadline
            .run(async {
                kube::Client::try_default()
                    .await
                    .map_err(|e| Error::from(ConfigError::Kube(e.to_string())))
            })
            .await?;

        let secrets = session::resolve_secrets(settings, deadline).await?;
        info!(
            count = secrets.len(),
            namespace,
            name = secret_name,
            "adding secrets to Kubernetes secret"
        );

        let store = KubeSecrets::new(client, namespace);
        let outcome = deadline
            .run(async {
                create_or_update(&store, secret_name, &secrets)
                    .await
                    .map_err(Error::from)
            })
            .await?;

        info!(?outcome, namespace, name = secret_name, "Kubernetes secret written");
        Ok::<(), Error>(())
    })
}
