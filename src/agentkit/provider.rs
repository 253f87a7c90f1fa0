use crate::agentkit::ZoraActionProvider;
use crate::config::{PinataConfig, PluginSettings};
use crate::plugin::Provider;
use crate::runtime::AgentRuntime;
use crate::{Error, Result};
use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;
use tracing::error;

/// Produces a fresh action provider for each invocation
pub type AgentKitClientFactory =
    Arc<dyn Fn() -> BoxFuture<'static, Result<ZoraActionProvider>> + Send + Sync>;

/// Build a [`ZoraActionProvider`] from an already loaded config
pub fn client_from_config(
    config: &PinataConfig,
    settings: &PluginSettings,
) -> Result<ZoraActionProvider> {
    ZoraActionProvider::new(config, settings).map_err(|e| {
        error!(error = %e, "Failed to initialize Zora Action Provider");
        Error::ClientInit(e.to_string())
    })
}

/// Build a [`ZoraActionProvider`] from the process environment
pub async fn get_client() -> Result<ZoraActionProvider> {
    get_client_with(&PluginSettings::default()).await
}

pub async fn get_client_with(settings: &PluginSettings) -> Result<ZoraActionProvider> {
    let config = PinataConfig::from_env()?;
    client_from_config(&config, settings)
}

/// Factory backed by [`get_client_with`]
pub fn env_client_factory(settings: PluginSettings) -> AgentKitClientFactory {
    Arc::new(move || {
        let settings = settings.clone();
        async move { get_client_with(&settings).await }.boxed()
    })
}

/// Reports whether the Zora action provider can be built
#[derive(Clone)]
pub struct AgentKitStatusProvider {
    get_client: AgentKitClientFactory,
}

impl AgentKitStatusProvider {
    pub fn new(get_client: AgentKitClientFactory) -> Self {
        Self { get_client }
    }

    pub async fn status(&self) -> String {
        match (self.get_client)().await {
            Ok(_) => "Zora Action Provider initialized successfully".to_string(),
            Err(e) => {
                error!(error = %e, "Error in Zora provider");
                format!("Error initializing Zora provider: {}", e)
            }
        }
    }
}

impl std::fmt::Debug for AgentKitStatusProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentKitStatusProvider").finish_non_exhaustive()
    }
}

#[async_trait]
impl Provider for AgentKitStatusProvider {
    fn name(&self) -> &'static str {
        "zoraActionProvider"
    }

    async fn get(&self, _runtime: &dyn AgentRuntime) -> String {
        self.status().await
    }
}
