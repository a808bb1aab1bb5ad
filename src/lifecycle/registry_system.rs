use tracing::{error, info};

use super::config::RegistryConfig;
use crate::actor::{StoreActor, StoreClient};
use crate::store::RecordStore;

/// Owns the running store actor.
///
/// # Example
///
/// ```ignore
/// let system = RegistrySystem::start(&RegistryConfig::default());
/// system.client.add_record(record).await?;
/// let store = system.shutdown().await?;
/// ```
pub struct RegistrySystem {
    /// Client for interacting with the store actor.
    pub client: StoreClient,
    handle: tokio::task::JoinHandle<RecordStore>,
}

impl RegistrySystem {
    /// Spawns an actor over an empty store.
    pub fn start(config: &RegistryConfig) -> Self {
        Self::with_store(config, RecordStore::new())
    }

    pub fn with_store(config: &RegistryConfig, store: RecordStore) -> Self {
        let (actor, client) = StoreActor::new(config.channel_capacity, store);
        let handle = tokio::spawn(actor.run());
        Self { client, handle }
    }

    /// Drops this system's client and waits for the actor to finish.
    ///
    /// Clones of the client held elsewhere keep the actor alive, so drop them first.
    /// Returns the final store, or an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<RecordStore, String> {
        info!("Shutting down registry...");
        drop(self.client);

        match self.handle.await {
            Ok(store) => {
                info!("Registry shutdown complete.");
                Ok(store)
            }
            Err(e) => {
                error!("Actor task failed: {:?}", e);
                Err(format!("Actor task failed: {:?}", e))
            }
        }
    }
}
