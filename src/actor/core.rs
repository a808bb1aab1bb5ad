//! # Store Actor
//!
//! The store is not thread-safe on its own. Instead of wrapping it in a lock, one
//! Tokio task owns it and every other task talks to it over a channel. Requests are
//! processed sequentially, so the actor is the single writer.

use std::path::{Path, PathBuf};

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use super::error::ActorError;
use crate::codec::ParseMode;
use crate::model::{Record, Resource};
use crate::store::{AccessDecision, RecordStore, SortField, StoreError, StoreSnapshot};

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Messages understood by [`StoreActor`].
///
/// Queries reply with owned clones; borrowed views never leave the actor task.
#[derive(Debug)]
pub enum StoreRequest {
    AddRecord {
        record: Record,
        respond_to: Response<()>,
    },
    AddResource {
        resource: Resource,
        respond_to: Response<()>,
    },
    FindById {
        id: u32,
        respond_to: Response<Option<Record>>,
    },
    FindByName {
        name: String,
        respond_to: Response<Vec<Record>>,
    },
    Search {
        fragment: String,
        respond_to: Response<Vec<Record>>,
    },
    CheckAccess {
        user_id: u32,
        resource: String,
        respond_to: Response<bool>,
    },
    Decide {
        user_id: u32,
        resource: String,
        respond_to: Response<AccessDecision>,
    },
    Sort {
        field: SortField,
        respond_to: Response<()>,
    },
    Snapshot {
        respond_to: Response<StoreSnapshot>,
    },
    Save {
        path: PathBuf,
        respond_to: Response<()>,
    },
    Load {
        path: PathBuf,
        mode: ParseMode,
        respond_to: Response<()>,
    },
}

pub struct StoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    store: RecordStore,
}

impl StoreActor {
    pub fn new(buffer_size: usize, store: RecordStore) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, store };
        (actor, StoreClient::new(sender))
    }

    /// Processes requests until every [`StoreClient`] has been dropped, then hands
    /// back the store.
    pub async fn run(mut self) -> RecordStore {
        info!(size = self.store.record_count(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::AddRecord { record, respond_to } => {
                    self.store.add_record(record);
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::AddResource { resource, respond_to } => {
                    self.store.add_resource(resource);
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::FindById { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.find_by_id(id).cloned()));
                }
                StoreRequest::FindByName { name, respond_to } => {
                    let found = owned(self.store.find_by_name(&name));
                    debug!(%name, found = found.len(), "FindByName");
                    let _ = respond_to.send(Ok(found));
                }
                StoreRequest::Search { fragment, respond_to } => {
                    let found = owned(self.store.search_by_name(&fragment));
                    debug!(%fragment, found = found.len(), "Search");
                    let _ = respond_to.send(Ok(found));
                }
                StoreRequest::CheckAccess { user_id, resource, respond_to } => {
                    let result = self.store.check_access(user_id, &resource);
                    if let Err(e) = &result {
                        warn!(user_id, %resource, error = %e, "Access check failed");
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Decide { user_id, resource, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.access_decision(user_id, &resource)));
                }
                StoreRequest::Sort { field, respond_to } => {
                    self.store.sort_by_field(field);
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.snapshot()));
                }
                StoreRequest::Save { path, respond_to } => {
                    let result = self.save(&path).await;
                    if let Err(e) = &result {
                        warn!(path = %path.display(), error = %e, "Save failed");
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Load { path, mode, respond_to } => {
                    let result = self.load(&path, mode).await;
                    if let Err(e) = &result {
                        warn!(path = %path.display(), error = %e, "Load failed");
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(size = self.store.record_count(), "Shutdown");
        self.store
    }

    async fn save(&self, path: &Path) -> Result<(), StoreError> {
        let mut text = Vec::new();
        self.store.serialize(&mut text)?;
        tokio::fs::write(path, text)
            .await
            .map_err(|e| StoreError::io_at(path, e))?;
        info!(path = %path.display(), "Store saved");
        Ok(())
    }

    async fn load(&mut self, path: &Path, mode: ParseMode) -> Result<(), StoreError> {
        let text = tokio::fs::read(path)
            .await
            .map_err(|e| StoreError::io_at(path, e))?;
        self.store
            .deserialize(text.as_slice(), mode)
            .map_err(|e| e.with_path(path))
    }
}

fn owned(records: Vec<&Record>) -> Vec<Record> {
    records.into_iter().cloned().collect()
}

/// A cloneable handle for talking to a [`StoreActor`].
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> StoreRequest,
    ) -> Result<T, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ActorError::Closed)?;
        Ok(response.await.map_err(|_| ActorError::Dropped)??)
    }

    #[instrument(skip(self, record), fields(id = record.id()))]
    pub async fn add_record(&self, record: Record) -> Result<(), ActorError> {
        debug!("Sending request");
        self.request(|respond_to| StoreRequest::AddRecord { record, respond_to })
            .await
    }

    #[instrument(skip(self, resource), fields(name = resource.name()))]
    pub async fn add_resource(&self, resource: Resource) -> Result<(), ActorError> {
        debug!("Sending request");
        self.request(|respond_to| StoreRequest::AddResource { resource, respond_to })
            .await
    }

    pub async fn find_by_id(&self, id: u32) -> Result<Option<Record>, ActorError> {
        self.request(|respond_to| StoreRequest::FindById { id, respond_to })
            .await
    }

    pub async fn find_by_name(&self, name: impl Into<String>) -> Result<Vec<Record>, ActorError> {
        let name = name.into();
        self.request(|respond_to| StoreRequest::FindByName { name, respond_to })
            .await
    }

    pub async fn search_by_name(&self, fragment: impl Into<String>) -> Result<Vec<Record>, ActorError> {
        let fragment = fragment.into();
        self.request(|respond_to| StoreRequest::Search { fragment, respond_to })
            .await
    }

    #[instrument(skip(self, resource), fields(resource = %resource))]
    pub async fn check_access(&self, user_id: u32, resource: &str) -> Result<bool, ActorError> {
        let resource = resource.to_string();
        self.request(|respond_to| StoreRequest::CheckAccess { user_id, resource, respond_to })
            .await
    }

    pub async fn access_decision(&self, user_id: u32, resource: &str) -> Result<AccessDecision, ActorError> {
        let resource = resource.to_string();
        self.request(|respond_to| StoreRequest::Decide { user_id, resource, respond_to })
            .await
    }

    pub async fn sort_by_field(&self, field: SortField) -> Result<(), ActorError> {
        self.request(|respond_to| StoreRequest::Sort { field, respond_to })
            .await
    }

    pub async fn snapshot(&self) -> Result<StoreSnapshot, ActorError> {
        self.request(|respond_to| StoreRequest::Snapshot { respond_to })
            .await
    }

    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<(), ActorError> {
        let path = path.as_ref().to_path_buf();
        self.request(|respond_to| StoreRequest::Save { path, respond_to })
            .await
    }

    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub async fn load(&self, path: impl AsRef<Path>, mode: ParseMode) -> Result<(), ActorError> {
        let path = path.as_ref().to_path_buf();
        self.request(|respond_to| StoreRequest::Load { path, mode, respond_to })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_queries_and_returns_store_on_shutdown() {
        let (actor, client) = StoreActor::new(8, RecordStore::new());
        let handle = tokio::spawn(actor.run());

        client.add_record(Record::student("Nick", 1, 1, 101).unwrap()).await.unwrap();
        client.add_record(Record::teacher("Brown", 2, 3, "CS").unwrap()).await.unwrap();
        client.add_resource(Resource::new("Lab", 3).unwrap()).await.unwrap();

        assert!(!client.check_access(1, "Lab").await.unwrap());
        assert!(client.check_access(2, "Lab").await.unwrap());
        assert!(matches!(
            client.check_access(99, "Lab").await,
            Err(ActorError::Store(StoreError::NotFound(_)))
        ));
        assert_eq!(
            client.find_by_id(2).await.unwrap().map(|r| r.name().to_string()),
            Some("Brown".to_string())
        );

        drop(client);
        let store = handle.await.unwrap();
        assert_eq!(store.record_count(), 2);
        assert_eq!(store.resources().len(), 1);
    }

    #[tokio::test]
    async fn closed_actor_is_reported() {
        let (actor, client) = StoreActor::new(1, RecordStore::new());
        drop(actor);
        assert!(matches!(client.snapshot().await, Err(ActorError::Closed)));
    }
}
