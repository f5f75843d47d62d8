// src/engine/runtime.rs

use std::fmt;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::engine::core::ActivityStore;
use crate::engine::schedule::Schedule;
use crate::errors::{ConstruplanError, Result};
use crate::model::{Activity, ActivityId, NewActivity, ValidPatch};
use crate::storage::ActivityStorage;

/// Capacity of the request channel into the store runtime.
const REQUEST_BUFFER: usize = 64;

/// Requests flowing into the store runtime. Each carries its reply channel.
#[derive(Debug)]
pub enum StoreRequest {
    Create {
        activity: NewActivity,
        reply: oneshot::Sender<Result<Activity>>,
    },
    Update {
        id: ActivityId,
        patch: ValidPatch,
        reply: oneshot::Sender<Result<Activity>>,
    },
    Remove {
        id: ActivityId,
        reply: oneshot::Sender<Result<Activity>>,
    },
    GetAll {
        reply: oneshot::Sender<Vec<Activity>>,
    },
    Schedule {
        reply: oneshot::Sender<Result<Schedule>>,
    },
}

/// Single writer around [`ActivityStore`].
///
/// Requests are handled strictly one at a time. Every successful mutation is
/// persisted as a whole-collection save before the reply is sent; if the save
/// fails the in-memory collection is rolled back to what it was before the
/// request.
pub struct StoreRuntime<S: ActivityStorage> {
    store: ActivityStore,
    request_rx: mpsc::Receiver<StoreRequest>,
    storage: S,
}

impl<S: ActivityStorage> fmt::Debug for StoreRuntime<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreRuntime")
            .field("store", &self.store)
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}

impl<S: ActivityStorage + 'static> StoreRuntime<S> {
    pub fn new(store: ActivityStore, request_rx: mpsc::Receiver<StoreRequest>, storage: S) -> Self {
        Self {
            store,
            request_rx,
            storage,
        }
    }

    /// Load the collection from `storage` and spawn the runtime on Tokio.
    ///
    /// The runtime stops once every [`StoreHandle`] has been dropped.
    pub fn spawn(storage: S) -> Result<(StoreHandle, JoinHandle<()>)> {
        let activities = storage.load()?;
        info!(count = activities.len(), "loaded activities");

        let (tx, rx) = mpsc::channel(REQUEST_BUFFER);
        let runtime = Self::new(ActivityStore::new(activities), rx, storage);
        let join = tokio::spawn(runtime.run());

        Ok((StoreHandle { tx }, join))
    }

    /// Main request loop.
    pub async fn run(mut self) {
        debug!("store runtime started");

        while let Some(request) = self.request_rx.recv().await {
            self.handle(request);
        }

        debug!("store request channel closed; exiting");
    }

    fn handle(&mut self, request: StoreRequest) {
        match request {
            StoreRequest::Create { activity, reply } => {
                let result = self.mutate(|store| store.create(activity));
                let _ = reply.send(result);
            }
            StoreRequest::Update { id, patch, reply } => {
                let result = self.mutate(|store| store.update(id, patch));
                let _ = reply.send(result);
            }
            StoreRequest::Remove { id, reply } => {
                let result = self.mutate(|store| store.remove(id));
                let _ = reply.send(result);
            }
            StoreRequest::GetAll { reply } => {
                let _ = reply.send(self.store.all().to_vec());
            }
            StoreRequest::Schedule { reply } => {
                let _ = reply.send(self.store.schedule());
            }
        }
    }

    fn mutate<F>(&mut self, op: F) -> Result<Activity>
    where
        F: FnOnce(&mut ActivityStore) -> Result<Activity>,
    {
        let before = self.store.clone();
        let activity = op(&mut self.store)?;

        if let Err(err) = self.storage.save(self.store.all()) {
            warn!(error = %err, "saving activities failed; rolling back");
            self.store = before;
            return Err(err);
        }

        Ok(activity)
    }
}

/// Cloneable client for a running [`StoreRuntime`].
#[derive(Debug, Clone)]
pub struct StoreHandle {
    tx: mpsc::Sender<StoreRequest>,
}

impl StoreHandle {
    pub async fn create(&self, activity: NewActivity) -> Result<Activity> {
        self.request(|reply| StoreRequest::Create { activity, reply })
            .await?
    }

    pub async fn update(&self, id: ActivityId, patch: ValidPatch) -> Result<Activity> {
        self.request(|reply| StoreRequest::Update { id, patch, reply })
            .await?
    }

    pub async fn remove(&self, id: ActivityId) -> Result<Activity> {
        self.request(|reply| StoreRequest::Remove { id, reply })
            .await?
    }

    pub async fn all(&self) -> Result<Vec<Activity>> {
        self.request(|reply| StoreRequest::GetAll { reply }).await
    }

    pub async fn schedule(&self) -> Result<Schedule> {
        self.request(|reply| StoreRequest::Schedule { reply })
            .await?
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> StoreRequest,
    ) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(make(reply_tx))
            .await
            .map_err(|_| ConstruplanError::StoreClosed)?;
        reply_rx.await.map_err(|_| ConstruplanError::StoreClosed)
    }
}
