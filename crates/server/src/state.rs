use std::sync::Arc;

use service::entry::{repository::EntryRepository, EntryService};

/// Shared handler state. Cloned per request; the store handle inside is a pool.
#[derive(Clone)]
pub struct ServerState {
    pub entries: Arc<EntryService>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn EntryRepository>) -> Self {
        Self { entries: Arc::new(EntryService::new(repo)) }
    }
}
