use std::collections::HashMap;
use std::sync::{
    Mutex,
    MutexGuard,
};

use tb_core::errors::*;
use tb_core::prelude::*;
use tracing::*;

use crate::store::{
    ClientStore,
    ContainerStore,
};

err_impl! {pub StoreError,
    #[error("container {0} is missing a read or write id")]
    MissingIdentifier(String),

    #[error("read id {0} is already used by another container")]
    DuplicateReadId(String),

    // The write id itself is deliberately kept out of the message; it's a capability
    #[error("the write id of container {0} is already used by another container")]
    DuplicateWriteId(String),

    #[error("read and write ids of stored container {0} cannot change")]
    IdentifierChanged(String),

    #[error("storage id {0} was not assigned by this store")]
    UnknownStorageId(String),
}

struct ContainerTables {
    containers: HashMap<String, TestContainer>,
    by_read_id: HashMap<String, String>,
    by_write_id: HashMap<String, String>,
    next_id: u64,
}

impl ContainerTables {
    fn next_storage_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        id.to_string()
    }

    fn identifier_taken(&self, id: &str) -> bool {
        self.by_read_id.contains_key(id) || self.by_write_id.contains_key(id)
    }

    fn lookup(&self, index: &HashMap<String, String>, key: &str) -> Option<TestContainer> {
        index.get(key).and_then(|id| self.containers.get(id)).cloned()
    }
}

// A mutex-guarded stand-in for a real database.  Storage ids for containers and test cases come
// out of a single sequence, the same way an auto-generated primary key would.
pub struct InMemoryContainerStore {
    tables: Mutex<ContainerTables>,
}

impl InMemoryContainerStore {
    pub fn new() -> InMemoryContainerStore {
        InMemoryContainerStore {
            tables: Mutex::new(ContainerTables {
                containers: HashMap::new(),
                by_read_id: HashMap::new(),
                by_write_id: HashMap::new(),
                next_id: FIRST_STORAGE_ID,
            }),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.tables.lock().unwrap().containers.len()
    }

    fn tables(&self) -> anyhow::Result<MutexGuard<'_, ContainerTables>> {
        self.tables.lock().map_err(|_| anyhow!("container store mutex is poisoned"))
    }
}

impl Default for InMemoryContainerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerStore for InMemoryContainerStore {
    fn find_by_write_id(&self, write_id: &str) -> anyhow::Result<Option<TestContainer>> {
        let tables = self.tables()?;
        Ok(tables.lookup(&tables.by_write_id, write_id))
    }

    fn find_by_read_id(&self, read_id: &str) -> anyhow::Result<Option<TestContainer>> {
        let tables = self.tables()?;
        Ok(tables.lookup(&tables.by_read_id, read_id))
    }

    fn save(&self, mut container: TestContainer) -> anyhow::Result<TestContainer> {
        let mut tables = self.tables()?;
        let label = container.id.clone().unwrap_or_else(|| container.read_id.clone());

        if container.read_id.is_empty() || container.write_id.is_empty() {
            return Err(StoreError::missing_identifier(&label));
        }

        let stored_ids = container
            .id
            .as_ref()
            .and_then(|id| tables.containers.get(id))
            .map(|c| (c.read_id.clone(), c.write_id.clone()));

        let storage_id = match stored_ids {
            None if container.id.is_some() => return Err(StoreError::unknown_storage_id(&label)),
            Some((read_id, write_id)) => {
                if read_id != container.read_id || write_id != container.write_id {
                    return Err(StoreError::identifier_changed(&label));
                }
                label
            },
            None => {
                // A read id must never double as somebody else's write id (or vice versa),
                // otherwise read access to one container would grant write access to another
                if tables.identifier_taken(&container.read_id) {
                    return Err(StoreError::duplicate_read_id(&container.read_id));
                }
                if tables.identifier_taken(&container.write_id) {
                    return Err(StoreError::duplicate_write_id(&label));
                }

                let storage_id = tables.next_storage_id();
                tables.by_read_id.insert(container.read_id.clone(), storage_id.clone());
                tables.by_write_id.insert(container.write_id.clone(), storage_id.clone());
                debug!("inserted new container {storage_id}");
                storage_id
            },
        };

        container.id = Some(storage_id.clone());
        for tc in container.test_cases.iter_mut().filter(|tc| tc.id.is_none()) {
            tc.id = Some(tables.next_storage_id());
        }
        tables.containers.insert(storage_id, container.clone());

        Ok(container)
    }
}

pub struct InMemoryClientStore {
    clients: HashMap<String, Client>,
}

impl InMemoryClientStore {
    pub fn new(clients: Vec<Client>) -> InMemoryClientStore {
        InMemoryClientStore {
            clients: clients.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }
}

impl ClientStore for InMemoryClientStore {
    fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Client>> {
        Ok(self.clients.get(id).cloned())
    }
}
