use std::sync::Mutex;

use clockabilly::{
    Clockable,
    DateTime,
    Utc,
    UtcClock,
};
use tb_core::errors::*;
use tb_core::ids::UuidIdProvider;
use tb_core::lifecycle::pending_test_case;
use tb_core::prelude::*;
use tracing::*;

use crate::config::ServerConfig;
use crate::locks::WriteLocks;
use crate::memory::{
    InMemoryClientStore,
    InMemoryContainerStore,
};
use crate::store::{
    ClientStore,
    ContainerStore,
};

// The TestLifecycleService owns every state transition a test goes through: containers are
// created with all their tests ISSUED, and from then on the only thing that changes is the result
// of individual tests (and with it the status and the change timestamp).  Reads go through the
// read id, anything that mutates needs the write id.
pub struct TestLifecycleService {
    containers: Box<dyn ContainerStore>,
    clients: Box<dyn ClientStore>,
    clock: Mutex<Box<dyn Clockable + Send>>,
    ids: Box<dyn IdProvider>,
    write_locks: WriteLocks,
}

impl TestLifecycleService {
    pub fn new(
        containers: Box<dyn ContainerStore>,
        clients: Box<dyn ClientStore>,
        clock: Box<dyn Clockable + Send>,
        ids: Box<dyn IdProvider>,
    ) -> TestLifecycleService {
        TestLifecycleService {
            containers,
            clients,
            clock: Mutex::new(clock),
            ids,
            write_locks: WriteLocks::new(),
        }
    }

    pub fn in_memory(config: &ServerConfig) -> TestLifecycleService {
        TestLifecycleService::new(
            Box::new(InMemoryContainerStore::new()),
            Box::new(InMemoryClientStore::new(config.clients.clone())),
            Box::new(UtcClock),
            UuidIdProvider::boxed(),
        )
    }

    #[instrument(skip(self, tests), fields(num_tests = tests.len()))]
    pub fn create_container(&self, tests: &[TestToCreate], client_id: Option<&str>) -> anyhow::Result<TestContainer> {
        // Resolve the client first so that we don't burn any ids on a request that's going to fail
        let client = match client_id {
            Some(id) => Some(self.clients.find_by_id(id)?.ok_or_else(|| NotFoundError::client(id))?),
            None => None,
        };

        let now = self.now()?;
        let test_cases = tests.iter().map(|t| pending_test_case(t, now)).collect();

        let read_id = self.ids.next_id();
        let write_id = self.ids.next_id();
        ensure!(!read_id.is_empty() && !write_id.is_empty(), "id provider returned an empty id");
        if read_id == write_id {
            warn!("id provider returned the same value for read and write id of container {read_id}");
        }

        let container = self.containers.save(TestContainer {
            id: None,
            read_id,
            write_id,
            date: now,
            client,
            test_cases,
        })?;

        info!("created test container {} with {} tests", container.read_id, container.test_cases.len());
        Ok(container)
    }

    #[instrument(skip(self))]
    pub fn get_container(&self, read_id: &str) -> anyhow::Result<TestContainer> {
        self.containers
            .find_by_read_id(read_id)?
            .ok_or_else(|| NotFoundError::container_by_read_id(read_id))
    }

    pub fn get_container_view(&self, read_id: &str) -> anyhow::Result<TestContainerRead> {
        Ok(TestContainerRead::from(&self.get_container(read_id)?))
    }

    #[instrument(skip(self, write_id))]
    pub fn update_single_result(
        &self,
        write_id: &str,
        test_case_id: &str,
        result: TestResult,
    ) -> anyhow::Result<TestContainer> {
        self.update_with(write_id, |container, now| {
            let tc = container
                .test_case_mut(test_case_id)
                .ok_or_else(|| NotFoundError::test_case(test_case_id))?;
            tc.apply_result(Some(result), now);
            Ok(())
        })
    }

    // Callers that only hold the write id (and not the individual test case ids) get the next
    // test that doesn't have a result yet; once everything has a result, the first test is
    // overwritten.
    #[instrument(skip(self, write_id))]
    pub fn update_next_result(&self, write_id: &str, result: TestResult) -> anyhow::Result<TestContainer> {
        self.update_with(write_id, |container, now| {
            let idx = container.test_cases.iter().position(|tc| tc.is_pending()).unwrap_or(0);
            let read_id = container.read_id.clone();
            let tc = container
                .test_cases
                .get_mut(idx)
                .ok_or_else(|| NotFoundError::empty_container(&read_id))?;
            tc.apply_result(Some(result), now);
            Ok(())
        })
    }

    // Each update goes to the first test case with a matching title that hasn't already been
    // claimed by an earlier entry in the same batch.  Entries that don't match anything are
    // skipped, not rejected.
    #[instrument(skip_all, fields(num_updates = updates.len()))]
    pub fn update_batch(&self, write_id: &str, updates: &[SingleTestUpdate]) -> anyhow::Result<TestContainer> {
        self.update_with(write_id, |container, now| {
            let mut matched = vec![false; container.test_cases.len()];
            for update in updates {
                let Some(idx) =
                    (0..matched.len()).find(|&i| !matched[i] && container.test_cases[i].title == update.title)
                else {
                    debug!("no unmatched test case titled {:?} in container {}, skipping", update.title, container.read_id);
                    continue;
                };

                matched[idx] = true;
                container.test_cases[idx].apply_result(Some(update.test_result), now);
            }
            Ok(())
        })
    }

    fn update_with<F>(&self, write_id: &str, f: F) -> anyhow::Result<TestContainer>
    where
        F: FnOnce(&mut TestContainer, DateTime<Utc>) -> EmptyResult,
    {
        // Only hand out locks for write ids that actually exist, otherwise garbage requests would
        // grow the lock table forever.  The container is re-read once we hold the lock.
        self.find_for_write(write_id)?;
        let lock = self.write_locks.get(write_id)?;
        let _guard = lock.lock().map_err(|_| anyhow!("container write lock is poisoned"))?;

        let mut container = self.find_for_write(write_id)?;
        let now = self.now()?;
        f(&mut container, now)?;

        let container = self.containers.save(container)?;
        info!("updated test container {}", container.read_id);
        Ok(container)
    }

    fn find_for_write(&self, write_id: &str) -> anyhow::Result<TestContainer> {
        self.containers
            .find_by_write_id(write_id)?
            .ok_or_else(|| NotFoundError::container_by_write_id(write_id))
    }

    fn now(&self) -> anyhow::Result<DateTime<Utc>> {
        let clock = self.clock.lock().map_err(|_| anyhow!("clock mutex is poisoned"))?;
        Ok(clock.now())
    }
}
