#[cfg(any(test, feature = "mock"))]
use mockall::automock;
use tb_api::v1::{
    Client,
    TestContainer,
};

// Persistence collaborators for the lifecycle service.  Each call is expected to be atomic on its
// own; anything spanning a find and a save is the caller's problem (see WriteLocks).

#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait ContainerStore: Send + Sync {
    fn find_by_write_id(&self, write_id: &str) -> anyhow::Result<Option<TestContainer>>;
    fn find_by_read_id(&self, read_id: &str) -> anyhow::Result<Option<TestContainer>>;

    // Upsert; the returned container has its storage ids filled in
    fn save(&self, container: TestContainer) -> anyhow::Result<TestContainer>;
}

#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait ClientStore: Send + Sync {
    fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Client>>;
}
