#![cfg_attr(coverage, feature(coverage_attribute))]
mod config;
mod locks;
mod memory;
mod service;
mod store;

pub use crate::config::ServerConfig;
pub use crate::locks::WriteLocks;
pub use crate::memory::{
    InMemoryClientStore,
    InMemoryContainerStore,
    StoreError,
};
pub use crate::service::TestLifecycleService;
#[cfg(any(test, feature = "mock"))]
pub use crate::store::{
    MockClientStore,
    MockContainerStore,
};
pub use crate::store::{
    ClientStore,
    ContainerStore,
};

#[cfg(test)]
mod tests;
