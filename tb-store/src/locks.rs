use std::collections::HashMap;
use std::sync::{
    Arc,
    Mutex,
};

use tb_core::errors::*;

// One lock per write id, held across the find/mutate/save sequence of an update so that two
// concurrent updates to the same container can't clobber each other.  Containers are never
// deleted, so neither are their locks.
#[derive(Default)]
pub struct WriteLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl WriteLocks {
    pub fn new() -> WriteLocks {
        Default::default()
    }

    pub fn get(&self, write_id: &str) -> anyhow::Result<Arc<Mutex<()>>> {
        let mut locks = self.locks.lock().map_err(|_| anyhow!("write lock table is poisoned"))?;
        Ok(locks.entry(write_id.into()).or_default().clone())
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.locks.lock().unwrap().len()
    }
}
