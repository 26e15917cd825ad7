#[cfg(feature = "mock")]
use mockall::automock;
use uuid::Uuid;

// Read and write ids are opaque to everything but the store; each call hands out one fresh value.
#[cfg_attr(feature = "mock", automock)]
pub trait IdProvider: Send + Sync {
    fn next_id(&self) -> String;
}

pub struct UuidIdProvider;

impl UuidIdProvider {
    pub fn boxed() -> Box<UuidIdProvider> {
        Box::new(UuidIdProvider)
    }
}

impl IdProvider for UuidIdProvider {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    fn test_uuid_ids_are_distinct() {
        let provider = UuidIdProvider::boxed();
        let (a, b) = (provider.next_id(), provider.next_id());

        assert!(!a.is_empty());
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }
}
