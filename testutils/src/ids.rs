use tb_core::ids::MockIdProvider;

// Hands out the given ids in order, wrapping around at the end
pub fn fixed_ids(ids: &[&str]) -> Box<MockIdProvider> {
    assert!(!ids.is_empty(), "fixed_ids needs at least one id to hand out");
    let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    let mut next = 0;

    let mut provider = MockIdProvider::new();
    provider.expect_next_id().returning(move || {
        let id = ids[next % ids.len()].clone();
        next += 1;
        id
    });
    Box::new(provider)
}

#[cfg(test)]
mod tests {
    use rstest::*;
    use tb_core::ids::IdProvider;

    use super::*;

    #[rstest]
    fn test_fixed_ids_wrap_around() {
        let ids = fixed_ids(&["a", "b"]);
        let handed_out: Vec<_> = (0..3).map(|_| ids.next_id()).collect();
        assert_eq!(handed_out, vec!["a", "b", "a"]);
    }

    #[rstest]
    #[should_panic(expected = "at least one id")]
    fn test_fixed_ids_empty() {
        fixed_ids(&[]);
    }
}
