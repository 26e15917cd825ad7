use super::*;
use crate::errors::*;

err_impl! {FakeError,
    #[error("fake thing went wrong: {0}")]
    SomethingBroke(String),

    #[error("bad number: {0}")]
    BadNumber(i64),
}

#[rstest]
fn test_err_impl_constructors() {
    let err = FakeError::something_broke("oops");
    assert_eq!(err.to_string(), "fake thing went wrong: oops");
    assert!(matches!(err.downcast_ref::<FakeError>(), Some(FakeError::SomethingBroke(s)) if s == "oops"));

    let err = FakeError::bad_number(&7);
    assert_eq!(err.to_string(), "bad number: 7");
}

#[rstest]
fn test_is_not_found() {
    assert!(is_not_found(&NotFoundError::container_by_write_id("FOOBAR")));
    assert!(is_not_found(&NotFoundError::client("12345-abcdef").context("while creating container")));
    assert!(!is_not_found(&FakeError::something_broke("oops")));
    assert!(!is_not_found(&anyhow!("something else")));
}

#[rstest]
fn test_not_found_messages() {
    assert_eq!(NotFoundError::container_by_read_id("abc").to_string(), "no test container with read id abc");
    assert_eq!(NotFoundError::test_case("1234").to_string(), "no test case with id 1234");
}
