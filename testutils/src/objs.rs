use clockabilly::{
    DateTime,
    Utc,
};
use rstest::fixture;
use tb_api::v1::*;

use crate::constants::*;

pub fn test_ts(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

#[fixture]
pub fn test_client() -> Client {
    Client { id: TEST_CLIENT_ID.into(), name: TEST_CLIENT_NAME.into() }
}

// A test case the way it looks after being persisted, but before any result came in
#[fixture]
pub fn test_case(#[default(TEST_TITLE)] title: &str) -> TestCase {
    TestCase {
        id: Some(TEST_CASE_ID.into()),
        title: title.into(),
        icd_code: Some(TEST_ICD_CODE.into()),
        current_status: TestStageStatus::Issued,
        result: None,
        last_change_date: test_ts(0),
    }
}

#[fixture]
pub fn test_container(test_case: TestCase) -> TestContainer {
    TestContainer {
        id: Some(TEST_CONTAINER_ID.into()),
        read_id: TEST_READ_ID.into(),
        write_id: TEST_WRITE_ID.into(),
        date: test_ts(0),
        client: None,
        test_cases: vec![test_case],
    }
}
