use clockabilly::{
    DateTime,
    Utc,
};
use tb_api::v1::{
    TestCase,
    TestResult,
    TestStageStatus,
    TestToCreate,
};

// The stage a test is in is entirely determined by its result; there is no memory of whatever
// status the test had before, so applying the same result twice always lands in the same place.
pub fn status_for(result: Option<TestResult>) -> TestStageStatus {
    match result {
        None => TestStageStatus::Issued,
        Some(TestResult::Negative) => TestStageStatus::ConfirmNegative,
        Some(TestResult::Positive) => TestStageStatus::ConfirmPositive,
    }
}

pub fn pending_test_case(test: &TestToCreate, now: DateTime<Utc>) -> TestCase {
    TestCase {
        id: None,
        title: test.title.clone(),
        icd_code: test.icd_code.clone(),
        current_status: status_for(None),
        result: None,
        last_change_date: now,
    }
}

pub trait TestCaseExt {
    fn apply_result(&mut self, result: Option<TestResult>, now: DateTime<Utc>);
    fn is_pending(&self) -> bool;
}

impl TestCaseExt for TestCase {
    fn apply_result(&mut self, result: Option<TestResult>, now: DateTime<Utc>) {
        self.result = result;
        self.current_status = status_for(result);
        self.last_change_date = now;
    }

    fn is_pending(&self) -> bool {
        self.result.is_none()
    }
}
