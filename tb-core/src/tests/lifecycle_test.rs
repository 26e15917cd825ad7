use clockabilly::{
    DateTime,
    Utc,
};

use super::*;
use crate::lifecycle::pending_test_case;
use crate::prelude::*;

fn ts(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

#[rstest]
#[case::absent(None, TestStageStatus::Issued)]
#[case::negative(Some(TestResult::Negative), TestStageStatus::ConfirmNegative)]
#[case::positive(Some(TestResult::Positive), TestStageStatus::ConfirmPositive)]
fn test_status_for(#[case] result: Option<TestResult>, #[case] expected: TestStageStatus) {
    assert_eq!(status_for(result), expected);
    // no memory of previous calls
    assert_eq!(status_for(result), expected);
}

#[rstest]
fn test_pending_test_case() {
    let tc = pending_test_case(&TestToCreate { title: "Title".into(), icd_code: Some("icd1234".into()) }, ts(42));

    assert_eq!(tc.id, None);
    assert_eq!(tc.title, "Title");
    assert_eq!(tc.icd_code.as_deref(), Some("icd1234"));
    assert_eq!(tc.current_status, TestStageStatus::Issued);
    assert_eq!(tc.result, None);
    assert_eq!(tc.last_change_date, ts(42));
    assert!(tc.is_pending());
}

#[rstest]
#[case::negative(TestResult::Negative, TestStageStatus::ConfirmNegative)]
#[case::positive(TestResult::Positive, TestStageStatus::ConfirmPositive)]
fn test_apply_result(#[case] result: TestResult, #[case] expected: TestStageStatus) {
    let mut tc = pending_test_case(&TestToCreate::titled("SARS-CoV2"), ts(0));
    tc.apply_result(Some(result), ts(10));

    assert_eq!(tc.result, Some(result));
    assert_eq!(tc.current_status, expected);
    assert_eq!(tc.last_change_date, ts(10));
    assert!(!tc.is_pending());
}

#[rstest]
fn test_apply_result_overrides_previous_status() {
    let mut tc = pending_test_case(&TestToCreate::titled("SARS-CoV2"), ts(0));
    tc.apply_result(Some(TestResult::Positive), ts(10));
    tc.apply_result(Some(TestResult::Negative), ts(20));

    assert_eq!(tc.current_status, TestStageStatus::ConfirmNegative);
    assert_eq!(tc.last_change_date, ts(20));

    tc.apply_result(None, ts(30));
    assert_eq!(tc.current_status, TestStageStatus::Issued);
}
