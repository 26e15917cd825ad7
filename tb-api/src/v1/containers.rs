use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestResult {
    Positive,
    Negative,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestStageStatus {
    #[default]
    Issued,
    ConfirmNegative,
    ConfirmPositive,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    // Assigned by the container store the first time the container is saved
    pub id: Option<String>,
    pub title: String,
    pub icd_code: Option<String>,
    pub current_status: TestStageStatus,
    pub result: Option<TestResult>,
    pub last_change_date: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestContainer {
    pub id: Option<String>,
    pub read_id: String,
    pub write_id: String,
    pub date: DateTime<Utc>,
    pub client: Option<Client>,
    pub test_cases: Vec<TestCase>,
}

impl TestContainer {
    pub fn test_case_mut(&mut self, test_case_id: &str) -> Option<&mut TestCase> {
        self.test_cases.iter_mut().find(|tc| tc.id.as_deref() == Some(test_case_id))
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
#[error("unknown test result: {0} (expected POSITIVE or NEGATIVE)")]
pub struct ParseTestResultError(String);

impl FromStr for TestResult {
    type Err = ParseTestResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "POSITIVE" => Ok(TestResult::Positive),
            "NEGATIVE" => Ok(TestResult::Negative),
            _ => Err(ParseTestResultError(s.into())),
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestResult::Positive => write!(f, "POSITIVE"),
            TestResult::Negative => write!(f, "NEGATIVE"),
        }
    }
}
