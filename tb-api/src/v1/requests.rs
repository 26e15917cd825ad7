use serde::{
    Deserialize,
    Serialize,
};

use super::TestResult;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestToCreate {
    pub title: String,
    pub icd_code: Option<String>,
}

impl TestToCreate {
    pub fn titled(title: &str) -> TestToCreate {
        TestToCreate { title: title.into(), icd_code: None }
    }
}

// Plain titles are the common case coming from the frontend; `tests` is for callers that also
// want to attach an ICD code.  Both lists are concatenated in that order.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContainerRequest {
    #[serde(default)]
    pub titles: Vec<String>,

    #[serde(default)]
    pub tests: Vec<TestToCreate>,

    pub client_id: Option<String>,
}

impl CreateContainerRequest {
    pub fn requested_tests(&self) -> Vec<TestToCreate> {
        self.titles
            .iter()
            .map(|title| TestToCreate::titled(title))
            .chain(self.tests.iter().cloned())
            .collect()
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleTestUpdate {
    pub title: String,
    pub test_result: TestResult,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestRequest {
    pub write_id: String,

    #[serde(default)]
    pub tests: Vec<SingleTestUpdate>,
}
