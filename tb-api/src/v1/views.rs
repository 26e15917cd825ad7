use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

use super::{
    Client,
    TestCase,
    TestContainer,
    TestResult,
    TestStageStatus,
};

// Read-only projection of a container; this is what holders of the read id get to see, so it
// must never carry the write id.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TestContainerRead {
    pub uuid_read: String,
    pub date: DateTime<Utc>,
    pub client: Option<Client>,
    pub tests: Vec<TestCaseRead>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseRead {
    pub id: Option<String>,
    pub title: String,
    pub icd_code: Option<String>,
    pub current_status: TestStageStatus,
    pub infected: Option<TestResult>,
    pub last_change_date: DateTime<Utc>,
}

impl From<&TestCase> for TestCaseRead {
    fn from(tc: &TestCase) -> Self {
        TestCaseRead {
            id: tc.id.clone(),
            title: tc.title.clone(),
            icd_code: tc.icd_code.clone(),
            current_status: tc.current_status,
            infected: tc.result,
            last_change_date: tc.last_change_date,
        }
    }
}

impl From<&TestContainer> for TestContainerRead {
    fn from(container: &TestContainer) -> Self {
        TestContainerRead {
            uuid_read: container.read_id.clone(),
            date: container.date,
            client: container.client.clone(),
            tests: container.test_cases.iter().map(TestCaseRead::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    fn test_read_view_hides_write_id() {
        let container = TestContainer {
            id: Some("1".into()),
            read_id: "the-read-id".into(),
            write_id: "the-write-id".into(),
            client: Some(Client { id: "org".into(), name: "Testorganization".into() }),
            test_cases: vec![TestCase {
                title: "Test".into(),
                result: Some(TestResult::Positive),
                current_status: TestStageStatus::ConfirmPositive,
                ..Default::default()
            }],
            ..Default::default()
        };

        let view = TestContainerRead::from(&container);
        assert_eq!(view.uuid_read, "the-read-id");
        assert_eq!(view.tests[0].infected, Some(TestResult::Positive));
        assert_eq!(view.tests[0].current_status, TestStageStatus::ConfirmPositive);

        let raw = serde_json::to_string(&view).unwrap();
        assert!(raw.contains("\"uuid_read\""));
        assert!(raw.contains("\"infected\""));
        assert!(!raw.contains("the-write-id"));
    }
}
