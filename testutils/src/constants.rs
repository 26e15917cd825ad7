pub const TEST_NOW_TS: i64 = 1_600_000_000;
pub const TEST_CONTAINER_ID: &str = "1";
pub const TEST_CASE_ID: &str = "1234";
pub const TEST_READ_ID: &str = "the-read-id";
pub const TEST_WRITE_ID: &str = "ABCDE";
pub const TEST_TITLE: &str = "SARS-CoV2";
pub const TEST_ICD_CODE: &str = "U07.1";
pub const TEST_CLIENT_ID: &str = "12345-abcdef";
pub const TEST_CLIENT_NAME: &str = "Testorganization";
