
use rocket::http::{
    ContentType,
    Status,
};
use rocket::local::blocking::Client as LocalClient;
use rstest::*;
use serde_json::json;
use tb_testutils::*;

use super::*;
