
use clockabilly::mock::MockUtcClock;
use mockall::predicate;
use rstest::*;
use tb_core::prelude::*;
use tb_testutils::*;
use tracing_test::traced_test;

use super::*;
