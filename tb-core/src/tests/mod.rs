mod errors_test;
mod lifecycle_test;

use rstest::*;

use super::*;
