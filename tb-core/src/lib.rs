#![cfg_attr(coverage, feature(coverage_attribute))]
pub mod constants;
pub mod errors;
pub mod ids;
pub mod lifecycle;
pub mod logging;

pub mod prelude {
    pub use tb_api::v1::*;

    pub use crate::constants::*;
    pub use crate::errors::{
        EmptyResult,
        NotFoundError,
    };
    pub use crate::ids::IdProvider;
    pub use crate::lifecycle::{
        TestCaseExt,
        status_for,
    };
}

#[cfg(test)]
mod tests;
