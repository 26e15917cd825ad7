use rocket::Responder;
use tb_api::v1::ParseTestResultError;
use tb_core::errors::is_not_found;
use tracing::*;

#[derive(Debug, Responder)]
pub enum ApiError {
    #[response(status = 400)]
    BadRequest(String),

    #[response(status = 404)]
    NotFound(String),

    #[response(status = 500)]
    ServiceError(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        if is_not_found(&e) {
            return Self::NotFound(format!("{e}"));
        }

        // anyhow's Debug impl prints the whole chain, but rocket only ever sees the
        // string, so the details have to be logged here
        error!("{e:?}");
        Self::ServiceError(format!("testbefund error: {e}"))
    }
}

impl From<ParseTestResultError> for ApiError {
    fn from(e: ParseTestResultError) -> Self {
        Self::BadRequest(format!("{e}"))
    }
}
