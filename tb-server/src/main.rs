mod errors;

use clap::Parser;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;
use tb_core::logging;
use tb_core::prelude::*;
use tb_store::{
    ServerConfig,
    TestLifecycleService,
};
use tracing::*;

use crate::errors::ApiError;

#[derive(Parser, Debug)]
struct Options {
    #[arg(short, long)]
    config_file: Option<String>,

    #[arg(long, default_value = DEFAULT_SERVER_PORT)]
    server_port: u16,

    #[arg(short, long, default_value = DEFAULT_VERBOSITY)]
    verbosity: String,
}

#[rocket::post("/container", data = "<req>")]
fn create_container(
    req: Json<CreateContainerRequest>,
    svc: &State<TestLifecycleService>,
) -> Result<Json<TestContainer>, ApiError> {
    let container = svc.create_container(&req.requested_tests(), req.client_id.as_deref())?;
    Ok(Json(container))
}

#[rocket::get("/container/<read_id>")]
fn get_container(read_id: &str, svc: &State<TestLifecycleService>) -> Result<Json<TestContainerRead>, ApiError> {
    Ok(Json(svc.get_container_view(read_id)?))
}

#[rocket::put("/container", data = "<req>")]
fn update_container(
    req: Json<UpdateTestRequest>,
    svc: &State<TestLifecycleService>,
) -> Result<Json<TestContainer>, ApiError> {
    Ok(Json(svc.update_batch(&req.write_id, &req.tests)?))
}

#[rocket::post("/testcase/<write_id>/<result>")]
fn update_next_result(write_id: &str, result: &str, svc: &State<TestLifecycleService>) -> Result<Status, ApiError> {
    let result: TestResult = result.parse()?;
    svc.update_next_result(write_id, result)?;
    Ok(Status::NoContent)
}

#[rocket::post("/testcase/<write_id>/<test_case_id>/<result>")]
fn update_single_result(
    write_id: &str,
    test_case_id: &str,
    result: &str,
    svc: &State<TestLifecycleService>,
) -> Result<Status, ApiError> {
    let result: TestResult = result.parse()?;
    svc.update_single_result(write_id, test_case_id, result)?;
    Ok(Status::NoContent)
}

fn build_rocket(svc: TestLifecycleService, port: u16) -> rocket::Rocket<rocket::Build> {
    let rkt_config = rocket::Config { port, ..Default::default() };
    rocket::custom(&rkt_config)
        .mount(
            "/",
            rocket::routes![create_container, get_container, update_container, update_next_result, update_single_result],
        )
        .manage(svc)
}

#[instrument(ret, err)]
async fn run(args: Options) -> EmptyResult {
    let config = ServerConfig::load_or_default(args.config_file.as_deref())?;
    let svc = TestLifecycleService::in_memory(&config);

    build_rocket(svc, args.server_port).launch().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> EmptyResult {
    let args = Options::parse();
    logging::setup(&args.verbosity)?;
    run(args).await
}

#[cfg(test)]
mod tests;
