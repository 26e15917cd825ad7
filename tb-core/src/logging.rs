use tracing_subscriber::fmt::format::FmtSpan;

use crate::errors::*;

// Service operations are instrumented, so span creation is logged to show which container a
// request touched.  Rocket's own request log goes to stdout independently of this.
pub fn setup(env_filter: &str) -> EmptyResult {
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::NEW)
        .with_target(false)
        .with_env_filter(env_filter)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("could not initialize logging: {e}"))
}
