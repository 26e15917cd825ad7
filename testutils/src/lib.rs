mod constants;
mod ids;
mod objs;

pub use constants::*;
pub use ids::*;
pub use objs::*;
