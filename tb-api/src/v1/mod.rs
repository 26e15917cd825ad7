mod containers;
mod requests;
mod views;

pub use containers::*;
pub use requests::*;
pub use views::*;
