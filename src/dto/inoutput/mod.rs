mod section;
mod user;

pub use section::*;
pub use user::*;
