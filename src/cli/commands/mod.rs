//! Command implementations

mod flags;
mod list;
mod services;
mod stats;
mod validate;

pub use flags::flags;
pub use list::list;
pub use services::services;
pub use stats::stats;
pub use validate::validate;
