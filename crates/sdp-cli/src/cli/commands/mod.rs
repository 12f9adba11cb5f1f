//! CLI command handlers, one file per command.

mod convert;
mod link;
mod list;
mod show;

pub use convert::run_convert;
pub use link::run_link;
pub use list::run_list;
pub use show::run_show;
