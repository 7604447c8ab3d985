//! Command implementations

mod catalog;
mod clear_checks;
mod context;
mod dates;
mod export;
mod init;
mod reset;
mod save;
mod show;

pub use catalog::catalog;
pub use clear_checks::clear_checks;
pub use dates::dates;
pub use export::export;
pub use init::init;
pub use reset::reset;
pub use save::save;
pub use show::show;
