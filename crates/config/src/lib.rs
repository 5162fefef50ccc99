//! Typed configuration of the ken blog: metadata, locales, theme options and head tags.

mod config;
mod head;
mod locale;
mod map;
mod rewrite;
mod site;
mod theme;
mod validate;

pub mod path;

pub use self::config::*;
pub use self::head::*;
pub use self::locale::*;
pub use self::map::*;
pub use self::rewrite::*;
pub use self::site::*;
pub use self::theme::*;

pub type Status = status::Status;
pub type Result<T, E = Status> = std::result::Result<T, E>;
