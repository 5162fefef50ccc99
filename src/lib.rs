//! Site configuration of the ken blog.
//!
//! [`construct`] is the entry point the site generator loads; [`load`] lets a project file
//! override it.

pub mod error;
mod site;

pub use kenblog_config as config;

pub use crate::error::{Error, Result};
pub use crate::site::{construct, load};
