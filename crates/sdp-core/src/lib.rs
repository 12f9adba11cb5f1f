pub mod config;
pub mod logging;

pub mod catalog;
pub mod convert;
pub mod matcher;
pub mod viewer;
