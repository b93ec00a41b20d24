pub mod config;
pub mod constants;
pub mod models;
pub mod organizer;
pub mod utils;

pub use config::Config;
pub use models::{Category, CategoryTable, PathMapping, Replacement, TableError};
pub use organizer::{Layout, Reorganizer, RunReport, Summary};
