pub mod cli;
pub mod parser;
pub mod types;

pub use cli::ArecaCli;
pub use types::{ControllerInfo, RaidSetRecord};
