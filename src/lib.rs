pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::StdoutOutput, CliConfig, Settings};
pub use core::combiner::{Combiner, MemoryOutput};
pub use domain::model::{Numero, OverflowPolicy};
pub use utils::error::{NumeroError, Result};
