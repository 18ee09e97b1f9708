pub mod combiner;

pub use crate::domain::model::{Numero, OverflowPolicy};
pub use crate::domain::ports::{ConfigProvider, Output};
pub use crate::utils::error::Result;
