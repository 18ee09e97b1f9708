use crate::core::{Numero, Output};
use crate::utils::error::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutOutput;

impl StdoutOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for StdoutOutput {
    fn emit(&mut self, value: Numero) -> Result<()> {
        value.print()?;
        Ok(())
    }
}
