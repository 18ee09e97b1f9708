use crate::core::{Numero, Output, OverflowPolicy};
use crate::utils::error::Result;

pub struct Combiner {
    policy: OverflowPolicy,
}

impl Combiner {
    pub fn new(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// 由 ZERO 開始依序相加，空輸入回傳 ZERO
    pub fn combine_all(&self, values: &[Numero]) -> Result<Numero> {
        let mut total = Numero::ZERO;
        for value in values {
            let next = total.combine(*value, self.policy)?;
            tracing::trace!("{} + {} = {} ({})", total, value, next, self.policy);
            total = next;
        }

        tracing::debug!(
            "Combined {} values with {} policy: {}",
            values.len(),
            self.policy,
            total
        );
        Ok(total)
    }

    pub fn run<O: Output>(&self, values: &[Numero], output: &mut O) -> Result<Numero> {
        let total = self.combine_all(values)?;
        output.emit(total)?;
        Ok(total)
    }
}

impl Default for Combiner {
    fn default() -> Self {
        Self::new(OverflowPolicy::default())
    }
}

/// Keeps every emitted line in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryOutput {
    buffer: Vec<u8>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> &str {
        std::str::from_utf8(&self.buffer).unwrap_or_default()
    }
}

impl Output for MemoryOutput {
    fn emit(&mut self, value: Numero) -> Result<()> {
        value.write_line(&mut self.buffer)?;
        Ok(())
    }
}
