use crate::domain::model::{Numero, OverflowPolicy};
use crate::utils::error::Result;

/// Where a combined total ends up.
pub trait Output {
    fn emit(&mut self, value: Numero) -> Result<()>;
}

pub trait ConfigProvider {
    fn overflow_policy(&self) -> OverflowPolicy;
    fn operands(&self) -> &[Numero];
}
