use crate::utils::error::{NumeroError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

/// An integer quantity that is only ever combined by addition.
///
/// `+` wraps on overflow (two's complement). Use [`Numero::combine`] to pick
/// another [`OverflowPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Numero {
    num: i32,
}

impl Numero {
    pub const ZERO: Numero = Numero { num: 0 };

    pub const fn new(num: i32) -> Self {
        Self { num }
    }

    pub const fn quantity(&self) -> i32 {
        self.num
    }

    pub const fn wrapping_add(self, other: Numero) -> Numero {
        Numero::new(self.num.wrapping_add(other.num))
    }

    pub const fn saturating_add(self, other: Numero) -> Numero {
        Numero::new(self.num.saturating_add(other.num))
    }

    pub fn checked_add(self, other: Numero) -> Result<Numero> {
        self.num
            .checked_add(other.num)
            .map(Numero::new)
            .ok_or(NumeroError::Overflow {
                lhs: self.num,
                rhs: other.num,
            })
    }

    /// 依指定的溢位策略相加
    pub fn combine(self, other: Numero, policy: OverflowPolicy) -> Result<Numero> {
        match policy {
            OverflowPolicy::Wrapping => Ok(self.wrapping_add(other)),
            OverflowPolicy::Saturating => Ok(self.saturating_add(other)),
            OverflowPolicy::Checked => self.checked_add(other),
        }
    }

    /// Writes the quantity followed by a single `\n`.
    pub fn write_line<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", self.num)
    }

    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_line(&mut handle)?;
        handle.flush()
    }
}

impl From<i32> for Numero {
    fn from(num: i32) -> Self {
        Numero::new(num)
    }
}

impl From<Numero> for i32 {
    fn from(value: Numero) -> Self {
        value.num
    }
}

impl Add for Numero {
    type Output = Numero;

    fn add(self, other: Numero) -> Numero {
        self.wrapping_add(other)
    }
}

impl<'a> Add<&'a Numero> for &'a Numero {
    type Output = Numero;

    fn add(self, other: &'a Numero) -> Numero {
        self.wrapping_add(*other)
    }
}

impl Sum for Numero {
    fn sum<I: Iterator<Item = Numero>>(iter: I) -> Numero {
        iter.fold(Numero::ZERO, |acc, value| acc + value)
    }
}

impl<'a> Sum<&'a Numero> for Numero {
    fn sum<I: Iterator<Item = &'a Numero>>(iter: I) -> Numero {
        iter.copied().sum()
    }
}

impl fmt::Display for Numero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.num)
    }
}

/// How additions behave when the exact sum does not fit in `i32`.
///
/// `Saturating` is commutative but not associative near the bounds:
/// `(MAX + 1) + -1` is `MAX - 1` while `MAX + (1 + -1)` is `MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OverflowPolicy {
    #[default]
    Wrapping,
    Saturating,
    Checked,
}

impl OverflowPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverflowPolicy::Wrapping => "wrapping",
            OverflowPolicy::Saturating => "saturating",
            OverflowPolicy::Checked => "checked",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverflowPolicy {
    type Err = NumeroError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrapping" => Ok(OverflowPolicy::Wrapping),
            "saturating" => Ok(OverflowPolicy::Saturating),
            "checked" => Ok(OverflowPolicy::Checked),
            _ => Err(NumeroError::InvalidConfigValueError {
                field: "overflow_policy".to_string(),
                value: s.to_string(),
                reason: "Valid policies: wrapping, saturating, checked".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for OverflowPolicy {
    type Error = NumeroError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}
