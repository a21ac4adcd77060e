use std::fmt;

/// Caller-owned reputation value in [0, 100]. The server never persists it;
/// each turn receives the current score and answers with a delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RespectScore(u8);

impl RespectScore {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn tier(&self) -> RespectTier {
        match self.0 {
            0..=39 => RespectTier::Low,
            40..=80 => RespectTier::Neutral,
            _ => RespectTier::High,
        }
    }

    /// Clamps a proposed delta so the resulting score stays inside [0, 100].
    pub fn clamp_delta(&self, delta: i32) -> i32 {
        let projected = (self.0 as i32 + delta).clamp(Self::MIN as i32, Self::MAX as i32);
        projected - self.0 as i32
    }
}

impl Default for RespectScore {
    fn default() -> Self {
        Self(50)
    }
}

impl fmt::Display for RespectScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named band of the respect score, controlling the persona's addressing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RespectTier {
    Low,
    Neutral,
    High,
}

impl RespectTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RespectTier::Low => "low",
            RespectTier::Neutral => "neutral",
            RespectTier::High => "high",
        }
    }
}

impl fmt::Display for RespectTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
