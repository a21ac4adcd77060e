use std::fmt;
use std::str::FromStr;

/// Time-of-day label supplied by the caller, flavouring the persona directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeContext {
    Morning,
    LunchRush,
    Evening,
    Standard,
}

impl TimeContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeContext::Morning => "morning",
            TimeContext::LunchRush => "lunch-rush",
            TimeContext::Evening => "evening",
            TimeContext::Standard => "standard",
        }
    }
}

impl FromStr for TimeContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(TimeContext::Morning),
            "lunch-rush" | "lunch_rush" => Ok(TimeContext::LunchRush),
            "evening" => Ok(TimeContext::Evening),
            "standard" => Ok(TimeContext::Standard),
            other => Err(format!(
                "Invalid time context: {}. Expected: morning, lunch-rush, evening, or standard",
                other
            )),
        }
    }
}

impl fmt::Display for TimeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
