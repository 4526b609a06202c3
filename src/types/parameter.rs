use crate::error::ScoreError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A driving behavior dimension that can be measured and scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Speed,
    Acceleration,
    Braking,
    Cornering,
    LaneDiscipline,
    Tailgating,
    TurnSignal,
}

impl Parameter {
    pub const ALL: [Parameter; 7] = [
        Parameter::Speed,
        Parameter::Acceleration,
        Parameter::Braking,
        Parameter::Cornering,
        Parameter::LaneDiscipline,
        Parameter::Tailgating,
        Parameter::TurnSignal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Parameter::Speed => "speed",
            Parameter::Acceleration => "acceleration",
            Parameter::Braking => "braking",
            Parameter::Cornering => "cornering",
            Parameter::LaneDiscipline => "lane_discipline",
            Parameter::Tailgating => "tailgating",
            Parameter::TurnSignal => "turn_signal",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Parameter {
    type Err = ScoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Parameter::ALL
            .into_iter()
            .find(|parameter| parameter.as_str() == normalized)
            .ok_or_else(|| ScoreError::UnknownParameter(normalized.to_string()))
    }
}
