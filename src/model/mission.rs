//! Mission descriptions: what a caller asks the pipeline to evaluate.

use std::{fmt, io, path::PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Errors raised while turning caller input into a `MissionDescription`.
#[derive(Debug, thiserror::Error)]
pub enum MissionError {
    /// The payload parsed as JSON but lacks a required field or has the wrong shape.
    #[error("malformed mission description: {0}")]
    Malformed(String),

    #[error("invalid mission JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Orbit class of a mission.
///
/// The three supported classes are recognized exactly (case-sensitive).
/// Anything else is kept verbatim so the validator can reject it by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Orbit {
    Leo,
    Geo,
    Meo,
    Other(String),
}

impl Orbit {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Leo => "LEO",
            Self::Geo => "GEO",
            Self::Meo => "MEO",
            Self::Other(s) => s,
        }
    }

    /// Whether this orbit is one of the classes the validator accepts.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for Orbit {
    fn from(s: String) -> Self {
        match s.as_str() {
            "LEO" => Self::Leo,
            "GEO" => Self::Geo,
            "MEO" => Self::Meo,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for Orbit {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<Orbit> for String {
    fn from(orbit: Orbit) -> Self {
        match orbit {
            Orbit::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Orbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A proposed mission: orbit class, duration, and whatever else the caller attached.
///
/// Never mutated by the pipeline. Keys beyond `name`, `orbit`, and
/// `duration_days` are carried in `extra` and echoed back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub orbit: Orbit,

    /// May be zero or negative; the safety screen rejects those.
    pub duration_days: i64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MissionDescription {
    pub fn new(orbit: impl Into<Orbit>, duration_days: i64) -> Self {
        Self {
            name: None,
            orbit: orbit.into(),
            duration_days,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parse a loosely-typed JSON mapping, failing fast on missing or mistyped fields.
    pub fn from_value(value: Value) -> Result<Self, MissionError> {
        if !value.is_object() {
            return Err(MissionError::Malformed(format!(
                "expected a JSON object, found {}",
                kind_of(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| MissionError::Malformed(e.to_string()))
    }

    /// Parse a JSON document into a mission description.
    pub fn from_json_str(json: &str) -> Result<Self, MissionError> {
        let value: Value = serde_json::from_str(json).map_err(MissionError::InvalidJson)?;
        Self::from_value(value)
    }

    /// Short label for display: the name if present, otherwise orbit and duration.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("{name} ({} / {}d)", self.orbit, self.duration_days),
            None => format!("{} / {}d", self.orbit, self.duration_days),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn parses_minimal_mission() {
        let mission =
            MissionDescription::from_json_str(r#"{"orbit": "LEO", "duration_days": 30}"#).unwrap();
        assert_eq!(mission.orbit, Orbit::Leo);
        assert_eq!(mission.duration_days, 30);
        assert!(mission.name.is_none());
        assert!(mission.extra.is_empty());
    }

    #[test]
    fn unknown_orbit_is_kept_verbatim() {
        let mission = MissionDescription::from_value(json!({"orbit": "XYZ", "duration_days": 10}))
            .unwrap();
        assert_eq!(mission.orbit, Orbit::Other("XYZ".into()));
        assert!(!mission.orbit.is_supported());
        assert_eq!(mission.orbit.to_string(), "XYZ");
    }

    #[test]
    fn orbit_matching_is_case_sensitive() {
        assert_eq!(Orbit::from("leo"), Orbit::Other("leo".into()));
        assert!(Orbit::from("MEO").is_supported());
    }

    #[test]
    fn extra_keys_pass_through() {
        let input = json!({
            "name": "Aurora",
            "orbit": "GEO",
            "duration_days": 90,
            "payload": {"mass_kg": 420},
        });
        let mission = MissionDescription::from_value(input.clone()).unwrap();
        assert_eq!(mission.name.as_deref(), Some("Aurora"));
        assert_eq!(mission.extra["payload"], json!({"mass_kg": 420}));

        let echoed = serde_json::to_value(&mission).unwrap();
        assert_eq!(echoed, input);
    }

    #[test]
    fn missing_orbit_is_malformed() {
        let err = MissionDescription::from_value(json!({"duration_days": 10})).unwrap_err();
        match err {
            MissionError::Malformed(msg) => assert!(msg.contains("orbit")),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn missing_duration_is_malformed() {
        let err = MissionDescription::from_value(json!({"orbit": "LEO"})).unwrap_err();
        assert!(matches!(err, MissionError::Malformed(_)));
    }

    #[test]
    fn mistyped_duration_is_malformed() {
        let err = MissionDescription::from_value(json!({"orbit": "LEO", "duration_days": "ten"}))
            .unwrap_err();
        assert!(matches!(err, MissionError::Malformed(_)));
    }

    #[test]
    fn non_object_is_malformed() {
        let err = MissionDescription::from_value(json!([1, 2, 3])).unwrap_err();
        match err {
            MissionError::Malformed(msg) => assert!(msg.contains("an array")),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn broken_json_is_invalid_json() {
        let err = MissionDescription::from_json_str("{orbit: LEO").unwrap_err();
        assert!(matches!(err, MissionError::InvalidJson(_)));
    }

    #[test]
    fn label_prefers_name() {
        let mission = MissionDescription::new("LEO", 30);
        assert_eq!(mission.label(), "LEO / 30d");
        assert_eq!(mission.with_name("Aurora").label(), "Aurora (LEO / 30d)");
    }
}
