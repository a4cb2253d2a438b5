use serde::{Deserialize, Serialize};

use crate::error::HostError;
use crate::surface::DEFAULT_CONTEXT_LOST_MESSAGE;

/// Element ids and messages used when binding a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSettings {
    #[serde(default = "default_output_id")]
    pub output_id: String,
    #[serde(default = "default_canvas_id")]
    pub canvas_id: String,
    #[serde(default = "default_context_lost_message")]
    pub context_lost_message: String,
    /// Placed between sink arguments.
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_output_id() -> String {
    "output".to_string()
}

fn default_canvas_id() -> String {
    "canvas".to_string()
}

fn default_context_lost_message() -> String {
    DEFAULT_CONTEXT_LOST_MESSAGE.to_string()
}

fn default_separator() -> String {
    " ".to_string()
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            output_id: default_output_id(),
            canvas_id: default_canvas_id(),
            context_lost_message: default_context_lost_message(),
            separator: default_separator(),
        }
    }
}

impl HostSettings {
    /// Parse settings from JSON. Missing fields take their defaults, unknown fields are ignored.
    pub fn from_json(raw: &str) -> Result<Self, HostError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, HostError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let s = HostSettings::from_json("{}").unwrap();
        assert_eq!(s, HostSettings::default());
        assert_eq!(s.output_id, "output");
        assert_eq!(s.canvas_id, "canvas");
        assert_eq!(s.separator, " ");
        assert_eq!(s.context_lost_message, DEFAULT_CONTEXT_LOST_MESSAGE);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let s = HostSettings::from_json(r#"{"canvas_id":"gl","extra":1}"#).unwrap();
        assert_eq!(s.canvas_id, "gl");
        assert_eq!(s.output_id, "output");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = HostSettings::from_json("{output_id:").unwrap_err();
        assert!(matches!(err, HostError::Settings(_)));
    }

    #[test]
    fn survives_json_round_trip() {
        let s = HostSettings {
            output_id: "log".into(),
            ..HostSettings::default()
        };
        let back = HostSettings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }
}
