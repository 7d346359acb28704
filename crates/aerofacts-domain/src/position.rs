//! Engine position labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the airframe an engine record belongs to.
///
/// At most one record per side exists for a given ad. When both sides are
/// present, LEFT sorts before RIGHT in the output table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EnginePosition {
    /// Left engine ("L", "Left", "Engine 1")
    Left,
    /// Right engine ("R", "Right", "Engine 2")
    Right,
}

impl EnginePosition {
    /// The report label used in output tables and the LLM wire format
    pub fn label(&self) -> &'static str {
        match self {
            EnginePosition::Left => "LEFT",
            EnginePosition::Right => "RIGHT",
        }
    }

    /// Parse a position from a wire or report label
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LEFT" | "L" | "ENGINE 1" => Some(EnginePosition::Left),
            "RIGHT" | "R" | "ENGINE 2" => Some(EnginePosition::Right),
            _ => None,
        }
    }
}

impl fmt::Display for EnginePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        assert_eq!(EnginePosition::parse("LEFT"), Some(EnginePosition::Left));
        assert_eq!(EnginePosition::parse("right"), Some(EnginePosition::Right));
        assert_eq!(EnginePosition::parse("Engine 2"), Some(EnginePosition::Right));
        assert_eq!(EnginePosition::parse("center"), None);
    }

    #[test]
    fn test_left_sorts_before_right() {
        assert!(EnginePosition::Left < EnginePosition::Right);
    }
}
