//! Configuration errors
//!
//! The simulation itself never fails: rejected gameplay transitions are
//! reported as events. The only failure surface is the level and tuning
//! handed in by the host, which is checked once before the first tick.

/// A level or tuning value that would produce a broken or unsolvable game.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("level has no platforms")]
    EmptyLevel,

    #[error("platform {index} is invalid: {reason}")]
    InvalidPlatform { index: usize, reason: String },

    #[error("goal is invalid: {reason}")]
    InvalidGoal { reason: String },

    #[error("goal at ({x}, {y}) is out of reach from every surface below it")]
    UnreachableGoal { x: f32, y: f32 },

    #[error("spawn is invalid: {reason}")]
    SpawnOutOfBounds { reason: String },

    #[error("world size must be positive, got {width}x{height}")]
    InvalidWorld { width: f32, height: f32 },

    #[error("tuning field `{field}` is invalid: {reason}")]
    InvalidTuning { field: &'static str, reason: String },

    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(err: serde_json::Error) -> Self {
        ConfigurationError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = ConfigurationError::InvalidPlatform {
            index: 2,
            reason: "width must be positive".into(),
        };
        assert_eq!(err.to_string(), "platform 2 is invalid: width must be positive");

        let err = ConfigurationError::InvalidTuning {
            field: "gravity",
            reason: "must be positive".into(),
        };
        assert!(err.to_string().contains("`gravity`"));
    }

    #[test]
    fn test_json_errors_become_parse_errors() {
        let err: ConfigurationError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ConfigurationError::Parse(_)));
    }
}
