//! Workload construction: task specifications, JSON parsing, and the
//! preset profiles used by tests and benchmarks.

pub mod presets;

use serde::{Deserialize, Serialize};

/// A (name, difficulty) input pair for the scheduler.
///
/// Difficulty is the total work the task requires; the engine rejects
/// values below 1 at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Task name, for logs and completion-order inspection.
    pub name: String,
    /// Total work the task requires.
    pub difficulty: f64,
}

impl TaskSpec {
    /// Create a task specification.
    pub fn new(name: impl Into<String>, difficulty: f64) -> Self {
        Self {
            name: name.into(),
            difficulty,
        }
    }
}

impl<S: Into<String>> From<(S, f64)> for TaskSpec {
    fn from((name, difficulty): (S, f64)) -> Self {
        Self::new(name, difficulty)
    }
}

/// Parse a workload from a JSON array of `{"name", "difficulty"}` objects.
pub fn from_json_str(input: &str) -> Result<Vec<TaskSpec>, String> {
    serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_spec_from_pair() {
        let spec = TaskSpec::from(("EvaluateEssay", 3.0));
        assert_eq!(spec, TaskSpec::new("EvaluateEssay", 3.0));
    }

    #[test]
    fn test_workload_parses_from_json() {
        let json = r#"[
            {"name": "TranscribeDebate", "difficulty": 5},
            {"name": "RenderQuiz", "difficulty": 2}
        ]"#;
        let tasks = from_json_str(json).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].name, "TranscribeDebate");
        assert_eq!(tasks[1].difficulty, 2.0);
    }

    #[test]
    fn test_malformed_workload_is_a_parse_error() {
        let err = from_json_str("[{\"name\": \"NoDifficulty\"}]").unwrap_err();
        assert!(err.starts_with("parse error"));
    }
}
