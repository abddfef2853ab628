//! Form validation for task submissions.
//!
//! Validation is pure and synchronous: raw field values in, either a
//! validated [`Task`] or field-keyed [`FormErrors`] out. Nothing here touches
//! the session store or the network, so the whole contract is testable
//! without a running server.

use serde::{Deserialize, Serialize};

pub const PRIORITY_MIN: i64 = 1;
pub const PRIORITY_MAX: i64 = 10;

/// A validated task as stored in the session and rendered into the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub task: String,
    pub priority: i64,
}

/// Raw submitted fields, before any type coercion. Both fields are optional
/// strings so the validator owns every failure mode, including absent fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTaskForm {
    pub task: Option<String>,
    pub priority: Option<String>,
}

/// One error message per invalid field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    pub task: Option<String>,
    pub priority: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.task.is_none() && self.priority.is_none()
    }
}

impl RawTaskForm {
    /// Validate the submitted fields. The task text must be non-empty after
    /// trimming (the stored value keeps the submitted text as-is); the
    /// priority must parse as an integer in [1, 10].
    pub fn validate(&self) -> std::result::Result<Task, FormErrors> {
        let mut errors = FormErrors::default();

        let task = match &self.task {
            Some(text) if !text.trim().is_empty() => Some(text.clone()),
            _ => {
                errors.task = Some("This field is required.".to_string());
                None
            }
        };

        let priority = match self.priority.as_deref().map(str::trim) {
            None | Some("") => {
                errors.priority = Some("This field is required.".to_string());
                None
            }
            Some(raw) => match raw.parse::<i64>() {
                Ok(value) if (PRIORITY_MIN..=PRIORITY_MAX).contains(&value) => Some(value),
                Ok(_) => {
                    errors.priority = Some(format!(
                        "Ensure this value is between {PRIORITY_MIN} and {PRIORITY_MAX}."
                    ));
                    None
                }
                Err(_) => {
                    errors.priority = Some("Enter a whole number.".to_string());
                    None
                }
            },
        };

        match (task, priority) {
            (Some(task), Some(priority)) => Ok(Task { task, priority }),
            _ => Err(errors),
        }
    }
}
