//! Confirmation messages for commands that change state.

use std::fmt;

/// Outcome line printed after a command.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let saved = OperationStatus::success("Draft saved".to_string());
        assert_eq!(saved.to_string(), "Success: Draft saved\n");

        let failed = OperationStatus::failure("Nothing to approve".to_string());
        assert!(failed.to_string().starts_with("Error:"));
    }
}
