// src/presentation.rs
use stamp_version_engine::StampOutcome;

use crate::error::AppError;

/// The single status line for a successful run.
#[must_use]
pub fn success_line(outcome: &StampOutcome) -> String {
    if outcome.written {
        format!("Successfully updated APP_VERSION to: {}", outcome.timestamp)
    } else {
        format!(
            "Dry run: would update APP_VERSION to: {} (line {})",
            outcome.timestamp, outcome.line_number
        )
    }
}

/// The single status line for a failed run.
#[must_use]
pub fn failure_line(err: &AppError) -> String {
    format!("Error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use stamp_version_engine::error::StampError;
    use std::path::PathBuf;

    fn outcome(written: bool) -> StampOutcome {
        StampOutcome {
            timestamp: "20250630235959".parse().unwrap(),
            line_number: 8,
            previous: "const char* APP_VERSION = \"1.6.0\";".to_string(),
            replacement: "const char* APP_VERSION = \"20250630235959\";".to_string(),
            written,
        }
    }

    #[test]
    fn test_success_line() {
        assert_eq!(
            success_line(&outcome(true)),
            "Successfully updated APP_VERSION to: 20250630235959"
        );
        assert_eq!(
            success_line(&outcome(false)),
            "Dry run: would update APP_VERSION to: 20250630235959 (line 8)"
        );
    }

    #[test]
    fn test_failure_line_names_the_failure() {
        let err = AppError::from(StampError::DeclarationNotFound {
            path: PathBuf::from("src/globals.cpp"),
            declaration: "const char* APP_VERSION".to_string(),
        });
        assert_eq!(
            failure_line(&err),
            "Error: const char* APP_VERSION line not found after marker in src/globals.cpp"
        );
    }
}
