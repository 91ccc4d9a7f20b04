//! External per-case sanity validator: a configured command invoked with
//! the case question, bounded by a timeout. Advisory only: the verdict
//! lands in provenance and never removes a case from the batch.

use std::time::Duration;

use crucible_core::models::SanityVerdict;
use crucible_core::traits::SanityValidator;
use tracing::{debug, warn};

/// Runs a configured executable once per case. Non-zero exit or timeout
/// is a failed verdict, never a crash of the run.
#[derive(Debug, Clone)]
pub struct CommandValidator {
    command: String,
    timeout: Duration,
}

impl CommandValidator {
    pub fn new(command: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            command: command.into(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl SanityValidator for CommandValidator {
    async fn check(&self, question: &str) -> SanityVerdict {
        let output = tokio::process::Command::new(&self.command)
            .arg(question)
            .kill_on_drop(true)
            .output();

        match tokio::time::timeout(self.timeout, output).await {
            Err(_) => {
                warn!(command = %self.command, "sanity validator timed out");
                SanityVerdict::failed("timeout")
            }
            Ok(Err(e)) => {
                warn!(command = %self.command, error = %e, "sanity validator failed to run");
                SanityVerdict::failed(&format!("spawn failed: {e}"))
            }
            Ok(Ok(out)) => {
                let token = String::from_utf8_lossy(&out.stdout).trim().to_string();
                let passed = out.status.success();
                debug!(passed, "sanity validator verdict");
                SanityVerdict {
                    passed,
                    result: token,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passing_command_yields_pass_with_stdout_token() {
        let validator = CommandValidator::new("true", 5);
        let verdict = validator.check("any question").await;
        assert!(verdict.passed);
    }

    #[tokio::test]
    async fn failing_command_yields_fail() {
        let validator = CommandValidator::new("false", 5);
        let verdict = validator.check("any question").await;
        assert!(!verdict.passed);
    }

    #[tokio::test]
    async fn missing_executable_is_a_failed_verdict_not_a_fault() {
        let validator = CommandValidator::new("crucible-no-such-binary", 5);
        let verdict = validator.check("any question").await;
        assert!(!verdict.passed);
        assert!(verdict.result.contains("spawn failed"));
    }
}
