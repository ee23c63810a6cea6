//! Execution report assembly
//!
//! Pure formatting logic for the human-readable report returned by a
//! build-and-run cycle. The report text is part of the contract: callers
//! and tests match on its exact section markers.

use std::path::Path;
use std::time::Duration;

/// Literal prefix of a failed compilation report
pub const COMPILE_ERROR_PREFIX: &str = "Compilation Error";

/// Banner opening every successful-build report
pub const BUILD_SUCCESS_BANNER: &str = "=== Build Success ===";

/// Header of the captured standard output section
pub const OUTPUT_HEADER: &str = "=== Output ===";

/// Header of the captured standard error section
pub const ERRORS_HEADER: &str = "=== Errors ===";

/// Notice appended when a clean run produced no output at all
pub const NO_OUTPUT_NOTICE: &str = "Program executed successfully with no output.";

/// Classified outcome of the run phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Process exited with status zero
    Success,
    /// Process exited with a non-zero status
    ExitCode(i32),
    /// Process was terminated by a signal (Unix only)
    Signal(i32),
    /// The deadline elapsed before the process finished
    TimedOut,
}

impl RunOutcome {
    /// Classify a finished run phase
    ///
    /// Timeout takes precedence over whatever exit status the forced kill
    /// produced.
    #[must_use]
    pub fn classify(timed_out: bool, code: Option<i32>, signal: Option<i32>) -> Self {
        if timed_out {
            RunOutcome::TimedOut
        } else if let Some(0) = code {
            RunOutcome::Success
        } else if let Some(code) = code {
            RunOutcome::ExitCode(code)
        } else if let Some(signal) = signal {
            RunOutcome::Signal(signal)
        } else {
            RunOutcome::Success
        }
    }
}

/// Assembled result of one build-and-run cycle
///
/// All captured text is owned (copied out of the workspace before cleanup),
/// so a report never references a directory that has already been removed.
#[derive(Debug, Clone)]
pub struct ExecutionReport {
    /// Compile phase duration
    pub compile_time: Duration,
    /// Run phase duration
    pub run_time: Duration,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error, already path-scrubbed
    pub stderr: String,
    /// Classified run outcome
    pub outcome: RunOutcome,
}

impl ExecutionReport {
    /// Render the report in its fixed section order
    #[must_use]
    pub fn render(&self) -> String {
        let mut result = format!(
            "{BUILD_SUCCESS_BANNER}\nCompilation time: {}\nExecution time: {}\n",
            format_millis(self.compile_time),
            format_millis(self.run_time),
        );

        if !self.stdout.is_empty() {
            result.push_str(&format!("\n{OUTPUT_HEADER}\n"));
            result.push_str(&self.stdout);
        }

        if !self.stderr.is_empty() {
            result.push_str(&format!("\n{ERRORS_HEADER}\n"));
            result.push_str(&self.stderr);
        }

        match self.outcome {
            RunOutcome::TimedOut => {
                result.push_str("\n\nError: Code execution timed out (30 seconds limit)");
            }
            RunOutcome::ExitCode(code) => {
                result.push_str(&format!("\n\nProgram exited with code: {code}"));
            }
            RunOutcome::Signal(signal) => {
                result.push_str(&format!("\n\nProgram terminated by signal: {signal}"));
            }
            RunOutcome::Success => {}
        }

        if self.stdout.is_empty()
            && self.stderr.is_empty()
            && self.outcome == RunOutcome::Success
        {
            result.push_str(&format!("\n{NO_OUTPUT_NOTICE}"));
        }

        result
    }
}

/// Render a compile failure report
///
/// The diagnostic text must already be path-scrubbed by the caller.
#[must_use]
pub fn compile_error_report(diagnostics: &str) -> String {
    format!("{COMPILE_ERROR_PREFIX}:\n{diagnostics}")
}

/// Remove the ephemeral workspace path from diagnostic text
///
/// Toolchain diagnostics quote absolute paths inside the workspace; the
/// directory is gone by the time the caller reads the report, so the prefix
/// is stripped and diagnostics read as if relative to the project root.
#[must_use]
pub fn scrub_workspace_path(text: &str, workspace: &Path) -> String {
    let dir = workspace.display().to_string();
    let prefixed = format!("{dir}{}", std::path::MAIN_SEPARATOR);
    text.replace(&prefixed, "").replace(&dir, "")
}

/// Format a duration rounded to whole milliseconds
fn format_millis(duration: Duration) -> String {
    let millis = (duration.as_micros() + 500) / 1000;
    format!("{millis}ms")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report(stdout: &str, stderr: &str, outcome: RunOutcome) -> ExecutionReport {
        ExecutionReport {
            compile_time: Duration::from_millis(120),
            run_time: Duration::from_millis(45),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            outcome,
        }
    }

    #[test]
    fn test_success_report_sections_in_order() {
        let text = report("hello\n", "", RunOutcome::Success).render();
        let banner = text.find(BUILD_SUCCESS_BANNER).unwrap();
        let compile = text.find("Compilation time: 120ms").unwrap();
        let run = text.find("Execution time: 45ms").unwrap();
        let output = text.find(OUTPUT_HEADER).unwrap();
        assert!(banner < compile && compile < run && run < output);
        assert!(text.contains("hello"));
        assert!(!text.contains(ERRORS_HEADER));
        assert!(!text.contains(NO_OUTPUT_NOTICE));
    }

    #[test]
    fn test_no_output_notice_on_silent_success() {
        let text = report("", "", RunOutcome::Success).render();
        assert!(text.contains(NO_OUTPUT_NOTICE));
        assert!(!text.contains(OUTPUT_HEADER));
        assert!(!text.contains(ERRORS_HEADER));
    }

    #[test]
    fn test_exit_code_line() {
        let text = report("partial\n", "", RunOutcome::ExitCode(3)).render();
        assert!(text.contains("Program exited with code: 3"));
        assert!(text.contains("partial"));
        assert!(!text.contains(NO_OUTPUT_NOTICE));
    }

    #[test]
    fn test_timeout_line() {
        let text = report("", "", RunOutcome::TimedOut).render();
        assert!(text.contains("timed out (30 seconds limit)"));
        assert!(!text.contains(NO_OUTPUT_NOTICE));
    }

    #[test]
    fn test_errors_section_included_when_stderr_nonempty() {
        let text = report("", "boom\n", RunOutcome::ExitCode(1)).render();
        assert!(text.contains(ERRORS_HEADER));
        assert!(text.contains("boom"));
    }

    #[test]
    fn test_classify_precedence() {
        assert_eq!(
            RunOutcome::classify(true, Some(0), None),
            RunOutcome::TimedOut
        );
        assert_eq!(
            RunOutcome::classify(false, Some(0), None),
            RunOutcome::Success
        );
        assert_eq!(
            RunOutcome::classify(false, Some(2), None),
            RunOutcome::ExitCode(2)
        );
        assert_eq!(
            RunOutcome::classify(false, None, Some(9)),
            RunOutcome::Signal(9)
        );
    }

    #[test]
    fn test_compile_error_report_prefix() {
        let text = compile_error_report("main.go:3:1: syntax error");
        assert!(text.starts_with("Compilation Error:\n"));
        assert!(text.contains("syntax error"));
    }

    #[test]
    fn test_scrub_removes_workspace_prefix() {
        let ws = PathBuf::from("/tmp/gopad-run-abc123");
        let raw = "/tmp/gopad-run-abc123/main.go:3:1: undefined: foo\n";
        let scrubbed = scrub_workspace_path(raw, &ws);
        assert_eq!(scrubbed, "main.go:3:1: undefined: foo\n");
        assert!(!scrubbed.contains("gopad-run-abc123"));
    }

    #[test]
    fn test_format_millis_rounds() {
        assert_eq!(format_millis(Duration::from_micros(1499)), "1ms");
        assert_eq!(format_millis(Duration::from_micros(1500)), "2ms");
        assert_eq!(format_millis(Duration::ZERO), "0ms");
    }
}
