//! Snippet execution pipeline
//!
//! One [`Playground`] value is the hosting shell's handle to the engine: it
//! owns the explicit configuration object (no ambient singleton) and drives
//! one build-and-run or format cycle at a time. Every operation gets a
//! fresh workspace, so concurrent invocations of different playground
//! values never collide on the filesystem.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::defaults::{
    BUILD_TIMEOUT, FMT_WORKSPACE_PREFIX, RUN_TIMEOUT, RUN_WORKSPACE_PREFIX, SNIPPET_FILE,
};
use crate::core::global_config::GlobalConfig;
use crate::core::report::{
    compile_error_report, scrub_workspace_path, ExecutionReport, RunOutcome,
};
use crate::error::ConfigError;
use crate::infra::dirs::GopadDirs;
use crate::infra::process::run_with_deadline;
use crate::infra::toolchain;
use crate::infra::workspace::Workspace;

/// Result of a best-effort format operation
///
/// Formatting never fails from the caller's point of view; this type makes
/// the fallback path observable so tests can assert on which path was
/// taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// The toolchain rewrote the snippet
    Formatted(String),
    /// The original snippet is returned unchanged
    Unchanged {
        /// The unmodified input
        source: String,
        /// Why formatting was skipped or abandoned
        reason: String,
    },
}

impl FormatOutcome {
    /// The text a user-facing shell should display
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            FormatOutcome::Formatted(text) => text,
            FormatOutcome::Unchanged { source, .. } => source,
        }
    }

    /// Consume the outcome, yielding the display text
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            FormatOutcome::Formatted(text) => text,
            FormatOutcome::Unchanged { source, .. } => source,
        }
    }

    /// Whether the formatter actually ran to completion
    #[must_use]
    pub fn was_formatted(&self) -> bool {
        matches!(self, FormatOutcome::Formatted(_))
    }
}

/// The snippet execution engine
#[derive(Debug)]
pub struct Playground {
    dirs: GopadDirs,
    config: GlobalConfig,
}

impl Playground {
    /// Create a playground from an explicit configuration object
    #[must_use]
    pub fn new(dirs: GopadDirs, config: GlobalConfig) -> Self {
        Self { dirs, config }
    }

    /// Create a playground, loading configuration from the config dir
    pub fn load(dirs: GopadDirs) -> Result<Self, ConfigError> {
        let config = GlobalConfig::load(&dirs)?;
        Ok(Self { dirs, config })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// Get the configured toolchain path, if any
    #[must_use]
    pub fn toolchain_path(&self) -> Option<&Path> {
        self.config.go_path.as_deref()
    }

    /// Set and persist the toolchain path
    ///
    /// The path is validated with a version probe before it is accepted.
    pub fn set_toolchain_path(&mut self, path: PathBuf) -> Result<(), ConfigError> {
        if !toolchain::validate(&path) {
            return Err(ConfigError::InvalidToolchain { path });
        }

        self.config.go_path = Some(path);
        self.config.save(&self.dirs)
    }

    /// Validate a toolchain path without touching configuration
    #[must_use]
    pub fn validate_toolchain_path(path: &Path) -> bool {
        toolchain::validate(path)
    }

    /// Detect a toolchain path without touching configuration
    #[must_use]
    pub fn detect_toolchain_path() -> Option<PathBuf> {
        toolchain::detect()
    }

    /// Compile and run a snippet, returning the assembled report text
    ///
    /// Every failure mode is reported through the returned text; the
    /// workspace created for this call is removed before returning, no
    /// matter which step the pipeline terminated at.
    pub async fn run_code(&mut self, source: &str) -> String {
        // Provision
        let workspace = match Workspace::create(RUN_WORKSPACE_PREFIX) {
            Ok(ws) => ws,
            Err(e) => return e.to_string(),
        };
        tracing::debug!(workspace = %workspace.path().display(), "provisioned run workspace");

        // Materialize
        if let Err(e) = workspace.materialize(source) {
            return e.to_string();
        }

        // Resolve toolchain; the only failure mode that never attempts
        // compilation
        let Some(go) = self.resolve_toolchain() else {
            return "Error: Go toolchain not found. Configure it with 'gopad toolchain set <PATH>'."
                .to_string();
        };

        // Compile; the 30s operation deadline starts here
        let binary_name = Workspace::binary_name();
        let build = match run_with_deadline(
            &go,
            &["build", "-o", &binary_name, SNIPPET_FILE],
            workspace.path(),
            BUILD_TIMEOUT,
        )
        .await
        {
            Ok(output) => output,
            Err(e) => return format!("Error invoking go build: {e}"),
        };
        tracing::debug!(elapsed = ?build.elapsed, success = build.success(), "compile finished");

        if !build.success() {
            let mut diagnostics = scrub_workspace_path(&build.stderr, workspace.path());
            if build.timed_out {
                diagnostics.push_str("go build timed out (5 seconds limit)\n");
            }
            return compile_error_report(&diagnostics);
        }

        // Execute; bounded by whatever remains of the operation deadline
        let run_deadline = RUN_TIMEOUT
            .saturating_sub(build.elapsed)
            .max(Duration::from_millis(1));
        let run = match run_with_deadline(&workspace.binary_path(), &[], workspace.path(), run_deadline)
            .await
        {
            Ok(output) => output,
            Err(e) => return format!("Error invoking compiled program: {e}"),
        };
        tracing::debug!(elapsed = ?run.elapsed, timed_out = run.timed_out, "run finished");

        // Classify and assemble; all captured text is copied before the
        // workspace guard drops
        let report = ExecutionReport {
            compile_time: build.elapsed,
            run_time: run.elapsed,
            stdout: run.stdout,
            stderr: scrub_workspace_path(&run.stderr, workspace.path()),
            outcome: RunOutcome::classify(run.timed_out, run.code, run.signal),
        };
        report.render()
    }

    /// Format a snippet with `go fmt`, best-effort
    ///
    /// Any failure at any step falls back to the unmodified input; the
    /// reason is carried in the outcome for callers that care.
    pub async fn format_code(&mut self, source: &str) -> FormatOutcome {
        match self.try_format(source).await {
            Ok(text) => FormatOutcome::Formatted(text),
            Err(reason) => {
                tracing::debug!(%reason, "format fell back to original source");
                FormatOutcome::Unchanged {
                    source: source.to_string(),
                    reason,
                }
            }
        }
    }

    async fn try_format(&mut self, source: &str) -> Result<String, String> {
        let workspace =
            Workspace::create(FMT_WORKSPACE_PREFIX).map_err(|e| e.to_string())?;
        workspace.materialize(source).map_err(|e| e.to_string())?;

        let go = self
            .resolve_toolchain()
            .ok_or_else(|| "toolchain not configured".to_string())?;

        let fmt = run_with_deadline(&go, &["fmt", SNIPPET_FILE], workspace.path(), BUILD_TIMEOUT)
            .await
            .map_err(|e| e.to_string())?;

        if !fmt.success() {
            return Err(if fmt.timed_out {
                "go fmt timed out".to_string()
            } else {
                format!("go fmt exited with {:?}", fmt.code)
            });
        }

        workspace.read_snippet().map_err(|e| e.to_string())
    }

    /// Resolve the Go executable, persisting a freshly detected path
    ///
    /// Persistence is best-effort: a read-only config dir downgrades the
    /// cache to per-call detection rather than failing the operation.
    fn resolve_toolchain(&mut self) -> Option<PathBuf> {
        match toolchain::resolve(self.config.go_path.as_deref()) {
            toolchain::Resolution::Configured(path) => Some(path),
            toolchain::Resolution::Detected(path) => {
                self.config.go_path = Some(path.clone());
                if let Err(e) = self.config.save(&self.dirs) {
                    tracing::warn!(error = %e, "could not persist detected Go path");
                }
                Some(path)
            }
            toolchain::Resolution::Absent => None,
        }
    }
}
