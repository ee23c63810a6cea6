//! Default configuration values

use std::time::Duration;

/// Name of the snippet source file inside a workspace
pub const SNIPPET_FILE: &str = "main.go";

/// Name of the compiled snippet binary (platform suffix appended at runtime)
pub const BINARY_STEM: &str = "main";

/// Name of the project descriptor file inside a workspace
pub const DESCRIPTOR_FILE: &str = "go.mod";

/// Contents of the project descriptor: a standalone, dependency-free module
pub const DESCRIPTOR_CONTENT: &str = "module playground\n\ngo 1.23\n";

/// Workspace directory prefix for run operations
pub const RUN_WORKSPACE_PREFIX: &str = "gopad-run-";

/// Workspace directory prefix for format operations
pub const FMT_WORKSPACE_PREFIX: &str = "gopad-fmt-";

/// Upper bound for the compile phase
pub const BUILD_TIMEOUT: Duration = Duration::from_secs(5);

/// Upper bound for the whole build-then-run cycle, measured from the
/// start of compilation
pub const RUN_TIMEOUT: Duration = Duration::from_secs(30);

/// Name of the Go executable searched for on the PATH
pub const GO_COMMAND: &str = "go";

/// Well-known Go install locations checked when PATH search fails
pub const GO_INSTALL_LOCATIONS_UNIX: &[&str] = &[
    "/usr/local/go/bin/go",
    "/usr/bin/go",
    "/opt/homebrew/bin/go",
];

/// Well-known Go install locations on Windows
pub const GO_INSTALL_LOCATIONS_WINDOWS: &[&str] = &[
    "C:\\Program Files\\Go\\bin\\go.exe",
    "C:\\go\\bin\\go.exe",
];

/// Config file name inside the gopad config directory
pub const CONFIG_FILE: &str = "config.json";
