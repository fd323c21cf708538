//! Build specification and command construction.
//!
//! Pure functions only — no I/O, no process spawning. The application layer
//! turns the [`CommandSpec`] values produced here into running processes via
//! the `ProcessRunner` port.

use std::path::{Path, PathBuf};

// ── Constants ────────────────────────────────────────────────────────────────

/// Binary name used when none is configured.
pub const DEFAULT_BINARY_NAME: &str = "bin";

/// Executable suffix required on Windows-class targets.
pub const EXE_SUFFIX: &str = ".exe";

/// Default build tool program.
pub const DEFAULT_BUILD_TOOL: &str = "go";

/// Default dependency-vendoring wrapper program.
pub const DEFAULT_VENDOR_WRAPPER: &str = "godep";

// ── Target platform ──────────────────────────────────────────────────────────

/// Operating-system family that decides binary naming and the pre-build shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOs {
    Windows,
    Unix,
}

impl TargetOs {
    /// The family of the platform this crate was compiled for.
    #[must_use]
    pub fn current() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }
}

/// Apply the default name and the platform executable suffix to `name`.
///
/// The suffix check is a literal, case-sensitive `ends_with`, so calling this
/// on its own output never appends `.exe` twice.
#[must_use]
pub fn resolve_binary_name(name: &str, os: TargetOs) -> String {
    let mut bin = if name.is_empty() {
        DEFAULT_BINARY_NAME.to_string()
    } else {
        name.to_string()
    };
    if os == TargetOs::Windows && !bin.ends_with(EXE_SUFFIX) {
        bin.push_str(EXE_SUFFIX);
    }
    bin
}

// ── Command description ──────────────────────────────────────────────────────

/// A fully-resolved external command: program, arguments, working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl CommandSpec {
    /// Render the command line for log output.
    #[must_use]
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Wrap an opaque shell string in the platform command interpreter.
///
/// The string is passed through unparsed: whatever the project configures is
/// executed with the invoking user's privileges.
#[must_use]
pub fn shell_command(script: &str, cwd: &Path, os: TargetOs) -> CommandSpec {
    let (program, flag) = match os {
        TargetOs::Windows => ("cmd.exe", "/C"),
        TargetOs::Unix => ("sh", "-c"),
    };
    CommandSpec {
        program: program.to_string(),
        args: vec![flag.to_string(), script.to_string()],
        cwd: cwd.to_path_buf(),
    }
}

// ── Build specification ──────────────────────────────────────────────────────

/// Everything needed to compile a project. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSpec {
    source_dir: PathBuf,
    output_dir: PathBuf,
    binary_name: String,
    dependency_mode: bool,
    pre_build: Option<String>,
    extra_args: Vec<String>,
    tool: String,
    vendor_wrapper: String,
    os: TargetOs,
}

impl BuildSpec {
    /// Create a spec for the current platform.
    ///
    /// `binary_name` is defaulted and suffixed, `pre_build` is trimmed and
    /// dropped when blank.
    #[must_use]
    pub fn new(
        source_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        binary_name: &str,
        pre_build: &str,
    ) -> Self {
        Self::for_target(source_dir, output_dir, binary_name, pre_build, TargetOs::current())
    }

    /// Create a spec for an explicit target family.
    #[must_use]
    pub fn for_target(
        source_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        binary_name: &str,
        pre_build: &str,
        os: TargetOs,
    ) -> Self {
        let pre_build = pre_build.trim();
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            binary_name: resolve_binary_name(binary_name, os),
            dependency_mode: false,
            pre_build: (!pre_build.is_empty()).then(|| pre_build.to_string()),
            extra_args: Vec::new(),
            tool: DEFAULT_BUILD_TOOL.to_string(),
            vendor_wrapper: DEFAULT_VENDOR_WRAPPER.to_string(),
            os,
        }
    }

    /// Route the build through the dependency-vendoring wrapper.
    #[must_use]
    pub fn with_dependency_mode(mut self, enabled: bool) -> Self {
        self.dependency_mode = enabled;
        self
    }

    /// Append extra arguments to the build invocation, in order.
    #[must_use]
    pub fn with_extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Override the build tool program (default `go`).
    #[must_use]
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Override the vendoring wrapper program (default `godep`).
    #[must_use]
    pub fn with_vendor_wrapper(mut self, wrapper: impl Into<String>) -> Self {
        self.vendor_wrapper = wrapper.into();
        self
    }

    #[must_use]
    pub fn binary_name(&self) -> &str {
        &self.binary_name
    }

    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    #[must_use]
    pub fn pre_build(&self) -> Option<&str> {
        self.pre_build.as_deref()
    }

    #[must_use]
    pub fn dependency_mode(&self) -> bool {
        self.dependency_mode
    }

    /// Full path of the compiled binary.
    #[must_use]
    pub fn binary_path(&self) -> PathBuf {
        self.output_dir.join(&self.binary_name)
    }

    /// The pre-build step as a shell invocation, if one is configured.
    #[must_use]
    pub fn pre_build_command(&self) -> Option<CommandSpec> {
        self.pre_build
            .as_deref()
            .map(|script| shell_command(script, &self.source_dir, self.os))
    }

    /// The compile step: `<tool> build -o <out>/<bin> [extra...]`, prefixed
    /// with the vendoring wrapper in dependency mode.
    #[must_use]
    pub fn build_command(&self) -> CommandSpec {
        let mut argv = vec![
            self.tool.clone(),
            "build".to_string(),
            "-o".to_string(),
            self.binary_path().to_string_lossy().into_owned(),
        ];
        argv.extend(self.extra_args.iter().cloned());
        if self.dependency_mode {
            argv.insert(0, self.vendor_wrapper.clone());
        }
        let program = argv.remove(0);
        CommandSpec {
            program,
            args: argv,
            cwd: self.source_dir.clone(),
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
