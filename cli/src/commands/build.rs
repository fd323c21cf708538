//! `hotswap build` — run one pre-build + build cycle.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::application::Builder;
use crate::application::ports::{ProcessRunner, ProgressReporter};
use crate::domain::{BuildConfig, BuildError};
use crate::infra::StdProcessRunner;
use crate::output::{StderrEchoReporter, TerminalReporter, json};

/// Arguments for the build command. Unset flags fall back to `hotswap.yaml`.
#[derive(Args, Default)]
pub struct BuildArgs {
    /// Directory to build in
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Directory to write the binary to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Name of the generated binary
    #[arg(long, short)]
    pub bin: Option<String>,

    /// Build through the dependency-vendoring wrapper
    #[arg(long)]
    pub godep: bool,

    /// Shell command to run before building
    #[arg(long)]
    pub pre_build: Option<String>,

    /// Extra arguments passed to the build tool
    #[arg(last = true)]
    pub build_args: Vec<String>,
}

impl BuildArgs {
    /// Overlay the flags that were given onto the configured build settings.
    #[must_use]
    pub fn apply(&self, base: &BuildConfig) -> BuildConfig {
        let mut cfg = base.clone();
        if let Some(path) = &self.path {
            cfg.path.clone_from(path);
        }
        if let Some(dir) = &self.output_dir {
            cfg.output_dir.clone_from(dir);
        }
        if let Some(bin) = &self.bin {
            cfg.bin.clone_from(bin);
        }
        if let Some(cmd) = &self.pre_build {
            cfg.pre_build.clone_from(cmd);
        }
        if !self.build_args.is_empty() {
            cfg.build_args.clone_from(&self.build_args);
        }
        cfg.godep |= self.godep;
        cfg
    }
}

#[derive(Serialize)]
struct BuildSummary {
    binary: String,
    path: String,
}

/// Machine-readable code for a build failure.
#[must_use]
pub fn error_code(err: &BuildError) -> &'static str {
    match err {
        BuildError::PreBuild { .. } => "PRE_BUILD_FAILED",
        BuildError::Compile { .. } => "BUILD_FAILED",
        BuildError::Launch { .. } => "BUILD_LAUNCH_FAILED",
    }
}

/// Run the build command.
///
/// # Errors
///
/// Returns an error only if JSON rendering fails; build failures are
/// rendered here and reported through the exit code.
pub fn run(app: &AppContext, args: &BuildArgs) -> Result<ExitCode> {
    let spec = args.apply(&app.config.build).to_spec();
    let mut builder = Builder::new(spec, StdProcessRunner);
    if app.is_json() {
        run_with(app, &mut builder, &StderrEchoReporter)
    } else {
        run_with(app, &mut builder, &TerminalReporter::new(&app.output))
    }
}

/// Drive `builder` once and render the outcome.
///
/// # Errors
///
/// Returns an error only if JSON rendering fails.
pub fn run_with<R: ProcessRunner>(
    app: &AppContext,
    builder: &mut Builder<R>,
    reporter: &impl ProgressReporter,
) -> Result<ExitCode> {
    reporter.step(&format!("Building {}", builder.spec().source_dir().display()));
    match builder.build(reporter) {
        Ok(()) => {
            let path = builder.spec().binary_path().display().to_string();
            if app.is_json() {
                println!(
                    "{}",
                    json::format_value(&BuildSummary {
                        binary: builder.binary().to_string(),
                        path,
                    })?
                );
            } else {
                reporter.success(&format!("Built {path}"));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            if app.is_json() {
                println!("{}", json::format_error(builder.errors(), error_code(&err))?);
            } else {
                // Pre-build output was already echoed by the reporter.
                if matches!(err, BuildError::Compile { .. }) {
                    eprint!("{}", builder.errors());
                }
                let what = match err {
                    BuildError::PreBuild { .. } => "Pre-build command failed".to_string(),
                    BuildError::Compile { .. } => "Build failed".to_string(),
                    BuildError::Launch { .. } => err.to_string(),
                };
                app.output.error(&what);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
