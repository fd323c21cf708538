//! Application service — build orchestration use-case.
//!
//! Runs the optional pre-build shell step, then the build tool, recording the
//! combined output of whichever step failed. One build at a time per
//! instance: `build` takes `&mut self`.

use tracing::{debug, info, warn};

use crate::application::ports::{ProcessRunner, ProgressReporter};
use crate::domain::{BuildError, BuildSpec};

/// Compiles a project described by a [`BuildSpec`].
pub struct Builder<R> {
    spec: BuildSpec,
    runner: R,
    errors: String,
}

impl<R: ProcessRunner> Builder<R> {
    #[must_use]
    pub fn new(spec: BuildSpec, runner: R) -> Self {
        Self {
            spec,
            runner,
            errors: String::new(),
        }
    }

    /// Resolved output file name, including any platform suffix.
    #[must_use]
    pub fn binary(&self) -> &str {
        self.spec.binary_name()
    }

    /// Captured output of the most recent [`Builder::build`]. Empty after a
    /// successful build.
    #[must_use]
    pub fn errors(&self) -> &str {
        &self.errors
    }

    #[must_use]
    pub fn spec(&self) -> &BuildSpec {
        &self.spec
    }

    /// Run the pre-build step (if any) and the build tool.
    ///
    /// Pre-build output is echoed through `reporter` whether or not the step
    /// succeeds.
    ///
    /// # Errors
    ///
    /// - [`BuildError::PreBuild`] if the pre-build command exits non-zero; the
    ///   build tool is not invoked.
    /// - [`BuildError::Compile`] if the build tool exits non-zero.
    /// - [`BuildError::Launch`] if the shell or build tool cannot be started.
    pub fn build(&mut self, reporter: &impl ProgressReporter) -> Result<(), BuildError> {
        let result = self.run_steps(reporter);
        self.errors = match &result {
            Ok(()) => String::new(),
            Err(e) => e.captured_output(),
        };
        result
    }

    fn run_steps(&self, reporter: &impl ProgressReporter) -> Result<(), BuildError> {
        if let Some(cmd) = self.spec.pre_build_command() {
            debug!(command = %cmd.display(), cwd = %cmd.cwd.display(), "running pre-build command");
            let out = self
                .runner
                .run_combined(&cmd)
                .map_err(|source| BuildError::Launch {
                    program: cmd.program.clone(),
                    source,
                })?;
            if !out.combined.is_empty() {
                reporter.echo(&out.combined);
            }
            if !out.status.success() {
                warn!(status = %out.status, "pre-build command failed");
                return Err(BuildError::PreBuild { output: out.text() });
            }
        }

        let cmd = self.spec.build_command();
        debug!(command = %cmd.display(), cwd = %cmd.cwd.display(), "running build");
        let out = self
            .runner
            .run_combined(&cmd)
            .map_err(|source| BuildError::Launch {
                program: cmd.program.clone(),
                source,
            })?;
        if !out.status.success() {
            warn!(status = %out.status, "build failed");
            return Err(BuildError::Compile { output: out.text() });
        }
        info!(binary = %self.spec.binary_path().display(), "build succeeded");
        Ok(())
    }
}
