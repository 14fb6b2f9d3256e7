use std::collections::HashMap;
use std::path::Path;

use crate::capture::{CapturedOutput, capture};
use crate::command::CommandBuilder;
use crate::error::Result;
use crate::launcher::Launcher;
use crate::types::{ExtractOptions, Extraction};

#[derive(Debug, Clone)]
pub struct YouGet {
    launcher: Launcher,
    env_vars: HashMap<String, String>
}

impl Default for YouGet {
    fn default() -> Self {
        Self::new()
    }
}

impl YouGet {
    pub fn new() -> Self {
        Self::with_launcher(Launcher::python("you_get"))
    }

    pub fn with_launcher(launcher: Launcher) -> Self {
        Self {
            launcher,
            env_vars: HashMap::new()
        }
    }

    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }

    pub fn set_env(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }

    /// Runs `you-get --json <url>` and returns whatever it printed, untouched.
    ///
    /// A non-zero exit still yields the captured output; only a failure to
    /// start the process is an error.
    pub async fn extract_raw(&self, import_path: impl AsRef<Path>, url: &str) -> Result<CapturedOutput> {
        let builder = self.command(import_path.as_ref(), url, &ExtractOptions::default());
        self.run(&builder).await
    }

    /// Runs you-get with the given extra flags and adds `request_headers`
    /// derived from the output's `extra` object.
    pub async fn extract(
        &self,
        import_path: impl AsRef<Path>,
        url: &str,
        options: &ExtractOptions
    ) -> Result<Extraction> {
        let builder = self.command(import_path.as_ref(), url, options);
        let output = self.run(&builder).await?;
        Ok(Extraction::from_output(output.stdout))
    }

    fn command(&self, import_path: &Path, url: &str, options: &ExtractOptions) -> CommandBuilder {
        self.launcher
            .command(Some(import_path))
            .json_output()
            .args(options.to_args())
            .url(url)
    }

    async fn run(&self, builder: &CommandBuilder) -> Result<CapturedOutput> {
        let output = capture(builder, &self.env_vars).await?;
        if !output.success() {
            tracing::debug!(code = output.code(), "you-get exited unsuccessfully, keeping its output");
        }
        Ok(output)
    }
}
