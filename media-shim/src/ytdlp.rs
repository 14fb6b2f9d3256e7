use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::capture::{CapturedOutput, capture};
use crate::error::{Error, Result};
use crate::launcher::Launcher;
use crate::types::{Envelope, MediaFormat, extract_media};

#[derive(Debug, Clone)]
pub struct YtDlp {
    launcher: Launcher,
    env_vars: HashMap<String, String>
}

impl Default for YtDlp {
    fn default() -> Self {
        Self::new()
    }
}

impl YtDlp {
    pub fn new() -> Self {
        Self::with_launcher(Launcher::python("yt_dlp"))
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

    /// Runs yt-dlp with a full argument vector and reports the requested formats.
    ///
    /// `args[0]` is the import path of the yt-dlp package (usually a `.pyz`);
    /// the rest is handed to yt-dlp unchanged. Failures are reported through
    /// the envelope's code, never as an `Err`.
    pub async fn run<S: AsRef<str>>(&self, args: &[S]) -> Envelope<Vec<MediaFormat>> {
        match self.try_run(args).await {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!(error = %e, "yt-dlp invocation failed");
                Envelope::from_error(&e)
            }
        }
    }

    /// `--dump-single-json --yes-playlist <url>`; formats of the first entry.
    pub async fn media(&self, import_path: &str, url: &str) -> Envelope<Vec<MediaFormat>> {
        let args = [import_path, "--dump-single-json", "--yes-playlist", url];
        self.run(&args).await
    }

    pub async fn version(&self, import_path: impl AsRef<Path>) -> Result<String> {
        let builder = self.launcher.command(Some(import_path.as_ref())).version();
        let output = capture(&builder, &self.env_vars).await?;

        if output.success() {
            Ok(output.stdout.trim().to_string())
        } else {
            Err(command_failed(&output))
        }
    }

    async fn try_run<S: AsRef<str>>(&self, args: &[S]) -> Result<Envelope<Vec<MediaFormat>>> {
        let (import_path, rest) = args.split_first().ok_or(Error::MissingImportPath)?;
        let import_path: &str = import_path.as_ref();

        let builder = self
            .launcher
            .command(Some(Path::new(import_path)))
            .args(rest.iter().map(AsRef::<str>::as_ref));

        let output = capture(&builder, &self.env_vars).await?;

        if !output.success() {
            return Err(command_failed(&output));
        }

        let doc: Value = serde_json::from_str(&output.stdout).map_err(|source| Error::JsonParseFailed {
            source,
            raw: output.stdout.clone()
        })?;

        Ok(Envelope::ok(extract_media(&doc)?))
    }
}

fn command_failed(output: &CapturedOutput) -> Error {
    Error::CommandFailed {
        program: "yt-dlp",
        code: output.code(),
        stderr: output.stderr.trim().to_string()
    }
}
