use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

pub struct CommandBuilder {
    program: PathBuf,
    args: Vec<String>,
    python_path: Option<PathBuf>
}

impl CommandBuilder {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            python_path: None
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn url(self, url: impl Into<String>) -> Self {
        self.arg(url)
    }

    /// `-m <module>`, runs a package's `__main__` through the interpreter.
    pub fn python_module(self, module: impl Into<String>) -> Self {
        self.arg("-m").arg(module)
    }

    /// Makes packages under `path` importable by prepending it to `PYTHONPATH`.
    pub fn python_path(mut self, path: impl AsRef<Path>) -> Self {
        self.python_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn json_output(self) -> Self {
        self.arg("--json")
    }

    pub fn version(self) -> Self {
        self.arg("--version")
    }

    pub fn build(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(ref path) = self.python_path {
            cmd.env("PYTHONPATH", prepend_path(std::env::var_os("PYTHONPATH"), path));
        }

        cmd
    }

    pub fn build_with_env(&self, env_vars: &HashMap<String, String>) -> Command {
        let mut cmd = self.build();
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }
}

fn prepend_path(current: Option<OsString>, path: &Path) -> OsString {
    let mut entries: Vec<PathBuf> = current
        .as_deref()
        .map(|value| std::env::split_paths(value).collect())
        .unwrap_or_default();

    if entries.iter().any(|entry| entry == path) {
        return current.unwrap_or_else(|| path.as_os_str().to_owned());
    }

    entries.insert(0, path.to_path_buf());
    std::env::join_paths(entries).unwrap_or_else(|e| {
        tracing::debug!(path = %path.display(), error = %e, "cannot join PYTHONPATH, using the import path alone");
        path.as_os_str().to_owned()
    })
}
