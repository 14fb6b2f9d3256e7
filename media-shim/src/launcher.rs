use std::path::{Path, PathBuf};

use crate::command::CommandBuilder;

/// How a wrapped extractor library is started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launcher {
    /// `<interpreter> -m <module>`, with the caller's import path on `PYTHONPATH`.
    Python {
        interpreter: PathBuf,
        module: String
    },
    /// A standalone program. The import path is not used.
    Program {
        program: PathBuf,
        leading_args: Vec<String>
    }
}

impl Launcher {
    pub fn python(module: impl Into<String>) -> Self {
        Self::Python {
            interpreter: PathBuf::from("python3"),
            module: module.into()
        }
    }

    pub fn program(program: impl Into<PathBuf>) -> Self {
        Self::Program {
            program: program.into(),
            leading_args: Vec::new()
        }
    }

    #[must_use]
    pub fn with_interpreter(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Python { module, .. } => Self::Python {
                interpreter: path.into(),
                module
            },
            other => other
        }
    }

    /// Arguments placed before the invocation's own arguments, e.g. `["-c", script, "sh"]`.
    #[must_use]
    pub fn with_leading_args(self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        match self {
            Self::Program { program, mut leading_args } => {
                leading_args.extend(args.into_iter().map(Into::into));
                Self::Program { program, leading_args }
            }
            other => other
        }
    }

    pub(crate) fn command(&self, import_path: Option<&Path>) -> CommandBuilder {
        match self {
            Self::Python { interpreter, module } => {
                let builder = CommandBuilder::new(interpreter).python_module(module.clone());
                match import_path {
                    Some(path) => builder.python_path(path),
                    None => builder
                }
            }
            Self::Program { program, leading_args } => {
                CommandBuilder::new(program).args(leading_args.iter().map(String::as_str))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_launcher_command() {
        let builder = Launcher::python("yt_dlp")
            .with_interpreter("/usr/bin/python3.12")
            .command(Some(Path::new("/data/yt-dlp.pyz")));
        assert_eq!(builder.program(), Path::new("/usr/bin/python3.12"));
        assert_eq!(builder.get_args(), &["-m", "yt_dlp"]);
    }

    #[test]
    fn test_program_launcher_ignores_import_path() {
        let builder = Launcher::program("sh")
            .with_leading_args(["-c", "cat", "sh"])
            .command(Some(Path::new("/ignored")));
        assert_eq!(builder.program(), Path::new("sh"));
        assert_eq!(builder.get_args(), &["-c", "cat", "sh"]);
    }

    #[test]
    fn test_builders_only_touch_their_variant() {
        let python = Launcher::python("you_get").with_leading_args(["-x"]);
        assert_eq!(python, Launcher::python("you_get"));

        let program = Launcher::program("you-get").with_interpreter("python3");
        assert_eq!(program, Launcher::program("you-get"));
    }
}
