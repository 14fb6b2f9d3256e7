use std::path::PathBuf;

use media_shim::{Launcher, YouGet, YtDlp};

use crate::cli::RuntimeArgs;

/// Resolved runtime settings, from flags or `MEDIA_SHIM_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub python: PathBuf,
    pub yt_dlp_bin: Option<PathBuf>,
    pub you_get_bin: Option<PathBuf>
}

impl From<RuntimeArgs> for Config {
    fn from(args: RuntimeArgs) -> Self {
        Self {
            python: args.python,
            yt_dlp_bin: args.yt_dlp_bin,
            you_get_bin: args.you_get_bin
        }
    }
}

impl Config {
    pub fn yt_dlp(&self) -> YtDlp {
        YtDlp::with_launcher(self.launcher(self.yt_dlp_bin.as_ref(), "yt_dlp"))
    }

    pub fn you_get(&self) -> YouGet {
        YouGet::with_launcher(self.launcher(self.you_get_bin.as_ref(), "you_get"))
    }

    fn launcher(&self, binary: Option<&PathBuf>, module: &str) -> Launcher {
        match binary {
            Some(path) => {
                tracing::info!("Using {} binary: {}", module, path.display());
                Launcher::program(path)
            }
            None => Launcher::python(module).with_interpreter(&self.python)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(yt_dlp_bin: Option<&str>) -> Config {
        Config {
            python: PathBuf::from("/usr/bin/python3.12"),
            yt_dlp_bin: yt_dlp_bin.map(PathBuf::from),
            you_get_bin: None
        }
    }

    #[test]
    fn test_python_launchers_by_default() {
        let config = config(None);
        assert_eq!(
            config.yt_dlp().launcher(),
            &Launcher::python("yt_dlp").with_interpreter("/usr/bin/python3.12")
        );
        assert_eq!(
            config.you_get().launcher(),
            &Launcher::python("you_get").with_interpreter("/usr/bin/python3.12")
        );
    }

    #[test]
    fn test_binary_override() {
        let config = config(Some("/usr/local/bin/yt-dlp"));
        assert_eq!(config.yt_dlp().launcher(), &Launcher::program("/usr/local/bin/yt-dlp"));
    }
}
