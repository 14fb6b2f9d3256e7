use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "media-shim",
    version,
    about = "Run yt-dlp / you-get and print their results as JSON"
)]
pub struct Cli {
    #[command(flatten)]
    pub runtime: RuntimeArgs,

    #[command(subcommand)]
    pub command: Commands
}

/// Where the wrapped extractors come from.
#[derive(Args, Debug, Clone)]
pub struct RuntimeArgs {
    /// Python interpreter used to run the extractor packages
    #[arg(long, global = true, env = "MEDIA_SHIM_PYTHON", default_value = "python3")]
    pub python: PathBuf,

    /// Run yt-dlp as a standalone program instead of a Python module
    #[arg(long, global = true, env = "MEDIA_SHIM_YTDLP_BIN", value_name = "PATH")]
    pub yt_dlp_bin: Option<PathBuf>,

    /// Run you-get as a standalone program instead of a Python module
    #[arg(long, global = true, env = "MEDIA_SHIM_YOUGET_BIN", value_name = "PATH")]
    pub you_get_bin: Option<PathBuf>
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run yt-dlp and print a {result, code, msg} envelope of the requested formats
    #[command(name = "yt-dlp")]
    YtDlp {
        /// Import path of the yt-dlp package (e.g. yt-dlp.pyz)
        #[arg(value_name = "IMPORT_PATH")]
        import_path: String,

        /// Arguments handed to yt-dlp unchanged
        #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>
    },

    /// Run you-get in JSON mode and print its output with derived request headers
    #[command(name = "you-get")]
    YouGet {
        /// Directory the you_get package is importable from
        #[arg(long, value_name = "IMPORT_PATH")]
        import_path: PathBuf,

        /// Extra you-get flags as a JSON object, e.g. '{"--cookies": "c.txt"}'
        #[arg(long, value_name = "JSON")]
        options: Option<String>,

        /// Print the captured output without post-processing
        #[arg(long)]
        raw: bool,

        url: String
    },

    /// Convert CRLF line endings to LF in text files under ROOT
    FixLineEndings {
        #[arg(default_value = ".")]
        root: PathBuf
    },

    /// Print the yt-dlp version
    Version {
        #[arg(value_name = "IMPORT_PATH")]
        import_path: PathBuf
    }
}
