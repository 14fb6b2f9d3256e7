//! Async shim around the yt-dlp and you-get extractors.
//!
//! Each call runs the extractor in its own child process, captures what it
//! prints, and reshapes the JSON into something a host application can use
//! directly.
//!
//! # Example
//!
//! ```no_run
//! use media_shim::{ExtractOptions, YouGet, YtDlp};
//!
//! #[tokio::main]
//! async fn main() -> media_shim::Result<()> {
//!     let yt_dlp = YtDlp::new();
//!
//!     // Formats picked by yt-dlp, wrapped in a {result, code, msg} envelope
//!     let envelope = yt_dlp.media("/data/yt-dlp.pyz", "https://www.youtube.com/watch?v=dQw4w9WgXcQ").await;
//!     println!("{}", envelope.to_json());
//!
//!     // you-get output with request headers derived from its `extra` hints
//!     let you_get = YouGet::new();
//!     let options = ExtractOptions::from_json(r#"{"--cookies": "cookies.txt"}"#)?;
//!     let extraction = you_get.extract("/data/you-get", "https://www.bilibili.com/video/BV1xx", &options).await?;
//!     println!("{}", extraction.into_text());
//!
//!     Ok(())
//! }
//! ```

mod capture;
mod command;
pub mod error;
mod launcher;
pub mod line_endings;
pub mod types;
mod youget;
mod ytdlp;

pub use capture::CapturedOutput;
pub use error::{Error, Result};
pub use launcher::Launcher;
pub use line_endings::{NormalizeReport, Normalizer};
pub use types::{Envelope, ExtractOptions, Extraction, MediaFormat, RequestHeaders, extract_media};
pub use youget::YouGet;
pub use ytdlp::YtDlp;
