mod envelope;
mod extraction;
mod headers;
mod media;
mod options;

pub use envelope::Envelope;
pub use extraction::Extraction;
pub use headers::RequestHeaders;
pub use media::{MediaFormat, extract_media};
pub use options::ExtractOptions;
