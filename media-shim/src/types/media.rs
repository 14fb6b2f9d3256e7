use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// One entry of yt-dlp's `requested_formats`, reduced to what a player needs.
///
/// Values are kept exactly as yt-dlp printed them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaFormat {
    pub headers: Value,
    pub url: Value,
    pub ext: Value,
    pub format_id: Value,
    pub format: Value
}

impl MediaFormat {
    fn from_requested(item: &Value) -> Result<Self> {
        Ok(Self {
            headers: field(item, "http_headers")?,
            url: field(item, "url")?,
            ext: field(item, "ext")?,
            format_id: field(item, "format_id")?,
            format: field(item, "format")?
        })
    }
}

/// Pulls the requested formats of the first entry out of a `--dump-single-json` document.
///
/// Returns `Ok(None)` when the document has no usable entry or format list,
/// and an error when a field the shape requires is absent.
pub fn extract_media(doc: &Value) -> Result<Option<Vec<MediaFormat>>> {
    let Some(doc) = doc.as_object() else {
        return Ok(None);
    };

    let entries = doc.get("entries").ok_or(Error::MissingField("entries"))?;
    let Some(entry) = entries.as_array().and_then(|e| e.first()) else {
        return Ok(None);
    };

    let formats = entry
        .get("requested_formats")
        .ok_or(Error::MissingField("requested_formats"))?;
    let Some(formats) = formats.as_array() else {
        return Ok(None);
    };

    formats
        .iter()
        .map(MediaFormat::from_requested)
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

/// Only an absent key is an error; `null` and other values are copied as they are.
fn field(item: &Value, key: &'static str) -> Result<Value> {
    item.get(key).cloned().ok_or(Error::MissingField(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn requested(format_id: &str) -> Value {
        json!({
            "http_headers": {"User-Agent": "Mozilla/5.0", "Accept": "*/*"},
            "url": format!("https://cdn.example.com/{format_id}.mp4"),
            "ext": "mp4",
            "format_id": format_id,
            "format": format!("{format_id} - 1920x1080"),
            "vcodec": "avc1"
        })
    }

    #[test]
    fn test_extract_media_copies_fields() {
        let doc = json!({
            "entries": [{"requested_formats": [requested("137"), requested("140")]}]
        });
        let formats = extract_media(&doc).unwrap().unwrap();
        assert_eq!(formats.len(), 2);
        assert_eq!(formats[0].format_id, "137");
        assert_eq!(formats[0].url, "https://cdn.example.com/137.mp4");
        assert_eq!(formats[0].ext, "mp4");
        assert_eq!(formats[0].format, "137 - 1920x1080");
        assert_eq!(formats[0].headers.get("User-Agent"), Some(&json!("Mozilla/5.0")));
        assert_eq!(formats[1].format_id, "140");
    }

    #[test]
    fn test_extract_media_serializes_headers_key() {
        let doc = json!({"entries": [{"requested_formats": [requested("18")]}]});
        let formats = extract_media(&doc).unwrap().unwrap();
        let value = serde_json::to_value(&formats[0]).unwrap();
        assert!(value.get("headers").is_some());
        assert!(value.get("http_headers").is_none());
        assert!(value.get("vcodec").is_none());
    }

    #[test]
    fn test_extract_media_no_result_shapes() {
        assert!(extract_media(&json!([1, 2])).unwrap().is_none());
        assert!(extract_media(&json!({"entries": null})).unwrap().is_none());
        assert!(extract_media(&json!({"entries": []})).unwrap().is_none());
        assert!(extract_media(&json!({"entries": "x"})).unwrap().is_none());
        assert!(extract_media(&json!({"entries": [{"requested_formats": null}]})).unwrap().is_none());
    }

    #[test]
    fn test_extract_media_keeps_values_as_printed() {
        let item = json!({
            "http_headers": null,
            "url": null,
            "ext": "mp4",
            "format_id": 137,
            "format": "137 - 1920x1080"
        });
        let formats = extract_media(&json!({"entries": [{"requested_formats": [item]}]}))
            .unwrap()
            .unwrap();
        assert_eq!(serde_json::to_value(&formats[0]).unwrap(), json!({
            "headers": null,
            "url": null,
            "ext": "mp4",
            "format_id": 137,
            "format": "137 - 1920x1080"
        }));
    }

    #[test]
    fn test_extract_media_missing_fields() {
        let err = extract_media(&json!({"id": "abc"})).unwrap_err();
        assert!(matches!(err, Error::MissingField("entries")));

        let err = extract_media(&json!({"entries": [{"id": "abc"}]})).unwrap_err();
        assert!(matches!(err, Error::MissingField("requested_formats")));

        let mut item = requested("22");
        item.as_object_mut().unwrap().remove("url");
        let err = extract_media(&json!({"entries": [{"requested_formats": [item]}]})).unwrap_err();
        assert!(matches!(err, Error::MissingField("url")));
    }
}
