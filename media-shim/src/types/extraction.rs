use serde_json::Value;

use super::RequestHeaders;

/// Outcome of a you-get run: parsed and augmented JSON, or the captured text untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Structured(Value),
    Raw(String)
}

impl Extraction {
    /// Parses captured output and injects `request_headers` derived from `extra`.
    ///
    /// Anything that doesn't fit the expected shape falls back to [`Extraction::Raw`].
    pub fn from_output(text: String) -> Self {
        let mut value: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, "extractor output is not JSON, passing through");
                return Self::Raw(text);
            }
        };

        let headers = match value.get("extra") {
            None | Some(Value::Null) => None,
            Some(Value::Object(extra)) => Some(RequestHeaders::from_extra(extra)),
            Some(other) => {
                tracing::debug!(extra = %other, "unexpected `extra` in extractor output, passing through");
                return Self::Raw(text);
            }
        };
        let Some(headers) = headers else {
            return Self::Structured(value);
        };

        let Some(object) = value.as_object_mut() else {
            return Self::Raw(text);
        };

        match serde_json::to_value(headers) {
            Ok(headers) => {
                object.insert("request_headers".to_string(), headers);
                Self::Structured(value)
            }
            Err(_) => Self::Raw(text)
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Structured(value) => Some(value),
            Self::Raw(_) => None
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Structured(value) => value.to_string(),
            Self::Raw(text) => text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_injects_request_headers() {
        let text = json!({
            "url": "https://example.com/v",
            "extra": {"ua": "UA1", "referer": "https://example.com/x"}
        }).to_string();
        let extraction = Extraction::from_output(text);
        let value = extraction.as_value().unwrap();
        assert_eq!(value["request_headers"], json!({
            "User-Agent": "UA1",
            "Referer": "https://example.com/x",
            "Origin": "https://example.com"
        }));
        assert_eq!(value["url"], "https://example.com/v");
    }

    #[test]
    fn test_without_extra_is_unchanged() {
        let original = json!({"title": "t", "extra": null});
        let extraction = Extraction::from_output(original.to_string());
        assert_eq!(extraction, Extraction::Structured(original));
    }

    #[test]
    fn test_not_json_passes_through() {
        let text = "you-get: [error] oops\n".to_string();
        let extraction = Extraction::from_output(text.clone());
        assert!(!extraction.is_structured());
        assert_eq!(extraction.into_text(), text);
    }

    #[test]
    fn test_malformed_extra_passes_through() {
        let text = r#"{"extra": "ua=UA1"}"#.to_string();
        assert_eq!(Extraction::from_output(text.clone()), Extraction::Raw(text));
    }

    #[test]
    fn test_extra_on_non_object_document() {
        let text = "[1, 2]".to_string();
        assert_eq!(
            Extraction::from_output(text),
            Extraction::Structured(json!([1, 2]))
        );
    }
}
