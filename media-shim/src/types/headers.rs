use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

/// Request headers a client needs to fetch what an extractor found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestHeaders {
    #[serde(rename = "User-Agent", default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(rename = "Referer", default, skip_serializing_if = "Option::is_none")]
    pub referer: Option<String>,
    #[serde(rename = "Origin", default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>
}

impl RequestHeaders {
    /// Derives headers from an extractor's `extra` object (`ua`, `referer`).
    pub fn from_extra(extra: &Map<String, Value>) -> Self {
        let user_agent = extra.get("ua").and_then(Value::as_str).map(str::to_string);
        let referer = extra.get("referer").and_then(Value::as_str).map(str::to_string);
        let origin = referer.as_deref().and_then(origin_of);

        Self {
            user_agent,
            referer,
            origin
        }
    }

    pub fn is_empty(&self) -> bool {
        self.user_agent.is_none() && self.referer.is_none() && self.origin.is_none()
    }
}

/// `scheme://host[:port]` of an absolute URL; the port only when it isn't the default.
fn origin_of(referer: &str) -> Option<String> {
    let url = Url::parse(referer).ok()?;
    let host = url.host_str()?;
    match url.port() {
        Some(port) => Some(format!("{}://{host}:{port}", url.scheme())),
        None => Some(format!("{}://{host}", url.scheme()))
    }
}
