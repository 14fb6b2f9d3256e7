use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Extra CLI-style flags passed through to the extractor, in caller order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractOptions {
    flags: Vec<(String, Option<String>)>
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object such as `{"--cookies": "c.txt", "debug": true}`.
    ///
    /// `true` adds the bare flag, `false` and `null` skip it, strings and
    /// numbers become the flag's value.
    pub fn from_json(json: &str) -> Result<Self> {
        let json = json.trim();
        if json.is_empty() {
            return Ok(Self::default());
        }

        let map: Map<String, Value> = serde_json::from_str(json)
            .map_err(|e| Error::InvalidOptions(e.to_string()))?;

        let mut options = Self::default();
        for (key, value) in map {
            match value {
                Value::Bool(true) => options = options.flag(key),
                Value::Bool(false) | Value::Null => {}
                Value::String(s) => options = options.option(key, s),
                Value::Number(n) => options = options.option(key, n.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    return Err(Error::InvalidOptions(format!("unsupported value for {key}")));
                }
            }
        }
        Ok(options)
    }

    #[must_use]
    pub fn flag(mut self, name: impl AsRef<str>) -> Self {
        self.flags.push((normalize_flag(name.as_ref()), None));
        self
    }

    #[must_use]
    pub fn option(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.flags.push((normalize_flag(name.as_ref()), Some(value.into())));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.flags.len() * 2);
        for (name, value) in &self.flags {
            args.push(name.clone());
            if let Some(value) = value {
                args.push(value.clone());
            }
        }
        args
    }
}

fn normalize_flag(name: &str) -> String {
    if name.starts_with('-') {
        name.to_string()
    } else {
        format!("--{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_flags_and_values() {
        let options = ExtractOptions::from_json(
            r#"{"--cookies": "/tmp/c.txt", "debug": true, "-l": false, "timeout": 30, "x": null}"#
        ).unwrap();
        let args = options.to_args();
        assert!(args.windows(2).any(|w| w == ["--cookies", "/tmp/c.txt"]));
        assert!(args.windows(2).any(|w| w == ["--timeout", "30"]));
        assert!(args.contains(&"--debug".to_string()));
        assert!(!args.contains(&"-l".to_string()));
        assert!(!args.contains(&"--x".to_string()));
    }

    #[test]
    fn test_from_json_empty() {
        assert!(ExtractOptions::from_json("").unwrap().is_empty());
        assert!(ExtractOptions::from_json("{}").unwrap().is_empty());
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(ExtractOptions::from_json("[1]"), Err(Error::InvalidOptions(_))));
        assert!(matches!(
            ExtractOptions::from_json(r#"{"--proxy": ["a", "b"]}"#),
            Err(Error::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_builder_keeps_order() {
        let options = ExtractOptions::new()
            .option("-c", "cookies.txt")
            .flag("playlist");
        assert_eq!(options.to_args(), ["-c", "cookies.txt", "--playlist"]);
    }
}
