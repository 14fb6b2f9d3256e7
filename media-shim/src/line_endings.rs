//! Rewrites CRLF line endings to LF across a source tree.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const WHITELISTED_EXTENSIONS: &[&str] = &[
    ".java", ".kt", ".xml", ".gradle", ".properties", ".md", ".txt", ".gitignore", ".py"
];

pub const EXCLUDED_DIRS: &[&str] = &[".git", "build", ".gradle", ".idea"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub scanned: usize,
    pub rewritten: Vec<PathBuf>
}

#[derive(Debug, Clone)]
pub struct Normalizer {
    root: PathBuf
}

impl Normalizer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walks the tree and rewrites every whitelisted file that contains CRLF.
    ///
    /// The first I/O error stops the walk.
    pub fn run(&self) -> Result<NormalizeReport> {
        let mut report = NormalizeReport::default();
        self.walk(&self.root, &mut report)?;
        Ok(report)
    }

    fn walk(&self, dir: &Path, report: &mut NormalizeReport) -> Result<()> {
        if self.is_excluded(dir) {
            tracing::debug!(dir = %dir.display(), "skipping excluded directory");
            return Ok(());
        }

        // file_type() does not follow symlinks, so links are never entered or rewritten
        let mut entries = std::fs::read_dir(dir)
            .map_err(Error::io(dir))?
            .map(|entry| entry.and_then(|e| Ok((e.path(), e.file_type()?))))
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(Error::io(dir))?;
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        for (path, file_type) in entries {
            if file_type.is_dir() {
                self.walk(&path, report)?;
            } else if file_type.is_file() && is_text_file(&path) {
                report.scanned += 1;
                if normalize_file(&path)? {
                    report.rewritten.push(path);
                }
            }
        }

        Ok(())
    }

    fn is_excluded(&self, dir: &Path) -> bool {
        dir.strip_prefix(&self.root)
            .unwrap_or(dir)
            .components()
            .any(|part| {
                part.as_os_str()
                    .to_str()
                    .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
            })
    }
}

/// Normalizes one file in place. Returns whether it was rewritten.
pub fn normalize_file(path: &Path) -> Result<bool> {
    let content = std::fs::read(path).map_err(Error::io(path))?;

    let Cow::Owned(fixed) = normalize_bytes(&content) else {
        return Ok(false);
    };

    std::fs::write(path, fixed).map_err(Error::io(path))?;
    tracing::info!("Fixed LF: {}", path.display());
    Ok(true)
}

/// Replaces every `\r\n` with `\n`. Borrows when there is nothing to replace.
pub fn normalize_bytes(content: &[u8]) -> Cow<'_, [u8]> {
    if !content.windows(2).any(|pair| pair == b"\r\n") {
        return Cow::Borrowed(content);
    }

    let mut fixed = Vec::with_capacity(content.len());
    let mut bytes = content.iter().copied().peekable();
    while let Some(byte) = bytes.next() {
        if byte == b'\r' && bytes.peek() == Some(&b'\n') {
            continue;
        }
        fixed.push(byte);
    }
    Cow::Owned(fixed)
}

/// Matches by extension, or by the whole name for dot-files like `.gitignore`.
pub fn is_text_file(path: &Path) -> bool {
    let suffix = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!(".{ext}"),
        None => match path.file_name().and_then(|name| name.to_str()) {
            Some(name) if name.starts_with('.') => name.to_string(),
            _ => return false
        }
    };
    let suffix = suffix.to_ascii_lowercase();
    WHITELISTED_EXTENSIONS.contains(&suffix.as_str())
}
