use std::fmt;

/// One entry of an `accept` attribute such as `image/*,.png,application/pdf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptPattern {
    /// `.png`, stored lowercased with the leading dot.
    Extension(String),
    /// `image/*`, stored as the `image/` prefix.
    MimeWildcard(String),
    /// `image/png`
    Mime(String),
}

impl AcceptPattern {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if raw.starts_with('.') {
            return Some(AcceptPattern::Extension(raw.to_lowercase()));
        }
        if let Some(major) = raw.strip_suffix("/*") {
            return Some(AcceptPattern::MimeWildcard(format!("{major}/")));
        }
        Some(AcceptPattern::Mime(raw.to_string()))
    }

    pub fn matches(&self, file_name: &str, mime: &str) -> bool {
        match self {
            AcceptPattern::Extension(ext) => {
                file_extension(file_name).is_some_and(|found| found == *ext)
            }
            AcceptPattern::MimeWildcard(prefix) => mime.starts_with(prefix.as_str()),
            AcceptPattern::Mime(exact) => mime.eq_ignore_ascii_case(exact),
        }
    }
}

impl fmt::Display for AcceptPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcceptPattern::Extension(ext) => write!(f, "{ext}"),
            AcceptPattern::MimeWildcard(prefix) => write!(f, "{prefix}*"),
            AcceptPattern::Mime(exact) => write!(f, "{exact}"),
        }
    }
}

/// Parsed comma-separated accept list. An empty list accepts every file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptList {
    patterns: Vec<AcceptPattern>,
}

impl AcceptList {
    pub fn parse(accept: &str) -> Self {
        Self {
            patterns: accept.split(',').filter_map(AcceptPattern::parse).collect(),
        }
    }

    pub fn any() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> &[AcceptPattern] {
        &self.patterns
    }

    pub fn accepts(&self, file_name: &str, mime: &str) -> bool {
        self.is_empty() || self.patterns.iter().any(|p| p.matches(file_name, mime))
    }
}

impl fmt::Display for AcceptList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .patterns
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}

/// Lowercased extension with its leading dot, or `None` for names without a dot.
pub fn file_extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    Some(format!(".{}", ext.to_lowercase()))
}

/// Best-effort MIME type from a file name, for callers that have no
/// browser-supplied type (the CLI reads straight from disk).
pub fn guess_mime(file_name: &str) -> &'static str {
    match file_extension(file_name).as_deref() {
        Some(".jpg" | ".jpeg") => "image/jpeg",
        Some(".png") => "image/png",
        Some(".webp") => "image/webp",
        Some(".gif") => "image/gif",
        Some(".bmp") => "image/bmp",
        Some(".svg") => "image/svg+xml",
        Some(".pdf") => "application/pdf",
        Some(".txt") => "text/plain",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_entries() {
        let list = AcceptList::parse("image/*, ,.PNG,application/pdf,");
        assert_eq!(
            list.patterns(),
            &[
                AcceptPattern::MimeWildcard("image/".into()),
                AcceptPattern::Extension(".png".into()),
                AcceptPattern::Mime("application/pdf".into()),
            ]
        );
        assert_eq!(list.to_string(), "image/*,.png,application/pdf");
    }

    #[test]
    fn extension_requires_a_dot() {
        assert_eq!(file_extension("photo.JPG"), Some(".jpg".into()));
        assert_eq!(file_extension("archive.tar.gz"), Some(".gz".into()));
        assert_eq!(file_extension("README"), None);
    }

    #[test]
    fn extension_pattern_ignores_mime() {
        let list = AcceptList::parse(".png");
        assert!(list.accepts("shot.PNG", ""));
        assert!(!list.accepts("shot.jpg", "image/png"));
        assert!(!list.accepts("png", "image/png"));
    }

    #[test]
    fn wildcard_matches_major_type_only() {
        let list = AcceptList::parse("image/*");
        assert!(list.accepts("a.bin", "image/webp"));
        assert!(!list.accepts("a.png", "video/mp4"));
        assert!(!list.accepts("a.png", "imagery/png"));
    }

    #[test]
    fn empty_list_accepts_everything() {
        assert!(AcceptList::parse("").accepts("anything", ""));
        assert!(AcceptList::any().accepts("x.exe", "application/octet-stream"));
    }

    #[test]
    fn guess_mime_known_and_unknown() {
        assert_eq!(guess_mime("cat.JPEG"), "image/jpeg");
        assert_eq!(guess_mime("cat.heic"), "");
        assert_eq!(guess_mime("cat"), "");
    }
}
