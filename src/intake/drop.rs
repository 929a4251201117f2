// Drag-and-drop path handling.
// Terminals deliver a dropped file as pasted text; this turns it back into a path.

use std::path::PathBuf;

use url::Url;

/// Parse the text a terminal pastes when a file is dropped onto it.
///
/// Handles the common shapes emitted by terminal emulators: plain paths,
/// quoted paths, shell-escaped paths (`my\ cv.pdf`), and `file://` URIs.
/// When several files are dropped, only the first is kept.
pub fn parse_dropped_path(text: &str) -> Option<PathBuf> {
    let first = text.lines().map(str::trim).find(|line| !line.is_empty())?;
    let unquoted = strip_quotes(first);

    if unquoted.starts_with("file://") {
        return Url::parse(unquoted).ok()?.to_file_path().ok();
    }

    let path = if cfg!(windows) {
        unquoted.to_string()
    } else {
        unescape_shell(unquoted)
    };

    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

fn strip_quotes(s: &str) -> &str {
    for quote in ['\'', '"'] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

fn unescape_shell(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path() {
        assert_eq!(
            parse_dropped_path("/home/me/resume.pdf"),
            Some(PathBuf::from("/home/me/resume.pdf"))
        );
    }

    #[test]
    fn test_quoted_path_with_trailing_space() {
        assert_eq!(
            parse_dropped_path("'/home/me/my resume.pdf' "),
            Some(PathBuf::from("/home/me/my resume.pdf"))
        );
        assert_eq!(
            parse_dropped_path("\"/tmp/cv.pdf\""),
            Some(PathBuf::from("/tmp/cv.pdf"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_escaped_path() {
        assert_eq!(
            parse_dropped_path("/home/me/my\\ resume\\ \\(v2\\).pdf"),
            Some(PathBuf::from("/home/me/my resume (v2).pdf"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_file_uri_is_decoded() {
        assert_eq!(
            parse_dropped_path("file:///home/me/my%20resume.pdf"),
            Some(PathBuf::from("/home/me/my resume.pdf"))
        );
    }

    #[test]
    fn test_only_first_file_is_kept() {
        assert_eq!(
            parse_dropped_path("\n/tmp/a.pdf\n/tmp/b.pdf\n"),
            Some(PathBuf::from("/tmp/a.pdf"))
        );
    }

    #[test]
    fn test_blank_paste_is_ignored() {
        assert_eq!(parse_dropped_path("   \n  "), None);
        assert_eq!(parse_dropped_path("''"), None);
    }
}
