// crates/core/src/converter.rs
//! Markdown image (`![alt](url)`) → HTML `<img>` conversion.
//!
//! The matching rule is intentionally narrow: the alt span is any run of
//! characters without `]`, the URL any non-empty run without `)`. Code fences,
//! escaped brackets, reference-style images and nested parentheses are not
//! understood.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

/// `![alt](url)`: alt excludes `]`, url excludes `)` and must be non-empty.
const IMAGE_PATTERN: &str = r"!\[([^\]]*)\]\(([^)]+)\)";

fn image_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| match Regex::new(IMAGE_PATTERN) {
        Ok(re) => re,
        Err(err) => panic!("Invalid image regex: {err}"),
    })
}

/// Options that change how a matched image is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// HTML-escape `&`, `"`, `<` and `>` inside the emitted attributes.
    ///
    /// Off by default: attribute text is copied verbatim.
    pub escape_attributes: bool,
}

/// Result of converting a line or a whole buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion<'a> {
    /// Rewritten text. Borrowed when nothing matched.
    pub text: Cow<'a, str>,
    /// Number of images replaced.
    pub count: usize,
}

impl Conversion<'_> {
    /// Whether at least one image was replaced.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.count > 0
    }
}

/// Convert every `![alt](url)` in `line` with default options.
#[must_use]
pub fn convert_line(line: &str) -> Conversion<'_> {
    convert_line_with(line, &ConvertOptions::default())
}

/// Convert every `![alt](url)` in `line`.
///
/// Matches are found left to right and never overlap. A line without a match
/// comes back borrowed with a count of zero.
#[must_use]
pub fn convert_line_with<'a>(line: &'a str, options: &ConvertOptions) -> Conversion<'a> {
    let mut count = 0;
    let text = image_regex().replace_all(line, |caps: &Captures<'_>| {
        count += 1;
        let alt = caps.get(1).map_or("", |m| m.as_str());
        let url = caps.get(2).map_or("", |m| m.as_str());
        render_img(url, alt, options)
    });
    Conversion { text, count }
}

/// Convert a whole buffer line by line.
///
/// A line ends after `\n`, `\r\n` or a lone `\r`. Terminators stay attached to
/// their line, so the output keeps the input's line endings and a match can
/// never span two lines.
#[must_use]
pub fn convert_text<'a>(text: &'a str, options: &ConvertOptions) -> Conversion<'a> {
    let mut out = String::with_capacity(text.len());
    let mut count = 0;

    for line in lines_with_terminators(text) {
        let converted = convert_line_with(line, options);
        count += converted.count;
        out.push_str(&converted.text);
    }

    if count == 0 {
        return Conversion {
            text: Cow::Borrowed(text),
            count,
        };
    }

    Conversion {
        text: Cow::Owned(out),
        count,
    }
}

fn lines_with_terminators(text: &str) -> impl Iterator<Item = &str> {
    let bytes = text.as_bytes();
    let mut start = 0;
    std::iter::from_fn(move || {
        if start >= bytes.len() {
            return None;
        }
        let rest = &bytes[start..];
        let end = match rest.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) if rest[i] == b'\r' && rest.get(i + 1) == Some(&b'\n') => start + i + 2,
            Some(i) => start + i + 1,
            None => bytes.len(),
        };
        let line = &text[start..end];
        start = end;
        Some(line)
    })
}

fn render_img(url: &str, alt: &str, options: &ConvertOptions) -> String {
    if options.escape_attributes {
        format!(
            r#"<img src="{}" alt="{}">"#,
            escape_attribute(url),
            escape_attribute(alt)
        )
    } else {
        format!(r#"<img src="{url}" alt="{alt}">"#)
    }
}

fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '"', '<', '>']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
