// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lexical line formats for the property file variants.
//!
//! A property file is a sequence of `key<spacerL><delimiter><spacerR>value`
//! lines. The two variants used across the pipeline differ only in that
//! formatting triple, so it is captured as one value type instead of two
//! store implementations.

/// A lexical formatting rule set governing how key/value lines are rendered
/// and recognized.
///
/// The full separator between a key and its value is the concatenation
/// `spacer_left + delimiter + spacer_right`. A line belongs to the format if
/// it splits at the first occurrence of that separator into a non-empty,
/// whitespace-free key and a (possibly empty) value; everything else —
/// blanks, `#`/`;` comments, malformed text — is carried through the document
/// untouched but contributes no key.
///
/// # Examples
///
/// ```
/// use pipecfg::domain::LineFormat;
///
/// assert_eq!(LineFormat::PROPERTIES.render("scylla_ami_id", "ami-0123"),
///            "scylla_ami_id=ami-0123");
/// assert_eq!(LineFormat::BUILD_METADATA.render("scylla-version", "5.0.0"),
///            "scylla-version: 5.0.0");
///
/// let parsed = LineFormat::BUILD_METADATA.split_line("ami-base-os: ubuntu:20.04");
/// assert_eq!(parsed, Some(("ami-base-os", "ubuntu:20.04")));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineFormat {
    spacer_left: &'static str,
    delimiter: &'static str,
    spacer_right: &'static str,
}

impl LineFormat {
    /// The properties variant: `key=value`, no spaces.
    ///
    /// Used for pipeline state files such as `amiId.properties` and static
    /// configuration such as `general.properties`.
    pub const PROPERTIES: LineFormat = LineFormat::new("", "=", "");

    /// The build-metadata variant: `key: value`, colon plus one space.
    ///
    /// Used for the metadata artifact describing a completed upstream build
    /// (version, release, artifact locations).
    pub const BUILD_METADATA: LineFormat = LineFormat::new("", ":", " ");

    /// Creates a format from its spacer/delimiter triple.
    pub const fn new(
        spacer_left: &'static str,
        delimiter: &'static str,
        spacer_right: &'static str,
    ) -> Self {
        LineFormat {
            spacer_left,
            delimiter,
            spacer_right,
        }
    }

    /// Returns the full separator string between key and value.
    pub fn separator(&self) -> String {
        format!("{}{}{}", self.spacer_left, self.delimiter, self.spacer_right)
    }

    /// Renders a key/value pair in this format's exact lexical form, without
    /// a trailing newline.
    pub fn render(&self, key: &str, value: &str) -> String {
        format!(
            "{}{}{}{}{}",
            key, self.spacer_left, self.delimiter, self.spacer_right, value
        )
    }

    /// Splits a single line into `(key, value)` per this format's grammar.
    ///
    /// Returns `None` for lines that do not belong to the format: blank
    /// lines, comment lines starting with `#` or `;`, lines without the
    /// separator, and lines whose key would be empty or contain whitespace.
    /// A trailing `\r` is ignored so CRLF documents parse the same as LF.
    pub fn split_line<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            return None;
        }
        let sep = self.separator();
        let (key, value) = line.split_once(sep.as_str())?;
        if key.is_empty() || key.contains(char::is_whitespace) {
            return None;
        }
        Some((key, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_render() {
        assert_eq!(LineFormat::PROPERTIES.render("a", "b"), "a=b");
    }

    #[test]
    fn test_build_metadata_render() {
        assert_eq!(LineFormat::BUILD_METADATA.render("a", "b"), "a: b");
    }

    #[test]
    fn test_properties_split() {
        let parsed = LineFormat::PROPERTIES.split_line("buildMetadataFile=00-Build.txt");
        assert_eq!(parsed, Some(("buildMetadataFile", "00-Build.txt")));
    }

    #[test]
    fn test_split_first_separator_wins() {
        // values may contain the delimiter
        let parsed = LineFormat::PROPERTIES.split_line("repo=http://example.com/a=b");
        assert_eq!(parsed, Some(("repo", "http://example.com/a=b")));

        let parsed = LineFormat::BUILD_METADATA.split_line("ami-base-os: ubuntu:20.04");
        assert_eq!(parsed, Some(("ami-base-os", "ubuntu:20.04")));
    }

    #[test]
    fn test_build_metadata_requires_space() {
        // colon without the spacer does not match the variant grammar
        assert_eq!(LineFormat::BUILD_METADATA.split_line("key:value"), None);
    }

    #[test]
    fn test_split_rejects_blank_and_comments() {
        assert_eq!(LineFormat::PROPERTIES.split_line(""), None);
        assert_eq!(LineFormat::PROPERTIES.split_line("   "), None);
        assert_eq!(LineFormat::PROPERTIES.split_line("# comment=1"), None);
        assert_eq!(LineFormat::PROPERTIES.split_line("; comment=1"), None);
    }

    #[test]
    fn test_split_rejects_bad_keys() {
        assert_eq!(LineFormat::PROPERTIES.split_line("=value"), None);
        assert_eq!(LineFormat::PROPERTIES.split_line("two words=x"), None);
        assert_eq!(LineFormat::PROPERTIES.split_line("no delimiter"), None);
    }

    #[test]
    fn test_split_empty_value() {
        assert_eq!(LineFormat::PROPERTIES.split_line("key="), Some(("key", "")));
    }

    #[test]
    fn test_split_crlf() {
        let parsed = LineFormat::PROPERTIES.split_line("a=b\r");
        assert_eq!(parsed, Some(("a", "b")));
    }

    #[test]
    fn test_separator() {
        assert_eq!(LineFormat::PROPERTIES.separator(), "=");
        assert_eq!(LineFormat::BUILD_METADATA.separator(), ": ");
    }
}
