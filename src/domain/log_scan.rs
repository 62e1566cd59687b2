// SPDX-License-Identifier: MIT OR Apache-2.0

//! Build-log scanning for created image identifiers.
//!
//! The packaging tool reports the identifier of a freshly built image on one
//! line of its log; the line shape differs per cloud provider. This module
//! holds the provider patterns and the single extraction routine the build
//! stages share. A log without a matching line means the build failed.

use crate::domain::errors::{PropError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static AMI_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^us-east-1: (.+)$").expect("valid AMI pattern"));

static GCE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)A disk image was created: (.+)$").expect("valid GCE pattern"));

/// The provider-specific log line announcing a created image.
///
/// # Examples
///
/// ```
/// use pipecfg::domain::{extract_image_id, ImageIdPattern};
///
/// let log = "Build 'amazon-ebs' finished.\nus-east-1: ami-0a1b2c3d\n";
/// let id = extract_image_id(log, ImageIdPattern::AwsAmi).unwrap();
/// assert_eq!(id, "ami-0a1b2c3d");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageIdPattern {
    /// AWS AMI builds report `us-east-1: <ami id>` at line start.
    AwsAmi,
    /// GCE image builds report `A disk image was created: <image id>`.
    GceImage,
}

impl ImageIdPattern {
    fn regex(&self) -> &'static Regex {
        match self {
            ImageIdPattern::AwsAmi => &AMI_LINE,
            ImageIdPattern::GceImage => &GCE_LINE,
        }
    }

    /// Returns the pattern source text, for error reporting.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageIdPattern::AwsAmi => "^us-east-1: (.+)$",
            ImageIdPattern::GceImage => "A disk image was created: (.+)$",
        }
    }
}

/// Extracts the created image identifier from a build log.
///
/// Scans the whole log for the first line matching the provider pattern and
/// returns the captured identifier. Returns [`PropError::PatternNotFound`]
/// when no line matches, which callers treat as a failed build.
///
/// # Examples
///
/// ```
/// use pipecfg::domain::{extract_image_id, ImageIdPattern};
///
/// let log = "==> Builds finished.\nA disk image was created: scylla-5-0-0\n";
/// let id = extract_image_id(log, ImageIdPattern::GceImage).unwrap();
/// assert_eq!(id, "scylla-5-0-0");
///
/// assert!(extract_image_id("nothing here", ImageIdPattern::AwsAmi).is_err());
/// ```
pub fn extract_image_id(log: &str, pattern: ImageIdPattern) -> Result<String> {
    match pattern.regex().captures(log) {
        Some(caps) => {
            // `$` stops before `\n` but not `\r`; keep CRLF logs clean
            let id = caps[1].trim_end_matches('\r').to_string();
            tracing::debug!("extracted image id '{}' from build log", id);
            Ok(id)
        }
        None => Err(PropError::PatternNotFound {
            pattern: pattern.as_str().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_ami_id() {
        let log = "some output\nus-east-1: ami-0123456789abcdef0\nmore output\n";
        let id = extract_image_id(log, ImageIdPattern::AwsAmi).unwrap();
        assert_eq!(id, "ami-0123456789abcdef0");
    }

    #[test]
    fn test_ami_pattern_anchored_to_line_start() {
        // region mentioned mid-line must not match
        let log = "copying to us-east-1: ami-0123\n";
        assert!(extract_image_id(log, ImageIdPattern::AwsAmi).is_err());
    }

    #[test]
    fn test_extract_gce_id() {
        let log = "==> googlecompute: A disk image was created: scylla-image-1\n";
        let id = extract_image_id(log, ImageIdPattern::GceImage).unwrap();
        assert_eq!(id, "scylla-image-1");
    }

    #[test]
    fn test_missing_pattern_is_error() {
        let err = extract_image_id("build failed\n", ImageIdPattern::AwsAmi).unwrap_err();
        assert!(matches!(err, PropError::PatternNotFound { .. }));
    }

    #[test]
    fn test_crlf_log() {
        let log = "line one\r\nus-east-1: ami-0feed\r\n";
        let id = extract_image_id(log, ImageIdPattern::AwsAmi).unwrap();
        assert_eq!(id, "ami-0feed");
    }

    #[test]
    fn test_first_match_wins() {
        let log = "us-east-1: ami-first\nus-east-1: ami-second\n";
        let id = extract_image_id(log, ImageIdPattern::AwsAmi).unwrap();
        assert_eq!(id, "ami-first");
    }
}
