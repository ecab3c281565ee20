//! PEM (RFC 7468) wrapping of DER documents

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use ecsig_api::error::EncodingResult;
use ecsig_api::Error;

/// Base64 characters per body line
pub const LINE_WIDTH: usize = 64;

fn begin_marker(label: &str) -> String {
    format!("-----BEGIN {}-----", label)
}

fn end_marker(label: &str) -> String {
    format!("-----END {}-----", label)
}

/// Wrap `der` as a PEM document with the given label
pub fn to_pem(der: &[u8], label: &str) -> String {
    let body = STANDARD.encode(der);

    let mut pem = begin_marker(label);
    pem.push('\n');
    // base64 output is ASCII, so every offset is a char boundary
    let mut start = 0;
    while start < body.len() {
        let end = (start + LINE_WIDTH).min(body.len());
        pem.push_str(&body[start..end]);
        pem.push('\n');
        start = end;
    }
    pem.push_str(&end_marker(label));
    pem.push('\n');
    pem
}

/// Extract and decode the first `label` block in `pem`
///
/// Text before the BEGIN marker (other PEM blocks, comments) is ignored, as
/// is everything after the END marker.
pub fn from_pem(pem: &str, label: &str) -> EncodingResult<Vec<u8>> {
    let begin = begin_marker(label);
    let end = end_marker(label);

    let start = pem.find(&begin).ok_or_else(|| Error::MalformedPem {
        message: format!("missing '{}'", begin),
    })?;
    let body_start = start + begin.len();
    let body_len = pem[body_start..].find(&end).ok_or_else(|| Error::MalformedPem {
        message: format!("missing '{}'", end),
    })?;

    let body: String = pem[body_start..body_start + body_len]
        .lines()
        .map(str::trim)
        .collect();
    if body.is_empty() {
        return Err(Error::MalformedPem {
            message: format!("empty '{}' block", label),
        });
    }

    STANDARD.decode(body.as_bytes()).map_err(|e| Error::MalformedPem {
        message: format!("invalid base64 body: {}", e),
    })
}
