//! Bounds-checked byte-slice helpers

use ecsig_api::error::EncodingResult;
use ecsig_api::Error;

/// Sub-range `data[start..end]`, or `data[start..]` when `end` is `None`
pub fn slice(data: &[u8], start: usize, end: Option<usize>) -> EncodingResult<&[u8]> {
    let end = end.unwrap_or(data.len());
    if start > end || end > data.len() {
        return Err(Error::InvalidLength {
            context: "byte slice",
            expected: end,
            actual: data.len(),
        });
    }
    Ok(&data[start..end])
}

/// Split off the first `n` bytes, failing if fewer are available
pub fn take<'a>(
    data: &'a [u8],
    n: usize,
    context: &'static str,
) -> EncodingResult<(&'a [u8], &'a [u8])> {
    if data.len() < n {
        return Err(Error::InvalidLength {
            context,
            expected: n,
            actual: data.len(),
        });
    }
    Ok(data.split_at(n))
}

/// Concatenate byte strings in order
pub fn concat<T: AsRef<[u8]>>(parts: &[T]) -> Vec<u8> {
    let total = parts.iter().map(|p| p.as_ref().len()).sum();
    let mut out = Vec::with_capacity(total);
    for part in parts {
        out.extend_from_slice(part.as_ref());
    }
    out
}
