//! Link deriver: turns a title like `Example 3.07` into `Ch03/Eg07.html`.
//!
//! Number parsing is deliberately lenient. A component without leading
//! digits becomes `NaN` in the link instead of failing the run.

use tracing::trace;

use nocindex_shared::{Link, LinkNumber, NocIndexError, Result};

/// Derive the relative page link for a record title.
///
/// Only the second space-separated token is read; it is split on `.` into
/// chapter and example, and anything after a second `.` is ignored.
/// Fails with [`NocIndexError::Format`] when the title contains no space.
pub fn derive_link(title: &str) -> Result<Link> {
    let code = title
        .split(' ')
        .nth(1)
        .ok_or_else(|| NocIndexError::format(title))?;

    let mut parts = code.split('.');
    let chapter = parts.next().map_or(LinkNumber::NaN, parse_leading_int);
    let example = parts.next().map_or(LinkNumber::NaN, parse_leading_int);

    let link = Link { chapter, example };
    trace!(title, %link, "derived link");
    Ok(link)
}

/// Parse the integer at the start of `s`.
///
/// Skips leading whitespace, accepts one `+` or `-`, then reads decimal
/// digits up to the first non-digit. No digits yields [`LinkNumber::NaN`].
/// There is no `0x` prefix handling, and digits are kept exactly however
/// many there are.
pub fn parse_leading_int(s: &str) -> LinkNumber {
    // Unicode White_Space; U+0085 is skipped and U+FEFF is not.
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    LinkNumber::from_digits(negative, &rest[..end])
}
