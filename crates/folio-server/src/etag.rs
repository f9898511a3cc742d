//! Strong ETags for rendered pages and static assets.
//!
//! An ETag is the SHA-256 of the response body, so identical bytes always get
//! the same tag regardless of which request produced them.

use sha2::{Digest, Sha256};

/// Compute a quoted strong ETag over `body`.
pub fn compute_etag(body: &[u8]) -> String {
  let hash = Sha256::digest(body);
  format!("\"{}\"", hex::encode(hash))
}

/// Whether an `If-None-Match` header value selects `etag`.
///
/// Handles `*`, comma-separated lists and weak (`W/`) validators, which
/// compare weakly for GET.
pub fn if_none_match(header: &str, etag: &str) -> bool {
  header.split(',').map(str::trim).any(|candidate| {
    candidate == "*" || candidate.trim_start_matches("W/") == etag
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn same_body_same_tag() {
    assert_eq!(compute_etag(b"<p>hi</p>"), compute_etag(b"<p>hi</p>"));
    assert_ne!(compute_etag(b"<p>hi</p>"), compute_etag(b"<p>ho</p>"));
  }

  #[test]
  fn tag_is_quoted_hex() {
    let tag = compute_etag(b"");
    assert!(tag.starts_with('"') && tag.ends_with('"'));
    assert_eq!(tag.len(), 64 + 2);
  }

  #[test]
  fn if_none_match_forms() {
    let tag = compute_etag(b"x");
    assert!(if_none_match(&tag, &tag));
    assert!(if_none_match("*", &tag));
    assert!(if_none_match(&format!("\"other\", W/{tag}"), &tag));
    assert!(!if_none_match("\"other\"", &tag));
  }
}
