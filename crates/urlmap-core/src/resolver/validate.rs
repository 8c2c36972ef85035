//! Syntactic checks for base URLs.

use url::Url;

/// Checks that `raw` is an absolute URL with a scheme and a non-empty host.
///
/// Returns a short human-readable reason on failure. Reachability is never
/// checked. The WHATWG parser silently drops tabs/newlines and repairs forms
/// like `https:host`, so the raw text itself must be free of whitespace and
/// control characters and must spell out `scheme://`. A missing trailing `/`
/// is accepted but logged, since consumers append page names directly to the base.
pub(crate) fn validate_base_url(raw: &str) -> Result<(), String> {
    if let Some(c) = raw.chars().find(|c| c.is_whitespace() || c.is_control()) {
        return Err(format!("contains whitespace or control character {c:?}"));
    }
    let parsed = Url::parse(raw).map_err(|e| e.to_string())?;
    match parsed.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(format!("'{}' URL has no host", parsed.scheme())),
    }
    let scheme_len = parsed.scheme().len();
    let has_authority = raw
        .get(scheme_len..)
        .map(|rest| rest.starts_with("://"))
        .unwrap_or(false);
    if !has_authority {
        return Err(format!("expected '{}://' followed by a host", parsed.scheme()));
    }
    if !raw.ends_with('/') {
        tracing::warn!(url = raw, "base URL does not end with '/'; page links may be malformed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https_with_host() {
        assert!(validate_base_url("https://docs.gtk.org/glib/").is_ok());
        assert!(validate_base_url("https://gnome.pages.gitlab.gnome.org/libdex/").is_ok());
        assert!(validate_base_url("http://localhost:8080/docs/").is_ok());
    }

    #[test]
    fn accepts_missing_trailing_slash() {
        assert!(validate_base_url("https://docs.gtk.org/glib").is_ok());
    }

    #[test]
    fn rejects_relative() {
        assert!(validate_base_url("not a url").is_err());
        assert!(validate_base_url("docs.gtk.org/glib/").is_err());
        assert!(validate_base_url("/glib/").is_err());
        assert!(validate_base_url("").is_err());
    }

    #[test]
    fn rejects_hostless() {
        let reason = validate_base_url("mailto:someone").unwrap_err();
        assert!(reason.contains("no host"), "{reason}");
        assert!(validate_base_url("file:///usr/share/doc/glib/").is_err());
        assert!(validate_base_url("https://").is_err());
    }

    #[test]
    fn rejects_interior_whitespace_and_controls() {
        let reason = validate_base_url("https://docs.gtk.org/gl\tib/").unwrap_err();
        assert!(reason.contains("whitespace"), "{reason}");
        assert!(validate_base_url("https://docs.gtk.org/gl\nib/").is_err());
        assert!(validate_base_url("https://docs.gtk.org/gl ib/").is_err());
        assert!(validate_base_url("https://docs.gtk.org/\u{7f}/").is_err());
    }

    #[test]
    fn rejects_missing_authority_slashes() {
        let reason = validate_base_url("https:docs.gtk.org").unwrap_err();
        assert!(reason.contains("https://"), "{reason}");
        assert!(validate_base_url("https:/docs.gtk.org/glib/").is_err());
        assert!(validate_base_url("http:\\\\docs.gtk.org\\glib/").is_err());
    }

    #[test]
    fn accepts_uppercase_scheme() {
        assert!(validate_base_url("HTTPS://docs.gtk.org/glib/").is_ok());
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        assert!(validate_base_url(" https://docs.gtk.org/glib/").is_err());
        assert!(validate_base_url("https://docs.gtk.org/glib/\n").is_err());
    }
}
