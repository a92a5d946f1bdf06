//! Minimal HTML sanitizer.
//!
//! Pure function with a fixed contract: strip `<script>` blocks and inline
//! event-handler attributes from user-submitted HTML before it is relayed.
//! Everything else in the markup passes through untouched.

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script.*?>.*?</script>").expect("Invalid Regex"));

static EVENT_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\s(on\w+)=["'][^"']*["']"#).expect("Invalid Regex"));

/// Remove script blocks and `on*` event attributes from raw HTML.
pub fn sanitize(raw_html: &str) -> String {
    let without_scripts = SCRIPT_BLOCK_RE.replace_all(raw_html, "");
    EVENT_ATTR_RE.replace_all(&without_scripts, "").into_owned()
}
