//! Setting value validation.

use regex::Regex;
use std::sync::LazyLock;

use super::defaults::{LOGO_PATH, PUBLIC_BASE_URL, STORAGE_ROOT};

static RE_BASE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/?#]+(/[^\s?#]*)?$").unwrap());

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        STORAGE_ROOT => {
            if value.trim().is_empty() {
                return Err("must not be empty".into());
            }
            if value.contains('\0') {
                return Err("must not contain NUL bytes".into());
            }
        }
        PUBLIC_BASE_URL => {
            if !RE_BASE_URL.is_match(value) {
                return Err("must be an http(s) URL without query or fragment".into());
            }
        }
        LOGO_PATH => {
            if value.contains('\0') {
                return Err("must not contain NUL bytes".into());
            }
        }
        _ => return Err(format!("unknown setting key: {key}")),
    }
    Ok(())
}
