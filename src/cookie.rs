//! Cookie string parsing

/// Value of the first cookie called `name` in a `document.cookie` string,
/// percent-decoded. A value with a truncated or non-hex escape, or one that
/// is not UTF-8 once decoded, counts as absent.
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }

    let prefix = format!("{}=", name);
    let raw = cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(prefix.as_str()))?;

    if !has_valid_escapes(raw) {
        tracing::warn!("Cookie {} holds a malformed percent-escape", name);
        return None;
    }

    match urlencoding::decode(raw) {
        Ok(value) => Some(value.into_owned()),
        Err(e) => {
            tracing::warn!("Cookie {} holds an undecodable value: {}", name, e);
            None
        }
    }
}

/// Every `%` starts a two-digit hex escape
fn has_valid_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}
