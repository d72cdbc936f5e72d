/// Parse a `KEY=VALUE` argument such as `--alias ~=./lib` or
/// `--global react=React`.
///
/// The split happens at the first `=`, so values may contain `=`. Both
/// sides must be non-empty.
///
/// # Errors
///
/// Returns an error message if the `=` is missing or either side is empty.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let Some((key, value)) = s.split_once('=') else {
        return Err(format!("expected KEY=VALUE, got '{s}'"));
    };

    let key = key.trim();
    let value = value.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{s}'"));
    }
    if value.is_empty() {
        return Err(format!("missing value in '{s}'"));
    }

    Ok((key.to_string(), value.to_string()))
}
