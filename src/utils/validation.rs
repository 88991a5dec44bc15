//! Input validation utilities

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validate a storage path reference
///
/// File paths are opaque references into blob storage, recorded verbatim.
/// They must be relative and must not traverse upward.
pub fn validate_file_path(path: &str) -> Result<(), &'static str> {
    if path.is_empty() {
        return Err("File path cannot be empty");
    }
    if path.starts_with('/') || path.starts_with('\\') {
        return Err("File path must be relative");
    }
    if path.split(['/', '\\']).any(|segment| segment == "..") {
        return Err("File path cannot traverse upward");
    }
    if path.chars().any(char::is_control) {
        return Err("File path contains control characters");
    }
    Ok(())
}

/// Validate photo metadata depth and size
///
/// Metadata is stored as-is, so oversized or deeply nested documents are
/// refused up front instead of bloating the photos table.
pub fn validate_metadata(metadata: &serde_json::Value) -> Result<(), &'static str> {
    fn depth(value: &serde_json::Value) -> usize {
        match value {
            serde_json::Value::Object(map) => {
                1 + map.values().map(depth).max().unwrap_or(0)
            }
            serde_json::Value::Array(items) => {
                1 + items.iter().map(depth).max().unwrap_or(0)
            }
            _ => 0,
        }
    }

    if !metadata.is_object() {
        return Err("Metadata must be a JSON object");
    }
    if depth(metadata) > 8 {
        return Err("Metadata is nested too deeply");
    }
    if metadata.to_string().len() > 16384 {
        return Err("Metadata exceeds maximum size of 16KB");
    }
    Ok(())
}
