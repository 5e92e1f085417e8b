use super::SplitError;
use regex::Regex;

/// Split content into ordered chunks at every literal occurrence of `separator`
///
/// # Arguments
/// * `content` - Raw document text
/// * `separator` - Literal marker string delimiting chunk boundaries
///
/// # Returns
/// The ordered chunk list. Never empty: content with zero separators yields a
/// single chunk equal to the input, and separators at an edge produce empty
/// leading/trailing chunks.
///
/// Pure and deterministic; safe to call repeatedly with identical output.
pub fn split_content(content: &str, separator: &str) -> Result<Vec<String>, SplitError> {
    if separator.is_empty() {
        return Err(SplitError::EmptySeparator);
    }

    let repaired = repair_markup(content, separator);

    Ok(repaired.split(separator).map(str::to_string).collect())
}

/// Move closing tags after a separator to before it, prevents broken markup
///
/// A separator placed just before `</p>` would otherwise split inside the open
/// paragraph; relocating the run of whitespace-and-closing-tags makes the split
/// land after the element closes. Only a single run of closing tags is handled;
/// nested or malformed markup beyond that is not repaired.
fn repair_markup(content: &str, separator: &str) -> String {
    // Escape the separator so it matches literally inside the pattern
    let pattern = format!(r"({})((?:\s*</\w+>\s*)+)", regex::escape(separator));

    // Compilation only fails on a pathologically long separator; skip the
    // repair in that case and split the content as-is
    match Regex::new(&pattern) {
        Ok(re) => re.replace_all(content, "$2$1").into_owned(),
        Err(_) => content.to_string(),
    }
}
