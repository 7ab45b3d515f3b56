use std::collections::HashMap;

use fractic_server_error::ServerError;
use regex::Regex;

use crate::errors::UnreplacedPlaceholdersRemain;

/// Fills `{{Key}}` placeholders in `content`. Unknown keys are an error.
pub(crate) fn replace_all_placeholders_in_string(
    content: &str,
    placeholders: &HashMap<&str, String>,
) -> Result<String, ServerError> {
    let placeholder_pattern =
        Regex::new(r"\{\{(\w+)\}\}").expect("hardcoded regex should be valid");

    let mut unknown_keys = Vec::new();
    let result = placeholder_pattern.replace_all(content, |caps: &regex::Captures| {
        let key = &caps[1]; // The content inside {{ }}.
        if let Some(value) = placeholders.get(key) {
            value.clone()
        } else {
            unknown_keys.push(key.to_string());
            caps[0].to_string() // The full '{{Key}}' string.
        }
    });
    let replaced_content = result.into_owned();

    if !unknown_keys.is_empty() {
        return Err(UnreplacedPlaceholdersRemain::new(&unknown_keys));
    }
    Ok(replaced_content)
}
