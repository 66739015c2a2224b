
use std::collections::HashMap;

/// Build an attribute source from literal pairs
pub(crate) fn attributes(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
