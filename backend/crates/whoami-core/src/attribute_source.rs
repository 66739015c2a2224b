use std::collections::HashMap;

/// Read access to the attributes asserted for a single request.
///
/// Multi-valued attributes are not modeled: implementations return the first
/// (or only) value. An absent attribute is `None`.
pub trait AttributeSource {
    fn get(&self, name: &str) -> Option<&str>;
}

/// Exact, case-sensitive lookup
impl AttributeSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        HashMap::get(self, name).map(String::as_str)
    }
}
