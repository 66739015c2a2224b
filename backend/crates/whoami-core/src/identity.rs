use serde::{Deserialize, Serialize};

/// Value of `@type` for every resolved identity
pub const IDENTITY_KIND: &str = "User";

/// Canonical identity record for an authenticated user.
///
/// Serializes as a JSON-LD style object: the framing fields use `@id`,
/// `@type` and `@context`, everything else is camelCase. Empty strings and
/// empty lists are left out of the wire form entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@type", default = "default_kind")]
    pub kind: String,

    #[serde(rename = "@context", default, skip_serializing_if = "String::is_empty")]
    pub context: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locator_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl Identity {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            kind: default_kind(),
            context: String::new(),
            display_name: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            locator_ids: Vec::new(),
            roles: Vec::new(),
        }
    }

    /// Append role names not already present, keeping first-seen order
    pub fn merge_roles<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.roles.contains(&name) {
                self.roles.push(name);
            }
        }
    }
}

fn default_kind() -> String {
    IDENTITY_KIND.to_string()
}
