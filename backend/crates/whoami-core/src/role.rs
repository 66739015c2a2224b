/// A role granted to an identity, addressable as `base_uri + name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub base_uri: String,
    pub name: String,
}

impl Role {
    pub fn new<B: Into<String>, N: Into<String>>(base_uri: B, name: N) -> Self {
        Self {
            base_uri: base_uri.into(),
            name: name.into(),
        }
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.base_uri, self.name)
    }

    pub fn simple_name(&self) -> &str {
        &self.name
    }
}
