//! Indirection from logical identity fields to concrete attribute names.

/// Built-in attribute names used whenever an override is left empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultAttributeNames {
    pub principal: &'static str,
    pub email: &'static str,
    pub display_name: &'static str,
    pub given_name: &'static str,
    pub family_name: &'static str,
    pub locators: &'static [&'static str],
}

pub const DEFAULT_ATTRIBUTE_NAMES: DefaultAttributeNames = DefaultAttributeNames {
    principal: "Eppn",
    email: "Mail",
    display_name: "Displayname",
    given_name: "Givenname",
    family_name: "Sn",
    locators: &["Employeenumber", "unique-id", "Eppn"],
};

/// Configured attribute names. Empty strings fall back to
/// [`DEFAULT_ATTRIBUTE_NAMES`].
///
/// `locators` distinguishes unset (`None`, use the default list) from
/// explicitly empty (`Some(vec![])`, derive no locators at all).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMapping {
    pub principal: String,
    pub email: String,
    pub display_name: String,
    pub given_name: String,
    pub family_name: String,
    pub locators: Option<Vec<String>>,
}

impl AttributeMapping {
    pub fn principal_field(&self) -> &str {
        one_of(&self.principal, DEFAULT_ATTRIBUTE_NAMES.principal)
    }

    pub fn email_field(&self) -> &str {
        one_of(&self.email, DEFAULT_ATTRIBUTE_NAMES.email)
    }

    pub fn display_name_field(&self) -> &str {
        one_of(&self.display_name, DEFAULT_ATTRIBUTE_NAMES.display_name)
    }

    pub fn given_name_field(&self) -> &str {
        one_of(&self.given_name, DEFAULT_ATTRIBUTE_NAMES.given_name)
    }

    pub fn family_name_field(&self) -> &str {
        one_of(&self.family_name, DEFAULT_ATTRIBUTE_NAMES.family_name)
    }

    /// Locator attribute names, in the order locators are built
    pub fn locator_fields(&self) -> Vec<&str> {
        match &self.locators {
            Some(configured) => configured.iter().map(String::as_str).collect(),
            None => DEFAULT_ATTRIBUTE_NAMES.locators.to_vec(),
        }
    }
}

fn one_of<'a>(configured: &'a str, default: &'static str) -> &'a str {
    if configured.is_empty() {
        default
    } else {
        configured
    }
}
