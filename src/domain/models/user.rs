use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

const LOCAL_PART_MAX: usize = 64;
const DOMAIN_MAX: usize = 253;
const LABEL_MAX: usize = 63;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct UserId(String);
impl UserId {
    pub fn new(value: String) -> Result<Self, DomainError> {
        if value.is_empty() {
            return Err(DomainError::EmptyField("user_id"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Syntactically valid email address.
///
/// Accepts `local@domain` where the local part is a dot-atom and the domain
/// has at least two labels. Quoted local parts and IP literals are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct EmailAddress(String);
impl EmailAddress {
    pub fn new(value: String) -> Result<Self, DomainError> {
        if is_valid_email(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidEmail(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    const SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-";

    !local.is_empty()
        && local.len() <= LOCAL_PART_MAX
        && local
            .split('.')
            .all(|atom| {
                !atom.is_empty()
                    && atom
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || SPECIALS.contains(c))
            })
}

fn is_valid_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > DOMAIN_MAX {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= LABEL_MAX
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    // a purely numeric TLD is an address literal, not a hostname
    let tld_ok = labels
        .last()
        .is_some_and(|tld| !tld.chars().all(|c| c.is_ascii_digit()));
    labels_ok && tld_ok
}

/// Registered user as persisted in the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    user_id: UserId,
    name: String,
    email_id: EmailAddress,
    phone: String,
    image_paths: Vec<String>,
}

impl UserRecord {
    pub fn new(
        user_id: UserId,
        name: String,
        email_id: EmailAddress,
        phone: String,
        image_paths: Vec<String>,
    ) -> Self {
        Self {
            user_id,
            name,
            email_id,
            phone,
            image_paths,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn email_id(&self) -> &EmailAddress {
        &self.email_id
    }
    pub fn phone(&self) -> &str {
        &self.phone
    }
    pub fn image_paths(&self) -> &[String] {
        &self.image_paths
    }
}
