//! User data model and field validation.
//!
//! The same rules apply to creation input and to records read back from the
//! upstream API: a full name with an internal space (stored in title case), a
//! non-empty username, a plausible email address, and a phone number of at
//! least [`PHONE_MIN_LEN`] characters.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use self::title_case::title_case;

mod title_case;

/// Minimum number of characters in a phone number.
pub const PHONE_MIN_LEN: usize = 7;

/// Validation errors for user fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// The name has no internal space, so it is not a full name.
    NameMissingSpace,
    /// The username is empty once trimmed.
    EmptyUsername,
    /// The email address is not of the form `local@domain.tld`.
    InvalidEmail,
    /// The phone number is too short.
    PhoneTooShort {
        /// Required minimum length.
        min: usize,
    },
}

impl UserValidationError {
    /// Request field the error refers to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameMissingSpace => "name",
            Self::EmptyUsername => "username",
            Self::InvalidEmail => "email",
            Self::PhoneTooShort { .. } => "phone",
        }
    }

    /// Stable machine code placed in error details.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameMissingSpace => "name_not_full",
            Self::EmptyUsername => "empty_username",
            Self::InvalidEmail => "invalid_email",
            Self::PhoneTooShort { .. } => "phone_too_short",
        }
    }
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameMissingSpace => write!(f, "name must be a full name"),
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::InvalidEmail => write!(f, "email must be a valid email address"),
            Self::PhoneTooShort { min } => {
                write!(f, "phone number must be at least {min} characters")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Full name, stored in title case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    /// Validate and canonicalise a full name.
    ///
    /// # Examples
    /// ```
    /// use post_aggregator::domain::FullName;
    ///
    /// let name = FullName::new("ada LOVELACE").expect("full name");
    /// assert_eq!(name.as_ref(), "Ada Lovelace");
    /// assert!(FullName::new("Ada").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = raw.as_ref().trim();
        if !trimmed.contains(' ') {
            return Err(UserValidationError::NameMissingSpace);
        }
        Ok(Self(title_case(trimmed)))
    }
}

/// Account handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Validate a username.
    pub fn new(raw: impl Into<String>) -> Result<Self, UserValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        Ok(Self(raw))
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Email address with a `local@domain.tld` shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate an email address.
    pub fn new(raw: impl Into<String>) -> Result<Self, UserValidationError> {
        let raw = raw.into();
        if !email_regex().is_match(&raw) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(raw))
    }
}

/// Phone number of at least [`PHONE_MIN_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate a phone number.
    pub fn new(raw: impl Into<String>) -> Result<Self, UserValidationError> {
        let raw = raw.into();
        if raw.chars().count() < PHONE_MIN_LEN {
            return Err(UserValidationError::PhoneTooShort { min: PHONE_MIN_LEN });
        }
        Ok(Self(raw))
    }
}

macro_rules! string_newtype_impls {
    ($($name:ident),* $(,)?) => {
        $(
            impl AsRef<str> for $name {
                fn as_ref(&self) -> &str {
                    self.0.as_str()
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<$name> for String {
                fn from(value: $name) -> Self {
                    value.0
                }
            }
        )*
    };
}

string_newtype_impls!(FullName, Username, EmailAddress, PhoneNumber);

/// Validated user creation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Canonical full name.
    pub name: FullName,
    /// Account handle.
    pub username: Username,
    /// Contact email.
    pub email: EmailAddress,
    /// Contact phone.
    pub phone: PhoneNumber,
}

impl NewUser {
    /// Validate raw creation fields, reporting the first failing field.
    pub fn try_new(
        name: impl AsRef<str>,
        username: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self {
            name: FullName::new(name)?,
            username: Username::new(username)?,
            email: EmailAddress::new(email)?,
            phone: PhoneNumber::new(phone)?,
        })
    }
}

/// User as exposed by this service.
///
/// ## Invariants
/// - every field passed the rules in this module.
/// - `name` is in title case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: u64,
    name: FullName,
    username: Username,
    email: EmailAddress,
    phone: PhoneNumber,
}

impl User {
    /// Attach an upstream identifier to validated fields.
    #[must_use]
    pub fn new(id: u64, fields: NewUser) -> Self {
        let NewUser {
            name,
            username,
            email,
            phone,
        } = fields;
        Self {
            id,
            name,
            username,
            email,
            phone,
        }
    }

    /// Upstream identifier.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Title-cased full name.
    #[must_use]
    pub fn name(&self) -> &FullName {
        &self.name
    }

    /// Account handle.
    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Contact email.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Contact phone.
    #[must_use]
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDto {
    id: u64,
    name: String,
    username: String,
    email: String,
    phone: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            name: value.name.into(),
            username: value.username.into(),
            email: value.email.into(),
            phone: value.phone.into(),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let fields = NewUser::try_new(value.name, value.username, value.email, value.phone)?;
        Ok(Self::new(value.id, fields))
    }
}

#[cfg(test)]
mod tests;
