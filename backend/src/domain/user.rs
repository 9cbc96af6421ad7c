//! User data model.
//!
//! Users are created once and never modified. Their fields are validated
//! value objects: construction trims surrounding whitespace and rejects blank
//! values, and [`EmailAddress`] additionally enforces a
//! `local-part@domain.tld` shape.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Validation errors returned while building a [`NewUser`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// Name was empty once trimmed.
    #[error("name must not be empty")]
    EmptyName,
    /// Email was empty once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Email did not match `local-part@domain.tld`.
    #[error("email must be a valid email address")]
    InvalidEmail,
    /// Role was empty once trimmed.
    #[error("role must not be empty")]
    EmptyRole,
}

/// Store-assigned user identifier.
///
/// User ids form their own sequence, independent from task ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! trimmed_text {
    ($(#[$meta:meta])* $name:ident, $empty:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Trim and validate the supplied value.
            pub fn new(value: impl AsRef<str>) -> Result<Self, UserValidationError> {
                let trimmed = value.as_ref().trim();
                if trimmed.is_empty() {
                    return Err($empty);
                }
                Ok(Self(trimmed.to_owned()))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_ref())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = UserValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

trimmed_text!(
    /// Display name of a user, trimmed and non-empty.
    UserName,
    UserValidationError::EmptyName
);

trimmed_text!(
    /// Free-form role label such as `developer`, trimmed and non-empty.
    Role,
    UserValidationError::EmptyRole
);

/// Email address, trimmed and shaped like `local-part@domain.tld`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

impl EmailAddress {
    /// Trim and validate the supplied address.
    ///
    /// # Examples
    /// ```
    /// use taskboard::domain::{EmailAddress, UserValidationError};
    ///
    /// assert!(EmailAddress::new(" a@b.co ").is_ok());
    /// assert_eq!(
    ///     EmailAddress::new("not-an-email"),
    ///     Err(UserValidationError::InvalidEmail)
    /// );
    /// ```
    pub fn new(value: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if !email_regex().is_match(trimmed) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated fields for a user that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Display name.
    pub name: UserName,
    /// Contact address.
    pub email: EmailAddress,
    /// Role label.
    pub role: Role,
}

impl NewUser {
    /// Validate raw strings into a [`NewUser`].
    ///
    /// Fields are checked in `name`, `email`, `role` order and the first
    /// failure is reported.
    pub fn try_from_strings(
        name: impl AsRef<str>,
        email: impl AsRef<str>,
        role: impl AsRef<str>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self {
            name: UserName::new(name)?,
            email: EmailAddress::new(email)?,
            role: Role::new(role)?,
        })
    }
}

/// Stored user.
///
/// ## Invariants
/// - `id` is unique among users.
/// - `name`, `email` and `role` satisfy their value-object rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(value_type = u64, example = 1)]
    id: UserId,
    #[schema(value_type = String, example = "John Doe")]
    name: UserName,
    #[schema(value_type = String, example = "john@example.com")]
    email: EmailAddress,
    #[schema(value_type = String, example = "developer")]
    role: Role,
}

impl User {
    /// Attach a store-assigned id to validated fields.
    pub fn new(id: UserId, user: NewUser) -> Self {
        let NewUser { name, email, role } = user;
        Self {
            id,
            name,
            email,
            role,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Contact address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Role label.
    pub fn role(&self) -> &Role {
        &self.role
    }
}
