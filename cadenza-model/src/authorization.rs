use std::fmt::{self, Display};

/// Permission state of the protected catalog store.
///
/// Values are only ever read from the store; the single way to move between
/// them from inside this workspace is an authorization request, and nothing
/// moves a status back to [`AuthorizationStatus::NotDetermined`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AuthorizationStatus {
    /// The user has not been asked yet
    NotDetermined,
    /// The user declined access
    Denied,
    /// Access is blocked by device policy; the user cannot grant it
    Restricted,
    /// Access granted
    Authorized,
}

impl AuthorizationStatus {
    pub const fn is_authorized(self) -> bool {
        matches!(self, AuthorizationStatus::Authorized)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            AuthorizationStatus::NotDetermined => "not_determined",
            AuthorizationStatus::Denied => "denied",
            AuthorizationStatus::Restricted => "restricted",
            AuthorizationStatus::Authorized => "authorized",
        }
    }
}

impl Display for AuthorizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
