use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// The asserted attributes are unusable (client-caused)
    #[error("Malformed input: {message} {location}")]
    MalformedInput {
        message: String,
        location: ErrorLocation,
    },

    /// The role capability failed while enriching an identity
    #[error("Role lookup failed for {identity_id}: {source} {location}")]
    RoleLookupFailed {
        identity_id: String,
        #[source]
        source: Box<CoreError>,
        location: ErrorLocation,
    },

    /// Backing directory failure raised by a role resolver
    #[error("Directory error: {message} {location}")]
    Directory {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn malformed_input<S: Into<String>>(message: S) -> Self {
        CoreError::MalformedInput {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn directory<S: Into<String>>(message: S) -> Self {
        CoreError::Directory {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn role_lookup_failed<S: Into<String>>(identity_id: S, source: CoreError) -> Self {
        CoreError::RoleLookupFailed {
            identity_id: identity_id.into(),
            source: Box::new(source),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Client-facing message, without the source location
    pub fn message(&self) -> String {
        match self {
            Self::MalformedInput { message, .. } => message.clone(),
            Self::RoleLookupFailed { identity_id, .. } => {
                format!("Error determining roles for {}", identity_id)
            }
            Self::Directory { message, .. } => message.clone(),
        }
    }

    /// True when the caller supplied bad input, as opposed to a dependency failing
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }
}

pub type CoreResult<T> = StdResult<T, CoreError>;
