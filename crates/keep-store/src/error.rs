use keep_types::TypeError;
use thiserror::Error;

/// The backing-store call an operation was performing when it failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageOperation {
    Storing,
    Getting,
    Removing,
}

impl StorageOperation {
    /// Wire tag for this operation's failure.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Storing => "storingFailed",
            Self::Getting => "gettingFailed",
            Self::Removing => "removingFailed",
        }
    }
}

impl std::fmt::Display for StorageOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Errors from immutable-record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The identifier string fails structural parsing.
    #[error("malformed identifier: {0}")]
    Malformed(#[from] TypeError),

    /// The identifier is addressed to a different backend. Distinct from
    /// not-found so multi-backend dispatchers can route elsewhere.
    #[error("identifier {urn} is not addressed to this backend (expected method {expected})")]
    NamespaceMismatch { urn: String, expected: String },

    /// No record exists for the given raw id.
    #[error("record not found: {0}")]
    NotFound(String),

    /// The record exists but the caller is not its controller.
    #[error("controller is not authorized to remove record {0}")]
    NotAuthorized(String),

    /// An empty argument was rejected before any backing-store call.
    #[error("argument {0:?} must not be empty")]
    EmptyArgument(&'static str),

    /// Unexpected failure from the backing engine, with the original cause.
    #[error("{operation} in entity storage")]
    Storage {
        operation: StorageOperation,
        #[source]
        source: keep_entity::EntityError,
    },
}

impl StoreError {
    /// Wrap a backing-engine failure with the operation being performed.
    pub fn storage(operation: StorageOperation, source: keep_entity::EntityError) -> Self {
        Self::Storage { operation, source }
    }

    /// Stable wire code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Malformed(_) => "malformedIdentifier",
            Self::NamespaceMismatch { .. } => "namespaceMismatch",
            Self::NotFound(_) => "notFound",
            Self::NotAuthorized(_) => "notAuthorized",
            Self::EmptyArgument(_) => "invalidArgument",
            Self::Storage { operation, .. } => operation.tag(),
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
