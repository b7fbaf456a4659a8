use std::fmt;
use std::str::FromStr;

use crate::error::TypeError;

/// Namespace tag marking an identifier as an immutable-storage reference.
pub const URN_NAMESPACE: &str = "immutable";

/// Structured identifier for a stored record.
///
/// The canonical string form is `{namespace}:{method}:{specific}`. The
/// namespace says "this is an immutable-storage reference", the method names
/// the backend variant holding the record, and the specific part is the
/// record's raw id. Splitting namespace from method lets several backend
/// implementations coexist under one identifier space: callers address
/// records without knowing which backend stores them, and each backend
/// rejects identifiers not addressed to it.
///
/// The specific part is kept opaque at this layer — its shape belongs to the
/// backend method that minted it.
///
/// # Examples
///
/// ```
/// use keep_types::RecordUrn;
///
/// let urn: RecordUrn = "immutable:entity-storage:0a1b2c".parse().unwrap();
/// assert_eq!(urn.namespace(), "immutable");
/// assert_eq!(urn.method(), "entity-storage");
/// assert_eq!(urn.specific(), "0a1b2c");
/// assert!("not-a-valid-id".parse::<RecordUrn>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordUrn {
    namespace: String,
    method: String,
    specific: String,
}

impl RecordUrn {
    /// Build a URN from its parts, validating each segment.
    ///
    /// Segments must be non-empty and must not contain the `:` delimiter,
    /// so that the string form always round-trips through [`parse`].
    ///
    /// [`parse`]: RecordUrn::parse
    pub fn new(
        namespace: impl Into<String>,
        method: impl Into<String>,
        specific: impl Into<String>,
    ) -> Result<Self, TypeError> {
        let namespace = namespace.into();
        let method = method.into();
        let specific = specific.into();
        validate_segment(&namespace)?;
        validate_segment(&method)?;
        validate_segment(&specific)?;
        Ok(Self {
            namespace,
            method,
            specific,
        })
    }

    /// Parse the canonical string form.
    ///
    /// Fails with [`TypeError::Malformed`] when the input does not have
    /// exactly three colon-delimited segments or any segment is empty.
    pub fn parse(input: &str) -> Result<Self, TypeError> {
        let parts: Vec<&str> = input.split(':').collect();
        if parts.len() != 3 {
            return Err(TypeError::Malformed {
                input: input.to_string(),
                reason: "expected three colon-delimited segments",
            });
        }
        if parts.iter().any(|part| part.is_empty()) {
            return Err(TypeError::Malformed {
                input: input.to_string(),
                reason: "segments must not be empty",
            });
        }
        Ok(Self {
            namespace: parts[0].to_string(),
            method: parts[1].to_string(),
            specific: parts[2].to_string(),
        })
    }

    /// Build a URN in the `immutable` namespace for a generated record id.
    ///
    /// This is the form backends mint when storing a record; `method` names
    /// the backend variant doing the storing.
    pub fn for_record(method: impl Into<String>, id: &crate::id::RecordId) -> Result<Self, TypeError> {
        Self::new(URN_NAMESPACE, method, id.to_hex())
    }

    /// The namespace segment.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The backend method segment.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The method-specific suffix (the record's raw id).
    pub fn specific(&self) -> &str {
        &self.specific
    }
}

impl fmt::Display for RecordUrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.namespace, self.method, self.specific)
    }
}

impl FromStr for RecordUrn {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn validate_segment(segment: &str) -> Result<(), TypeError> {
    if segment.is_empty() {
        return Err(TypeError::Malformed {
            input: segment.to_string(),
            reason: "segments must not be empty",
        });
    }
    if segment.contains(':') {
        return Err(TypeError::Malformed {
            input: segment.to_string(),
            reason: "segments must not contain ':'",
        });
    }
    Ok(())
}
