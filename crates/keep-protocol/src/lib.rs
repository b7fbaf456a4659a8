//! REST wire contract for Keep.
//!
//! Defines the request/response shapes, endpoint paths, and error-body
//! format spoken between Keep clients and servers. Field names are
//! camelCase on the wire; payload bytes travel base64-encoded.

pub mod endpoint;
pub mod error;
pub mod message;

pub use endpoint::{endpoints, HealthResponse, CONTROLLER_HEADER};
pub use error::{ProtocolError, ProtocolResult};
pub use message::{
    codes, decode_data, encode_data, ErrorBody, GetRequest, GetResponse, StoreRequest,
    StoreResponse,
};
