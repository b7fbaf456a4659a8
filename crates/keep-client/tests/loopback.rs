//! Client-against-live-server round trips over a loopback listener.

use std::sync::Arc;

use keep_client::ImmutableStorageClient;
use keep_entity::InMemoryEntityStore;
use keep_server::{KeepServer, ServerConfig};
use keep_store::{EntityStorageConnector, ImmutableStorage, StoreError};
use keep_types::RecordUrn;

async fn spawn_server() -> ImmutableStorageClient {
    let connector = EntityStorageConnector::new(InMemoryEntityStore::new());
    let config = ServerConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        ..ServerConfig::default()
    };
    let server = KeepServer::new(config, Arc::new(connector));
    let (addr, fut) = server.serve_with_bound_addr().await.unwrap();
    tokio::spawn(fut);
    ImmutableStorageClient::new(format!("http://{addr}"))
}

#[tokio::test]
async fn store_get_remove_over_http() {
    let client = spawn_server().await;

    let stored = client.store("did:example:alice", b"bytes over the wire").await.unwrap();
    assert_eq!(stored.id.method(), "entity-storage");

    let fetched = client.get(&stored.id, true).await.unwrap();
    assert_eq!(fetched.data.as_deref(), Some(&b"bytes over the wire"[..]));

    let receipt_only = client.get(&stored.id, false).await.unwrap();
    assert!(receipt_only.data.is_none());

    client.remove("did:example:alice", &stored.id).await.unwrap();
    let err = client.get(&stored.id, true).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn typed_errors_survive_the_wire() {
    let client = spawn_server().await;

    let stored = client.store("alice", b"hers").await.unwrap();

    // Ownership is enforced server-side and comes back as the typed error.
    let err = client.remove("mallory", &stored.id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotAuthorized(_)));

    // The record survived the denied removal.
    let fetched = client.get(&stored.id, true).await.unwrap();
    assert_eq!(fetched.data.as_deref(), Some(&b"hers"[..]));

    // An identifier addressed to another backend is a mismatch, not a miss.
    let foreign = RecordUrn::new("immutable", "other-method", "00".repeat(32)).unwrap();
    let err = client.get(&foreign, true).await.unwrap_err();
    assert!(matches!(err, StoreError::NamespaceMismatch { .. }));

    // Second removal of the same record reports not-found.
    client.remove("alice", &stored.id).await.unwrap();
    let err = client.remove("alice", &stored.id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn client_guards_fire_before_any_request() {
    // Nothing is listening on this port; a guard failure must not try to
    // connect at all.
    let client = ImmutableStorageClient::new("http://127.0.0.1:1");

    let err = client.store("", b"data").await.unwrap_err();
    assert!(matches!(err, StoreError::EmptyArgument("controller")));

    let err = client.store("alice", b"").await.unwrap_err();
    assert!(matches!(err, StoreError::EmptyArgument("data")));

    let urn = RecordUrn::new("immutable", "entity-storage", "00".repeat(32)).unwrap();
    let err = client.remove("", &urn).await.unwrap_err();
    assert!(matches!(err, StoreError::EmptyArgument("controller")));
}

#[tokio::test]
async fn unreachable_server_wraps_as_storage_failure() {
    let client = ImmutableStorageClient::new("http://127.0.0.1:1");
    let err = client.store("alice", b"data").await.unwrap_err();
    assert_eq!(err.code(), "storingFailed");
}
