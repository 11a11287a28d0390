// tests/common/mod.rs
pub use axum::Router;
pub use tokio::task::JoinHandle;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use reqwest::Client;

use crate::creds::{CredentialStore, Credentials};
use crate::error::RotatorError;
use crate::sinks::parameter_store::{KeyResolver, SecureParameter, SecureParameterWriter};

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}

pub fn edl_credentials() -> Credentials {
    Credentials {
        username: "edl-user".to_string(),
        password: "edl-pass".to_string(),
    }
}

/// In-memory stand-in for the parameter store: readable credential entries
/// plus a record of every secure write. Clones share state.
#[derive(Default, Clone)]
pub struct MemoryParameterStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<Mutex<Vec<SecureParameter>>>,
}

impl MemoryParameterStore {
    pub fn with_edl_credentials(username: &str, password: &str) -> Self {
        let store = Self::default();
        store.insert("edl_username", username);
        store.insert("edl_password", password);
        store
    }

    pub fn insert(&self, name: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
    }

    pub fn writes(&self) -> Vec<SecureParameter> {
        self.writes.lock().unwrap().clone()
    }

    /// Value readable under `name` after all writes — overwrite semantics.
    pub fn stored_value(&self, name: &str) -> Option<String> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|parameter| parameter.name == name)
            .map(|parameter| parameter.value.clone())
    }
}

impl CredentialStore for MemoryParameterStore {
    async fn read_decrypted(&self, name: &str) -> Result<String, RotatorError> {
        self.entries
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| RotatorError::CredentialStore(format!("parameter '{name}' not found")))
    }
}

impl SecureParameterWriter for MemoryParameterStore {
    async fn put_secure(&self, parameter: &SecureParameter) -> Result<(), RotatorError> {
        self.writes.lock().unwrap().push(parameter.clone());
        Ok(())
    }
}

/// Credential store that always fails, as if the service were unreachable.
pub struct UnreachableCredentialStore;

impl CredentialStore for UnreachableCredentialStore {
    async fn read_decrypted(&self, name: &str) -> Result<String, RotatorError> {
        Err(RotatorError::CredentialStore(format!(
            "connection refused reading '{name}'"
        )))
    }
}

/// Fixed alias table; unknown aliases fail resolution.
#[derive(Default, Clone)]
pub struct StaticKeyResolver {
    keys: HashMap<String, String>,
}

impl StaticKeyResolver {
    pub fn with_alias(alias: &str, key_id: &str) -> Self {
        let mut keys = HashMap::new();
        keys.insert(alias.to_string(), key_id.to_string());
        Self { keys }
    }
}

impl KeyResolver for StaticKeyResolver {
    async fn resolve_alias(&self, alias: &str) -> Result<String, RotatorError> {
        self.keys
            .get(alias)
            .cloned()
            .ok_or_else(|| RotatorError::KeyResolution {
                alias: alias.to_string(),
                message: "alias not found".to_string(),
            })
    }
}
