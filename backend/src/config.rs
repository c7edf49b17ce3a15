use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::EdgeError;

pub const DEFAULT_ASSETS_DIR: &str = "public";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VapiCredentials {
    pub assistant_id: String,
    pub public_key: String,
}

#[derive(Clone, Debug)]
pub struct EdgeConfig {
    pub assets_dir: PathBuf,
    pub bind_addr: SocketAddr,
    /// Present only when both Vapi variables are set and non-empty.
    pub vapi: Option<VapiCredentials>,
}

impl EdgeConfig {
    pub fn from_env() -> Result<Self, EdgeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EdgeError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let assets_dir = non_empty("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR));

        let bind = non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse()
            .map_err(|e| EdgeError::Config(format!("BIND_ADDR {:?} is not a socket address: {}", bind, e)))?;

        let vapi = match (non_empty("VAPI_ASSISTANT_ID"), non_empty("VAPI_PUBLIC_KEY")) {
            (Some(assistant_id), Some(public_key)) => Some(VapiCredentials {
                assistant_id,
                public_key,
            }),
            _ => None,
        };

        Ok(Self {
            assets_dir,
            bind_addr,
            vapi,
        })
    }
}
