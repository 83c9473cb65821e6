//! Click record entity and the client metadata it is built from.

use chrono::{DateTime, Utc};
use std::fmt;
use std::net::SocketAddr;
use uuid::Uuid;

/// A single successful resolution of a link.
///
/// Immutable once written; only read back through paginated status queries.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickRecord {
    pub id: Uuid,
    pub link_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub client_descriptor: String,
}

impl ClickRecord {
    /// Creates a new ClickRecord instance.
    pub fn new(
        id: Uuid,
        link_id: Uuid,
        created_at: DateTime<Utc>,
        client_descriptor: String,
    ) -> Self {
        Self {
            id,
            link_id,
            created_at,
            client_descriptor,
        }
    }
}

/// Requester metadata captured when a short code is resolved.
///
/// Stored as a single free-text descriptor, see the [`fmt::Display`] impl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientData {
    /// Peer address as `ip:port`.
    pub ip: String,
    pub user_agent: String,
}

impl ClientData {
    pub fn new(ip: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            user_agent: user_agent.into(),
        }
    }

    /// Builds client data from the peer socket address and an optional user agent.
    pub fn from_peer(addr: SocketAddr, user_agent: Option<&str>) -> Self {
        Self::new(
            format!("{}:{}", addr.ip(), addr.port()),
            user_agent.unwrap_or_default(),
        )
    }
}

impl fmt::Display for ClientData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: {}", self.ip, self.user_agent)
    }
}
