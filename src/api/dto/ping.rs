//! DTOs for the health probe endpoint.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StoreStatus {
    Ok,
    Down,
}

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: StoreStatus,
}

impl From<bool> for PingResponse {
    fn from(healthy: bool) -> Self {
        Self {
            status: if healthy {
                StoreStatus::Ok
            } else {
                StoreStatus::Down
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        let up = serde_json::to_value(PingResponse::from(true)).unwrap();
        let down = serde_json::to_value(PingResponse::from(false)).unwrap();

        assert_eq!(up["status"], "OK");
        assert_eq!(down["status"], "DOWN");
    }
}
