use serde::{Deserialize, Serialize};

/// Body returned by the liveness endpoint.
pub const PING_MESSAGE: &str = "ping test for calorie tracker!!";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Ping {
    pub message: String,
}

impl Default for Ping {
    fn default() -> Self {
        Self { message: PING_MESSAGE.to_string() }
    }
}
