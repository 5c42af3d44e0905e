//! Shared pieces used by every crate in the workspace: tracing setup and
//! the few wire types that are not tied to an entity.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ping_message_is_fixed() {
        let p = types::Ping::default();
        assert_eq!(p.message, types::PING_MESSAGE);
    }

    #[test]
    fn ping_serializes_as_message_object() {
        let v = serde_json::to_value(types::Ping::default()).unwrap();
        assert_eq!(v, serde_json::json!({"message": "ping test for calorie tracker!!"}));
    }
}
