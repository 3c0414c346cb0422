use soroban_sdk::{Env, String};

use crate::events;

pub const EMERGENCY_RESPONSE: &str = "Emergency contact: 112. Ambulance on its way.";

/// Broadcasts the caller's location and returns the dispatch message.
pub fn report_emergency(env: &Env, location: String) -> String {
    events::publish_emergency_reported(env, location);
    String::from_str(env, EMERGENCY_RESPONSE)
}
