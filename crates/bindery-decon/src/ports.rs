//! Capability contracts for the decontamination drill
//!
//! The drill depends on these ports only; concrete implementations register
//! themselves into the implementation table and are resolved through the
//! object factory at startup.

/// A room subject to decontamination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
}

impl Room {
    /// Create a room with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The room's display name
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Broadcasts a message to everyone in and around a room
pub trait Announcer: Send + Sync {
    /// Deliver one announcement
    fn announce(&self, message: &str);
}

bindery::capability!(dyn Announcer as "announcer");

/// Gets people out of a room ahead of disinfection
pub trait Removal: Send + Sync {
    /// Clear everyone out of `room`
    fn clear_room(&self, room: &Room);
}

bindery::capability!(dyn Removal as "removal");
