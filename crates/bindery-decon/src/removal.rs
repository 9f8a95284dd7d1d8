//! Room clearing implementations
//!
//! Two implementations register for the removal capability, so a plain scan
//! is ambiguous by construction; the shipped configuration settles it with
//! the `removal = "aggressive"` override.

use tracing::debug;

use crate::ports::{Removal, Room};

/// Removal that shouts the room empty
#[derive(Debug, Default)]
pub struct AggressiveRemoval;

impl Removal for AggressiveRemoval {
    fn clear_room(&self, room: &Room) {
        debug!("Clearing '{}' the hard way", room.name());
        println!("OUT! Everyone leave {} immediately!", room.name());
    }
}

bindery::implementation! {
    static AGGRESSIVE_REMOVAL for dyn Removal {
        implementation: AggressiveRemoval,
        name: "aggressive",
        description: "Shouts the room empty without ceremony",
    }
}

/// Removal that asks nicely
#[derive(Debug, Default)]
pub struct CourteousRemoval;

impl Removal for CourteousRemoval {
    fn clear_room(&self, room: &Room) {
        debug!("Clearing '{}' politely", room.name());
        println!(
            "Ladies and gentlemen, kindly step out of {} for a short while.",
            room.name()
        );
    }
}

bindery::implementation! {
    static COURTEOUS_REMOVAL for dyn Removal {
        implementation: CourteousRemoval,
        name: "courteous",
        description: "Asks everyone politely to step outside",
    }
}
