//! The decontamination drill
//!
//! `Disinfector` is the consumer side of the construction facility: its
//! collaborators are resolved through an explicitly passed factory, then the
//! drill runs the scripted sequence over a room.

use bindery::ObjectFactory;
use tracing::info;

use crate::error::Result;
use crate::ports::{Announcer, Removal, Room};

/// Fixed liturgy recited over a room during disinfection
#[derive(Debug, Default)]
pub struct Prayer;

impl Prayer {
    /// Recite the incantation over `room`
    pub fn recite(&self, room: &Room) {
        println!(
            "A prayer is read over {}: corona begone, virus be cast down!",
            room.name()
        );
    }
}

/// Runs the announce / clear room / disinfect sequence
///
/// The announcer and the removal are capabilities resolved through the
/// factory; the prayer is a concrete collaborator constructed directly.
pub struct Disinfector {
    announcer: Box<dyn Announcer>,
    removal: Box<dyn Removal>,
    prayer: Prayer,
}

impl Disinfector {
    /// Assemble the drill from capabilities resolved through `factory`
    pub fn assemble(factory: &ObjectFactory) -> Result<Self> {
        Ok(Self {
            announcer: factory.create::<dyn Announcer>()?,
            removal: factory.create::<dyn Removal>()?,
            prayer: factory.construct(),
        })
    }

    /// Run the full drill over `room`
    pub fn start(&self, room: &Room) {
        info!("Starting disinfection of '{}'", room.name());
        self.announcer
            .announce("Disinfection starting - everyone please leave the room!");
        self.removal.clear_room(room);
        self.disinfect(room);
        self.announcer
            .announce("Disinfection finished - it is safe to come back in!");
        info!("Finished disinfection of '{}'", room.name());
    }

    fn disinfect(&self, room: &Room) {
        self.prayer.recite(room);
    }
}
