//! Decontamination drill demo
//!
//! A small binary exercising the bindery construction facility end to end:
//! configuration declares the namespace to scan and one capability override,
//! the object factory resolves the drill's collaborators, and the drill runs
//! its scripted announce / clear room / disinfect sequence.
//!
//! ## Wiring
//!
//! - `announcer` has one implementation (`console`) and resolves by scan
//! - `removal` has two implementations (`aggressive`, `courteous`); the
//!   shipped configuration binds `removal = "aggressive"` by override
//! - the prayer recited during disinfection is a concrete type constructed
//!   directly, outside the registry

pub mod announce;
pub mod config;
pub mod constants;
pub mod drill;
pub mod error;
pub mod logging;
pub mod ports;
pub mod removal;

use std::collections::BTreeSet;
use std::path::Path;

use bindery::{ObjectFactory, Overrides};
use tracing::{info, warn};

use crate::config::ConfigLoader;
use crate::drill::Disinfector;
use crate::error::Result;
use crate::ports::Room;

/// Load configuration, initialize logging, and run the requested command
///
/// With `catalog` set, prints the linked implementations and exits;
/// otherwise assembles the disinfector through the factory and runs the
/// drill over the configured room.
pub fn run(config_path: Option<&Path>, catalog: bool) -> Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    logging::init_logging(&config.logging)?;

    if catalog {
        print_catalog();
        return Ok(());
    }

    warn_unknown_override_capabilities(&config.overrides);
    info!(
        "Using namespace '{}' with {} overrides",
        config.namespace,
        config.overrides.iter().count()
    );

    let factory = ObjectFactory::new(&config.namespace, config.overrides.clone());
    let disinfector = Disinfector::assemble(&factory)?;
    let room = Room::new(&config.room);
    disinfector.start(&room);

    Ok(())
}

/// Print every implementation linked into this binary, grouped by capability
fn print_catalog() {
    let entries = bindery::implementations();
    if entries.is_empty() {
        println!("No implementations are linked into this binary.");
        return;
    }

    println!("Registered implementations:");
    let mut current = "";
    for entry in entries {
        if entry.capability != current {
            current = entry.capability;
            println!("\n  {current}");
        }
        println!(
            "    {:<12} {:<44} [{}]",
            entry.name, entry.description, entry.module_path
        );
    }
}

// Overrides naming capabilities nothing registered for are almost certainly
// configuration typos; resolution would fail later with an empty candidate
// list, so flag them up front.
fn warn_unknown_override_capabilities(overrides: &Overrides) {
    let known: BTreeSet<&str> = bindery::implementations()
        .iter()
        .map(|entry| entry.capability)
        .collect();
    for (capability, implementation) in overrides.iter() {
        if !known.contains(capability) {
            warn!(
                "Override binds capability '{}' to '{}', but no implementation is registered for it",
                capability, implementation
            );
        }
    }
}
