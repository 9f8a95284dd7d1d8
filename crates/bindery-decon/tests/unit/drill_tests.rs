//! Tests for drill wiring through the object factory
//!
//! The implementations under test are the crate's own registered ones
//! (`console`, `aggressive`, `courteous`), linked into this test binary
//! through the library crate.
//!
//! Run with: `cargo test -p bindery-decon --test unit drill`

use bindery::{Error, ObjectFactory, Overrides};
use bindery_decon::config::DrillConfig;
use bindery_decon::constants::DEFAULT_NAMESPACE;
use bindery_decon::drill::Disinfector;
use bindery_decon::ports::{Announcer, Removal, Room};

// ============================================================================
// Resolution wiring
// ============================================================================

#[test]
fn test_shipped_config_runs_the_drill() {
    let config = DrillConfig::default();
    let factory = ObjectFactory::new(&config.namespace, config.overrides.clone());

    let disinfector =
        Disinfector::assemble(&factory).expect("Shipped defaults should assemble the drill");

    let room = Room::new(&config.room);
    disinfector.start(&room);
}

#[test]
fn test_removal_is_ambiguous_without_override() {
    let factory = ObjectFactory::new(DEFAULT_NAMESPACE, Overrides::new());

    match factory.create::<dyn Removal>() {
        Err(Error::Resolution {
            capability,
            found,
            candidates,
            ..
        }) => {
            assert_eq!(capability, "removal");
            assert_eq!(found, 2, "Both removal implementations should be found");
            assert_eq!(candidates, vec!["aggressive", "courteous"]);
        }
        Err(other) => panic!("Expected a resolution error, got {other:?}"),
        Ok(_) => panic!("Two candidates without an override must not resolve"),
    }
}

#[test]
fn test_override_selects_courteous_removal() {
    let overrides = Overrides::new().assign::<dyn Removal>("courteous");
    let factory = ObjectFactory::new(DEFAULT_NAMESPACE, overrides);

    let removal = factory
        .create::<dyn Removal>()
        .expect("Override should pinpoint the courteous implementation");
    removal.clear_room(&Room::new("isolation ward"));
}

#[test]
fn test_override_to_unknown_implementation_fails() {
    let overrides = Overrides::new().assign::<dyn Removal>("turbo");
    let factory = ObjectFactory::new(DEFAULT_NAMESPACE, overrides);

    match factory.create::<dyn Removal>() {
        Err(Error::Resolution { found, candidates, .. }) => {
            assert_eq!(found, 0, "No implementation is registered as 'turbo'");
            assert!(candidates.is_empty());
        }
        Err(other) => panic!("Expected a resolution error, got {other:?}"),
        Ok(_) => panic!("An override naming an unknown implementation must not resolve"),
    }
}

#[test]
fn test_announcer_resolves_by_scan() {
    let factory = ObjectFactory::new(DEFAULT_NAMESPACE, Overrides::new());

    let first = factory
        .create::<dyn Announcer>()
        .expect("Single announcer should resolve without an override");
    first.announce("drill test in progress");

    // Second creation reuses the cached binding
    let second = factory
        .create::<dyn Announcer>()
        .expect("Bound announcer should keep resolving");
    second.announce("drill test still in progress");
}

// ============================================================================
// Registration table
// ============================================================================

#[test]
fn test_registration_table_lists_drill_implementations() {
    let removals: Vec<&str> = bindery::implementations_of("removal")
        .iter()
        .map(|entry| entry.name)
        .collect();
    assert_eq!(removals, vec!["aggressive", "courteous"]);

    let announcers: Vec<&str> = bindery::implementations_of("announcer")
        .iter()
        .map(|entry| entry.name)
        .collect();
    assert_eq!(announcers, vec!["console"]);

    for entry in bindery::implementations() {
        assert!(
            entry.module_path.starts_with("bindery_decon"),
            "Drill implementations should register from this crate, got '{}'",
            entry.module_path
        );
    }
}

// ============================================================================
// Room
// ============================================================================

#[test]
fn test_room_holds_its_name() {
    let room = Room::new("isolation ward");
    assert_eq!(room.name(), "isolation ward");
}
