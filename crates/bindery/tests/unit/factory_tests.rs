//! Tests for the object factory
//!
//! Covers both construction paths: capabilities (resolve, run the registered
//! factory, downcast) and concrete types (direct, registry never consulted),
//! plus the construction failure modes surfaced as `Error::Construction`.

use std::sync::Arc;

use bindery::{Error, ImplementationRegistry, ObjectFactory, Overrides};

use self::fixtures::{Boiler, Clipboard, Courier, CountingScanner, Meter, Valve};

// ============================================================================
// Fixtures - one well-behaved capability, two misbehaving hand-written entries
// ============================================================================

mod fixtures {
    use std::any::TypeId;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use bindery::{ImplementationScanner, Registration, TableScanner};

    pub fn namespace() -> &'static str {
        module_path!()
    }

    pub trait Courier: Send + Sync {
        fn vehicle(&self) -> &'static str;
    }
    bindery::capability!(dyn Courier as "courier");

    #[derive(Default)]
    pub struct BikeCourier;
    impl Courier for BikeCourier {
        fn vehicle(&self) -> &'static str {
            "bike"
        }
    }
    bindery::implementation! {
        static BIKE_COURIER for dyn Courier {
            implementation: BikeCourier,
            name: "bike",
            description: "well-behaved courier implementation",
        }
    }

    pub trait Meter: Send + Sync {
        fn unit(&self) -> &'static str;
    }
    bindery::capability!(dyn Meter as "meter");

    static METER_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

    /// Constructions of `TickingMeter` since the test binary started
    pub fn meter_constructions() -> usize {
        METER_CONSTRUCTIONS.load(Ordering::SeqCst)
    }

    pub struct TickingMeter;
    impl Default for TickingMeter {
        fn default() -> Self {
            METER_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
            Self
        }
    }
    impl Meter for TickingMeter {
        fn unit(&self) -> &'static str {
            "ticks"
        }
    }
    bindery::implementation! {
        static TICKING_METER for dyn Meter {
            implementation: TickingMeter,
            name: "ticking",
            description: "meter that counts its own constructions",
        }
    }

    pub trait Boiler: Send + Sync {
        fn temperature(&self) -> u32;
    }
    bindery::capability!(dyn Boiler as "boiler");

    // Hand-written entry whose factory always fails
    #[linkme::distributed_slice(bindery::IMPLEMENTATIONS)]
    static COLD_BOILER: Registration = Registration {
        capability: <dyn Boiler as bindery::Capability>::NAME,
        capability_id: || TypeId::of::<dyn Boiler>(),
        name: "cold",
        description: "boiler whose factory always fails",
        module_path: module_path!(),
        factory: || Err("boiler offline".to_string()),
    };

    pub trait Valve: Send + Sync {
        fn open(&self) -> bool;
    }
    bindery::capability!(dyn Valve as "valve");

    // Hand-written entry that produces an instance of the wrong type
    #[linkme::distributed_slice(bindery::IMPLEMENTATIONS)]
    static BENT_VALVE: Registration = Registration {
        capability: <dyn Valve as bindery::Capability>::NAME,
        capability_id: || TypeId::of::<dyn Valve>(),
        name: "bent",
        description: "valve whose factory boxes the wrong type",
        module_path: module_path!(),
        factory: || Ok(Box::new(42_u32)),
    };

    /// Concrete type for the direct construction path
    #[derive(Debug, Default)]
    pub struct Clipboard {
        pub items: Vec<String>,
    }

    pub struct CountingScanner {
        inner: TableScanner,
        scans: AtomicUsize,
    }

    impl CountingScanner {
        pub fn new() -> Self {
            Self {
                inner: TableScanner,
                scans: AtomicUsize::new(0),
            }
        }

        pub fn scans(&self) -> usize {
            self.scans.load(Ordering::SeqCst)
        }
    }

    impl ImplementationScanner for CountingScanner {
        fn find_implementations(
            &self,
            capability: TypeId,
            namespace: &str,
        ) -> Vec<&'static Registration> {
            self.scans.fetch_add(1, Ordering::SeqCst);
            self.inner.find_implementations(capability, namespace)
        }

        fn find_named(&self, capability: TypeId, name: &str) -> Vec<&'static Registration> {
            self.inner.find_named(capability, name)
        }
    }
}

// ============================================================================
// Capability path
// ============================================================================

#[test]
fn test_create_returns_working_instance_on_first_and_second_call() {
    let factory = ObjectFactory::new(fixtures::namespace(), Overrides::new());

    let first = factory
        .create::<dyn Courier>()
        .expect("single candidate should construct");
    assert_eq!(first.vehicle(), "bike");

    let second = factory
        .create::<dyn Courier>()
        .expect("bound capability should keep constructing");
    assert_eq!(second.vehicle(), "bike");
}

#[test]
fn test_create_constructs_fresh_instances_after_a_single_scan() {
    let scanner = Arc::new(CountingScanner::new());
    let factory = ObjectFactory::with_registry(ImplementationRegistry::with_scanner(
        fixtures::namespace(),
        Overrides::new(),
        scanner.clone(),
    ));

    let before = fixtures::meter_constructions();
    let first = factory
        .create::<dyn Meter>()
        .expect("meter should construct");
    let second = factory
        .create::<dyn Meter>()
        .expect("meter should construct again");
    assert_eq!(first.unit(), "ticks");
    assert_eq!(second.unit(), "ticks");

    assert_eq!(
        fixtures::meter_constructions() - before,
        2,
        "every create call should construct a fresh instance"
    );
    assert_eq!(scanner.scans(), 1, "the binding itself is memoized");
}

#[test]
fn test_typed_override_assignment_selects_the_named_implementation() {
    let overrides = Overrides::new().assign::<dyn Courier>("bike");
    let factory = ObjectFactory::new(fixtures::namespace(), overrides);

    assert_eq!(
        factory.registry().overrides().target("courier"),
        Some("bike")
    );
    let courier = factory
        .create::<dyn Courier>()
        .expect("override naming an existing implementation should construct");
    assert_eq!(courier.vehicle(), "bike");
}

// ============================================================================
// Construction failures
// ============================================================================

#[test]
fn test_failing_factory_surfaces_a_construction_error() {
    let factory = ObjectFactory::new(fixtures::namespace(), Overrides::new());

    match factory.create::<dyn Boiler>() {
        Err(Error::Construction {
            capability,
            implementation,
            reason,
        }) => {
            assert_eq!(capability, "boiler");
            assert_eq!(implementation, "cold");
            assert!(reason.contains("boiler offline"), "reason was: {reason}");
        }
        Err(other) => panic!("expected a construction error, got {other:?}"),
        Ok(_) => panic!("a failing factory must not construct"),
    }

    assert!(
        factory.registry().is_bound::<dyn Boiler>(),
        "resolution succeeded, only construction failed"
    );
}

#[test]
fn test_wrong_instance_type_surfaces_a_construction_error() {
    let factory = ObjectFactory::new(fixtures::namespace(), Overrides::new());

    match factory.create::<dyn Valve>() {
        Err(Error::Construction {
            implementation,
            reason,
            ..
        }) => {
            assert_eq!(implementation, "bent");
            assert!(
                reason.contains("another capability"),
                "reason was: {reason}"
            );
        }
        Err(other) => panic!("expected a construction error, got {other:?}"),
        Ok(_) => panic!("a mismatched factory must not construct"),
    }
}

// ============================================================================
// Concrete path
// ============================================================================

#[test]
fn test_construct_concrete_type_never_consults_the_registry() {
    let scanner = Arc::new(CountingScanner::new());
    let factory = ObjectFactory::with_registry(ImplementationRegistry::with_scanner(
        fixtures::namespace(),
        Overrides::new(),
        scanner.clone(),
    ));

    let clipboard: Clipboard = factory.construct();
    assert!(clipboard.items.is_empty());
    assert_eq!(scanner.scans(), 0, "direct construction must not scan");
    assert!(
        !factory.registry().is_bound::<dyn Courier>(),
        "direct construction must not bind anything"
    );
}
