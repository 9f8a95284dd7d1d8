//! Console announcer
//!
//! The only announcer implementation in the binary, so the factory resolves
//! it by plain namespace scan without any override.

use crate::ports::Announcer;

/// Announcer that prints to standard output
#[derive(Debug, Default)]
pub struct ConsoleAnnouncer;

impl Announcer for ConsoleAnnouncer {
    fn announce(&self, message: &str) {
        println!("[announcement] {message}");
    }
}

bindery::implementation! {
    static CONSOLE_ANNOUNCER for dyn Announcer {
        implementation: ConsoleAnnouncer,
        name: "console",
        description: "Prints announcements to standard output",
    }
}
