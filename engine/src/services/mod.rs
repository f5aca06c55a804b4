//! Service implementations
//!
//! Real implementations of the service traits. These are the only places
//! that read the system clock or touch the file system.

pub mod clock;
pub mod file_system;

pub use clock::SystemClock;
pub use file_system::RealFileSystem;
