//! Directory enumeration for gallery tabs.

pub mod file_scanner;

pub use file_scanner::*;
