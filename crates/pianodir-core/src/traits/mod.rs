//! Ports - interfaces implemented by storage and by the host environment

mod capabilities;
mod repositories;

pub use capabilities::{Clipboard, ShareSheet, WindowOpener};
pub use repositories::{InterestRepository, RepoResult};
