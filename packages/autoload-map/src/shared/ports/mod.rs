//! Ports - Interfaces to collaborators outside the scan pipeline

mod observer;

pub use observer::{BuildObserver, MemoryObserver, NullObserver, ProgressEvent, ProgressPhase};
