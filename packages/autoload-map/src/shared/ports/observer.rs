//! Progress and diagnostic side channel
//!
//! Observers only watch a build; nothing they do feeds back into the result.

/// Phase of a map build reported to progress observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressPhase {
    /// Walking a root for candidate files
    FileSearch,
    /// Extracting class declarations from candidate files
    ClassSearch,
}

/// One progress notification, as recorded by [`MemoryObserver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    Start(ProgressPhase),
    Update(ProgressPhase),
    Stop(ProgressPhase),
}

/// Receives progress events and human-readable diagnostic lines
pub trait BuildObserver {
    fn start_phase(&mut self, _phase: ProgressPhase) {}

    fn update_phase(&mut self, _phase: ProgressPhase) {}

    fn stop_phase(&mut self, _phase: ProgressPhase) {}

    /// Diagnostic line (scan summary, override, shadowed class, scan failure)
    fn log(&mut self, _line: &str) {}
}

/// Observer that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl BuildObserver for NullObserver {}

/// Observer that keeps every event and line in arrival order
#[derive(Debug, Default, Clone)]
pub struct MemoryObserver {
    pub events: Vec<ProgressEvent>,
    pub lines: Vec<String>,
}

impl MemoryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of update events seen for `phase`
    pub fn updates(&self, phase: ProgressPhase) -> usize {
        self.events
            .iter()
            .filter(|event| **event == ProgressEvent::Update(phase))
            .count()
    }
}

impl BuildObserver for MemoryObserver {
    fn start_phase(&mut self, phase: ProgressPhase) {
        self.events.push(ProgressEvent::Start(phase));
    }

    fn update_phase(&mut self, phase: ProgressPhase) {
        self.events.push(ProgressEvent::Update(phase));
    }

    fn stop_phase(&mut self, phase: ProgressPhase) {
        self.events.push(ProgressEvent::Stop(phase));
    }

    fn log(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
