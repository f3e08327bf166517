use crate::context::CaptureMethod;

/// Input event (logical, platform independent).
///
/// Notes:
/// - `Session`/processors only see these semantic events
/// - the host (CLI, GUI, browser bridge) maps pointer/touch/dwell activity
///   to them; debouncing rapid `Key` bursts is the host's job
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Begin capturing a swipe (clears the current sequence)
    StartCapture(CaptureMethod),
    /// End the gesture; triggers the final prediction
    StopCapture,
    /// Pointer entered a key (ignored while not capturing)
    Key(char),
    /// Pick suggestion `n` (0-based)
    Select(usize),
    /// "Say this": commit the composed text and store it in history
    Say,
    /// Drop the current sequence and suggestions
    ClearSequence,
    /// Drop the composed text
    DeleteAll,
    /// Switch between local and remote prediction
    ToggleMode,
    /// Switch continuous capture on/off
    ToggleContinuous,
    /// Put history item `n` back into the composed text
    ReuseHistory(usize),
    ClearHistory,
    /// Quit (for the host; core ignores it)
    Exit,
}

/// Output requested from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Text to speak/send
    Commit(String),
    /// Fresh suggestions to render
    Suggest(Vec<String>),
}
