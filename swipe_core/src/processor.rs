//! `processor`: input event chain.
//!
//! Processors run in order over each `InputEvent`, mutate the `Context` and
//! may emit `Action`s (Commit, Suggest).
//!
//! Default chain (assembled by `Session::new`):
//! - `CaptureProcessor`: start/stop capture, keys, clearing the sequence
//! - `SelectionProcessor`: picking a suggestion
//! - `CommitProcessor`: say, delete all, history reuse/clear
//! - `ModeProcessor`: local/remote and continuous toggles

use crate::{
    context::Context,
    dictionary::PatternDictionary,
    key_event::{Action, InputEvent},
    predictor::{PredictionMode, PredictionService},
};

/// Object-safe prediction interface for processors (keeps the dictionary generic out of this layer).
pub trait PredictorFacade {
    fn predict(&self, sequence: &str, max_results: usize, mode: PredictionMode) -> Vec<String>;
}

impl<D> PredictorFacade for PredictionService<D>
where
    D: PatternDictionary,
{
    fn predict(&self, sequence: &str, max_results: usize, mode: PredictionMode) -> Vec<String> {
        PredictionService::predict(self, sequence, max_results, mode)
    }
}

/// Whether a processor handled the event.
///
/// - `Consume`: handled, later processors are skipped
/// - `Continue`: not ours, pass it on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Consume,
    Continue,
}

pub trait Processor: Send + Sync {
    fn process(
        &mut self,
        predictor: &dyn PredictorFacade,
        context: &mut Context,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>);
}

pub struct CaptureProcessor;

impl Processor for CaptureProcessor {
    fn process(
        &mut self,
        predictor: &dyn PredictorFacade,
        context: &mut Context,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *input_event {
            InputEvent::StartCapture(method) => {
                context.start_capture(method);
                (ProcessStatus::Consume, Vec::new())
            }
            InputEvent::StopCapture => (ProcessStatus::Consume, context.stop_capture(predictor)),
            InputEvent::Key(ch) => (ProcessStatus::Consume, context.push_key(predictor, ch)),
            InputEvent::ClearSequence => {
                context.reset_sequence();
                (ProcessStatus::Consume, Vec::new())
            }
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

pub struct SelectionProcessor;

impl Processor for SelectionProcessor {
    fn process(
        &mut self,
        _predictor: &dyn PredictorFacade,
        context: &mut Context,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *input_event {
            InputEvent::Select(i) => (ProcessStatus::Consume, context.select_suggestion(i)),
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

pub struct CommitProcessor;

impl Processor for CommitProcessor {
    fn process(
        &mut self,
        _predictor: &dyn PredictorFacade,
        context: &mut Context,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *input_event {
            InputEvent::Say => (ProcessStatus::Consume, context.say()),
            InputEvent::DeleteAll => {
                context.delete_all();
                (ProcessStatus::Consume, Vec::new())
            }
            InputEvent::ReuseHistory(i) => {
                context.reuse_history(i);
                (ProcessStatus::Consume, Vec::new())
            }
            InputEvent::ClearHistory => {
                context.history.clear();
                (ProcessStatus::Consume, Vec::new())
            }
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

pub struct ModeProcessor;

impl Processor for ModeProcessor {
    fn process(
        &mut self,
        _predictor: &dyn PredictorFacade,
        context: &mut Context,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *input_event {
            InputEvent::ToggleMode => {
                context.mode = context.mode.toggled();
                tracing::info!(mode = %context.mode, "prediction mode changed");
                (ProcessStatus::Consume, Vec::new())
            }
            InputEvent::ToggleContinuous => {
                context.continuous = !context.continuous;
                (ProcessStatus::Consume, Vec::new())
            }
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}
