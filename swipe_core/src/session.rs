//! `Session`: the object handed to the host (CLI, GUI).
//!
//! `Session` makes no decisions itself; it:
//! - owns the `Context` (state)
//! - owns the processor chain (pluggable)
//! - feeds each `InputEvent` through the chain until one consumes it
//! - returns the new `UiState` plus any `Action`s

use crate::{
    config::SwipeConfig,
    context::{CaptureMethod, Context},
    dictionary::PatternDictionary,
    key_event::{Action, InputEvent},
    model::UiState,
    predictor::PredictionService,
    processor::{
        CaptureProcessor, CommitProcessor, ModeProcessor, ProcessStatus, Processor,
        SelectionProcessor,
    },
};

/// One keyboard session (state machine container).
pub struct Session<D> {
    /// Prediction service (engine, remote, cache)
    service: PredictionService<D>,
    /// Shared by the processors
    ctx: Context,
    processors: Vec<Box<dyn Processor>>,
}

impl<D> Session<D>
where
    D: PatternDictionary,
{
    /// Session with default settings and the default processor chain.
    pub fn new(service: PredictionService<D>) -> Self {
        Self::with_config(service, &SwipeConfig::default())
    }

    pub fn with_config(service: PredictionService<D>, config: &SwipeConfig) -> Self {
        Self {
            service,
            ctx: Context::from_config(config),
            processors: vec![
                Box::new(CaptureProcessor),
                Box::new(SelectionProcessor),
                Box::new(CommitProcessor),
                Box::new(ModeProcessor),
            ],
        }
    }

    pub fn service(&self) -> &PredictionService<D> {
        &self.service
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn ui_state(&self) -> UiState {
        self.ctx.ui_state()
    }

    /// Handle one event; returns the latest snapshot and the actions it produced.
    pub fn handle(&mut self, ev: InputEvent) -> (UiState, Vec<Action>) {
        let mut actions = Vec::new();
        for p in &mut self.processors {
            let (status, mut a) = p.process(&self.service, &mut self.ctx, &ev);
            actions.append(&mut a);
            if status == ProcessStatus::Consume {
                break;
            }
        }
        (self.ctx.ui_state(), actions)
    }

    /// Feed a whole swipe (start, keys, stop) and return the final suggestions.
    pub fn swipe(&mut self, letters: &str) -> Vec<String> {
        let method = match self.ctx.capture_method {
            CaptureMethod::None => CaptureMethod::Hover,
            m => m,
        };
        self.handle(InputEvent::StartCapture(method));
        for ch in letters.chars() {
            self.handle(InputEvent::Key(ch));
        }
        self.handle(InputEvent::StopCapture).0.suggestions
    }
}
