#![allow(dead_code)]

// tests/common/mod.rs
use sumtap::{AppError, PuzzleInstance, Presenter, RoundSnapshot, RoundView};

// Same initializer the unit tests use
#[path = "../../src/test_bootstrap/logging.rs"]
mod logging;

// Logging is auto-installed for every test binary that pulls in `common`
#[ctor::ctor]
fn init_logging() {
    logging::init();
}

#[derive(Debug, Clone)]
pub struct Frame {
    pub round_id: u64,
    pub instance: PuzzleInstance,
    pub snapshot: RoundSnapshot,
}

/// Presenter that keeps every frame and rejection for later inspection.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub frames: Vec<Frame>,
    pub rejections: Vec<String>,
}

impl RecordingPresenter {
    pub fn last(&self) -> &Frame {
        self.frames.last().expect("at least one frame rendered")
    }
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, view: &RoundView<'_>) -> Result<(), AppError> {
        self.frames.push(Frame {
            round_id: view.round_id,
            instance: view.instance.clone(),
            snapshot: view.snapshot.clone(),
        });
        Ok(())
    }

    fn reject(&mut self, message: &str) -> Result<(), AppError> {
        self.rejections.push(message.to_string());
        Ok(())
    }
}
