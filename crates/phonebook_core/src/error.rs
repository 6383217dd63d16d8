use std::io;

use thiserror::Error;

/// Failure of the user-facing collaborator. The controller never produces
/// these itself; it only passes them up out of the command loop.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("input stream closed")]
    InputClosed,
}
