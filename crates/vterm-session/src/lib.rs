//! Session state for the terminal simulator: the input buffer with
//! history recall and completion, plus the transcript of everything run.

mod session;
mod transcript;

pub use session::{Event, Session};
pub use transcript::{render_text, TranscriptRecord};
