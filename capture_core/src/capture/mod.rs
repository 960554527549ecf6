//! Capture evaluation - device rule plus formula for one context

mod engine;
mod outcome;

pub use engine::CaptureEngine;
pub use outcome::CaptureOutcome;
