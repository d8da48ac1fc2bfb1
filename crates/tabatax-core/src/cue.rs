//! Cue sink boundary.
//!
//! The state machine reports semantic cues; rendering them is external.
//! `CueSink` is the seam: whoever drives the tick cadence owns a sink
//! and dispatches each tick's cues into it. A sink must swallow its own
//! failures -- a broken speaker never aborts a phase transition.

use std::io::Write;

use rand::seq::SliceRandom;

use crate::events::{Cue, CueKind, SpeechCategory};

const START_PHRASES: &[&str] = &["Let's go!", "Crush it!", "Push hard!", "Work!", "Begin!"];
const REST_PHRASES: &[&str] = &["Recover.", "Breathe.", "Relax.", "Shake it out.", "Rest."];
const COMPLETE_PHRASES: &[&str] = &[
    "Workout complete. Great job!",
    "You did it!",
    "Awesome work!",
];

/// Consumer of semantic cues.
///
/// Implementations render sounds and speech however they like (audio
/// synthesis, terminal output, nothing at all) and never return errors.
pub trait CueSink {
    fn play(&mut self, kind: CueKind);
    fn speak(&mut self, text: &str, category: SpeechCategory);
}

/// Render one tick's cues into a sink.
pub fn dispatch(cues: &[Cue], sink: &mut dyn CueSink) {
    for cue in cues {
        sink.play(cue.kind);
        if let Some(speech) = &cue.speech {
            sink.speak(&speech.text, speech.category);
        }
    }
}

/// Sink that ignores everything. Used when muted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl CueSink for NullSink {
    fn play(&mut self, _kind: CueKind) {}
    fn speak(&mut self, _text: &str, _category: SpeechCategory) {}
}

/// Sink that renders cues as terminal lines.
///
/// Stands in for the original audio engine: `play` becomes a short
/// marker, `speak` a line assembled from the category's motivational
/// phrase pool. Write errors are dropped.
pub struct ConsoleSink<W: Write = std::io::Stdout> {
    out: W,
    motivation: bool,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
            motivation: true,
        }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            motivation: true,
        }
    }

    /// Toggle the motivational phrase prefix on spoken cues.
    pub fn motivation(mut self, enabled: bool) -> Self {
        self.motivation = enabled;
        self
    }

    fn phrase(category: SpeechCategory) -> &'static str {
        let pool = match category {
            SpeechCategory::Start => START_PHRASES,
            SpeechCategory::Rest => REST_PHRASES,
            SpeechCategory::Complete => COMPLETE_PHRASES,
        };
        pool.choose(&mut rand::thread_rng()).copied().unwrap_or("")
    }

    /// Assemble the spoken line: the pool phrase is concatenated with
    /// the text only when the text is non-empty and distinct from the
    /// category word itself.
    fn line(&self, text: &str, category: SpeechCategory) -> String {
        if !self.motivation {
            return text.to_string();
        }
        let phrase = Self::phrase(category);
        if !text.is_empty() && !text.eq_ignore_ascii_case(category.word()) {
            format!("{phrase} {text}")
        } else {
            phrase.to_string()
        }
    }
}

impl<W: Write> CueSink for ConsoleSink<W> {
    fn play(&mut self, kind: CueKind) {
        let marker = match kind {
            CueKind::Tick => "tick",
            CueKind::Bell => "ding!",
            CueKind::Whistle => "fweet!",
            CueKind::Victory => "ta-da!",
        };
        let _ = writeln!(self.out, "  [{marker}]");
    }

    fn speak(&mut self, text: &str, category: SpeechCategory) {
        let line = self.line(text, category);
        if !line.is_empty() {
            let _ = writeln!(self.out, ">> {line}");
        }
    }
}
