//! Speech output abstract Trait

use std::cell::RefCell;
use std::rc::Rc;

/// Speech output Trait
///
/// Fire-and-forget: the navigator never waits for speech to finish. Whether a
/// new announcement interrupts the one in flight is chosen per call.
pub trait SpeechOutput {
    /// Queue or speak `text`, cutting off current speech when `interrupt` is set
    fn speak(&mut self, text: &str, interrupt: bool);
}

/// One recorded announcement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    pub interrupt: bool,
}

/// In-memory speech recorder
///
/// Cloning shares the same buffer, so a host (or a test) can keep a handle
/// while the `ReviewMode` owns the boxed output.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    inner: Rc<RefCell<Vec<Utterance>>>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All announcements so far, oldest first
    pub fn utterances(&self) -> Vec<Utterance> {
        self.inner.borrow().clone()
    }

    /// Text of the latest announcement
    pub fn last_text(&self) -> Option<String> {
        self.inner.borrow().last().map(|u| u.text.clone())
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }
}

impl SpeechOutput for Transcript {
    fn speak(&mut self, text: &str, interrupt: bool) {
        self.inner.borrow_mut().push(Utterance {
            text: text.to_string(),
            interrupt,
        });
    }
}

/// Speech output that only writes to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSpeech;

impl SpeechOutput for LogSpeech {
    fn speak(&mut self, text: &str, interrupt: bool) {
        if interrupt {
            log::info!(target: "speech", "[interrupt] {text}");
        } else {
            log::info!(target: "speech", "{text}");
        }
    }
}
