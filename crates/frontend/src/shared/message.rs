//! Transient status messages shown after each flow.
//!
//! A message clears itself after [`CLEAR_DELAY_MS`]. Each `show` bumps a
//! generation counter and the scheduled clearance only fires if its
//! generation is still current, so a newer message is never wiped by the
//! timer of an older one.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const CLEAR_DELAY_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Warning,
    Danger,
}

impl MessageKind {
    /// Inline banner colors per severity: (background, border, text).
    pub fn colors(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            MessageKind::Success => ("#e6f4ea", "#b7dfc2", "#1e7e34"),
            MessageKind::Warning => ("#fff8e1", "#f3e0a0", "#8a6d1a"),
            MessageKind::Danger => ("#fdecea", "#f5c6cb", "#b02a37"),
        }
    }
}

/// Shared handle for showing the current transient message.
///
/// Cheap to copy; provided through context by the root component.
#[derive(Clone, Copy)]
pub struct MessageService {
    current: RwSignal<Option<(MessageKind, String)>>,
    generation: RwSignal<u64>,
}

impl MessageService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    /// Replace the visible message and schedule its clearance.
    pub fn show(&self, kind: MessageKind, text: impl Into<String>) {
        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);
        self.current.set(Some((kind, text.into())));

        let current = self.current;
        let generation_signal = self.generation;
        spawn_local(async move {
            TimeoutFuture::new(CLEAR_DELAY_MS).await;
            // A newer show() invalidated this clearance.
            if generation_signal.get_untracked() == generation {
                current.set(None);
            }
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(MessageKind::Success, text);
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.show(MessageKind::Warning, text);
    }

    pub fn danger(&self, text: impl Into<String>) {
        self.show(MessageKind::Danger, text);
    }

    pub fn get(&self) -> Option<(MessageKind, String)> {
        self.current.get()
    }
}

impl Default for MessageService {
    fn default() -> Self {
        Self::new()
    }
}
