use crate::constants::CONTENT_FADE_MS;

/// Composition root state: the only page-wide flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    is_loading: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self { is_loading: true }
    }
}

impl PageState {
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Called from the loader's completion callback. Returns true on the
    /// first call only.
    pub fn finish_loading(&mut self) -> bool {
        std::mem::replace(&mut self.is_loading, false)
    }

    /// Inline style for `<main>`, keyed off the same flag as the loader.
    pub fn main_style(&self) -> String {
        let opacity = if self.is_loading { 0 } else { 1 };
        format!(
            "opacity: {}; transition: opacity {}ms ease;",
            opacity, CONTENT_FADE_MS
        )
    }
}
