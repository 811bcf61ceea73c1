/// Easing curves used by reveal, tilt and loader transitions.
///
/// `OutQuad` and `InOutQuad` are the "power2" curves, expressed as the
/// matching CSS `cubic-bezier` timing functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    OutQuad,
    InOutQuad,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::OutQuad => "cubic-bezier(0.5, 1, 0.89, 1)",
            Self::InOutQuad => "cubic-bezier(0.45, 0, 0.55, 1)",
        }
    }
}
