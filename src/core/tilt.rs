use crate::constants::{CARD_OVERLAY_HOVERED, CARD_OVERLAY_IDLE, TILT_DIVISOR};
use glam::Vec2;

/// Card rotation in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl Tilt {
    pub const FLAT: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Tilt towards the pointer: one degree per `TILT_DIVISOR` px from the card centre.
pub fn tilt_for_pointer(pointer: Vec2, card_origin: Vec2, card_size: Vec2) -> Tilt {
    let local = pointer - card_origin;
    let center = card_size * 0.5;
    Tilt {
        rotate_x: (local.y - center.y) / TILT_DIVISOR,
        rotate_y: (center.x - local.x) / TILT_DIVISOR,
    }
}

/// Which collection card the pointer is over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardHover {
    hovered: Option<u32>,
}

impl CardHover {
    pub fn hovered(&self) -> Option<u32> {
        self.hovered
    }

    /// Returns the previously hovered card when it changed.
    pub fn enter(&mut self, id: u32) -> Option<Option<u32>> {
        let prev = self.hovered.replace(id);
        (prev != Some(id)).then_some(prev)
    }

    pub fn leave(&mut self) -> Option<u32> {
        self.hovered.take()
    }

    pub fn overlay_opacity(&self, id: u32) -> f32 {
        if self.hovered == Some(id) {
            CARD_OVERLAY_HOVERED
        } else {
            CARD_OVERLAY_IDLE
        }
    }
}
