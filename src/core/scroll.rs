use crate::constants::{
    HERO_CONTENT_FADE_SPAN, HERO_CONTENT_FADE_Y, HERO_PARALLAX_Y_PERCENT, NAV_SOLID_OFFSET_PX,
    SCROLL_TOP_OFFSET_PX,
};

#[inline]
pub fn nav_solid(offset: f64) -> bool {
    offset > NAV_SOLID_OFFSET_PX
}

#[inline]
pub fn scroll_top_visible(offset: f64) -> bool {
    offset > SCROLL_TOP_OFFSET_PX
}

/// Flags derived from the scroll offset. Each owning component keeps its own
/// copy and only touches the DOM when `update` reports a change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollControls {
    pub nav_solid: bool,
    pub scroll_top_visible: bool,
}

/// New values for the flags that flipped; `None` means unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollChange {
    pub nav_solid: Option<bool>,
    pub scroll_top_visible: Option<bool>,
}

impl ScrollChange {
    pub fn is_empty(&self) -> bool {
        self.nav_solid.is_none() && self.scroll_top_visible.is_none()
    }
}

impl ScrollControls {
    pub fn at(offset: f64) -> Self {
        Self {
            nav_solid: nav_solid(offset),
            scroll_top_visible: scroll_top_visible(offset),
        }
    }

    pub fn update(&mut self, offset: f64) -> ScrollChange {
        let next = Self::at(offset);
        let change = ScrollChange {
            nav_solid: (next.nav_solid != self.nav_solid).then_some(next.nav_solid),
            scroll_top_visible: (next.scroll_top_visible != self.scroll_top_visible)
                .then_some(next.scroll_top_visible),
        };
        *self = next;
        change
    }
}

/// Hero scroll-scrubbed styles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroScrub {
    /// Background parallax, percent of its own height.
    pub bg_y_percent: f64,
    pub content_opacity: f64,
    pub content_y: f64,
}

/// Scrub values for a hero of `hero_height` px scrolled by `offset` px.
///
/// The background travels over the whole hero height; the content fades out
/// over the first half.
pub fn hero_scrub(offset: f64, hero_height: f64) -> HeroScrub {
    if hero_height <= 0.0 {
        return HeroScrub {
            bg_y_percent: 0.0,
            content_opacity: 1.0,
            content_y: 0.0,
        };
    }
    let p = (offset / hero_height).clamp(0.0, 1.0);
    let q = (offset / (hero_height * HERO_CONTENT_FADE_SPAN)).clamp(0.0, 1.0);
    HeroScrub {
        bg_y_percent: HERO_PARALLAX_Y_PERCENT * p,
        content_opacity: 1.0 - q,
        content_y: HERO_CONTENT_FADE_Y * q,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_reports_only_flips() {
        let mut c = ScrollControls::default();
        assert!(c.update(50.0).is_empty());
        let ch = c.update(150.0);
        assert_eq!(ch.nav_solid, Some(true));
        assert_eq!(ch.scroll_top_visible, None);
        assert!(c.update(160.0).is_empty());
        let ch = c.update(0.0);
        assert_eq!(ch.nav_solid, Some(false));
    }

    #[test]
    fn scrub_is_clamped() {
        let s = hero_scrub(-20.0, 800.0);
        assert_eq!(s.content_opacity, 1.0);
        let s = hero_scrub(10_000.0, 800.0);
        assert_eq!(s.bg_y_percent, 30.0);
        assert_eq!(s.content_opacity, 0.0);
        assert_eq!(s.content_y, -50.0);
    }
}
