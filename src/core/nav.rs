/// Mobile navigation menu, owned by the hero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Navigate to `section_id` through `scroll_to`, which returns whether the
    /// anchor exists. The menu closes only when navigation happened.
    pub fn select(&mut self, section_id: &str, scroll_to: impl FnOnce(&str) -> bool) -> bool {
        if scroll_to(section_id) {
            self.close();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_closes_only_on_success() {
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(!menu.select("missing", |_| false));
        assert!(menu.is_open());
        assert!(menu.select("welcome", |id| id == "welcome"));
        assert!(!menu.is_open());
    }
}
