/// Trạng thái đóng/mở của khung chat.
#[derive(Debug, Clone, Default)]
pub struct Visibility {
    open: bool,
    focus_requested: bool,
}

impl Visibility {
    pub fn new(open: bool) -> Self {
        Self {
            open,
            focus_requested: open,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self) {
        self.set_open(true);
    }

    pub fn hide(&mut self) {
        self.set_open(false);
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.open);
    }

    /// Consumes the pending request to focus the text entry, if any.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    fn set_open(&mut self, open: bool) {
        if open && !self.open {
            self.focus_requested = true;
        }
        if !open {
            self.focus_requested = false;
        }
        if open != self.open {
            log::debug!("Chat panel {}", if open { "opened" } else { "closed" });
        }
        self.open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let mut visibility = Visibility::default();
        assert!(!visibility.is_open());
        assert!(!visibility.take_focus_request());
    }

    #[test]
    fn toggle_flips_twice() {
        let mut visibility = Visibility::default();
        visibility.toggle();
        assert!(visibility.is_open());
        visibility.toggle();
        assert!(!visibility.is_open());
    }

    #[test]
    fn opening_requests_focus_once() {
        let mut visibility = Visibility::default();
        visibility.show();
        assert!(visibility.take_focus_request());
        assert!(!visibility.take_focus_request());

        // Already open: no new request.
        visibility.show();
        assert!(!visibility.take_focus_request());
    }

    #[test]
    fn hide_drops_unconsumed_focus() {
        let mut visibility = Visibility::default();
        visibility.show();
        visibility.hide();
        assert!(!visibility.is_open());
        assert!(!visibility.take_focus_request());

        visibility.toggle();
        assert!(visibility.take_focus_request());
    }

    #[test]
    fn starting_open_focuses_input() {
        let mut visibility = Visibility::new(true);
        assert!(visibility.is_open());
        assert!(visibility.take_focus_request());
    }
}
