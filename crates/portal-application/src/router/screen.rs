use portal_core::modal::Modal;
use portal_core::notification::{Notification, NotificationPhase};
use portal_core::page::Page;
use portal_core::view::{Chrome, View};

/// Snapshot of everything a front end draws.
///
/// `page` and `chrome` switch as soon as a navigation starts; `content`
/// keeps showing the previous page until that navigation's fetch settles.
#[derive(Debug, Clone)]
pub struct Screen {
    pub page: Page,
    pub chrome: Chrome,
    pub content: View,
    pub modal: Option<Modal>,
    pub banner: Option<(Notification, NotificationPhase)>,
}

impl Screen {
    pub fn banner_text(&self) -> Option<&str> {
        self.banner.as_ref().map(|(n, _)| n.message.as_str())
    }
}
