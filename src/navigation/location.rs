use crate::navigation::Navigator;
use tokio::sync::watch;

/// The page location of the driver's UI.
///
/// Holds the current `href` and replaces it on every [`Navigator::go_to`]. The UI shell
/// subscribes to it and loads whatever page the href points at.
pub struct LocationNavigator {
    origin: String,
    href: watch::Sender<String>,
}

impl LocationNavigator {
    pub fn new(origin: &str, initial_path: &str) -> Self {
        let origin = origin.trim_end_matches('/').to_owned();
        let (href, _) = watch::channel(format!("{origin}{initial_path}"));

        Self { origin, href }
    }

    pub fn href(&self) -> String {
        self.href.borrow().clone()
    }

    /// Receiver notified on every navigation.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.href.subscribe()
    }
}

impl Navigator for LocationNavigator {
    fn go_to(&self, path: &str) {
        let href = format!("{}{path}", self.origin);
        tracing::info!(href = %href, "Navigating to {href}");
        self.href.send_replace(href);
    }
}
