use std::collections::BTreeMap;

pub const NOTIFICATION_ICON: &str = "/icons/Icon-192.png";
pub const NOTIFICATION_BADGE: &str = "/icons/Icon-192.png";
pub const DEFAULT_TAG: &str = "notification-1";
pub const VIBRATION_PATTERN: [u32; 3] = [100, 50, 100];

///
/// Fully resolved notification, ready to hand to the platform surface.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNotification {
    pub title: String,
    pub body: String,
    pub icon: &'static str,
    pub badge: &'static str,
    pub image: Option<String>,
    pub tag: String,
    pub vibrate: [u32; 3],
    pub require_interaction: bool,
    /// Auxiliary keys carried through for the click handler
    pub data: BTreeMap<String, String>,
}

impl DisplayNotification {
    pub fn new(title: String, body: String, tag: String) -> Self {
        Self {
            title,
            body,
            icon: NOTIFICATION_ICON,
            badge: NOTIFICATION_BADGE,
            image: None,
            tag,
            vibrate: VIBRATION_PATTERN,
            require_interaction: false,
            data: BTreeMap::new(),
        }
    }

    ///
    /// Shown when the push payload cannot be rendered;
    /// the user still learns something arrived.
    ///
    pub fn fallback() -> Self {
        Self::new(
            "New Message".to_string(),
            "You have a new message".to_string(),
            DEFAULT_TAG.to_string(),
        )
    }
}
