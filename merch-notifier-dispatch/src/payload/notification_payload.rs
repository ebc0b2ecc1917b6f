use std::collections::BTreeMap;

///
/// One push notification for one recipient. Built fresh per recipient per
/// event and never mutated afterwards.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPayload {
    pub title: String,
    pub body: String,
    /// Auxiliary keys delivered alongside the notification (wire names)
    pub data: BTreeMap<String, String>,
    pub hints: PlatformHints,
}

///
/// Platform delivery hints. Constant profile: high-priority Android
/// delivery on a fixed channel, background-wake Apple push.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformHints {
    pub android_priority: &'static str,
    pub android_channel: &'static str,
    pub click_action: &'static str,
    pub apns_priority: u8,
    pub content_available: bool,
    pub sound: &'static str,
}

impl Default for PlatformHints {
    fn default() -> Self {
        Self {
            android_priority: "high",
            android_channel: "high_importance_channel",
            click_action: "FLUTTER_NOTIFICATION_CLICK",
            apns_priority: 10,
            content_available: true,
            sound: "default",
        }
    }
}
