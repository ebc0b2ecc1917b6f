use serde::Deserialize;
use std::collections::BTreeMap;

///
/// Push message as delivered to the background handler. Every part is
/// optional; senders outside this system may omit any of them.
///
#[derive(Debug, Default, Deserialize)]
pub struct RawPushPayload {
    pub notification: Option<RawNotification>,
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawNotification {
    pub title: Option<String>,
    pub body: Option<String>,
    pub image: Option<String>,
}
