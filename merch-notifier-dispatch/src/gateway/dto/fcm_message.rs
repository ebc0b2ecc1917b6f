use crate::payload::NotificationPayload;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct FcmSendRequest {
    pub message: FcmMessage,
}

///
/// FCM v1 layered message: shared notification fields plus the
/// platform-specific delivery profiles derived from the payload hints.
///
#[derive(Debug, Serialize)]
pub struct FcmMessage {
    pub token: String,
    pub notification: FcmNotification,
    pub android: AndroidConfig,
    pub apns: ApnsConfig,
    pub data: BTreeMap<String, String>,
}

impl FcmMessage {
    pub fn new(token: &str, payload: &NotificationPayload) -> Self {
        let hints = &payload.hints;

        let mut data = payload.data.clone();
        data.insert("click_action".to_string(), hints.click_action.to_string());
        data.insert("priority".to_string(), hints.android_priority.to_string());

        Self {
            token: token.to_string(),
            notification: FcmNotification {
                title: payload.title.clone(),
                body: payload.body.clone(),
            },
            android: AndroidConfig {
                priority: hints.android_priority.to_string(),
                notification: AndroidNotification {
                    click_action: hints.click_action.to_string(),
                    priority: hints.android_priority.to_string(),
                    channel_id: hints.android_channel.to_string(),
                    sound: hints.sound.to_string(),
                    visibility: "public".to_string(),
                    default_sound: true,
                    default_vibrate_timings: true,
                },
            },
            apns: ApnsConfig {
                payload: ApnsPayload {
                    aps: Aps {
                        content_available: hints.content_available as u8,
                        sound: hints.sound.to_string(),
                        priority: hints.apns_priority,
                    },
                },
            },
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FcmNotification {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct AndroidConfig {
    pub priority: String,
    pub notification: AndroidNotification,
}

#[derive(Debug, Serialize)]
pub struct AndroidNotification {
    pub click_action: String,
    pub priority: String,
    pub channel_id: String,
    pub sound: String,
    pub visibility: String,
    pub default_sound: bool,
    pub default_vibrate_timings: bool,
}

#[derive(Debug, Serialize)]
pub struct ApnsConfig {
    pub payload: ApnsPayload,
}

#[derive(Debug, Serialize)]
pub struct ApnsPayload {
    pub aps: Aps,
}

#[derive(Debug, Serialize)]
pub struct Aps {
    #[serde(rename = "content-available")]
    pub content_available: u8,
    pub sound: String,
    pub priority: u8,
}

#[derive(Debug, Deserialize)]
pub struct FcmSendResponse {
    /// Fully qualified message name, e.g. "projects/p/messages/m"
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct FcmErrorResponse {
    pub error: FcmErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct FcmErrorBody {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Vec<FcmErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct FcmErrorDetail {
    #[serde(rename = "errorCode", default)]
    pub error_code: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::payload::{build, DomainEvent, RecipientRole};
    use serde_json::Value;

    #[test]
    fn message_json_carries_payload_and_constant_profiles() {
        let payload = build(
            &DomainEvent::MessageCreated {
                conversation_id: "conv-1".to_string(),
                sender_id: "user-sender".to_string(),
                content: "hi".to_string(),
            },
            RecipientRole::Recipient,
            Some("Ana"),
        )
        .unwrap();

        let message = FcmMessage::new("token-1", &payload);
        let json = serde_json::to_value(FcmSendRequest { message }).unwrap();
        let message = &json["message"];

        assert_eq!(message["token"], "token-1");
        assert_eq!(message["notification"]["title"], "New message from Ana");
        assert_eq!(message["notification"]["body"], "hi");
        assert_eq!(message["android"]["priority"], "high");
        assert_eq!(
            message["android"]["notification"]["channel_id"],
            "high_importance_channel"
        );
        assert_eq!(message["apns"]["payload"]["aps"]["content-available"], 1);
        assert_eq!(message["apns"]["payload"]["aps"]["priority"], 10);
        assert_eq!(message["data"]["type"], "message");
        assert_eq!(message["data"]["conversationId"], "conv-1");
        assert_eq!(message["data"]["click_action"], "FLUTTER_NOTIFICATION_CLICK");
        assert_eq!(message["data"]["priority"], "high");
    }

    #[test]
    fn error_response_json_deserialize() {
        let json = r#"{
            "error": {
                "code": 404,
                "message": "Requested entity was not found.",
                "status": "NOT_FOUND",
                "details": [{ "errorCode": "UNREGISTERED" }]
            }
        }"#;

        let response = serde_json::from_str::<FcmErrorResponse>(json).unwrap();

        assert_eq!(response.error.status, "NOT_FOUND");
        assert_eq!(
            response.error.details[0].error_code.as_deref(),
            Some("UNREGISTERED")
        );
    }

    #[test]
    fn error_response_json_deserialize_missing_fields() {
        let response = serde_json::from_str::<FcmErrorResponse>(r#"{ "error": {} }"#).unwrap();

        assert!(response.error.status.is_empty());
        assert!(response.error.details.is_empty());
    }

    #[test]
    fn send_response_json_deserialize() {
        let json = r#"{ "name": "projects/merch/messages/12345" }"#;

        let response = serde_json::from_str::<FcmSendResponse>(json).unwrap();

        assert_eq!(response.name, "projects/merch/messages/12345");
    }

    #[test]
    fn message_json_has_no_unexpected_top_level_keys() {
        let payload = build(
            &DomainEvent::OrderCreated {
                order_id: "ord-1".to_string(),
                buyer_id: "b".to_string(),
                seller_id: "s".to_string(),
            },
            RecipientRole::Buyer,
            None,
        )
        .unwrap();

        let json = serde_json::to_value(FcmMessage::new("t", &payload)).unwrap();
        let Value::Object(map) = json else {
            panic!("expected object");
        };

        let mut keys = map.keys().map(String::as_str).collect::<Vec<_>>();
        keys.sort_unstable();
        assert_eq!(keys, ["android", "apns", "data", "notification", "token"]);
    }
}
