use super::{
    dto::{FcmErrorBody, FcmErrorResponse, FcmMessage, FcmSendRequest, FcmSendResponse},
    PushGateway, SendError, REASON_INVALID_TOKEN, REASON_TOKEN_NOT_REGISTERED,
};
use crate::payload::NotificationPayload;
use axum::async_trait;
use reqwest::{Client, Url};

pub struct FcmPushGatewayConfig {
    pub send_url: Url,
    pub bearer_token: String,
}

pub struct FcmPushGateway {
    config: FcmPushGatewayConfig,
    client: Client,
}

impl FcmPushGateway {
    pub fn new(config: FcmPushGatewayConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn classify_rejection(error: FcmErrorBody) -> SendError {
        let error_code = error
            .details
            .iter()
            .find_map(|detail| detail.error_code.as_deref());

        match (error.status.as_str(), error_code) {
            ("UNREGISTERED" | "NOT_FOUND", _) | (_, Some("UNREGISTERED")) => {
                SendError::InvalidToken {
                    reason: REASON_TOKEN_NOT_REGISTERED.to_string(),
                }
            }
            // FCM reports a malformed token and a malformed message with the
            // same status; the message text is the only discriminator
            ("INVALID_ARGUMENT", _)
                if error.message.to_ascii_lowercase().contains("token") =>
            {
                SendError::InvalidToken {
                    reason: REASON_INVALID_TOKEN.to_string(),
                }
            }
            _ => SendError::Rejected {
                status: error.status,
                message: error.message,
            },
        }
    }
}

#[async_trait]
impl PushGateway for FcmPushGateway {
    async fn send(&self, token: &str, payload: &NotificationPayload) -> Result<String, SendError> {
        let request = FcmSendRequest {
            message: FcmMessage::new(token, payload),
        };

        let response = self
            .client
            .post(self.config.send_url.clone())
            .bearer_auth(&self.config.bearer_token)
            .json(&request)
            .send()
            .await?;

        if response.status().is_success() {
            let response = response.json::<FcmSendResponse>().await?;
            return Ok(response.name);
        }

        let http_status = response.status();
        let error = match response.json::<FcmErrorResponse>().await {
            Ok(response) => response.error,
            Err(_) => FcmErrorBody {
                status: http_status.to_string(),
                message: "unrecognized gateway error body".to_string(),
                details: Vec::new(),
            },
        };

        Err(Self::classify_rejection(error))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn error_body(status: &str, message: &str, error_code: Option<&str>) -> FcmErrorBody {
        use crate::gateway::dto::FcmErrorDetail;

        FcmErrorBody {
            status: status.to_string(),
            message: message.to_string(),
            details: error_code
                .map(|code| FcmErrorDetail {
                    error_code: Some(code.to_string()),
                })
                .into_iter()
                .collect(),
        }
    }

    #[test]
    fn unregistered_status_maps_to_token_not_registered() {
        let error = error_body("UNREGISTERED", "Requested entity was not found.", None);

        let classified = FcmPushGateway::classify_rejection(error);

        assert!(matches!(
            classified,
            SendError::InvalidToken { reason } if reason == REASON_TOKEN_NOT_REGISTERED
        ));
    }

    #[test]
    fn unregistered_error_code_maps_to_token_not_registered() {
        let error = error_body(
            "NOT_FOUND",
            "Requested entity was not found.",
            Some("UNREGISTERED"),
        );

        let classified = FcmPushGateway::classify_rejection(error);

        assert!(matches!(
            classified,
            SendError::InvalidToken { reason } if reason == REASON_TOKEN_NOT_REGISTERED
        ));
    }

    #[test]
    fn invalid_token_argument_maps_to_invalid_token() {
        let error = error_body(
            "INVALID_ARGUMENT",
            "The registration token is not a valid FCM registration token",
            None,
        );

        let classified = FcmPushGateway::classify_rejection(error);

        assert!(matches!(
            classified,
            SendError::InvalidToken { reason } if reason == REASON_INVALID_TOKEN
        ));
    }

    #[test]
    fn invalid_message_argument_stays_rejected() {
        let error = error_body("INVALID_ARGUMENT", "Invalid JSON payload received.", None);

        let classified = FcmPushGateway::classify_rejection(error);

        assert!(matches!(classified, SendError::Rejected { .. }));
    }

    #[test]
    fn quota_exceeded_stays_rejected() {
        let error = error_body("RESOURCE_EXHAUSTED", "Quota exceeded.", Some("QUOTA_EXCEEDED"));

        let classified = FcmPushGateway::classify_rejection(error);

        assert!(matches!(classified, SendError::Rejected { .. }));
    }
}
