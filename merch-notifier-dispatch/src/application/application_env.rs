use anyhow::anyhow;
use reqwest::Url;
use std::net::SocketAddr;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub fcm_send_url: Url,
    pub fcm_bearer_token: String,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("MERCH_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("MERCH_NOTIFIER_LOG_FILENAME")?;
        let bind_address = Self::env_var("MERCH_NOTIFIER_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("MERCH_NOTIFIER_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("MERCH_NOTIFIER_DB_NAME")?;
        let fcm_send_url = Self::env_var("MERCH_NOTIFIER_FCM_SEND_URL")?.parse()?;
        let fcm_bearer_token = Self::env_var("MERCH_NOTIFIER_FCM_BEARER_TOKEN")?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            fcm_send_url,
            fcm_bearer_token,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
