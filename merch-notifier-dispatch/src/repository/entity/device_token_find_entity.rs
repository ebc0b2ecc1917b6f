use serde::Deserialize;

/// A registration document without a token field yields an empty string;
/// token validation belongs to the dispatcher, not the lookup
#[derive(Debug, Deserialize)]
pub struct DeviceTokenFindEntity {
    #[serde(default)]
    pub token: String,
}
