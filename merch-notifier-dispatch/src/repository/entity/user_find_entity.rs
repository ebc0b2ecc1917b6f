use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UserFindEntity {
    #[serde(default)]
    pub display_name: Option<String>,
}
