use serde::Serialize;

pub mod contact;

/// Response envelope shared by the relay endpoints.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl ApiResponse {
    pub const SUCCESS: Self = Self {
        success: true,
        message: None,
    };

    pub fn failure(message: &'static str) -> Self {
        Self {
            success: false,
            message: Some(message),
        }
    }
}
