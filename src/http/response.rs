use serde::Serialize;

/// Uniform JSON envelope shared by every vehicle endpoint.
#[derive(Debug, Serialize)]
pub struct ResponseBody<T: Serialize> {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ResponseBody<T> {
    pub fn data(data: T) -> Self {
        Self {
            error: false,
            message: None,
            data: Some(data),
        }
    }

    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            error: false,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ResponseBody<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: Some(message.into()),
            data: None,
        }
    }
}
