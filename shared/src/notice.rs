use crate::api::ApiError;

pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const SIGNUP_REJECTED: &str = "An error occurred";
pub const UNREGISTER_FAILED: &str = "Failed to unregister participant";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// Status line shown under the signup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn for_signup(result: &Result<String, ApiError>) -> Self {
        match result {
            Ok(message) => Notice::success(message.as_str()),
            Err(err) if err.is_transport() => Notice::error(SIGNUP_FAILED),
            Err(err) => Notice::error(err.detail().unwrap_or(SIGNUP_REJECTED)),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

/// Text for the blocking alert after a failed removal.
pub fn unregister_alert(err: &ApiError) -> String {
    err.server_text().unwrap_or(UNREGISTER_FAILED).to_string()
}
