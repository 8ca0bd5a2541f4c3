use crate::error::AppError;

/// Outcome banner shared by forms and lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<AppError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, err: AppError) {
        self.error = Some(err);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn apply<T>(&mut self, result: Result<T, AppError>, success: impl Into<String>) {
        match result {
            Ok(_) => self.set_success(success),
            Err(err) => self.set_error(err),
        }
    }
}
