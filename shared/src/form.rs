use crate::{api::ApiError, notice::Notice};

/// State of the signup form and the notice below it.
///
/// Every shown notice gets a new generation; a hide request only takes
/// effect for the generation it was scheduled for, so an older timer can
/// never hide a newer notice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
    pub notice: Option<Notice>,
    pub notice_visible: bool,
    generation: u64,
}

/// What the caller has to do after a reply was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyEffect {
    pub reload: bool,
    /// Pass back to [`SignupForm::hide`] when the timer fires.
    pub generation: u64,
}

impl SignupForm {
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.activity.is_empty()
    }

    pub fn apply_reply(&mut self, result: &Result<String, ApiError>) -> ReplyEffect {
        let notice = Notice::for_signup(result);
        let reload = notice.is_success();
        if reload {
            self.email.clear();
            self.activity.clear();
        }
        self.notice = Some(notice);
        self.notice_visible = true;
        self.generation += 1;
        ReplyEffect {
            reload,
            generation: self.generation,
        }
    }

    /// Returns whether the notice was hidden.
    pub fn hide(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.notice_visible {
            return false;
        }
        self.notice_visible = false;
        true
    }
}
