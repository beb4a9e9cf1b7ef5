use super::input::AppTextArea;
use crate::app::action::Action;
use crate::app::modal::Modal;

pub const EMAIL_PLACEHOLDER: &str = "Enter your email";

/// The sign-in screen and its "Reset Password" dialog.
#[derive(Debug)]
pub struct LandingState {
    pub forgot_open: bool,
    pub forgot_modal: Modal,
    pub email: AppTextArea,
    pub email_error: Option<&'static str>,
}

impl Default for LandingState {
    fn default() -> Self {
        Self {
            forgot_open: false,
            forgot_modal: Modal::new(Some("Reset Password"), Action::CloseForgotPassword)
                .with_size(50, 40),
            email: AppTextArea::with_placeholder(EMAIL_PLACEHOLDER),
            email_error: None,
        }
    }
}

impl LandingState {
    pub fn open_forgot(&mut self) {
        self.forgot_open = true;
        self.email = AppTextArea::with_placeholder(EMAIL_PLACEHOLDER);
        self.email_error = None;
    }

    pub fn close_forgot(&mut self) {
        self.forgot_open = false;
    }

    /// Returns the address a reset link goes to, or keeps the dialog open with
    /// an inline error.
    pub fn send_reset_link(&mut self) -> Option<String> {
        let email = self.email.value();
        if !looks_like_email(&email) {
            self.email_error = Some("Enter a valid email address");
            return None;
        }
        self.forgot_open = false;
        self.email_error = None;
        Some(email)
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((user, domain)) => {
            !user.is_empty()
                && !email.contains(char::is_whitespace)
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}
