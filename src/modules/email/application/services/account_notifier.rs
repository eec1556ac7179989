use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::info;

use crate::modules::email::application::ports::outgoing::{
    AccountNotifier, EmailSender, NotificationError, Recipient,
};

const SETUP_PASSWORD_TEMPLATE: &str = include_str!("../../../../../templates/setup_password.html");
const FORGOT_PASSWORD_TEMPLATE: &str = include_str!("../../../../../templates/forgot_password.html");

const SETUP_PASSWORD_SUBJECT: &str = "Team Everest - Activate Your Account";
const FORGOT_PASSWORD_SUBJECT: &str = "Team Everest - Reset Your Account Password";

/// Renders the account templates and hands them to an [`EmailSender`].
#[derive(Clone)]
pub struct TemplateAccountNotifier {
    sender: Arc<dyn EmailSender>,
    setup_url: String,
}

impl fmt::Debug for TemplateAccountNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateAccountNotifier")
            .field("sender", &"<dyn EmailSender>")
            .field("setup_url", &self.setup_url)
            .finish()
    }
}

impl TemplateAccountNotifier {
    pub fn new(sender: Arc<dyn EmailSender>, setup_url: impl Into<String>) -> Self {
        Self {
            sender,
            setup_url: setup_url.into(),
        }
    }

    fn link(&self, code: &str) -> String {
        format!("{}?activationCode={}", self.setup_url, code)
    }

    async fn dispatch(
        &self,
        template: &str,
        subject: &str,
        recipient: &Recipient,
        code: &str,
    ) -> Result<(), NotificationError> {
        let body = render(template, &recipient.name, &self.link(code));

        self.sender
            .send_email(&recipient.email, subject, &body)
            .await?;

        info!(to = %recipient.email, subject, "account mail sent");
        Ok(())
    }
}

fn render(template: &str, name: &str, link: &str) -> String {
    template.replace("{{name}}", name).replace("{{link}}", link)
}

#[async_trait]
impl AccountNotifier for TemplateAccountNotifier {
    async fn send_setup_password(
        &self,
        recipient: &Recipient,
        code: &str,
    ) -> Result<(), NotificationError> {
        self.dispatch(SETUP_PASSWORD_TEMPLATE, SETUP_PASSWORD_SUBJECT, recipient, code)
            .await
    }

    async fn send_password_reset(
        &self,
        recipient: &Recipient,
        code: &str,
    ) -> Result<(), NotificationError> {
        self.dispatch(FORGOT_PASSWORD_TEMPLATE, FORGOT_PASSWORD_SUBJECT, recipient, code)
            .await
    }
}
