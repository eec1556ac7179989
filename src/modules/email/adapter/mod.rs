pub mod outgoing {
    pub mod smtp_sender;

    pub use smtp_sender::SmtpEmailSender;
}
