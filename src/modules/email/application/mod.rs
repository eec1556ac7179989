pub mod ports {
    pub mod outgoing;
}
pub mod services {
    mod account_notifier;

    pub use account_notifier::TemplateAccountNotifier;
}
