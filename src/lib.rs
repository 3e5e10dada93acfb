pub mod config;
pub mod mailer;
pub mod mandrill;
pub mod template;
