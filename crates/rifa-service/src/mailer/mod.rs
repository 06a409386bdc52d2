//! Outbound email delivery.

pub mod http;
pub mod log;
pub mod sender;

pub use sender::{Mailer, MailerDispatch};
