pub mod logging_sender;

pub use logging_sender::LoggingEmailSender;
