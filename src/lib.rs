//! Command-line SMS sender for the SMS.RU HTTP API.
//!
//! The binary performs exactly one `sms/send` request per invocation and maps
//! the gateway's reply onto a process exit status. The library underneath is
//! layered like a regular API client: a domain layer of strong types, a
//! transport layer for wire-format details, and a small client layer
//! performing the HTTP exchange, with the CLI surface on top.
//!
//! ```rust,no_run
//! use smssend::{ApiId, MessageText, RawPhoneNumber, SendOptions, SendSms, SmsSendClient};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), smssend::SmsSendError> {
//!     let client = SmsSendClient::new(ApiId::new("...")?);
//!     let to = RawPhoneNumber::new("+79251234567")?;
//!     let request = SendSms::new(to, MessageText::new("hello"), SendOptions::default());
//!     let reply = client.send_sms(request).await?;
//!     println!("{:?}", reply.sms_ids);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod telemetry;
mod transport;

pub use client::{DEFAULT_SEND_ENDPOINT, SmsSendClient, SmsSendClientBuilder, SmsSendError};
pub use config::{CredentialError, HomeDirSource, SystemHome};
pub use domain::{
    ApiId, KnownServiceCode, MessageText, PartnerId, PhoneNumber, RawPhoneNumber, SendOptions,
    SendSms, SendSmsReply, SenderId, ServiceCode, UnixTimestamp, ValidationError,
};
