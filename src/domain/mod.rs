//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{SendOptions, SendSms};
pub use response::SendSmsReply;
pub use validation::ValidationError;
pub use value::{
    ApiId, KnownServiceCode, MessageText, PartnerId, PhoneNumber, RawPhoneNumber, SenderId,
    ServiceCode, UnixTimestamp,
};
