//! Transport layer: wire-format details of the `sms/send` call.

mod send_sms;

pub use send_sms::{TransportError, decode_send_sms_plain_response, encode_send_sms_query};
