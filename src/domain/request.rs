use crate::domain::value::{MessageText, PartnerId, RawPhoneNumber, SenderId, UnixTimestamp};

#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    pub from: Option<SenderId>,
    pub time: Option<UnixTimestamp>,
    pub translit: bool,
    pub test: bool,
    pub partner_id: PartnerId,
}

#[derive(Debug, Clone)]
pub struct SendSms {
    to: RawPhoneNumber,
    text: MessageText,
    options: SendOptions,
}

impl SendSms {
    pub fn new(to: RawPhoneNumber, text: MessageText, options: SendOptions) -> Self {
        Self { to, text, options }
    }

    pub fn to(&self) -> &RawPhoneNumber {
        &self.to
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}
