use crate::domain::{
    MessageText, PartnerId, RawPhoneNumber, SendOptions, SendSms, SendSmsReply, SenderId,
    ServiceCode, UnixTimestamp,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("empty response body")]
    EmptyBody,

    #[error("malformed status line: {line:?}")]
    MalformedStatusLine { line: String },
}

/// Encode the `sms/send` query parameters for a request.
///
/// The credential is appended by the client; this covers everything else, in
/// the order the gateway documents: `to`, `text`, `partner_id`, then the
/// optional parameters.
pub fn encode_send_sms_query(request: &SendSms) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    params.push((
        RawPhoneNumber::FIELD.to_owned(),
        request.to().raw().to_owned(),
    ));
    params.push((
        MessageText::FIELD.to_owned(),
        request.text().as_str().to_owned(),
    ));
    params.push((
        PartnerId::FIELD.to_owned(),
        request.options().partner_id.as_str().to_owned(),
    ));
    push_options(&mut params, request.options());

    params
}

fn push_options(params: &mut Vec<(String, String)>, options: &SendOptions) {
    if options.test {
        params.push(("test".to_owned(), "1".to_owned()));
    }
    if let Some(from) = options.from.as_ref() {
        params.push((SenderId::FIELD.to_owned(), from.as_str().to_owned()));
    }
    if let Some(time) = options.time {
        params.push((UnixTimestamp::FIELD.to_owned(), time.value().to_string()));
    }
    if options.translit {
        params.push(("translit".to_owned(), "1".to_owned()));
    }
}

/// Decode the gateway's plaintext reply.
///
/// The first line carries the integer service code; any following non-empty
/// lines carry message identifiers (one per recipient, on acceptance).
pub fn decode_send_sms_plain_response(body: &str) -> Result<SendSmsReply, TransportError> {
    let mut lines = body.lines().map(str::trim);

    let first = match lines.next() {
        Some(line) if !line.is_empty() => line,
        _ => return Err(TransportError::EmptyBody),
    };

    let code = first
        .parse::<i32>()
        .map(ServiceCode::new)
        .map_err(|_| TransportError::MalformedStatusLine {
            line: first.to_owned(),
        })?;

    let sms_ids = lines
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    Ok(SendSmsReply { code, sms_ids })
}
