use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS.RU `api_id` token.
///
/// Invariant: non-empty after trimming.
pub struct ApiId(String);

impl ApiId {
    /// Query parameter name used by SMS.RU (`api_id`).
    pub const FIELD: &'static str = "api_id";

    /// Create a validated [`ApiId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS.RU sender id (`from`).
///
/// Invariant: non-empty after trimming. The value must be enabled in your SMS.RU account.
pub struct SenderId(String);

impl SenderId {
    /// Query parameter name used by SMS.RU (`from`).
    pub const FIELD: &'static str = "from";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Partner identifier for SMS.RU (`partner_id`).
///
/// The gateway's API contract requires this on every send; it is unrelated to
/// the caller's credential. [`PartnerId::default`] carries the identifier
/// assigned to this tool.
pub struct PartnerId(String);

impl PartnerId {
    /// Query parameter name used by SMS.RU (`partner_id`).
    pub const FIELD: &'static str = "partner_id";

    /// Partner identifier assigned to this tool.
    pub const ASSIGNED: &'static str = "3805";

    /// Create a validated [`PartnerId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated partner id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PartnerId {
    fn default() -> Self {
        Self(Self::ASSIGNED.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`text`).
///
/// The value is preserved exactly as provided, including whitespace. Emptiness
/// is not validated here: the gateway enforces it remotely (code 203).
pub struct MessageText(String);

impl MessageText {
    /// Query parameter name used by SMS.RU (`text`).
    pub const FIELD: &'static str = "text";

    /// Wrap message text as provided.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to SMS.RU (`to`).
///
/// Invariant: non-empty after trimming. This type does not normalize; if you want E.164
/// normalization, parse into [`PhoneNumber`] and convert it into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Query parameter name used by SMS.RU (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to SMS.RU.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to a normalized raw value (E.164).
    fn from(value: PhoneNumber) -> Self {
        // Preserve E.164 normalization semantics for opt-in `PhoneNumber`.
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Query parameter name used by SMS.RU (`to`).
    pub const FIELD: &'static str = "to";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Unix timestamp in seconds (`time`).
///
/// This is used by SMS.RU for scheduled sends.
pub struct UnixTimestamp(u64);

impl UnixTimestamp {
    /// Query parameter name used by SMS.RU (`time`).
    pub const FIELD: &'static str = "time";

    /// Create a timestamp value (no range validation is performed).
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Service code from the first line of the gateway's reply.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct ServiceCode(i32);

impl ServiceCode {
    /// Construct a service code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by SMS.RU.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known service code variant, if one exists.
    pub fn known(self) -> Option<KnownServiceCode> {
        KnownServiceCode::from_code(self.0)
    }

    /// Returns `true` if this code means the message was accepted for delivery.
    pub fn is_accepted(self) -> bool {
        matches!(self.known(), Some(KnownServiceCode::Accepted))
    }

    /// Human-readable description, falling back for codes outside the
    /// documented set.
    pub fn describe(self) -> &'static str {
        self.known()
            .map(KnownServiceCode::description)
            .unwrap_or("unrecognized service code")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known SMS.RU service codes for `sms/send`.
///
/// Unknown codes are preserved as [`ServiceCode`] and return `None` from
/// [`KnownServiceCode::from_code`].
pub enum KnownServiceCode {
    Accepted,
    InvalidApiId,
    InsufficientFunds,
    InvalidRecipient,
    EmptyMessageText,
    SenderNotApproved,
    MessageTooLong,
    DailyLimitExceeded,
    RecipientBlocked,
    InvalidTime,
    RecipientInStopList,
    UsedGetInsteadOfPost,
    MethodNotFound,
    ServiceTemporarilyUnavailable,
    InvalidToken,
    InvalidAuth,
    AccountNotConfirmed,
}

impl KnownServiceCode {
    /// Convert a raw SMS.RU integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            100 => Self::Accepted,
            200 => Self::InvalidApiId,
            201 => Self::InsufficientFunds,
            202 => Self::InvalidRecipient,
            203 => Self::EmptyMessageText,
            204 => Self::SenderNotApproved,
            205 => Self::MessageTooLong,
            206 => Self::DailyLimitExceeded,
            207 => Self::RecipientBlocked,
            208 => Self::InvalidTime,
            209 => Self::RecipientInStopList,
            210 => Self::UsedGetInsteadOfPost,
            211 => Self::MethodNotFound,
            220 => Self::ServiceTemporarilyUnavailable,
            300 => Self::InvalidToken,
            301 => Self::InvalidAuth,
            302 => Self::AccountNotConfirmed,
            _ => return None,
        })
    }

    /// Human-readable description of the code, per the gateway's documentation.
    pub fn description(self) -> &'static str {
        match self {
            Self::Accepted => "message accepted for delivery",
            Self::InvalidApiId => "invalid api_id",
            Self::InsufficientFunds => "insufficient funds on the account",
            Self::InvalidRecipient => "invalid recipient",
            Self::EmptyMessageText => "message text is empty",
            Self::SenderNotApproved => "sender name not approved by the administration",
            Self::MessageTooLong => "message too long (exceeds 8 SMS)",
            Self::DailyLimitExceeded => "daily message limit reached or exceeded",
            Self::RecipientBlocked => {
                "messages cannot be sent to this number, or more than 100 recipients listed"
            }
            Self::InvalidTime => "time parameter is invalid",
            Self::RecipientInStopList => "recipient is in your stop list",
            Self::UsedGetInsteadOfPost => "GET used where POST is required",
            Self::MethodNotFound => "method not found",
            Self::ServiceTemporarilyUnavailable => {
                "service temporarily unavailable, try again later"
            }
            Self::InvalidToken => "invalid token (expired, or your IP changed)",
            Self::InvalidAuth => "invalid password, or user not found",
            Self::AccountNotConfirmed => "account not confirmed (registration code not entered)",
        }
    }
}
