//! Command-line surface: argument set, resolution, and exit-code mapping.

use std::io::{self, Read};
use std::time::Duration;

use clap::Parser;
use tracing::debug;

use crate::client::{DEFAULT_SEND_ENDPOINT, SmsSendClient, SmsSendError};
use crate::config::{self, CredentialError, SystemHome};
use crate::domain::{
    MessageText, PhoneNumber, RawPhoneNumber, SendOptions, SendSms, SendSmsReply, SenderId,
    UnixTimestamp, ValidationError,
};

/// Exit status: message accepted by the gateway.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status: gateway returned an error code.
pub const EXIT_SERVICE: u8 = 1;
/// Exit status: HTTP transport failure.
pub const EXIT_TRANSPORT: u8 = 2;
/// Exit status: usage or configuration error.
pub const EXIT_USAGE: u8 = 3;

const AFTER_HELP: &str = "\
Exit codes:
    0 - message accepted by the gateway
    1 - gateway returned an error code
    2 - HTTP transport error
    3 - usage or configuration error

The API id is read from <home>/.smssendrc when --api-id is not given.

Example:
    echo \"Hello world\" | smssend --api-id=yourapiid --to=79251234567
";

#[derive(Parser, Debug)]
#[command(
    name = "smssend",
    version,
    about = "Send an SMS message from the command line through SMS.RU",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// API id; read from the credential file when omitted
    #[arg(long = "api-id", value_name = "VALUE")]
    pub api_id: Option<String>,

    /// Telephone number to send the message to
    #[arg(long, value_name = "PHONENUMBER")]
    pub to: String,

    /// Message text; read from standard input when omitted
    #[arg(long, value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Sender name
    #[arg(long, value_name = "VALUE")]
    pub from: Option<String>,

    /// Send time using UNIX TIME format
    #[arg(long, value_name = "VALUE")]
    pub time: Option<u64>,

    /// Timeout for the HTTP connection, in seconds
    #[arg(long = "http_timeout", value_name = "VALUE", default_value_t = 10)]
    pub http_timeout: u64,

    /// Convert non-latin characters to translit
    #[arg(long)]
    pub translit: bool,

    /// Print debug messages (also marks the request as a test send)
    #[arg(long)]
    pub debug: bool,

    /// Gateway endpoint override
    #[arg(
        long = "api-url",
        value_name = "URL",
        hide = true,
        env = "SMSSEND_API_URL",
        default_value = DEFAULT_SEND_ENDPOINT
    )]
    pub api_url: String,
}

/// Parse arguments, forcing usage failures onto exit status 3.
///
/// clap's own error exit would be 2, which this tool reserves for transport
/// failures. `--help` and `--version` still exit 0.
pub fn parse_or_exit() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                EXIT_USAGE
            } else {
                EXIT_SUCCESS
            };
            let _ = err.print();
            std::process::exit(code.into());
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error("cannot read message from standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Gateway(#[from] SmsSendError),
}

impl CliError {
    /// Map the error to the documented exit status.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Credential(_) | Self::Stdin(_) | Self::Invalid(_) => EXIT_USAGE,
            Self::Gateway(SmsSendError::Service { .. }) => EXIT_SERVICE,
            Self::Gateway(SmsSendError::Validation(_)) => EXIT_USAGE,
            Self::Gateway(_) => EXIT_TRANSPORT,
        }
    }

    /// Usage errors are always reported on stderr; the rest only at debug level.
    pub fn is_usage(&self) -> bool {
        self.exit_code() == EXIT_USAGE
    }
}

/// Execute one send: resolve the credential and message, perform the request.
pub async fn run(cli: Cli) -> Result<SendSmsReply, CliError> {
    let api_id = config::resolve_api_id(cli.api_id.as_deref(), &SystemHome)?;

    let to = RawPhoneNumber::new(cli.to.as_str())?;
    if let Err(err) = PhoneNumber::parse(None, cli.to.as_str()) {
        debug!(%err, "recipient is not a parseable phone number; sending it verbatim");
    }

    let text = MessageText::new(match cli.message {
        Some(message) => message,
        None => read_message_from_stdin()?,
    });

    let options = SendOptions {
        from: cli.from.as_deref().map(SenderId::new).transpose()?,
        time: cli.time.map(UnixTimestamp::new),
        translit: cli.translit,
        test: cli.debug,
        ..Default::default()
    };
    let request = SendSms::new(to, text, options);

    let client = SmsSendClient::builder(api_id)
        .endpoint(&cli.api_url)
        .timeout(Duration::from_secs(cli.http_timeout))
        .user_agent(concat!("smssend/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let reply = client.send_sms(request).await?;
    debug!(code = reply.code.as_i32(), ids = ?reply.sms_ids, "message accepted");
    Ok(reply)
}

fn read_message_from_stdin() -> Result<String, CliError> {
    let mut message = String::new();
    io::stdin()
        .read_to_string(&mut message)
        .map_err(CliError::Stdin)?;
    Ok(message)
}
