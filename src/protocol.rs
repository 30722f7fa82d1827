/// FIX-like message layout
///
/// A message payload is a run of `tag=value` pairs, each terminated by the delimiter:
///
///   8=FIX.4.2|9=<len>|35=D|49=BUYER|56=SELLER|34=<seq>|52=<time>|<filler>...|10=<sum>|
///
/// The payload is wrapped as a single JSON line: `{ "msg": "<payload>"}`.

use std::fmt;

/// Printable stand-in for SOH (ASCII 1)
pub const DEFAULT_DELIMITER: char = '|';

pub const JSON_PREFIX: &str = "{ \"msg\": \"";
pub const JSON_SUFFIX: &str = "\"}\n";

pub const BEGIN_STRING: &str = "FIX.4.2";
pub const MSG_TYPE_NEW_ORDER_SINGLE: &str = "D";
pub const SENDER_COMP_ID: &str = "BUYER";
pub const TARGET_COMP_ID: &str = "SELLER";

/// Envelope tags in emission order
pub const TAG_BEGIN_STRING: u32 = 8;
pub const TAG_BODY_LENGTH: u32 = 9;
pub const TAG_MSG_TYPE: u32 = 35;
pub const TAG_SENDER_COMP_ID: u32 = 49;
pub const TAG_TARGET_COMP_ID: u32 = 56;
pub const TAG_MSG_SEQ_NUM: u32 = 34;
pub const TAG_SENDING_TIME: u32 = 52;
pub const TAG_CHECKSUM: u32 = 10;

pub const ENVELOPE_TAGS: [u32; 7] = [
    TAG_BEGIN_STRING,
    TAG_BODY_LENGTH,
    TAG_MSG_TYPE,
    TAG_SENDER_COMP_ID,
    TAG_TARGET_COMP_ID,
    TAG_MSG_SEQ_NUM,
    TAG_SENDING_TIME,
];

/// Body length is synthetic: drawn from this range, never measured
pub const BODY_LENGTH_MIN: u32 = 1900;
pub const BODY_LENGTH_SPAN: u32 = 200;
pub const MSG_SEQ_NUM_SPAN: u32 = 1000;

/// Filler tags fall in [FILLER_TAG_MIN, FILLER_TAG_MIN + FILLER_TAG_SPAN)
pub const FILLER_TAG_MIN: u32 = 50;
pub const FILLER_TAG_SPAN: u32 = 300;

pub const INTEGER_VALUE_SPAN: u32 = 10_000;
pub const DECIMAL_VALUE_SCALE: f64 = 1000.0;
pub const ALPHANUMERIC_MIN_LEN: usize = 5;
pub const ALPHANUMERIC_LEN_SPAN: usize = 10;

/// chrono pattern for yyyyMMdd-HH:mm:ss
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H:%M:%S";

/// Size of `10=NNN|`
pub const CHECKSUM_FIELD_LEN: usize = 7;

/// Filler value category, drawn uniformly from [0, 4)
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer = 0,
    Decimal = 1,
    Timestamp = 2,
    Alphanumeric = 3,
}

pub const VALUE_KIND_COUNT: u32 = 4;

impl ValueKind {
    /// Anything outside the known range falls through to `Alphanumeric`
    pub fn from_u32(v: u32) -> Self {
        match v {
            0 => ValueKind::Integer,
            1 => ValueKind::Decimal,
            2 => ValueKind::Timestamp,
            _ => ValueKind::Alphanumeric,
        }
    }
}

/// A single `tag=value` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub tag: u32,
    pub value: String,
}

impl Field {
    pub fn new(tag: u32, value: impl Into<String>) -> Self {
        Field {
            tag,
            value: value.into(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.tag, self.value)
    }
}

/// Simplified checksum: sum of character codes mod 256, rendered as three digits
pub fn checksum(payload: &str) -> String {
    let sum = payload
        .chars()
        .fold(0u32, |acc, c| acc.wrapping_add(c as u32));
    format!("{:03}", sum % 256)
}
