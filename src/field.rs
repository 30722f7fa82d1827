/// Random filler field generation
///
/// Every draw goes through the caller's rng, in a fixed order: tag, value kind,
/// then whatever the value itself needs.

use crate::clock::Clock;
use crate::protocol::*;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Draw a filler value of the given kind
pub fn random_value<R, C>(rng: &mut R, clock: &C, kind: ValueKind) -> String
where
    R: Rng + ?Sized,
    C: Clock + ?Sized,
{
    match kind {
        ValueKind::Integer => rng.gen_range(0..INTEGER_VALUE_SPAN).to_string(),
        ValueKind::Decimal => format!("{:.2}", rng.gen::<f64>() * DECIMAL_VALUE_SCALE),
        ValueKind::Timestamp => clock.timestamp(),
        ValueKind::Alphanumeric => {
            let len = ALPHANUMERIC_MIN_LEN + rng.gen_range(0..ALPHANUMERIC_LEN_SPAN);
            random_alphanumeric(rng, len)
        }
    }
}

/// `len` characters, each drawn independently from [A-Za-z0-9]
pub fn random_alphanumeric<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

/// One filler field with tag in [50, 349] and a value of random kind
pub fn random_field<R, C>(rng: &mut R, clock: &C) -> Field
where
    R: Rng + ?Sized,
    C: Clock + ?Sized,
{
    let tag = FILLER_TAG_MIN + rng.gen_range(0..FILLER_TAG_SPAN);
    let kind = ValueKind::from_u32(rng.gen_range(0..VALUE_KIND_COUNT));
    Field::new(tag, random_value(rng, clock, kind))
}
