/// Synthetic message generation
///
/// `MessageGenerator::generate` builds one JSON-wrapped line per call:
///   1. envelope fields in fixed order (body length and sequence number are random)
///   2. random filler fields until the payload reaches the fill threshold
///   3. trailing checksum over every payload character emitted so far
///
/// The rng is borrowed for the duration of a call, so callers own the stream and
/// decide how it is seeded and shared.

use crate::clock::{Clock, LocalClock};
use crate::config::GeneratorConfig;
use crate::field::random_field;
use crate::protocol::*;
use rand::Rng;

/// Payload builder that counts characters as it goes
struct Payload {
    buf: String,
    chars: usize,
    delimiter: char,
}

impl Payload {
    fn with_capacity(capacity: usize, delimiter: char) -> Self {
        Payload {
            buf: String::with_capacity(capacity),
            chars: 0,
            delimiter,
        }
    }

    fn push(&mut self, field: &Field) {
        let start = self.buf.len();
        self.buf.push_str(&field.to_string());
        self.buf.push(self.delimiter);
        self.chars += self.buf[start..].chars().count();
    }

    fn char_len(&self) -> usize {
        self.chars
    }
}

#[derive(Debug, Clone)]
pub struct MessageGenerator<C = LocalClock> {
    config: GeneratorConfig,
    clock: C,
}

impl MessageGenerator<LocalClock> {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_clock(config, LocalClock)
    }
}

impl<C: Clock> MessageGenerator<C> {
    pub fn with_clock(config: GeneratorConfig, clock: C) -> Self {
        MessageGenerator { config, clock }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Envelope fields; draws body length, then sequence number
    pub fn envelope<R: Rng + ?Sized>(&self, rng: &mut R) -> [Field; 7] {
        let body_length = BODY_LENGTH_MIN + rng.gen_range(0..BODY_LENGTH_SPAN);
        let seq_num = rng.gen_range(0..MSG_SEQ_NUM_SPAN);

        [
            Field::new(TAG_BEGIN_STRING, BEGIN_STRING),
            Field::new(TAG_BODY_LENGTH, body_length.to_string()),
            Field::new(TAG_MSG_TYPE, MSG_TYPE_NEW_ORDER_SINGLE),
            Field::new(TAG_SENDER_COMP_ID, SENDER_COMP_ID),
            Field::new(TAG_TARGET_COMP_ID, TARGET_COMP_ID),
            Field::new(TAG_MSG_SEQ_NUM, seq_num.to_string()),
            Field::new(TAG_SENDING_TIME, self.clock.timestamp()),
        ]
    }

    /// Payload only, checksum field included, without the JSON wrapper
    pub fn generate_payload<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let threshold = self.config.fill_threshold();
        let mut payload =
            Payload::with_capacity(threshold + self.config.checksum_reserve, self.config.delimiter);

        for field in self.envelope(rng).iter() {
            payload.push(field);
        }

        // Every field adds at least "t=v" plus the delimiter, so this terminates
        while payload.char_len() < threshold {
            payload.push(&random_field(rng, &self.clock));
        }

        let sum = checksum(&payload.buf);
        payload.push(&Field::new(TAG_CHECKSUM, sum));
        payload.buf
    }

    /// One output line: `{ "msg": "<payload>"}` plus newline
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let payload = self.generate_payload(rng);
        let mut line = String::with_capacity(JSON_PREFIX.len() + payload.len() + JSON_SUFFIX.len());
        line.push_str(JSON_PREFIX);
        line.push_str(&payload);
        line.push_str(JSON_SUFFIX);
        line
    }
}

impl Default for MessageGenerator<LocalClock> {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_generator(config: GeneratorConfig) -> MessageGenerator<FixedClock> {
        let dt = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 30, 45)
            .unwrap();
        MessageGenerator::with_clock(config, FixedClock(dt))
    }

    #[test]
    fn test_envelope_order() {
        let gen = fixed_generator(GeneratorConfig::default());
        let mut rng = StdRng::seed_from_u64(0);
        let envelope = gen.envelope(&mut rng);

        let tags: Vec<u32> = envelope.iter().map(|f| f.tag).collect();
        assert_eq!(tags, ENVELOPE_TAGS);
        assert_eq!(envelope[0].value, "FIX.4.2");
        assert_eq!(envelope[6].value, "20240601-12:30:45");

        let body_length: u32 = envelope[1].value.parse().unwrap();
        assert!((1900..2100).contains(&body_length));
        let seq: u32 = envelope[5].value.parse().unwrap();
        assert!(seq < 1000);
    }

    #[test]
    fn test_payload_reaches_threshold() {
        let gen = fixed_generator(GeneratorConfig::default());
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let payload = gen.generate_payload(&mut rng);
            let body = payload.strip_suffix('|').unwrap();
            let (before, checksum_field) = body.rsplit_once('|').unwrap();
            assert!(before.len() + 1 >= 1993);
            assert!(checksum_field.starts_with("10="));
        }
    }

    #[test]
    fn test_checksum_matches_preceding_chars() {
        let gen = fixed_generator(GeneratorConfig::default());
        let mut rng = StdRng::seed_from_u64(12);
        let payload = gen.generate_payload(&mut rng);

        let split = payload.len() - CHECKSUM_FIELD_LEN;
        let (head, tail) = payload.split_at(split);
        assert_eq!(tail, format!("10={}|", checksum(head)));
    }

    #[test]
    fn test_custom_delimiter() {
        let config = GeneratorConfig {
            delimiter: '\u{1}',
            ..GeneratorConfig::default()
        };
        let gen = fixed_generator(config);
        let mut rng = StdRng::seed_from_u64(13);
        let payload = gen.generate_payload(&mut rng);

        assert!(payload.starts_with("8=FIX.4.2\u{1}9="));
        assert!(payload.ends_with('\u{1}'));
        assert!(!payload.contains('|'));
    }

    #[test]
    fn test_tiny_target_still_has_envelope_and_checksum() {
        let config = GeneratorConfig {
            target_length: 0,
            ..GeneratorConfig::default()
        };
        let gen = fixed_generator(config);
        let mut rng = StdRng::seed_from_u64(14);
        let payload = gen.generate_payload(&mut rng);
        let fields: Vec<&str> = payload.trim_end_matches('|').split('|').collect();

        assert_eq!(fields.len(), 8);
        assert!(fields[7].starts_with("10="));
    }

    #[test]
    fn test_generate_wraps_payload() {
        let gen = fixed_generator(GeneratorConfig::default());
        let mut a = StdRng::seed_from_u64(15);
        let mut b = StdRng::seed_from_u64(15);

        let line = gen.generate(&mut a);
        let payload = gen.generate_payload(&mut b);
        assert_eq!(line, format!("{{ \"msg\": \"{}\"}}\n", payload));
    }
}
