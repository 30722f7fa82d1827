/// FIX Message Generator - Synthetic Test Data
///
/// Produces FIX-like tag=value messages wrapped as JSON lines, for load and
/// ingestion testing. Output is approximate by construction:
/// - Printable `|` delimiter in place of SOH
/// - Random body-length field, not measured from content
/// - Simplified mod-256 character-sum checksum
/// - Seeded, explicitly passed rng for reproducible runs

pub mod protocol;
pub mod config;
pub mod clock;
pub mod field;
pub mod generator;
pub mod stats;
pub mod writer;

pub use protocol::{checksum, Field, ValueKind, DEFAULT_DELIMITER};
pub use config::GeneratorConfig;
pub use clock::{Clock, FixedClock, LocalClock};
pub use field::{random_alphanumeric, random_field, random_value};
pub use generator::MessageGenerator;
pub use stats::GenerationStats;
pub use writer::{generate_to_file, write_messages, GeneratorError, GeneratorResult};
