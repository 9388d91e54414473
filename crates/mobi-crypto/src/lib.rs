#![deny(missing_docs)]

//! # mobi-crypto — The Mobi Derivation Core
//!
//! Derives a deterministic 21-digit decimal identifier from a 32-byte
//! public key:
//!
//! 1. **SHA-256** ([`sha256`](mod@sha256)) — a standalone FIPS 180-4 implementation,
//!    bit-exact with the reference algorithm.
//! 2. **Round sampler** ([`sampler`]) — rejection sampling of 72-bit digest
//!    prefixes until one falls below `10^21`.
//! 3. **Decimal conversion** ([`decimal`]) — base-256 long division into a
//!    21-digit zero-padded string.
//! 4. **Assembly** ([`derive`](mod@derive)) — the nested 12/15/18/21-digit
//!    [`Identifier`](mobi_core::Identifier).
//!
//! Every function here is pure: no global state, no I/O, no logging. All
//! buffers are stack-local, so derivation is safe to call from any number
//! of threads without synchronisation.
//!
//! ## Crate Policy
//!
//! - Depends only on `mobi-core` internally, and on nothing external at
//!   runtime. `sha2` is a dev-dependency used to cross-check the hash.
//! - No `unsafe` code.
//! - Sampler exhaustion is a hard error. There is no biased fallback.

#![forbid(unsafe_code)]

pub mod decimal;
pub mod derive;
pub mod sampler;
pub mod sha256;

pub use decimal::{to_decimal, DECIMAL_WIDTH};
pub use derive::{derive, derive_bytes, derive_detailed, derive_hex, Derivation};
pub use sampler::{sample, RawSample, Sample, DECIMAL_BOUND, MAX_ROUNDS, SAMPLE_LEN};
pub use sha256::{sha256, sha256_hex, Sha256};
