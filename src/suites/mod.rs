//! Ciphersuite registry and preference-driven selection.
//!
//! The registry is a fixed table of the suites the handshake layer can
//! negotiate, partitioned by key exchange ([`KeyExchange`]) and bulk cipher
//! ([`CipherAlgorithm`]). The selector turns a caller's ordered cipher
//! preferences into the ordered list of suite ids to offer.
//!
//! ```
//! use tlsneg::suites::{select, SuiteGroup};
//!
//! let offer = select(SuiteGroup::Rsa, &["aes256", "aes128"]);
//! assert_eq!(offer, vec![0x0035, 0x002F]);
//! ```

pub mod ids;
pub mod registry;
pub mod selector;
pub mod tables;

pub use registry::{
    entries_in, entries_with, find, ids_with, lookup, suite_ids, CipherAlgorithm,
    CipherSuiteEntry, KeyExchange, SuiteGroup, SuiteId, CIPHER_SUITES,
};
pub use selector::{select, select_named};

/// True for signalling pseudo-suites that carry no key exchange or cipher.
pub fn is_signalling_suite(id: SuiteId) -> bool {
    id == ids::TLS_EMPTY_RENEGOTIATION_INFO_SCSV
}
