//! # tlsneg - TLS Negotiation Tables
//!
//! Registry and selection engine for the ciphersuite identifiers a TLS
//! handshake layer negotiates, plus the fault/alert model a conformance
//! harness uses to check that a peer reports injected faults correctly.
//!
//! Nothing here performs I/O or cryptography. The handshake layer consumes
//! the suite offer; a test harness consumes the fault tables.
//!
//! ## Architecture
//!
//! ```text
//!  handshake config ──tokens──> suites::select ──> ordered SuiteId offer
//!                                    │
//!                                    v
//!                          suites::registry (CIPHER_SUITES)
//!
//!  test harness ──fault id──> corruption layer (external) ──> peer
//!       │                                                     │
//!       └──── faults::verify(observed alert, fault id) <──────┘
//! ```
//!
//! ### Suite groups
//!
//! | Group     | Key exchange          | Ciphers                  |
//! |-----------|-----------------------|--------------------------|
//! | `srp`     | SRP                   | 3DES, AES128, AES256     |
//! | `srpCert` | SRP + RSA certificate | 3DES, AES128, AES256     |
//! | `rsa`     | RSA                   | 3DES, AES128, AES256, RC4|
//! | `anon`    | Anonymous DH          | AES128, AES256           |
//! | `srpAll`  | `srp` then `srpCert`  |                          |
//! | `certAll` | `srpCert` then `rsa`  |                          |
//!
//! ### Fault ranges
//!
//! | Category          | Ids     |
//! |-------------------|---------|
//! | ClientSrpFault    | 101-103 |
//! | ServerFault       | 201     |
//! | GenericFault      | 300-302 |
//! | ClientNoAuthFault | 501-502 |
//! | ClientCertFault   | 601     |
//!
//! ## Quick Start
//!
//! ```rust
//! use tlsneg::{select, SuiteGroup};
//!
//! // Cipher preferences in caller order; unknown tokens are ignored
//! let offer = select(SuiteGroup::CertAll, &["aes256", "chacha20", "rc4"]);
//! assert_eq!(offer, vec![0xC021, 0x0035, 0x0005]);
//! ```
//!
//! ```rust
//! use tlsneg::faults::{verify, Fault, HandshakeMode};
//! use tlsneg::wire::AlertDescription;
//!
//! for id in HandshakeMode::Srp.fault_plan() {
//!     // inject `id`, observe the peer's alert ...
//!     # let _ = id;
//! }
//! assert!(verify(AlertDescription::DecryptError.code(), Fault::BadFinished.id()));
//! ```
//!
//! ## Modules
//!
//! - [`suites`]: Ciphersuite registry and selector
//! - [`faults`]: Fault registry, alert matrix and conformance plans
//! - [`wire`]: Alert, handshake and extension codes
//! - [`config`]: Configuration management
//! - [`error`]: Error types and result aliases

pub mod config;
pub mod error;
pub mod faults;
pub mod suites;
pub mod wire;

// Re-exports for convenience
pub use config::{Config, ConfigOverlay, HandshakeConfig, HarnessConfig};
pub use error::{NegotiationError, Result};
pub use faults::{Fault, FaultCategory, FaultId, HandshakeMode};
pub use suites::{
    select, select_named, CipherAlgorithm, CipherSuiteEntry, KeyExchange, SuiteGroup, SuiteId,
};
pub use wire::{AlertCode, AlertDescription};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
