//! Handshake-layer wire vocabulary.
//!
//! Numeric values here are a binary contract with the record and message
//! layers: they reproduce the standardized TLS assignments exactly and must
//! never be renumbered.

mod alert;
mod handshake;

pub use alert::{AlertCode, AlertDescription, AlertLevel};
pub use handshake::{
    CertificateType, ClientCertificateType, ContentType, ExtensionType, HandshakeType,
};
