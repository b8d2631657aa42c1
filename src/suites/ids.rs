//! IANA ciphersuite identifiers.
//!
//! These are the standardized registry values and are sent on the wire
//! verbatim.

use super::SuiteId;

/// RFC 5746 signalling value: secure renegotiation is supported.
///
/// Renegotiation itself is never performed; offering this value only
/// blocks renegotiation attacks. It is not a registry entry.
pub const TLS_EMPTY_RENEGOTIATION_INFO_SCSV: SuiteId = 0x00FF;

// SRP (RFC 5054)
/// SRP key exchange, 3DES-EDE-CBC
pub const TLS_SRP_SHA_WITH_3DES_EDE_CBC_SHA: SuiteId = 0xC01A;
/// SRP key exchange, AES-128-CBC
pub const TLS_SRP_SHA_WITH_AES_128_CBC_SHA: SuiteId = 0xC01D;
/// SRP key exchange, AES-256-CBC
pub const TLS_SRP_SHA_WITH_AES_256_CBC_SHA: SuiteId = 0xC020;

// SRP authenticated by an RSA certificate (RFC 5054)
/// SRP with RSA server certificate, 3DES-EDE-CBC
pub const TLS_SRP_SHA_RSA_WITH_3DES_EDE_CBC_SHA: SuiteId = 0xC01B;
/// SRP with RSA server certificate, AES-128-CBC
pub const TLS_SRP_SHA_RSA_WITH_AES_128_CBC_SHA: SuiteId = 0xC01E;
/// SRP with RSA server certificate, AES-256-CBC
pub const TLS_SRP_SHA_RSA_WITH_AES_256_CBC_SHA: SuiteId = 0xC021;

// RSA key transport
/// RSA key transport, 3DES-EDE-CBC
pub const TLS_RSA_WITH_3DES_EDE_CBC_SHA: SuiteId = 0x000A;
/// RSA key transport, AES-128-CBC
pub const TLS_RSA_WITH_AES_128_CBC_SHA: SuiteId = 0x002F;
/// RSA key transport, AES-256-CBC
pub const TLS_RSA_WITH_AES_256_CBC_SHA: SuiteId = 0x0035;
/// RSA key transport, RC4-128
pub const TLS_RSA_WITH_RC4_128_SHA: SuiteId = 0x0005;

// Anonymous Diffie-Hellman
/// Anonymous DH, AES-128-CBC
pub const TLS_DH_ANON_WITH_AES_128_CBC_SHA: SuiteId = 0x0034;
/// Anonymous DH, AES-256-CBC
pub const TLS_DH_ANON_WITH_AES_256_CBC_SHA: SuiteId = 0x003A;
