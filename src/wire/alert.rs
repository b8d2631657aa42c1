//! Alert levels and descriptions.

use serde::{Deserialize, Serialize};

/// Raw alert description byte as it appears on the wire.
pub type AlertCode = u8;

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum AlertLevel {
    /// Connection may continue
    Warning = 1,
    /// Connection must be terminated
    Fatal = 2,
}

impl AlertLevel {
    /// Wire value
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Parse from wire value
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(AlertLevel::Warning),
            2 => Some(AlertLevel::Fatal),
            _ => None,
        }
    }
}

/// Alert description (RFC 5246 §7.2 plus `unknown_psk_identity` from RFC 4279).
///
/// `BadRecordMac` is what a server sends when an SRP password is wrong, and
/// may also be sent for an unknown SRP username when the server does not
/// want to reveal that the name is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum AlertDescription {
    /// Orderly shutdown
    CloseNotify = 0,
    /// Inappropriate message received
    UnexpectedMessage = 10,
    /// Record failed to decrypt or authenticate
    BadRecordMac = 20,
    /// Legacy decryption failure (not to be sent by TLS 1.1+)
    DecryptionFailed = 21,
    /// Record exceeded the size limit
    RecordOverflow = 22,
    /// Decompression produced invalid input
    DecompressionFailure = 30,
    /// No acceptable set of security parameters
    HandshakeFailure = 40,
    /// SSLv3 only
    NoCertificate = 41,
    /// Certificate corrupt or unverifiable
    BadCertificate = 42,
    /// Certificate of an unsupported type
    UnsupportedCertificate = 43,
    /// Certificate revoked by its signer
    CertificateRevoked = 44,
    /// Certificate expired or not yet valid
    CertificateExpired = 45,
    /// Other certificate problem
    CertificateUnknown = 46,
    /// Field out of range or inconsistent
    IllegalParameter = 47,
    /// CA certificate could not be located
    UnknownCa = 48,
    /// Access control denied the handshake
    AccessDenied = 49,
    /// Message could not be decoded
    DecodeError = 50,
    /// Cryptographic check in the handshake failed
    DecryptError = 51,
    /// Export restriction violated
    ExportRestriction = 60,
    /// Protocol version not supported
    ProtocolVersion = 70,
    /// Server requires stronger ciphers
    InsufficientSecurity = 71,
    /// Peer-internal error
    InternalError = 80,
    /// Handshake cancelled
    UserCanceled = 90,
    /// Renegotiation refused
    NoRenegotiation = 100,
    /// PSK/SRP identity unknown
    UnknownPskIdentity = 115,
}

impl AlertDescription {
    /// Wire value
    pub fn code(self) -> AlertCode {
        self as AlertCode
    }

    /// Parse from wire value
    pub fn from_code(code: AlertCode) -> Option<Self> {
        Self::all().iter().copied().find(|a| a.code() == code)
    }

    /// Standard snake_case name
    pub fn name(self) -> &'static str {
        match self {
            AlertDescription::CloseNotify => "close_notify",
            AlertDescription::UnexpectedMessage => "unexpected_message",
            AlertDescription::BadRecordMac => "bad_record_mac",
            AlertDescription::DecryptionFailed => "decryption_failed",
            AlertDescription::RecordOverflow => "record_overflow",
            AlertDescription::DecompressionFailure => "decompression_failure",
            AlertDescription::HandshakeFailure => "handshake_failure",
            AlertDescription::NoCertificate => "no_certificate",
            AlertDescription::BadCertificate => "bad_certificate",
            AlertDescription::UnsupportedCertificate => "unsupported_certificate",
            AlertDescription::CertificateRevoked => "certificate_revoked",
            AlertDescription::CertificateExpired => "certificate_expired",
            AlertDescription::CertificateUnknown => "certificate_unknown",
            AlertDescription::IllegalParameter => "illegal_parameter",
            AlertDescription::UnknownCa => "unknown_ca",
            AlertDescription::AccessDenied => "access_denied",
            AlertDescription::DecodeError => "decode_error",
            AlertDescription::DecryptError => "decrypt_error",
            AlertDescription::ExportRestriction => "export_restriction",
            AlertDescription::ProtocolVersion => "protocol_version",
            AlertDescription::InsufficientSecurity => "insufficient_security",
            AlertDescription::InternalError => "internal_error",
            AlertDescription::UserCanceled => "user_canceled",
            AlertDescription::NoRenegotiation => "no_renegotiation",
            AlertDescription::UnknownPskIdentity => "unknown_psk_identity",
        }
    }

    /// Every defined description in ascending code order
    pub fn all() -> &'static [AlertDescription] {
        &[
            AlertDescription::CloseNotify,
            AlertDescription::UnexpectedMessage,
            AlertDescription::BadRecordMac,
            AlertDescription::DecryptionFailed,
            AlertDescription::RecordOverflow,
            AlertDescription::DecompressionFailure,
            AlertDescription::HandshakeFailure,
            AlertDescription::NoCertificate,
            AlertDescription::BadCertificate,
            AlertDescription::UnsupportedCertificate,
            AlertDescription::CertificateRevoked,
            AlertDescription::CertificateExpired,
            AlertDescription::CertificateUnknown,
            AlertDescription::IllegalParameter,
            AlertDescription::UnknownCa,
            AlertDescription::AccessDenied,
            AlertDescription::DecodeError,
            AlertDescription::DecryptError,
            AlertDescription::ExportRestriction,
            AlertDescription::ProtocolVersion,
            AlertDescription::InsufficientSecurity,
            AlertDescription::InternalError,
            AlertDescription::UserCanceled,
            AlertDescription::NoRenegotiation,
            AlertDescription::UnknownPskIdentity,
        ]
    }
}

impl From<AlertDescription> for AlertCode {
    fn from(alert: AlertDescription) -> Self {
        alert.code()
    }
}

impl std::fmt::Display for AlertDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for AlertDescription {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<AlertCode>() {
            return Self::from_code(code).ok_or_else(|| format!("Unknown alert code: {code}"));
        }
        let wanted = s.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| format!("Unknown alert: {s}"))
    }
}
