//! Handshake, record content, extension and certificate type codes.

use serde::{Deserialize, Serialize};

/// Handshake message type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
#[allow(missing_docs)]
pub enum HandshakeType {
    HelloRequest = 0,
    ClientHello = 1,
    ServerHello = 2,
    Certificate = 11,
    ServerKeyExchange = 12,
    CertificateRequest = 13,
    ServerHelloDone = 14,
    CertificateVerify = 15,
    ClientKeyExchange = 16,
    Finished = 20,
}

impl HandshakeType {
    /// Wire value
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Parse from wire value
    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => HandshakeType::HelloRequest,
            1 => HandshakeType::ClientHello,
            2 => HandshakeType::ServerHello,
            11 => HandshakeType::Certificate,
            12 => HandshakeType::ServerKeyExchange,
            13 => HandshakeType::CertificateRequest,
            14 => HandshakeType::ServerHelloDone,
            15 => HandshakeType::CertificateVerify,
            16 => HandshakeType::ClientKeyExchange,
            20 => HandshakeType::Finished,
            _ => return None,
        })
    }
}

/// Record layer content type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
#[allow(missing_docs)]
pub enum ContentType {
    ChangeCipherSpec = 20,
    Alert = 21,
    Handshake = 22,
    ApplicationData = 23,
}

impl ContentType {
    /// Wire value
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Parse from wire value
    pub fn from_code(code: u8) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.code() == code)
    }

    /// All content types in wire order
    pub fn all() -> &'static [ContentType] {
        &[
            ContentType::ChangeCipherSpec,
            ContentType::Alert,
            ContentType::Handshake,
            ContentType::ApplicationData,
        ]
    }
}

/// Hello extension type (RFC 4366 registry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u16)]
pub enum ExtensionType {
    /// RFC 6091
    CertType = 9,
    /// RFC 5054
    Srp = 12,
    /// TACK pinning (private use)
    Tack = 0xF300,
    /// Test hook that breaks signatures (private use)
    BreakSigs = 0xF301,
}

impl ExtensionType {
    /// Wire value
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Parse from wire value
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            9 => Some(ExtensionType::CertType),
            12 => Some(ExtensionType::Srp),
            0xF300 => Some(ExtensionType::Tack),
            0xF301 => Some(ExtensionType::BreakSigs),
            _ => None,
        }
    }
}

/// Certificate type carried by the `cert_type` extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
#[allow(missing_docs)]
pub enum CertificateType {
    X509 = 0,
    OpenPgp = 1,
}

impl CertificateType {
    /// Wire value
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Client certificate type requested in CertificateRequest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
#[allow(missing_docs)]
pub enum ClientCertificateType {
    RsaSign = 1,
    DssSign = 2,
    RsaFixedDh = 3,
    DssFixedDh = 4,
}

impl ClientCertificateType {
    /// Wire value
    pub fn code(self) -> u8 {
        self as u8
    }
}
