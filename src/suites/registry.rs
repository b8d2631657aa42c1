//! Ciphersuite table.
//!
//! Every negotiable suite appears exactly once in [`CIPHER_SUITES`], tagged
//! with one key exchange and one bulk cipher. Composite groups such as
//! "all SRP suites" are computed from that partition on demand and never
//! stored separately, so they cannot drift from the base table.

use serde::{Deserialize, Serialize};

use super::ids;
use crate::error::{NegotiationError, Result};

/// Wire-exact 16-bit suite identifier.
pub type SuiteId = u16;

/// Key exchange mechanism of a suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyExchange {
    /// SRP password exchange, no certificate
    Srp,
    /// SRP password exchange, server signs with an RSA certificate
    SrpCert,
    /// RSA key transport, certificate authenticated
    Rsa,
    /// Anonymous Diffie-Hellman
    Anon,
}

impl KeyExchange {
    /// All categories in declaration order
    pub fn all() -> &'static [KeyExchange] {
        &[
            KeyExchange::Srp,
            KeyExchange::SrpCert,
            KeyExchange::Rsa,
            KeyExchange::Anon,
        ]
    }

    /// Uses an SRP password exchange
    pub fn is_srp(self) -> bool {
        matches!(self, KeyExchange::Srp | KeyExchange::SrpCert)
    }

    /// Server presents a certificate
    pub fn requires_certificate(self) -> bool {
        matches!(self, KeyExchange::SrpCert | KeyExchange::Rsa)
    }

    /// No authentication of either side
    pub fn is_anonymous(self) -> bool {
        self == KeyExchange::Anon
    }

    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            KeyExchange::Srp => "SRP",
            KeyExchange::SrpCert => "SRP_CERT",
            KeyExchange::Rsa => "RSA",
            KeyExchange::Anon => "ANON",
        }
    }
}

impl std::fmt::Display for KeyExchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Bulk cipher of a suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherAlgorithm {
    /// AES-128-CBC
    Aes128,
    /// AES-256-CBC
    Aes256,
    /// 3DES-EDE-CBC
    #[serde(rename = "3des")]
    TripleDes,
    /// RC4 stream cipher, 128-bit key
    Rc4,
}

impl CipherAlgorithm {
    /// All ciphers
    pub fn all() -> &'static [CipherAlgorithm] {
        &[
            CipherAlgorithm::Aes128,
            CipherAlgorithm::Aes256,
            CipherAlgorithm::TripleDes,
            CipherAlgorithm::Rc4,
        ]
    }

    /// Canonical preference token, as accepted by the selector
    pub fn token(self) -> &'static str {
        match self {
            CipherAlgorithm::Aes128 => "aes128",
            CipherAlgorithm::Aes256 => "aes256",
            CipherAlgorithm::TripleDes => "3des",
            CipherAlgorithm::Rc4 => "rc4",
        }
    }

    /// Effective key strength in bits
    pub fn key_bits(self) -> u16 {
        match self {
            CipherAlgorithm::Aes128 | CipherAlgorithm::Rc4 => 128,
            CipherAlgorithm::Aes256 => 256,
            CipherAlgorithm::TripleDes => 168,
        }
    }

    /// Resolve a preference token (see [`super::tables::CIPHER_TOKENS`])
    pub fn from_token(token: &str) -> Option<Self> {
        super::tables::CIPHER_TOKENS.get(token).copied()
    }
}

impl std::fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// One registry row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CipherSuiteEntry {
    /// Wire identifier
    pub id: SuiteId,
    /// IANA name
    pub name: &'static str,
    /// Key exchange category
    pub key_exchange: KeyExchange,
    /// Bulk cipher
    pub cipher: CipherAlgorithm,
}

const fn entry(
    id: SuiteId,
    name: &'static str,
    key_exchange: KeyExchange,
    cipher: CipherAlgorithm,
) -> CipherSuiteEntry {
    CipherSuiteEntry {
        id,
        name,
        key_exchange,
        cipher,
    }
}

/// All negotiable suites, in declaration order.
///
/// At most one row exists per (key exchange, cipher) pair. RC4 is offered
/// only with RSA; anonymous exchange only with AES.
pub static CIPHER_SUITES: &[CipherSuiteEntry] = &[
    entry(
        ids::TLS_SRP_SHA_WITH_3DES_EDE_CBC_SHA,
        "TLS_SRP_SHA_WITH_3DES_EDE_CBC_SHA",
        KeyExchange::Srp,
        CipherAlgorithm::TripleDes,
    ),
    entry(
        ids::TLS_SRP_SHA_WITH_AES_128_CBC_SHA,
        "TLS_SRP_SHA_WITH_AES_128_CBC_SHA",
        KeyExchange::Srp,
        CipherAlgorithm::Aes128,
    ),
    entry(
        ids::TLS_SRP_SHA_WITH_AES_256_CBC_SHA,
        "TLS_SRP_SHA_WITH_AES_256_CBC_SHA",
        KeyExchange::Srp,
        CipherAlgorithm::Aes256,
    ),
    entry(
        ids::TLS_SRP_SHA_RSA_WITH_3DES_EDE_CBC_SHA,
        "TLS_SRP_SHA_RSA_WITH_3DES_EDE_CBC_SHA",
        KeyExchange::SrpCert,
        CipherAlgorithm::TripleDes,
    ),
    entry(
        ids::TLS_SRP_SHA_RSA_WITH_AES_128_CBC_SHA,
        "TLS_SRP_SHA_RSA_WITH_AES_128_CBC_SHA",
        KeyExchange::SrpCert,
        CipherAlgorithm::Aes128,
    ),
    entry(
        ids::TLS_SRP_SHA_RSA_WITH_AES_256_CBC_SHA,
        "TLS_SRP_SHA_RSA_WITH_AES_256_CBC_SHA",
        KeyExchange::SrpCert,
        CipherAlgorithm::Aes256,
    ),
    entry(
        ids::TLS_RSA_WITH_3DES_EDE_CBC_SHA,
        "TLS_RSA_WITH_3DES_EDE_CBC_SHA",
        KeyExchange::Rsa,
        CipherAlgorithm::TripleDes,
    ),
    entry(
        ids::TLS_RSA_WITH_AES_128_CBC_SHA,
        "TLS_RSA_WITH_AES_128_CBC_SHA",
        KeyExchange::Rsa,
        CipherAlgorithm::Aes128,
    ),
    entry(
        ids::TLS_RSA_WITH_AES_256_CBC_SHA,
        "TLS_RSA_WITH_AES_256_CBC_SHA",
        KeyExchange::Rsa,
        CipherAlgorithm::Aes256,
    ),
    entry(
        ids::TLS_RSA_WITH_RC4_128_SHA,
        "TLS_RSA_WITH_RC4_128_SHA",
        KeyExchange::Rsa,
        CipherAlgorithm::Rc4,
    ),
    entry(
        ids::TLS_DH_ANON_WITH_AES_128_CBC_SHA,
        "TLS_DH_ANON_WITH_AES_128_CBC_SHA",
        KeyExchange::Anon,
        CipherAlgorithm::Aes128,
    ),
    entry(
        ids::TLS_DH_ANON_WITH_AES_256_CBC_SHA,
        "TLS_DH_ANON_WITH_AES_256_CBC_SHA",
        KeyExchange::Anon,
        CipherAlgorithm::Aes256,
    ),
];

/// Look up a suite by wire id
pub fn lookup(id: SuiteId) -> Result<&'static CipherSuiteEntry> {
    CIPHER_SUITES
        .iter()
        .find(|e| e.id == id)
        .ok_or(NegotiationError::SuiteNotFound(id))
}

/// Suites of one key exchange category, in declaration order
pub fn entries_in(key_exchange: KeyExchange) -> Vec<&'static CipherSuiteEntry> {
    CIPHER_SUITES
        .iter()
        .filter(|e| e.key_exchange == key_exchange)
        .collect()
}

/// Suites using one bulk cipher, in declaration order
pub fn entries_with(cipher: CipherAlgorithm) -> Vec<&'static CipherSuiteEntry> {
    CIPHER_SUITES.iter().filter(|e| e.cipher == cipher).collect()
}

/// Ids of all suites using one bulk cipher
pub fn ids_with(cipher: CipherAlgorithm) -> Vec<SuiteId> {
    entries_with(cipher).into_iter().map(|e| e.id).collect()
}

/// The single suite for a (key exchange, cipher) pair, if the category defines one
pub fn find(key_exchange: KeyExchange, cipher: CipherAlgorithm) -> Option<&'static CipherSuiteEntry> {
    CIPHER_SUITES
        .iter()
        .find(|e| e.key_exchange == key_exchange && e.cipher == cipher)
}

/// A base category or a named union of categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuiteGroup {
    /// SRP only
    #[serde(rename = "srp")]
    Srp,
    /// SRP with RSA certificate
    #[serde(rename = "srpCert")]
    SrpCert,
    /// RSA key transport
    #[serde(rename = "rsa")]
    Rsa,
    /// Anonymous DH
    #[serde(rename = "anon")]
    Anon,
    /// SRP ∪ SRP_CERT
    #[serde(rename = "srpAll")]
    SrpAll,
    /// SRP_CERT ∪ RSA
    #[serde(rename = "certAll")]
    CertAll,
}

impl SuiteGroup {
    /// All groups
    pub fn all() -> &'static [SuiteGroup] {
        &[
            SuiteGroup::Srp,
            SuiteGroup::SrpCert,
            SuiteGroup::Rsa,
            SuiteGroup::Anon,
            SuiteGroup::SrpAll,
            SuiteGroup::CertAll,
        ]
    }

    /// Base categories making up this group, in selection order
    pub fn constituents(self) -> &'static [KeyExchange] {
        match self {
            SuiteGroup::Srp => &[KeyExchange::Srp],
            SuiteGroup::SrpCert => &[KeyExchange::SrpCert],
            SuiteGroup::Rsa => &[KeyExchange::Rsa],
            SuiteGroup::Anon => &[KeyExchange::Anon],
            SuiteGroup::SrpAll => &[KeyExchange::Srp, KeyExchange::SrpCert],
            SuiteGroup::CertAll => &[KeyExchange::SrpCert, KeyExchange::Rsa],
        }
    }

    /// Union of more than one base category
    pub fn is_composite(self) -> bool {
        self.constituents().len() > 1
    }

    /// Canonical token
    pub fn token(self) -> &'static str {
        match self {
            SuiteGroup::Srp => "srp",
            SuiteGroup::SrpCert => "srpCert",
            SuiteGroup::Rsa => "rsa",
            SuiteGroup::Anon => "anon",
            SuiteGroup::SrpAll => "srpAll",
            SuiteGroup::CertAll => "certAll",
        }
    }
}

impl From<KeyExchange> for SuiteGroup {
    fn from(kx: KeyExchange) -> Self {
        match kx {
            KeyExchange::Srp => SuiteGroup::Srp,
            KeyExchange::SrpCert => SuiteGroup::SrpCert,
            KeyExchange::Rsa => SuiteGroup::Rsa,
            KeyExchange::Anon => SuiteGroup::Anon,
        }
    }
}

impl std::fmt::Display for SuiteGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl std::str::FromStr for SuiteGroup {
    type Err = NegotiationError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        super::tables::GROUP_TOKENS
            .get(normalized.as_str())
            .copied()
            .ok_or_else(|| NegotiationError::InvalidArgument(format!("Unknown suite group: {s}")))
    }
}

/// Ids of every suite in a group, constituents in order, declaration order within each
pub fn suite_ids(group: SuiteGroup) -> Vec<SuiteId> {
    group
        .constituents()
        .iter()
        .flat_map(|kx| entries_in(*kx))
        .map(|e| e.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<SuiteId> = CIPHER_SUITES.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), CIPHER_SUITES.len());
    }

    #[test]
    fn test_lookup() {
        let e = lookup(0x002F).unwrap();
        assert_eq!(e.key_exchange, KeyExchange::Rsa);
        assert_eq!(e.cipher, CipherAlgorithm::Aes128);
        assert_eq!(e.name, "TLS_RSA_WITH_AES_128_CBC_SHA");

        assert!(matches!(lookup(0x1301), Err(NegotiationError::SuiteNotFound(0x1301))));
    }

    #[test]
    fn test_scsv_is_not_an_entry() {
        assert!(lookup(ids::TLS_EMPTY_RENEGOTIATION_INFO_SCSV).is_err());
    }

    #[test]
    fn test_entries_in_declaration_order() {
        let srp: Vec<SuiteId> = entries_in(KeyExchange::Srp).iter().map(|e| e.id).collect();
        assert_eq!(srp, vec![0xC01A, 0xC01D, 0xC020]);

        let rsa: Vec<SuiteId> = entries_in(KeyExchange::Rsa).iter().map(|e| e.id).collect();
        assert_eq!(rsa, vec![0x000A, 0x002F, 0x0035, 0x0005]);
    }

    #[test]
    fn test_per_cipher_lists() {
        assert_eq!(ids_with(CipherAlgorithm::TripleDes), vec![0xC01A, 0xC01B, 0x000A]);
        assert_eq!(
            ids_with(CipherAlgorithm::Aes128),
            vec![0xC01D, 0xC01E, 0x002F, 0x0034]
        );
        assert_eq!(
            ids_with(CipherAlgorithm::Aes256),
            vec![0xC020, 0xC021, 0x0035, 0x003A]
        );
        assert_eq!(ids_with(CipherAlgorithm::Rc4), vec![0x0005]);
    }

    #[test]
    fn test_partial_category_coverage() {
        assert!(find(KeyExchange::Anon, CipherAlgorithm::TripleDes).is_none());
        assert!(find(KeyExchange::Srp, CipherAlgorithm::Rc4).is_none());
        assert_eq!(find(KeyExchange::Anon, CipherAlgorithm::Aes256).map(|e| e.id), Some(0x003A));
    }

    #[test]
    fn test_composite_groups() {
        assert_eq!(
            suite_ids(SuiteGroup::SrpAll),
            vec![0xC01A, 0xC01D, 0xC020, 0xC01B, 0xC01E, 0xC021]
        );
        assert_eq!(
            suite_ids(SuiteGroup::CertAll),
            vec![0xC01B, 0xC01E, 0xC021, 0x000A, 0x002F, 0x0035, 0x0005]
        );
        assert!(SuiteGroup::CertAll.is_composite());
        assert!(!SuiteGroup::Anon.is_composite());
    }

    #[test]
    fn test_group_parsing() {
        assert_eq!("certAll".parse::<SuiteGroup>().unwrap(), SuiteGroup::CertAll);
        assert_eq!("SRP_CERT".parse::<SuiteGroup>().unwrap(), SuiteGroup::SrpCert);
        assert_eq!("srpAll".parse::<SuiteGroup>().unwrap(), SuiteGroup::SrpAll);
        assert_eq!("ANON".parse::<SuiteGroup>().unwrap(), SuiteGroup::Anon);
        assert!(matches!(
            "cert".parse::<SuiteGroup>(),
            Err(NegotiationError::InvalidArgument(_))
        ));
        for group in SuiteGroup::all() {
            assert_eq!(group.token().parse::<SuiteGroup>().unwrap(), *group);
        }
    }

    #[test]
    fn test_kx_properties() {
        assert!(KeyExchange::SrpCert.is_srp());
        assert!(KeyExchange::SrpCert.requires_certificate());
        assert!(!KeyExchange::Srp.requires_certificate());
        assert!(KeyExchange::Anon.is_anonymous());
        assert_eq!(CipherAlgorithm::TripleDes.key_bits(), 168);
    }
}
