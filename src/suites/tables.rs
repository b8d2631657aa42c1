//! Token vocabularies for the selector.
//!
//! Cipher tokens are matched exactly. Group keys are stored in
//! normalized form (lowercase, no `_` or `-`), so `SRP_CERT`, `srp-cert` and
//! `srpCert` resolve to the same group.

use phf::phf_map;

use super::registry::{CipherAlgorithm, SuiteGroup};

/// Preference token → bulk cipher
pub static CIPHER_TOKENS: phf::Map<&'static str, CipherAlgorithm> = phf_map! {
    "aes128" => CipherAlgorithm::Aes128,
    "aes256" => CipherAlgorithm::Aes256,
    "3des" => CipherAlgorithm::TripleDes,
    "rc4" => CipherAlgorithm::Rc4,
};

/// Normalized group token → suite group
pub static GROUP_TOKENS: phf::Map<&'static str, SuiteGroup> = phf_map! {
    "srp" => SuiteGroup::Srp,
    "srpcert" => SuiteGroup::SrpCert,
    "rsa" => SuiteGroup::Rsa,
    "anon" => SuiteGroup::Anon,
    "srpall" => SuiteGroup::SrpAll,
    "certall" => SuiteGroup::CertAll,
};
