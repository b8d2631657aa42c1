//! Fault identifiers grouped by the handshake step they corrupt.
//!
//! Each category owns a contiguous, inclusive id range and the ranges are
//! disjoint. Every id inside a range is a defined fault.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{NegotiationError, Result};

/// Numeric fault identifier.
pub type FaultId = u16;

/// Class of handshake step a fault corrupts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaultCategory {
    /// Client side of an SRP exchange
    #[serde(rename = "client-srp")]
    ClientSrpFault,
    /// Client certificate verification
    #[serde(rename = "client-cert")]
    ClientCertFault,
    /// Client key exchange without client authentication
    #[serde(rename = "client-noauth")]
    ClientNoAuthFault,
    /// Server side of the exchange
    #[serde(rename = "server")]
    ServerFault,
    /// Any handshake (Finished, record MAC, padding)
    #[serde(rename = "generic")]
    GenericFault,
}

impl FaultCategory {
    /// All categories in ascending range order
    pub fn all() -> &'static [FaultCategory] {
        &[
            FaultCategory::ClientSrpFault,
            FaultCategory::ServerFault,
            FaultCategory::GenericFault,
            FaultCategory::ClientNoAuthFault,
            FaultCategory::ClientCertFault,
        ]
    }

    /// Inclusive id range owned by this category
    pub fn range(self) -> RangeInclusive<FaultId> {
        match self {
            FaultCategory::ClientSrpFault => 101..=103,
            FaultCategory::ServerFault => 201..=201,
            FaultCategory::GenericFault => 300..=302,
            FaultCategory::ClientNoAuthFault => 501..=502,
            FaultCategory::ClientCertFault => 601..=601,
        }
    }

    /// Check whether an id falls inside this category's range
    pub fn contains(self, id: FaultId) -> bool {
        self.range().contains(&id)
    }

    /// Token used in listings, filters and JSON
    pub fn token(self) -> &'static str {
        match self {
            FaultCategory::ClientSrpFault => "client-srp",
            FaultCategory::ClientCertFault => "client-cert",
            FaultCategory::ClientNoAuthFault => "client-noauth",
            FaultCategory::ServerFault => "server",
            FaultCategory::GenericFault => "generic",
        }
    }
}

impl std::fmt::Display for FaultCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl std::str::FromStr for FaultCategory {
    type Err = NegotiationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.token() == s)
            .ok_or_else(|| NegotiationError::InvalidArgument(format!("Unknown fault category: {s}")))
    }
}

/// Injectable fault
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u16)]
pub enum Fault {
    /// Client sends an unknown SRP username
    BadUsername = 101,
    /// Client derives its key from the wrong SRP password
    BadPassword = 102,
    /// Client sends an invalid SRP public value A
    BadA = 103,
    /// Server sends an invalid SRP public value B
    BadB = 201,
    /// Finished verify_data is corrupted
    BadFinished = 300,
    /// Record MAC is corrupted
    BadMac = 301,
    /// Record padding is corrupted
    BadPadding = 302,
    /// Encrypted premaster secret has bad PKCS#1 padding
    BadPremasterPadding = 501,
    /// Premaster secret is truncated
    ShortPremasterSecret = 502,
    /// CertificateVerify signature is corrupted
    BadVerifyMessage = 601,
}

impl Fault {
    /// Every defined fault in ascending id order
    pub fn all() -> &'static [Fault] {
        &[
            Fault::BadUsername,
            Fault::BadPassword,
            Fault::BadA,
            Fault::BadB,
            Fault::BadFinished,
            Fault::BadMac,
            Fault::BadPadding,
            Fault::BadPremasterPadding,
            Fault::ShortPremasterSecret,
            Fault::BadVerifyMessage,
        ]
    }

    /// Numeric id
    pub fn id(self) -> FaultId {
        self as FaultId
    }

    /// Resolve a numeric id
    pub fn from_id(id: FaultId) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.id() == id)
    }

    /// Category whose range contains this fault
    pub fn category(self) -> FaultCategory {
        match self {
            Fault::BadUsername | Fault::BadPassword | Fault::BadA => FaultCategory::ClientSrpFault,
            Fault::BadB => FaultCategory::ServerFault,
            Fault::BadFinished | Fault::BadMac | Fault::BadPadding => FaultCategory::GenericFault,
            Fault::BadPremasterPadding | Fault::ShortPremasterSecret => {
                FaultCategory::ClientNoAuthFault
            },
            Fault::BadVerifyMessage => FaultCategory::ClientCertFault,
        }
    }

    /// Human-readable label
    pub fn name(self) -> &'static str {
        match self {
            Fault::BadUsername => "bad username",
            Fault::BadPassword => "bad password",
            Fault::BadA => "bad A",
            Fault::BadB => "bad B",
            Fault::BadFinished => "bad finished message",
            Fault::BadMac => "bad MAC",
            Fault::BadPadding => "bad padding",
            Fault::BadPremasterPadding => "bad premaster padding",
            Fault::ShortPremasterSecret => "short premaster secret",
            Fault::BadVerifyMessage => "bad verify message",
        }
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<FaultId> for Fault {
    type Error = NegotiationError;

    fn try_from(id: FaultId) -> Result<Self> {
        Fault::from_id(id).ok_or(NegotiationError::FaultNotFound(id))
    }
}

/// Category of a fault id
pub fn category_of(id: FaultId) -> Result<FaultCategory> {
    Fault::try_from(id).map(Fault::category)
}

/// Ids of a category, ascending
pub fn ids_in(category: FaultCategory) -> Vec<FaultId> {
    category.range().collect()
}

/// Label of a fault id
pub fn name_of(id: FaultId) -> Result<&'static str> {
    Fault::try_from(id).map(Fault::name)
}
