//! Conformance plans and verdicts.
//!
//! A plan is the list of faults a harness injects for one client handshake
//! mode: the faults specific to that mode's authentication step followed by
//! the generic faults every handshake is exposed to.

use serde::{Deserialize, Serialize};

use super::alerts::{allowed_alerts, is_observable};
use super::registry::{ids_in, Fault, FaultCategory, FaultId};
use crate::error::NegotiationError;
use crate::wire::{AlertCode, AlertDescription};

/// Client handshake variant under test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandshakeMode {
    /// SRP without a server certificate
    #[serde(rename = "srp")]
    Srp,
    /// SRP with a server certificate
    #[serde(rename = "srp-cert")]
    SrpWithCertificate,
    /// Server certificate only
    #[serde(rename = "cert")]
    Certificate,
    /// Server and client certificates
    #[serde(rename = "mutual-cert")]
    MutualCertificate,
}

impl HandshakeMode {
    /// All modes
    pub fn all() -> &'static [HandshakeMode] {
        &[
            HandshakeMode::Srp,
            HandshakeMode::SrpWithCertificate,
            HandshakeMode::Certificate,
            HandshakeMode::MutualCertificate,
        ]
    }

    /// Fault categories exercised for this mode, in injection order
    pub fn fault_categories(self) -> &'static [FaultCategory] {
        match self {
            HandshakeMode::Srp | HandshakeMode::SrpWithCertificate => &[
                FaultCategory::ClientSrpFault,
                FaultCategory::GenericFault,
            ],
            HandshakeMode::Certificate => &[
                FaultCategory::ClientNoAuthFault,
                FaultCategory::GenericFault,
            ],
            HandshakeMode::MutualCertificate => &[
                FaultCategory::ClientCertFault,
                FaultCategory::GenericFault,
            ],
        }
    }

    /// Fault ids to inject, categories in order, ids ascending within each
    pub fn fault_plan(self) -> Vec<FaultId> {
        self.fault_categories()
            .iter()
            .flat_map(|c| ids_in(*c))
            .collect()
    }

    /// Canonical token
    pub fn token(self) -> &'static str {
        match self {
            HandshakeMode::Srp => "srp",
            HandshakeMode::SrpWithCertificate => "srp-cert",
            HandshakeMode::Certificate => "cert",
            HandshakeMode::MutualCertificate => "mutual-cert",
        }
    }
}

impl std::fmt::Display for HandshakeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl std::str::FromStr for HandshakeMode {
    type Err = NegotiationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "srp" => Ok(Self::Srp),
            "srp-cert" => Ok(Self::SrpWithCertificate),
            "cert" => Ok(Self::Certificate),
            "mutual-cert" => Ok(Self::MutualCertificate),
            _ => Err(NegotiationError::InvalidArgument(format!(
                "Unknown handshake mode: {s}"
            ))),
        }
    }
}

/// Outcome of one injected fault
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum FaultVerdict {
    /// Peer sent an allowed alert
    Conformant,
    /// Peer sent an alert outside the allowed set
    Nonconformant {
        /// Allowed alerts
        expected: Vec<AlertDescription>,
        /// Alert code actually received
        observed: AlertCode,
    },
    /// Peer completed the handshake despite the fault
    NoAlert,
    /// Fault has no registered response; the harness should not have asked
    Unobservable,
}

impl FaultVerdict {
    /// Only `Conformant` passes
    pub fn is_pass(&self) -> bool {
        matches!(self, FaultVerdict::Conformant)
    }
}

/// Judge the peer's response to an injected fault.
///
/// `observed` is `None` when no alert arrived.
pub fn judge(fault: FaultId, observed: Option<AlertCode>) -> FaultVerdict {
    if !is_observable(fault) {
        return FaultVerdict::Unobservable;
    }

    let expected = allowed_alerts(fault);
    match observed {
        None => FaultVerdict::NoAlert,
        Some(code) if expected.iter().any(|a| a.code() == code) => FaultVerdict::Conformant,
        Some(code) => FaultVerdict::Nonconformant {
            expected: expected.to_vec(),
            observed: code,
        },
    }
}

/// One recorded result
#[derive(Debug, Clone, Serialize)]
pub struct FaultResult {
    /// Injected fault id
    pub fault: FaultId,
    /// Handshake mode it was injected into
    pub mode: HandshakeMode,
    /// Verdict
    pub verdict: FaultVerdict,
}

/// Accumulates verdicts over a harness run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConformanceReport {
    results: Vec<FaultResult>,
}

impl ConformanceReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Judge and record one fault outcome, returning the verdict
    pub fn record(
        &mut self,
        mode: HandshakeMode,
        fault: FaultId,
        observed: Option<AlertCode>,
    ) -> FaultVerdict {
        let verdict = judge(fault, observed);
        let label = Fault::from_id(fault).map_or("unknown fault", Fault::name);

        if verdict.is_pass() {
            tracing::info!(%mode, fault, "Good fault {}", label);
        } else {
            tracing::warn!(%mode, fault, ?observed, ?verdict, "BAD FAULT {}", label);
        }

        self.results.push(FaultResult {
            fault,
            mode,
            verdict: verdict.clone(),
        });
        verdict
    }

    /// All recorded results in order
    pub fn results(&self) -> &[FaultResult] {
        &self.results
    }

    /// Results that did not pass
    pub fn failures(&self) -> Vec<&FaultResult> {
        self.results.iter().filter(|r| !r.verdict.is_pass()).collect()
    }

    /// True when every recorded verdict passed
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.verdict.is_pass())
    }

    /// Number of recorded results
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plans() {
        assert_eq!(
            HandshakeMode::Srp.fault_plan(),
            vec![101, 102, 103, 300, 301, 302]
        );
        assert_eq!(
            HandshakeMode::SrpWithCertificate.fault_plan(),
            HandshakeMode::Srp.fault_plan()
        );
        assert_eq!(
            HandshakeMode::Certificate.fault_plan(),
            vec![501, 502, 300, 301, 302]
        );
        assert_eq!(
            HandshakeMode::MutualCertificate.fault_plan(),
            vec![601, 300, 301, 302]
        );
    }

    #[test]
    fn test_plans_only_contain_observable_faults() {
        for mode in HandshakeMode::all() {
            for id in mode.fault_plan() {
                assert!(is_observable(id), "{mode} plans unobservable fault {id}");
            }
        }
    }

    #[test]
    fn test_judge() {
        let bad_a = Fault::BadA.id();
        assert_eq!(judge(bad_a, Some(47)), FaultVerdict::Conformant);
        assert_eq!(judge(bad_a, None), FaultVerdict::NoAlert);
        assert_eq!(
            judge(bad_a, Some(20)),
            FaultVerdict::Nonconformant {
                expected: vec![AlertDescription::IllegalParameter],
                observed: 20,
            }
        );
        assert_eq!(judge(Fault::BadB.id(), Some(47)), FaultVerdict::Unobservable);
    }

    #[test]
    fn test_report() {
        let mut report = ConformanceReport::new();
        assert!(report.passed());
        assert!(report.is_empty());

        report.record(HandshakeMode::Srp, Fault::BadPassword.id(), Some(20));
        assert!(report.passed());

        report.record(HandshakeMode::Srp, Fault::BadFinished.id(), Some(20));
        assert!(!report.passed());
        assert_eq!(report.len(), 2);
        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.failures()[0].fault, 300);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("mutual-cert".parse::<HandshakeMode>().unwrap(), HandshakeMode::MutualCertificate);
        for alias in ["psk", "x509", "certificate", "mutual-x509", "SRP"] {
            assert!(alias.parse::<HandshakeMode>().is_err(), "{alias} accepted");
        }
        for mode in HandshakeMode::all() {
            assert_eq!(mode.token().parse::<HandshakeMode>().unwrap(), *mode);
            let json = serde_json::to_string(mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.token()));
            assert_eq!(serde_json::from_str::<HandshakeMode>(&json).unwrap(), *mode);
        }
    }
}
