//! End-to-end fault registry and conformance tests.
//!
//! Simulates a harness run: walk each handshake mode's fault plan, feed a
//! peer response into the report and check the verdicts.

use tlsneg::faults::{
    allowed_alerts, category_of, ids_in, is_observable, name_of, observable_faults, verify,
    ConformanceReport, Fault, FaultCategory, FaultVerdict, HandshakeMode,
};
use tlsneg::wire::AlertDescription;
use tlsneg::NegotiationError;

/// A peer that always answers with the first allowed alert
fn conformant_peer(fault: u16) -> Option<u8> {
    allowed_alerts(fault).first().map(|a| a.code())
}

#[test]
fn test_category_ranges() {
    assert_eq!(category_of(101).unwrap(), FaultCategory::ClientSrpFault);
    assert_eq!(category_of(103).unwrap(), FaultCategory::ClientSrpFault);
    assert_eq!(category_of(201).unwrap(), FaultCategory::ServerFault);
    assert_eq!(category_of(300).unwrap(), FaultCategory::GenericFault);
    assert_eq!(category_of(502).unwrap(), FaultCategory::ClientNoAuthFault);
    assert!(matches!(category_of(200), Err(NegotiationError::FaultNotFound(200))));
}

#[test]
fn test_every_fault_in_exactly_one_range() {
    for fault in Fault::all() {
        let owners = FaultCategory::all()
            .iter()
            .filter(|c| ids_in(**c).contains(&fault.id()))
            .count();
        assert_eq!(owners, 1, "{fault} owned by {owners} categories");
    }
}

#[test]
fn test_verify_examples() {
    let bad_password = Fault::BadPassword.id();
    assert!(verify(AlertDescription::BadRecordMac.code(), bad_password));
    assert!(!verify(AlertDescription::IllegalParameter.code(), bad_password));

    assert!(verify(AlertDescription::DecryptError.code(), Fault::BadVerifyMessage.id()));
    assert!(verify(AlertDescription::BadRecordMac.code(), Fault::ShortPremasterSecret.id()));
}

#[test]
fn test_unmapped_fault_never_verifies() {
    for code in 0..=u8::MAX {
        assert!(!verify(code, Fault::BadB.id()));
        assert!(!verify(code, 0));
    }
    assert!(name_of(Fault::BadB.id()).is_ok());
    assert!(!observable_faults().contains(&Fault::BadB));
}

#[test]
fn test_conformant_peer_passes_every_plan() {
    let mut report = ConformanceReport::new();
    for mode in HandshakeMode::all() {
        for fault in mode.fault_plan() {
            let verdict = report.record(*mode, fault, conformant_peer(fault));
            assert_eq!(verdict, FaultVerdict::Conformant, "{mode}: {fault}");
        }
    }
    assert!(report.passed());
    assert_eq!(report.len(), 6 + 6 + 5 + 4);
}

#[test]
fn test_report_catches_wrong_and_missing_alerts() {
    let mut report = ConformanceReport::new();

    // handshake_failure is never acceptable for a corrupted Finished
    report.record(
        HandshakeMode::Certificate,
        Fault::BadFinished.id(),
        Some(AlertDescription::HandshakeFailure.code()),
    );
    report.record(HandshakeMode::Certificate, Fault::BadMac.id(), None);
    report.record(HandshakeMode::Srp, Fault::BadB.id(), Some(20));

    assert!(!report.passed());
    let verdicts: Vec<&FaultVerdict> = report.failures().into_iter().map(|r| &r.verdict).collect();
    assert_eq!(
        verdicts,
        vec![
            &FaultVerdict::Nonconformant {
                expected: vec![AlertDescription::DecryptError],
                observed: 40,
            },
            &FaultVerdict::NoAlert,
            &FaultVerdict::Unobservable,
        ]
    );
}

#[test]
fn test_plans_are_observable() {
    for mode in HandshakeMode::all() {
        assert!(mode.fault_plan().iter().all(|id| is_observable(*id)));
    }
}

#[test]
fn test_report_serializes() {
    let mut report = ConformanceReport::new();
    report.record(HandshakeMode::Srp, Fault::BadA.id(), Some(20));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["results"][0]["verdict"]["verdict"], "nonconformant");
    assert_eq!(json["results"][0]["mode"], "srp");
    assert_eq!(json["results"][0]["verdict"]["expected"][0], "illegal_parameter");
}
