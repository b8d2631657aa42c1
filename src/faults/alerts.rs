//! Fault → acceptable alert matrix.
//!
//! Only faults a client-side harness can observe have an entry. `BadB` is a
//! server-side corruption with no distinguishable client-visible response
//! and is deliberately absent. Verification fails closed: an unmapped fault
//! never accepts any alert.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::registry::{Fault, FaultId};
use crate::wire::{AlertCode, AlertDescription};

/// Acceptable alerts per observable fault, in preference order
static FAULT_ALERT_TABLE: &[(Fault, &[AlertDescription])] = &[
    (
        Fault::BadUsername,
        &[
            AlertDescription::UnknownPskIdentity,
            AlertDescription::BadRecordMac,
        ],
    ),
    (Fault::BadPassword, &[AlertDescription::BadRecordMac]),
    (Fault::BadA, &[AlertDescription::IllegalParameter]),
    (Fault::BadPremasterPadding, &[AlertDescription::BadRecordMac]),
    (Fault::ShortPremasterSecret, &[AlertDescription::BadRecordMac]),
    (Fault::BadVerifyMessage, &[AlertDescription::DecryptError]),
    (Fault::BadFinished, &[AlertDescription::DecryptError]),
    (Fault::BadMac, &[AlertDescription::BadRecordMac]),
    (Fault::BadPadding, &[AlertDescription::BadRecordMac]),
];

lazy_static! {
    static ref FAULT_ALERTS: HashMap<FaultId, &'static [AlertDescription]> = FAULT_ALERT_TABLE
        .iter()
        .map(|(fault, alerts)| (fault.id(), *alerts))
        .collect();
}

/// Alerts a conformant peer may send for `fault`; empty when unmapped
pub fn allowed_alerts(fault: FaultId) -> &'static [AlertDescription] {
    FAULT_ALERTS.get(&fault).copied().unwrap_or(&[])
}

/// Whether the fault has a registered observable response
pub fn is_observable(fault: FaultId) -> bool {
    FAULT_ALERTS.contains_key(&fault)
}

/// Observable faults, ascending by id
pub fn observable_faults() -> Vec<Fault> {
    Fault::all()
        .iter()
        .copied()
        .filter(|f| is_observable(f.id()))
        .collect()
}

/// Conformance check: `observed` is one of the allowed alerts for `fault`.
///
/// Returns false for every unmapped fault. A false result for an unmapped
/// fault means the harness asked about a fault it cannot observe, not that
/// the peer misbehaved.
pub fn verify(observed: AlertCode, fault: FaultId) -> bool {
    allowed_alerts(fault)
        .iter()
        .any(|alert| alert.code() == observed)
}
