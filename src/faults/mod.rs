//! Synthetic handshake faults and the alerts they may provoke.
//!
//! A conformance harness picks a [`Fault`], has an external corruption layer
//! inject it into the handshake, observes the alert the peer sends back and
//! asks [`verify`] whether that alert is one a correct peer may send.
//!
//! ```
//! use tlsneg::faults::{verify, Fault};
//! use tlsneg::wire::AlertDescription;
//!
//! assert!(verify(AlertDescription::BadRecordMac.code(), Fault::BadPassword.id()));
//! assert!(!verify(AlertDescription::IllegalParameter.code(), Fault::BadPassword.id()));
//! ```

pub mod alerts;
pub mod plan;
pub mod registry;

pub use alerts::{allowed_alerts, is_observable, observable_faults, verify};
pub use plan::{judge, ConformanceReport, FaultVerdict, HandshakeMode};
pub use registry::{category_of, ids_in, name_of, Fault, FaultCategory, FaultId};
