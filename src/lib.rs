//! Reconciliation core for cloud network security groups.
//!
//! The surrounding controller owns the control loop, the kubernetes wiring
//! and the cloud SDK client; this crate only decides whether a security
//! group should be managed at all and drives a single create-or-update or
//! delete call per invocation.

pub mod domain;
