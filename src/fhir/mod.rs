//! FHIR R4 wire model
//!
//! Serde representations of the JSON resource graphs exchanged with the
//! Mobile Access Gateway.

pub mod bundle;
pub mod datatypes;
pub mod organization;
pub mod resources;

pub use bundle::{Bundle, BundleEntry, BundleRequest, BundleType, HttpVerb};
pub use datatypes::{CodeableConcept, Coding, Identifier, Reference};
pub use resources::{
    Binary, DocumentReference, ListResource, MessageHeader, Organization, Parameters, Patient,
    Resource,
};
