//! Boundary collaborator for PassIn core.
//!
//! Maps each workflow onto a transport-neutral status + JSON envelope so a
//! router (HTTP or otherwise) only has to forward the pair.

pub mod api;
pub mod config;
pub mod dto;

pub use api::{status_for, ApiResponse, PassInApi};
pub use config::ApiConfig;
pub use dto::{
    RequestEventJson, RequestRegisterEventJson, ResponseAllAttendeesJson, ResponseAttendeeJson,
    ResponseErrorJson, ResponseEventJson, ResponseRegisteredJson,
};
