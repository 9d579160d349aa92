//! Validation chains
//!
//! Every create/update/read/delete request runs an ordered chain of validators
//! before its handler touches the store. Chains are composed per route from the
//! generic validators in [`validators`] and resource-specific functions.

pub mod chain;
pub mod extractor;
pub mod validators;

pub use chain::{Chain, Handler, Pipeline, RequestContext, Validator};
pub use extractor::Payload;
pub use validators::{BodyIdMatchesRoute, Exists, RequireField, RouteIdMatchesRecord};
