//! Application layer composing the domain pieces into entry points.
//!
//! `transform` is the synchronous core used by every caller. `PaymentCodeGenerator`
//! wires it to a `StaticCodeProvider` for request/response boundaries.

pub mod generator;
pub mod transform;
