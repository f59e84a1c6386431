//! Application layer - message classification
//!
//! Maps inbound message text to the canned reply the bot sends back.

pub mod responder;

pub use responder::ResponderService;
