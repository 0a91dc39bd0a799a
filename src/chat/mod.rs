//! Scripted chat widget logic.
//!
//! - `responder` - ordered keyword rules mapping a message to a canned reply
//! - `session` - transcript, input buffer and typing indicator
mod responder;
mod session;

pub use responder::{FALLBACK_REPLY, GREETING, REPLY_RULES, ReplyRule, matching_rule, respond};
pub use session::{ChatSession, PendingReply, deliver_after};
