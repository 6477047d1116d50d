//! Wire types exchanged with the upstream chat-completion API and the
//! structured result returned to callers.
//!
//! The upstream schema overlaps openai's chat format but is not assumed to
//! match it exactly: response types tolerate PascalCase property names, and
//! request types omit unset optional fields entirely rather than emitting
//! nulls.
pub mod content;
pub mod request;
pub mod response;
pub mod tags;
