// Interview practice engine.
// Implements: prompt templates, per-session conversation state, the
// start/submit orchestrator, the in-memory session store and HTTP handlers.
// All model calls go through llm_client::TextGenerator.

pub mod conversation;
pub mod handlers;
pub mod orchestrator;
pub mod prompts;
pub mod session;
