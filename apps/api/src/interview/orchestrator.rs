//! Interview Orchestrator — drives one session through its two transitions.
//!
//! Idle --start(inputs)--> Active --submit_response(text)--> Active ...
//!
//! Each transition awaits exactly one model call. On a backend failure the
//! state keeps whatever was appended before the call; nothing is rolled back.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info};

use crate::interview::conversation::{
    ConversationState, InterviewInputs, Speaker, ValidationError,
};
use crate::interview::prompts::{build_feedback_prompt, build_setup_prompt};
use crate::llm_client::{LlmError, TextGenerator};

#[derive(Debug, Error)]
pub enum InterviewError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("The interview has not been started")]
    NotStarted,

    #[error("The interviewer could not respond: {0}")]
    Backend(#[from] LlmError),
}

#[derive(Clone)]
pub struct InterviewOrchestrator {
    generator: Arc<dyn TextGenerator>,
    reject_empty_responses: bool,
}

impl InterviewOrchestrator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            reject_empty_responses: false,
        }
    }

    /// Refuse blank candidate responses instead of forwarding them.
    pub fn reject_empty_responses(mut self, reject: bool) -> Self {
        self.reject_empty_responses = reject;
        self
    }

    /// Starts (or restarts) the interview and asks the first question.
    pub async fn start(
        &self,
        state: &mut ConversationState,
        inputs: &InterviewInputs,
    ) -> Result<(), InterviewError> {
        state.start(inputs)?;

        let prompt = build_setup_prompt(
            &inputs.job_description,
            &inputs.company_info,
            &inputs.resume_text,
        );
        let reply = self.generate(&prompt).await?;

        state.append_entry(Speaker::Interviewer, reply);
        info!("Interview started");
        Ok(())
    }

    /// Records the candidate's answer, then appends the interviewer's feedback
    /// and next question and advances the turn.
    pub async fn submit_response(
        &self,
        state: &mut ConversationState,
        user_text: String,
    ) -> Result<(), InterviewError> {
        if !state.is_started() {
            return Err(InterviewError::NotStarted);
        }
        if self.reject_empty_responses && user_text.trim().is_empty() {
            return Err(ValidationError::EmptyResponse.into());
        }

        let prompt = build_feedback_prompt(&user_text);
        state.append_entry(Speaker::Candidate, user_text);

        let reply = self.generate(&prompt).await?;

        state.append_entry(Speaker::Interviewer, reply);
        state.advance_turn();
        info!("Turn {} completed", state.turn_count());
        Ok(())
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        debug!("Sending prompt ({} bytes) to model", prompt.len());
        match self.generator.generate_text(prompt).await {
            Ok(reply) => {
                debug!("Model replied ({} bytes)", reply.len());
                Ok(reply)
            }
            Err(e) => {
                error!("Model call failed: {e}");
                Err(e)
            }
        }
    }
}
