//! Conversation state for one interview session.
//!
//! Transcript order is chronological and starts with the interviewer.
//! Entries are never edited or removed once appended.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Interviewer,
    Candidate,
}

impl Speaker {
    /// Label shown next to the message in the transcript.
    pub fn label(self) -> &'static str {
        match self {
            Speaker::Interviewer => "Interviewer",
            Speaker::Candidate => "You",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    speaker: Speaker,
    message: String,
    created_at: DateTime<Utc>,
}

impl TranscriptEntry {
    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The three fields a user must provide before an interview can start.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterviewInputs {
    pub job_description: String,
    pub company_info: String,
    pub resume_text: String,
}

impl InterviewInputs {
    /// Returns every required field that is empty (or whitespace only).
    pub fn missing_fields(&self) -> Vec<InputField> {
        [
            (InputField::JobDescription, &self.job_description),
            (InputField::CompanyInfo, &self.company_info),
            (InputField::Resume, &self.resume_text),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    JobDescription,
    CompanyInfo,
    Resume,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::JobDescription => "job description",
            InputField::CompanyInfo => "company info",
            InputField::Resume => "resume",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields before starting: missing {}", join_fields(.0))]
    MissingInputs(Vec<InputField>),

    #[error("Your response is empty")]
    EmptyResponse,

    #[error("{0}")]
    InvalidUpload(String),
}

fn join_fields(fields: &[InputField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversationState {
    started: bool,
    turn_count: u32,
    transcript: Vec<TranscriptEntry>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the state for a fresh interview. Leaves the state untouched if
    /// any input is empty.
    pub fn start(&mut self, inputs: &InterviewInputs) -> Result<(), ValidationError> {
        let missing = inputs.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingInputs(missing));
        }

        self.started = true;
        self.turn_count = 0;
        self.transcript.clear();
        Ok(())
    }

    pub fn append_entry(&mut self, speaker: Speaker, message: impl Into<String>) {
        self.transcript.push(TranscriptEntry {
            speaker,
            message: message.into(),
            created_at: Utc::now(),
        });
    }

    pub fn advance_turn(&mut self) {
        self.turn_count += 1;
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn last_entry(&self) -> Option<&TranscriptEntry> {
        self.transcript.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(jd: &str, co: &str, cv: &str) -> InterviewInputs {
        InterviewInputs {
            job_description: jd.to_string(),
            company_info: co.to_string(),
            resume_text: cv.to_string(),
        }
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = ConversationState::new();
        assert!(state.last_entry().is_none());
        assert!(!state.is_started());
        assert_eq!(state.turn_count(), 0);
        assert!(state.transcript().is_empty());
    }

    #[test]
    fn test_start_with_valid_inputs() {
        let mut state = ConversationState::new();
        state.start(&inputs("jd", "co", "cv")).unwrap();
        assert!(state.is_started());
        assert_eq!(state.turn_count(), 0);
        assert!(state.transcript().is_empty());
    }

    #[test]
    fn test_start_rejects_each_empty_field_without_mutation() {
        for bad in [
            inputs("", "co", "cv"),
            inputs("jd", "", "cv"),
            inputs("jd", "co", ""),
            inputs("  ", "\n", "\t"),
        ] {
            let mut state = ConversationState::new();
            assert!(matches!(
                state.start(&bad),
                Err(ValidationError::MissingInputs(_))
            ));
            assert!(!state.is_started());
        }
    }

    #[test]
    fn test_start_failure_preserves_existing_session() {
        let mut state = ConversationState::new();
        state.start(&inputs("jd", "co", "cv")).unwrap();
        state.append_entry(Speaker::Interviewer, "Q1");
        state.advance_turn();

        assert!(state.start(&inputs("jd", "", "cv")).is_err());
        assert!(state.is_started());
        assert_eq!(state.turn_count(), 1);
        assert_eq!(state.transcript().len(), 1);
    }

    #[test]
    fn test_restart_clears_transcript() {
        let mut state = ConversationState::new();
        state.start(&inputs("jd", "co", "cv")).unwrap();
        state.append_entry(Speaker::Interviewer, "Q1");
        state.append_entry(Speaker::Candidate, "A1");
        state.advance_turn();

        state.start(&inputs("jd2", "co2", "cv2")).unwrap();
        assert_eq!(state.turn_count(), 0);
        assert!(state.transcript().is_empty());
    }

    #[test]
    fn test_missing_inputs_message_names_fields() {
        let err = ValidationError::MissingInputs(vec![InputField::CompanyInfo, InputField::Resume]);
        assert_eq!(
            err.to_string(),
            "Please fill in all fields before starting: missing company info, resume"
        );
    }

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let mut state = ConversationState::new();
        state.append_entry(Speaker::Interviewer, "same");
        state.append_entry(Speaker::Interviewer, "same");
        state.append_entry(Speaker::Candidate, "reply");
        let speakers: Vec<_> = state.transcript().iter().map(|e| e.speaker()).collect();
        assert_eq!(
            speakers,
            vec![Speaker::Interviewer, Speaker::Interviewer, Speaker::Candidate]
        );
        assert_eq!(state.last_entry().unwrap().message(), "reply");
    }

    #[test]
    fn test_last_entry_tracks_latest_append() {
        let mut state = ConversationState::new();
        state.start(&inputs("jd", "co", "cv")).unwrap();
        assert!(state.last_entry().is_none());

        state.append_entry(Speaker::Interviewer, "Q1");
        assert_eq!(state.last_entry().unwrap().speaker(), Speaker::Interviewer);

        state.append_entry(Speaker::Candidate, "A1");
        let last = state.last_entry().unwrap();
        assert_eq!(last.speaker(), Speaker::Candidate);
        assert_eq!(last.message(), "A1");
    }

    #[test]
    fn test_speaker_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Speaker::Interviewer).unwrap(),
            "\"interviewer\""
        );
        assert_eq!(Speaker::Candidate.label(), "You");
    }
}
