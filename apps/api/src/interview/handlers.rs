//! Axum route handlers for the interview pages and the JSON snapshot.

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::conversation::{ConversationState, InterviewInputs};
use crate::interview::orchestrator::InterviewError;
use crate::interview::session::{InterviewSession, SessionHandle};
use crate::render::{render_interview_page, render_start_page, StartForm};
use crate::resume::{ensure_pdf, extract_resume_text};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SubmitResponseForm {
    #[serde(default)]
    pub response: String,
}

/// Raw start-form contents before PDF extraction.
#[derive(Default)]
struct StartSubmission {
    form: StartForm,
    resume: Option<UploadedResume>,
}

struct UploadedResume {
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_start_page() -> Html<String> {
    Html(render_start_page(&StartForm::default(), None))
}

/// POST /interviews
///
/// Multipart form: `job_description`, `company_info`, `resume` (PDF).
/// A session is only kept once the first question has been received.
pub async fn handle_start_interview(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let submission = match read_start_submission(multipart).await {
        Ok(submission) => submission,
        Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            let message = format!(
                "The upload is larger than the {} byte limit. Please use a smaller resume PDF.",
                state.config.max_upload_bytes
            );
            return Ok(start_page_error(
                StatusCode::PAYLOAD_TOO_LARGE,
                &StartForm::default(),
                &message,
            ));
        }
        Err(e) => {
            return Err(AppError::Validation(format!(
                "Malformed form submission: {e}"
            )));
        }
    };
    let form = submission.form;

    let resume_text = match submission.resume {
        Some(upload) => {
            let checked = ensure_pdf(upload.file_name.as_deref(), upload.content_type.as_deref());
            if let Err(e) = checked {
                return Ok(start_page_error(StatusCode::BAD_REQUEST, &form, &e.to_string()));
            }
            extract_resume_text(upload.bytes).await
        }
        None => String::new(),
    };

    let inputs = InterviewInputs {
        job_description: form.job_description.clone(),
        company_info: form.company_info.clone(),
        resume_text,
    };

    let mut conversation = ConversationState::new();
    match state.orchestrator.start(&mut conversation, &inputs).await {
        Ok(()) => {}
        Err(InterviewError::Validation(e)) => {
            return Ok(start_page_error(StatusCode::BAD_REQUEST, &form, &e.to_string()));
        }
        Err(e @ InterviewError::Backend(_)) => {
            return Ok(start_page_error(StatusCode::BAD_GATEWAY, &form, &e.to_string()));
        }
        Err(e) => return Err(e.into()),
    }

    let id = state
        .sessions
        .insert(InterviewSession::new(inputs, conversation))
        .await;
    info!(
        "Interview session {id} created ({} active)",
        state.sessions.active_count().await
    );

    Ok(Redirect::to(&format!("/interviews/{id}")).into_response())
}

/// GET /interviews/:id
pub async fn handle_show_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let handle = find_session(&state, id).await?;
    let session = handle.lock().await;
    Ok(Html(render_interview_page(&session, None)))
}

/// POST /interviews/:id/responses
///
/// Holds the session lock across the model call; a second submit on the same
/// session waits for the first to finish.
pub async fn handle_submit_response(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<SubmitResponseForm>,
) -> Result<Response, AppError> {
    let handle = find_session(&state, id).await?;
    let mut session = handle.lock().await;

    let result = state
        .orchestrator
        .submit_response(&mut session.state, form.response)
        .await;

    let err = match result {
        Ok(()) => return Ok(Redirect::to(&format!("/interviews/{id}")).into_response()),
        Err(e) => e,
    };
    let status = match err {
        InterviewError::Validation(_) => StatusCode::BAD_REQUEST,
        InterviewError::Backend(_) => StatusCode::BAD_GATEWAY,
        InterviewError::NotStarted => return Err(err.into()),
    };
    let message = err.to_string();

    Ok((status, Html(render_interview_page(&session, Some(&message)))).into_response())
}

/// POST /interviews/:id/end
///
/// Discards the session. Unknown ids are ignored.
pub async fn handle_end_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Redirect {
    if state.sessions.remove(id).await {
        info!("Interview session {id} ended");
    }
    Redirect::to("/")
}

/// GET /api/v1/interviews/:id
///
/// JSON snapshot of the session: started flag, turn count, transcript.
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewSession>, AppError> {
    let handle = find_session(&state, id).await?;
    let session = handle.lock().await;
    Ok(Json(session.clone()))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn find_session(state: &AppState, id: Uuid) -> Result<SessionHandle, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Interview {id} not found")))
}

fn start_page_error(status: StatusCode, form: &StartForm, message: &str) -> Response {
    (status, Html(render_start_page(form, Some(message)))).into_response()
}

/// Text fields read before an oversized upload fails are not recovered.
async fn read_start_submission(
    mut multipart: Multipart,
) -> Result<StartSubmission, MultipartError> {
    let mut submission = StartSubmission::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "job_description" => {
                submission.form.job_description = field.text().await?;
            }
            "company_info" => {
                submission.form.company_info = field.text().await?;
            }
            "resume" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                // Browsers send an empty part when no file was chosen.
                if !bytes.is_empty() {
                    submission.resume = Some(UploadedResume {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
            }
            _ => {}
        }
    }

    Ok(submission)
}
