use crate::interview::session::InterviewSession;
use crate::render::{error_banner, escape_html, layout};

/// Text fields of the start form, echoed back when validation fails.
/// The resume upload cannot be re-filled by the server.
#[derive(Debug, Clone, Default)]
pub struct StartForm {
    pub job_description: String,
    pub company_info: String,
}

pub fn render_start_page(form: &StartForm, error: Option<&str>) -> String {
    let body = format!(
        r#"{error}
<form method="post" action="/interviews" enctype="multipart/form-data" data-busy>
  <p class="medium-font">Job Description</p>
  <label for="job_description">Enter the job description:</label>
  <textarea id="job_description" name="job_description" rows="10">{job_description}</textarea>

  <p class="medium-font">Company Website Info</p>
  <label for="company_info">Enter the company's website info:</label>
  <textarea id="company_info" name="company_info" rows="10">{company_info}</textarea>

  <p class="medium-font">Your Resume</p>
  <label for="resume">Upload your resume (PDF)</label>
  <input id="resume" name="resume" type="file" accept="application/pdf,.pdf">

  <p>
    <button type="submit">Start Interview</button>
    <span class="busy">Preparing your interview...</span>
  </p>
</form>"#,
        error = error_banner(error),
        job_description = escape_html(&form.job_description),
        company_info = escape_html(&form.company_info),
    );

    layout("AI Job Interview Coach", &body)
}

pub fn render_interview_page(session: &InterviewSession, error: Option<&str>) -> String {
    let transcript: String = session
        .state
        .transcript()
        .iter()
        .map(|entry| {
            format!(
                "<p class=\"small-font\"><b>{}:</b> {}</p>\n",
                entry.speaker().label(),
                escape_html(entry.message())
            )
        })
        .collect();

    let body = format!(
        r#"<details>
  <summary>Role details</summary>
  <p class="small-font"><b>Job description:</b> {job_description}</p>
  <p class="small-font"><b>Company:</b> {company_info}</p>
</details>
<p class="medium-font">Interview Simulation</p>
<div id="transcript">
{transcript}</div>
{error}
<form method="post" action="/interviews/{id}/responses" data-busy>
  <label for="response">Your response:</label>
  <textarea id="response" name="response" rows="8"></textarea>
  <p>
    <button type="submit">Submit Response</button>
    <span class="busy">Analyzing your response...</span>
  </p>
</form>
<form class="inline" method="post" action="/interviews/{id}/end">
  <button type="submit">End interview</button>
</form>"#,
        id = session.id,
        error = error_banner(error),
        job_description = escape_html(&session.inputs.job_description),
        company_info = escape_html(&session.inputs.company_info),
    );

    layout("Interview Simulation", &body)
}
