// Interview prompt templates.
// Placeholders are filled with `llm_client::prompts::fill_template`; inputs are
// forwarded verbatim.

use crate::llm_client::prompts::fill_template;

/// One-time setup prompt: persona, role/company summary, resume, first question.
/// Replace: {job_description}, {company_info}, {resume_text}
pub const SETUP_PROMPT_TEMPLATE: &str = r#"Act like a professional job interview coach.

You will help me prepare for my next job interview by simulating a complex, realistic & tricky job interview.

First step: you need to know, master & be an expert of the position itself and the company I apply to.

Here's the job description:

{job_description}

Here's the company's website about us section:

{company_info}

Step 2: Write a quick summary of your learnings, and who you have to become in order to be my job interviewer.

Step 3: Read my resume / CV:

{resume_text}

Step 4: Start the job interview, one question at a time, like a real simulation."#;

/// Per-turn critique prompt. Only the latest answer is forwarded.
/// Replace: {user_response}
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"Based on the previous conversation and the following user response, provide feedback and the next question:

User response: {user_response}

Provide 5 paragraphs, divided by line breaks:

Paragraph 1 = What was good in my answer?
Paragraph 2 = What was bad in my answer?
Paragraph 3 = What could be added to my answer?
Paragraph 4 = Pretend you are me & write a detailed perfect answer using the CARL method.
Paragraph 5 = Ask me if we can move on to the next interview question."#;

pub fn build_setup_prompt(job_description: &str, company_info: &str, resume_text: &str) -> String {
    fill_template(
        SETUP_PROMPT_TEMPLATE,
        &[
            ("job_description", job_description),
            ("company_info", company_info),
            ("resume_text", resume_text),
        ],
    )
}

pub fn build_feedback_prompt(latest_candidate_message: &str) -> String {
    fill_template(
        FEEDBACK_PROMPT_TEMPLATE,
        &[("user_response", latest_candidate_message)],
    )
}
