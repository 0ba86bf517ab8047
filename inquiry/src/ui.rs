//! Plain text rendering of the contact form.

use inquiry_core_form_contracts::FormSnapshot;
use inquiry_models::{form::FieldId, status::SubmissionStatus};

pub const SUBMIT_LABEL: &str = "[ Submit ]";
pub const BUSY_INDICATOR: &str = "[ Sending... ]";

const LABEL_WIDTH: usize = 9;

pub fn render(title: &str, snapshot: &FormSnapshot) -> String {
    let mut out = render_header(title, &snapshot.status);
    out.push('\n');
    out.push_str(&render_form(snapshot));
    out
}

/// The title followed by the current success or error message. Empty messages
/// render nothing.
pub fn render_header(title: &str, status: &SubmissionStatus) -> String {
    let mut out = format!("== {title} ==\n");
    for message in [status.success_message(), status.error_message()] {
        if !message.is_empty() {
            out.push_str(message);
            out.push('\n');
        }
    }
    out
}

pub fn render_form(snapshot: &FormSnapshot) -> String {
    let mut out = String::new();
    let width = LABEL_WIDTH;
    let indent = " ".repeat(width);

    for field in FieldId::ALL {
        let heading = format!("{}:", label(field));
        let value = snapshot
            .values
            .get(field)
            .replace('\n', &format!("\n{indent}"));
        out.push_str(&format!("{heading:<width$}{value}\n"));

        if field == FieldId::Subject {
            continue;
        }
        if let Some(error) = snapshot.field_error(field) {
            out.push_str(&format!("{indent}! {error}\n"));
        }
    }

    out.push_str(if snapshot.is_busy() {
        BUSY_INDICATOR
    } else {
        SUBMIT_LABEL
    });
    out.push('\n');
    out
}

fn label(field: FieldId) -> &'static str {
    match field {
        FieldId::Name => "Name",
        FieldId::Email => "Email",
        FieldId::Subject => "Subject",
        FieldId::Message => "Message",
    }
}
