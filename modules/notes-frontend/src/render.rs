//! HTML rendering of the notes view.

use crate::view::{LoadState, NotesView};
use chrono::{DateTime, Utc};
use notes_types::Note;
use std::fmt::Write;

const TITLE: &str = "Notes";

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn layout(head_extra: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{TITLE}</title>\n{head_extra}</head>\n<body>\n<div class=\"app-container\">\n\
         <main>\n{body}</main>\n</div>\n</body>\n</html>\n"
    )
}

/// Shell shown before the initial fetch; the browser follows up with `/load`
pub fn loading_page() -> String {
    layout(
        "<meta http-equiv=\"refresh\" content=\"0; url=/load\">\n",
        "<p class=\"loading\">Loading notes...</p>\n",
    )
}

fn failed_body(msg: &str) -> String {
    format!(
        "<div class=\"error\">\n<p>{}</p>\n\
         <form method=\"post\" action=\"/retry\"><button type=\"submit\">Retry</button></form>\n\
         </div>\n",
        escape(msg)
    )
}

// Every textarea opens with a newline: parsers drop the first one after the
// tag, and content may start with its own.
fn note_card(out: &mut String, note: &Note) {
    let _ = write!(
        out,
        "<div class=\"note-card\" id=\"note-{id}\">\n<p>{content}</p>\n<div class=\"note-footer\">\n\
         <span>{created}</span>\n",
        id = note.id,
        content = escape(&note.content),
        created = format_timestamp(&note.created_at),
    );
    if let Some(updated) = &note.updated_at {
        let _ = writeln!(
            out,
            "<span class=\"edited\">edited {}</span>",
            format_timestamp(updated)
        );
    }
    let _ = write!(
        out,
        "<form method=\"post\" action=\"/notes/{id}/delete\"><button type=\"submit\">Delete</button></form>\n\
         </div>\n<details>\n<summary>Edit</summary>\n\
         <form method=\"post\" action=\"/notes/{id}/update\">\n\
         <textarea name=\"content\" rows=\"3\">\n{content}</textarea>\n\
         <button type=\"submit\">Save</button>\n</form>\n</details>\n</div>\n",
        id = note.id,
        content = escape(&note.content),
    );
}

fn ready_body(view: &NotesView) -> String {
    let mut out = String::new();

    if let Some(err) = view.error() {
        let _ = writeln!(out, "<div class=\"error\" role=\"alert\">{}</div>", escape(err));
    }

    let _ = write!(
        out,
        "<form class=\"note-input\" method=\"post\" action=\"/notes\">\n\
         <textarea name=\"content\" placeholder=\"Write your note here...\" rows=\"4\">\n{}</textarea>\n\
         <button type=\"submit\">Add Note</button>\n</form>\n",
        escape(view.draft())
    );

    out.push_str("<div class=\"notes-grid\">\n");
    for note in view.notes() {
        note_card(&mut out, note);
    }
    out.push_str("</div>\n");
    out
}

/// Full page for the current view state
pub fn page(view: &NotesView) -> String {
    match view.state() {
        LoadState::Loading => loading_page(),
        LoadState::Failed(msg) => layout("", &failed_body(msg)),
        LoadState::Ready => layout("", &ready_body(view)),
    }
}
