//! HTML views rendered with maud.
//!
//! Views are pure functions of controller state; they never talk to the
//! backend and never decide navigation.

use chrono::{DateTime, FixedOffset, Utc};
use maud::{DOCTYPE, Markup, html};

use crate::domain::controllers::{AuthState, EntryCreateState, EntryEditState, EntryListState};
use crate::domain::{AuthMode, JournalEntry, Screen};

const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#f5f3ff;color:#1f2937}\
main{max-width:42rem;margin:0 auto;padding:1.5rem}\
header{display:flex;justify-content:space-between;align-items:center;padding:1.5rem}\
.card{background:#fff;border-radius:1rem;box-shadow:0 4px 12px rgba(0,0,0,.08);padding:1.5rem}\
.error{color:#dc2626}.notice{color:#047857}.alert{background:#fee2e2;padding:.75rem;border-radius:.5rem}\
textarea{width:100%;min-height:16rem;box-sizing:border-box}\
ul.entries{list-style:none;padding:0}ul.entries li{border:1px solid #e5e7eb;border-radius:.5rem;padding:1rem;margin-bottom:1rem}\
.content{white-space:pre-line}.muted{color:#6b7280;font-size:.875rem}\
form.inline{display:inline}";

/// Shared page shell.
pub fn base(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (STYLE) }
            }
            body { (body) }
        }
    }
}

fn alert(message: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = message {
            p.alert role="alert" { (message) }
        }
    }
}

/// Landing call-to-action.
pub fn landing(get_started_href: &str) -> Markup {
    base(
        "AI Journal",
        html! {
            main {
                h1 { "Welcome to AI Journal ✨" }
                p {
                    "Write, track, and reflect on your daily thoughts. Let AI help you analyze "
                    "your mood and summarize your entries."
                }
                a.button href=(get_started_href) { "Get Started" }
            }
        },
    )
}

/// Sign-in / sign-up form. `email` is echoed back after a failed submit;
/// `flash` is an alert carried over from the screen that redirected here.
pub fn auth(state: &AuthState, email: &str, flash: Option<&str>) -> Markup {
    let (heading, other_prompt, other_label) = match state.mode {
        AuthMode::SignUp => ("Sign Up", "Already have an account?", "Log In"),
        AuthMode::SignIn => ("Log In", "Don't have an account?", "Sign Up"),
    };
    base(
        heading,
        html! {
            main.card {
                h1 { (heading) }
                (alert(flash))
                @if let Some(error) = &state.error {
                    p.error { (error) }
                }
                @if let Some(notice) = &state.notice {
                    p.notice role="status" { (notice) }
                }
                form method="post" action="/auth" {
                    input type="hidden" name="mode" value=(state.mode.as_str());
                    input type="email" name="email" placeholder="Email" value=(email) required;
                    input type="password" name="password" placeholder="Password" required;
                    button type="submit" disabled[state.busy] {
                        @if state.busy { "Processing..." } @else { (heading) }
                    }
                }
                form.inline method="post" action="/auth/toggle" {
                    input type="hidden" name="mode" value=(state.mode.as_str());
                    (other_prompt) " "
                    button type="submit" { (other_label) }
                }
            }
        },
    )
}

/// Render `created_at` in the configured display offset.
pub fn format_timestamp(at: &DateTime<Utc>, offset: &FixedOffset) -> String {
    at.with_timezone(offset).format(TIMESTAMP_FORMAT).to_string()
}

/// Entry list with per-row edit and delete actions.
pub fn dashboard(
    state: &EntryListState,
    offset: &FixedOffset,
    new_entry_href: &str,
    edit_href: impl Fn(&JournalEntry) -> String,
) -> Markup {
    base(
        "My Journal",
        html! {
            header {
                h1 { "📓 My Journal" }
                div {
                    a.button href=(new_entry_href) { "➕ New Entry" }
                    form.inline method="post" action="/dashboard/logout" {
                        button type="submit" { "Logout" }
                    }
                }
            }
            main.card {
                @if state.loading {
                    p.muted { "Loading your entries..." }
                } @else if state.entries.is_empty() {
                    p.muted { "No entries yet. Start writing! ✨" }
                } @else {
                    ul.entries {
                        @for entry in &state.entries {
                            li data-entry-id=(entry.id.to_string()) {
                                p.content { (entry.content) }
                                span.muted { (format_timestamp(&entry.created_at, offset)) }
                                a href=(edit_href(entry)) { "Edit" }
                                form.inline method="post" action="/dashboard/delete" {
                                    input type="hidden" name="id" value=(entry.id.to_string());
                                    button type="submit" { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

/// New-entry editor.
pub fn new_entry(state: &EntryCreateState, back_href: &str) -> Markup {
    base(
        "New Entry",
        html! {
            header {
                h1 { "📝 New Entry" }
                a.button href=(back_href) { "Back" }
            }
            main.card {
                h2 { "Write your thoughts ✨" }
                (alert(state.alert.as_deref()))
                form method="post" action="/new-entry" {
                    textarea name="content" placeholder="Start writing here..." { (state.content) }
                    button type="submit" disabled[state.busy] {
                        @if state.busy { "Saving..." } @else { "Save Entry" }
                    }
                }
            }
        },
    )
}

/// Edit screen; shows a loading message until the entry has been fetched.
pub fn edit_entry(state: &EntryEditState, cancel_href: &str) -> Markup {
    base(
        "Edit Journal Entry",
        html! {
            @if state.loading {
                p.muted { "Loading entry..." }
            } @else {
                main {
                    h1 { "Edit Journal Entry ✏️" }
                    (alert(state.alert.as_deref()))
                    form method="post" action=(edit_action(state)) {
                        textarea name="content" { (state.content) }
                        button type="submit" disabled[state.busy] {
                            @if state.busy { "Saving..." } @else { "Save" }
                        }
                        a.button href=(cancel_href) { "Cancel" }
                    }
                }
            }
        },
    )
}

fn edit_action(state: &EntryEditState) -> String {
    match &state.id {
        Some(id) => Screen::EntryEdit(id.clone()).path(),
        None => "/edit-entry".to_owned(),
    }
}

/// Error page for failures that escape a controller.
pub fn error_page(status: u16, message: &str, trace_id: Option<&str>) -> Markup {
    base(
        "Something went wrong",
        html! {
            main.card {
                h1 { (status) }
                p { (message) }
                @if let Some(id) = trace_id {
                    p.muted { "Trace ID: " code { (id) } }
                }
                a href="/" { "Go back home" }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    use crate::domain::{EntryId, UserId};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 7, hour, 5, 9)
            .single()
            .expect("valid timestamp")
    }

    #[rstest]
    #[case(0, 14, "3/7/2025, 2:05:09 PM")]
    #[case(0, 0, "3/7/2025, 12:05:09 AM")]
    #[case(-300, 2, "3/6/2025, 9:05:09 PM")]
    #[case(60, 23, "3/8/2025, 12:05:09 AM")]
    fn timestamps_render_in_display_offset(
        #[case] offset_minutes: i32,
        #[case] hour: u32,
        #[case] expected: &str,
    ) {
        let offset = FixedOffset::east_opt(offset_minutes * 60).expect("offset in range");
        assert_eq!(format_timestamp(&at(hour), &offset), expected);
    }

    #[test]
    fn content_is_escaped() {
        let state = EntryListState {
            loading: false,
            entries: vec![JournalEntry {
                id: EntryId::random(),
                user_id: UserId::random(),
                content: "<script>alert(1)</script>".to_owned(),
                created_at: at(9),
            }],
        };
        let offset = FixedOffset::east_opt(0).expect("utc");
        let html = dashboard(&state, &offset, "/new-entry", |_| "/e".to_owned()).into_string();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[rstest]
    #[case(true, "Loading your entries...")]
    #[case(false, "No entries yet. Start writing!")]
    fn list_placeholders(#[case] loading: bool, #[case] expected: &str) {
        let state = EntryListState {
            loading,
            entries: Vec::new(),
        };
        let offset = FixedOffset::east_opt(0).expect("utc");
        let html = dashboard(&state, &offset, "/new-entry", |_| String::new()).into_string();
        assert!(html.contains(expected));
    }

    #[test]
    fn auth_form_reflects_mode() {
        let state = AuthState {
            mode: AuthMode::SignUp,
            ..AuthState::default()
        };
        let html = auth(&state, "", None).into_string();
        assert!(html.contains("Already have an account?"));
        assert!(html.contains(r#"name="mode" value="sign-up""#));
    }
}
