//! HTML mood journal page.
//!
//! `GET /` shows the form and the last mood; `POST /` takes the form,
//! records the mood and redirects back (post/redirect/get).

use std::fmt::Write;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::error::AppError;
use crate::journal::Recall;
use crate::mood::Catalog;
use crate::types::MoodForm;

use super::extractors::{FormExtractor, SessionCookie};
use super::{set_session_cookie, AppState};

/// GET /
pub async fn index(
    State(state): State<AppState>,
    SessionCookie(session): SessionCookie,
) -> Html<String> {
    let recall = state.journal.recall(session).await;
    Html(render(state.journal.catalog(), &recall))
}

/// POST /
pub async fn submit_form(
    State(state): State<AppState>,
    cookie: SessionCookie,
    FormExtractor(form): FormExtractor<MoodForm>,
) -> Result<Response, AppError> {
    state.check_length(&form.mood)?;

    let (session, is_new) = state.session_or_new(cookie);
    state.journal.submit(session, &form.mood, form.boost()).await;

    let mut response = Redirect::to("/").into_response();
    if is_new {
        set_session_cookie(&mut response, &state.config.session.cookie_name, &session);
    }
    Ok(response)
}

fn render(catalog: &Catalog, recall: &Recall) -> String {
    let mut body = String::new();

    body.push_str(
        "<form method=\"post\" action=\"/\">\n\
         <label for=\"mood\">How are you feeling?</label>\n\
         <textarea id=\"mood\" name=\"mood\" rows=\"3\"></textarea>\n\
         <label><input type=\"checkbox\" name=\"mood_boost\" value=\"yes\"> Cheer me up</label>\n\
         <button type=\"submit\">Suggest</button>\n\
         </form>\n",
    );

    if let Some(submission) = &recall.submission {
        match submission.detected.as_deref() {
            Some(key) => {
                let emotion = catalog.get_or_default(key);
                let _ = writeln!(
                    body,
                    "<section class=\"result\"><h2>{} {}</h2><p>&ldquo;{}&rdquo;</p><ul>",
                    escape(&emotion.icon),
                    escape(&emotion.label),
                    escape(&submission.mood_text),
                );
                for item in &recall.suggestions {
                    let _ = writeln!(
                        body,
                        "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></li>",
                        escape(&item.link),
                        escape(&item.title),
                    );
                }
                body.push_str("</ul></section>\n");
            }
            None => body.push_str("<p class=\"hint\">Tell me how you feel to get suggestions.</p>\n"),
        }
    }

    if let Some(saved) = &recall.saved {
        let label = saved
            .detected
            .as_deref()
            .map(|key| catalog.get_or_default(key).label.as_str())
            .unwrap_or("none");
        let _ = writeln!(
            body,
            "<p class=\"last\">Last saved: &ldquo;{}&rdquo; ({})</p>",
            escape(&saved.mood_text),
            escape(label),
        );
    }

    body.push_str("<ul class=\"emotions\">\n");
    for emotion in catalog.categories() {
        let _ = writeln!(
            body,
            "<li>{} {}</li>",
            escape(&emotion.icon),
            escape(&emotion.label)
        );
    }
    body.push_str("</ul>\n");

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Mood Journal</title>\n</head>\n<body>\n<h1>Mood Journal</h1>\n{body}</body>\n</html>\n"
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::RecallSource;
    use crate::mood::{MoodSubmission, SuggestionItem};

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_render_empty() {
        let recall = Recall {
            source: RecallSource::None,
            submission: None,
            suggestions: vec![],
            saved: None,
        };
        let html = render(&Catalog::reference(), &recall);

        assert!(html.contains("<form"));
        assert!(html.contains("Lonely"));
        assert!(!html.contains("Last saved"));
    }

    #[test]
    fn test_render_result_escapes_input() {
        let recall = Recall {
            source: RecallSource::Session,
            submission: Some(MoodSubmission::new(
                "<script>sad</script>",
                Some("sad".to_string()),
            )),
            suggestions: vec![SuggestionItem::new("Fix You", "https://example.com/?a=1&b=2")],
            saved: Some(MoodSubmission::new("older", Some("calm".to_string()))),
        };
        let html = render(&Catalog::reference(), &recall);

        assert!(html.contains("&lt;script&gt;sad&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("https://example.com/?a=1&amp;b=2"));
        assert!(html.contains("Last saved: &ldquo;older&rdquo; (Calm)"));
    }

    #[test]
    fn test_render_empty_submission_shows_hint() {
        let recall = Recall {
            source: RecallSource::Session,
            submission: Some(MoodSubmission::new("", None)),
            suggestions: vec![],
            saved: None,
        };
        let html = render(&Catalog::reference(), &recall);
        assert!(html.contains("class=\"hint\""));
    }
}
