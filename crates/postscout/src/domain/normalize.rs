//! Hit normalization
//!
//! Maps each provider's heterogeneous `RawHit` into one `CanonicalPost`,
//! optionally attaching extracted markdown content. Pure: the content
//! fetch and the debug-artifact write happen upstream in the
//! orchestrator, which passes their outcomes in.

use std::collections::HashSet;

use crate::domain::entities::{CanonicalPost, RawHit};
use crate::domain::errors::SearchError;
use crate::domain::value_objects::parse_publish_date;

/// Normalize one hit into a canonical post.
///
/// `body` is the extracted post body (when the page fetch succeeded);
/// `debug_reference` names the debug artifact written for this hit (when
/// debug mode was on and the write succeeded). A hit with an empty title
/// or URL after trimming fails normalization; the orchestrator drops it
/// and proceeds with the rest of the batch.
pub fn normalize(
    hit: &RawHit,
    body: Option<&str>,
    debug_reference: Option<String>,
) -> Result<CanonicalPost, SearchError> {
    let title = hit.title.trim();
    if title.is_empty() {
        return Err(SearchError::extraction(format!(
            "hit {} has no title",
            hit.url
        )));
    }
    let url = hit.url.trim();
    if url.is_empty() {
        return Err(SearchError::extraction(format!(
            "hit '{}' has no URL",
            title
        )));
    }

    let author = hit
        .author
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(String::from);
    let date = hit.date.as_deref().and_then(parse_publish_date);

    let tags = match &hit.tags {
        Some(tags) if !tags.is_empty() => dedupe_tags(tags),
        _ => {
            let mut text = hit.description.clone().unwrap_or_default();
            if let Some(body) = body {
                text.push(' ');
                text.push_str(body);
            }
            extract_hashtags(&text)
        }
    };

    let content = body.map(|body| {
        compose_markdown(
            title,
            author.as_deref(),
            hit.date.as_deref(),
            body,
            &tags,
        )
    });

    Ok(CanonicalPost {
        title: title.to_string(),
        url: url.to_string(),
        id: post_id(url),
        author,
        date,
        content,
        tags,
        debug_reference,
    })
}

/// Slug after the last slash of the URL, used to name debug artifacts.
pub fn post_id(url: &str) -> Option<String> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|slug| !slug.is_empty() && !slug.contains(':'))
        .map(String::from)
}

/// Extract `#hashtag` tokens from free text: lowercased, duplicates
/// collapsed, insertion order kept.
fn extract_hashtags(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch != '#' {
            continue;
        }
        let rest = &text[idx + 1..];
        let token: String = rest
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '_')
            .collect();
        if token.is_empty() {
            continue;
        }
        let lowered = token.to_lowercase();
        if seen.insert(lowered.clone()) {
            tags.push(lowered);
        }
    }
    tags
}

/// Normalize a structured provider tag list the same way derived
/// hashtags are: strip any leading `#`, lowercase, collapse duplicates.
fn dedupe_tags(tags: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for tag in tags {
        let cleaned = tag.trim().trim_start_matches('#').to_lowercase();
        if cleaned.is_empty() {
            continue;
        }
        if seen.insert(cleaned.clone()) {
            out.push(cleaned);
        }
    }
    out
}

/// Format the extracted post as a markdown document: title heading,
/// author/date metadata lines, body, trailing tag list.
fn compose_markdown(
    title: &str,
    author: Option<&str>,
    raw_date: Option<&str>,
    body: &str,
    tags: &[String],
) -> String {
    let mut lines = Vec::new();
    lines.push(format!("# {}\n", title));
    if let Some(author) = author {
        lines.push(format!("**Author:** {}", author));
    }
    if let Some(date) = raw_date {
        lines.push(format!("**Date:** {}", date));
    }
    lines.push(String::new());
    lines.push(body.trim().to_string());
    if !tags.is_empty() {
        let rendered: Vec<String> = tags.iter().map(|t| format!("#{}", t)).collect();
        lines.push(format!("\n**Tags:** {}", rendered.join(" ")));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn hit() -> RawHit {
        RawHit {
            title: "  Automating workflows with n8n  ".into(),
            url: " https://www.linkedin.com/posts/jane-doe_n8n-automation-1234 ".into(),
            description: Some("Check out #n8n and #Automation. Again: #n8n!".into()),
            date: Some("2024-02-15".into()),
            author: Some(" Jane Doe ".into()),
            tags: None,
        }
    }

    #[test]
    fn copies_through_trimmed_fields() {
        let post = normalize(&hit(), None, None).unwrap();
        assert_eq!(post.title, "Automating workflows with n8n");
        assert_eq!(
            post.url,
            "https://www.linkedin.com/posts/jane-doe_n8n-automation-1234"
        );
        assert_eq!(post.author.as_deref(), Some("Jane Doe"));
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2024, 2, 15));
        assert_eq!(post.id.as_deref(), Some("jane-doe_n8n-automation-1234"));
    }

    #[test]
    fn derives_hashtags_case_insensitively() {
        let post = normalize(&hit(), None, None).unwrap();
        assert_eq!(post.tags, vec!["n8n", "automation"]);
    }

    #[test]
    fn structured_tags_win_over_derivation() {
        let mut h = hit();
        h.tags = Some(vec!["#AI".into(), "ai".into(), "Workflows".into()]);
        let post = normalize(&h, None, None).unwrap();
        assert_eq!(post.tags, vec!["ai", "workflows"]);
    }

    #[test]
    fn content_absent_without_a_fetched_body() {
        let post = normalize(&hit(), None, None).unwrap();
        assert!(post.content.is_none());
    }

    #[test]
    fn content_is_composed_markdown() {
        let post = normalize(&hit(), Some("Great results this quarter."), None).unwrap();
        let content = post.content.unwrap();
        assert!(content.starts_with("# Automating workflows with n8n"));
        assert!(content.contains("**Author:** Jane Doe"));
        assert!(content.contains("**Date:** 2024-02-15"));
        assert!(content.contains("Great results this quarter."));
        assert!(content.contains("**Tags:** #n8n #automation"));
    }

    #[test]
    fn empty_title_fails() {
        let mut h = hit();
        h.title = "   ".into();
        assert!(normalize(&h, None, None).is_err());
    }

    #[test]
    fn empty_url_fails() {
        let mut h = hit();
        h.url = "".into();
        assert!(normalize(&h, None, None).is_err());
    }

    #[test]
    fn unparseable_date_yields_none_but_post_survives() {
        let mut h = hit();
        h.date = Some("around last spring".into());
        let post = normalize(&h, None, None).unwrap();
        assert!(post.date.is_none());
    }

    #[test]
    fn debug_reference_passes_through() {
        let post = normalize(&hit(), None, Some("abc_raw.html".into())).unwrap();
        assert_eq!(post.debug_reference.as_deref(), Some("abc_raw.html"));
    }

    #[test]
    fn normalization_is_idempotent() {
        let h = hit();
        let first = normalize(&h, Some("body"), None).unwrap();
        let second = normalize(&h, Some("body"), None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn post_id_handles_trailing_slash_and_bare_host() {
        assert_eq!(
            post_id("https://linkedin.com/posts/slug-1/").as_deref(),
            Some("slug-1")
        );
        assert_eq!(post_id("https:"), None);
    }
}
