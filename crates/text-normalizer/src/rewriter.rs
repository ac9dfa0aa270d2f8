//! Produces the normalized text and the SSML document from a match set.

use tn_core::NormResult;

use crate::categories::Markup;
use crate::scanner::{MatchSet, Segment};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SSML_NAMESPACE: &str = "http://www.w3.org/2001/10/synthesis";

/// Escape text for use in XML content and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for one rewritten span.
fn wrap(markup: Markup, spoken: &str, original: &str) -> String {
    match markup {
        Markup::SayAs {
            interpret_as,
            format: Some(format),
        } => format!(
            r#"<say-as interpret-as="{interpret_as}" format="{format}">{}</say-as>"#,
            escape_xml(spoken)
        ),
        Markup::SayAs {
            interpret_as,
            format: None,
        } => format!(
            r#"<say-as interpret-as="{interpret_as}">{}</say-as>"#,
            escape_xml(spoken)
        ),
        Markup::Sub => format!(
            r#"<sub alias="{}">{}</sub>"#,
            escape_xml(spoken),
            escape_xml(original)
        ),
    }
}

/// Rewrite `text` with `matches`, returning `(normalized_text, ssml)`.
pub fn apply(text: &str, matches: &MatchSet, language: &str) -> NormResult<(String, String)> {
    let mut normalized = String::with_capacity(text.len() * 2);
    let mut body = String::with_capacity(text.len() * 3);

    for segment in matches.segments(text)? {
        match segment {
            Segment::Literal(literal) => {
                normalized.push_str(literal);
                body.push_str(&escape_xml(literal));
            }
            Segment::Matched(m) => {
                normalized.push_str(&m.rendition.spoken);
                body.push_str(&wrap(m.rendition.markup, &m.rendition.spoken, &m.raw));
            }
        }
    }

    let ssml = format!(
        r#"{XML_DECLARATION}
<speak version="1.1" xmlns="{SSML_NAMESPACE}" xml:lang="{}">{body}</speak>"#,
        escape_xml(language)
    );
    Ok((normalized, ssml))
}
