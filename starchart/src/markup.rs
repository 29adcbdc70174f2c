//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Infocard markup rendering: `rdl` (the raw decoded tag language), `html` (a crude
//! tag-substitution table onto a whitelisted HTML subset) and `plain` (every tag stripped).
//!
//! This is deliberately not a real parser for the game's rich-text dialect -- see the design
//! note in [`crate::registry`] -- just a table of the handful of tags that actually show up in
//! practice, applied left to right. Unknown tags are dropped rather than passed through, so a
//! markup blob the table doesn't recognize degrades to (possibly ugly, never broken) plain text.

/// The three ways an infocard's raw markup can be rendered, per [`crate::entities::Entity`]
/// methods that take a markup option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkupKind {
    /// The raw, UTF-16-decoded tag language exactly as stored in the resource container.
    Rdl,
    /// A whitelisted HTML subset, produced by tag-by-tag substitution.
    Html,
    /// Every tag stripped, leaving only the text runs.
    Plain,
}

/// Renders `raw` (the decoded `rdl` markup of an infocard) as `kind`.
pub fn render(raw: &str, kind: MarkupKind) -> String {
    match kind {
        MarkupKind::Rdl => raw.to_owned(),
        MarkupKind::Html => to_html(raw),
        MarkupKind::Plain => strip_tags(raw),
    }
}

/// Tag-by-tag substitution from the game's markup language to a whitelisted HTML subset.
/// Tags not in this table are dropped along with their attributes; their text content (if
/// any) passes through untouched, since the text runs are not tags themselves.
fn to_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        rest = &rest[start..];

        let Some(end) = rest.find('>') else {
            // Unterminated tag: treat the rest of the string as plain text.
            out.push_str(rest);
            return out;
        };

        let tag = &rest[1..end];
        rest = &rest[end + 1..];

        if let Some(html) = substitute_tag(tag) {
            out.push_str(&html);
        }
    }

    out.push_str(rest);
    out
}

/// Returns the HTML replacement for one `<TAG ...>` body (without the angle brackets), or
/// `None` if the tag is unknown and should be stripped.
fn substitute_tag(tag: &str) -> Option<String> {
    let mut parts = tag.split_whitespace();
    let raw_name = parts.next()?.to_ascii_uppercase();
    let closing = raw_name.starts_with('/') || raw_name.ends_with('/');
    let name = raw_name.trim_matches('/');

    match name {
        "PARA" => Some("<p>".to_owned()),
        "TRA" if closing => Some("</span>".to_owned()),
        "TRA" => {
            let mut style = String::new();
            for attr in parts {
                if let Some(color) = attr.strip_prefix("color=") {
                    style.push_str(&format!("color: {}; ", color.trim_matches('"')));
                } else if let Some(size) = attr.strip_prefix("size=") {
                    style.push_str(&format!("font-size: {}pt; ", size.trim_matches('"')));
                }
            }
            Some(format!("<span style=\"{}\">", style.trim_end()))
        }
        "RDL" | "PUSH" | "POP" => None,
        _ => None,
    }
}

/// Strips every `<...>` tag, leaving only the text runs. Used both as the `plain` markup
/// option and, implicitly, by the idempotence property `plain(html(x)) == plain(x)`: since
/// `to_html` never introduces characters that look like a *new* tag into the text runs, this
/// holds for any input the table round-trips through.
fn strip_tags(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        rest = &rest[start..];
        match rest.find('>') {
            Some(end) => rest = &rest[end + 1..],
            None => {
                rest = "";
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_html_wraps_tra_in_span_with_color() {
        let raw = r##"<TRA color="#ff0000">hello</TRA><PARA/>"##;
        let html = render(raw, MarkupKind::Html);
        assert_eq!(html, "<span style=\"color: #ff0000;\">hello</span><p>");
    }

    #[test]
    fn test_plain_strips_all_tags() {
        let raw = "<PARA/>Hello<TRA color=\"red\">World</TRA>";
        assert_eq!(render(raw, MarkupKind::Plain), "HelloWorld");
    }

    #[test]
    fn test_plain_of_html_matches_plain_of_raw() {
        let raw = "<PARA/>Hello <TRA color=\"red\">World</TRA>, friend.";
        let via_html = strip_tags(&to_html(raw));
        let direct = strip_tags(raw);
        assert_eq!(via_html, direct);
    }

    #[test]
    fn test_rdl_is_identity() {
        let raw = "<PARA/>raw markup, untouched";
        assert_eq!(render(raw, MarkupKind::Rdl), raw);
    }
}
