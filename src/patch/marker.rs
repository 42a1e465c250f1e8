//! Marker editing on the workbench markup.
//!
//! The presence of [`MARKER`] is the only record of whether the patch is
//! applied. All searches are exact substring matches.

/// The script tag injected into `workbench.html`.
pub const MARKER: &str = r#"<!-- Fluent UI --><script src="fluent.js"></script><!-- Fluent UI -->"#;

const CLOSING_TAG: &str = "</html>";

/// Check whether the marker is present.
pub fn is_applied(html: &str) -> bool {
    html.contains(MARKER)
}

/// Count marker occurrences.
pub fn count(html: &str) -> usize {
    html.matches(MARKER).count()
}

/// Insert the marker right before the last closing `</html>` tag.
///
/// When the closing tag starts its own line the marker gets a line of its
/// own; otherwise it is placed inline. A document without a closing tag gets
/// the marker appended as a final line. Callers check [`is_applied`] first.
pub fn insert(html: &str) -> String {
    let mut out = String::with_capacity(html.len() + MARKER.len() + 2);

    match html.rfind(CLOSING_TAG) {
        Some(idx) => {
            let head = &html[..idx];
            out.push_str(head);
            out.push('\t');
            out.push_str(MARKER);
            if head.is_empty() || head.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&html[idx..]);
        }
        None => {
            out.push_str(html);
            if !html.is_empty() && !html.ends_with('\n') {
                out.push('\n');
            }
            out.push('\t');
            out.push_str(MARKER);
            out.push('\n');
        }
    }

    out
}

/// Remove every marker occurrence.
///
/// A line holding nothing but whitespace and the marker is dropped along
/// with its line break. An inline marker is cut out together with the single
/// tab [`insert`] puts in front of it, leaving the rest of its line intact.
pub fn remove(html: &str) -> String {
    let mut out = html.to_string();

    while let Some(start) = out.find(MARKER) {
        let end = start + MARKER.len();
        let line_start = out[..start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = out[end..].find('\n').map_or(out.len(), |i| end + i + 1);

        let before = &out[line_start..start];
        let after = &out[end..line_end];

        if before.trim().is_empty() && after.trim().is_empty() {
            out.replace_range(line_start..line_end, "");
        } else {
            let start = if before.ends_with('\t') { start - 1 } else { start };
            out.replace_range(start..end, "");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKBENCH: &str = "<!DOCTYPE html>\n<html>\n\t<head>\n\t\t<meta charset=\"utf-8\" />\n\t</head>\n\t<body aria-label=\"\">\n\t</body>\n\n\t<script src=\"workbench.js\"></script>\n</html>\n";

    #[test]
    fn test_inline_insert() {
        let out = insert("<html><body>x</body></html>");
        assert_eq!(
            out,
            "<html><body>x</body>\t<!-- Fluent UI --><script src=\"fluent.js\"></script><!-- Fluent UI --></html>"
        );
        assert!(is_applied(&out));
    }

    #[test]
    fn test_inline_remove_restores_original() {
        let original = "<html><body>x</body></html>";
        assert_eq!(remove(&insert(original)), original);
    }

    #[test]
    fn test_inline_round_trip_keeps_user_whitespace() {
        for original in [
            "<html>\n<body></body>\n  </html>\n",
            "<html><body>x</body> </html>",
            "<html><body>x</body>\t</html>",
        ] {
            assert_eq!(remove(&insert(original)), original);
        }
    }

    #[test]
    fn test_remove_takes_one_tab_only() {
        let html = format!("<body>x</body> \t\t{}</html>", MARKER);
        assert_eq!(remove(&html), "<body>x</body> \t</html>");
    }

    #[test]
    fn test_insert_on_own_line() {
        let out = insert(WORKBENCH);
        assert!(out.contains(&format!("</script>\n\t{}\n</html>\n", MARKER)));
        assert_eq!(count(&out), 1);
    }

    #[test]
    fn test_own_line_round_trip() {
        assert_eq!(remove(&insert(WORKBENCH)), WORKBENCH);
    }

    #[test]
    fn test_insert_before_last_closing_tag() {
        let html = "<html><!-- </html> --></html>";
        let out = insert(html);
        assert!(out.ends_with(&format!("{}</html>", MARKER)));
        assert!(out.starts_with("<html><!-- </html> -->"));
    }

    #[test]
    fn test_insert_without_closing_tag() {
        let out = insert("<html><body></body>");
        assert_eq!(out, format!("<html><body></body>\n\t{}\n", MARKER));
        assert_eq!(remove(&out), "<html><body></body>\n");
    }

    #[test]
    fn test_remove_keeps_neighbouring_content() {
        let html = format!("<head>\n  {}\n  <title>x</title>\n", MARKER);
        assert_eq!(remove(&html), "<head>\n  <title>x</title>\n");
    }

    #[test]
    fn test_remove_all_duplicates() {
        let html = format!("a\n\t{m}\nb\n\t{m}\n</html>", m = MARKER);
        let out = remove(&html);
        assert_eq!(out, "a\nb\n</html>");
        assert_eq!(count(&out), 0);
    }

    #[test]
    fn test_remove_without_marker_is_identity() {
        assert_eq!(remove(WORKBENCH), WORKBENCH);
    }

    #[test]
    fn test_unrelated_fluent_reference_is_not_marker() {
        let html = "<script src=\"fluent.js\"></script></html>";
        assert!(!is_applied(html));
        assert_eq!(remove(html), html);
    }

    #[test]
    fn test_crlf_round_trip() {
        let html = "<html>\r\n<body></body>\r\n</html>\r\n";
        let out = insert(html);
        assert_eq!(count(&out), 1);
        assert_eq!(remove(&out), html);
    }
}
