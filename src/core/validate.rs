use crate::core::messages;

/// Validate the post form fields before submission.
///
/// `None` means the field is absent on this page and is skipped entirely; a
/// present field fails when its trimmed value is empty. Returns the combined
/// alert text on failure, one sentence per failing field in the fixed order
/// title, author, content, each terminated by a newline. Returns `None` when
/// every present field passes.
pub fn validate_post_form(
    title: Option<&str>,
    author: Option<&str>,
    content: Option<&str>,
) -> Option<String> {
    let mut message = String::new();

    if is_blank(title) {
        message.push_str(messages::TITLE_REQUIRED);
        message.push('\n');
    }
    if is_blank(author) {
        message.push_str(messages::AUTHOR_REQUIRED);
        message.push('\n');
    }
    if is_blank(content) {
        message.push_str(messages::CONTENT_REQUIRED);
        message.push('\n');
    }

    if message.is_empty() {
        None
    } else {
        Some(message)
    }
}

fn is_blank(field: Option<&str>) -> bool {
    matches!(field, Some(value) if value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::messages;

    #[test]
    fn all_fields_filled_passes() {
        assert_eq!(
            validate_post_form(Some("タイトル"), Some("太郎"), Some("本文")),
            None
        );
    }

    #[test]
    fn absent_fields_are_skipped() {
        assert_eq!(validate_post_form(None, None, None), None);
        assert_eq!(validate_post_form(Some("t"), None, None), None);
    }

    #[test]
    fn blank_title_reports_one_line() {
        let message = validate_post_form(Some(""), Some("太郎"), Some("本文")).unwrap();
        assert_eq!(message, format!("{}\n", messages::TITLE_REQUIRED));
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let message = validate_post_form(Some("  \t"), Some("太郎"), Some("本文")).unwrap();
        assert_eq!(message, format!("{}\n", messages::TITLE_REQUIRED));
    }

    #[test]
    fn all_blank_reports_fixed_order() {
        let message = validate_post_form(Some(""), Some(" "), Some("")).unwrap();
        assert_eq!(
            message,
            format!(
                "{}\n{}\n{}\n",
                messages::TITLE_REQUIRED,
                messages::AUTHOR_REQUIRED,
                messages::CONTENT_REQUIRED
            )
        );
    }

    #[test]
    fn blank_author_and_content_skips_title_line() {
        let message = validate_post_form(Some("t"), Some(""), Some("")).unwrap();
        assert_eq!(
            message,
            format!(
                "{}\n{}\n",
                messages::AUTHOR_REQUIRED,
                messages::CONTENT_REQUIRED
            )
        );
    }

    #[test]
    fn every_line_is_a_complete_sentence() {
        let message = validate_post_form(Some(""), Some(""), Some("")).unwrap();
        for line in message.lines() {
            assert!(line.ends_with('。'));
        }
        assert_eq!(message.lines().count(), 3);
    }
}
