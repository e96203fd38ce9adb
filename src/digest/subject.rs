// src/digest/subject.rs

/// "1 new comment", "2 new comments", ...
fn pluralize(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

/// Subject line for a digest. Exactly three shapes:
///
/// - comments only: "2 new comments on planning applications near {addr}"
/// - applications only: "1 new planning application near {addr}"
/// - both: "1 new comment and 2 new planning applications near {addr}"
///
/// The comment clause always comes first. With nothing at all the
/// applications-only shape is used with a zero count.
pub fn subject_line(address: &str, comment_count: usize, application_count: usize) -> String {
    let comments = pluralize(comment_count, "new comment");
    let applications = pluralize(application_count, "new planning application");

    match (comment_count, application_count) {
        (0, _) => format!("{applications} near {address}"),
        (_, 0) => format!("{comments} on planning applications near {address}"),
        _ => format!("{comments} and {applications} near {address}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "24 Bruce Rd, Glenbrook NSW 2773";

    #[test]
    fn one_comment_uses_singular() {
        assert_eq!(
            subject_line(ADDR, 1, 0),
            "1 new comment on planning applications near 24 Bruce Rd, Glenbrook NSW 2773"
        );
    }

    #[test]
    fn two_comments_use_plural() {
        assert_eq!(
            subject_line(ADDR, 2, 0),
            "2 new comments on planning applications near 24 Bruce Rd, Glenbrook NSW 2773"
        );
    }

    #[test]
    fn comments_come_before_applications() {
        assert_eq!(
            subject_line(ADDR, 1, 2),
            "1 new comment and 2 new planning applications near 24 Bruce Rd, Glenbrook NSW 2773"
        );
        assert_eq!(
            subject_line(ADDR, 3, 1),
            "3 new comments and 1 new planning application near 24 Bruce Rd, Glenbrook NSW 2773"
        );
    }

    #[test]
    fn applications_only() {
        assert_eq!(
            subject_line(ADDR, 0, 1),
            "1 new planning application near 24 Bruce Rd, Glenbrook NSW 2773"
        );
        assert_eq!(
            subject_line(ADDR, 0, 2),
            "2 new planning applications near 24 Bruce Rd, Glenbrook NSW 2773"
        );
    }

    #[test]
    fn grammar_holds_across_counts() {
        for c in 0..5usize {
            for a in 0..5usize {
                if c == 0 && a == 0 {
                    continue;
                }
                let subject = subject_line("here", c, a);
                assert!(subject.ends_with(" near here"), "{subject}");
                assert_eq!(subject.contains("comment"), c > 0, "{subject}");
                assert_eq!(
                    subject.contains("on planning applications"),
                    a == 0,
                    "{subject}"
                );
                assert_eq!(subject.contains("new comments"), c > 1, "{subject}");
                assert_eq!(
                    subject.contains("new planning applications"),
                    a > 1,
                    "{subject}"
                );
            }
        }
    }

    #[test]
    fn empty_digest_degrades_to_zero_applications() {
        assert_eq!(subject_line("here", 0, 0), "0 new planning applications near here");
    }
}
