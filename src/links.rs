// src/links.rs
use crate::errors::{DigestError, DigestResult};
use url::Url;

/// Campaign parameters that mark traffic as coming from alert emails.
const TRACKING_PARAMS: [(&str, &str); 2] = [("utm_medium", "email"), ("utm_source", "alerts")];

/// Builds the links that go into digest bodies. Pure and deterministic.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base: Url,
}

impl LinkBuilder {
    pub fn new(base_url: &str) -> DigestResult<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| DigestError::Config(format!("invalid base url {base_url:?}: {e}")))?;

        if base.cannot_be_a_base() {
            return Err(DigestError::Config(format!(
                "base url {base_url:?} cannot carry paths"
            )));
        }

        Ok(Self { base })
    }

    /// `{base}/applications/{id}?utm_medium=email&utm_source=alerts`
    pub fn application_link(&self, application_id: i64) -> String {
        let id = application_id.to_string();
        let mut url = self.with_segments(&["applications", id.as_str()]);
        {
            let mut query = url.query_pairs_mut();
            for (k, v) in TRACKING_PARAMS {
                query.append_pair(k, v);
            }
        }
        url.into()
    }

    /// `{base}/alerts/{confirm_id}/unsubscribe`
    pub fn unsubscribe_link(&self, confirm_id: &str) -> String {
        self.with_segments(&["alerts", confirm_id, "unsubscribe"])
            .into()
    }

    fn with_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        // cannot_be_a_base was ruled out in new()
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_link_carries_tracking_params() {
        let links = LinkBuilder::new("http://dev.planningalerts.org.au").unwrap();
        assert_eq!(
            links.application_link(1),
            "http://dev.planningalerts.org.au/applications/1?utm_medium=email&utm_source=alerts"
        );
    }

    #[test]
    fn application_link_is_deterministic() {
        let links = LinkBuilder::new("https://www.planningalerts.org.au/").unwrap();
        assert_eq!(links.application_link(42), links.application_link(42));
    }

    #[test]
    fn base_path_is_kept() {
        let links = LinkBuilder::new("https://example.org/pa/").unwrap();
        assert_eq!(
            links.application_link(7),
            "https://example.org/pa/applications/7?utm_medium=email&utm_source=alerts"
        );
    }

    #[test]
    fn unsubscribe_link_has_no_tracking() {
        let links = LinkBuilder::new("http://dev.planningalerts.org.au").unwrap();
        assert_eq!(
            links.unsubscribe_link("abcdef"),
            "http://dev.planningalerts.org.au/alerts/abcdef/unsubscribe"
        );
    }

    #[test]
    fn rejects_bases_without_paths() {
        match LinkBuilder::new("mailto:contact@planningalerts.org.au") {
            Err(DigestError::Config(_)) => {}
            other => panic!("expected Config error, got: {:?}", other),
        }
        assert!(LinkBuilder::new("not a url").is_err());
    }
}
