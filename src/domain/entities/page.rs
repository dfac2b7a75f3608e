//! CMS page filenames and the purge URLs derived from them.

/// Served filenames of a CMS page.
///
/// A page is always published under its generated `filename` (e.g.
/// `page1234.html`) and optionally under a human-chosen `alias`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFilenames {
    pub filename: String,
    pub alias: Option<String>,
}

impl PageFilenames {
    /// Creates a new PageFilenames instance.
    ///
    /// An empty alias is normalised to `None`.
    pub fn new(filename: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            filename: filename.into(),
            alias: alias.filter(|a| !a.is_empty()),
        }
    }

    /// Filename first, then alias; empty entries are skipped.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.filename.as_str())
            .chain(self.alias.as_deref())
            .filter(|name| !name.is_empty())
    }
}

/// Builds the absolute URLs to purge for a page served on `domain`.
///
/// # Examples
///
/// ```
/// use tilda_cf_purge::domain::entities::{PageFilenames, build_purge_urls};
///
/// let files = PageFilenames::new("page1.html", Some("p1".to_string()));
/// assert_eq!(
///     build_purge_urls("example.com", &files),
///     vec!["https://example.com/page1.html", "https://example.com/p1"]
/// );
/// ```
pub fn build_purge_urls(domain: &str, filenames: &PageFilenames) -> Vec<String> {
    filenames
        .names()
        .map(|name| format!("https://{}/{}", domain, name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_with_alias() {
        let files = PageFilenames::new("page1.html", Some("p1".to_string()));

        let urls = build_purge_urls("example.com", &files);

        assert_eq!(
            urls,
            vec!["https://example.com/page1.html", "https://example.com/p1"]
        );
    }

    #[test]
    fn test_urls_without_alias() {
        let files = PageFilenames::new("page1.html", None);

        assert_eq!(
            build_purge_urls("example.com", &files),
            vec!["https://example.com/page1.html"]
        );
    }

    #[test]
    fn test_empty_alias_is_dropped() {
        let files = PageFilenames::new("page1.html", Some(String::new()));

        assert_eq!(files.alias, None);
        assert_eq!(build_purge_urls("example.com", &files).len(), 1);
    }
}
