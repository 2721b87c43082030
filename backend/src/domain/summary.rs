//! Directory summary shown on the info page.

use chrono::{DateTime, Utc};

/// Point-in-time overview of the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySummary {
    /// Number of contacts stored when the summary was taken.
    pub count: usize,
    /// Moment the summary was generated.
    pub generated_at: DateTime<Utc>,
}

impl DirectorySummary {
    /// Render the HTML fragment served at `/info`.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use phonebook::domain::DirectorySummary;
    ///
    /// let summary = DirectorySummary {
    ///     count: 4,
    ///     generated_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
    /// };
    /// assert!(summary.to_html().contains("Phonebook has info for 4 people"));
    /// ```
    pub fn to_html(&self) -> String {
        format!(
            "<p>Phonebook has info for {} people</p>\n<p>{}</p>\n",
            self.count,
            self.generated_at.to_rfc2822()
        )
    }
}
