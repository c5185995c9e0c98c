use crate::models::Incident;

/// Criteria for narrowing a listed snapshot of incidents.
///
/// Filtering is a pure function over incidents the store has already
/// returned; it never touches the store or its lock. Criteria are trimmed
/// and lowercased once at construction, blank criteria are ignored, and all
/// supplied criteria must match (logical AND). Output preserves input order.
#[derive(Debug, Clone, Default)]
pub struct IncidentFilter {
    severity: String,
    status: String,
    query: String,
}

impl IncidentFilter {
    pub fn new(severity: &str, status: &str, query: &str) -> Self {
        Self {
            severity: severity.trim().to_lowercase(),
            status: status.trim().to_lowercase(),
            query: query.trim().to_lowercase(),
        }
    }

    /// True when no criterion is supplied
    pub fn is_empty(&self) -> bool {
        self.severity.is_empty() && self.status.is_empty() && self.query.is_empty()
    }

    /// Apply the filter to a snapshot, preserving relative order
    pub fn apply(&self, items: Vec<Incident>) -> Vec<Incident> {
        if self.is_empty() {
            return items;
        }
        items
            .into_iter()
            .filter(|incident| self.matches(incident))
            .collect()
    }

    fn matches(&self, incident: &Incident) -> bool {
        if !self.severity.is_empty() && incident.severity.to_lowercase() != self.severity {
            return false;
        }
        if !self.status.is_empty() && incident.status.to_lowercase() != self.status {
            return false;
        }
        if !self.query.is_empty() && !matches_query(incident, &self.query) {
            return false;
        }
        true
    }
}

/// Case-insensitive substring match over title, owner, tags, and IOCs
fn matches_query(incident: &Incident, query: &str) -> bool {
    incident.title.to_lowercase().contains(query)
        || incident.owner.to_lowercase().contains(query)
        || incident
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(query))
        || incident
            .iocs
            .iter()
            .any(|ioc| ioc.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn incident(title: &str, severity: &str, status: &str, owner: &str) -> Incident {
        let now = Utc::now();
        Incident {
            id: "INC-1001".to_string(),
            title: title.to_string(),
            severity: severity.to_string(),
            status: status.to_string(),
            owner: owner.to_string(),
            tags: vec!["lateral".to_string(), "endpoint".to_string()],
            iocs: vec!["10.22.18.9".to_string()],
            notes: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_blank_filter_returns_input_unchanged() {
        let items = vec![
            incident("one", "High", "New", "A"),
            incident("two", "Low", "Closed", "B"),
        ];
        let filter = IncidentFilter::new("", "  ", "");
        assert!(filter.is_empty());
        let out = filter.apply(items.clone());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].title, "one");
        assert_eq!(out[1].title, "two");
    }

    #[test]
    fn test_severity_matches_case_insensitively() {
        let items = vec![
            incident("a", "High", "New", "A"),
            incident("b", "Medium", "New", "B"),
        ];
        let out = IncidentFilter::new("high", "", "").apply(items);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "a");
    }

    #[test]
    fn test_status_is_exact_not_substring() {
        let items = vec![
            incident("a", "High", "Contained", "A"),
            incident("b", "High", "Contain", "B"),
        ];
        let out = IncidentFilter::new("", "CONTAINED", "").apply(items);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "a");
    }

    #[test]
    fn test_query_searches_title_owner_tags_iocs() {
        let items = vec![incident(
            "Unusual lateral movement across finance segment",
            "Critical",
            "Contained",
            "IR Lead",
        )];

        for query in ["fina", "ir lead", "ENDPOINT", "10.22"] {
            let out = IncidentFilter::new("", "", query).apply(items.clone());
            assert_eq!(out.len(), 1, "query {query:?} should match");
        }

        let out = IncidentFilter::new("", "", "payroll").apply(items);
        assert!(out.is_empty());
    }

    #[test]
    fn test_criteria_are_anded() {
        let items = vec![
            incident("finance alert", "High", "New", "A"),
            incident("finance alert", "Low", "New", "B"),
        ];
        let out = IncidentFilter::new("high", "new", "finance").apply(items);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].severity, "High");
    }

    #[test]
    fn test_order_preserved() {
        let items = vec![
            incident("match one", "High", "New", "A"),
            incident("skip", "Low", "New", "B"),
            incident("match two", "High", "New", "C"),
        ];
        let out = IncidentFilter::new("high", "", "").apply(items);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].title, "match one");
        assert_eq!(out[1].title, "match two");
    }
}
