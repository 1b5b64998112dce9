//! Request DTOs for the plant proxy API
//!
//! Defines the structure of incoming query strings.

/// Query string for the plant listing (GET /api/plants)
///
/// Values are forwarded to Trefle as-is; upstream does its own validation.
///
/// # Fields
/// - `page`: Page number to fetch (defaults to "1")
/// - `q`: Free-text search term (defaults to empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantListQuery {
    /// Upstream page number
    pub page: String,
    /// Search term
    pub q: String,
}

fn default_page() -> String {
    "1".to_string()
}

impl PlantListQuery {
    /// Builds the query from raw key/value pairs.
    ///
    /// A repeated key is joined with `,` in arrival order (`page=1&page=2`
    /// becomes `"1,2"`); unrelated keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut page: Option<String> = None;
        let mut q: Option<String> = None;

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut page,
                "q" => &mut q,
                _ => continue,
            };
            match slot {
                Some(existing) => {
                    existing.push(',');
                    existing.push_str(&value);
                }
                None => *slot = Some(value),
            }
        }

        Self {
            page: page.unwrap_or_else(default_page),
            q: q.unwrap_or_default(),
        }
    }

    /// Query pairs in the order they are appended to the upstream URL.
    pub fn as_pairs(&self) -> [(&'static str, &str); 2] {
        [("page", self.page.as_str()), ("q", self.q.as_str())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_defaults() {
        let query = PlantListQuery::from_pairs(Vec::new());
        assert_eq!(query.page, "1");
        assert_eq!(query.q, "");
    }

    #[test]
    fn test_from_pairs_joins_repeated_keys() {
        let query = PlantListQuery::from_pairs(pairs(&[
            ("page", "1"),
            ("q", "oak"),
            ("page", "2"),
            ("q", "red"),
        ]));
        assert_eq!(query.page, "1,2");
        assert_eq!(query.q, "oak,red");
    }

    #[test]
    fn test_from_pairs_ignores_other_keys() {
        let query = PlantListQuery::from_pairs(pairs(&[("token", "attacker"), ("q", "fern")]));
        assert_eq!(query.page, "1");
        assert_eq!(query.q, "fern");
    }

    #[test]
    fn test_plant_list_query_pairs_order() {
        let query = PlantListQuery {
            page: "2".to_string(),
            q: "fern".to_string(),
        };
        assert_eq!(query.as_pairs(), [("page", "2"), ("q", "fern")]);
    }
}
