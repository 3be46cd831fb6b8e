use indexmap::IndexSet;
use tracing::debug;

/// Ordered set of subdistrict names known to the predictor.
///
/// Loaded once per screen from `GET /subdistricts` and never mutated after
/// that. Order is the order supplied by the predictor; duplicates keep their
/// first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationCatalog {
    names: IndexSet<String>,
}

impl LocationCatalog {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: IndexSet<String> = names.into_iter().map(Into::into).collect();
        debug!(count = names.len(), "Location catalog built");
        Self { names }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get_index(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Entries containing `query` as a case-insensitive substring, in catalog
    /// order. An empty query matches everything.
    pub fn filtered_view(&self, query: &str) -> Vec<&str> {
        let needle = query.to_lowercase();
        self.iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for LocationCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bangkok() -> LocationCatalog {
        LocationCatalog::new(["วังทองหลาง", "ลาดพร้าว", "บางนา", "Bang Kapi", "bang sue"])
    }

    #[test]
    fn test_filtered_view_empty_query_returns_everything() {
        let catalog = bangkok();
        assert_eq!(catalog.filtered_view("").len(), catalog.len());
    }

    #[test]
    fn test_filtered_view_thai_substring() {
        let catalog = bangkok();
        assert_eq!(catalog.filtered_view("วัง"), vec!["วังทองหลาง"]);
        assert_eq!(catalog.filtered_view("บาง"), vec!["บางนา"]);
    }

    #[test]
    fn test_filtered_view_is_case_insensitive_and_keeps_order() {
        let catalog = bangkok();
        assert_eq!(catalog.filtered_view("BANG"), vec!["Bang Kapi", "bang sue"]);
        assert_eq!(catalog.filtered_view("kApI"), vec!["Bang Kapi"]);
    }

    #[test]
    fn test_filtered_view_no_match() {
        assert!(bangkok().filtered_view("Chiang Mai").is_empty());
        assert!(LocationCatalog::empty().filtered_view("").is_empty());
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let catalog = LocationCatalog::new(["ดินแดง", "คลองตัน", "ดินแดง"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0), Some("ดินแดง"));
        assert_eq!(catalog.get(1), Some("คลองตัน"));
        assert_eq!(catalog.get(2), None);
    }

    proptest! {
        #[test]
        fn filtered_view_entries_contain_query_in_catalog_order(
            names in prop::collection::vec("[a-zA-Zก-ฮ ]{0,8}", 0..20),
            query in "[a-zA-Zก-ฮ]{0,3}",
        ) {
            let catalog = LocationCatalog::new(names);
            let view = catalog.filtered_view(&query);
            let needle = query.to_lowercase();

            for name in &view {
                prop_assert!(name.to_lowercase().contains(&needle));
            }

            // Survivors appear in the same relative order as in the catalog.
            let positions: Vec<usize> = view
                .iter()
                .map(|name| catalog.iter().position(|c| c == *name).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

            // Nothing that matches is dropped.
            let expected = catalog
                .iter()
                .filter(|name| name.to_lowercase().contains(&needle))
                .count();
            prop_assert_eq!(view.len(), expected);
        }
    }
}
