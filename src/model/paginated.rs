use serde::Deserialize;

/// A page of results from a Blossom list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_blossom_page() {
        let page: Paginated<u64> = serde_json::from_value(json!({
            "count": 3,
            "next": "https://blossom.example/api/submission/?page=2",
            "previous": null,
            "results": [1, 2],
        }))
        .unwrap();

        assert_eq!(page.count, 3);
        assert!(page.next.is_some());
        assert_eq!(page.results, vec![1, 2]);

        let last: Paginated<u64> =
            serde_json::from_value(json!({ "count": 0, "results": [] })).unwrap();
        assert!(last.next.is_none());
    }
}
