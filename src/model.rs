use serde::Serialize;

/// One `<item>` of the feed. Fields stay `None` until the matching child
/// element is seen.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: Option<String>,
    pub pub_date: Option<String>,
}

#[cfg(test)]
impl NewsItem {
    pub(crate) fn new(title: &str, pub_date: &str) -> Self {
        NewsItem {
            title: Some(title.to_string()),
            pub_date: Some(pub_date.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_item() {
        let item = NewsItem::new("A", "D1");
        let json = serde_json::to_string(&item).expect("serialize failed");
        assert_eq!(json, r#"{"title":"A","pubDate":"D1"}"#);
    }

    #[test]
    fn serialize_unset_fields() {
        let json = serde_json::to_string(&NewsItem::default()).expect("serialize failed");
        assert_eq!(json, r#"{"title":null,"pubDate":null}"#);
    }
}
