use serde::{Deserialize, Serialize};

/// One listing card from the search results page.
///
/// Every field is always serialized; a field the page did not provide is an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub rating: String,
    pub reviews: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_frontend_field_names() {
        let product = Product {
            title: "Wireless Mouse".into(),
            rating: "4,5 de 5 estrelas".into(),
            reviews: "1.234".into(),
            image_url: "http://x/img.png".into(),
        };
        let json = serde_json::to_value(&product).expect("serialize");
        assert_eq!(json["title"], "Wireless Mouse");
        assert_eq!(json["rating"], "4,5 de 5 estrelas");
        assert_eq!(json["reviews"], "1.234");
        assert_eq!(json["imageUrl"], "http://x/img.png");
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn empty_fields_are_still_present() {
        let json = serde_json::to_string(&Product::default()).expect("serialize");
        assert_eq!(
            json,
            r#"{"title":"","rating":"","reviews":"","imageUrl":""}"#
        );
    }

    #[test]
    fn empty_list_encodes_as_array() {
        let products: Vec<Product> = Vec::new();
        assert_eq!(serde_json::to_string(&products).expect("serialize"), "[]");
    }
}
