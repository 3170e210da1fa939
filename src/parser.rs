use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};
use crate::models::Product;

const RESULT_SELECTOR: &str = r#"div[data-component-type="s-search-result"]"#;
const TITLE_SELECTOR: &str = "a h2, h2 a";
const RATING_SELECTOR: &str = "span.a-icon-alt";
const REVIEWS_SELECTOR: &str = "span.a-size-base.s-underline-text";
const IMAGE_SELECTOR: &str = "img.s-image";

struct Selectors {
    result: Selector,
    title: Selector,
    rating: Selector,
    reviews: Selector,
    image: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            result: selector(RESULT_SELECTOR)?,
            title: selector(TITLE_SELECTOR)?,
            rating: selector(RATING_SELECTOR)?,
            reviews: selector(REVIEWS_SELECTOR)?,
            image: selector(IMAGE_SELECTOR)?,
        })
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Parse(format!("invalid selector {css:?}: {e:?}")))
}

/// Extracts one [`Product`] per search result card, in page order.
///
/// A card missing any of its fields still yields a product, with that field
/// left empty.
pub fn parse_products(html: &str) -> Result<Vec<Product>> {
    let doc = Html::parse_document(html);
    let sel = Selectors::new()?;

    let products: Vec<Product> = doc
        .select(&sel.result)
        .map(|card| Product {
            title: first_text(&card, &sel.title),
            rating: first_text(&card, &sel.rating),
            reviews: first_text(&card, &sel.reviews),
            image_url: first_attr(&card, &sel.image, "src"),
        })
        .collect();

    tracing::debug!(count = products.len(), "search results parsed");
    Ok(products)
}

fn first_text(card: &ElementRef, sel: &Selector) -> String {
    card.select(sel)
        .next()
        .map(|e| e.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn first_attr(card: &ElementRef, sel: &Selector, attr: &str) -> String {
    card.select(sel)
        .next()
        .and_then(|e| e.value().attr(attr))
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}
