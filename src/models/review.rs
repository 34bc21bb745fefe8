// src/models/review.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Star rating between 1 and 5 inclusive.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("rating must be between 1 and 5, got {0}")]
pub struct InvalidRating(pub u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Every level, best first, in the order the form lists them.
    pub fn scale() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).rev().map(Rating)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            5 => "Excellent",
            4 => "Good",
            3 => "Average",
            2 => "Poor",
            _ => "Terrible",
        }
    }

    /// Filled stars followed by empty ones, always five glyphs.
    pub fn stars(self) -> String {
        let filled = usize::from(self.0);
        let empty = usize::from(Self::MAX) - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }

    /// Whether star number `index` (zero based) is lit.
    pub fn is_filled(self, index: u8) -> bool {
        index < self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = InvalidRating;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(InvalidRating(value))
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.stars(), self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,                   // Identifier used in the /reviews/:id link
    pub title: String,
    pub content: String,
    pub rating: Rating,
    pub product_name: Option<String>, // Product or service being reviewed
    pub created_at: DateTime<Utc>,
    pub author: Option<String>,       // Display name, None for anonymous posts
}

impl Review {
    pub fn author_display(&self) -> &str {
        self.author
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or("Anonymous")
    }

    /// "Product: …" line for the card, or nothing when no product was named.
    pub fn product_label(&self) -> Option<String> {
        self.product_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| format!("Product: {}", name))
    }
}

/// Values collected by the submission form. Nothing consumes them yet.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ReviewDraft {
    pub title: String,
    pub product_name: Option<String>,
    pub rating: Option<Rating>,
    pub content: String,
}

impl ReviewDraft {
    /// Builds a draft from the raw form values. A blank product name is dropped,
    /// and a rating value that is not one of the five levels counts as unselected.
    pub fn from_fields(
        title: String,
        product_name: String,
        rating_value: &str,
        content: String,
    ) -> Self {
        let rating = rating_value
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(|value| Rating::try_from(value).ok());
        Self {
            title,
            product_name: (!product_name.trim().is_empty()).then_some(product_name),
            rating,
            content,
        }
    }
}

/// Stand-in for fetching reviews until there is a backend to fetch them from.
pub fn mock_reviews() -> Vec<Review> {
    let now = Utc::now();
    vec![
        Review {
            id: "1".into(),
            title: "Great Product!".into(),
            content: "This product exceeded my expectations. Highly recommended for anyone looking for quality.".into(),
            rating: Rating(5),
            product_name: Some("Laptop Stand".into()),
            created_at: now,
            author: Some("John Doe".into()),
        },
        Review {
            id: "2".into(),
            title: "Good but could be better".into(),
            content: "Decent quality but there are a few issues with the build quality. Still usable though.".into(),
            rating: Rating(3),
            product_name: Some("Wireless Mouse".into()),
            created_at: now,
            author: Some("Jane Smith".into()),
        },
    ]
}

pub fn find_mock_review(id: &str) -> Option<Review> {
    mock_reviews().into_iter().find(|review| review.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_has_five_levels_from_best_to_worst() {
        let values: Vec<u8> = Rating::scale().map(Rating::value).collect();
        assert_eq!(values, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn out_of_range_ratings_are_rejected() {
        assert_eq!(Rating::try_from(0), Err(InvalidRating(0)));
        assert_eq!(Rating::try_from(6), Err(InvalidRating(6)));
        assert!(serde_json::from_str::<Rating>("9").is_err());
        assert_eq!(serde_json::from_str::<Rating>("4").unwrap().value(), 4);
    }

    #[test]
    fn labels_match_the_form_options() {
        let labels: Vec<String> = Rating::scale().map(|r| r.to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "★★★★★ - Excellent",
                "★★★★☆ - Good",
                "★★★☆☆ - Average",
                "★★☆☆☆ - Poor",
                "★☆☆☆☆ - Terrible",
            ]
        );
    }

    #[test]
    fn mock_data_has_the_two_known_reviews() {
        let reviews = mock_reviews();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].title, "Great Product!");
        assert_eq!(reviews[0].rating.value(), 5);
        assert_eq!(reviews[1].title, "Good but could be better");
        assert_eq!(reviews[1].rating.value(), 3);
        assert!(find_mock_review("2").is_some());
        assert!(find_mock_review("3").is_none());
    }

    #[test]
    fn draft_keeps_filled_in_fields() {
        let draft = ReviewDraft::from_fields(
            "Solid".into(),
            "Desk Lamp".into(),
            "4",
            "Bright enough.".into(),
        );
        assert_eq!(draft.title, "Solid");
        assert_eq!(draft.product_name.as_deref(), Some("Desk Lamp"));
        assert_eq!(draft.rating.map(Rating::value), Some(4));
        assert_eq!(draft.content, "Bright enough.");
    }

    #[test]
    fn draft_drops_blank_product_and_unknown_rating() {
        for rating_value in ["", "7", "0", "five"] {
            let draft = ReviewDraft::from_fields(
                "t".into(),
                "   ".into(),
                rating_value,
                "c".into(),
            );
            assert_eq!(draft.product_name, None);
            assert_eq!(draft.rating, None, "rating value {:?}", rating_value);
        }
    }

    #[test]
    fn empty_product_name_has_no_label() {
        let mut review = mock_reviews().remove(0);
        assert_eq!(review.product_label().as_deref(), Some("Product: Laptop Stand"));
        review.product_name = Some(String::new());
        assert_eq!(review.product_label(), None);
        review.product_name = None;
        assert_eq!(review.product_label(), None);
    }

    #[test]
    fn missing_author_is_shown_as_anonymous() {
        let mut review = mock_reviews().remove(0);
        assert_eq!(review.author_display(), "John Doe");
        review.author = None;
        assert_eq!(review.author_display(), "Anonymous");
        review.author = Some(String::new());
        assert_eq!(review.author_display(), "Anonymous");
    }
}
