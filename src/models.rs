//! Frontend Models
//!
//! Data structures matching the menu API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Menu category (fixed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Drinks,
}

impl Category {
    /// All categories in display order. The first one is the form default.
    pub const ALL: [Category; 4] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Drinks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Drinks => "Drinks",
        }
    }

    /// Parse a `<select>` value; unknown values give `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    /// CSS class for the category badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            Category::Breakfast => "badge badge-breakfast",
            Category::Lunch => "badge badge-lunch",
            Category::Dinner => "badge badge-dinner",
            Category::Drinks => "badge badge-drinks",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::ALL[0]
    }
}

/// Menu item as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

impl MenuItem {
    /// Editable fields of this item
    pub fn input(&self) -> MenuItemInput {
        MenuItemInput {
            name: self.name.clone(),
            category: self.category,
            price: self.price,
            available: self.available,
        }
    }

    pub fn price_label(&self) -> String {
        format_price(self.price)
    }

    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Unavailable"
        }
    }
}

/// Create/update payload. Update replaces all four fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemInput {
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub available: bool,
}

/// Two-decimal price without currency symbol
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_from_json() {
        let json = r#"{"id":"1","name":"Tea","category":"Drinks","price":2.5,"available":true,"created_at":"2024-01-01T00:00:00Z"}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.id, "1");
        assert_eq!(item.name, "Tea");
        assert_eq!(item.category, Category::Drinks);
        assert_eq!(item.price_label(), "2.50");
        assert_eq!(item.availability_label(), "Available");
        assert_eq!(item.created_at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = r#"{"id":"1","name":"Tea","category":"Snacks","price":2.5,"available":true,"created_at":"2024-01-01T00:00:00Z"}"#;
        assert!(serde_json::from_str::<MenuItem>(json).is_err());
    }

    #[test]
    fn test_input_serializes_wire_names() {
        let input = MenuItemInput {
            name: "Pancakes".to_string(),
            category: Category::Breakfast,
            price: 4.0,
            available: false,
        };
        let value = serde_json::to_value(&input).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "Pancakes",
                "category": "Breakfast",
                "price": 4.0,
                "available": false
            })
        );
    }

    #[test]
    fn test_category_parse_and_default() {
        assert_eq!(Category::default(), Category::Breakfast);
        for c in Category::ALL {
            assert_eq!(Category::parse(c.as_str()), Some(c));
        }
        assert_eq!(Category::parse("breakfast"), None);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(12.346), "12.35");
        assert_eq!(format_price(7.0), "7.00");
    }
}
