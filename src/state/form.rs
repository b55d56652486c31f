//! Item Form State
//!
//! Field values, validation, and the single in-flight submit guard shared by
//! create and edit.

use thiserror::Error;

use crate::models::{Category, MenuItem, MenuItemInput};

/// Create a new item, or edit an existing one
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(MenuItem),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Add New Dish",
            FormMode::Edit(_) => "Edit Dish",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "+ Add to Menu",
            FormMode::Edit(_) => "✓ Update Dish",
        }
    }
}

/// Reasons a submit is refused before reaching the network
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Food name is required")]
    NameRequired,
    #[error("Price must be greater than 0")]
    PriceNotPositive,
    #[error("Already saving")]
    Busy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    mode: FormMode,
    pub name: String,
    pub category: Category,
    /// Raw text of the price input
    pub price_text: String,
    pub available: bool,
    submitting: bool,
}

impl FormState {
    pub fn new(mode: FormMode) -> Self {
        let (name, category, price_text, available) = match &mode {
            FormMode::Create => (String::new(), Category::default(), String::new(), true),
            FormMode::Edit(item) => (
                item.name.clone(),
                item.category,
                item.price.to_string(),
                item.available,
            ),
        };
        Self {
            mode,
            name,
            category,
            price_text,
            available,
            submitting: false,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Parsed price. Unparseable or non-finite text counts as 0.
    pub fn price(&self) -> f64 {
        match self.price_text.trim().parse::<f64>() {
            Ok(p) if p.is_finite() => p,
            _ => 0.0,
        }
    }

    /// Select a category by its `<select>` value; unknown values are ignored
    pub fn set_category(&mut self, value: &str) {
        if let Some(category) = Category::parse(value) {
            self.category = category;
        }
    }

    pub fn validate(&self) -> Result<MenuItemInput, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::NameRequired);
        }
        let price = self.price();
        if price <= 0.0 {
            return Err(FormError::PriceNotPositive);
        }
        Ok(MenuItemInput {
            name: self.name.clone(),
            category: self.category,
            price,
            available: self.available,
        })
    }

    /// Validate and enter the submitting state
    pub fn begin_submit(&mut self) -> Result<MenuItemInput, FormError> {
        if self.submitting {
            return Err(FormError::Busy);
        }
        let input = self.validate()?;
        self.submitting = true;
        Ok(input)
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::memory::timestamp;

    fn burger() -> MenuItem {
        MenuItem {
            id: "7".to_string(),
            name: "Burger".to_string(),
            category: Category::Dinner,
            price: 12.0,
            available: false,
            created_at: timestamp(7),
        }
    }

    fn filled(price: &str) -> FormState {
        let mut form = FormState::new(FormMode::Create);
        form.name = "Omelette".to_string();
        form.price_text = price.to_string();
        form
    }

    #[test]
    fn test_create_defaults() {
        let form = FormState::new(FormMode::Create);
        assert_eq!(form.name, "");
        assert_eq!(form.category, Category::Breakfast);
        assert_eq!(form.price(), 0.0);
        assert!(form.available);
        assert!(!form.is_submitting());
        assert_eq!(form.mode().title(), "Add New Dish");
    }

    #[test]
    fn test_edit_prefills_from_item() {
        let form = FormState::new(FormMode::Edit(burger()));
        assert_eq!(form.validate(), Ok(burger().input()));
        assert_eq!(form.price_text, "12");
        assert!(form.mode().is_edit());
        assert_eq!(form.mode().submit_label(), "✓ Update Dish");
    }

    #[test]
    fn test_bad_prices_rejected() {
        for text in ["0", "0.00", "-3", "abc", "", "NaN", "inf"] {
            let mut form = filled(text);
            assert_eq!(
                form.begin_submit(),
                Err(FormError::PriceNotPositive),
                "price {:?}",
                text
            );
            assert!(!form.is_submitting());
        }
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut form = filled("3.50");
        form.name = "   ".to_string();
        assert_eq!(form.begin_submit(), Err(FormError::NameRequired));
    }

    #[test]
    fn test_valid_submit_and_busy_guard() {
        let mut form = filled(" 3.5 ");
        form.set_category("Lunch");
        form.available = false;

        let input = form.begin_submit().unwrap();
        assert_eq!(
            input,
            MenuItemInput {
                name: "Omelette".to_string(),
                category: Category::Lunch,
                price: 3.5,
                available: false,
            }
        );
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(FormError::Busy));

        form.finish_submit();
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_unknown_category_ignored() {
        let mut form = FormState::new(FormMode::Create);
        form.set_category("Dessert");
        assert_eq!(form.category, Category::Breakfast);
    }
}
