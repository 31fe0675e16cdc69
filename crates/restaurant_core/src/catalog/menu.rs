//! Menu catalog.
//!
//! # Invariants
//! - Item names are unique within one menu.
//! - Items keep the order they were listed in.

use crate::model::menu_item::{MenuItem, MenuItemValidationError, Temperature};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Ordered collection of uniquely named menu items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Builds a menu, rejecting duplicate item names.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, MenuError> {
        let mut seen = BTreeSet::new();
        for item in &items {
            if !seen.insert(item.name()) {
                return Err(MenuError::DuplicateName(item.name().to_string()));
            }
        }
        Ok(Self { items })
    }

    /// The house menu of Colombian dishes.
    pub fn colombian() -> Result<Self, MenuError> {
        let items = vec![
            MenuItem::drink("Café", 2_000, 200)?,
            MenuItem::drink("Jugo de Lulo", 2_500, 250)?,
            MenuItem::drink("Agua de panela", 1_500, 300)?,
            MenuItem::main_dish("Arepa con queso", 8_000, ["arepa", "queso"])?,
            MenuItem::main_dish(
                "Bandeja Paisa",
                25_000,
                ["arroz", "frijoles", "huevo", "carne", "chicharrón", "aguacate"],
            )?,
            MenuItem::main_dish(
                "Sancocho de gallina",
                15_000,
                ["gallina", "yuca", "papas", "plátano"],
            )?,
            MenuItem::main_dish("Ajiaco", 18_000, ["pollo", "papas", "mazorca", "guasca"])?,
            MenuItem::main_dish("Empanadas", 3_500, ["harina de maíz", "carne", "papas"])?,
            MenuItem::main_dish(
                "Bandeja De Pescado",
                22_000,
                ["arroz", "pescado frito", "patacones", "ensalada", "aguacate"],
            )?,
            MenuItem::main_dish(
                "Tamales",
                7_000,
                ["masa de maíz", "carne", "pollo", "papa", "zanahoria"],
            )?,
            MenuItem::dessert("Arroz con Leche", 3_500, 200)?,
            MenuItem::dessert("Pastel Tres Leches", 5_000, 180)?,
            MenuItem::dessert("Torta de Guanábana", 4_500, 150)?,
            MenuItem::salad("Ensalada Mixta", 4_000, "tazón")?,
            MenuItem::salad("Ensalada de Pasta", 5_000, "plato")?,
            MenuItem::soup("Sopa de Lentejas", 6_000, Temperature::Hot)?,
            MenuItem::soup("Sopa de Carne", 8_000, Temperature::Hot)?,
            MenuItem::soup("Sopa de Vegetales", 7_000, Temperature::Hot)?,
            MenuItem::breakfast("Arepas con Huevo", 5_000, 2)?,
            MenuItem::breakfast("Calentado", 7_000, 1)?,
            MenuItem::breakfast("Empanadas con Aji", 4_500, 3)?,
        ];
        Self::new(items)
    }

    /// Looks an item up by exact name.
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name() == name)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Items whose category tag equals `category` (e.g. `"drink"`).
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a MenuItem> + 'a {
        self.items
            .iter()
            .filter(move |item| item.category() == category)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Rejected menu construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    InvalidItem(MenuItemValidationError),
    DuplicateName(String),
}

impl Display for MenuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidItem(err) => write!(f, "{err}"),
            Self::DuplicateName(name) => write!(f, "menu lists `{name}` more than once"),
        }
    }
}

impl Error for MenuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidItem(err) => Some(err),
            Self::DuplicateName(_) => None,
        }
    }
}

impl From<MenuItemValidationError> for MenuError {
    fn from(value: MenuItemValidationError) -> Self {
        Self::InvalidItem(value)
    }
}
