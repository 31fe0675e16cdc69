//! Menu item domain model.
//!
//! # Responsibility
//! - Define the priced catalog record every order line is copied from.
//! - Carry category-specific descriptive data without touching pricing.
//!
//! # Invariants
//! - `name` is non-empty, trimmed, free of control characters and at most
//!   [`MAX_NAME_CHARS`] characters.
//! - `price` is a non-negative whole amount (enforced by `Price = u64`).
//! - Items are immutable once constructed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Whole-unit price in the menu currency.
pub type Price = u64;

/// Longest accepted item name, in characters.
pub const MAX_NAME_CHARS: usize = 80;

static PRINTABLE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\p{Cc}]+$").expect("valid printable name regex"));

/// Serving temperature for soups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Temperature {
    Hot,
    Cold,
}

impl Temperature {
    /// Numeric kitchen code: `1` hot, `2` cold.
    pub fn code(self) -> u8 {
        match self {
            Self::Hot => 1,
            Self::Cold => 2,
        }
    }
}

/// Category of a menu item plus its one descriptive attribute.
///
/// The attribute is informational only; every category prices and
/// discounts identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ItemKind {
    Plain,
    Drink { volume_ml: u32 },
    MainDish { ingredients: Vec<String> },
    Dessert { weight_g: u32 },
    Salad { container: String },
    Soup { temperature: Temperature },
    Breakfast { portions: u32 },
}

impl ItemKind {
    /// Stable snake_case category name, matching the serialized tag.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Drink { .. } => "drink",
            Self::MainDish { .. } => "main_dish",
            Self::Dessert { .. } => "dessert",
            Self::Salad { .. } => "salad",
            Self::Soup { .. } => "soup",
            Self::Breakfast { .. } => "breakfast",
        }
    }
}

/// Named, priced catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MenuItemRecord")]
pub struct MenuItem {
    name: String,
    price: Price,
    #[serde(flatten)]
    kind: ItemKind,
}

#[derive(Deserialize)]
struct MenuItemRecord {
    name: String,
    price: Price,
    #[serde(flatten)]
    kind: ItemKind,
}

impl TryFrom<MenuItemRecord> for MenuItem {
    type Error = MenuItemValidationError;

    fn try_from(value: MenuItemRecord) -> Result<Self, Self::Error> {
        Self::with_kind(value.name, value.price, value.kind)
    }
}

impl MenuItem {
    /// Creates an uncategorized item.
    pub fn new(name: impl Into<String>, price: Price) -> Result<Self, MenuItemValidationError> {
        Self::with_kind(name, price, ItemKind::Plain)
    }

    /// Creates an item of an explicit kind after validating the name.
    pub fn with_kind(
        name: impl Into<String>,
        price: Price,
        kind: ItemKind,
    ) -> Result<Self, MenuItemValidationError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { name, price, kind })
    }

    /// Drink served in `volume_ml` millilitres.
    pub fn drink(
        name: impl Into<String>,
        price: Price,
        volume_ml: u32,
    ) -> Result<Self, MenuItemValidationError> {
        Self::with_kind(name, price, ItemKind::Drink { volume_ml })
    }

    pub fn main_dish<I, S>(
        name: impl Into<String>,
        price: Price,
        ingredients: I,
    ) -> Result<Self, MenuItemValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ingredients = ingredients.into_iter().map(Into::into).collect();
        Self::with_kind(name, price, ItemKind::MainDish { ingredients })
    }

    /// Dessert portion weighing `weight_g` grams.
    pub fn dessert(
        name: impl Into<String>,
        price: Price,
        weight_g: u32,
    ) -> Result<Self, MenuItemValidationError> {
        Self::with_kind(name, price, ItemKind::Dessert { weight_g })
    }

    pub fn salad(
        name: impl Into<String>,
        price: Price,
        container: impl Into<String>,
    ) -> Result<Self, MenuItemValidationError> {
        let container = container.into();
        Self::with_kind(name, price, ItemKind::Salad { container })
    }

    pub fn soup(
        name: impl Into<String>,
        price: Price,
        temperature: Temperature,
    ) -> Result<Self, MenuItemValidationError> {
        Self::with_kind(name, price, ItemKind::Soup { temperature })
    }

    /// Breakfast plate made of `portions` units.
    pub fn breakfast(
        name: impl Into<String>,
        price: Price,
        portions: u32,
    ) -> Result<Self, MenuItemValidationError> {
        Self::with_kind(name, price, ItemKind::Breakfast { portions })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn category(&self) -> &'static str {
        self.kind.category()
    }
}

fn validate_name(name: &str) -> Result<(), MenuItemValidationError> {
    if name.trim().is_empty() {
        return Err(MenuItemValidationError::EmptyName);
    }
    if name.trim() != name {
        return Err(MenuItemValidationError::UntrimmedName(name.to_string()));
    }
    if !PRINTABLE_NAME_RE.is_match(name) {
        return Err(MenuItemValidationError::InvalidNameCharacters(
            name.escape_debug().to_string(),
        ));
    }
    let len = name.chars().count();
    if len > MAX_NAME_CHARS {
        return Err(MenuItemValidationError::NameTooLong {
            len,
            max: MAX_NAME_CHARS,
        });
    }
    Ok(())
}

/// Rejected menu item input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItemValidationError {
    EmptyName,
    UntrimmedName(String),
    InvalidNameCharacters(String),
    NameTooLong { len: usize, max: usize },
}

impl Display for MenuItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "menu item name must not be empty"),
            Self::UntrimmedName(name) => write!(
                f,
                "menu item name must not start or end with whitespace: `{name}`"
            ),
            Self::InvalidNameCharacters(name) => {
                write!(f, "menu item name contains control characters: `{name}`")
            }
            Self::NameTooLong { len, max } => {
                write!(f, "menu item name is {len} characters long (max {max})")
            }
        }
    }
}

impl Error for MenuItemValidationError {}
