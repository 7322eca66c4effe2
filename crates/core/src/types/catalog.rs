//! Catalog classification and ordering enums.

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a known product category.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

/// Product category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Flagship,
    Budget,
    Gaming,
    /// Listed on the categories page; the seed catalog has no accessories.
    Accessories,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Self; 4] = [
        Self::Flagship,
        Self::Budget,
        Self::Gaming,
        Self::Accessories,
    ];

    /// Identifier used in URLs and filters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flagship => "flagship",
            Self::Budget => "budget",
            Self::Gaming => "gaming",
            Self::Accessories => "accessories",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Flagship => "Flagship",
            Self::Budget => "Budget",
            Self::Gaming => "Gaming",
            Self::Accessories => "Accessories",
        }
    }

    /// Heading used on the categories page.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Flagship => "Flagship Phones",
            Self::Budget => "Budget-Friendly",
            Self::Gaming => "Gaming Phones",
            Self::Accessories => "Accessories",
        }
    }

    /// One-line blurb shown under the title.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Flagship => "Premium smartphones with cutting-edge features",
            Self::Budget => "Great value phones for everyday use",
            Self::Gaming => "High-performance devices for mobile gaming",
            Self::Accessories => "Cases, chargers, and more",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flagship" => Ok(Self::Flagship),
            "budget" => Ok(Self::Budget),
            "gaming" => Ok(Self::Gaming),
            "accessories" => Ok(Self::Accessories),
            _ => Err(ParseCategoryError(s.to_owned())),
        }
    }
}

/// Category selection applied to the catalog.
///
/// Any string is accepted. An id outside the known set is kept as
/// [`CategoryFilter::Unknown`] and simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    Unknown(String),
}

impl CategoryFilter {
    /// Identifier that selects every category.
    pub const ALL_ID: &'static str = "all";

    /// Interpret a category id. Never fails.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s == Self::ALL_ID {
            return Self::All;
        }
        s.parse()
            .map_or_else(|_| Self::Unknown(s.to_owned()), Self::Only)
    }

    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
            Self::Unknown(_) => false,
        }
    }

    /// Identifier form of this filter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::ALL_ID,
            Self::Only(category) => category.as_str(),
            Self::Unknown(id) => id,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_owned()
    }
}

/// Catalog sort order.
///
/// Serialized as its select-box value (see [`SortKey::as_str`]).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    #[default]
    NameAsc,
    PriceAsc,
    PriceDesc,
    RatingDesc,
}

impl SortKey {
    /// Parse from a select-box value. Unrecognized values sort by name.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price-low" | "price-asc" | "price-ascending" => Self::PriceAsc,
            "price-high" | "price-desc" | "price-descending" => Self::PriceDesc,
            "rating" | "rating-desc" | "rating-descending" => Self::RatingDesc,
            _ => Self::NameAsc,
        }
    }

    /// Select-box value for this sort order.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NameAsc => "name",
            Self::PriceAsc => "price-low",
            Self::PriceDesc => "price-high",
            Self::RatingDesc => "rating",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NameAsc => "Name",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::RatingDesc => "Highest Rated",
        }
    }
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_owned()
    }
}
