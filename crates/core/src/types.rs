use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{StorefrontError, StorefrontResult};

/// Product category universe for the storefront. Closed set: banner
/// targeting and route lookups are validated against these variants rather
/// than matched on raw strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electronics,
    CellPhonesAccessories,
    VideoGames,
    GroceryGourmetFood,
    HealthHousehold,
    HomeKitchen,
    PatioLawnGarden,
    ToolsHomeImprovement,
    OfficeProducts,
    ClothingShoesJewelry,
    SportsOutdoors,
    BeautyPersonalCare,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Electronics,
        Category::CellPhonesAccessories,
        Category::VideoGames,
        Category::GroceryGourmetFood,
        Category::HealthHousehold,
        Category::HomeKitchen,
        Category::PatioLawnGarden,
        Category::ToolsHomeImprovement,
        Category::OfficeProducts,
        Category::ClothingShoesJewelry,
        Category::SportsOutdoors,
        Category::BeautyPersonalCare,
    ];

    /// Human-readable catalog label, as shown in navigation and carried on
    /// banner creatives.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::CellPhonesAccessories => "Cell Phones & Accessories",
            Category::VideoGames => "Video Games",
            Category::GroceryGourmetFood => "Grocery & Gourmet Food",
            Category::HealthHousehold => "Health & Household",
            Category::HomeKitchen => "Home & Kitchen",
            Category::PatioLawnGarden => "Patio, Lawn & Garden",
            Category::ToolsHomeImprovement => "Tools & Home Improvement",
            Category::OfficeProducts => "Office Products",
            Category::ClothingShoesJewelry => "Clothing, Shoes, Jewelry",
            Category::SportsOutdoors => "Sports & Outdoors",
            Category::BeautyPersonalCare => "Beauty & Personal Care",
        }
    }

    /// URL route segment for the category page (`/category/<key>`).
    pub fn route_key(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::CellPhonesAccessories => "cell-phones-accessories",
            Category::VideoGames => "video-games",
            Category::GroceryGourmetFood => "grocery-gourmet-food",
            Category::HealthHousehold => "health-household",
            Category::HomeKitchen => "home-kitchen",
            Category::PatioLawnGarden => "patio-lawn-garden",
            Category::ToolsHomeImprovement => "tools-home-improvement",
            Category::OfficeProducts => "office-products",
            Category::ClothingShoesJewelry => "clothing-shoes-jewelry",
            Category::SportsOutdoors => "sports-outdoors",
            Category::BeautyPersonalCare => "beauty-personal-care",
        }
    }

    /// Resolve a navigation route key to a category. Unknown keys are a
    /// reported error so a typo cannot silently disable banner targeting.
    pub fn from_route_key(key: &str) -> StorefrontResult<Category> {
        Category::ALL
            .into_iter()
            .find(|c| c.route_key() == key)
            .ok_or_else(|| StorefrontError::UnknownCategory(key.to_string()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Placement kind for an ad slot. Closed set defined at startup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlacementKind {
    Popup,
    Banner,
    LeftSidebar,
    RightSidebar,
    BottomBanner,
    CheckoutLeft,
    CheckoutRight,
    Button,
}

/// CSS positioning hint the presentation layer applies to a slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlotPosition {
    Fixed,
    Absolute,
    Relative,
}

/// A named placement location with its geometry. Slots are immutable and
/// defined once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdSlot {
    pub id: String,
    pub kind: PlacementKind,
    /// CSS dimension (`"600px"`, `"100%"`).
    pub width: String,
    pub height: String,
    pub position: Option<SlotPosition>,
    pub z_index: Option<i32>,
}

/// One advertisement catalog entry assigned to a slot. Entries are never
/// mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Creative {
    pub id: String,
    pub slot_id: String,
    pub asset_path: String,
    /// Category this creative is specific to (banner targeting).
    pub target_category: Option<Category>,
    /// Product this creative is specific to.
    pub target_product: Option<String>,
    /// Click destination.
    pub link: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    /// Higher priority creatives are listed first within a slot or category.
    pub priority: i32,
    /// Minimum minutes between impressions of this creative in one session.
    pub frequency_mins: Option<u32>,
    /// Show at most once per session.
    pub show_once: bool,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub alt_text: Option<String>,
    pub caption: Option<String>,
}

impl Creative {
    /// Whether the creative's validity window covers `now`. Entries without
    /// a window are always live.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        if let Some(start) = self.starts_at {
            if now < start {
                return false;
            }
        }
        if let Some(end) = self.ends_at {
            if now > end {
                return false;
            }
        }
        true
    }
}

/// A single customer review as rendered on the product page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub rating: f32,
    pub title: String,
    pub author: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub helpful: u32,
    pub not_helpful: u32,
    pub verified_purchase: bool,
}

/// The three text-bearing product fields the injection pipeline consumes
/// and produces. Computed once per product view and cached by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductContent {
    pub description: String,
    pub shipping: String,
    pub reviews: Vec<Review>,
}

/// Discrete events that can trigger a popup request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TriggerEvent {
    RouteChanged,
    CategoryChanged,
    TimerTick,
    UserClick,
}
