//! The storefront's shipped ad inventory: slot geometry plus the banner,
//! popup, sidebar, checkout, and button creative tables.

use storefront_core::types::{AdSlot, Category, Creative, PlacementKind, SlotPosition};

use crate::catalog::{slots, AdCatalog};

/// Build the full default catalog.
pub fn default_catalog() -> AdCatalog {
    AdCatalog::new(default_slots(), default_creatives())
}

pub fn default_slots() -> Vec<AdSlot> {
    vec![
        slot(slots::POPUP, PlacementKind::Popup, "600px", "500px", SlotPosition::Fixed, Some(1000)),
        slot(slots::LEFT, PlacementKind::LeftSidebar, "200px", "600px", SlotPosition::Fixed, Some(999)),
        slot(slots::RIGHT, PlacementKind::RightSidebar, "200px", "600px", SlotPosition::Fixed, Some(999)),
        slot(slots::BANNER_TOP, PlacementKind::Banner, "100%", "180px", SlotPosition::Relative, Some(1)),
        slot(slots::BANNER_BOTTOM, PlacementKind::BottomBanner, "100%", "100px", SlotPosition::Relative, None),
        slot(slots::CHECKOUT_LEFT, PlacementKind::CheckoutLeft, "300px", "250px", SlotPosition::Relative, None),
        slot(slots::CHECKOUT_RIGHT, PlacementKind::CheckoutRight, "300px", "250px", SlotPosition::Relative, None),
        slot(slots::BUTTON, PlacementKind::Button, "100%", "50px", SlotPosition::Relative, None),
    ]
}

pub fn default_creatives() -> Vec<Creative> {
    let mut creatives = Vec::new();

    // Category banners, one per storefront category.
    creatives.extend([
        banner("banner-electronics", Category::Electronics, "/ads/banner/Electronics.jpg", "https://scam.com/electronics", "Electronics"),
        banner("banner-phones", Category::CellPhonesAccessories, "/ads/banner/CellPhones.jpg", "https://scam.com/phones", "Cell Phones"),
        banner("banner-video-games", Category::VideoGames, "/ads/banner/VideoGames.jpg", "https://scam.com/video-games", "Video Games"),
        banner("banner-grocery", Category::GroceryGourmetFood, "/ads/banner/GroceryAndGourmet.jpg", "https://scam.com/grocery", "Grocery & Gourmet"),
        banner("banner-health", Category::HealthHousehold, "/ads/banner/HealthAndHousehold.jpg", "https://scam.com/health", "Health & Household"),
        banner("banner-home-kitchen", Category::HomeKitchen, "/ads/banner/HomeAndKitchen.jpg", "https://scam.com/home-kitchen", "Home & Kitchen"),
        banner("banner-garden", Category::PatioLawnGarden, "/ads/banner/PatioLawnGarden.jpg", "https://scam.com/garden", "Patio & Garden"),
        banner("banner-tools", Category::ToolsHomeImprovement, "/ads/banner/ToolsAndHome.jpg", "https://scam.com/tools", "Tools & Home"),
        banner("banner-office", Category::OfficeProducts, "/ads/banner/OfficeProducts.jpg", "https://scam.com/office", "Office Products"),
        banner("banner-clothing", Category::ClothingShoesJewelry, "/ads/banner/ClothingAndShoes.jpg", "https://scam.com/clothing", "Clothing & Shoes"),
        banner("banner-sports", Category::SportsOutdoors, "/ads/banner/SportsAndOutdoors.jpg", "https://scam.com/sports", "Sports & Outdoors"),
        banner("banner-personal-care", Category::BeautyPersonalCare, "/ads/banner/PersonalCare.jpg", "https://scam.com/personal-care", "Personal Care"),
    ]);

    // Popup inventory.
    creatives.extend([
        popup_ad("25-off-popup", "/ads/popup/25off.jpg", "https://scam.com/25off",
            "Limited Time Offer: 25% Off Everything!", "Exclusive Deal - Click Now to Save Big!"),
        popup_ad("2-mins-checkout-popup", "/ads/popup/2minsCheckout.jpg", "https://scam.com/25off",
            "Limited Time Offer: 2 Minutes left to Checkout!", "Exclusive Deal - 2 Minutes left to Checkout!"),
        popup_ad("90-off-popup", "/ads/popup/90off.jpg", "https://scam.com/90off",
            "Limited Time Offer: 90% Off Everything!", "Exclusive Deal - Click Now to Save Big!"),
        popup_ad("bogo-popup", "/ads/popup/BOGO.jpg", "https://scam.com/bogo",
            "Buy One Get One Free Special Offer", "Double Your Purchase - Same Price!"),
        popup_ad("locked-account-popup", "/ads/popup/LockedAccount.jpg", "https://scam.com/account",
            "Account Security Alert", "Your Account Needs Attention - Click to Verify"),
        popup_ad("present-box-popup", "/ads/popup/PresentBox.jpg", "https://scam.com/gift",
            "Special Gift Box Waiting for You", "Claim Your Mystery Gift Now!"),
        popup_ad("spinny-wheel-popup", "/ads/popup/Spinnywheel.jpg", "https://scam.com/spin",
            "Spin the Wheel of Fortune", "Try Your Luck - Win Amazing Prizes!"),
        popup_ad("seasonal-discounts-popup", "/ads/popup/SeasonalDiscount.jpg", "https://scam.com/spin",
            "Seasonal Discounts Available", "Exclusive Offers - Click Now to Save Big!"),
        popup_ad("sale-discounts-popup", "/ads/popup/Sale.jpg", "https://scam.com/spin",
            "Discounts Available", "Exclusive Offers - Click Now to Save Big!"),
    ]);

    // Left and right sidebar rails.
    creatives.extend([
        sidebar("25-off-left", slots::LEFT, "/ads/left/25off.jpg", "https://scam.com/25off",
            "Limited Time Offer: 25% Off Everything!", "Save 25% Today!"),
        sidebar("2-mins-checkout-left", slots::LEFT, "/ads/left/2minsCheckout.jpg", "https://scam.com/checkout",
            "2 Minutes Left to Checkout", "Hurry Up!"),
        sidebar("90-off-left", slots::LEFT, "/ads/left/90off.jpg", "https://scam.com/90off",
            "90% Off Everything", "Massive Savings!"),
        sidebar("bogo-left", slots::LEFT, "/ads/left/BOGO.jpg", "https://scam.com/bogo",
            "Buy One Get One Free", "Double the Value!"),
        sidebar("25-off-right", slots::RIGHT, "/ads/right/25off.jpg", "https://scam.com/25off",
            "Limited Time Offer: 25% Off Everything!", "Save 25% Today!"),
        sidebar("2-mins-checkout-right", slots::RIGHT, "/ads/right/2minsCheckout.jpg", "https://scam.com/checkout",
            "2 Minutes Left to Checkout", "Hurry Up!"),
        sidebar("90-off-right", slots::RIGHT, "/ads/right/90off.jpg", "https://scam.com/90off",
            "90% Off Everything", "Massive Savings!"),
        sidebar("bogo-right", slots::RIGHT, "/ads/right/BOGO.jpg", "https://scam.com/bogo",
            "Buy One Get One Free", "Double the Value!"),
    ]);

    // Checkout rails.
    creatives.extend([
        checkout("checkout-25-off-left", slots::CHECKOUT_LEFT, "/ads/popup/25off.jpg", "https://scam.com/25off",
            "Limited Time Offer: 25% Off Everything!", "Save 25% Today!"),
        checkout("checkout-2-mins-left", slots::CHECKOUT_LEFT, "/ads/popup/2minsCheckout.jpg", "https://scam.com/checkout",
            "2 Minutes Left to Checkout", "Hurry Up!"),
        checkout("checkout-90-off-right", slots::CHECKOUT_RIGHT, "/ads/popup/90off.jpg", "https://scam.com/90off",
            "90% Off Everything", "Massive Savings!"),
        checkout("checkout-bogo-right", slots::CHECKOUT_RIGHT, "/ads/popup/BOGO.jpg", "https://scam.com/bogo",
            "Buy One Get One Free", "Double the Value!"),
    ]);

    // Checkout flow buttons.
    creatives.extend([
        button("button-continue-checkout", "/ads/buttons/continue-checkout.jpg",
            "https://scam.com/checkout", "Continue to Checkout Button"),
        button("button-proceed-checkout", "/ads/buttons/proceed-checkout.jpg",
            "https://scam.com/checkout", "Proceed to Checkout Button"),
    ]);

    creatives
}

fn slot(
    id: &str,
    kind: PlacementKind,
    width: &str,
    height: &str,
    position: SlotPosition,
    z_index: Option<i32>,
) -> AdSlot {
    AdSlot {
        id: id.to_string(),
        kind,
        width: width.to_string(),
        height: height.to_string(),
        position: Some(position),
        z_index,
    }
}

/// Base creative with the defaults every table entry shares.
fn creative(id: &str, slot_id: &str, asset_path: &str, link: &str) -> Creative {
    Creative {
        id: id.to_string(),
        slot_id: slot_id.to_string(),
        asset_path: asset_path.to_string(),
        target_category: None,
        target_product: None,
        link: link.to_string(),
        starts_at: None,
        ends_at: None,
        priority: 1,
        frequency_mins: None,
        show_once: false,
        width: None,
        height: None,
        alt_text: None,
        caption: None,
    }
}

fn banner(id: &str, category: Category, asset_path: &str, link: &str, caption: &str) -> Creative {
    Creative {
        target_category: Some(category),
        width: Some(728),
        height: Some(300),
        alt_text: Some(caption.to_string()),
        caption: Some(caption.to_string()),
        ..creative(id, slots::BANNER_TOP, asset_path, link)
    }
}

fn popup_ad(id: &str, asset_path: &str, link: &str, alt_text: &str, caption: &str) -> Creative {
    Creative {
        width: Some(600),
        height: Some(500),
        alt_text: Some(alt_text.to_string()),
        caption: Some(caption.to_string()),
        ..creative(id, slots::POPUP, asset_path, link)
    }
}

fn sidebar(id: &str, slot_id: &str, asset_path: &str, link: &str, alt_text: &str, caption: &str) -> Creative {
    Creative {
        width: Some(200),
        height: Some(600),
        alt_text: Some(alt_text.to_string()),
        caption: Some(caption.to_string()),
        ..creative(id, slot_id, asset_path, link)
    }
}

fn checkout(id: &str, slot_id: &str, asset_path: &str, link: &str, alt_text: &str, caption: &str) -> Creative {
    Creative {
        width: Some(300),
        height: Some(250),
        alt_text: Some(alt_text.to_string()),
        caption: Some(caption.to_string()),
        ..creative(id, slot_id, asset_path, link)
    }
}

fn button(id: &str, asset_path: &str, link: &str, alt_text: &str) -> Creative {
    Creative {
        alt_text: Some(alt_text.to_string()),
        ..creative(id, slots::BUTTON, asset_path, link)
    }
}
