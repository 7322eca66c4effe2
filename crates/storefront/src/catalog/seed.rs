//! Seed catalog.
//!
//! The storefront has no product database. These three phones are the whole
//! catalog for the lifetime of the process.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use shiba_core::{Category, PlanId, Price, ProductId, ReviewId};

use crate::models::{InstallmentPlan, Product, Review};

/// Build the seed catalog, in catalog order.
#[must_use]
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Shiba Pro Max".to_string(),
            price: Price::rupees(29_999),
            image: "https://images.pexels.com/photos/404280/pexels-photo-404280.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
            category: Category::Flagship,
            description: "Premium smartphone with advanced camera and performance".to_string(),
            installment_plans: vec![
                plan(1, 6, 5_166, 31_000, Decimal::new(33, 1)),
                plan(2, 12, 2_666, 32_000, Decimal::new(67, 1)),
                plan(3, 24, 1_416, 34_000, Decimal::new(133, 1)),
            ],
            rating: 4.8,
            reviews: vec![
                review(1, "ShibaLover", 5, "Amazing phone! Love the design", (2024, 1, 15)),
                review(2, "TechUser", 4, "Great performance, good value", (2024, 1, 10)),
            ],
        },
        Product {
            id: ProductId::new(2),
            name: "Shiba Lite".to_string(),
            price: Price::rupees(15_999),
            image: "https://images.pexels.com/photos/1649771/pexels-photo-1649771.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
            category: Category::Budget,
            description: "Affordable smartphone with essential features".to_string(),
            installment_plans: vec![
                plan(4, 6, 2_766, 16_600, Decimal::new(38, 1)),
                plan(5, 12, 1_433, 17_200, Decimal::new(75, 1)),
            ],
            rating: 4.3,
            reviews: vec![review(3, "BudgetBuyer", 4, "Great value for money", (2024, 1, 12))],
        },
        Product {
            id: ProductId::new(3),
            name: "Shiba Gaming".to_string(),
            price: Price::rupees(35_999),
            image: "https://images.pexels.com/photos/163065/mobile-phone-android-apps-phone-163065.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
            category: Category::Gaming,
            description: "High-performance gaming smartphone".to_string(),
            installment_plans: vec![
                plan(6, 12, 3_199, 38_400, Decimal::new(67, 1)),
                plan(7, 24, 1_699, 40_800, Decimal::new(133, 1)),
            ],
            rating: 4.9,
            reviews: vec![review(4, "GamerPro", 5, "Perfect for gaming!", (2024, 1, 8))],
        },
    ]
}

fn plan(id: u32, months: u32, monthly: i64, total: i64, interest_rate: Decimal) -> InstallmentPlan {
    InstallmentPlan {
        id: PlanId::new(id),
        months,
        monthly_payment: Price::rupees(monthly),
        total_amount: Price::rupees(total),
        interest_rate,
    }
}

fn review(id: u32, user_name: &str, rating: u8, comment: &str, (y, m, d): (i32, u32, u32)) -> Review {
    Review {
        id: ReviewId::new(id),
        user_name: user_name.to_string(),
        rating,
        comment: comment.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    }
}
