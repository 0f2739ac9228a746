//! Built-in sample catalog. The catalog is rebuilt on every start and is never
//! written to the persisted blob.

use crate::models::Product;

const IMAGE_BASE: &str = "https://via.placeholder.com/300x200";

pub fn sample_products() -> Vec<Product> {
    let samples = [
        (1, "iPhone 15 Pro", 8999, "3498db", "The latest iPhone with a powerful chip", 50),
        (2, "MacBook Air", 12999, "e74c3c", "Thin and light laptop", 30),
        (3, "AirPods Pro", 1999, "2ecc71", "Wireless noise-cancelling earbuds", 100),
        (4, "iPad Pro", 7999, "9b59b6", "Pro-grade tablet", 25),
        (5, "Apple Watch", 2999, "f39c12", "Smart watch", 80),
        (6, "HomePod mini", 749, "34495e", "Smart speaker", 60),
    ];

    samples
        .into_iter()
        .map(|(id, name, price, color, description, stock)| Product {
            id,
            name: name.to_string(),
            price,
            image_url: placeholder_image(name, color),
            category: "Electronics".to_string(),
            description: description.to_string(),
            stock,
        })
        .collect()
}

fn placeholder_image(name: &str, color: &str) -> String {
    format!("{IMAGE_BASE}/{color}/ffffff?text={}", name.replace(' ', "+"))
}
