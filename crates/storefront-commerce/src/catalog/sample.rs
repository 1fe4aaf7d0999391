//! The built-in sample catalog.

use crate::catalog::{Badge, Category, Product};
use crate::money::Money;

const PEXELS: &str = "https://images.pexels.com/photos";

fn photo(id: u32, width: u32) -> String {
    format!(
        "{}/{id}/pexels-photo-{id}.jpeg?auto=compress&cs=tinysrgb&w={width}",
        PEXELS
    )
}

/// The six products the storefront ships with.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("1", "Oversized Graphic Tee - Black", Money::new(1299), Category::Tees)
            .with_original_price(Money::new(1999))
            .with_images(photo(1040945, 500), photo(1183266, 500))
            .with_gallery([photo(1040945, 800), photo(1183266, 800), photo(1078958, 800)])
            .with_sizes(["S", "M", "L", "XL", "XXL"])
            .with_rating(4.5, 128)
            .with_details(
                "Premium cotton oversized graphic tee with street-style design",
                "100% Cotton",
                "Machine wash cold",
            )
            .with_badge(Badge::Bestseller)
            .bestseller(),
        Product::new("2", "Casual Linen Shirt - White", Money::new(1899), Category::Shirts)
            .with_original_price(Money::new(2499))
            .with_images(photo(1926769, 500), photo(1040945, 500))
            .with_gallery([photo(1926769, 800)])
            .with_sizes(["S", "M", "L", "XL"])
            .with_rating(4.3, 89)
            .with_details(
                "Breathable linen casual shirt perfect for summer",
                "Pure Linen",
                "Dry clean recommended",
            )
            .with_badge(Badge::New)
            .new_arrival(),
        Product::new("3", "Cargo Joggers - Olive", Money::new(2499), Category::Bottoms)
            .with_images(photo(1598505, 500), photo(1598507, 500))
            .with_gallery([photo(1598505, 800)])
            .with_sizes(["28", "30", "32", "34", "36"])
            .with_rating(4.7, 156)
            .with_details(
                "Utility cargo joggers with multiple pockets",
                "Cotton Twill",
                "Machine wash cold",
            ),
        Product::new("4", "Co-ord Set - Navy Blue", Money::new(3499), Category::CoOrds)
            .with_original_price(Money::new(4999))
            .with_images(photo(1040945, 500), photo(1183266, 500))
            .with_gallery([photo(1040945, 800)])
            .with_sizes(["S", "M", "L", "XL"])
            .with_rating(4.6, 203)
            .with_details(
                "Matching shirt and shorts set for effortless style",
                "Cotton Blend",
                "Machine wash warm",
            )
            .with_badge(Badge::Limited),
        Product::new("5", "Denim Jacket - Light Blue", Money::new(3999), Category::Jackets)
            .with_original_price(Money::new(5499))
            .with_images(photo(1078958, 500), photo(1040945, 500))
            .with_gallery([photo(1078958, 800)])
            .with_sizes(["S", "M", "L", "XL"])
            .with_rating(4.8, 92)
            .with_details(
                "Classic denim jacket with modern fit",
                "100% Denim",
                "Machine wash cold",
            )
            .with_badge(Badge::Trending)
            .bestseller(),
        Product::new("6", "Polo T-Shirt - Black", Money::new(1599), Category::Tees)
            .with_images(photo(1183266, 500), photo(1040945, 500))
            .with_gallery([photo(1183266, 800)])
            .with_sizes(["S", "M", "L", "XL"])
            .with_rating(4.4, 67)
            .with_details(
                "Classic polo t-shirt with premium finish",
                "Cotton Pique",
                "Machine wash cold",
            )
            .new_arrival(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_image_urls() {
        let products = sample_products();
        assert_eq!(
            products[0].image,
            "https://images.pexels.com/photos/1040945/pexels-photo-1040945.jpeg?auto=compress&cs=tinysrgb&w=500"
        );
        assert_eq!(products[0].images.len(), 3);
    }

    #[test]
    fn test_sample_flags() {
        let products = sample_products();
        let new: Vec<&str> = products
            .iter()
            .filter(|p| p.is_new)
            .map(|p| p.id.as_str())
            .collect();
        let best: Vec<&str> = products
            .iter()
            .filter(|p| p.is_bestseller)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(new, vec!["2", "6"]);
        assert_eq!(best, vec!["1", "5"]);
        assert!(products.iter().all(|p| p.in_stock));
    }
}
