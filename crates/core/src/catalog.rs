//! Fixed product catalog.
//!
//! The catalog is seeded once at load time and is read-only for the life of
//! the process. There is no inventory tracking; every listed size is always
//! available.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// A catalog product.
///
/// Cart lines carry a clone of the product taken at add time, so a `Product`
/// must stay cheap to copy and self-contained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in BRL. Never negative.
    pub price: Decimal,
    /// Image URL for grid and detail views.
    pub image: String,
    pub description: String,
    /// Available size labels, in display order. Never empty.
    pub sizes: Vec<String>,
    /// Shown in the "Favoritos da Semana" section on the home page.
    #[serde(default)]
    pub featured: bool,
    /// Optional badge text rendered over the product image.
    #[serde(default)]
    pub badge: Option<String>,
}

/// The in-memory product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// All products in display order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products flagged for the featured section.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.featured)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: seed_products(),
        }
    }
}

/// The size run every CIALU piece is cut in.
fn standard_sizes() -> Vec<String> {
    ["PP", "P", "M", "G", "GG", "XG"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn product(id: i32, name: &str, price_cents: i64, image: &str, description: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Decimal::new(price_cents, 2),
        image: image.to_string(),
        description: description.to_string(),
        sizes: standard_sizes(),
        featured: false,
        badge: None,
    }
}

fn featured(mut p: Product, badge: &str) -> Product {
    p.featured = true;
    p.badge = Some(badge.to_string());
    p
}

/// The eight pieces of the current collection.
fn seed_products() -> Vec<Product> {
    vec![
        featured(
            product(
                1,
                "Vestido Elegante Preto",
                29990,
                "https://images.unsplash.com/photo-1539008835657-9e8e9680c956?w=400&h=600&fit=crop",
                "Vestido elegante perfeito para ocasiões especiais",
            ),
            "✨ Mais Amado",
        ),
        featured(
            product(
                2,
                "Blusa Sofisticada Branca",
                18990,
                "https://images.unsplash.com/photo-1551803091-e20673f15770?w=400&h=600&fit=crop",
                "Blusa branca com corte moderno e elegante",
            ),
            "💎 Edição Limitada",
        ),
        featured(
            product(
                3,
                "Saia Midi Preta",
                15990,
                "https://images.unsplash.com/photo-1594633313593-bab3825d0caf?w=400&h=600&fit=crop",
                "Saia midi com design clássico e atemporal",
            ),
            "✨ Mais Amado",
        ),
        featured(
            product(
                4,
                "Conjunto Social Feminino",
                44990,
                "https://images.unsplash.com/photo-1551803091-e20673f15770?w=400&h=600&fit=crop",
                "Conjunto completo para look profissional",
            ),
            "💎 Edição Limitada",
        ),
        product(
            5,
            "Vestido Longo Branco",
            34990,
            "https://images.unsplash.com/photo-1551803091-e20673f15770?w=400&h=600&fit=crop",
            "Vestido longo ideal para eventos especiais",
        ),
        product(
            6,
            "Blazer Feminino Premium",
            27990,
            "https://images.unsplash.com/photo-1594633313593-bab3825d0caf?w=400&h=600&fit=crop",
            "Blazer de alta qualidade com acabamento impecável",
        ),
        product(
            7,
            "Calça Social Preta",
            21990,
            "https://images.unsplash.com/photo-1539008835657-9e8e9680c956?w=400&h=600&fit=crop",
            "Calça social com modelagem perfeita",
        ),
        product(
            8,
            "Top Elegante",
            12990,
            "https://images.unsplash.com/photo-1594633313593-bab3825d0caf?w=400&h=600&fit=crop",
            "Top com design moderno e sofisticado",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_seeds_eight_products() {
        let catalog = Catalog::default();
        assert_eq!(catalog.all().len(), 8);
    }

    #[test]
    fn test_catalog_ids_are_unique_and_stable() {
        let catalog = Catalog::default();
        for (i, p) in catalog.all().iter().enumerate() {
            assert_eq!(p.id, ProductId::new(i32::try_from(i).unwrap() + 1));
        }
    }

    #[test]
    fn test_catalog_get() {
        let catalog = Catalog::default();
        let p = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(p.name, "Vestido Elegante Preto");
        assert_eq!(p.price, Decimal::new(29990, 2));

        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_catalog_featured_carry_badges() {
        let catalog = Catalog::default();
        let featured: Vec<_> = catalog.featured().collect();
        assert_eq!(featured.len(), 4);
        assert!(featured.iter().all(|p| p.badge.is_some()));
    }

    #[test]
    fn test_every_product_has_sizes() {
        let catalog = Catalog::default();
        assert!(catalog.all().iter().all(|p| !p.sizes.is_empty()));
    }
}
