//! Catalog side of a recommendation: where focal and candidate products come from.

use std::fmt::Debug;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    config::RankerConfig,
    document::Document,
    error::{RankError, Result},
    ranker::SimilarityRanker,
};

/// A catalog item as the store sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product<K> {
    pub id: K,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl<K: Clone> From<&Product<K>> for Document<K> {
    fn from(product: &Product<K>) -> Self {
        Document {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
        }
    }
}

/// Source of focal and candidate products.
///
/// The ranker does no availability or identity filtering of its own;
/// implementations of this trait do it.
pub trait CatalogStore<K> {
    /// Look up one product by id, available or not
    fn focal(&self, id: &K) -> Option<Product<K>>;

    /// Available products other than `focal_id`, in catalog order
    fn candidates_for(&self, focal_id: &K) -> Vec<Product<K>>;

    /// Every available product, in catalog order
    fn available(&self) -> Vec<Product<K>>;
}

/// Catalog kept in memory, in insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog<K> {
    products: Vec<Product<K>>,
}

impl<K> InMemoryCatalog<K> {
    pub fn new(products: Vec<Product<K>>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product<K>] {
        &self.products
    }
}

impl<K> InMemoryCatalog<K>
where
    K: for<'de> Deserialize<'de>,
{
    /// Parse a JSON array of products
    pub fn from_json_str(json: &str) -> Result<Self> {
        let products: Vec<Product<K>> = serde_json::from_str(json)?;
        Ok(Self::new(products))
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&raw)?;
        info!(path = %path.as_ref().display(), products = catalog.len(), "loaded catalog");
        Ok(catalog)
    }
}

impl<K> CatalogStore<K> for InMemoryCatalog<K>
where
    K: Clone + PartialEq,
{
    fn focal(&self, id: &K) -> Option<Product<K>> {
        self.products.iter().find(|p| &p.id == id).cloned()
    }

    fn candidates_for(&self, focal_id: &K) -> Vec<Product<K>> {
        self.products
            .iter()
            .filter(|p| p.is_available && &p.id != focal_id)
            .cloned()
            .collect()
    }

    fn available(&self) -> Vec<Product<K>> {
        self.products.iter().filter(|p| p.is_available).cloned().collect()
    }
}

/// Glue for a product-detail page: fetch, rank, map back to products.
#[derive(Debug, Clone)]
pub struct Recommender<C> {
    store: C,
    ranker: SimilarityRanker,
    top_k: usize,
}

impl<C> Recommender<C> {
    pub fn new(store: C, config: &RankerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store,
            ranker: SimilarityRanker::new(config),
            top_k: config.top_k,
        })
    }

    pub fn store(&self) -> &C {
        &self.store
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Up to `top_k` products similar to `focal_id`, best first
    pub fn recommend_for<K>(&self, focal_id: &K) -> Result<Vec<(Product<K>, f64)>>
    where
        C: CatalogStore<K>,
        K: Clone + Debug,
    {
        let focal = self
            .store
            .focal(focal_id)
            .ok_or_else(|| RankError::NotFound(format!("product {:?}", focal_id)))?;
        let candidates = self.store.candidates_for(focal_id);
        let docs: Vec<Document<K>> = candidates.iter().map(Document::from).collect();

        let hits = self.ranker.rank(&Document::from(&focal), &docs, self.top_k)?;
        debug!(focal = ?focal_id, recommended = hits.len(), "recommendations ready");
        Ok(hits
            .into_iter()
            .map(|hit| (candidates[hit.key].clone(), hit.score))
            .collect())
    }

    /// Rank the whole available catalog against free text
    pub fn recommend_for_text<K>(&self, text: &str) -> Result<Vec<(Product<K>, f64)>>
    where
        C: CatalogStore<K>,
        K: Clone,
    {
        let candidates = self.store.available();
        let texts: Vec<String> = candidates
            .iter()
            .map(|p| Document::from(p).text())
            .collect();
        let hits = self.ranker.rank_texts(text, &texts, self.top_k)?;
        Ok(hits
            .into_iter()
            .map(|hit| (candidates[hit.key].clone(), hit.score))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        {"id": 1, "name": "Red leather shoes", "description": "Hand stitched leather"},
        {"id": 2, "name": "Blue cotton shirt", "description": null},
        {"id": 3, "name": "Red leather belt", "description": "Matching leather belt"},
        {"id": 4, "name": "Red leather boots", "is_available": false},
        {"id": 5, "name": "Wool socks"}
    ]"#;

    fn catalog() -> InMemoryCatalog<u64> {
        InMemoryCatalog::from_json_str(CATALOG).unwrap()
    }

    #[test]
    fn candidates_exclude_focal_and_unavailable() {
        let ids: Vec<u64> = catalog().candidates_for(&1).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 5]);
    }

    #[test]
    fn focal_lookup_ignores_availability() {
        assert_eq!(catalog().focal(&4).map(|p| p.id), Some(4));
        assert!(catalog().focal(&42).is_none());
    }

    #[test]
    fn recommends_similar_available_products() {
        let recommender = Recommender::new(catalog(), &RankerConfig::default()).unwrap();
        let recs = recommender.recommend_for(&1).unwrap();
        let ids: Vec<u64> = recs.iter().map(|(p, _)| p.id).collect();
        assert_eq!(ids, vec![3]);
        assert!(recs[0].1 > 0.0);
    }

    #[test]
    fn unknown_focal_is_not_found() {
        let recommender = Recommender::new(catalog(), &RankerConfig::default()).unwrap();
        assert!(matches!(recommender.recommend_for(&99), Err(RankError::NotFound(_))));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = RankerConfig {
            top_k: 0,
            ..RankerConfig::default()
        };
        assert!(matches!(
            Recommender::new(catalog(), &config),
            Err(RankError::InvalidConfig(_))
        ));
    }

    #[test]
    fn free_text_ranks_whole_catalog() {
        let recommender = Recommender::new(catalog(), &RankerConfig::default()).unwrap();
        let recs: Vec<(Product<u64>, f64)> = recommender.recommend_for_text("leather").unwrap();
        let ids: Vec<u64> = recs.iter().map(|(p, _)| p.id).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&1) && ids.contains(&3));
    }

    /// Store that only knows the trait, with string ids
    struct FixedStore(Vec<Product<String>>);

    impl CatalogStore<String> for FixedStore {
        fn focal(&self, id: &String) -> Option<Product<String>> {
            self.0.iter().find(|p| &p.id == id).cloned()
        }

        fn candidates_for(&self, focal_id: &String) -> Vec<Product<String>> {
            self.0.iter().filter(|p| &p.id != focal_id).cloned().collect()
        }

        fn available(&self) -> Vec<Product<String>> {
            self.0.clone()
        }
    }

    #[test]
    fn free_text_works_through_any_store() {
        let product = |id: &str, name: &str| Product {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            is_available: true,
        };
        let store = FixedStore(vec![
            product("a", "canvas tote"),
            product("b", "wool scarf"),
            product("c", "canvas sneaker"),
        ]);
        let recommender = Recommender::new(store, &RankerConfig::default()).unwrap();
        let recs: Vec<(Product<String>, f64)> = recommender.recommend_for_text("canvas").unwrap();
        let ids: Vec<&str> = recs.iter().map(|(p, _)| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn available_skips_unavailable() {
        let ids: Vec<u64> = catalog().available().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 5]);
    }

    #[test]
    fn bad_json_is_a_serialization_error() {
        assert!(matches!(
            InMemoryCatalog::<u64>::from_json_str("[{\"id\": 1}]"),
            Err(RankError::Serialization(_))
        ));
    }
}
