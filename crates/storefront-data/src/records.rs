//! Wire records returned by the catalog backend.
//!
//! Every field is optional on the wire. Absent and `null` values decode to
//! defaults, numbers and flags accept the loose shapes the backend sends
//! (`3.0`, `"4000"`, `1`), and a record that still cannot be decoded is
//! skipped with a warning instead of failing the whole list.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use storefront_core::Localized;

/// A record identifier. The backend sends either numbers or strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            Int(i64),
            Float(f64),
            Null(()),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Text(s) => RecordId(s),
            Wire::Int(n) => RecordId(n.to_string()),
            Wire::Float(n) => RecordId(n.to_string()),
            Wire::Null(()) => RecordId::default(),
        })
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode each element on its own, dropping the ones that do not fit.
fn decode_each<T: DeserializeOwned>(items: Vec<Value>, what: &'static str) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(row) => Some(row),
            Err(e) => {
                tracing::warn!(record = what, index, error = %e, "skipping undecodable record");
                None
            }
        })
        .collect()
}

fn skip_bad_records<'de, D, T>(deserializer: D, what: &'static str) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Ok(decode_each(items, what)),
        _ => Ok(Vec::new()),
    }
}

fn products_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<RawProduct>, D::Error> {
    skip_bad_records(deserializer, "product")
}

fn categories_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<CategorySummary>, D::Error> {
    skip_bad_records(deserializer, "category")
}

fn images_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<ImageRef>, D::Error> {
    skip_bad_records(deserializer, "product image")
}

fn number_of(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// A number, a numeric string, or nothing.
fn loose_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.as_ref().and_then(number_of))
}

/// A count rounded to a whole number.
fn loose_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(loose_number(deserializer)?.map(|n| n.round() as i64))
}

/// A flag with truthiness rules: zero, empty strings and `false` are off.
fn loose_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|value| match value {
        Value::Null => None,
        Value::Bool(b) => Some(b),
        Value::Number(n) => Some(n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan())),
        Value::String(s) => Some(!s.is_empty()),
        Value::Array(_) | Value::Object(_) => Some(true),
    }))
}

/// Text, or a number rendered as text.
fn loose_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|value| match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

/// A category summary nested under a department.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategorySummary {
    pub id: RecordId,
    #[serde(deserialize_with = "null_as_default")]
    pub name_fr: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name_ar: String,
}

impl CategorySummary {
    pub fn name(&self) -> Localized<&str> {
        Localized::new(&self.name_fr, &self.name_ar)
    }
}

/// A top-level department of the mega-menu taxonomy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Department {
    pub id: RecordId,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name_fr: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name_ar: String,
    /// Icon key, e.g. `Laptop`.
    pub icon: Option<String>,
    #[serde(deserialize_with = "categories_list")]
    pub categories: Vec<CategorySummary>,
}

impl Department {
    pub fn name(&self) -> Localized<&str> {
        Localized::new(&self.name_fr, &self.name_ar)
    }
}

/// Taxonomy payload as returned by the backend.
///
/// Only a list of departments is usable; any other shape is kept so callers
/// can log it, and reads as an empty taxonomy. Within a list, departments
/// that fail to decode are skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TaxonomyPayload {
    Departments(Vec<Department>),
    Other(Value),
}

impl<'de> Deserialize<'de> for TaxonomyPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => TaxonomyPayload::Departments(decode_each(items, "department")),
            other => TaxonomyPayload::Other(other),
        })
    }
}

impl TaxonomyPayload {
    pub fn is_list(&self) -> bool {
        matches!(self, TaxonomyPayload::Departments(_))
    }

    /// The departments, or an empty list for a non-list payload.
    pub fn into_departments(self) -> Vec<Department> {
        match self {
            TaxonomyPayload::Departments(rows) => rows,
            TaxonomyPayload::Other(_) => Vec::new(),
        }
    }
}

/// Product image reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageRef {
    pub url: Option<String>,
}

/// Reference to a related record by slug.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugRef {
    pub slug: Option<String>,
}

/// Reference to a related record by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameRef {
    pub name: Option<String>,
}

/// A product as the backend returns it. Prices are in Algerian dinars.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawProduct {
    pub id: RecordId,
    #[serde(deserialize_with = "loose_text")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub title_fr: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub title_ar: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub description_fr: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub description_ar: Option<String>,
    #[serde(deserialize_with = "loose_number")]
    pub price_dzd: Option<f64>,
    #[serde(deserialize_with = "loose_number")]
    pub compare_at_price_dzd: Option<f64>,
    #[serde(deserialize_with = "images_list")]
    pub product_images: Vec<ImageRef>,
    pub categories: Option<SlugRef>,
    pub departments: Option<SlugRef>,
    pub brands: Option<NameRef>,
    #[serde(deserialize_with = "loose_count")]
    pub stock: Option<i64>,
    #[serde(deserialize_with = "loose_flag")]
    pub is_featured: Option<bool>,
    /// ISO 8601 creation timestamp.
    #[serde(deserialize_with = "loose_text")]
    pub created_at: Option<String>,
}

/// One page of products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPage {
    #[serde(deserialize_with = "products_list")]
    pub products: Vec<RawProduct>,
}

/// Parameters of a product listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Page-size hint.
    pub limit: u32,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self { limit: 12 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Locale;

    #[test]
    fn test_department_decodes_with_missing_fields() {
        let rows: Vec<Department> = serde_json::from_str(
            r#"[{"id": 7, "slug": "informatique", "name_fr": "Informatique", "name_ar": "إعلام آلي",
                 "icon": "Laptop", "categories": null},
                {"id": "dept-2"}]"#,
        )
        .unwrap();

        assert_eq!(rows[0].id.as_str(), "7");
        assert_eq!(rows[0].name().text(Locale::Ar), "إعلام آلي");
        assert!(rows[0].categories.is_empty());
        assert_eq!(rows[1].slug, "");
        assert_eq!(rows[1].icon, None);
    }

    #[test]
    fn test_taxonomy_payload_shapes() {
        let list: TaxonomyPayload = serde_json::from_str(r#"[{"id": 1, "slug": "audio"}]"#).unwrap();
        assert!(list.is_list());
        assert_eq!(list.into_departments().len(), 1);

        let object: TaxonomyPayload = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
        assert!(!object.is_list());
        assert!(object.into_departments().is_empty());

        let null: TaxonomyPayload = serde_json::from_str("null").unwrap();
        assert!(null.into_departments().is_empty());
    }

    #[test]
    fn test_raw_product_decodes_nested_refs() {
        let product: RawProduct = serde_json::from_str(
            r#"{"id": 42, "slug": "macbook-air", "title_fr": "MacBook Air",
                "price_dzd": 4000, "compare_at_price_dzd": 5000.0,
                "product_images": [{"url": "https://cdn/a.jpg"}, {}],
                "categories": {"slug": "laptops"}, "brands": {"name": "Apple"},
                "stock": 3, "is_featured": true, "created_at": "2024-06-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(product.id.as_str(), "42");
        assert_eq!(product.price_dzd, Some(4000.0));
        assert_eq!(product.compare_at_price_dzd, Some(5000.0));
        assert_eq!(product.product_images.len(), 2);
        assert_eq!(product.categories.unwrap().slug.as_deref(), Some("laptops"));
        assert_eq!(product.departments, None);
        assert_eq!(product.is_featured, Some(true));
    }

    #[test]
    fn test_loose_numbers_and_flags() {
        let product: RawProduct = serde_json::from_str(
            r#"{"id": 2, "price_dzd": "4000", "compare_at_price_dzd": "n/a",
                "stock": 3.0, "is_featured": 1, "title_fr": 17}"#,
        )
        .unwrap();
        assert_eq!(product.price_dzd, Some(4000.0));
        assert_eq!(product.compare_at_price_dzd, None);
        assert_eq!(product.stock, Some(3));
        assert_eq!(product.is_featured, Some(true));
        assert_eq!(product.title_fr.as_deref(), Some("17"));

        let flags: Vec<RawProduct> = serde_json::from_str(
            r#"[{"is_featured": "true"}, {"is_featured": 0}, {"is_featured": ""}, {"is_featured": null}]"#,
        )
        .unwrap();
        let flags: Vec<Option<bool>> = flags.iter().map(|p| p.is_featured).collect();
        assert_eq!(flags, [Some(true), Some(false), Some(false), None]);
    }

    #[test]
    fn test_product_page_keeps_good_records() {
        let page: ProductPage = serde_json::from_str(
            r#"{"products": [
                {"id": 1, "price_dzd": 4000, "is_featured": true},
                {"id": 2, "stock": 3.0},
                {"id": 3, "brands": "Apple"},
                "not a product"
            ]}"#,
        )
        .unwrap();

        let ids: Vec<&str> = page.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert_eq!(page.products[1].stock, Some(3));
    }

    #[test]
    fn test_taxonomy_skips_bad_department() {
        let payload: TaxonomyPayload = serde_json::from_str(
            r#"[{"id": 1, "slug": "audio", "categories": [{"id": 3, "name_fr": ["x"]}, {"id": 4}]},
                {"id": 2, "slug": ["broken"]},
                {"id": 5, "slug": "gaming"}]"#,
        )
        .unwrap();

        assert!(payload.is_list());
        let rows = payload.into_departments();
        let slugs: Vec<&str> = rows.iter().map(|d| d.slug.as_str()).collect();
        assert_eq!(slugs, ["audio", "gaming"]);
        assert_eq!(rows[0].categories.len(), 1);
        assert_eq!(rows[0].categories[0].id.as_str(), "4");
    }

    #[test]
    fn test_product_page_null_products() {
        let page: ProductPage = serde_json::from_str(r#"{"products": null}"#).unwrap();
        assert!(page.products.is_empty());
    }
}
