//! # Catalog Source
//!
//! Loads the menu catalog through a fallback chain that never fails.
//!
//! ## Fallback Chain
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Load (once per session)                      │
//! │                                                                         │
//! │  1. CACHE                                                              │
//! │     Serialized MenuItem list at a fixed path (JSON).                   │
//! │     Hit ──────────────────────────────────────► use it                 │
//! │     Miss / corrupt ──┐                                                 │
//! │                      ▼                                                  │
//! │  2. MENU FILE                                                          │
//! │     Tabular export maintained by the restaurant                        │
//! │     (comma-separated, quoted fields, header row).                      │
//! │     Parses ──► rewrite cache (best effort) ──► use it                  │
//! │     Missing / malformed ──┐                                            │
//! │                           ▼                                             │
//! │  3. BUILT-IN DEFAULT MENU                                              │
//! │     Always available ──► rewrite cache (best effort) ──► use it        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every downgrade is logged; none is an error to the caller.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use tabletalk_core::{Catalog, MenuItem, Money};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Catalog Source
// =============================================================================

/// Loads the catalog from cache, menu file, or the built-in default.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    /// Fixed path of the serialized catalog cache.
    cache_path: PathBuf,

    /// Fixed path of the restaurant's tabular menu export.
    menu_path: PathBuf,
}

impl CatalogSource {
    /// Creates a source reading from the given cache and menu file paths.
    pub fn new(cache_path: impl Into<PathBuf>, menu_path: impl Into<PathBuf>) -> Self {
        CatalogSource {
            cache_path: cache_path.into(),
            menu_path: menu_path.into(),
        }
    }

    /// Loads the catalog. Infallible: the chain ends at the built-in menu.
    pub async fn load(&self) -> Catalog {
        match self.load_cache().await {
            Ok(items) if !items.is_empty() => {
                info!(path = %self.cache_path.display(), items = items.len(), "Catalog loaded from cache");
                return Catalog::new(items);
            }
            Ok(_) => {
                debug!(path = %self.cache_path.display(), "Catalog cache is empty");
            }
            Err(err) => {
                debug!(path = %self.cache_path.display(), %err, "Catalog cache miss");
            }
        }

        match self.load_menu_file().await {
            Ok(items) => {
                info!(path = %self.menu_path.display(), items = items.len(), "Catalog loaded from menu file");
                self.write_cache(&items).await;
                return Catalog::new(items);
            }
            Err(err) => {
                warn!(path = %self.menu_path.display(), %err, "Menu file unusable, falling back to built-in menu");
            }
        }

        let items = default_menu();
        self.write_cache(&items).await;
        Catalog::new(items)
    }

    /// Reads the serialized item list from the cache path.
    async fn load_cache(&self) -> StoreResult<Vec<MenuItem>> {
        let text = tokio::fs::read_to_string(&self.cache_path)
            .await
            .map_err(|e| StoreError::file(self.cache_path.display().to_string(), e))?;
        let items: Vec<MenuItem> = serde_json::from_str(&text)?;
        Ok(items)
    }

    /// Reads and parses the tabular menu file.
    async fn load_menu_file(&self) -> StoreResult<Vec<MenuItem>> {
        let text = tokio::fs::read_to_string(&self.menu_path)
            .await
            .map_err(|e| StoreError::file(self.menu_path.display().to_string(), e))?;
        parse_menu(&text)
    }

    /// Rewrites the cache. Best-effort: a failure is logged, never surfaced.
    async fn write_cache(&self, items: &[MenuItem]) {
        let json = match serde_json::to_string_pretty(items) {
            Ok(json) => json,
            Err(err) => {
                warn!(%err, "Could not serialize catalog cache");
                return;
            }
        };
        if let Err(err) = tokio::fs::write(&self.cache_path, json).await {
            warn!(path = %self.cache_path.display(), %err, "Could not write catalog cache");
        }
    }

    /// The cache path this source reads and writes.
    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }
}

// =============================================================================
// Menu File Parsing
// =============================================================================

/// Parses the restaurant's menu export.
///
/// ## Format
/// Comma-separated with double-quoted fields, one header row:
/// ```text
/// id,name,price,pieces,category,description,available
/// momo-veg,Veg Momos,₹120.00,6,Starters,"Steamed, with chutney",yes
/// ```
/// Columns after `price` are optional. `available` defaults to yes.
fn parse_menu(text: &str) -> StoreResult<Vec<MenuItem>> {
    let mut items = Vec::new();

    for (row, line) in text.lines().enumerate() {
        // Row 0 is the header.
        if row == 0 || line.trim().is_empty() {
            continue;
        }

        let fields = split_row(line);
        if fields.len() < 3 {
            return Err(StoreError::MenuRow {
                row,
                reason: "expected at least id, name, price".to_string(),
            });
        }

        let id = fields[0].trim().to_string();
        let name = fields[1].trim().to_string();
        if id.is_empty() || name.is_empty() {
            return Err(StoreError::MenuRow {
                row,
                reason: "id and name must be non-empty".to_string(),
            });
        }

        let price: Money = fields[2].trim().parse().map_err(|_| StoreError::MenuRow {
            row,
            reason: format!("price {:?} is not a currency amount", fields[2].trim()),
        })?;

        let pieces = match fields.get(3).map(|f| f.trim()).unwrap_or("") {
            "" => None,
            raw => Some(raw.parse::<u32>().map_err(|_| StoreError::MenuRow {
                row,
                reason: format!("pieces {:?} is not a positive integer", raw),
            })?),
        };
        if pieces == Some(0) {
            return Err(StoreError::MenuRow {
                row,
                reason: "pieces must be at least 1 when present".to_string(),
            });
        }

        let category = match fields.get(4).map(|f| f.trim()).unwrap_or("") {
            "" => "Menu".to_string(),
            raw => raw.to_string(),
        };

        let description = fields
            .get(5)
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .map(|f| f.to_string());

        let is_available = !matches!(
            fields
                .get(6)
                .map(|f| f.trim().to_lowercase())
                .unwrap_or_default()
                .as_str(),
            "no" | "false" | "0"
        );

        items.push(MenuItem {
            id,
            name,
            price,
            pieces,
            description,
            category,
            is_available,
        });
    }

    Ok(items)
}

/// Splits one row into fields, honoring double quotes. A doubled quote
/// inside a quoted field is an escaped quote.
fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

// =============================================================================
// Built-in Default Menu
// =============================================================================

/// The terminal fallback menu: a small realistic card so the session can
/// always proceed even with no cache and no menu file.
pub fn default_menu() -> Vec<MenuItem> {
    fn item(
        id: &str,
        name: &str,
        paise: i64,
        pieces: Option<u32>,
        category: &str,
    ) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            price: Money::from_paise(paise),
            pieces,
            description: None,
            category: category.to_string(),
            is_available: true,
        }
    }

    vec![
        item("paneer-tikka", "Paneer Tikka", 22000, None, "Starters"),
        item("momo-veg", "Veg Momos", 12000, Some(6), "Starters"),
        item("masala-dosa", "Masala Dosa", 15000, None, "Mains"),
        item("veg-thali", "Veg Thali", 25000, None, "Mains"),
        item("butter-chicken", "Butter Chicken", 32000, None, "Mains"),
        item("garlic-naan", "Garlic Naan", 6000, None, "Breads"),
        item("gulab-jamun", "Gulab Jamun", 8000, Some(2), "Desserts"),
        item("filter-coffee", "Filter Coffee", 4000, None, "Beverages"),
        item("masala-chai", "Masala Chai", 3000, None, "Beverages"),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
