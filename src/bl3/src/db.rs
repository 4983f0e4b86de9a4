//! Part-index database lookups for item serials.
//!
//! Three read-only datasets ship with the crate as gzip-compressed JSON,
//! embedded at compile time and inflated once per process on first use:
//!
//! - the serial database: per category, the bit widths used at each serial
//!   version plus the ordered asset list the packed indices point into
//! - short balance name -> English item name
//! - full balance path -> the part category ("inventory key") that balance
//!   draws its functional parts from
//!
//! Lookups never panic on missing entries; they return `None` and let the
//! caller decide how parseable the item still is.

use std::collections::HashMap;
use std::io::Read;

use flate2::read::GzDecoder;
use once_cell::sync::Lazy;
use serde::Deserialize;

const INVENTORY_SERIAL_DB_GZ: &[u8] = include_bytes!("../resources/inventoryserialdb.json.gz");
const BALANCE_NAME_GZ: &[u8] = include_bytes!("../resources/balance_name_mapping.json.gz");
const BALANCE_INV_KEY_GZ: &[u8] = include_bytes!("../resources/balance_to_inv_key.json.gz");

#[derive(Debug, Deserialize)]
struct VersionBits {
    version: u32,
    bits: usize,
}

#[derive(Debug, Deserialize)]
struct Category {
    versions: Vec<VersionBits>,
    assets: Vec<String>,
}

/// The inventory serial database: category -> versioned bit widths and
/// ordered assets.
pub struct InventorySerialDb {
    categories: HashMap<String, Category>,
    reverse: HashMap<String, HashMap<String, u32>>,
    max_version: u32,
}

impl InventorySerialDb {
    fn load() -> Self {
        let mut categories: HashMap<String, Category> =
            serde_json::from_str(&inflate(INVENTORY_SERIAL_DB_GZ))
                .expect("Failed to parse inventoryserialdb.json");

        // The width rule below binary-searches on version.
        for cat in categories.values_mut() {
            cat.versions.sort_by_key(|v| v.version);
        }

        let max_version = categories
            .values()
            .flat_map(|c| c.versions.iter().map(|v| v.version))
            .max()
            .unwrap_or(0);

        let reverse = categories
            .iter()
            .map(|(name, cat)| {
                let index_of = cat
                    .assets
                    .iter()
                    .enumerate()
                    .map(|(i, asset)| (asset.to_lowercase(), i as u32 + 1))
                    .collect();
                (name.clone(), index_of)
            })
            .collect();

        Self {
            categories,
            reverse,
            max_version,
        }
    }

    /// The highest serial version any category knows about. Serials newer
    /// than this cannot be parsed.
    pub fn max_version(&self) -> u32 {
        self.max_version
    }

    /// Bit width for `category` at serial version `version`: the width of
    /// the largest row whose version is <= `version`, or the first row when
    /// every row is newer.
    pub fn get_num_bits(&self, category: &str, version: u32) -> Option<usize> {
        let rows = &self.categories.get(category)?.versions;
        let idx = rows.partition_point(|r| r.version <= version);
        Some(if idx == 0 { rows.first()?.bits } else { rows[idx - 1].bits })
    }

    /// Resolve a 1-based packed index to its asset name.
    pub fn get_part(&self, category: &str, index: u32) -> Option<&str> {
        if index < 1 {
            return None;
        }
        self.categories
            .get(category)?
            .assets
            .get(index as usize - 1)
            .map(String::as_str)
    }

    /// Reverse lookup: asset name (case-insensitive) to its 1-based index.
    pub fn get_part_index(&self, category: &str, name: &str) -> Option<u32> {
        self.reverse.get(category)?.get(&name.to_lowercase()).copied()
    }
}

fn inflate(gz: &[u8]) -> String {
    let mut out = String::new();
    GzDecoder::new(gz)
        .read_to_string(&mut out)
        .expect("Failed to inflate embedded resource");
    out
}

/// Process-wide serial database, inflated on first use.
pub static SERIAL_DB: Lazy<InventorySerialDb> = Lazy::new(InventorySerialDb::load);

/// Lowercased short balance name -> English item name.
static BALANCE_TO_NAME: Lazy<HashMap<String, String>> = Lazy::new(|| {
    serde_json::from_str(&inflate(BALANCE_NAME_GZ)).expect("Failed to parse balance_name_mapping.json")
});

/// Lowercased full balance path -> part category.
static BALANCE_TO_INV_KEY: Lazy<HashMap<String, String>> = Lazy::new(|| {
    serde_json::from_str(&inflate(BALANCE_INV_KEY_GZ)).expect("Failed to parse balance_to_inv_key.json")
});

/// English name for a short balance name (any case).
pub fn balance_name(balance_short: &str) -> Option<&'static str> {
    BALANCE_TO_NAME
        .get(&balance_short.to_lowercase())
        .map(String::as_str)
}

/// Part category used by a full balance path. Balance assets in the serial
/// database omit the `.ObjectName` suffix, so `Foo` normalizes to `Foo.Foo`
/// before lookup.
pub fn balance_inv_key(balance: &str) -> Option<&'static str> {
    let last = balance.rsplit('/').next().unwrap_or(balance);
    let normalized = if last.contains('.') {
        balance.to_lowercase()
    } else {
        format!("{}.{}", balance, last).to_lowercase()
    };
    BALANCE_TO_INV_KEY.get(&normalized).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_bits_step_function() {
        let db = &*SERIAL_DB;
        // InventoryBalanceData rows: (1, 6), (28, 7), (58, 8)
        assert_eq!(db.get_num_bits("InventoryBalanceData", 1), Some(6));
        assert_eq!(db.get_num_bits("InventoryBalanceData", 27), Some(6));
        assert_eq!(db.get_num_bits("InventoryBalanceData", 28), Some(7));
        assert_eq!(db.get_num_bits("InventoryBalanceData", 57), Some(7));
        assert_eq!(db.get_num_bits("InventoryBalanceData", 58), Some(8));
        assert_eq!(db.get_num_bits("InventoryBalanceData", 99), Some(8));
        // Below the first row the first row's width applies.
        assert_eq!(db.get_num_bits("InventoryBalanceData", 0), Some(6));
        assert_eq!(db.get_num_bits("NoSuchCategory", 1), None);
    }

    #[test]
    fn test_max_version() {
        assert_eq!(SERIAL_DB.max_version(), 58);
    }

    #[test]
    fn test_get_part_bounds() {
        let db = &*SERIAL_DB;
        assert!(db.get_part("InventoryGenericPartData", 1).is_some());
        assert_eq!(db.get_part("InventoryGenericPartData", 0), None);
        assert_eq!(db.get_part("InventoryGenericPartData", 10_000), None);
        assert_eq!(db.get_part("NoSuchCategory", 1), None);
    }

    #[test]
    fn test_part_index_reverse_lookup() {
        let db = &*SERIAL_DB;
        let asset = db.get_part("InventoryGenericPartData", 10).unwrap().to_string();
        assert_eq!(db.get_part_index("InventoryGenericPartData", &asset), Some(10));
        assert_eq!(
            db.get_part_index("InventoryGenericPartData", &asset.to_uppercase()),
            Some(10)
        );
        assert_eq!(db.get_part_index("InventoryGenericPartData", "/Game/Nope"), None);
    }

    #[test]
    fn test_balance_name_lookup() {
        assert_eq!(balance_name("balance_sm_ted_craders"), Some("Crader's EM-P5"));
        assert_eq!(balance_name("BALANCE_SM_TED_CRADERS"), Some("Crader's EM-P5"));
        assert_eq!(balance_name("balance_not_a_thing"), None);
    }

    #[test]
    fn test_inv_key_normalization() {
        let bare = "/Game/PatchDLC/Raid1/Re-Engagement/Weapons/CraderMP5/Balance/Balance_SM_TED_Craders";
        let dotted = format!("{bare}.Balance_SM_TED_Craders");
        assert_eq!(balance_inv_key(bare), Some("BPInvPart_SM_TED_C"));
        assert_eq!(balance_inv_key(&dotted), Some("BPInvPart_SM_TED_C"));
        assert_eq!(balance_inv_key("/Game/Unknown/Balance_Xyz"), None);
    }
}
