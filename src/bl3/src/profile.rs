//! Profile facade: the account-wide companion to [`crate::save::Bl3Save`].
//!
//! Wraps the decoded [`Profile`] record with its GVAS header. Bank and lost
//! loot inventories are plain serial-byte lists in the record; they are
//! wrapped in [`ItemSerial`] on load and written back on serialization.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use prost::Message;
use thiserror::Error;

use bl3_proto::{
    CrewQuartersDecorationItemSaveGameData, GuardianRankRewardSaveGameData,
    InventoryCategorySaveData, OakCustomizationSaveGameData, OakInventoryCustomizationPartInfo,
    OakSduSaveGameData, Profile,
};

use crate::envelope::{EnvelopeError, FileKind, GvasHeader};
use crate::reference::cosmetics::{
    CHAR_HEADS, CHAR_HEADS_DEFAULTS, CHAR_SKINS, CHAR_SKINS_DEFAULTS, ECHO_THEMES,
    ECHO_THEMES_DEFAULTS, EMOTES, EMOTES_DEFAULTS, GUARDIAN_RANK_REWARDS, ROOM_DECORATIONS,
    WEAPON_SKINS, WEAPON_TRINKETS,
};
use crate::reference::sdu::ProfileSduKind;
use crate::reference::GOLDEN_KEY_HASH;
use crate::serial::{ItemSerial, SerialError};

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("unable to parse profile (did you pass a savegame instead?): {0}")]
    WrongRecordKind(#[source] prost::DecodeError),

    #[error("golden key count cannot be negative: {0}")]
    KeysOutOfRange(i32),

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error(transparent)]
    Serial(#[from] SerialError),

    #[error("invalid JSON record: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A loaded profile file.
pub struct Bl3Profile {
    header: GvasHeader,
    profile: Profile,
    bank_items: Vec<ItemSerial>,
    lost_loot_items: Vec<ItemSerial>,
}

impl Bl3Profile {
    // ========================================================================
    // Load and store
    // ========================================================================

    pub fn from_bytes(file_data: &[u8]) -> Result<Self, ProfileError> {
        let (header, payload) = GvasHeader::read(file_data, FileKind::Profile)?;
        let profile = Profile::decode(payload.as_slice()).map_err(ProfileError::WrongRecordKind)?;
        Ok(Self::wrap(header, profile))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        Self::from_bytes(&fs::read(path)?)
    }

    fn wrap(header: GvasHeader, profile: Profile) -> Self {
        let bank_items = profile
            .bank_inventory_list
            .iter()
            .map(|serial| ItemSerial::from_bytes(serial.clone()))
            .collect();
        let lost_loot_items = profile
            .lost_loot_inventory_list
            .iter()
            .map(|serial| ItemSerial::from_bytes(serial.clone()))
            .collect();
        Bl3Profile {
            header,
            profile,
            bank_items,
            lost_loot_items,
        }
    }

    pub fn import_protobuf(&mut self, data: &[u8]) -> Result<(), ProfileError> {
        let profile = Profile::decode(data).map_err(ProfileError::WrongRecordKind)?;
        *self = Self::wrap(self.header.clone(), profile);
        Ok(())
    }

    pub fn import_json(&mut self, json: &str) -> Result<(), ProfileError> {
        let profile: Profile = serde_json::from_str(json)?;
        *self = Self::wrap(self.header.clone(), profile);
        Ok(())
    }

    fn sync_items(&mut self) {
        self.profile.bank_inventory_list = self
            .bank_items
            .iter()
            .map(|item| item.serial_bytes().to_vec())
            .collect();
        self.profile.lost_loot_inventory_list = self
            .lost_loot_items
            .iter()
            .map(|item| item.serial_bytes().to_vec())
            .collect();
    }

    pub fn to_bytes(&mut self) -> Result<Vec<u8>, ProfileError> {
        self.sync_items();
        let payload = self.profile.encode_to_vec();
        Ok(self.header.write(&payload, FileKind::Profile)?)
    }

    pub fn save_to(&mut self, path: impl AsRef<Path>) -> Result<(), ProfileError> {
        let data = self.to_bytes()?;
        Ok(fs::write(path, data)?)
    }

    pub fn to_protobuf(&mut self) -> Vec<u8> {
        self.sync_items();
        self.profile.encode_to_vec()
    }

    pub fn save_protobuf_to(&mut self, path: impl AsRef<Path>) -> Result<(), ProfileError> {
        let data = self.to_protobuf();
        Ok(fs::write(path, data)?)
    }

    pub fn to_json(&mut self) -> Result<String, ProfileError> {
        self.sync_items();
        Ok(serde_json::to_string_pretty(&self.profile)?)
    }

    pub fn save_json_to(&mut self, path: impl AsRef<Path>) -> Result<(), ProfileError> {
        let json = self.to_json()?;
        Ok(fs::write(path, json)?)
    }

    pub fn header(&self) -> &GvasHeader {
        &self.header
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    // ========================================================================
    // Golden keys
    // ========================================================================

    pub fn golden_keys(&self) -> i32 {
        self.profile
            .bank_inventory_category_list
            .iter()
            .find(|c| c.base_category_definition_hash == GOLDEN_KEY_HASH)
            .map(|c| c.quantity)
            .unwrap_or(0)
    }

    pub fn set_golden_keys(&mut self, keys: i32) -> Result<(), ProfileError> {
        if keys < 0 {
            return Err(ProfileError::KeysOutOfRange(keys));
        }
        for category in &mut self.profile.bank_inventory_category_list {
            if category.base_category_definition_hash == GOLDEN_KEY_HASH {
                category.quantity = keys;
                return Ok(());
            }
        }
        self.profile
            .bank_inventory_category_list
            .push(InventoryCategorySaveData {
                base_category_definition_hash: GOLDEN_KEY_HASH,
                quantity: keys,
            });
        Ok(())
    }

    // ========================================================================
    // SDUs
    // ========================================================================

    pub fn sdus(&self) -> HashMap<ProfileSduKind, i32> {
        self.profile
            .profile_sdu_list
            .iter()
            .filter_map(|s| {
                ProfileSduKind::from_sdu_path(&s.sdu_data_path).map(|k| (k, s.sdu_level))
            })
            .collect()
    }

    /// Purchased SDU tiers together with each line's cap, for display.
    pub fn sdus_with_max(&self) -> HashMap<ProfileSduKind, (i32, i32)> {
        self.sdus()
            .into_iter()
            .map(|(kind, level)| (kind, (level, kind.max_level())))
            .collect()
    }

    pub fn set_max_sdus(&mut self, kinds: Option<&[ProfileSduKind]>) {
        let mut wanted: Vec<ProfileSduKind> = kinds.unwrap_or(&ProfileSduKind::ALL).to_vec();
        for sdu in &mut self.profile.profile_sdu_list {
            if let Some(kind) = ProfileSduKind::from_sdu_path(&sdu.sdu_data_path) {
                if let Some(pos) = wanted.iter().position(|k| *k == kind) {
                    wanted.remove(pos);
                    sdu.sdu_level = kind.max_level();
                }
            }
        }
        for kind in wanted {
            self.profile.profile_sdu_list.push(OakSduSaveGameData {
                sdu_data_path: kind.sdu_path().to_string(),
                sdu_level: kind.max_level(),
            });
        }
    }

    // ========================================================================
    // Bank and lost loot
    // ========================================================================

    pub fn bank_items(&self) -> &[ItemSerial] {
        &self.bank_items
    }

    pub fn bank_item_mut(&mut self, index: usize) -> Option<&mut ItemSerial> {
        self.bank_items.get_mut(index)
    }

    pub fn lost_loot_items(&self) -> &[ItemSerial] {
        &self.lost_loot_items
    }

    /// Append raw serial bytes to the bank; returns the new index.
    pub fn add_bank_item(&mut self, serial: Vec<u8>) -> usize {
        self.profile.bank_inventory_list.push(serial.clone());
        self.bank_items.push(ItemSerial::from_bytes(serial));
        self.bank_items.len() - 1
    }

    /// Append a `BL3(...)` serial to the bank.
    pub fn add_bank_item_from_base64(&mut self, wrapped: &str) -> Result<usize, ProfileError> {
        let item = ItemSerial::from_base64(wrapped)?;
        Ok(self.add_bank_item(item.serial_bytes().to_vec()))
    }

    // ========================================================================
    // Customizations
    // ========================================================================

    /// The subset of `asset_set` currently unlocked in the main
    /// customization list.
    fn cur_customizations(&self, asset_set: &[&str]) -> HashSet<String> {
        self.profile
            .unlocked_customizations
            .iter()
            .filter(|c| asset_set.contains(&c.customization_asset_path.as_str()))
            .map(|c| c.customization_asset_path.clone())
            .collect()
    }

    /// Unlock every entry of `asset_set` not already present.
    fn unlock_customization_set(&mut self, asset_set: &[&str]) {
        let current = self.cur_customizations(asset_set);
        for asset in asset_set {
            if !current.contains(*asset) {
                self.profile
                    .unlocked_customizations
                    .push(OakCustomizationSaveGameData {
                        is_new: true,
                        customization_asset_path: (*asset).to_string(),
                    });
            }
        }
    }

    /// The subset of hash-keyed weapon customizations currently unlocked.
    fn cur_weapon_customizations(&self, hashes: &[(u32, &str)]) -> HashSet<u32> {
        self.profile
            .unlocked_inventory_customization_parts
            .iter()
            .filter(|c| hashes.iter().any(|(h, _)| *h == c.customization_part_hash))
            .map(|c| c.customization_part_hash)
            .collect()
    }

    fn unlock_weapon_customization_set(&mut self, hashes: &[(u32, &str)]) {
        let current = self.cur_weapon_customizations(hashes);
        for (hash, _) in hashes {
            if !current.contains(hash) {
                self.profile
                    .unlocked_inventory_customization_parts
                    .push(OakInventoryCustomizationPartInfo {
                        customization_part_hash: *hash,
                        is_new: true,
                    });
            }
        }
    }

    pub fn char_skins(&self) -> HashSet<String> {
        let mut skins = self.cur_customizations(CHAR_SKINS);
        skins.extend(CHAR_SKINS_DEFAULTS.iter().map(|s| s.to_string()));
        skins
    }

    pub fn char_skins_total(&self) -> usize {
        CHAR_SKINS.len() + CHAR_SKINS_DEFAULTS.len()
    }

    pub fn unlock_char_skins(&mut self) {
        self.unlock_customization_set(CHAR_SKINS);
    }

    pub fn char_heads(&self) -> HashSet<String> {
        let mut heads = self.cur_customizations(CHAR_HEADS);
        heads.extend(CHAR_HEADS_DEFAULTS.iter().map(|s| s.to_string()));
        heads
    }

    pub fn char_heads_total(&self) -> usize {
        CHAR_HEADS.len() + CHAR_HEADS_DEFAULTS.len()
    }

    pub fn unlock_char_heads(&mut self) {
        self.unlock_customization_set(CHAR_HEADS);
    }

    pub fn echo_themes(&self) -> HashSet<String> {
        let mut themes = self.cur_customizations(ECHO_THEMES);
        themes.extend(ECHO_THEMES_DEFAULTS.iter().map(|s| s.to_string()));
        themes
    }

    pub fn echo_themes_total(&self) -> usize {
        ECHO_THEMES.len() + ECHO_THEMES_DEFAULTS.len()
    }

    pub fn unlock_echo_themes(&mut self) {
        self.unlock_customization_set(ECHO_THEMES);
    }

    pub fn emotes(&self) -> HashSet<String> {
        let mut emotes = self.cur_customizations(EMOTES);
        emotes.extend(EMOTES_DEFAULTS.iter().map(|s| s.to_string()));
        emotes
    }

    pub fn emotes_total(&self) -> usize {
        EMOTES.len() + EMOTES_DEFAULTS.len()
    }

    pub fn unlock_emotes(&mut self) {
        self.unlock_customization_set(EMOTES);
    }

    pub fn room_decorations(&self) -> HashSet<String> {
        self.profile
            .unlocked_crew_quarters_decorations
            .iter()
            .map(|d| d.decoration_item_asset_path.clone())
            .collect()
    }

    pub fn room_decorations_total(&self) -> usize {
        ROOM_DECORATIONS.len()
    }

    pub fn unlock_room_decorations(&mut self) {
        let current = self.room_decorations();
        for (path, _) in ROOM_DECORATIONS {
            if !current.contains(*path) {
                self.profile
                    .unlocked_crew_quarters_decorations
                    .push(CrewQuartersDecorationItemSaveGameData {
                        is_new: true,
                        decoration_item_asset_path: (*path).to_string(),
                    });
            }
        }
    }

    pub fn weapon_skins(&self) -> HashSet<u32> {
        self.cur_weapon_customizations(WEAPON_SKINS)
    }

    pub fn weapon_skins_total(&self) -> usize {
        WEAPON_SKINS.len()
    }

    pub fn unlock_weapon_skins(&mut self) {
        self.unlock_weapon_customization_set(WEAPON_SKINS);
    }

    pub fn weapon_trinkets(&self) -> HashSet<u32> {
        self.cur_weapon_customizations(WEAPON_TRINKETS)
    }

    pub fn weapon_trinkets_total(&self) -> usize {
        WEAPON_TRINKETS.len()
    }

    pub fn unlock_weapon_trinkets(&mut self) {
        self.unlock_weapon_customization_set(WEAPON_TRINKETS);
    }

    /// Empty all three customization lists.
    pub fn clear_all_customizations(&mut self) {
        self.profile.unlocked_customizations.clear();
        self.profile.unlocked_crew_quarters_decorations.clear();
        self.profile.unlocked_inventory_customization_parts.clear();
    }

    /// Rewrite the decoration, weapon skin, and trinket lists in
    /// case-folded alphabetical order of their English names. These show up
    /// in game in unlock order, which gets messy. Entries this build does
    /// not know keep their relative order at the end, `is_new` preserved.
    pub fn alphabetize_cosmetics(&mut self) {
        // Decorations first.
        let mut current: Vec<(String, bool)> = self
            .profile
            .unlocked_crew_quarters_decorations
            .iter()
            .map(|d| (d.decoration_item_asset_path.clone(), d.is_new))
            .collect();
        let mut sorted_decos: Vec<(&str, &str)> = ROOM_DECORATIONS.to_vec();
        sorted_decos.sort_by_key(|(_, eng)| eng.to_lowercase());

        let mut new_order = Vec::new();
        for (path, _) in sorted_decos {
            if let Some(pos) = current.iter().position(|(p, _)| p == path) {
                new_order.push(current.remove(pos));
            }
        }
        new_order.append(&mut current);

        self.profile.unlocked_crew_quarters_decorations = new_order
            .into_iter()
            .map(|(path, is_new)| CrewQuartersDecorationItemSaveGameData {
                is_new,
                decoration_item_asset_path: path,
            })
            .collect();

        // Then weapon skins and trinkets, which share one list.
        let mut current: Vec<(u32, bool)> = self
            .profile
            .unlocked_inventory_customization_parts
            .iter()
            .map(|c| (c.customization_part_hash, c.is_new))
            .collect();

        let mut new_order = Vec::new();
        for group in [WEAPON_SKINS, WEAPON_TRINKETS] {
            let mut sorted: Vec<(u32, &str)> = group.to_vec();
            sorted.sort_by_key(|(_, eng)| eng.to_lowercase());
            for (hash, _) in sorted {
                if let Some(pos) = current.iter().position(|(h, _)| *h == hash) {
                    new_order.push(current.remove(pos));
                }
            }
        }
        new_order.append(&mut current);

        self.profile.unlocked_inventory_customization_parts = new_order
            .into_iter()
            .map(|(hash, is_new)| OakInventoryCustomizationPartInfo {
                customization_part_hash: hash,
                is_new,
            })
            .collect();
    }

    // ========================================================================
    // Guardian rank
    // ========================================================================

    pub fn guardian_rank(&self) -> i32 {
        self.profile
            .guardian_rank
            .as_ref()
            .map(|g| g.guardian_rank)
            .unwrap_or(0)
    }

    pub fn guardian_rank_tokens(&self) -> i32 {
        self.profile
            .guardian_rank
            .as_ref()
            .map(|g| g.available_tokens)
            .unwrap_or(0)
    }

    /// Recompute the rank floor implied by redeemed rewards plus unspent
    /// tokens. With `force`, the rank is always set to that floor; otherwise
    /// it is only ever raised. Returns the new rank when it changed.
    pub fn fixup_guardian_rank(&mut self, force: bool) -> Option<i32> {
        let guardian = self.profile.guardian_rank.get_or_insert_with(Default::default);
        let min_rank: i32 = guardian
            .rank_rewards
            .iter()
            .map(|r| r.num_tokens)
            .sum::<i32>()
            + guardian.available_tokens;

        let set_value = if force {
            guardian.guardian_rank != min_rank
        } else {
            guardian.guardian_rank < min_rank
        };

        if set_value {
            guardian.guardian_rank = min_rank;
            Some(min_rank)
        } else {
            None
        }
    }

    /// Set the unspent token count, raising the rank to match if needed.
    pub fn set_guardian_rank_tokens(&mut self, tokens: i32) -> Option<i32> {
        self.profile
            .guardian_rank
            .get_or_insert_with(Default::default)
            .available_tokens = tokens;
        self.fixup_guardian_rank(false)
    }

    /// Reset guardian rank entirely. `guardian_reward_random_seed` is
    /// deliberately left alone.
    pub fn zero_guardian_rank(&mut self) {
        let guardian = self.profile.guardian_rank.get_or_insert_with(Default::default);
        guardian.available_tokens = 0;
        guardian.rank_rewards.clear();
        guardian.guardian_rank = 0;
        guardian.guardian_experience = 0;
        guardian.new_guardian_experience = 0;
    }

    /// Set every known reward to `points` tokens (`force`), or raise each to
    /// at least `points`; missing rewards are appended. Returns the new rank
    /// when the fixup changed it.
    pub fn set_guardian_rank_reward_levels(&mut self, points: i32, force: bool) -> Option<i32> {
        let guardian = self.profile.guardian_rank.get_or_insert_with(Default::default);
        let mut missing: Vec<&str> = GUARDIAN_RANK_REWARDS.to_vec();
        for reward in &mut guardian.rank_rewards {
            if let Some(pos) = missing.iter().position(|r| *r == reward.reward_data_path) {
                missing.remove(pos);
                if force || reward.num_tokens < points {
                    reward.num_tokens = points;
                }
            }
        }
        for reward in missing {
            guardian.rank_rewards.push(GuardianRankRewardSaveGameData {
                num_tokens: points,
                is_enabled: true,
                reward_data_path: reward.to_string(),
            });
        }
        self.fixup_guardian_rank(true)
    }

    /// The lowest guardian state that still wins against savegame-level
    /// data on load: rank equal to one token in every reward, nothing
    /// unspent. Returns the new rank.
    pub fn min_guardian_rank(&mut self) -> i32 {
        let guardian = self.profile.guardian_rank.get_or_insert_with(Default::default);
        guardian.guardian_rank = 0;
        guardian.available_tokens = 0;
        guardian.guardian_experience = 0;
        guardian.new_guardian_experience = 0;
        self.set_guardian_rank_reward_levels(1, true);
        self.guardian_rank()
    }
}

impl std::fmt::Debug for Bl3Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bl3Profile")
            .field("golden_keys", &self.golden_keys())
            .field("guardian_rank", &self.guardian_rank())
            .field("bank_items", &self.bank_items.len())
            .field("lost_loot_items", &self.lost_loot_items.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bl3_proto::GuardianRankProfileData;

    const CRADERS: &str = "BL3(AwAAAADHQ4C6yJOBkHsckEekyWhISinQpbNyysgdQgAAAAAAADIgAA==)";

    fn test_header() -> GvasHeader {
        GvasHeader {
            sg_version: 2,
            pkg_version: 516,
            engine_major: 4,
            engine_minor: 23,
            engine_patch: 1,
            engine_build: 9631694,
            build_id: Some("OAK-PATCHDIESEL".to_string()),
            fmt_version: 3,
            custom_format_data: vec![([3u8; 16], 1)],
            sg_type: Some("BP_DefaultOakProfile_C".to_string()),
        }
    }

    fn test_profile_record() -> Profile {
        let serial = ItemSerial::from_base64(CRADERS).unwrap();
        Profile {
            profile_sdu_list: vec![OakSduSaveGameData {
                sdu_data_path: ProfileSduKind::Bank.sdu_path().to_string(),
                sdu_level: 4,
            }],
            bank_inventory_list: vec![serial.serial_bytes().to_vec()],
            lost_loot_inventory_list: vec![serial.serial_bytes().to_vec()],
            guardian_rank: Some(GuardianRankProfileData {
                guardian_reward_random_seed: 987,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn test_profile() -> Bl3Profile {
        let data = test_header()
            .write(&test_profile_record().encode_to_vec(), FileKind::Profile)
            .unwrap();
        Bl3Profile::from_bytes(&data).unwrap()
    }

    #[test]
    fn test_roundtrip_is_byte_identical() {
        let data = test_header()
            .write(&test_profile_record().encode_to_vec(), FileKind::Profile)
            .unwrap();
        let mut profile = Bl3Profile::from_bytes(&data).unwrap();
        assert_eq!(profile.to_bytes().unwrap(), data);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.sav");
        let mut profile = test_profile();
        profile.save_to(&path).unwrap();
        let reloaded = Bl3Profile::from_path(&path).unwrap();
        assert_eq!(reloaded.bank_items().len(), 1);
        assert_eq!(reloaded.sdus().get(&ProfileSduKind::Bank), Some(&4));
    }

    #[test]
    fn test_wrong_record_kind() {
        // `save_game_id` encodes as a varint where the profile schema
        // expects a length-delimited field, so the decode fails.
        let character = bl3_proto::Character {
            save_game_id: 5,
            preferred_character_name: "x".repeat(40),
            inventory_items: vec![bl3_proto::OakInventoryItemSaveGameData {
                item_serial_number: vec![0xFF; 64],
                ..Default::default()
            }],
            ..Default::default()
        };
        let data = test_header()
            .write(&character.encode_to_vec(), FileKind::Profile)
            .unwrap();
        assert!(matches!(
            Bl3Profile::from_bytes(&data),
            Err(ProfileError::WrongRecordKind(_))
        ));
    }

    #[test]
    fn test_golden_keys() {
        let mut profile = test_profile();
        assert_eq!(profile.golden_keys(), 0);
        profile.set_golden_keys(150).unwrap();
        assert_eq!(profile.golden_keys(), 150);
        profile.set_golden_keys(20).unwrap();
        assert_eq!(profile.golden_keys(), 20);
        assert_eq!(profile.profile.bank_inventory_category_list.len(), 1);
        assert!(matches!(
            profile.set_golden_keys(-1),
            Err(ProfileError::KeysOutOfRange(-1))
        ));
    }

    #[test]
    fn test_profile_sdus() {
        let mut profile = test_profile();
        profile.set_max_sdus(None);
        let sdus = profile.sdus();
        for kind in ProfileSduKind::ALL {
            assert_eq!(sdus.get(&kind), Some(&kind.max_level()), "{kind:?}");
        }
    }

    #[test]
    fn test_bank_items() {
        let mut profile = test_profile();
        assert_eq!(profile.bank_items()[0].eng_name(), Some("Crader's EM-P5"));
        assert_eq!(profile.lost_loot_items().len(), 1);

        let index = profile.add_bank_item_from_base64(CRADERS).unwrap();
        assert_eq!(index, 1);
        assert_eq!(profile.bank_items().len(), 2);

        // An edit through the wrapper lands back in the record.
        profile.bank_item_mut(1).unwrap().set_level(80).unwrap();
        let bytes = profile.to_protobuf();
        let decoded = Profile::decode(bytes.as_slice()).unwrap();
        let reparsed = ItemSerial::from_bytes(decoded.bank_inventory_list[1].clone());
        assert_eq!(reparsed.level(), Some(80));
    }

    #[test]
    fn test_customization_unlocks_and_totals() {
        let mut profile = test_profile();
        assert_eq!(profile.char_skins().len(), CHAR_SKINS_DEFAULTS.len());

        profile.unlock_char_skins();
        profile.unlock_char_heads();
        profile.unlock_echo_themes();
        profile.unlock_emotes();
        profile.unlock_room_decorations();
        profile.unlock_weapon_skins();
        profile.unlock_weapon_trinkets();

        assert_eq!(profile.char_skins().len(), profile.char_skins_total());
        assert_eq!(profile.char_heads().len(), profile.char_heads_total());
        assert_eq!(profile.echo_themes().len(), profile.echo_themes_total());
        assert_eq!(profile.emotes().len(), profile.emotes_total());
        assert_eq!(profile.room_decorations().len(), profile.room_decorations_total());
        assert_eq!(profile.weapon_skins().len(), profile.weapon_skins_total());
        assert_eq!(profile.weapon_trinkets().len(), profile.weapon_trinkets_total());

        // Unlocking twice appends nothing.
        let count = profile.profile.unlocked_customizations.len();
        profile.unlock_char_skins();
        assert_eq!(profile.profile.unlocked_customizations.len(), count);

        profile.clear_all_customizations();
        assert_eq!(profile.char_skins().len(), CHAR_SKINS_DEFAULTS.len());
        assert!(profile.room_decorations().is_empty());
        assert!(profile.weapon_skins().is_empty());
    }

    #[test]
    fn test_alphabetize_cosmetics() {
        let mut profile = test_profile();
        // Unlock in reverse order, sprinkle in an unknown entry.
        for (path, _) in ROOM_DECORATIONS.iter().rev() {
            profile
                .profile
                .unlocked_crew_quarters_decorations
                .push(CrewQuartersDecorationItemSaveGameData {
                    is_new: false,
                    decoration_item_asset_path: (*path).to_string(),
                });
        }
        profile
            .profile
            .unlocked_crew_quarters_decorations
            .insert(0, CrewQuartersDecorationItemSaveGameData {
                is_new: true,
                decoration_item_asset_path: "/Game/Unreleased/RoomDecoration_Mystery.RoomDecoration_Mystery"
                    .to_string(),
            });

        profile.unlock_weapon_trinkets();
        profile.unlock_weapon_skins();

        profile.alphabetize_cosmetics();

        // Known decorations sorted by English name; the unknown one rides at
        // the end with its flag intact.
        let decos = &profile.profile.unlocked_crew_quarters_decorations;
        assert_eq!(decos.len(), ROOM_DECORATIONS.len() + 1);
        let names: Vec<&str> = decos[..ROOM_DECORATIONS.len()]
            .iter()
            .map(|d| {
                crate::reference::cosmetics::room_decoration_name(&d.decoration_item_asset_path)
                    .unwrap()
            })
            .collect();
        let mut sorted = names.clone();
        sorted.sort_by_key(|n| n.to_lowercase());
        assert_eq!(names, sorted);
        let last = decos.last().unwrap();
        assert!(last.decoration_item_asset_path.contains("Mystery"));
        assert!(last.is_new);

        // Skins come before trinkets, each block alphabetized.
        let parts = &profile.profile.unlocked_inventory_customization_parts;
        assert_eq!(parts.len(), WEAPON_SKINS.len() + WEAPON_TRINKETS.len());
        let skin_names: Vec<&str> = parts[..WEAPON_SKINS.len()]
            .iter()
            .map(|p| {
                crate::reference::cosmetics::weapon_skin_name(p.customization_part_hash).unwrap()
            })
            .collect();
        let mut sorted = skin_names.clone();
        sorted.sort_by_key(|n| n.to_lowercase());
        assert_eq!(skin_names, sorted);
    }

    #[test]
    fn test_guardian_fixup() {
        let mut profile = test_profile();
        assert_eq!(profile.guardian_rank(), 0);

        // Raising tokens raises the rank to the floor.
        assert_eq!(profile.set_guardian_rank_tokens(10), Some(10));
        assert_eq!(profile.guardian_rank(), 10);
        assert_eq!(profile.guardian_rank_tokens(), 10);

        // Lowering tokens does not lower the rank without force.
        assert_eq!(profile.set_guardian_rank_tokens(2), None);
        assert_eq!(profile.guardian_rank(), 10);

        // Forced fixup pulls it back down.
        assert_eq!(profile.fixup_guardian_rank(true), Some(2));
        assert_eq!(profile.guardian_rank(), 2);
    }

    #[test]
    fn test_guardian_reward_levels() {
        let mut profile = test_profile();
        let rank = profile.set_guardian_rank_reward_levels(5, false);
        let expected = 5 * GUARDIAN_RANK_REWARDS.len() as i32;
        assert_eq!(rank, Some(expected));

        // Non-forced raises only; an existing higher value survives.
        {
            let guardian = profile.profile.guardian_rank.as_mut().unwrap();
            guardian.rank_rewards[0].num_tokens = 40;
        }
        profile.set_guardian_rank_reward_levels(10, false);
        let guardian = profile.profile.guardian_rank.as_ref().unwrap();
        assert_eq!(guardian.rank_rewards[0].num_tokens, 40);
        assert!(guardian.rank_rewards[1..].iter().all(|r| r.num_tokens == 10));

        // Forced flattens everything.
        profile.set_guardian_rank_reward_levels(3, true);
        let guardian = profile.profile.guardian_rank.as_ref().unwrap();
        assert!(guardian.rank_rewards.iter().all(|r| r.num_tokens == 3));
    }

    #[test]
    fn test_min_guardian_rank() {
        let mut profile = test_profile();
        profile.set_guardian_rank_tokens(500);
        let rank = profile.min_guardian_rank();
        assert_eq!(rank, GUARDIAN_RANK_REWARDS.len() as i32);
        assert_eq!(profile.guardian_rank_tokens(), 0);
        let guardian = profile.profile.guardian_rank.as_ref().unwrap();
        assert_eq!(guardian.rank_rewards.len(), GUARDIAN_RANK_REWARDS.len());
        assert!(guardian.rank_rewards.iter().all(|r| r.num_tokens == 1));
        // The reward seed survives every reset.
        assert_eq!(guardian.guardian_reward_random_seed, 987);
    }

    #[test]
    fn test_zero_guardian_rank() {
        let mut profile = test_profile();
        profile.min_guardian_rank();
        profile.zero_guardian_rank();
        let guardian = profile.profile.guardian_rank.as_ref().unwrap();
        assert_eq!(guardian.guardian_rank, 0);
        assert_eq!(guardian.available_tokens, 0);
        assert!(guardian.rank_rewards.is_empty());
        assert_eq!(guardian.guardian_reward_random_seed, 987);
    }

    #[test]
    fn test_import_json_roundtrip() {
        let mut profile = test_profile();
        profile.set_golden_keys(33).unwrap();
        let json = profile.to_json().unwrap();

        let mut other = test_profile();
        other.import_json(&json).unwrap();
        assert_eq!(other.golden_keys(), 33);
        assert_eq!(other.bank_items().len(), 1);
    }
}
