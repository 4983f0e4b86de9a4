//! Savegame facade: load, query, and edit a single character.
//!
//! [`Bl3Save`] wraps the decoded [`Character`] record together with the GVAS
//! header it arrived in, so an unedited save writes back byte-identically.
//! Inventory items are wrapped in [`Bl3Item`] on load; their serial bytes are
//! pushed back into the record whenever the save is serialized.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use prost::Message;
use rand::RngCore;
use thiserror::Error;
use tracing::warn;

use bl3_proto::{
    Character, EquippedInventorySaveGameData, GameStatSaveGameData, InventoryCategorySaveData,
    MissionState, MissionStatusPlayerSaveGameData, OakInventoryItemSaveGameData, OakSduSaveGameData,
    VehicleUnlockedSaveGameData,
};

use crate::envelope::{EnvelopeError, FileKind, GvasHeader};
use crate::reference::challenges::{ChallengeKind, CUBE_PUZZLE_STAT, TAKEDOWN_MISSIONS};
use crate::reference::sdu::{AmmoKind, SduKind};
use crate::reference::slots::EquipSlot;
use crate::reference::vehicles::{VehicleKind, CHASSIS_EXCLUDERS};
use crate::reference::{
    CharClass, CurrencyKind, PetKind, LEVEL_CHALLENGES, LEVEL_STAT, MAX_LEVEL, MAX_SUPPORTED_LEVEL,
    REQUIRED_XP,
};
use crate::serial::{ItemSerial, SerialError};

/// Item flag bits in the inventory record.
const FLAG_SEEN: i32 = 0x1;
const FLAG_FAVORITE: i32 = 0x2;
const FLAG_TRASH: i32 = 0x4;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("unable to parse savegame (did you pass a profile instead?): {0}")]
    WrongRecordKind(#[source] prost::DecodeError),

    #[error("playthrough {to_pt} would leave a gap; at most {max} is allowed here")]
    PlaythroughGap { to_pt: usize, max: usize },

    #[error("playthrough {0} has no data in this save")]
    PlaythroughMissing(usize),

    #[error("source and target playthroughs are the same")]
    PlaythroughSelfCopy,

    #[error("playthrough {got} is not the last ({last}); only the last can be cleared")]
    PlaythroughNotLast { got: usize, last: usize },

    #[error("challenge not found in this save: {0}")]
    ChallengeNotFound(String),

    #[error("level {0} is outside 1..={MAX_SUPPORTED_LEVEL}")]
    LevelOutOfRange(u32),

    #[error("unknown character class: {0}")]
    UnknownClass(String),

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),

    #[error(transparent)]
    Serial(#[from] SerialError),

    #[error("invalid JSON record: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One inventory item: its serial plus the pickup bookkeeping around it.
#[derive(Debug, Clone)]
pub struct Bl3Item {
    serial: ItemSerial,
    pickup_order_index: i32,
    flags: i32,
    weapon_skin_path: String,
}

impl Bl3Item {
    fn from_record(record: &OakInventoryItemSaveGameData) -> Self {
        Bl3Item {
            serial: ItemSerial::from_bytes(record.item_serial_number.clone()),
            pickup_order_index: record.pickup_order_index,
            flags: record.flags,
            weapon_skin_path: record.weapon_skin_path.clone(),
        }
    }

    fn to_record(&self) -> OakInventoryItemSaveGameData {
        OakInventoryItemSaveGameData {
            item_serial_number: self.serial.serial_bytes().to_vec(),
            pickup_order_index: self.pickup_order_index,
            flags: self.flags,
            weapon_skin_path: self.weapon_skin_path.clone(),
        }
    }

    pub fn serial(&self) -> &ItemSerial {
        &self.serial
    }

    pub fn serial_mut(&mut self) -> &mut ItemSerial {
        &mut self.serial
    }

    /// Replace the serial bytes wholesale, re-parsing from scratch.
    pub fn set_serial_bytes(&mut self, serial: Vec<u8>) {
        self.serial = ItemSerial::from_bytes(serial);
    }

    pub fn pickup_order_index(&self) -> i32 {
        self.pickup_order_index
    }

    pub fn is_seen(&self) -> bool {
        self.flags & FLAG_SEEN != 0
    }

    pub fn is_favorite(&self) -> bool {
        self.flags & FLAG_FAVORITE != 0
    }

    pub fn is_trash(&self) -> bool {
        self.flags & FLAG_TRASH != 0
    }

    pub fn set_seen(&mut self, seen: bool) {
        if seen {
            self.flags |= FLAG_SEEN;
        } else {
            self.flags &= !FLAG_SEEN;
        }
    }

    /// Favorite and trash are mutually exclusive; setting one clears the
    /// other.
    pub fn set_favorite(&mut self, favorite: bool) {
        if favorite {
            self.flags = (self.flags & !FLAG_TRASH) | FLAG_FAVORITE;
        } else {
            self.flags &= !FLAG_FAVORITE;
        }
    }

    pub fn set_trash(&mut self, trash: bool) {
        if trash {
            self.flags = (self.flags & !FLAG_FAVORITE) | FLAG_TRASH;
        } else {
            self.flags &= !FLAG_TRASH;
        }
    }
}

/// A loaded character savegame.
pub struct Bl3Save {
    header: GvasHeader,
    character: Character,
    items: Vec<Bl3Item>,
    equip_slots: HashMap<EquipSlot, usize>,
}

impl Bl3Save {
    // ========================================================================
    // Load and store
    // ========================================================================

    /// Parse a whole savegame file.
    pub fn from_bytes(file_data: &[u8]) -> Result<Self, SaveError> {
        let (header, payload) = GvasHeader::read(file_data, FileKind::Savegame)?;
        let character = Character::decode(payload.as_slice()).map_err(SaveError::WrongRecordKind)?;
        Ok(Self::wrap(header, character))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SaveError> {
        Self::from_bytes(&fs::read(path)?)
    }

    fn wrap(header: GvasHeader, character: Character) -> Self {
        let items = character.inventory_items.iter().map(Bl3Item::from_record).collect();
        let mut equip_slots = HashMap::new();
        for (idx, equip) in character.equipped_inventory_list.iter().enumerate() {
            match EquipSlot::from_slot_path(&equip.slot_data_path) {
                Some(slot) => {
                    equip_slots.insert(slot, idx);
                }
                None => warn!(slot = %equip.slot_data_path, "ignoring unknown equip slot"),
            }
        }
        Bl3Save {
            header,
            character,
            items,
            equip_slots,
        }
    }

    /// Replace the record with freshly decoded protobuf bytes, keeping the
    /// envelope header.
    pub fn import_protobuf(&mut self, data: &[u8]) -> Result<(), SaveError> {
        let character = Character::decode(data).map_err(SaveError::WrongRecordKind)?;
        *self = Self::wrap(self.header.clone(), character);
        Ok(())
    }

    /// Replace the record from its JSON projection.
    pub fn import_json(&mut self, json: &str) -> Result<(), SaveError> {
        let character: Character = serde_json::from_str(json)?;
        *self = Self::wrap(self.header.clone(), character);
        Ok(())
    }

    /// Push every item's current serial bytes back into the record.
    fn sync_items(&mut self) {
        self.character.inventory_items = self.items.iter().map(Bl3Item::to_record).collect();
    }

    /// Serialize to full savegame file bytes.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>, SaveError> {
        self.sync_items();
        let payload = self.character.encode_to_vec();
        Ok(self.header.write(&payload, FileKind::Savegame)?)
    }

    pub fn save_to(&mut self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let data = self.to_bytes()?;
        Ok(fs::write(path, data)?)
    }

    /// Raw record bytes without the envelope.
    pub fn to_protobuf(&mut self) -> Vec<u8> {
        self.sync_items();
        self.character.encode_to_vec()
    }

    pub fn save_protobuf_to(&mut self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let data = self.to_protobuf();
        Ok(fs::write(path, data)?)
    }

    /// JSON projection of the record, defaults included, proto field names
    /// preserved.
    pub fn to_json(&mut self) -> Result<String, SaveError> {
        self.sync_items();
        Ok(serde_json::to_string_pretty(&self.character)?)
    }

    pub fn save_json_to(&mut self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let json = self.to_json()?;
        Ok(fs::write(path, json)?)
    }

    pub fn header(&self) -> &GvasHeader {
        &self.header
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    // ========================================================================
    // Identity
    // ========================================================================

    pub fn char_name(&self) -> &str {
        &self.character.preferred_character_name
    }

    pub fn set_char_name(&mut self, name: &str) {
        self.character.preferred_character_name = name.to_string();
    }

    pub fn savegame_id(&self) -> u32 {
        self.character.save_game_id
    }

    pub fn set_savegame_id(&mut self, id: u32) {
        self.character.save_game_id = id;
    }

    pub fn savegame_guid(&self) -> &str {
        &self.character.save_game_guid
    }

    /// Replace the savegame GUID with a fresh v4 UUID, stored the way the
    /// game does: uppercase hex, no dashes.
    pub fn randomize_guid(&mut self) {
        let mut bytes = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut bytes);
        bytes[6] = (bytes[6] & 0x0F) | 0x40;
        bytes[8] = (bytes[8] & 0x3F) | 0x80;
        self.character.save_game_guid = hex::encode_upper(bytes);
    }

    pub fn class(&self) -> Result<CharClass, SaveError> {
        let path = self
            .character
            .player_class_data
            .as_ref()
            .map(|d| d.player_class_path.as_str())
            .unwrap_or_default();
        CharClass::from_class_path(path).ok_or_else(|| SaveError::UnknownClass(path.to_string()))
    }

    /// Pet nicknames, keyed by pet type. Unknown keys are skipped.
    pub fn pet_names(&self) -> HashMap<PetKind, String> {
        self.character
            .nickname_mappings
            .iter()
            .filter_map(|m| PetKind::from_nickname_key(&m.key).map(|pet| (pet, m.value.clone())))
            .collect()
    }

    // ========================================================================
    // Experience and level
    // ========================================================================

    pub fn xp(&self) -> i32 {
        self.character.experience_points
    }

    /// Level derived from XP: the number of thresholds at or below it.
    pub fn level(&self) -> u32 {
        REQUIRED_XP
            .iter()
            .take_while(|&&threshold| self.character.experience_points >= threshold)
            .count() as u32
    }

    /// Set the character level by assigning XP. By default the minimum XP
    /// for that level; with `top_val`, one XP below the next threshold (not
    /// available at the cap).
    pub fn set_level(&mut self, level: u32, top_val: bool) -> Result<(), SaveError> {
        if level < 1 || level > MAX_SUPPORTED_LEVEL {
            return Err(SaveError::LevelOutOfRange(level));
        }
        let top_val = top_val && level != MAX_LEVEL && (level as usize) < REQUIRED_XP.len();

        self.character.experience_points = if top_val {
            REQUIRED_XP[level as usize] - 1
        } else {
            REQUIRED_XP[level as usize - 1]
        };

        self.set_stat(LEVEL_STAT, level as i32);
        self.unlock_skill_tree(level)?;
        Ok(())
    }

    /// Make sure the skill tree is usable after a level edit, and complete
    /// the level-gated challenges up to `level`.
    fn unlock_skill_tree(&mut self, level: u32) -> Result<(), SaveError> {
        if level > 1 {
            let ability = self.character.ability_data.get_or_insert_with(Default::default);
            if ability.tree_grade == 0 {
                ability.tree_grade = 2;
            }
        }
        for (challenge_level, challenge_path) in LEVEL_CHALLENGES {
            if level >= *challenge_level {
                self.unlock_challenge_path(challenge_path)?;
            }
        }
        Ok(())
    }

    fn set_stat(&mut self, stat_path: &str, value: i32) {
        for stat in &mut self.character.game_stats_data {
            if stat.stat_path == stat_path {
                stat.stat_value = value;
                return;
            }
        }
        self.character.game_stats_data.push(GameStatSaveGameData {
            stat_value: value,
            stat_path: stat_path.to_string(),
        });
    }

    // ========================================================================
    // Playthroughs
    // ========================================================================

    pub fn playthroughs_completed(&self) -> i32 {
        self.character.playthroughs_completed
    }

    pub fn set_playthroughs_completed(&mut self, count: i32) {
        self.character.playthroughs_completed = count;
    }

    /// Highest zero-indexed playthrough with actual data, or -1 when every
    /// per-playthrough list is empty.
    pub fn max_playthrough_with_data(&self) -> isize {
        let min = [
            self.character.mission_playthroughs_data.len(),
            self.character.active_travel_stations_for_playthrough.len(),
            self.character.last_active_travel_station_for_playthrough.len(),
            self.character.game_state_save_data_for_playthrough.len(),
        ]
        .into_iter()
        .min()
        .unwrap_or(0);
        min as isize - 1
    }

    pub fn pt_mayhem_levels(&self) -> Vec<i32> {
        self.character
            .game_state_save_data_for_playthrough
            .iter()
            .map(|d| d.mayhem_level)
            .collect()
    }

    pub fn pt_mayhem_level(&self, pt: usize) -> Option<i32> {
        self.character
            .game_state_save_data_for_playthrough
            .get(pt)
            .map(|d| d.mayhem_level)
    }

    pub fn set_pt_mayhem_level(&mut self, pt: usize, mayhem: i32) -> Result<(), SaveError> {
        self.character
            .game_state_save_data_for_playthrough
            .get_mut(pt)
            .ok_or(SaveError::PlaythroughMissing(pt))?
            .mayhem_level = mayhem;
        Ok(())
    }

    pub fn set_all_mayhem_levels(&mut self, mayhem: i32) {
        for state in &mut self.character.game_state_save_data_for_playthrough {
            state.mayhem_level = mayhem;
        }
    }

    pub fn pt_mayhem_seeds(&self) -> Vec<i32> {
        self.character
            .game_state_save_data_for_playthrough
            .iter()
            .map(|d| d.mayhem_random_seed)
            .collect()
    }

    pub fn set_pt_mayhem_seed(&mut self, pt: usize, seed: i32) -> Result<(), SaveError> {
        self.character
            .game_state_save_data_for_playthrough
            .get_mut(pt)
            .ok_or(SaveError::PlaythroughMissing(pt))?
            .mayhem_random_seed = seed;
        Ok(())
    }

    pub fn set_all_mayhem_seeds(&mut self, seed: i32) {
        for state in &mut self.character.game_state_save_data_for_playthrough {
            state.mayhem_random_seed = seed;
        }
    }

    /// Last station (fast travel, resurrection, level transition) visited
    /// per playthrough.
    pub fn pt_last_stations(&self) -> &[String] {
        &self.character.last_active_travel_station_for_playthrough
    }

    /// Active fast-travel station names for one playthrough.
    pub fn pt_active_ft_stations(&self, pt: usize) -> Option<Vec<&str>> {
        self.character
            .active_travel_stations_for_playthrough
            .get(pt)
            .map(|d| {
                d.active_travel_stations
                    .iter()
                    .map(|s| s.active_travel_station_name.as_str())
                    .collect()
            })
    }

    /// Mission class paths in `status` for one playthrough.
    pub fn pt_missions_in_state(&self, pt: usize, status: MissionState) -> Option<Vec<&str>> {
        self.character.mission_playthroughs_data.get(pt).map(|data| {
            data.mission_list
                .iter()
                .filter(|m| m.status == status as i32)
                .map(|m| m.mission_class_path.as_str())
                .collect()
        })
    }

    pub fn pt_active_missions(&self, pt: usize) -> Option<Vec<&str>> {
        self.pt_missions_in_state(pt, MissionState::MsActive)
    }

    pub fn pt_completed_missions(&self, pt: usize) -> Option<Vec<&str>> {
        self.pt_missions_in_state(pt, MissionState::MsComplete)
    }

    pub fn copy_mission_pt(&mut self, from_pt: usize, to_pt: usize) -> Result<(), SaveError> {
        let list = &mut self.character.mission_playthroughs_data;
        validate_pt_copy(list.len(), list.len(), from_pt, to_pt, true)?;
        let value = list[from_pt].clone();
        copy_into(list, value, to_pt);
        Ok(())
    }

    pub fn copy_active_ft_stations_pt(&mut self, from_pt: usize, to_pt: usize) -> Result<(), SaveError> {
        let list = &mut self.character.active_travel_stations_for_playthrough;
        validate_pt_copy(list.len(), list.len(), from_pt, to_pt, true)?;
        let value = list[from_pt].clone();
        copy_into(list, value, to_pt);
        Ok(())
    }

    pub fn copy_last_station_pt(&mut self, from_pt: usize, to_pt: usize) -> Result<(), SaveError> {
        let list = &mut self.character.last_active_travel_station_for_playthrough;
        validate_pt_copy(list.len(), list.len(), from_pt, to_pt, true)?;
        let value = list[from_pt].clone();
        copy_into(list, value, to_pt);
        Ok(())
    }

    pub fn copy_game_state_pt(&mut self, from_pt: usize, to_pt: usize) -> Result<(), SaveError> {
        let list = &mut self.character.game_state_save_data_for_playthrough;
        validate_pt_copy(list.len(), list.len(), from_pt, to_pt, true)?;
        let value = list[from_pt].clone();
        copy_into(list, value, to_pt);
        Ok(())
    }

    /// Copy all four per-playthrough lists from `from_pt` to `to_pt` in this
    /// save.
    pub fn copy_playthrough_data(&mut self, from_pt: usize, to_pt: usize) -> Result<(), SaveError> {
        self.copy_mission_pt(from_pt, to_pt)?;
        self.copy_active_ft_stations_pt(from_pt, to_pt)?;
        self.copy_last_station_pt(from_pt, to_pt)?;
        self.copy_game_state_pt(from_pt, to_pt)
    }

    /// Copy all four per-playthrough lists out of another save. Unlike the
    /// in-save copy, matching indices are allowed.
    pub fn copy_playthrough_data_from(
        &mut self,
        source: &Bl3Save,
        from_pt: usize,
        to_pt: usize,
    ) -> Result<(), SaveError> {
        let src = &source.character;
        let dst = &self.character;
        validate_pt_copy(
            src.mission_playthroughs_data.len(),
            dst.mission_playthroughs_data.len(),
            from_pt,
            to_pt,
            false,
        )?;
        validate_pt_copy(
            src.active_travel_stations_for_playthrough.len(),
            dst.active_travel_stations_for_playthrough.len(),
            from_pt,
            to_pt,
            false,
        )?;
        validate_pt_copy(
            src.last_active_travel_station_for_playthrough.len(),
            dst.last_active_travel_station_for_playthrough.len(),
            from_pt,
            to_pt,
            false,
        )?;
        validate_pt_copy(
            src.game_state_save_data_for_playthrough.len(),
            dst.game_state_save_data_for_playthrough.len(),
            from_pt,
            to_pt,
            false,
        )?;

        copy_into(
            &mut self.character.mission_playthroughs_data,
            source.character.mission_playthroughs_data[from_pt].clone(),
            to_pt,
        );
        copy_into(
            &mut self.character.active_travel_stations_for_playthrough,
            source.character.active_travel_stations_for_playthrough[from_pt].clone(),
            to_pt,
        );
        copy_into(
            &mut self.character.last_active_travel_station_for_playthrough,
            source.character.last_active_travel_station_for_playthrough[from_pt].clone(),
            to_pt,
        );
        copy_into(
            &mut self.character.game_state_save_data_for_playthrough,
            source.character.game_state_save_data_for_playthrough[from_pt].clone(),
            to_pt,
        );
        Ok(())
    }

    pub fn clear_mission_pt(&mut self, pt: usize) -> Result<(), SaveError> {
        pop_last_pt(&mut self.character.mission_playthroughs_data, pt)
    }

    pub fn clear_active_ft_stations_pt(&mut self, pt: usize) -> Result<(), SaveError> {
        pop_last_pt(&mut self.character.active_travel_stations_for_playthrough, pt)
    }

    pub fn clear_last_station_pt(&mut self, pt: usize) -> Result<(), SaveError> {
        pop_last_pt(&mut self.character.last_active_travel_station_for_playthrough, pt)
    }

    pub fn clear_game_state_pt(&mut self, pt: usize) -> Result<(), SaveError> {
        pop_last_pt(&mut self.character.game_state_save_data_for_playthrough, pt)
    }

    /// Clear playthrough `pt` and everything above it, highest first.
    pub fn clear_playthrough_data(&mut self, pt: usize) -> Result<(), SaveError> {
        let max_pt = self.max_playthrough_with_data();
        if max_pt < 0 || pt as isize > max_pt {
            return Ok(());
        }
        for current in (pt..=max_pt as usize).rev() {
            self.clear_mission_pt(current)?;
            self.clear_active_ft_stations_pt(current)?;
            self.clear_last_station_pt(current)?;
            self.clear_game_state_pt(current)?;
        }
        Ok(())
    }

    // ========================================================================
    // Currencies
    // ========================================================================

    pub fn currency(&self, kind: CurrencyKind) -> i32 {
        self.character
            .inventory_category_list
            .iter()
            .find(|c| c.base_category_definition_hash == kind.hash())
            .map(|c| c.quantity)
            .unwrap_or(0)
    }

    pub fn set_currency(&mut self, kind: CurrencyKind, value: i32) {
        for category in &mut self.character.inventory_category_list {
            if category.base_category_definition_hash == kind.hash() {
                category.quantity = value;
                return;
            }
        }
        self.character
            .inventory_category_list
            .push(InventoryCategorySaveData {
                base_category_definition_hash: kind.hash(),
                quantity: value,
            });
    }

    pub fn money(&self) -> i32 {
        self.currency(CurrencyKind::Money)
    }

    pub fn set_money(&mut self, value: i32) {
        self.set_currency(CurrencyKind::Money, value);
    }

    pub fn eridium(&self) -> i32 {
        self.currency(CurrencyKind::Eridium)
    }

    pub fn set_eridium(&mut self, value: i32) {
        self.set_currency(CurrencyKind::Eridium, value);
    }

    // ========================================================================
    // SDUs and ammo
    // ========================================================================

    /// Purchased SDU tiers. Unknown SDU paths are skipped.
    pub fn sdus(&self) -> HashMap<SduKind, i32> {
        self.character
            .sdu_list
            .iter()
            .filter_map(|s| SduKind::from_sdu_path(&s.sdu_data_path).map(|k| (k, s.sdu_level)))
            .collect()
    }

    /// Purchased SDU tiers together with each line's cap, for display.
    pub fn sdus_with_max(&self) -> HashMap<SduKind, (i32, i32)> {
        self.sdus()
            .into_iter()
            .map(|(kind, level)| (kind, (level, kind.max_level())))
            .collect()
    }

    /// Max out the given SDUs (all of them by default), appending records
    /// that are missing entirely.
    pub fn set_max_sdus(&mut self, kinds: Option<&[SduKind]>) {
        let mut wanted: Vec<SduKind> = kinds.unwrap_or(&SduKind::ALL).to_vec();
        for sdu in &mut self.character.sdu_list {
            if let Some(kind) = SduKind::from_sdu_path(&sdu.sdu_data_path) {
                if let Some(pos) = wanted.iter().position(|k| *k == kind) {
                    wanted.remove(pos);
                    sdu.sdu_level = kind.max_level();
                }
            }
        }
        for kind in wanted {
            self.character.sdu_list.push(OakSduSaveGameData {
                sdu_data_path: kind.sdu_path().to_string(),
                sdu_level: kind.max_level(),
            });
        }
    }

    /// Current ammo counts. Eridium sometimes shows up as a resource pool;
    /// it is not ammo and is skipped.
    pub fn ammo_counts(&self) -> HashMap<AmmoKind, i32> {
        self.character
            .resource_pools
            .iter()
            .filter(|p| !p.resource_path.contains("Eridium"))
            .filter_map(|p| {
                AmmoKind::from_resource_path(&p.resource_path).map(|k| (k, p.amount as i32))
            })
            .collect()
    }

    /// Fill every known ammo pool to its cap.
    pub fn set_max_ammo(&mut self) {
        for pool in &mut self.character.resource_pools {
            if let Some(kind) = AmmoKind::from_resource_path(&pool.resource_path) {
                pool.amount = kind.max_amount() as f32;
            }
        }
    }

    // ========================================================================
    // Challenges
    // ========================================================================

    /// Status of the challenges this editor knows about, filtered to those
    /// valid for the character's class.
    pub fn interesting_challenges(&self) -> HashMap<ChallengeKind, bool> {
        let class = self.class().ok();
        self.character
            .challenge_data
            .iter()
            .filter_map(|c| {
                ChallengeKind::from_challenge_path(&c.challenge_class_path)
                    .map(|k| (k, c.currently_completed))
            })
            .filter(|(kind, _)| match kind.class_lock() {
                Some(lock) => class == Some(lock),
                None => true,
            })
            .collect()
    }

    /// Mark a challenge record complete. The record is expected to exist
    /// already; a missing one is an error rather than an append.
    fn unlock_challenge_path(&mut self, challenge_path: &str) -> Result<(), SaveError> {
        for challenge in &mut self.character.challenge_data {
            if challenge.challenge_class_path == challenge_path {
                challenge.currently_completed = true;
                challenge.is_active = false;
                challenge.completed_count = 1;
                challenge.progress_counter = 0;
                challenge.completed_progress_level = 0;
                return Ok(());
            }
        }
        Err(SaveError::ChallengeNotFound(challenge_path.to_string()))
    }

    pub fn unlock_challenge(&mut self, kind: ChallengeKind) -> Result<(), SaveError> {
        self.unlock_challenge_path(kind.challenge_path())
    }

    /// Unlock the COM-slot challenge appropriate for this character's class.
    pub fn unlock_com_challenge(&mut self) -> Result<(), SaveError> {
        let class = self.class()?;
        self.unlock_challenge(ChallengeKind::com_for_class(class))
    }

    // ========================================================================
    // Equipment slots
    // ========================================================================

    pub fn equip_slot(&self, slot: EquipSlot) -> Option<&EquippedInventorySaveGameData> {
        let idx = *self.equip_slots.get(&slot)?;
        self.character.equipped_inventory_list.get(idx)
    }

    /// The item currently equipped in `slot`, if any.
    pub fn equipped_item(&self, slot: EquipSlot) -> Option<&Bl3Item> {
        let equip = self.equip_slot(slot)?;
        usize::try_from(equip.inventory_list_index)
            .ok()
            .and_then(|idx| self.items.get(idx))
    }

    /// Enable the given slots (all of them by default). Unlocking the
    /// artifact or COM slot also unlocks its paired challenge.
    pub fn unlock_slots(&mut self, slots: Option<&[EquipSlot]>) -> Result<(), SaveError> {
        for slot in slots.unwrap_or(&EquipSlot::ALL).to_vec() {
            if let Some(&idx) = self.equip_slots.get(&slot) {
                if let Some(equip) = self.character.equipped_inventory_list.get_mut(idx) {
                    equip.enabled = true;
                }
            }
            match slot {
                EquipSlot::Artifact => self.unlock_challenge(ChallengeKind::Artifact)?,
                EquipSlot::ClassMod => self.unlock_com_challenge()?,
                _ => {}
            }
        }
        Ok(())
    }

    // ========================================================================
    // Inventory
    // ========================================================================

    pub fn items(&self) -> &[Bl3Item] {
        &self.items
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut Bl3Item> {
        self.items.get_mut(index)
    }

    /// Append an item. Prior indices stay valid; returns the new index.
    pub fn add_item(&mut self, item: Bl3Item) -> usize {
        self.character.inventory_items.push(item.to_record());
        self.items.push(item);
        self.items.len() - 1
    }

    /// Build a new item around `serial` with a unique pickup order index,
    /// seen and favorited so it sorts usefully in game.
    pub fn create_new_item(&self, serial: Vec<u8>) -> Bl3Item {
        let max_pickup_order = self
            .items
            .iter()
            .map(Bl3Item::pickup_order_index)
            .max()
            .unwrap_or(0);
        Bl3Item {
            serial: ItemSerial::from_bytes(serial),
            pickup_order_index: max_pickup_order + 1,
            flags: FLAG_SEEN | FLAG_FAVORITE,
            weapon_skin_path: String::new(),
        }
    }

    /// Build a new item from a `BL3(...)` serial.
    pub fn create_new_item_from_base64(&self, wrapped: &str) -> Result<Bl3Item, SerialError> {
        let item = ItemSerial::from_base64(wrapped)?;
        Ok(self.create_new_item(item.serial_bytes().to_vec()))
    }

    /// Create and append in one step; returns the new index.
    pub fn add_new_item(&mut self, serial: Vec<u8>) -> usize {
        let item = self.create_new_item(serial);
        self.add_item(item)
    }

    /// Replace whatever is equipped in `slot` with the given serial. Creates
    /// a new item (and wires the slot to it) when the slot is empty.
    pub fn overwrite_item_in_slot(&mut self, slot: EquipSlot, serial: Vec<u8>) -> Result<(), SaveError> {
        let equipped_idx = self.equip_slot(slot).and_then(|equip| {
            usize::try_from(equip.inventory_list_index)
                .ok()
                .filter(|idx| *idx < self.items.len())
        });
        match equipped_idx {
            Some(idx) => {
                self.items[idx].set_serial_bytes(serial);
            }
            None => {
                let new_index = self.add_new_item(serial);
                match self.equip_slots.get(&slot) {
                    Some(&slot_idx) => {
                        self.character.equipped_inventory_list[slot_idx].inventory_list_index =
                            new_index as i32;
                    }
                    None => {
                        self.character
                            .equipped_inventory_list
                            .push(EquippedInventorySaveGameData {
                                inventory_list_index: new_index as i32,
                                enabled: true,
                                slot_data_path: slot.slot_path().to_string(),
                                trinket_data_path: String::new(),
                            });
                        self.equip_slots
                            .insert(slot, self.character.equipped_inventory_list.len() - 1);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn overwrite_item_in_slot_base64(
        &mut self,
        slot: EquipSlot,
        wrapped: &str,
    ) -> Result<(), SaveError> {
        let item = ItemSerial::from_base64(wrapped)?;
        self.overwrite_item_in_slot(slot, item.serial_bytes().to_vec())
    }

    // ========================================================================
    // Vehicles
    // ========================================================================

    /// Unlocked chassis count per vehicle.
    pub fn vehicle_chassis_counts(&self) -> HashMap<VehicleKind, usize> {
        let mut counts = HashMap::new();
        for unlocked in &self.character.vehicles_unlocked_data {
            if let Some(vehicle) = VehicleKind::from_chassis(&unlocked.asset_path) {
                *counts.entry(vehicle).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Unlock chassis for one vehicle, or every vehicle. Already-unlocked
    /// and excluded chassis are left alone.
    pub fn unlock_vehicle_chassis(&mut self, vehicle: Option<VehicleKind>) {
        let current: Vec<String> = self
            .character
            .vehicles_unlocked_data
            .iter()
            .map(|v| v.asset_path.clone())
            .collect();
        for kind in vehicle.map(|v| vec![v]).unwrap_or_else(|| VehicleKind::ALL.to_vec()) {
            for chassis in kind.chassis() {
                if !current.iter().any(|c| c == chassis) && !CHASSIS_EXCLUDERS.contains(chassis) {
                    self.character
                        .vehicles_unlocked_data
                        .push(VehicleUnlockedSaveGameData {
                            asset_path: (*chassis).to_string(),
                            just_unlocked: true,
                        });
                }
            }
        }
    }

    /// Unlocked functional part count per vehicle.
    pub fn vehicle_part_counts(&self) -> HashMap<VehicleKind, usize> {
        self.count_vehicle_parts(VehicleKind::from_part)
    }

    /// Unlocked skin count per vehicle.
    pub fn vehicle_skin_counts(&self) -> HashMap<VehicleKind, usize> {
        self.count_vehicle_parts(VehicleKind::from_skin)
    }

    fn count_vehicle_parts(
        &self,
        classify: impl Fn(&str) -> Option<VehicleKind>,
    ) -> HashMap<VehicleKind, usize> {
        let mut counts = HashMap::new();
        for part in &self.character.vehicle_parts_unlocked {
            if let Some(vehicle) = classify(part) {
                *counts.entry(vehicle).or_insert(0) += 1;
            }
        }
        counts
    }

    pub fn unlock_vehicle_parts(&mut self, vehicle: Option<VehicleKind>) {
        self.unlock_vehicle_part_list(vehicle, VehicleKind::parts);
    }

    pub fn unlock_vehicle_skins(&mut self, vehicle: Option<VehicleKind>) {
        self.unlock_vehicle_part_list(vehicle, VehicleKind::skins);
    }

    fn unlock_vehicle_part_list(
        &mut self,
        vehicle: Option<VehicleKind>,
        parts_of: impl Fn(VehicleKind) -> &'static [&'static str],
    ) {
        for kind in vehicle.map(|v| vec![v]).unwrap_or_else(|| VehicleKind::ALL.to_vec()) {
            for part in parts_of(kind) {
                if !self.character.vehicle_parts_unlocked.iter().any(|p| p == part) {
                    self.character.vehicle_parts_unlocked.push((*part).to_string());
                }
            }
        }
    }

    // ========================================================================
    // Guardian rank
    // ========================================================================

    pub fn guardian_rank(&self) -> i32 {
        self.character
            .guardian_rank_character_data
            .as_ref()
            .map(|g| g.guardian_rank)
            .unwrap_or(0)
    }

    /// Zero the save-level guardian block so the profile's values win on
    /// next load. `guardian_reward_random_seed` is deliberately left alone.
    pub fn zero_guardian_rank(&mut self) {
        let guardian = self
            .character
            .guardian_rank_character_data
            .get_or_insert_with(Default::default);
        guardian.guardian_available_tokens = 0;
        guardian.guardian_rank = 0;
        guardian.guardian_experience = 0;
        guardian.rank_rewards.clear();
        guardian.rank_perks.clear();
        guardian.new_guardian_experience = 0;
        guardian.is_rank_system_enabled = false;
    }

    // ========================================================================
    // Misc fixups
    // ========================================================================

    /// Mark the Takedown Discovery missions complete in every playthrough,
    /// injecting them where absent.
    pub fn clear_takedown_discovery(&mut self) {
        for pt in &mut self.character.mission_playthroughs_data {
            let mut seen: Vec<&str> = Vec::new();
            for mission in &mut pt.mission_list {
                if let Some((path, _, objectives)) = TAKEDOWN_MISSIONS
                    .iter()
                    .find(|(path, _, _)| *path == mission.mission_class_path)
                {
                    seen.push(*path);
                    mission.status = MissionState::MsComplete as i32;
                    mission.objectives_progress = objectives.to_vec();
                    mission.kickoff_played = true;
                    mission.has_been_viewed_in_log = true;
                }
            }
            for (path, objective_set, objectives) in TAKEDOWN_MISSIONS {
                if !seen.contains(path) {
                    pt.mission_list.push(MissionStatusPlayerSaveGameData {
                        status: MissionState::MsComplete as i32,
                        has_been_viewed_in_log: true,
                        objectives_progress: objectives.to_vec(),
                        mission_class_path: (*path).to_string(),
                        active_objective_set_path: (*objective_set).to_string(),
                        dlc_package_id: 0,
                        kickoff_played: true,
                        league_instance: 0,
                    });
                }
            }
        }
    }

    /// Make the Eridian cube puzzle redeemable again: drop its stat and
    /// reset the challenge tracking it.
    pub fn unlock_cube_puzzle(&mut self) {
        self.character
            .game_stats_data
            .retain(|stat| stat.stat_path != CUBE_PUZZLE_STAT);

        for challenge in &mut self.character.challenge_data {
            let tracks_cube = challenge
                .stat_instance_state
                .first()
                .map(|s| s.challenge_stat_path == CUBE_PUZZLE_STAT)
                .unwrap_or(false);
            if tracks_cube {
                challenge.completed_count = 0;
                challenge.currently_completed = false;
                challenge.completed_progress_level = 0;
                if let Some(stat) = challenge.stat_instance_state.first_mut() {
                    stat.current_stat_value = 0;
                }
            }
        }
    }
}

impl std::fmt::Debug for Bl3Save {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bl3Save")
            .field("char_name", &self.char_name())
            .field("class", &self.class().ok())
            .field("level", &self.level())
            .field("playthroughs_completed", &self.playthroughs_completed())
            .field("money", &self.money())
            .field("eridium", &self.eridium())
            .field("items", &self.items.len())
            .finish()
    }
}

/// Reject playthrough copies that would index past the data or leave gaps.
fn validate_pt_copy(
    source_len: usize,
    target_len: usize,
    from_pt: usize,
    to_pt: usize,
    same_save: bool,
) -> Result<(), SaveError> {
    if from_pt >= source_len {
        return Err(SaveError::PlaythroughMissing(from_pt));
    }
    if to_pt > target_len {
        return Err(SaveError::PlaythroughGap {
            to_pt,
            max: target_len,
        });
    }
    if same_save && from_pt == to_pt {
        return Err(SaveError::PlaythroughSelfCopy);
    }
    Ok(())
}

/// Replace or append the `to_pt` element.
fn copy_into<T>(target: &mut Vec<T>, value: T, to_pt: usize) {
    if to_pt == target.len() {
        target.push(value);
    } else {
        target[to_pt] = value;
    }
}

/// Pop `pt`, which must be the last element.
fn pop_last_pt<T>(list: &mut Vec<T>, pt: usize) -> Result<(), SaveError> {
    if list.is_empty() || pt != list.len() - 1 {
        return Err(SaveError::PlaythroughNotLast {
            got: pt,
            last: list.len().saturating_sub(1),
        });
    }
    list.pop();
    Ok(())
}
