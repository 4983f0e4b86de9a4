//! The per-character savegame record and its nested messages.

use serde::{Deserialize, Serialize};

use crate::shared::{
    ChallengeSaveGameData, GameStatSaveGameData, InventoryCategorySaveData, OakSduSaveGameData,
};

#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct PlayerClassSaveGameData {
    #[prost(string, tag = "1")]
    pub player_class_path: String,
    #[prost(uint32, tag = "2")]
    pub dlc_package_id: u32,
}

/// Ammo pools (and, rarely, other resources) with their current fill.
#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct ResourcePoolSavegameData {
    #[prost(float, tag = "1")]
    pub amount: f32,
    #[prost(string, tag = "2")]
    pub resource_path: String,
}

/// Mission progress state machine values.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    prost::Enumeration,
)]
#[repr(i32)]
pub enum MissionState {
    MsNotStarted = 0,
    MsActive = 1,
    MsComplete = 2,
    MsFailed = 3,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct MissionStatusPlayerSaveGameData {
    #[prost(enumeration = "MissionState", tag = "1")]
    pub status: i32,
    #[prost(bool, tag = "2")]
    pub has_been_viewed_in_log: bool,
    #[prost(int32, repeated, tag = "3")]
    pub objectives_progress: Vec<i32>,
    #[prost(string, tag = "4")]
    pub mission_class_path: String,
    #[prost(string, tag = "5")]
    pub active_objective_set_path: String,
    #[prost(uint32, tag = "6")]
    pub dlc_package_id: u32,
    #[prost(bool, tag = "7")]
    pub kickoff_played: bool,
    #[prost(uint32, tag = "8")]
    pub league_instance: u32,
}

/// All mission state for one playthrough.
#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct MissionPlaythroughSaveGameData {
    #[prost(message, repeated, tag = "1")]
    pub mission_list: Vec<MissionStatusPlayerSaveGameData>,
    #[prost(string, tag = "2")]
    pub tracked_mission_class_path: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct ActiveFastTravelSaveData {
    #[prost(string, tag = "1")]
    pub active_travel_station_name: String,
    #[prost(bool, tag = "2")]
    pub blacklisted: bool,
}

/// Fast-travel activation state for one playthrough.
#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct PlaythroughActiveFastTravelSaveData {
    #[prost(message, repeated, tag = "1")]
    pub active_travel_stations: Vec<ActiveFastTravelSaveData>,
}

/// Per-playthrough game state; Mayhem mode lives here.
#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct GameStateSaveData {
    #[prost(int32, tag = "1")]
    pub mayhem_level: i32,
    #[prost(int32, tag = "2")]
    pub mayhem_random_seed: i32,
}

/// One equipment slot, pointing into the inventory list by index.
#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct EquippedInventorySaveGameData {
    #[prost(int32, tag = "1")]
    pub inventory_list_index: i32,
    #[prost(bool, tag = "2")]
    pub enabled: bool,
    #[prost(string, tag = "3")]
    pub slot_data_path: String,
    #[prost(string, tag = "4")]
    pub trinket_data_path: String,
}

/// One owned item. `flags` bits: 0x1 seen, 0x2 favorite, 0x4 trash.
#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct OakInventoryItemSaveGameData {
    #[prost(bytes = "vec", tag = "1")]
    pub item_serial_number: Vec<u8>,
    #[prost(int32, tag = "2")]
    pub pickup_order_index: i32,
    #[prost(int32, tag = "3")]
    pub flags: i32,
    #[prost(string, tag = "4")]
    pub weapon_skin_path: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct OakAbilityTreeItemSaveGameData {
    #[prost(string, tag = "1")]
    pub item_asset_path: String,
    #[prost(int32, tag = "2")]
    pub points: i32,
    #[prost(int32, tag = "3")]
    pub max_points: i32,
}

/// Skill tree state. `tree_grade` 0 means the tree is still locked.
#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct OakAbilitySaveGameData {
    #[prost(int32, tag = "1")]
    pub ability_points: i32,
    #[prost(message, repeated, tag = "2")]
    pub tree_item_list: Vec<OakAbilityTreeItemSaveGameData>,
    #[prost(int32, tag = "3")]
    pub tree_grade: i32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct GuardianRankRewardCharacterSaveGameData {
    #[prost(int32, tag = "1")]
    pub num_tokens: i32,
    #[prost(bool, tag = "2")]
    pub is_enabled: bool,
    #[prost(string, tag = "3")]
    pub reward_data_path: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct GuardianRankPerkCharacterSaveGameData {
    #[prost(bool, tag = "1")]
    pub is_enabled: bool,
    #[prost(string, tag = "2")]
    pub perk_data_path: String,
}

/// Character-level mirror of the profile's guardian rank block.
#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct GuardianRankCharacterSaveGameData {
    #[prost(int32, tag = "1")]
    pub guardian_available_tokens: i32,
    #[prost(message, repeated, tag = "2")]
    pub rank_rewards: Vec<GuardianRankRewardCharacterSaveGameData>,
    #[prost(int32, tag = "3")]
    pub guardian_rank: i32,
    #[prost(int32, tag = "4")]
    pub guardian_experience: i32,
    #[prost(int32, tag = "5")]
    pub guardian_reward_random_seed: i32,
    #[prost(bool, tag = "6")]
    pub is_rank_system_enabled: bool,
    #[prost(message, repeated, tag = "7")]
    pub rank_perks: Vec<GuardianRankPerkCharacterSaveGameData>,
    #[prost(int64, tag = "8")]
    pub new_guardian_experience: i64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct VehicleUnlockedSaveGameData {
    #[prost(string, tag = "1")]
    pub asset_path: String,
    #[prost(bool, tag = "2")]
    pub just_unlocked: bool,
}

/// Key/value pet nickname assignment.
#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct NicknameMapping {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

/// The top-level per-character savegame record.
#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct Character {
    #[prost(uint32, tag = "1")]
    pub save_game_id: u32,
    #[prost(int64, tag = "2")]
    pub last_save_timestamp: i64,
    #[prost(uint32, tag = "3")]
    pub time_played_seconds: u32,
    #[prost(message, optional, tag = "4")]
    pub player_class_data: Option<PlayerClassSaveGameData>,
    #[prost(message, repeated, tag = "5")]
    pub resource_pools: Vec<ResourcePoolSavegameData>,
    #[prost(int32, tag = "7")]
    pub experience_points: i32,
    #[prost(message, repeated, tag = "8")]
    pub game_stats_data: Vec<GameStatSaveGameData>,
    #[prost(message, repeated, tag = "9")]
    pub inventory_category_list: Vec<InventoryCategorySaveData>,
    #[prost(message, repeated, tag = "10")]
    pub inventory_items: Vec<OakInventoryItemSaveGameData>,
    #[prost(message, repeated, tag = "11")]
    pub equipped_inventory_list: Vec<EquippedInventorySaveGameData>,
    #[prost(int32, repeated, tag = "12")]
    pub active_weapon_list: Vec<i32>,
    #[prost(message, optional, tag = "13")]
    pub ability_data: Option<OakAbilitySaveGameData>,
    #[prost(int32, tag = "14")]
    pub last_play_through_index: i32,
    #[prost(int32, tag = "15")]
    pub playthroughs_completed: i32,
    #[prost(bool, tag = "16")]
    pub show_new_playthrough_notification: bool,
    #[prost(message, repeated, tag = "17")]
    pub mission_playthroughs_data: Vec<MissionPlaythroughSaveGameData>,
    #[prost(message, repeated, tag = "18")]
    pub active_travel_stations_for_playthrough: Vec<PlaythroughActiveFastTravelSaveData>,
    #[prost(string, repeated, tag = "20")]
    pub last_active_travel_station_for_playthrough: Vec<String>,
    #[prost(message, repeated, tag = "21")]
    pub game_state_save_data_for_playthrough: Vec<GameStateSaveData>,
    #[prost(message, repeated, tag = "22")]
    pub challenge_data: Vec<ChallengeSaveGameData>,
    #[prost(message, repeated, tag = "23")]
    pub sdu_list: Vec<OakSduSaveGameData>,
    #[prost(string, repeated, tag = "24")]
    pub selected_customizations: Vec<String>,
    #[prost(message, repeated, tag = "27")]
    pub vehicles_unlocked_data: Vec<VehicleUnlockedSaveGameData>,
    #[prost(string, repeated, tag = "28")]
    pub vehicle_parts_unlocked: Vec<String>,
    #[prost(string, tag = "30")]
    pub preferred_character_name: String,
    #[prost(message, repeated, tag = "31")]
    pub nickname_mappings: Vec<NicknameMapping>,
    #[prost(string, tag = "33")]
    pub save_game_guid: String,
    #[prost(message, optional, tag = "34")]
    pub guardian_rank_character_data: Option<GuardianRankCharacterSaveGameData>,
}
