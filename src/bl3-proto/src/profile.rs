//! The shared profile record and its nested messages.

use serde::{Deserialize, Serialize};

use crate::shared::{InventoryCategorySaveData, OakSduSaveGameData};

/// One unlocked customization (skins, heads, ECHO themes, emotes), keyed by
/// asset path.
#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct OakCustomizationSaveGameData {
    #[prost(bool, tag = "1")]
    pub is_new: bool,
    #[prost(string, tag = "2")]
    pub customization_asset_path: String,
}

/// One unlocked crew-quarters decoration.
#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct CrewQuartersDecorationItemSaveGameData {
    #[prost(bool, tag = "1")]
    pub is_new: bool,
    #[prost(string, tag = "2")]
    pub decoration_item_asset_path: String,
}

/// One unlocked weapon skin or trinket, keyed by part hash.
#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct OakInventoryCustomizationPartInfo {
    #[prost(uint32, tag = "1")]
    pub customization_part_hash: u32,
    #[prost(bool, tag = "2")]
    pub is_new: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct GuardianRankRewardSaveGameData {
    #[prost(int32, tag = "1")]
    pub num_tokens: i32,
    #[prost(bool, tag = "2")]
    pub is_enabled: bool,
    #[prost(string, tag = "3")]
    pub reward_data_path: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct GuardianRankPerkSaveGameData {
    #[prost(bool, tag = "1")]
    pub is_enabled: bool,
    #[prost(string, tag = "2")]
    pub perk_data_path: String,
}

/// Account-wide guardian rank progression.
#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct GuardianRankProfileData {
    #[prost(int32, tag = "1")]
    pub available_tokens: i32,
    #[prost(message, repeated, tag = "2")]
    pub rank_rewards: Vec<GuardianRankRewardSaveGameData>,
    #[prost(int32, tag = "3")]
    pub guardian_rank: i32,
    #[prost(int32, tag = "4")]
    pub guardian_experience: i32,
    #[prost(int32, tag = "5")]
    pub guardian_reward_random_seed: i32,
    #[prost(message, repeated, tag = "6")]
    pub rank_perks: Vec<GuardianRankPerkSaveGameData>,
    #[prost(int64, tag = "7")]
    pub new_guardian_experience: i64,
}

/// The top-level shared profile record.
#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct Profile {
    #[prost(message, repeated, tag = "1")]
    pub profile_sdu_list: Vec<OakSduSaveGameData>,
    #[prost(bytes = "vec", repeated, tag = "2")]
    pub bank_inventory_list: Vec<Vec<u8>>,
    #[prost(message, repeated, tag = "3")]
    pub bank_inventory_category_list: Vec<InventoryCategorySaveData>,
    #[prost(bytes = "vec", repeated, tag = "4")]
    pub lost_loot_inventory_list: Vec<Vec<u8>>,
    #[prost(message, optional, tag = "5")]
    pub guardian_rank: Option<GuardianRankProfileData>,
    #[prost(message, repeated, tag = "6")]
    pub unlocked_customizations: Vec<OakCustomizationSaveGameData>,
    #[prost(message, repeated, tag = "7")]
    pub unlocked_crew_quarters_decorations: Vec<CrewQuartersDecorationItemSaveGameData>,
    #[prost(message, repeated, tag = "8")]
    pub unlocked_inventory_customization_parts: Vec<OakInventoryCustomizationPartInfo>,
}
