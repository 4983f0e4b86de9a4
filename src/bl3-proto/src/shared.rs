//! Messages shared between the savegame and profile schemas.

use serde::{Deserialize, Serialize};

/// One keyed quantity bucket: currencies on characters, golden keys on
/// profiles. The key is the in-game category definition hash.
#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct InventoryCategorySaveData {
    #[prost(uint32, tag = "1")]
    pub base_category_definition_hash: u32,
    #[prost(int32, tag = "2")]
    pub quantity: i32,
}

/// One purchased SDU tier (character or profile scoped).
#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct OakSduSaveGameData {
    #[prost(string, tag = "1")]
    pub sdu_data_path: String,
    #[prost(int32, tag = "2")]
    pub sdu_level: i32,
}

/// A single tracked game statistic.
#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct GameStatSaveGameData {
    #[prost(int32, tag = "1")]
    pub stat_value: i32,
    #[prost(string, tag = "2")]
    pub stat_path: String,
}

/// Per-stat progress attached to a challenge.
#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct ChallengeStatSaveGameData {
    #[prost(int32, tag = "1")]
    pub current_stat_value: i32,
    #[prost(string, tag = "2")]
    pub challenge_stat_path: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct OakChallengeRewardSaveGameData {
    #[prost(bool, tag = "1")]
    pub challenge_reward_claimed: bool,
}

/// Challenge progress and completion state.
#[derive(Clone, PartialEq, Serialize, Deserialize, prost::Message)]
pub struct ChallengeSaveGameData {
    #[prost(int32, tag = "1")]
    pub completed_count: i32,
    #[prost(bool, tag = "2")]
    pub is_active: bool,
    #[prost(bool, tag = "3")]
    pub currently_completed: bool,
    #[prost(string, tag = "4")]
    pub challenge_class_path: String,
    #[prost(int32, tag = "5")]
    pub progress_counter: i32,
    #[prost(message, repeated, tag = "6")]
    pub stat_instance_state: Vec<ChallengeStatSaveGameData>,
    #[prost(int32, tag = "7")]
    pub completed_progress_level: i32,
    #[prost(message, repeated, tag = "8")]
    pub challenge_reward_info: Vec<OakChallengeRewardSaveGameData>,
}
