//! # bl3-proto
//!
//! Record schemas for Borderlands 3 save artifacts.
//!
//! A decrypted savegame payload is exactly one [`Character`] message; a
//! decrypted profile payload is exactly one [`Profile`] message. The types
//! here are hand-maintained `prost` messages, so the wire format is ordinary
//! protobuf. Every message also derives `serde` so records can be projected
//! to and from JSON with the proto field names preserved and default values
//! included.
//!
//! Field meaning is intentionally not interpreted here; the editing layer in
//! the `bl3` crate owns all semantics. Unrecognized data has nowhere to go:
//! the schema carries exactly the fields the editor reads or writes.

pub mod shared;

mod character;
mod profile;

pub use character::*;
pub use profile::*;
pub use shared::*;

pub use prost::Message;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_wire_roundtrip() {
        let character = Character {
            save_game_id: 12,
            preferred_character_name: "FL4K".to_string(),
            experience_points: 3429728,
            playthroughs_completed: 1,
            last_active_travel_station_for_playthrough: vec![
                "/Game/GameData/FastTravel/FTS_Sanctuary.FTS_Sanctuary".to_string(),
            ],
            ..Default::default()
        };

        let bytes = character.encode_to_vec();
        let decoded = Character::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded, character);
    }

    #[test]
    fn test_profile_wire_roundtrip() {
        let profile = Profile {
            bank_inventory_list: vec![vec![3, 0, 0, 0, 1, 0xAA]],
            guardian_rank: Some(GuardianRankProfileData {
                guardian_rank: 25,
                available_tokens: 3,
                ..Default::default()
            }),
            ..Default::default()
        };

        let bytes = profile.encode_to_vec();
        let decoded = Profile::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded, profile);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let character = Character {
            save_game_guid: "1E5B0AA2C07A4B0B9D3F0A9C58F2A001".to_string(),
            inventory_items: vec![OakInventoryItemSaveGameData {
                item_serial_number: vec![3, 0, 0, 0, 0, 1, 2, 3],
                pickup_order_index: 4,
                flags: 3,
                weapon_skin_path: String::new(),
            }],
            ..Default::default()
        };
        assert_eq!(character.encode_to_vec(), character.encode_to_vec());
    }

    #[test]
    fn test_json_preserves_field_names_and_defaults() {
        let character = Character::default();
        let json = serde_json::to_string(&character).unwrap();
        assert!(json.contains("\"preferred_character_name\""));
        assert!(json.contains("\"experience_points\":0"));
        assert!(json.contains("\"playthroughs_completed\":0"));
    }
}
