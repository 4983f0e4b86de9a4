//! Item-serial reference data: Mayhem parts, anointment gating, and the
//! Fabricator special case.

use phf::{phf_map, phf_set};

/// Highest Mayhem tier an item can carry.
pub const MAYHEM_MAX: u32 = 10;

/// Mayhem tier markers in the generic part category, tier 1 first.
const MAYHEM_PARTS: [&str; 10] = [
    "/Game/PatchDLC/Mayhem2/Gear/Weapon/_Shared/_Design/MayhemParts/Part_WeaponMayhemLevel_01",
    "/Game/PatchDLC/Mayhem2/Gear/Weapon/_Shared/_Design/MayhemParts/Part_WeaponMayhemLevel_02",
    "/Game/PatchDLC/Mayhem2/Gear/Weapon/_Shared/_Design/MayhemParts/Part_WeaponMayhemLevel_03",
    "/Game/PatchDLC/Mayhem2/Gear/Weapon/_Shared/_Design/MayhemParts/Part_WeaponMayhemLevel_04",
    "/Game/PatchDLC/Mayhem2/Gear/Weapon/_Shared/_Design/MayhemParts/Part_WeaponMayhemLevel_05",
    "/Game/PatchDLC/Mayhem2/Gear/Weapon/_Shared/_Design/MayhemParts/Part_WeaponMayhemLevel_06",
    "/Game/PatchDLC/Mayhem2/Gear/Weapon/_Shared/_Design/MayhemParts/Part_WeaponMayhemLevel_07",
    "/Game/PatchDLC/Mayhem2/Gear/Weapon/_Shared/_Design/MayhemParts/Part_WeaponMayhemLevel_08",
    "/Game/PatchDLC/Mayhem2/Gear/Weapon/_Shared/_Design/MayhemParts/Part_WeaponMayhemLevel_09",
    "/Game/PatchDLC/Mayhem2/Gear/Weapon/_Shared/_Design/MayhemParts/Part_WeaponMayhemLevel_10",
];

static MAYHEM_PART_TIERS: phf::Map<&'static str, u32> = phf_map! {
    "/game/patchdlc/mayhem2/gear/weapon/_shared/_design/mayhemparts/part_weaponmayhemlevel_01" => 1,
    "/game/patchdlc/mayhem2/gear/weapon/_shared/_design/mayhemparts/part_weaponmayhemlevel_02" => 2,
    "/game/patchdlc/mayhem2/gear/weapon/_shared/_design/mayhemparts/part_weaponmayhemlevel_03" => 3,
    "/game/patchdlc/mayhem2/gear/weapon/_shared/_design/mayhemparts/part_weaponmayhemlevel_04" => 4,
    "/game/patchdlc/mayhem2/gear/weapon/_shared/_design/mayhemparts/part_weaponmayhemlevel_05" => 5,
    "/game/patchdlc/mayhem2/gear/weapon/_shared/_design/mayhemparts/part_weaponmayhemlevel_06" => 6,
    "/game/patchdlc/mayhem2/gear/weapon/_shared/_design/mayhemparts/part_weaponmayhemlevel_07" => 7,
    "/game/patchdlc/mayhem2/gear/weapon/_shared/_design/mayhemparts/part_weaponmayhemlevel_08" => 8,
    "/game/patchdlc/mayhem2/gear/weapon/_shared/_design/mayhemparts/part_weaponmayhemlevel_09" => 9,
    "/game/patchdlc/mayhem2/gear/weapon/_shared/_design/mayhemparts/part_weaponmayhemlevel_10" => 10,
};

/// Inventory-data paths (lowercased) whose items take Mayhem parts.
pub static MAYHEM_INVDATA: phf::Set<&'static str> = phf_set! {
    "/game/gear/weapons/_shared/_design/data/weapon_default",
    "/game/gear/weapons/heavyweapons/eridian/_shared/_design/data/hw_eridian_fabricator",
};

/// Inventory-data paths (lowercased) whose items take anointments: weapons,
/// shields, and grenade mods.
pub static ANOINTABLE_INVDATA: phf::Set<&'static str> = phf_set! {
    "/game/gear/weapons/_shared/_design/data/weapon_default",
    "/game/gear/weapons/heavyweapons/eridian/_shared/_design/data/hw_eridian_fabricator",
    "/game/gear/shields/_design/a_data/shield_default",
    "/game/gear/grenademods/_design/a_data/gm_default",
};

/// Short balance name of the Eridian Fabricator, which item import refuses
/// to duplicate unless explicitly allowed.
pub const FABRICATOR_BALANCE_SHORT: &str = "balance_eridian_fabricator";

/// Tier carried by a Mayhem part, matched case-insensitively.
pub fn mayhem_part_tier(part_path: &str) -> Option<u32> {
    MAYHEM_PART_TIERS.get(part_path.to_lowercase().as_str()).copied()
}

/// Part asset for a Mayhem tier (1-based; tier 0 has no part).
pub fn mayhem_part_for_tier(tier: u32) -> Option<&'static str> {
    if (1..=MAYHEM_MAX).contains(&tier) {
        Some(MAYHEM_PARTS[tier as usize - 1])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mayhem_part_tier_roundtrip() {
        for tier in 1..=MAYHEM_MAX {
            let part = mayhem_part_for_tier(tier).unwrap();
            assert_eq!(mayhem_part_tier(part), Some(tier));
            assert_eq!(mayhem_part_tier(&part.to_uppercase()), Some(tier));
        }
        assert_eq!(mayhem_part_for_tier(0), None);
        assert_eq!(mayhem_part_for_tier(11), None);
        assert_eq!(mayhem_part_tier("/Game/Nope"), None);
    }

    #[test]
    fn test_anointable_includes_mayhem_capable() {
        for path in MAYHEM_INVDATA.iter() {
            assert!(ANOINTABLE_INVDATA.contains(path));
        }
    }
}
