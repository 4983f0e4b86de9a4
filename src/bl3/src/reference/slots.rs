//! Equipment slot identities.

/// The eight equipment slots, in the game's display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipSlot {
    Weapon1,
    Weapon2,
    Weapon3,
    Weapon4,
    Shield,
    Grenade,
    ClassMod,
    Artifact,
}

impl EquipSlot {
    pub const ALL: [EquipSlot; 8] = [
        EquipSlot::Weapon1,
        EquipSlot::Weapon2,
        EquipSlot::Weapon3,
        EquipSlot::Weapon4,
        EquipSlot::Shield,
        EquipSlot::Grenade,
        EquipSlot::ClassMod,
        EquipSlot::Artifact,
    ];

    /// Slot data path carried in `equipped_inventory_list`.
    pub fn slot_path(self) -> &'static str {
        match self {
            EquipSlot::Weapon1 => {
                "/Game/Gear/Weapons/_Shared/_Design/InventorySlots/BPInvSlot_Weapon1.BPInvSlot_Weapon1"
            }
            EquipSlot::Weapon2 => {
                "/Game/Gear/Weapons/_Shared/_Design/InventorySlots/BPInvSlot_Weapon2.BPInvSlot_Weapon2"
            }
            EquipSlot::Weapon3 => {
                "/Game/Gear/Weapons/_Shared/_Design/InventorySlots/BPInvSlot_Weapon3.BPInvSlot_Weapon3"
            }
            EquipSlot::Weapon4 => {
                "/Game/Gear/Weapons/_Shared/_Design/InventorySlots/BPInvSlot_Weapon4.BPInvSlot_Weapon4"
            }
            EquipSlot::Shield => {
                "/Game/Gear/Shields/_Design/A_Data/BPInvSlot_Shield.BPInvSlot_Shield"
            }
            EquipSlot::Grenade => {
                "/Game/Pickups/Ammo/BPInvSlot_Grenade.BPInvSlot_Grenade"
            }
            EquipSlot::ClassMod => {
                "/Game/Gear/ClassMods/_Design/A_Data/BPInvSlot_ClassMod.BPInvSlot_ClassMod"
            }
            EquipSlot::Artifact => {
                "/Game/Gear/Artifacts/_Design/A_Data/BPInvSlot_Artifact.BPInvSlot_Artifact"
            }
        }
    }

    pub fn eng(self) -> &'static str {
        match self {
            EquipSlot::Weapon1 => "Weapon Slot 1",
            EquipSlot::Weapon2 => "Weapon Slot 2",
            EquipSlot::Weapon3 => "Weapon Slot 3",
            EquipSlot::Weapon4 => "Weapon Slot 4",
            EquipSlot::Shield => "Shield",
            EquipSlot::Grenade => "Grenade",
            EquipSlot::ClassMod => "COM",
            EquipSlot::Artifact => "Artifact",
        }
    }

    pub fn from_slot_path(path: &str) -> Option<EquipSlot> {
        Self::ALL.into_iter().find(|s| s.slot_path() == path)
    }
}
