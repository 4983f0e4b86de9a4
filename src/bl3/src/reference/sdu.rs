//! SDU and ammo pool identities with their purchase/capacity caps.

// ============================================================================
// Character SDUs
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SduKind {
    Backpack,
    AssaultRifle,
    Pistol,
    SniperRifle,
    Shotgun,
    Grenade,
    Smg,
    Heavy,
}

impl SduKind {
    pub const ALL: [SduKind; 8] = [
        SduKind::Backpack,
        SduKind::AssaultRifle,
        SduKind::Pistol,
        SduKind::SniperRifle,
        SduKind::Shotgun,
        SduKind::Grenade,
        SduKind::Smg,
        SduKind::Heavy,
    ];

    pub fn sdu_path(self) -> &'static str {
        match self {
            SduKind::Backpack => "/Game/Pickups/SDU/SDU_Backpack.SDU_Backpack",
            SduKind::AssaultRifle => "/Game/Pickups/SDU/SDU_AssaultRifle.SDU_AssaultRifle",
            SduKind::Pistol => "/Game/Pickups/SDU/SDU_Pistol.SDU_Pistol",
            SduKind::SniperRifle => "/Game/Pickups/SDU/SDU_SniperRifle.SDU_SniperRifle",
            SduKind::Shotgun => "/Game/Pickups/SDU/SDU_Shotgun.SDU_Shotgun",
            SduKind::Grenade => "/Game/Pickups/SDU/SDU_Grenade.SDU_Grenade",
            SduKind::Smg => "/Game/Pickups/SDU/SDU_SMG.SDU_SMG",
            SduKind::Heavy => "/Game/Pickups/SDU/SDU_Heavy.SDU_Heavy",
        }
    }

    /// Purchasable tiers for this SDU line.
    pub fn max_level(self) -> i32 {
        match self {
            SduKind::Backpack | SduKind::SniperRifle | SduKind::Heavy => 13,
            _ => 10,
        }
    }

    pub fn eng(self) -> &'static str {
        match self {
            SduKind::Backpack => "Backpack",
            SduKind::AssaultRifle => "AR",
            SduKind::Pistol => "Pistol",
            SduKind::SniperRifle => "Sniper",
            SduKind::Shotgun => "Shotgun",
            SduKind::Grenade => "Grenade",
            SduKind::Smg => "SMG",
            SduKind::Heavy => "Heavy",
        }
    }

    pub fn from_sdu_path(path: &str) -> Option<SduKind> {
        Self::ALL.into_iter().find(|s| s.sdu_path() == path)
    }
}

// ============================================================================
// Profile SDUs
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileSduKind {
    LostLoot,
    Bank,
}

impl ProfileSduKind {
    pub const ALL: [ProfileSduKind; 2] = [ProfileSduKind::LostLoot, ProfileSduKind::Bank];

    pub fn sdu_path(self) -> &'static str {
        match self {
            ProfileSduKind::LostLoot => "/Game/Pickups/SDU/SDU_LostLoot.SDU_LostLoot",
            ProfileSduKind::Bank => "/Game/Pickups/SDU/SDU_Bank.SDU_Bank",
        }
    }

    pub fn max_level(self) -> i32 {
        match self {
            ProfileSduKind::LostLoot => 8,
            ProfileSduKind::Bank => 23,
        }
    }

    pub fn eng(self) -> &'static str {
        match self {
            ProfileSduKind::LostLoot => "Lost Loot",
            ProfileSduKind::Bank => "Bank",
        }
    }

    pub fn from_sdu_path(path: &str) -> Option<ProfileSduKind> {
        Self::ALL.into_iter().find(|s| s.sdu_path() == path)
    }
}

// ============================================================================
// Ammo pools
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmmoKind {
    AssaultRifle,
    Grenade,
    Heavy,
    Pistol,
    Smg,
    Shotgun,
    SniperRifle,
}

impl AmmoKind {
    pub const ALL: [AmmoKind; 7] = [
        AmmoKind::AssaultRifle,
        AmmoKind::Grenade,
        AmmoKind::Heavy,
        AmmoKind::Pistol,
        AmmoKind::Smg,
        AmmoKind::Shotgun,
        AmmoKind::SniperRifle,
    ];

    pub fn resource_path(self) -> &'static str {
        match self {
            AmmoKind::AssaultRifle => {
                "/Game/GameData/Weapons/Ammo/Resource_Ammo_AssaultRifle.Resource_Ammo_AssaultRifle"
            }
            AmmoKind::Grenade => {
                "/Game/GameData/Weapons/Ammo/Resource_Ammo_Grenade.Resource_Ammo_Grenade"
            }
            AmmoKind::Heavy => {
                "/Game/GameData/Weapons/Ammo/Resource_Ammo_Heavy.Resource_Ammo_Heavy"
            }
            AmmoKind::Pistol => {
                "/Game/GameData/Weapons/Ammo/Resource_Ammo_Pistol.Resource_Ammo_Pistol"
            }
            AmmoKind::Smg => "/Game/GameData/Weapons/Ammo/Resource_Ammo_SMG.Resource_Ammo_SMG",
            AmmoKind::Shotgun => {
                "/Game/GameData/Weapons/Ammo/Resource_Ammo_Shotgun.Resource_Ammo_Shotgun"
            }
            AmmoKind::SniperRifle => {
                "/Game/GameData/Weapons/Ammo/Resource_Ammo_Sniper.Resource_Ammo_Sniper"
            }
        }
    }

    /// Pool capacity with every SDU purchased.
    pub fn max_amount(self) -> i32 {
        match self {
            AmmoKind::AssaultRifle => 1680,
            AmmoKind::Grenade => 13,
            AmmoKind::Heavy => 51,
            AmmoKind::Pistol => 1200,
            AmmoKind::Smg => 2160,
            AmmoKind::Shotgun => 280,
            AmmoKind::SniperRifle => 204,
        }
    }

    pub fn eng(self) -> &'static str {
        match self {
            AmmoKind::AssaultRifle => "AR",
            AmmoKind::Grenade => "Grenade",
            AmmoKind::Heavy => "Heavy",
            AmmoKind::Pistol => "Pistol",
            AmmoKind::Smg => "SMG",
            AmmoKind::Shotgun => "Shotgun",
            AmmoKind::SniperRifle => "Sniper",
        }
    }

    pub fn from_resource_path(path: &str) -> Option<AmmoKind> {
        Self::ALL.into_iter().find(|a| a.resource_path() == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdu_path_roundtrip() {
        for sdu in SduKind::ALL {
            assert_eq!(SduKind::from_sdu_path(sdu.sdu_path()), Some(sdu));
        }
        for sdu in ProfileSduKind::ALL {
            assert_eq!(ProfileSduKind::from_sdu_path(sdu.sdu_path()), Some(sdu));
        }
    }

    #[test]
    fn test_ammo_path_roundtrip() {
        for ammo in AmmoKind::ALL {
            assert_eq!(AmmoKind::from_resource_path(ammo.resource_path()), Some(ammo));
            assert!(ammo.max_amount() > 0);
        }
    }
}
