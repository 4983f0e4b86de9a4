//! Vehicle chassis, part, and skin unlock tables.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Outrunner,
    Technical,
    Cyclone,
    Jetbeast,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 4] = [
        VehicleKind::Outrunner,
        VehicleKind::Technical,
        VehicleKind::Cyclone,
        VehicleKind::Jetbeast,
    ];

    pub fn eng(self) -> &'static str {
        match self {
            VehicleKind::Outrunner => "Outrunner",
            VehicleKind::Technical => "Technical",
            VehicleKind::Cyclone => "Cyclone",
            VehicleKind::Jetbeast => "Jetbeast",
        }
    }

    /// Chassis (wheel) unlocks for this vehicle.
    pub fn chassis(self) -> &'static [&'static str] {
        match self {
            VehicleKind::Outrunner => &[
                "/Game/Vehicles/Outrunner/Design/Chassis/Chassis_Outrunner_Default.Chassis_Outrunner_Default",
                "/Game/Vehicles/Outrunner/Design/Chassis/Chassis_Outrunner_TwitchyWheels.Chassis_Outrunner_TwitchyWheels",
                "/Game/Vehicles/Outrunner/Design/Chassis/Chassis_Outrunner_HoverWheels.Chassis_Outrunner_HoverWheels",
            ],
            VehicleKind::Technical => &[
                "/Game/Vehicles/Technical/Design/Chassis/Chassis_Technical_Default.Chassis_Technical_Default",
                "/Game/Vehicles/Technical/Design/Chassis/Chassis_Technical_MonsterWheels.Chassis_Technical_MonsterWheels",
                "/Game/Vehicles/Technical/Design/Chassis/Chassis_Technical_HoverWheels.Chassis_Technical_HoverWheels",
            ],
            VehicleKind::Cyclone => &[
                "/Game/Vehicles/Revolver/Design/Chassis/Chassis_Revolver_Default.Chassis_Revolver_Default",
                "/Game/Vehicles/Revolver/Design/Chassis/Chassis_Revolver_BladeWheel.Chassis_Revolver_BladeWheel",
                "/Game/Vehicles/Revolver/Design/Chassis/Chassis_Revolver_HoverWheel.Chassis_Revolver_HoverWheel",
            ],
            VehicleKind::Jetbeast => &[
                "/Game/PatchDLC/Geranium/Vehicles/Horse/Design/Chassis/Chassis_Horse_Default.Chassis_Horse_Default",
                "/Game/PatchDLC/Geranium/Vehicles/Horse/Design/Chassis/Chassis_Horse_Hover.Chassis_Horse_Hover",
            ],
        }
    }

    /// Functional part unlocks (weapons, boosters, armor).
    pub fn parts(self) -> &'static [&'static str] {
        match self {
            VehicleKind::Outrunner => &[
                "/Game/Vehicles/Outrunner/Design/Parts/Part_Outrunner_Mod_BoostBackfire.Part_Outrunner_Mod_BoostBackfire",
                "/Game/Vehicles/Outrunner/Design/Parts/Part_Outrunner_Mod_FlatTire.Part_Outrunner_Mod_FlatTire",
                "/Game/Vehicles/Outrunner/Design/Parts/Part_Outrunner_Weap_MachineGun.Part_Outrunner_Weap_MachineGun",
                "/Game/Vehicles/Outrunner/Design/Parts/Part_Outrunner_Weap_TeslaCoil.Part_Outrunner_Weap_TeslaCoil",
                "/Game/Vehicles/Outrunner/Design/Parts/Part_Outrunner_Weap_FlakCannon.Part_Outrunner_Weap_FlakCannon",
            ],
            VehicleKind::Technical => &[
                "/Game/Vehicles/Technical/Design/Parts/Part_Technical_Mod_FuelBarrels.Part_Technical_Mod_FuelBarrels",
                "/Game/Vehicles/Technical/Design/Parts/Part_Technical_Mod_JetBooster.Part_Technical_Mod_JetBooster",
                "/Game/Vehicles/Technical/Design/Parts/Part_Technical_Weap_CatapultA.Part_Technical_Weap_CatapultA",
                "/Game/Vehicles/Technical/Design/Parts/Part_Technical_Weap_FlameThrower.Part_Technical_Weap_FlameThrower",
                "/Game/Vehicles/Technical/Design/Parts/Part_Technical_Weap_ToxicBooster.Part_Technical_Weap_ToxicBooster",
            ],
            VehicleKind::Cyclone => &[
                "/Game/Vehicles/Revolver/Design/Parts/Part_Revolver_Mod_Shield.Part_Revolver_Mod_Shield",
                "/Game/Vehicles/Revolver/Design/Parts/Part_Revolver_Mod_SpeedBoost.Part_Revolver_Mod_SpeedBoost",
                "/Game/Vehicles/Revolver/Design/Parts/Part_Revolver_Weap_SawBlade.Part_Revolver_Weap_SawBlade",
                "/Game/Vehicles/Revolver/Design/Parts/Part_Revolver_Weap_Grenades.Part_Revolver_Weap_Grenades",
                "/Game/Vehicles/Revolver/Design/Parts/Part_Revolver_Weap_HeavyMiniGun.Part_Revolver_Weap_HeavyMiniGun",
            ],
            VehicleKind::Jetbeast => &[
                "/Game/PatchDLC/Geranium/Vehicles/Horse/Design/Parts/Part_Horse_Weap_Caber.Part_Horse_Weap_Caber",
                "/Game/PatchDLC/Geranium/Vehicles/Horse/Design/Parts/Part_Horse_Weap_Launcher.Part_Horse_Weap_Launcher",
                "/Game/PatchDLC/Geranium/Vehicles/Horse/Design/Parts/Part_Horse_Mod_Armor.Part_Horse_Mod_Armor",
            ],
        }
    }

    /// Skin unlocks.
    pub fn skins(self) -> &'static [&'static str] {
        match self {
            VehicleKind::Outrunner => &[
                "/Game/Vehicles/Outrunner/Design/Skins/Part_Outrunner_Mat_Atlas.Part_Outrunner_Mat_Atlas",
                "/Game/Vehicles/Outrunner/Design/Skins/Part_Outrunner_Mat_Bubblegum.Part_Outrunner_Mat_Bubblegum",
                "/Game/Vehicles/Outrunner/Design/Skins/Part_Outrunner_Mat_Forest.Part_Outrunner_Mat_Forest",
                "/Game/Vehicles/Outrunner/Design/Skins/Part_Outrunner_Mat_Houndstooth.Part_Outrunner_Mat_Houndstooth",
            ],
            VehicleKind::Technical => &[
                "/Game/Vehicles/Technical/Design/Skins/Part_Technical_Mat_Blueangels.Part_Technical_Mat_Blueangels",
                "/Game/Vehicles/Technical/Design/Skins/Part_Technical_Mat_Follow.Part_Technical_Mat_Follow",
                "/Game/Vehicles/Technical/Design/Skins/Part_Technical_Mat_Leather.Part_Technical_Mat_Leather",
                "/Game/Vehicles/Technical/Design/Skins/Part_Technical_Mat_Thunderbird.Part_Technical_Mat_Thunderbird",
            ],
            VehicleKind::Cyclone => &[
                "/Game/Vehicles/Revolver/Design/Skins/Part_Revolver_Mat_Chopper.Part_Revolver_Mat_Chopper",
                "/Game/Vehicles/Revolver/Design/Skins/Part_Revolver_Mat_Dark.Part_Revolver_Mat_Dark",
                "/Game/Vehicles/Revolver/Design/Skins/Part_Revolver_Mat_Gold.Part_Revolver_Mat_Gold",
                "/Game/Vehicles/Revolver/Design/Skins/Part_Revolver_Mat_Lifeline.Part_Revolver_Mat_Lifeline",
            ],
            VehicleKind::Jetbeast => &[
                "/Game/PatchDLC/Geranium/Vehicles/Horse/Design/Skins/Part_Horse_Mat_Butcher.Part_Horse_Mat_Butcher",
                "/Game/PatchDLC/Geranium/Vehicles/Horse/Design/Skins/Part_Horse_Mat_Desert.Part_Horse_Mat_Desert",
            ],
        }
    }

    /// The vehicle a chassis path belongs to.
    pub fn from_chassis(path: &str) -> Option<VehicleKind> {
        Self::ALL.into_iter().find(|v| v.chassis().contains(&path))
    }

    /// The vehicle a functional part path belongs to.
    pub fn from_part(path: &str) -> Option<VehicleKind> {
        Self::ALL.into_iter().find(|v| v.parts().contains(&path))
    }

    /// The vehicle a skin path belongs to.
    pub fn from_skin(path: &str) -> Option<VehicleKind> {
        Self::ALL.into_iter().find(|v| v.skins().contains(&path))
    }
}

/// Chassis the game grants through other means; never injected by unlocks.
pub const CHASSIS_EXCLUDERS: &[&str] = &[
    "/Game/Vehicles/Outrunner/Design/Chassis/Chassis_Outrunner_HoverWheels.Chassis_Outrunner_HoverWheels",
    "/Game/Vehicles/Technical/Design/Chassis/Chassis_Technical_HoverWheels.Chassis_Technical_HoverWheels",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chassis_lookup() {
        for vehicle in VehicleKind::ALL {
            for chassis in vehicle.chassis() {
                assert_eq!(VehicleKind::from_chassis(chassis), Some(vehicle));
            }
        }
        assert_eq!(VehicleKind::from_chassis("/Game/Nope"), None);
    }

    #[test]
    fn test_parts_and_skins_disjoint() {
        for vehicle in VehicleKind::ALL {
            for part in vehicle.parts() {
                assert_eq!(VehicleKind::from_skin(part), None);
                assert_eq!(VehicleKind::from_part(part), Some(vehicle));
            }
            for skin in vehicle.skins() {
                assert_eq!(VehicleKind::from_part(skin), None);
                assert_eq!(VehicleKind::from_skin(skin), Some(vehicle));
            }
        }
    }

    #[test]
    fn test_excluders_are_known_chassis() {
        for excluded in CHASSIS_EXCLUDERS {
            assert!(VehicleKind::from_chassis(excluded).is_some());
        }
    }
}
