//! Profile cosmetics: customization asset sets, weapon skin/trinket hashes,
//! and the guardian rank reward list.
//!
//! "Defaults" are unlocked from a fresh profile and never written to the
//! unlock lists; totals count both groups.

// ============================================================================
// Character skins
// ============================================================================

pub const CHAR_SKINS_DEFAULTS: &[&str] = &[
    "/Game/PlayerCharacters/_Customizations/Beastmaster/Skins/CustomSkin_Beastmaster_Default.CustomSkin_Beastmaster_Default",
    "/Game/PlayerCharacters/_Customizations/Gunner/Skins/CustomSkin_Gunner_Default.CustomSkin_Gunner_Default",
    "/Game/PlayerCharacters/_Customizations/Operative/Skins/CustomSkin_Operative_Default.CustomSkin_Operative_Default",
    "/Game/PlayerCharacters/_Customizations/SirenBrawler/Skins/CustomSkin_Siren_Default.CustomSkin_Siren_Default",
];

pub const CHAR_SKINS: &[&str] = &[
    "/Game/PlayerCharacters/_Customizations/Beastmaster/Skins/CustomSkin_Beastmaster_1.CustomSkin_Beastmaster_1",
    "/Game/PlayerCharacters/_Customizations/Beastmaster/Skins/CustomSkin_Beastmaster_2.CustomSkin_Beastmaster_2",
    "/Game/PlayerCharacters/_Customizations/Beastmaster/Skins/CustomSkin_Beastmaster_3.CustomSkin_Beastmaster_3",
    "/Game/PlayerCharacters/_Customizations/Beastmaster/Skins/CustomSkin_Beastmaster_4.CustomSkin_Beastmaster_4",
    "/Game/PlayerCharacters/_Customizations/Gunner/Skins/CustomSkin_Gunner_1.CustomSkin_Gunner_1",
    "/Game/PlayerCharacters/_Customizations/Gunner/Skins/CustomSkin_Gunner_2.CustomSkin_Gunner_2",
    "/Game/PlayerCharacters/_Customizations/Gunner/Skins/CustomSkin_Gunner_3.CustomSkin_Gunner_3",
    "/Game/PlayerCharacters/_Customizations/Gunner/Skins/CustomSkin_Gunner_4.CustomSkin_Gunner_4",
    "/Game/PlayerCharacters/_Customizations/Operative/Skins/CustomSkin_Operative_1.CustomSkin_Operative_1",
    "/Game/PlayerCharacters/_Customizations/Operative/Skins/CustomSkin_Operative_2.CustomSkin_Operative_2",
    "/Game/PlayerCharacters/_Customizations/Operative/Skins/CustomSkin_Operative_3.CustomSkin_Operative_3",
    "/Game/PlayerCharacters/_Customizations/Operative/Skins/CustomSkin_Operative_4.CustomSkin_Operative_4",
    "/Game/PlayerCharacters/_Customizations/SirenBrawler/Skins/CustomSkin_Siren_1.CustomSkin_Siren_1",
    "/Game/PlayerCharacters/_Customizations/SirenBrawler/Skins/CustomSkin_Siren_2.CustomSkin_Siren_2",
    "/Game/PlayerCharacters/_Customizations/SirenBrawler/Skins/CustomSkin_Siren_3.CustomSkin_Siren_3",
    "/Game/PlayerCharacters/_Customizations/SirenBrawler/Skins/CustomSkin_Siren_4.CustomSkin_Siren_4",
];

// ============================================================================
// Character heads
// ============================================================================

pub const CHAR_HEADS_DEFAULTS: &[&str] = &[
    "/Game/PlayerCharacters/_Customizations/Beastmaster/Heads/CustomHead_Beastmaster_Default.CustomHead_Beastmaster_Default",
    "/Game/PlayerCharacters/_Customizations/Gunner/Heads/CustomHead_Gunner_Default.CustomHead_Gunner_Default",
    "/Game/PlayerCharacters/_Customizations/Operative/Heads/CustomHead_Operative_Default.CustomHead_Operative_Default",
    "/Game/PlayerCharacters/_Customizations/SirenBrawler/Heads/CustomHead_Siren_Default.CustomHead_Siren_Default",
];

pub const CHAR_HEADS: &[&str] = &[
    "/Game/PlayerCharacters/_Customizations/Beastmaster/Heads/CustomHead_Beastmaster_1.CustomHead_Beastmaster_1",
    "/Game/PlayerCharacters/_Customizations/Beastmaster/Heads/CustomHead_Beastmaster_2.CustomHead_Beastmaster_2",
    "/Game/PlayerCharacters/_Customizations/Beastmaster/Heads/CustomHead_Beastmaster_3.CustomHead_Beastmaster_3",
    "/Game/PlayerCharacters/_Customizations/Gunner/Heads/CustomHead_Gunner_1.CustomHead_Gunner_1",
    "/Game/PlayerCharacters/_Customizations/Gunner/Heads/CustomHead_Gunner_2.CustomHead_Gunner_2",
    "/Game/PlayerCharacters/_Customizations/Gunner/Heads/CustomHead_Gunner_3.CustomHead_Gunner_3",
    "/Game/PlayerCharacters/_Customizations/Operative/Heads/CustomHead_Operative_1.CustomHead_Operative_1",
    "/Game/PlayerCharacters/_Customizations/Operative/Heads/CustomHead_Operative_2.CustomHead_Operative_2",
    "/Game/PlayerCharacters/_Customizations/Operative/Heads/CustomHead_Operative_3.CustomHead_Operative_3",
    "/Game/PlayerCharacters/_Customizations/SirenBrawler/Heads/CustomHead_Siren_1.CustomHead_Siren_1",
    "/Game/PlayerCharacters/_Customizations/SirenBrawler/Heads/CustomHead_Siren_2.CustomHead_Siren_2",
    "/Game/PlayerCharacters/_Customizations/SirenBrawler/Heads/CustomHead_Siren_3.CustomHead_Siren_3",
];

// ============================================================================
// ECHO themes
// ============================================================================

pub const ECHO_THEMES_DEFAULTS: &[&str] = &[
    "/Game/PlayerCharacters/_Customizations/EchoDevice/ECHOTheme_Default.ECHOTheme_Default",
];

pub const ECHO_THEMES: &[&str] = &[
    "/Game/PlayerCharacters/_Customizations/EchoDevice/ECHOTheme_01.ECHOTheme_01",
    "/Game/PlayerCharacters/_Customizations/EchoDevice/ECHOTheme_02.ECHOTheme_02",
    "/Game/PlayerCharacters/_Customizations/EchoDevice/ECHOTheme_03.ECHOTheme_03",
    "/Game/PlayerCharacters/_Customizations/EchoDevice/ECHOTheme_04.ECHOTheme_04",
    "/Game/PlayerCharacters/_Customizations/EchoDevice/ECHOTheme_05.ECHOTheme_05",
    "/Game/PlayerCharacters/_Customizations/EchoDevice/ECHOTheme_06.ECHOTheme_06",
    "/Game/PlayerCharacters/_Customizations/EchoDevice/ECHOTheme_07.ECHOTheme_07",
    "/Game/PlayerCharacters/_Customizations/EchoDevice/ECHOTheme_08.ECHOTheme_08",
];

// ============================================================================
// Emotes
// ============================================================================

pub const EMOTES_DEFAULTS: &[&str] = &[
    "/Game/PlayerCharacters/_Customizations/Emotes/Beastmaster/CustomEmote_Beastmaster_Wave.CustomEmote_Beastmaster_Wave",
    "/Game/PlayerCharacters/_Customizations/Emotes/Beastmaster/CustomEmote_Beastmaster_Point.CustomEmote_Beastmaster_Point",
    "/Game/PlayerCharacters/_Customizations/Emotes/Gunner/CustomEmote_Gunner_Wave.CustomEmote_Gunner_Wave",
    "/Game/PlayerCharacters/_Customizations/Emotes/Gunner/CustomEmote_Gunner_Point.CustomEmote_Gunner_Point",
    "/Game/PlayerCharacters/_Customizations/Emotes/Operative/CustomEmote_Operative_Wave.CustomEmote_Operative_Wave",
    "/Game/PlayerCharacters/_Customizations/Emotes/Operative/CustomEmote_Operative_Point.CustomEmote_Operative_Point",
    "/Game/PlayerCharacters/_Customizations/Emotes/SirenBrawler/CustomEmote_Siren_Wave.CustomEmote_Siren_Wave",
    "/Game/PlayerCharacters/_Customizations/Emotes/SirenBrawler/CustomEmote_Siren_Point.CustomEmote_Siren_Point",
];

pub const EMOTES: &[&str] = &[
    "/Game/PlayerCharacters/_Customizations/Emotes/Shared/CustomEmote_Cheer.CustomEmote_Cheer",
    "/Game/PlayerCharacters/_Customizations/Emotes/Shared/CustomEmote_Laugh.CustomEmote_Laugh",
    "/Game/PlayerCharacters/_Customizations/Emotes/Shared/CustomEmote_FingerGuns.CustomEmote_FingerGuns",
    "/Game/PlayerCharacters/_Customizations/Emotes/Shared/CustomEmote_Robot.CustomEmote_Robot",
    "/Game/PlayerCharacters/_Customizations/Emotes/Shared/CustomEmote_ChickenDance.CustomEmote_ChickenDance",
    "/Game/PlayerCharacters/_Customizations/Emotes/Shared/CustomEmote_Dab.CustomEmote_Dab",
];

// ============================================================================
// Crew quarters decorations
// ============================================================================

/// Room decoration asset path and its English name.
pub const ROOM_DECORATIONS: &[(&str, &str)] = &[
    (
        "/Game/Pickups/RoomDecoration/RoomDecoration_BarrelOfFun.RoomDecoration_BarrelOfFun",
        "Barrel of Fun",
    ),
    (
        "/Game/Pickups/RoomDecoration/RoomDecoration_ClaptrapConsole.RoomDecoration_ClaptrapConsole",
        "Claptrap Console",
    ),
    (
        "/Game/Pickups/RoomDecoration/RoomDecoration_DahlLamp.RoomDecoration_DahlLamp",
        "Dahl Lamp",
    ),
    (
        "/Game/Pickups/RoomDecoration/RoomDecoration_DiamondPony.RoomDecoration_DiamondPony",
        "Diamond Pony",
    ),
    (
        "/Game/Pickups/RoomDecoration/RoomDecoration_EchoLogRack.RoomDecoration_EchoLogRack",
        "ECHO Log Rack",
    ),
    (
        "/Game/Pickups/RoomDecoration/RoomDecoration_JakobsStag.RoomDecoration_JakobsStag",
        "Jakobs Stag Head",
    ),
    (
        "/Game/Pickups/RoomDecoration/RoomDecoration_LavaLamp.RoomDecoration_LavaLamp",
        "Lava Lamp",
    ),
    (
        "/Game/Pickups/RoomDecoration/RoomDecoration_MaliwanBanner.RoomDecoration_MaliwanBanner",
        "Maliwan Banner",
    ),
    (
        "/Game/Pickups/RoomDecoration/RoomDecoration_NeonVaultSign.RoomDecoration_NeonVaultSign",
        "Neon Vault Sign",
    ),
    (
        "/Game/Pickups/RoomDecoration/RoomDecoration_PsychoMask.RoomDecoration_PsychoMask",
        "Psycho Mask",
    ),
    (
        "/Game/Pickups/RoomDecoration/RoomDecoration_SaurianSkull.RoomDecoration_SaurianSkull",
        "Saurian Skull",
    ),
    (
        "/Game/Pickups/RoomDecoration/RoomDecoration_TorgueSpeaker.RoomDecoration_TorgueSpeaker",
        "Torgue Speaker",
    ),
];

// ============================================================================
// Weapon skins and trinkets (hash-keyed)
// ============================================================================

/// Weapon skin part hash and English name.
pub const WEAPON_SKINS: &[(u32, &str)] = &[
    (2_659_614_539, "Blueberry Limeade"),
    (3_172_150_600, "Burnished Steele"),
    (1_480_303_331, "Dead Set"),
    (4_129_049_496, "Extreme Sportage"),
    (3_863_872_181, "Gilded Rage"),
    (2_918_977_397, "Porphyrophobia"),
    (1_339_286_384, "Retro Blaster"),
    (2_106_501_024, "Ruin Nation"),
    (744_731_650, "Survival of the Fittest"),
    (3_449_185_529, "The Art of Stealth"),
];

/// Weapon trinket part hash and English name.
pub const WEAPON_TRINKETS: &[(u32, &str)] = &[
    (389_424_079, "Cosmic Romance"),
    (4_073_667_311, "Diamond Dog"),
    (2_266_717_896, "Duckie"),
    (3_865_215_171, "Eridian Artifact"),
    (640_372_516, "Fast Food Fanatic"),
    (1_590_301_760, "Hot Streak"),
    (2_748_915_029, "Lucky Dice"),
    (920_178_497, "Rakk Rider"),
    (1_250_960_206, "Shrunken Psycho"),
    (3_577_100_441, "Tiny Vault Key"),
    (2_439_406_586, "Vault Insider VIP"),
];

/// English name for a weapon skin hash.
pub fn weapon_skin_name(hash: u32) -> Option<&'static str> {
    WEAPON_SKINS.iter().find(|(h, _)| *h == hash).map(|(_, n)| *n)
}

/// English name for a weapon trinket hash.
pub fn weapon_trinket_name(hash: u32) -> Option<&'static str> {
    WEAPON_TRINKETS.iter().find(|(h, _)| *h == hash).map(|(_, n)| *n)
}

/// English name for a room decoration asset path.
pub fn room_decoration_name(path: &str) -> Option<&'static str> {
    ROOM_DECORATIONS.iter().find(|(p, _)| *p == path).map(|(_, n)| *n)
}

// ============================================================================
// Guardian rank rewards
// ============================================================================

/// Every guardian rank reward the game offers.
pub const GUARDIAN_RANK_REWARDS: &[&str] = &[
    "/Game/PlayerCharacters/_Shared/_Design/GuardianRank/RankRewards/GuardianReward_Accuracy.GuardianReward_Accuracy",
    "/Game/PlayerCharacters/_Shared/_Design/GuardianRank/RankRewards/GuardianReward_ActionSkillCooldown.GuardianReward_ActionSkillCooldown",
    "/Game/PlayerCharacters/_Shared/_Design/GuardianRank/RankRewards/GuardianReward_CriticalDamage.GuardianReward_CriticalDamage",
    "/Game/PlayerCharacters/_Shared/_Design/GuardianRank/RankRewards/GuardianReward_ElementalDamage.GuardianReward_ElementalDamage",
    "/Game/PlayerCharacters/_Shared/_Design/GuardianRank/RankRewards/GuardianReward_FFYLDuration.GuardianReward_FFYLDuration",
    "/Game/PlayerCharacters/_Shared/_Design/GuardianRank/RankRewards/GuardianReward_FFYLMovementSpeed.GuardianReward_FFYLMovementSpeed",
    "/Game/PlayerCharacters/_Shared/_Design/GuardianRank/RankRewards/GuardianReward_GrenadeDamage.GuardianReward_GrenadeDamage",
    "/Game/PlayerCharacters/_Shared/_Design/GuardianRank/RankRewards/GuardianReward_GunDamage.GuardianReward_GunDamage",
    "/Game/PlayerCharacters/_Shared/_Design/GuardianRank/RankRewards/GuardianReward_GunFireRate.GuardianReward_GunFireRate",
    "/Game/PlayerCharacters/_Shared/_Design/GuardianRank/RankRewards/GuardianReward_LuckRate.GuardianReward_LuckRate",
    "/Game/PlayerCharacters/_Shared/_Design/GuardianRank/RankRewards/GuardianReward_MaxHealth.GuardianReward_MaxHealth",
    "/Game/PlayerCharacters/_Shared/_Design/GuardianRank/RankRewards/GuardianReward_MeleeDamage.GuardianReward_MeleeDamage",
    "/Game/PlayerCharacters/_Shared/_Design/GuardianRank/RankRewards/GuardianReward_RecoilReduction.GuardianReward_RecoilReduction",
    "/Game/PlayerCharacters/_Shared/_Design/GuardianRank/RankRewards/GuardianReward_ReloadSpeed.GuardianReward_ReloadSpeed",
    "/Game/PlayerCharacters/_Shared/_Design/GuardianRank/RankRewards/GuardianReward_ShieldCapacity.GuardianReward_ShieldCapacity",
    "/Game/PlayerCharacters/_Shared/_Design/GuardianRank/RankRewards/GuardianReward_ShieldRechargeDelay.GuardianReward_ShieldRechargeDelay",
    "/Game/PlayerCharacters/_Shared/_Design/GuardianRank/RankRewards/GuardianReward_ShieldRechargeRate.GuardianReward_ShieldRechargeRate",
    "/Game/PlayerCharacters/_Shared/_Design/GuardianRank/RankRewards/GuardianReward_VehicleDamage.GuardianReward_VehicleDamage",
    "/Game/PlayerCharacters/_Shared/_Design/GuardianRank/RankRewards/GuardianReward_XPGain.GuardianReward_XPGain",
];
