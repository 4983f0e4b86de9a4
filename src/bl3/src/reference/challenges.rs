//! Challenge identities the editor cares about, plus the mission fixtures
//! used by the Takedown Discovery and Eridian cube operations.

use super::CharClass;

/// Challenges with a direct editing operation behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChallengeKind {
    ComBeastmaster,
    ComGunner,
    ComOperative,
    ComSiren,
    Artifact,
    EridianAnalyzer,
    EridianResonator,
}

impl ChallengeKind {
    pub const ALL: [ChallengeKind; 7] = [
        ChallengeKind::ComBeastmaster,
        ChallengeKind::ComGunner,
        ChallengeKind::ComOperative,
        ChallengeKind::ComSiren,
        ChallengeKind::Artifact,
        ChallengeKind::EridianAnalyzer,
        ChallengeKind::EridianResonator,
    ];

    pub fn challenge_path(self) -> &'static str {
        match self {
            ChallengeKind::ComBeastmaster => {
                "/Game/GameData/Challenges/Character/Beastmaster/BP_Challenge_Beastmaster_ClassMod.BP_Challenge_Beastmaster_ClassMod_C"
            }
            ChallengeKind::ComGunner => {
                "/Game/GameData/Challenges/Character/Gunner/BP_Challenge_Gunner_ClassMod.BP_Challenge_Gunner_ClassMod_C"
            }
            ChallengeKind::ComOperative => {
                "/Game/GameData/Challenges/Character/Operative/BP_Challenge_Operative_ClassMod.BP_Challenge_Operative_ClassMod_C"
            }
            ChallengeKind::ComSiren => {
                "/Game/GameData/Challenges/Character/Siren/BP_Challenge_Siren_ClassMod.BP_Challenge_Siren_ClassMod_C"
            }
            ChallengeKind::Artifact => {
                "/Game/GameData/Challenges/Artifacts/BP_Challenge_Artifacts.BP_Challenge_Artifacts_C"
            }
            ChallengeKind::EridianAnalyzer => {
                "/Game/GameData/Challenges/EridianAnalyzer/BP_Challenge_Analyzer.BP_Challenge_Analyzer_C"
            }
            ChallengeKind::EridianResonator => {
                "/Game/GameData/Challenges/EridianResonator/BP_Challenge_EridianResonator.BP_Challenge_EridianResonator_C"
            }
        }
    }

    pub fn eng(self) -> &'static str {
        match self {
            ChallengeKind::ComBeastmaster => "Beastmaster COM Slot",
            ChallengeKind::ComGunner => "Gunner COM Slot",
            ChallengeKind::ComOperative => "Operative COM Slot",
            ChallengeKind::ComSiren => "Siren COM Slot",
            ChallengeKind::Artifact => "Artifact Slot",
            ChallengeKind::EridianAnalyzer => "Eridian Analyzer",
            ChallengeKind::EridianResonator => "Eridian Resonator",
        }
    }

    /// The class a COM challenge belongs to; `None` for class-neutral
    /// challenges.
    pub fn class_lock(self) -> Option<CharClass> {
        match self {
            ChallengeKind::ComBeastmaster => Some(CharClass::Beastmaster),
            ChallengeKind::ComGunner => Some(CharClass::Gunner),
            ChallengeKind::ComOperative => Some(CharClass::Operative),
            ChallengeKind::ComSiren => Some(CharClass::Siren),
            _ => None,
        }
    }

    /// The COM-slot challenge for a class.
    pub fn com_for_class(class: CharClass) -> ChallengeKind {
        match class {
            CharClass::Beastmaster => ChallengeKind::ComBeastmaster,
            CharClass::Gunner => ChallengeKind::ComGunner,
            CharClass::Operative => ChallengeKind::ComOperative,
            CharClass::Siren => ChallengeKind::ComSiren,
        }
    }

    pub fn from_challenge_path(path: &str) -> Option<ChallengeKind> {
        Self::ALL.into_iter().find(|c| c.challenge_path() == path)
    }
}

/// Stat tracking the Desolation's Edge Eridian cube redemption.
pub const CUBE_PUZZLE_STAT: &str =
    "/Game/GameData/Stats/Discovery/Stat_Discovery_EridianCubePuzzle.Stat_Discovery_EridianCubePuzzle";

/// The two Takedown Discovery missions: mission class path, the objective
/// set to activate, and the objective progress values marking it complete.
pub const TAKEDOWN_MISSIONS: &[(&str, &str, &[i32])] = &[
    (
        "/Game/PatchDLC/Raid1/Missions/Mission_Raid1.Mission_Raid1_C",
        "/Game/PatchDLC/Raid1/Missions/Mission_Raid1.Set_TakedownDiscovery_ObjectiveSet",
        &[1, 1],
    ),
    (
        "/Game/PatchDLC/Takedown2/Missions/Mission_Takedown2.Mission_Takedown2_C",
        "/Game/PatchDLC/Takedown2/Missions/Mission_Takedown2.Set_TakedownDiscovery2_ObjectiveSet",
        &[1, 1],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_com_challenge_per_class() {
        for class in CharClass::ALL {
            let chal = ChallengeKind::com_for_class(class);
            assert_eq!(chal.class_lock(), Some(class));
        }
        assert_eq!(ChallengeKind::Artifact.class_lock(), None);
    }

    #[test]
    fn test_challenge_path_roundtrip() {
        for chal in ChallengeKind::ALL {
            assert_eq!(
                ChallengeKind::from_challenge_path(chal.challenge_path()),
                Some(chal)
            );
        }
    }

    #[test]
    fn test_takedown_missions_distinct() {
        assert_eq!(TAKEDOWN_MISSIONS.len(), 2);
        assert_ne!(TAKEDOWN_MISSIONS[0].0, TAKEDOWN_MISSIONS[1].0);
    }
}
