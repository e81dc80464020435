use serde::{Deserialize, Serialize};

/// Pack categories shipped with the application — strongly typed, no magic
/// strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PackKind {
    Worlds,
    BehaviorPacks,
    ResourcePacks,
    SkinPacks,
}

impl std::fmt::Display for PackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackKind::Worlds => write!(f, "worlds"),
            PackKind::BehaviorPacks => write!(f, "behavior packs"),
            PackKind::ResourcePacks => write!(f, "resource packs"),
            PackKind::SkinPacks => write!(f, "skin packs"),
        }
    }
}

/// One row of the install table: which bundled archive lands where.
#[derive(Debug, Clone, Copy)]
pub struct InstallMapping {
    pub kind: PackKind,
    /// Name of the zip inside the asset bundle.
    pub asset: &'static str,
    /// Destination directory, relative to the storage root.
    pub destination: &'static str,
}

/// The four archives every build ships, in install order.
pub const INSTALL_MAPPINGS: [InstallMapping; 4] = [
    InstallMapping {
        kind: PackKind::Worlds,
        asset: "resources/worlds.zip",
        destination: "games/com.mojang/minecraftWorlds",
    },
    InstallMapping {
        kind: PackKind::BehaviorPacks,
        asset: "resources/behavior_packs.zip",
        destination: "games/com.mojang/behavior_packs",
    },
    InstallMapping {
        kind: PackKind::ResourcePacks,
        asset: "resources/resource_packs.zip",
        destination: "games/com.mojang/resource_packs",
    },
    InstallMapping {
        kind: PackKind::SkinPacks,
        asset: "resources/skin_packs.zip",
        destination: "games/com.mojang/skin_packs",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_table_covers_each_pack_kind_once() {
        let kinds: Vec<PackKind> = INSTALL_MAPPINGS.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PackKind::Worlds,
                PackKind::BehaviorPacks,
                PackKind::ResourcePacks,
                PackKind::SkinPacks,
            ]
        );
    }

    #[test]
    fn destinations_live_under_the_com_mojang_tree() {
        for mapping in &INSTALL_MAPPINGS {
            assert!(mapping.destination.starts_with("games/com.mojang/"));
            assert!(mapping.asset.starts_with("resources/"));
            assert!(mapping.asset.ends_with(".zip"));
        }
    }
}
