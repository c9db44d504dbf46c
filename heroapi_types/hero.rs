use serde::{Deserialize, Serialize};

/// One hero's power profile, serialized with the PascalCase field names the
/// public API exposes (`Id`, `Name`, `Intelligence`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HeroPowerStat {
    pub id: i64,
    pub name: String,
    pub intelligence: i32,
    pub strength: i32,
    pub speed: i32,
    pub durability: i32,
    pub power: i32,
    pub combat: i32,
}
