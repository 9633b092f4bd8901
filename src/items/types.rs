use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemBase {
    Sword,
    Axe,
    Bow,
    Staff,
    Shield,
    Amulet,
    Ring,
}

impl ItemBase {
    pub fn all() -> [ItemBase; 7] {
        [
            ItemBase::Sword,
            ItemBase::Axe,
            ItemBase::Bow,
            ItemBase::Staff,
            ItemBase::Shield,
            ItemBase::Amulet,
            ItemBase::Ring,
        ]
    }

    /// Lowercase prefix used in item identifiers.
    pub fn slug(&self) -> &'static str {
        match self {
            ItemBase::Sword => "sword",
            ItemBase::Axe => "axe",
            ItemBase::Bow => "bow",
            ItemBase::Staff => "staff",
            ItemBase::Shield => "shield",
            ItemBase::Amulet => "amulet",
            ItemBase::Ring => "ring",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Magic = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Magic => "Magic",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: String,
    pub base: ItemBase,
    pub rarity: Rarity,
    pub item_level: u32,
}

impl Item {
    /// Builds an item whose id is `<base>-<item level>`, e.g. `sword-10`.
    pub fn new(base: ItemBase, rarity: Rarity, item_level: u32) -> Self {
        Self {
            item_id: format!("{}-{}", base.slug(), item_level),
            base,
            rarity,
            item_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_format() {
        let item = Item::new(ItemBase::Staff, Rarity::Epic, 30);
        assert_eq!(item.item_id, "staff-30");
        assert_eq!(item.rarity, Rarity::Epic);
    }

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Magic);
        assert!(Rarity::Epic < Rarity::Legendary);
    }

    #[test]
    fn test_rarity_names() {
        assert_eq!(Rarity::Legendary.name(), "Legendary");
    }
}
