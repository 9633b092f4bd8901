use super::types::{Item, ItemBase, Rarity};
use crate::core::constants::{
    ILVL_PER_STAGE, ITEM_DROP_BASE_CHANCE, ITEM_DROP_MAX_CHANCE, RARITY_STAGE_BONUS_CAP,
    RARITY_STAGE_BONUS_PER_STAGE,
};
use crate::world::World;
use rand::Rng;

/// Decides what, if anything, drops after a won fight.
pub trait LootTable {
    /// `None` means nothing dropped this turn.
    fn draw(&self, world: &World, rng: &mut impl Rng) -> Option<Item>;
}

/// Stage-scaled drops with a rarity roll.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardLoot;

impl LootTable for StandardLoot {
    fn draw(&self, world: &World, rng: &mut impl Rng) -> Option<Item> {
        if rng.gen::<f64>() > drop_chance_for_world(world) {
            return None;
        }

        let rarity = roll_rarity(world.stage, rng);
        let base = roll_random_base(rng);
        Some(Item::new(base, rarity, ilvl_for_stage(world.stage)))
    }
}

pub fn drop_chance_for_world(world: &World) -> f64 {
    (ITEM_DROP_BASE_CHANCE + world.loot_bonus).min(ITEM_DROP_MAX_CHANCE)
}

pub fn ilvl_for_stage(stage: u32) -> u32 {
    stage.max(1) * ILVL_PER_STAGE
}

/// Roll item rarity; later stages shift weight from Common toward higher tiers.
pub fn roll_rarity(stage: u32, rng: &mut impl Rng) -> Rarity {
    let roll = rng.gen::<f64>();

    let bonus = (stage.saturating_sub(1) as f64 * RARITY_STAGE_BONUS_PER_STAGE)
        .min(RARITY_STAGE_BONUS_CAP);

    // Base distribution: 55% Common, 30% Magic, 12% Rare, 2.5% Epic, 0.5% Legendary
    let common_threshold = (0.55 - bonus).max(0.10);
    let magic_threshold = common_threshold + 0.30;
    let rare_threshold = magic_threshold + 0.12 + bonus * 0.4;
    let epic_threshold = rare_threshold + 0.025 + bonus * 0.4;

    if roll < common_threshold {
        Rarity::Common
    } else if roll < magic_threshold {
        Rarity::Magic
    } else if roll < rare_threshold {
        Rarity::Rare
    } else if roll < epic_threshold {
        Rarity::Epic
    } else {
        Rarity::Legendary
    }
}

pub fn roll_random_base(rng: &mut impl Rng) -> ItemBase {
    let bases = ItemBase::all();
    bases[rng.gen_range(0..bases.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::balance::BalanceConfig;
    use crate::world::create_world;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_roll_rarity_base_distribution() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut counts = [0u32; 5];
        for _ in 0..10000 {
            counts[roll_rarity(1, &mut rng) as usize] += 1;
        }

        assert!(counts[0] > 4500, "Common should be ~55%, got {}", counts[0]);
        assert!(counts[1] > 2500, "Magic should be ~30%, got {}", counts[1]);
        assert!(counts[2] > 800, "Rare should be ~12%, got {}", counts[2]);
        assert!(counts[3] > 50, "Epic should be ~2.5%, got {}", counts[3]);
        assert!(counts[4] > 0, "Legendary should appear, got {}", counts[4]);
    }

    #[test]
    fn test_later_stages_drop_fewer_commons() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let early = (0..10000)
            .filter(|_| roll_rarity(1, &mut rng) == Rarity::Common)
            .count();
        let late = (0..10000)
            .filter(|_| roll_rarity(11, &mut rng) == Rarity::Common)
            .count();
        assert!(late < early, "stage 11 commons {late} vs stage 1 {early}");
    }

    #[test]
    fn test_drop_chance_capped() {
        let mut world = create_world(&BalanceConfig::default());
        assert!((drop_chance_for_world(&world) - ITEM_DROP_BASE_CHANCE).abs() < 1e-9);
        world.loot_bonus = 1.0;
        assert!((drop_chance_for_world(&world) - ITEM_DROP_MAX_CHANCE).abs() < 1e-9);
    }

    #[test]
    fn test_standard_loot_drops_sometimes() {
        let world = create_world(&BalanceConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let drops: Vec<Item> = (0..1000)
            .filter_map(|_| StandardLoot.draw(&world, &mut rng))
            .collect();

        assert!(!drops.is_empty());
        assert!(drops.len() < 300, "~15% drop rate expected, got {}", drops.len());
        for item in &drops {
            assert_eq!(item.item_level, ILVL_PER_STAGE);
            assert!(item.item_id.ends_with("-10"));
        }
    }
}
