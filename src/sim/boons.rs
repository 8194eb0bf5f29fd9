//! Boons: permanent stat upgrades picked 1-of-3 on level up

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Player;

/// Attack cooldown never drops below this
pub const MIN_ATTACK_COOLDOWN: f32 = 0.18;
/// Multiplier used by the percentage boons
pub const BOON_STEP: f32 = 1.15;
/// Crit chance added per crit boon
pub const CRIT_CHANCE_STEP: f32 = 0.05;
/// Number of boons in one offer
pub const CHOICES_PER_OFFER: usize = 3;

/// Boon catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoonType {
    AttackSpeed,
    Damage,
    CritChance,
    MoveSpeed,
    Area,
    XpGain,
    PickupRange,
    MaxHealth,
}

impl BoonType {
    pub const ALL: [BoonType; 8] = [
        BoonType::AttackSpeed,
        BoonType::Damage,
        BoonType::CritChance,
        BoonType::MoveSpeed,
        BoonType::Area,
        BoonType::XpGain,
        BoonType::PickupRange,
        BoonType::MaxHealth,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            BoonType::AttackSpeed => "Haste",
            BoonType::Damage => "Sharpened Edge",
            BoonType::CritChance => "Keen Eye",
            BoonType::MoveSpeed => "Boots of Wind",
            BoonType::Area => "Whirlwind",
            BoonType::XpGain => "Scholar",
            BoonType::PickupRange => "Magnet",
            BoonType::MaxHealth => "Toughness",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BoonType::AttackSpeed => "Reduce attack cooldown by 15% (faster auto-attacks).",
            BoonType::Damage => "Increase sword damage by +1.",
            BoonType::CritChance => "Increase critical hit chance by +5%.",
            BoonType::MoveSpeed => "Increase movement speed by +15%.",
            BoonType::Area => "Increase sword area of effect (reach +15%, width +15%).",
            BoonType::XpGain => "Gain +15% more experience from orbs.",
            BoonType::PickupRange => "Increase orb pickup range by +15%.",
            BoonType::MaxHealth => "Increase max HP by +3.",
        }
    }

    /// Whether this boon can still do something for `player`
    pub fn is_available(&self, player: &Player) -> bool {
        match self {
            BoonType::CritChance => player.crit_chance < 1.0 - 1e-6,
            _ => true,
        }
    }

    /// Mutate the player's stats
    pub fn apply(&self, player: &mut Player) {
        match self {
            BoonType::AttackSpeed => {
                player.attack_cooldown = (player.attack_cooldown * 0.85).max(MIN_ATTACK_COOLDOWN);
            }
            BoonType::Damage => player.damage += 1,
            BoonType::CritChance => {
                player.crit_chance = (player.crit_chance + CRIT_CHANCE_STEP).min(1.0);
            }
            BoonType::MoveSpeed => player.speed *= BOON_STEP,
            BoonType::Area => {
                player.sword_reach *= BOON_STEP;
                player.sword_thickness *= BOON_STEP;
            }
            BoonType::XpGain => player.xp_gain *= BOON_STEP,
            BoonType::PickupRange => player.pickup_range *= BOON_STEP,
            BoonType::MaxHealth => player.max_hp += 3,
        }
    }
}

/// A boon card as shown to the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boon {
    pub kind: BoonType,
    pub title: String,
    pub description: String,
}

impl Boon {
    pub fn from_type(kind: BoonType) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            description: kind.description().to_string(),
        }
    }

    pub fn apply(&self, player: &mut Player) {
        self.kind.apply(player);
    }
}

/// The choices offered at one level up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoonChoice {
    pub options: Vec<Boon>,
}

impl BoonChoice {
    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Boon> {
        self.options.get(index)
    }
}

fn available_pool(player: &Player) -> Vec<BoonType> {
    let pool: Vec<BoonType> = BoonType::ALL
        .iter()
        .copied()
        .filter(|b| b.is_available(player))
        .collect();
    if pool.is_empty() {
        BoonType::ALL.to_vec()
    } else {
        pool
    }
}

/// Draw distinct boons without replacement, refilling the pool if it runs dry
pub fn roll_choices<R: Rng>(rng: &mut R, player: &Player) -> BoonChoice {
    let mut pool = available_pool(player);
    let mut options = Vec::with_capacity(CHOICES_PER_OFFER);

    for _ in 0..CHOICES_PER_OFFER {
        if pool.is_empty() {
            pool = available_pool(player);
        }
        let idx = rng.random_range(0..pool.len());
        options.push(Boon::from_type(pool.remove(idx)));
    }

    BoonChoice { options }
}
