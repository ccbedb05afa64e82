//! Achievement definitions and metadata
//!
//! The catalog is a `static` slice: declaration order is the order in which
//! newly unlocked achievements are reported, and IDs are persisted by their
//! string form, so neither may change between releases.

/// Unique identifier for each achievement.
///
/// Variant order matches [`ACHIEVEMENTS`]; the discriminant doubles as the
/// catalog index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AchievementId {
    // Milestone
    FirstLog,

    // Logging
    CulinaryExplorer5,
    Photogenic,
    SharpShooter10,
    GoodListener,
    Scanner,
    Trifecta,

    // Consistency
    Streak3,
    Streak7,
    Streak30,

    // Hydration
    HydrationHero1,

    // Nutrition
    GoalCrusher3,
    ProteinPowerhouse,
    IronClad,
    VitaminCVictor,
    MacroMaster,
}

impl AchievementId {
    /// Get the string ID for storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstLog => "first_log",
            Self::CulinaryExplorer5 => "culinary_explorer_5",
            Self::Photogenic => "photogenic",
            Self::SharpShooter10 => "sharp_shooter_10",
            Self::GoodListener => "good_listener",
            Self::Scanner => "scanner",
            Self::Trifecta => "trifecta",
            Self::Streak3 => "streak_3",
            Self::Streak7 => "streak_7",
            Self::Streak30 => "streak_30",
            Self::HydrationHero1 => "hydration_hero_1",
            Self::GoalCrusher3 => "goal_crusher_3",
            Self::ProteinPowerhouse => "protein_powerhouse",
            Self::IronClad => "iron_clad",
            Self::VitaminCVictor => "vitamin_c_victor",
            Self::MacroMaster => "macro_master",
        }
    }

    /// Parse from storage string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first_log" => Some(Self::FirstLog),
            "culinary_explorer_5" => Some(Self::CulinaryExplorer5),
            "photogenic" => Some(Self::Photogenic),
            "sharp_shooter_10" => Some(Self::SharpShooter10),
            "good_listener" => Some(Self::GoodListener),
            "scanner" => Some(Self::Scanner),
            "trifecta" => Some(Self::Trifecta),
            "streak_3" => Some(Self::Streak3),
            "streak_7" => Some(Self::Streak7),
            "streak_30" => Some(Self::Streak30),
            "hydration_hero_1" => Some(Self::HydrationHero1),
            "goal_crusher_3" => Some(Self::GoalCrusher3),
            "protein_powerhouse" => Some(Self::ProteinPowerhouse),
            "iron_clad" => Some(Self::IronClad),
            "vitamin_c_victor" => Some(Self::VitaminCVictor),
            "macro_master" => Some(Self::MacroMaster),
            _ => None,
        }
    }

    /// Get all achievement IDs in catalog order
    pub fn all() -> &'static [AchievementId] {
        &[
            Self::FirstLog,
            Self::CulinaryExplorer5,
            Self::Photogenic,
            Self::SharpShooter10,
            Self::GoodListener,
            Self::Scanner,
            Self::Trifecta,
            Self::Streak3,
            Self::Streak7,
            Self::Streak30,
            Self::HydrationHero1,
            Self::GoalCrusher3,
            Self::ProteinPowerhouse,
            Self::IronClad,
            Self::VitaminCVictor,
            Self::MacroMaster,
        ]
    }
}

impl std::fmt::Display for AchievementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Achievement category for grouping in UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementCategory {
    Milestone,
    Consistency,
    Nutrition,
    Logging,
    Hydration,
}

impl AchievementCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Milestone => "Milestones",
            Self::Consistency => "Consistency",
            Self::Nutrition => "Nutrition",
            Self::Logging => "Logging",
            Self::Hydration => "Hydration",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
}

impl Rarity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
        }
    }
}

/// Achievement definition with all metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
    pub rarity: Rarity,
    /// For progressive achievements, the target count
    pub target: Option<u32>,
}

/// All achievement definitions
pub static ACHIEVEMENTS: &[Achievement] = &[
    // === MILESTONE ===
    Achievement {
        id: AchievementId::FirstLog,
        name: "First Bite",
        description: "Log your very first meal",
        icon: "🍽️",
        category: AchievementCategory::Milestone,
        rarity: Rarity::Common,
        target: Some(1),
    },
    // === LOGGING ===
    Achievement {
        id: AchievementId::CulinaryExplorer5,
        name: "Culinary Explorer",
        description: "Log 5 different meals",
        icon: "🧭",
        category: AchievementCategory::Logging,
        rarity: Rarity::Common,
        target: Some(5),
    },
    Achievement {
        id: AchievementId::Photogenic,
        name: "Photogenic",
        description: "Log a meal from a photo",
        icon: "📸",
        category: AchievementCategory::Logging,
        rarity: Rarity::Common,
        target: None,
    },
    Achievement {
        id: AchievementId::SharpShooter10,
        name: "Sharp Shooter",
        description: "Log 10 meals from photos",
        icon: "🎯",
        category: AchievementCategory::Logging,
        rarity: Rarity::Rare,
        target: Some(10),
    },
    Achievement {
        id: AchievementId::GoodListener,
        name: "Good Listener",
        description: "Log a meal by voice",
        icon: "🎙️",
        category: AchievementCategory::Logging,
        rarity: Rarity::Common,
        target: None,
    },
    Achievement {
        id: AchievementId::Scanner,
        name: "Scanner",
        description: "Log a meal by scanning a barcode",
        icon: "🏷️",
        category: AchievementCategory::Logging,
        rarity: Rarity::Common,
        target: None,
    },
    Achievement {
        id: AchievementId::Trifecta,
        name: "Trifecta",
        description: "Log meals by photo, voice and barcode",
        icon: "🔱",
        category: AchievementCategory::Logging,
        rarity: Rarity::Epic,
        target: None,
    },
    // === CONSISTENCY ===
    Achievement {
        id: AchievementId::Streak3,
        name: "On a Roll",
        description: "Log meals 3 days in a row",
        icon: "🔥",
        category: AchievementCategory::Consistency,
        rarity: Rarity::Common,
        target: Some(3),
    },
    Achievement {
        id: AchievementId::Streak7,
        name: "Week Warrior",
        description: "Log meals 7 days in a row",
        icon: "📅",
        category: AchievementCategory::Consistency,
        rarity: Rarity::Rare,
        target: Some(7),
    },
    Achievement {
        id: AchievementId::Streak30,
        name: "Habit Formed",
        description: "Log meals 30 days in a row",
        icon: "👑",
        category: AchievementCategory::Consistency,
        rarity: Rarity::Epic,
        target: Some(30),
    },
    // === HYDRATION ===
    Achievement {
        id: AchievementId::HydrationHero1,
        name: "Hydration Hero",
        description: "Reach your daily water goal",
        icon: "💧",
        category: AchievementCategory::Hydration,
        rarity: Rarity::Common,
        target: None,
    },
    // === NUTRITION ===
    Achievement {
        id: AchievementId::GoalCrusher3,
        name: "Goal Crusher",
        description: "Land within 10% of your calorie goal on 3 days",
        icon: "🏆",
        category: AchievementCategory::Nutrition,
        rarity: Rarity::Rare,
        target: Some(3),
    },
    Achievement {
        id: AchievementId::ProteinPowerhouse,
        name: "Protein Powerhouse",
        description: "Eat 100g of protein in a single day",
        icon: "💪",
        category: AchievementCategory::Nutrition,
        rarity: Rarity::Common,
        target: None,
    },
    Achievement {
        id: AchievementId::IronClad,
        name: "Iron Clad",
        description: "Reach your daily iron goal",
        icon: "🛡️",
        category: AchievementCategory::Nutrition,
        rarity: Rarity::Rare,
        target: None,
    },
    Achievement {
        id: AchievementId::VitaminCVictor,
        name: "Vitamin C Victor",
        description: "Reach your daily vitamin C goal",
        icon: "🍊",
        category: AchievementCategory::Nutrition,
        rarity: Rarity::Rare,
        target: None,
    },
    Achievement {
        id: AchievementId::MacroMaster,
        name: "Macro Master",
        description: "Hit protein, carbs and fat within 10% on the same day",
        icon: "⚖️",
        category: AchievementCategory::Nutrition,
        rarity: Rarity::Epic,
        target: None,
    },
];

impl Achievement {
    /// Get achievement definition by ID
    pub fn get(id: AchievementId) -> &'static Achievement {
        &ACHIEVEMENTS[id as usize]
    }

    /// Look up a definition by its stored string ID
    pub fn find(id: &str) -> Option<&'static Achievement> {
        AchievementId::from_str(id).map(Self::get)
    }

    /// Get total number of achievements
    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }
}
