use serde::Serialize;
use utoipa::ToSchema;

/// A derived milestone; recomputed from the user's totals on every read.
#[derive(Debug, Serialize, ToSchema)]
pub struct Achievement {
    pub code: String,
    pub name: String,
    pub description: String,
    pub unlocked: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AchievementsResponse {
    pub level: i32,
    pub credits: i32,
    pub achievements: Vec<Achievement>,
}

struct AchievementDef {
    code: &'static str,
    name: &'static str,
    description: &'static str,
    unlocked: fn(&Totals) -> bool,
}

/// Inputs the milestones are derived from.
#[derive(Debug, Clone, Copy)]
pub struct Totals {
    pub credits: i32,
    pub total_study_minutes: i32,
    pub session_count: i64,
}

const DEFS: [AchievementDef; 6] = [
    AchievementDef {
        code: "first_session",
        name: "Primo passo",
        description: "Record your first focus session",
        unlocked: |t| t.session_count >= 1,
    },
    AchievementDef {
        code: "ten_sessions",
        name: "Abitudine",
        description: "Record 10 focus sessions",
        unlocked: |t| t.session_count >= 10,
    },
    AchievementDef {
        code: "study_10_hours",
        name: "Maratoneta",
        description: "Study for a total of 10 hours",
        unlocked: |t| t.total_study_minutes >= 600,
    },
    AchievementDef {
        code: "study_50_hours",
        name: "Instancabile",
        description: "Study for a total of 50 hours",
        unlocked: |t| t.total_study_minutes >= 3000,
    },
    AchievementDef {
        code: "credits_100",
        name: "Collezionista",
        description: "Earn 100 credits",
        unlocked: |t| t.credits >= 100,
    },
    AchievementDef {
        code: "credits_500",
        name: "Veterano",
        description: "Earn 500 credits",
        unlocked: |t| t.credits >= 500,
    },
];

pub fn compute_achievements(totals: Totals) -> Vec<Achievement> {
    DEFS.iter()
        .map(|def| Achievement {
            code: def.code.to_string(),
            name: def.name.to_string(),
            description: def.description.to_string(),
            unlocked: (def.unlocked)(&totals),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_account_has_nothing_unlocked() {
        let achievements = compute_achievements(Totals {
            credits: 0,
            total_study_minutes: 0,
            session_count: 0,
        });
        assert_eq!(achievements.len(), 6);
        assert!(achievements.iter().all(|a| !a.unlocked));
    }

    #[test]
    fn test_first_session_unlocks() {
        let achievements = compute_achievements(Totals {
            credits: 5,
            total_study_minutes: 30,
            session_count: 1,
        });
        let first = achievements
            .iter()
            .find(|a| a.code == "first_session")
            .unwrap();
        assert!(first.unlocked);
        let ten = achievements
            .iter()
            .find(|a| a.code == "ten_sessions")
            .unwrap();
        assert!(!ten.unlocked);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        let achievements = compute_achievements(Totals {
            credits: 100,
            total_study_minutes: 600,
            session_count: 10,
        });
        for code in ["ten_sessions", "study_10_hours", "credits_100"] {
            let a = achievements.iter().find(|a| a.code == code).unwrap();
            assert!(a.unlocked, "{code} should unlock at its threshold");
        }
    }
}
