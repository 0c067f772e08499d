//! Three-phase implementation roadmap.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::Category;
use crate::domain::maturity::MaturityLevel;
use crate::domain::strategy::phrases::{improvement_action, leverage_action};

/// One roadmap phase with its time horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub title: String,
    pub horizon: String,
    pub actions: Vec<String>,
}

/// Builds the 0-3, 3-6 and 6-12 month phases.
///
/// `weakest` is ordered weakest first; `strongest` strongest first. Either
/// may be empty, in which case level-based actions fill the phase.
pub fn build_roadmap(
    level: MaturityLevel,
    weakest: &[Category],
    strongest: &[Category],
) -> Vec<RoadmapPhase> {
    let mut quick_wins = vec![format!(
        "Agree on the AI vision and name an owner to {}",
        level.next_step_focus()
    )];
    match weakest.first() {
        Some(category) => quick_wins.push(improvement_action(*category).to_string()),
        None => quick_wins.push("Select one high-volume process for a first AI pilot".to_string()),
    }

    let mut foundation: Vec<String> = weakest
        .iter()
        .skip(1)
        .map(|category| improvement_action(*category).to_string())
        .collect();
    foundation.push(match level {
        MaturityLevel::AiPreparing | MaturityLevel::AiAdopting => {
            "Run a first production pilot with a clear success metric".to_string()
        }
        MaturityLevel::AiGrowing => "Extend proven pilots to neighboring processes".to_string(),
        MaturityLevel::AiMaturing | MaturityLevel::AiLeading => {
            "Standardize the AI delivery platform and model governance".to_string()
        }
    });

    let mut scale = Vec::new();
    if let Some(category) = strongest.first() {
        scale.push(leverage_action(*category).to_string());
    }
    scale.push(match level.next() {
        Some(next) => format!("Review progress with a repeat diagnosis, targeting {}", next),
        None => "Review progress with a repeat diagnosis and benchmark against industry leaders"
            .to_string(),
    });

    vec![
        RoadmapPhase {
            title: "Phase 1: Quick Wins".to_string(),
            horizon: "0-3 months".to_string(),
            actions: quick_wins,
        },
        RoadmapPhase {
            title: "Phase 2: Build Foundations".to_string(),
            horizon: "3-6 months".to_string(),
            actions: foundation,
        },
        RoadmapPhase {
            title: "Phase 3: Scale and Optimize".to_string(),
            horizon: "6-12 months".to_string(),
            actions: scale,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_three_non_empty_phases() {
        for level in MaturityLevel::ALL {
            let phases = build_roadmap(level, &[], &[]);
            assert_eq!(phases.len(), 3);
            assert!(phases.iter().all(|p| !p.actions.is_empty()));
        }
    }

    #[test]
    fn weakest_category_drives_quick_wins() {
        let phases = build_roadmap(
            MaturityLevel::AiAdopting,
            &[Category::DataManagement, Category::HumanResources],
            &[Category::BusinessFoundation],
        );
        assert!(phases[0]
            .actions
            .contains(&improvement_action(Category::DataManagement).to_string()));
        assert!(phases[1]
            .actions
            .contains(&improvement_action(Category::HumanResources).to_string()));
        assert!(phases[2]
            .actions
            .contains(&leverage_action(Category::BusinessFoundation).to_string()));
    }

    #[test]
    fn top_level_has_no_next_target() {
        let phases = build_roadmap(MaturityLevel::AiLeading, &[], &[]);
        assert!(phases[2].actions.last().unwrap().contains("industry leaders"));
    }
}
