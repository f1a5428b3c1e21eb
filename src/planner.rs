//! Planning strategies.
//!
//! Every planner is total: any mission that cleared the safety screen
//! gets a plan. The strategy's name is stamped into `metadata.source`
//! so downstream stages know how to read the plan.

use serde::{Deserialize, Serialize};

use crate::model::{MissionDescription, Plan, PlanStep};

/// Delta-v budgeted for the standard maneuver step, in km/s.
pub const STANDARD_DELTA_V: f64 = 1.2;

/// Builds a plan from a mission description.
pub trait Planner: Send + Sync {
    /// Strategy name recorded in the plan's metadata.
    fn name(&self) -> &'static str;

    fn plan(&self, mission: &MissionDescription) -> Plan;
}

/// Flat plan: orbit, duration, payload status. No steps.
pub struct SummaryPlanner;

impl Planner for SummaryPlanner {
    fn name(&self) -> &'static str {
        "summary"
    }

    fn plan(&self, mission: &MissionDescription) -> Plan {
        Plan::summary(mission, self.name())
    }
}

/// Summary fields plus a fixed sequence of steps.
pub struct StepwisePlanner;

impl Planner for StepwisePlanner {
    fn name(&self) -> &'static str {
        "stepwise"
    }

    fn plan(&self, mission: &MissionDescription) -> Plan {
        let mut plan = Plan::summary(mission, self.name());
        plan.steps = vec![
            PlanStep::new("initialize"),
            PlanStep::new("perform_maneuver").with_param("delta_v", STANDARD_DELTA_V),
            PlanStep::new("deploy_payload"),
        ];
        plan
    }
}

/// Which planner to build, as named in config and on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlannerKind {
    Summary,
    #[default]
    Stepwise,
}

impl PlannerKind {
    pub fn build(self) -> Box<dyn Planner> {
        match self {
            Self::Summary => Box::new(SummaryPlanner),
            Self::Stepwise => Box::new(StepwisePlanner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use crate::model::{Orbit, PAYLOAD_READY};

    fn missions() -> Vec<MissionDescription> {
        vec![
            MissionDescription::new("LEO", 30),
            MissionDescription::new("MEO", 400),
            MissionDescription::new("XYZ", 10).with_name("odd one"),
        ]
    }

    #[test]
    fn summary_plan_copies_orbit_and_duration() {
        for mission in missions() {
            let plan = SummaryPlanner.plan(&mission);
            assert_eq!(plan.target_orbit, mission.orbit);
            assert_eq!(plan.estimated_duration, mission.duration_days);
            assert_eq!(plan.payload_status, PAYLOAD_READY);
            assert!(plan.steps.is_empty());
            assert_eq!(plan.metadata.source, "summary");
            assert_eq!(plan.metadata.mission, mission);
        }
    }

    #[test]
    fn stepwise_plan_copies_orbit_and_duration() {
        for mission in missions() {
            let plan = StepwisePlanner.plan(&mission);
            assert_eq!(plan.target_orbit, mission.orbit);
            assert_eq!(plan.estimated_duration, mission.duration_days);
            assert_eq!(plan.metadata.source, "stepwise");
        }
    }

    #[test]
    fn stepwise_steps_are_fixed_and_ordered() {
        let plan = StepwisePlanner.plan(&MissionDescription::new("LEO", 30));
        let names: Vec<&str> = plan.steps.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["initialize", "perform_maneuver", "deploy_payload"]);
        assert_eq!(plan.steps[1].params["delta_v"], json!(1.2));
        assert!(plan.steps[0].params.is_empty());
    }

    #[test]
    fn summary_plan_serializes_without_steps() {
        let plan = SummaryPlanner.plan(&MissionDescription::new("GEO", 90));
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["target_orbit"], json!("GEO"));
        assert_eq!(value["estimated_duration"], json!(90));
        assert_eq!(value["payload_status"], json!("READY"));
        assert!(value.get("steps").is_none());
    }

    #[test]
    fn kind_builds_matching_planner() {
        assert_eq!(PlannerKind::Summary.build().name(), "summary");
        assert_eq!(PlannerKind::default().build().name(), "stepwise");
        let plan = PlannerKind::Stepwise
            .build()
            .plan(&MissionDescription::new(Orbit::Meo, 5));
        assert_eq!(plan.steps.len(), 3);
    }
}
