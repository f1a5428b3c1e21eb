//! Plan execution: executors carry out a plan, orchestrators decide how.
//!
//! The pipeline never calls an executor directly. It holds an
//! `ExecutionStrategy`, chosen once when the pipeline is built, that
//! either hands the whole plan to an executor or routes it through an
//! orchestrator first. Any `Err` is a fault: it stops the run before
//! validation.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::model::{ExecutionResult, Plan, PlanStep};

/// Why executing a plan failed.
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    #[error("step '{step}' failed: {reason}")]
    StepFailed { step: String, reason: String },

    #[error("execution failed: {0}")]
    Failed(String),
}

/// Carries out a plan and reports what happened.
pub trait Executor: Send + Sync {
    fn execute(&self, plan: &Plan) -> Result<ExecutionResult, ExecutionError>;
}

/// Coordinates an executor over a plan.
pub trait Orchestrator: Send + Sync {
    fn orchestrate(
        &self,
        plan: &Plan,
        executor: &dyn Executor,
    ) -> Result<ExecutionResult, ExecutionError>;
}

/// How the pipeline's execution stage runs.
pub enum ExecutionStrategy {
    /// Hand the plan straight to the executor.
    Direct(Box<dyn Executor>),

    /// Let the orchestrator drive the executor.
    Orchestrated {
        orchestrator: Box<dyn Orchestrator>,
        executor: Box<dyn Executor>,
    },
}

impl ExecutionStrategy {
    pub fn direct(executor: impl Executor + 'static) -> Self {
        Self::Direct(Box::new(executor))
    }

    pub fn orchestrated(
        orchestrator: impl Orchestrator + 'static,
        executor: impl Executor + 'static,
    ) -> Self {
        Self::Orchestrated {
            orchestrator: Box::new(orchestrator),
            executor: Box::new(executor),
        }
    }

    pub fn run(&self, plan: &Plan) -> Result<ExecutionResult, ExecutionError> {
        match self {
            Self::Direct(executor) => executor.execute(plan),
            Self::Orchestrated {
                orchestrator,
                executor,
            } => orchestrator.orchestrate(plan, executor.as_ref()),
        }
    }

    /// Short description for logs.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Direct(_) => "executed directly",
            Self::Orchestrated { .. } => "executed via orchestrator",
        }
    }
}

/// Which execution strategy to build, as named in config and on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionKind {
    /// Skip execution; validate the plan directly.
    None,
    #[default]
    Direct,
    Orchestrated,
}

impl ExecutionKind {
    /// Build the strategy with the built-in collaborators, or `None` to skip execution.
    pub fn build(self) -> Option<ExecutionStrategy> {
        match self {
            Self::None => None,
            Self::Direct => Some(ExecutionStrategy::direct(DryRunExecutor)),
            Self::Orchestrated => Some(ExecutionStrategy::orchestrated(
                SequentialOrchestrator,
                DryRunExecutor,
            )),
        }
    }
}

/// Walks the plan without touching hardware, checking each step's parameters.
pub struct DryRunExecutor;

impl Executor for DryRunExecutor {
    fn execute(&self, plan: &Plan) -> Result<ExecutionResult, ExecutionError> {
        for step in &plan.steps {
            check_step(step)?;
        }

        let executed: Vec<&str> = plan.steps.iter().map(|s| s.name.as_str()).collect();
        Ok(ExecutionResult(json!({
            "mode": "dry-run",
            "target_orbit": plan.target_orbit,
            "executed_steps": executed,
            "status": "COMPLETED",
        })))
    }
}

/// Maneuver budgets must be finite and non-negative.
fn check_step(step: &PlanStep) -> Result<(), ExecutionError> {
    let Some(delta_v) = step.params.get("delta_v") else {
        return Ok(());
    };
    match delta_v.as_f64() {
        Some(v) if v.is_finite() && v >= 0.0 => Ok(()),
        _ => Err(ExecutionError::StepFailed {
            step: step.name.clone(),
            reason: format!("invalid delta_v: {delta_v}"),
        }),
    }
}

/// Feeds the executor one step at a time, in order, stopping at the first failure.
///
/// A plan with no steps is executed once, whole.
pub struct SequentialOrchestrator;

impl Orchestrator for SequentialOrchestrator {
    fn orchestrate(
        &self,
        plan: &Plan,
        executor: &dyn Executor,
    ) -> Result<ExecutionResult, ExecutionError> {
        let mut results: Vec<Value> = Vec::with_capacity(plan.steps.len().max(1));

        if plan.steps.is_empty() {
            results.push(executor.execute(plan)?.into_value());
        } else {
            for step in &plan.steps {
                let single = Plan {
                    steps: vec![step.clone()],
                    ..plan.clone()
                };
                results.push(executor.execute(&single)?.into_value());
            }
        }

        Ok(ExecutionResult(json!({
            "orchestrator": "sequential",
            "results": results,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use crate::model::MissionDescription;
    use crate::planner::{Planner, StepwisePlanner, SummaryPlanner};

    /// Records the step names of every plan it is handed.
    #[derive(Default)]
    struct RecordingExecutor {
        seen: Mutex<Vec<Vec<String>>>,
    }

    impl Executor for RecordingExecutor {
        fn execute(&self, plan: &Plan) -> Result<ExecutionResult, ExecutionError> {
            let names = plan.steps.iter().map(|s| s.name.clone()).collect();
            self.seen.lock().unwrap().push(names);
            Ok(ExecutionResult(json!("ok")))
        }
    }

    /// Fails on a named step.
    struct FailOn(&'static str);

    impl Executor for FailOn {
        fn execute(&self, plan: &Plan) -> Result<ExecutionResult, ExecutionError> {
            if plan.steps.iter().any(|s| s.name == self.0) {
                return Err(ExecutionError::StepFailed {
                    step: self.0.to_string(),
                    reason: "simulated fault".into(),
                });
            }
            Ok(ExecutionResult(json!("ok")))
        }
    }

    fn stepwise_plan() -> Plan {
        StepwisePlanner.plan(&MissionDescription::new("LEO", 30))
    }

    #[test]
    fn dry_run_reports_executed_steps() {
        let result = DryRunExecutor.execute(&stepwise_plan()).unwrap();
        assert_eq!(
            result.0["executed_steps"],
            json!(["initialize", "perform_maneuver", "deploy_payload"])
        );
        assert_eq!(result.0["status"], json!("COMPLETED"));
        assert_eq!(result.0["target_orbit"], json!("LEO"));
    }

    #[test]
    fn dry_run_rejects_negative_delta_v() {
        let mut plan = stepwise_plan();
        plan.steps[1] = PlanStep::new("perform_maneuver").with_param("delta_v", -3.0);

        let err = DryRunExecutor.execute(&plan).unwrap_err();
        match err {
            ExecutionError::StepFailed { step, reason } => {
                assert_eq!(step, "perform_maneuver");
                assert!(reason.contains("delta_v"));
            }
            other => panic!("expected StepFailed, got {other:?}"),
        }
    }

    #[test]
    fn dry_run_rejects_non_numeric_delta_v() {
        let mut plan = stepwise_plan();
        plan.steps[1] = PlanStep::new("perform_maneuver").with_param("delta_v", "fast");
        assert!(DryRunExecutor.execute(&plan).is_err());
    }

    #[test]
    fn sequential_orchestrator_runs_steps_in_order() {
        let executor = RecordingExecutor::default();
        let result = SequentialOrchestrator
            .orchestrate(&stepwise_plan(), &executor)
            .unwrap();

        let seen = executor.seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                vec!["initialize".to_string()],
                vec!["perform_maneuver".to_string()],
                vec!["deploy_payload".to_string()],
            ]
        );
        assert_eq!(result.0["results"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn sequential_orchestrator_runs_stepless_plan_once() {
        let executor = RecordingExecutor::default();
        let plan = SummaryPlanner.plan(&MissionDescription::new("GEO", 90));
        SequentialOrchestrator.orchestrate(&plan, &executor).unwrap();

        assert_eq!(executor.seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn sequential_orchestrator_stops_at_first_failure() {
        let err = SequentialOrchestrator
            .orchestrate(&stepwise_plan(), &FailOn("perform_maneuver"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "step 'perform_maneuver' failed: simulated fault"
        );
    }

    #[test]
    fn strategy_routes_through_orchestrator() {
        let strategy = ExecutionKind::Orchestrated.build().unwrap();
        let result = strategy.run(&stepwise_plan()).unwrap();
        assert_eq!(result.0["orchestrator"], json!("sequential"));
        assert_eq!(strategy.describe(), "executed via orchestrator");
    }

    #[test]
    fn none_kind_builds_no_strategy() {
        assert!(ExecutionKind::None.build().is_none());
        assert!(matches!(
            ExecutionKind::Direct.build(),
            Some(ExecutionStrategy::Direct(_))
        ));
    }
}
