//! The mission decision pipeline.
//!
//! Runs a mission through the safety screen, a planner, an optional
//! execution stage, and a validator, in that order. A stage that fails
//! ends the run there; later stages never see the mission.
//!
//! Two kinds of failure are kept apart:
//!
//! - Rejections (`ABORTED`, `REJECTED`) are ordinary outcomes with a reason.
//! - Faults (an executor or validator returning `Err`) are caught here,
//!   tagged with the stage, and end the run in `ERROR`.
//!
//! A pipeline holds no per-run state, so one instance can serve
//! concurrent callers.

use crate::{
    execute::ExecutionStrategy,
    model::{Action, MissionDescription, RunResult, RunStatus, SimulationOutcome, Stage},
    observer::{Observer, PipelineState, TracingObserver, Transition},
    planner::Planner,
    risk, safety,
    validator::{self, FeasibilityValidator, Validator},
};

pub struct MissionPipeline {
    planner: Box<dyn Planner>,
    execution: Option<ExecutionStrategy>,
    validator: Box<dyn Validator>,
    observer: Box<dyn Observer>,
}

impl MissionPipeline {
    /// A pipeline with the given planner, no execution stage, the feasibility
    /// validator, and transitions reported to `tracing`.
    pub fn new(planner: Box<dyn Planner>) -> Self {
        Self {
            planner,
            execution: None,
            validator: Box::new(FeasibilityValidator),
            observer: Box::new(TracingObserver),
        }
    }

    /// Run plans through `strategy` before validating them.
    #[must_use]
    pub fn with_execution(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution = Some(strategy);
        self
    }

    #[must_use]
    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    #[must_use]
    pub fn with_observer(mut self, observer: impl Observer + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Full run: safety → plan → (execute) → validate.
    pub fn run_mission(&self, mission: &MissionDescription) -> RunResult {
        use PipelineState as S;

        let safety = safety::check(mission);
        let mut result = RunResult::screened(mission.clone(), safety);
        if !result.safety.ok {
            self.transition(mission, S::Start, S::Aborted, &result.safety.reason);
            return result;
        }
        self.transition(mission, S::Start, S::SafetyChecked, &result.safety.reason);

        let plan = self.planner.plan(mission);
        self.transition(mission, S::SafetyChecked, S::Planned, self.planner.name());

        let execution = match &self.execution {
            Some(strategy) => match strategy.run(&plan) {
                Ok(output) => {
                    self.transition(mission, S::Planned, S::Executed, strategy.describe());
                    Some(output)
                }
                Err(e) => {
                    let message = e.to_string();
                    self.transition(mission, S::Planned, S::Error, &message);
                    result.plan = Some(plan);
                    result.fault(Stage::Execution, message);
                    return result;
                }
            },
            None => None,
        };
        let validating_from = if execution.is_some() {
            S::Executed
        } else {
            S::Planned
        };

        let validation = self.validator.validate(&plan, execution.as_ref());
        result.plan = Some(plan);
        result.execution_result = execution;

        match validation {
            Ok(outcome) => {
                self.transition(mission, validating_from, S::Validated, &outcome.reason);
                if outcome.passed {
                    self.transition(mission, S::Validated, S::Done, "approved");
                    result.status = RunStatus::Approved;
                    result.success = true;
                } else {
                    self.transition(mission, S::Validated, S::Rejected, &outcome.reason);
                    result.status = RunStatus::Rejected;
                }
                result.validation_result = Some(outcome);
            }
            Err(e) => {
                let message = e.to_string();
                self.transition(mission, validating_from, S::Error, &message);
                result.fault(Stage::Validation, message);
            }
        }

        result
    }

    /// Quick decision: safety → plan → feasibility check, no execution.
    ///
    /// Uses the feasibility rules directly rather than the configured validator.
    pub fn simulate_mission(&self, mission: &MissionDescription) -> SimulationOutcome {
        use PipelineState as S;

        let safety = safety::check(mission);
        if !safety.ok {
            self.transition(mission, S::Start, S::Aborted, &safety.reason);
            return SimulationOutcome::Aborted {
                reason: safety.reason,
            };
        }
        self.transition(mission, S::Start, S::SafetyChecked, &safety.reason);

        let plan = self.planner.plan(mission);
        self.transition(mission, S::SafetyChecked, S::Planned, self.planner.name());

        let verdict = validator::validate_plan(&plan);
        self.transition(mission, S::Planned, S::Validated, &verdict.reason);
        if !verdict.ok {
            self.transition(mission, S::Validated, S::Rejected, &verdict.reason);
            return SimulationOutcome::Rejected {
                reason: verdict.reason,
            };
        }

        self.transition(mission, S::Validated, S::Done, "approved");
        SimulationOutcome::Approved {
            decision: Action::Proceed,
            plan,
        }
    }

    /// Risk-scored decision from the orbit class alone. No plan is built.
    pub fn simulate_risk(&self, mission: &MissionDescription) -> SimulationOutcome {
        risk::simulate(mission, self.observer.as_ref())
    }

    fn transition(
        &self,
        mission: &MissionDescription,
        from: PipelineState,
        to: PipelineState,
        detail: &str,
    ) {
        self.observer.on_transition(&Transition {
            mission,
            from,
            to,
            detail,
        });
    }
}
