//! The planner agent: keyword-routed plan templates with a thought stream.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use super::{AgentError, AgentResult, PlanGenerator};
use crate::models::{Phase, Plan, Task};

/// Progress lines emitted while a plan is being generated, in order.
pub const THINKING_STEPS: [&str; 6] = [
    "Analyzing semantic intent...",
    "Retrieving industry templates...",
    "Identifying core phases...",
    "Estimating critical path dependencies...",
    "Optimizing resource allocation...",
    "Finalizing Work Breakdown Structure...",
];

/// Highest accepted stutter probability; every run must still resolve.
pub const MAX_STUTTER: f64 = 0.9;

const SOFTWARE_KEYWORDS: [&str; 7] = ["app", "software", "platform", "website", "tech", "api", "saas"];
const MARKETING_KEYWORDS: [&str; 6] = ["marketing", "campaign", "brand", "launch", "video", "content"];

/// Template bucket a goal is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanCategory {
    /// Software / tech work
    Software,
    /// Marketing / creative work
    Marketing,
    /// Anything else
    Operations,
}

/// Routes a goal to a template bucket by case-insensitive substring match.
///
/// Software keywords are checked before marketing keywords, so a goal that
/// mentions both routes to software.
///
/// ```rust
/// use sun_core::agents::{classify, PlanCategory};
///
/// assert_eq!(classify("launch a mobile app"), PlanCategory::Software);
/// assert_eq!(classify("Brand refresh"), PlanCategory::Marketing);
/// assert_eq!(classify("Office move"), PlanCategory::Operations);
/// ```
pub fn classify(goal: &str) -> PlanCategory {
    let goal = goal.to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|k| goal.contains(k));

    if mentions(&SOFTWARE_KEYWORDS) {
        PlanCategory::Software
    } else if mentions(&MARKETING_KEYWORDS) {
        PlanCategory::Marketing
    } else {
        PlanCategory::Operations
    }
}

impl PlanCategory {
    /// Phase and task template for this bucket.
    pub fn phases(&self) -> Vec<Phase> {
        match self {
            PlanCategory::Software => vec![
                Phase::new(
                    "p1",
                    "Discovery & Architecture",
                    vec![
                        Task::new("t1", "Technical Requirements Doc", "5 days", "Tech Lead"),
                        Task::new("t2", "Database Schema Design", "3 days", "Backend Engineer"),
                        Task::new("t3", "UI/UX Wireframes", "1 week", "Product Designer"),
                    ],
                ),
                Phase::new(
                    "p2",
                    "Development Sprint 1",
                    vec![
                        Task::new("t4", "Authentication System", "4 days", "Backend Engineer"),
                        Task::new("t5", "Frontend Component Library", "1 week", "Frontend Engineer"),
                        Task::new("t6", "API Integration", "3 days", "Full Stack Dev"),
                    ],
                ),
                Phase::new(
                    "p3",
                    "QA & Deployment",
                    vec![
                        Task::new("t7", "Unit Testing & Bug Fixes", "3 days", "QA Specialist"),
                        Task::new("t8", "Production Deployment", "1 day", "DevOps Engineer"),
                    ],
                ),
            ],
            PlanCategory::Marketing => vec![
                Phase::new(
                    "p1",
                    "Strategy & Concept",
                    vec![
                        Task::new("t1", "Market Research & Persona Dev", "1 week", "Strategist"),
                        Task::new("t2", "Campaign Key Messaging", "3 days", "Copywriter"),
                        Task::new("t3", "Moodboard & Visual Direction", "2 days", "Art Director"),
                    ],
                ),
                Phase::new(
                    "p2",
                    "Content Production",
                    vec![
                        Task::new("t4", "Social Media Asset Design", "1 week", "Designer"),
                        Task::new("t5", "Video Scripting & Storyboard", "4 days", "Creative Lead"),
                        Task::new("t6", "Blog & Email Copy", "3 days", "Copywriter"),
                    ],
                ),
                Phase::new(
                    "p3",
                    "Distribution & Analytics",
                    vec![
                        Task::new("t7", "Ad Manager Setup", "2 days", "Growth Marketer"),
                        Task::new("t8", "Launch Day Coordination", "1 day", "Project Manager"),
                    ],
                ),
            ],
            PlanCategory::Operations => vec![
                Phase::new(
                    "p1",
                    "Planning & Initiation",
                    vec![
                        Task::new("t1", "Define Objectives & KPIs", "2 days", "Project Manager"),
                        Task::new("t2", "Stakeholder Kickoff Meeting", "1 day", "Project Manager"),
                        Task::new("t3", "Resource Allocation", "1 day", "Ops Lead"),
                    ],
                ),
                Phase::new(
                    "p2",
                    "Execution Phase",
                    vec![
                        Task::new("t4", "Core Deliverable Draft", "1 week", "Specialist"),
                        Task::new("t5", "Internal Review Cycle", "3 days", "Team Lead"),
                        Task::new("t6", "Revisions & Refinement", "3 days", "Specialist"),
                    ],
                ),
                Phase::new(
                    "p3",
                    "Closure",
                    vec![
                        Task::new("t7", "Final Delivery", "1 day", "Project Manager"),
                        Task::new("t8", "Project Retrospective", "2 hours", "Project Manager"),
                    ],
                ),
            ],
        }
    }
}

/// Builds the plan for a goal without any simulated latency.
pub fn plan_for(goal: &str, deadline: &str) -> Plan {
    Plan {
        goal: goal.to_string(),
        deadline: deadline.to_string(),
        phases: classify(goal).phases(),
    }
}

/// Timer-driven planner mock.
///
/// Every tick emits the next thought; the tick after the last thought
/// resolves the plan. A tick may stutter (emit nothing) to mimic network
/// jitter.
#[derive(Debug, Clone)]
pub struct MockPlanner {
    tick: Duration,
    stutter: f64,
}

impl MockPlanner {
    /// Default pacing: one thought every 800 ms, 10% stutter.
    pub fn new() -> Self {
        Self {
            tick: Duration::from_millis(800),
            stutter: 0.1,
        }
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Probability that a tick is skipped, clamped to `[0, MAX_STUTTER]`.
    pub fn with_stutter(mut self, probability: f64) -> Self {
        self.stutter = probability.clamp(0.0, MAX_STUTTER);
        self
    }

    /// No latency and no stutter.
    pub fn instant() -> Self {
        Self::new().with_tick(Duration::ZERO).with_stutter(0.0)
    }
}

impl Default for MockPlanner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlanGenerator for MockPlanner {
    async fn generate(
        &self,
        goal: &str,
        deadline: &str,
        on_thought: &mut (dyn FnMut(&str) + Send),
    ) -> AgentResult<Plan> {
        if goal.is_empty() || deadline.is_empty() {
            return Err(AgentError::MissingInput);
        }

        let mut emitted = 0;
        loop {
            if self.tick.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(self.tick).await;
            }
            if self.stutter > 0.0 && rand::random::<f64>() < self.stutter {
                continue;
            }
            match THINKING_STEPS.get(emitted) {
                Some(thought) => {
                    on_thought(thought);
                    emitted += 1;
                }
                None => break,
            }
        }

        let plan = plan_for(goal, deadline);
        debug!("Planned '{goal}' with {} phases", plan.phases.len());
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn collect(planner: &MockPlanner, goal: &str, deadline: &str) -> (AgentResult<Plan>, Vec<String>) {
        let mut thoughts = Vec::new();
        let result = planner
            .generate(goal, deadline, &mut |t: &str| thoughts.push(t.to_string()))
            .await;
        (result, thoughts)
    }

    #[test]
    fn test_software_checked_before_marketing() {
        assert_eq!(classify("launch a mobile app"), PlanCategory::Software);
        assert_eq!(classify("Launch a SaaS platform"), PlanCategory::Software);
        assert_eq!(classify("Marketing website"), PlanCategory::Software);
    }

    #[test]
    fn test_marketing_keywords() {
        for goal in ["Q3 campaign", "Brand refresh", "Product LAUNCH", "Explainer video", "Content calendar", "marketing push"] {
            assert_eq!(classify(goal), PlanCategory::Marketing, "{goal}");
        }
    }

    #[test]
    fn test_keywords_match_inside_words() {
        // "happy" contains "app", "biotech" contains "tech"
        assert_eq!(classify("Happy customers"), PlanCategory::Software);
        assert_eq!(classify("Biotech compliance"), PlanCategory::Software);
    }

    #[test]
    fn test_fallback_to_operations() {
        assert_eq!(classify("Office relocation"), PlanCategory::Operations);
        assert_eq!(classify(""), PlanCategory::Operations);
    }

    #[test]
    fn test_templates() {
        let software = PlanCategory::Software.phases();
        assert_eq!(software[0].title, "Discovery & Architecture");
        assert_eq!(software.iter().map(|p| p.tasks.len()).sum::<usize>(), 8);

        let marketing = PlanCategory::Marketing.phases();
        assert_eq!(marketing[0].title, "Strategy & Concept");
        assert_eq!(marketing[2].tasks[1].title, "Launch Day Coordination");

        let operations = PlanCategory::Operations.phases();
        assert_eq!(operations[0].title, "Planning & Initiation");
        assert_eq!(operations[2].tasks[1].duration, "2 hours");
    }

    #[tokio::test]
    async fn test_missing_input_rejected() {
        let planner = MockPlanner::instant();
        let (result, thoughts) = collect(&planner, "", "2025-12-01").await;
        assert_eq!(result, Err(AgentError::MissingInput));
        assert!(thoughts.is_empty());

        let (result, _) = collect(&planner, "Launch a SaaS platform", "").await;
        assert_eq!(result, Err(AgentError::MissingInput));
    }

    #[tokio::test]
    async fn test_generate_streams_thoughts_in_order() {
        let planner = MockPlanner::instant();
        let (result, thoughts) = collect(&planner, "Launch a SaaS platform", "2025-12-01").await;

        let plan = result.unwrap();
        assert_eq!(plan.goal, "Launch a SaaS platform");
        assert_eq!(plan.deadline, "2025-12-01");
        assert_eq!(plan.phases[0].title, "Discovery & Architecture");
        assert_eq!(thoughts, THINKING_STEPS);
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_paces_thoughts_by_tick() {
        let planner = MockPlanner::new().with_stutter(0.0);
        let started = tokio::time::Instant::now();

        let (result, thoughts) = collect(&planner, "Office relocation", "2025-12-01").await;

        assert!(result.is_ok());
        assert_eq!(thoughts.len(), THINKING_STEPS.len());
        // six thoughts plus the resolving tick
        assert_eq!(started.elapsed(), Duration::from_millis(800 * 7));
    }

    #[test]
    fn test_stutter_is_capped() {
        assert_eq!(MockPlanner::new().with_stutter(1.0).stutter, MAX_STUTTER);
        assert_eq!(MockPlanner::new().with_stutter(-0.5).stutter, 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_certain_stutter_still_resolves() {
        let planner = MockPlanner::new().with_stutter(1.0);
        let run = collect(&planner, "Office move", "2030-01-01");

        let (result, thoughts) = tokio::time::timeout(Duration::from_secs(3600), run)
            .await
            .expect("generation should resolve");
        assert_eq!(result.unwrap().phases[0].title, "Planning & Initiation");
        assert_eq!(thoughts, THINKING_STEPS);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stutter_only_delays() {
        let planner = MockPlanner::new().with_stutter(0.5);
        let (result, thoughts) = collect(&planner, "Brand refresh", "2025-12-01").await;

        assert_eq!(result.unwrap().phases[0].title, "Strategy & Concept");
        assert_eq!(thoughts, THINKING_STEPS);
    }
}
