//! Per-request decision log.
//!
//! Every stage receives `&mut CalculationTracer` and appends one
//! [`TraceEntry`] per decision point. Entries are never edited or removed.

use serde::Serialize;
use tracing::debug;

/// Pipeline stage a trace entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceCategory {
    TimeCorrection,
    SolarTerm,
    Pillar,
    Relation,
    Strength,
    Gyeokguk,
    Formation,
    Yongshin,
}

impl TraceCategory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::TimeCorrection => "time_correction",
            Self::SolarTerm => "solar_term",
            Self::Pillar => "pillar",
            Self::Relation => "relation",
            Self::Strength => "strength",
            Self::Gyeokguk => "gyeokguk",
            Self::Formation => "formation",
            Self::Yongshin => "yongshin",
        }
    }
}

/// What another school would have decided at the same point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativeDecision {
    pub school: String,
    pub decision: String,
}

/// One recorded decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceEntry {
    pub step_id: String,
    pub category: TraceCategory,
    pub decision: String,
    pub reasoning: String,
    pub classical_rule: Option<String>,
    pub alternatives: Vec<AlternativeDecision>,
    /// Configuration key that drove the decision, if any.
    pub config_key: Option<String>,
    /// In [0, 1].
    pub confidence: f64,
}

impl TraceEntry {
    /// Entry with full confidence and no reasoning; fill in with the
    /// builder methods.
    pub fn new(
        step_id: impl Into<String>,
        category: TraceCategory,
        decision: impl Into<String>,
    ) -> Self {
        Self {
            step_id: step_id.into(),
            category,
            decision: decision.into(),
            reasoning: String::new(),
            classical_rule: None,
            alternatives: Vec::new(),
            config_key: None,
            confidence: 1.0,
        }
    }

    pub fn reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    pub fn rule(mut self, rule: impl Into<String>) -> Self {
        self.classical_rule = Some(rule.into());
        self
    }

    pub fn alternative(mut self, school: impl Into<String>, decision: impl Into<String>) -> Self {
        self.alternatives.push(AlternativeDecision {
            school: school.into(),
            decision: decision.into(),
        });
        self
    }

    pub fn config_key(mut self, key: impl Into<String>) -> Self {
        self.config_key = Some(key.into());
        self
    }

    /// Clamped to [0, 1]; NaN becomes 0.
    pub fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        self
    }
}

/// Append-only trace owned by one chart computation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CalculationTracer {
    entries: Vec<TraceEntry>,
    #[serde(skip)]
    record_alternatives: bool,
}

impl CalculationTracer {
    pub fn new(record_alternatives: bool) -> Self {
        Self {
            entries: Vec::new(),
            record_alternatives,
        }
    }

    /// Whether alternative-school decisions are kept.
    pub fn records_alternatives(&self) -> bool {
        self.record_alternatives
    }

    /// Append an entry and mirror it as a debug event.
    pub fn record(&mut self, mut entry: TraceEntry) {
        if !self.record_alternatives {
            entry.alternatives.clear();
        }
        debug!(
            step = %entry.step_id,
            category = entry.category.name(),
            decision = %entry.decision,
            confidence = entry.confidence,
            config_key = entry.config_key.as_deref().unwrap_or(""),
            "trace"
        );
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn by_category(&self, category: TraceCategory) -> impl Iterator<Item = &TraceEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn find(&self, step_id: &str) -> Option<&TraceEntry> {
        self.entries.iter().find(|e| e.step_id == step_id)
    }

    pub fn into_entries(self) -> Vec<TraceEntry> {
        self.entries
    }
}
