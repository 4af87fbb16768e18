//! The ordered rule chain applied to each ownership period
//!
//! Every rule looks at one period in isolation (plus its immediate
//! predecessor where noted) and returns a verdict. Rules run in declaration
//! order and the first verdict other than inconclusive decides the period,
//! so the order of [`RuleChain::standard`] is part of its behavior.

use crate::dates::{after, before};
use chrono::Datelike;
use provscreen_domain::{is_european, PeriodRef, Place, Transfer, Verdict, ERA_END, ERA_START};
use provscreen_geo::CountryResolver;
use std::fmt;
use tracing::trace;

/// Verdict of a single rule with its justification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Verdict reached
    pub verdict: Verdict,

    /// Justification; empty for inconclusive outcomes
    pub message: String,
}

impl RuleOutcome {
    /// An outcome with a justification
    pub fn new(verdict: Verdict, message: impl Into<String>) -> Self {
        Self {
            verdict,
            message: message.into(),
        }
    }

    /// The rule could not determine anything
    pub fn inconclusive() -> Self {
        Self::new(Verdict::Inconclusive, "")
    }
}

/// What the rules may consult beyond the period itself
pub struct RuleContext<'a> {
    /// Places known to the record
    pub places: &'a [Place],

    /// Country resolution for geography rules
    pub geo: &'a dyn CountryResolver,
}

impl<'a> RuleContext<'a> {
    /// Create a context for one record
    pub fn new(places: &'a [Place], geo: &'a dyn CountryResolver) -> Self {
        Self { places, geo }
    }

    fn country_of(&self, period: PeriodRef<'_>) -> Option<String> {
        self.geo.country_of(&period, self.places)
    }
}

/// Signature shared by every rule
pub type RuleFn = fn(PeriodRef<'_>, &RuleContext<'_>) -> RuleOutcome;

/// Names of the standard rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    /// First recorded period begins after the era
    NoInfo,
    /// Period ended before the era
    FirstBeforePeriod,
    /// Present-day holder reached
    FinalTransfer,
    /// One owner held the work across the whole era
    OwnedThroughout,
    /// Direct transfer after the era
    SafelyAfterNaziEra,
    /// Terminal period without dates
    NoDates,
    /// Known transfer touching Europe during the era
    EuropeanTransfer,
    /// Gap whose acquisition window spans the era
    GapInOwnership,
    /// Gap opening during the era
    GapDuringNaziEra,
    /// Gap with first certain date after the era start
    EarliestDefiniteTooLate,
    /// Gap with no certain start and a late possible end
    FirstKnownTooLate,
    /// Acquisition uncertainty straddles the era start
    AcqEncompasesNazi,
}

impl RuleName {
    /// Identifier used in trails and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::NoInfo => "no_info",
            RuleName::FirstBeforePeriod => "first_before_period",
            RuleName::FinalTransfer => "final_transfer",
            RuleName::OwnedThroughout => "owned_throughout",
            RuleName::SafelyAfterNaziEra => "safely_after_nazi_era",
            RuleName::NoDates => "no_dates",
            RuleName::EuropeanTransfer => "european_transfer",
            RuleName::GapInOwnership => "gap_in_ownership",
            RuleName::GapDuringNaziEra => "gap_during_nazi_era",
            RuleName::EarliestDefiniteTooLate => "earliest_definite_too_late",
            RuleName::FirstKnownTooLate => "first_known_too_late",
            RuleName::AcqEncompasesNazi => "acq_encompases_nazi",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named predicate over one period
#[derive(Clone, Copy)]
pub struct Rule {
    /// Rule identifier
    pub name: RuleName,

    /// The predicate
    pub check: RuleFn,
}

impl Rule {
    /// Pair a name with a predicate
    pub const fn new(name: RuleName, check: RuleFn) -> Self {
        Self { name, check }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Rule").field(&self.name).finish()
    }
}

/// The twelve standard rules, in evaluation order
pub const STANDARD_RULES: [Rule; 12] = [
    Rule::new(RuleName::NoInfo, no_info),
    Rule::new(RuleName::FirstBeforePeriod, first_before_period),
    Rule::new(RuleName::FinalTransfer, final_transfer),
    Rule::new(RuleName::OwnedThroughout, owned_throughout),
    Rule::new(RuleName::SafelyAfterNaziEra, safely_after_nazi_era),
    Rule::new(RuleName::NoDates, no_dates),
    Rule::new(RuleName::EuropeanTransfer, european_transfer),
    Rule::new(RuleName::GapInOwnership, gap_in_ownership),
    Rule::new(RuleName::GapDuringNaziEra, gap_during_nazi_era),
    Rule::new(RuleName::EarliestDefiniteTooLate, earliest_definite_too_late),
    Rule::new(RuleName::FirstKnownTooLate, first_known_too_late),
    Rule::new(RuleName::AcqEncompasesNazi, acq_encompases_nazi),
];

/// Result of running the chain over one period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainOutcome {
    /// The deciding outcome, or the last inconclusive one
    pub outcome: RuleOutcome,

    /// The rule that decided, if any did
    pub rule: Option<RuleName>,
}

/// An ordered list of rules
#[derive(Debug, Clone)]
pub struct RuleChain {
    rules: Vec<Rule>,
}

impl Default for RuleChain {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleChain {
    /// The standard chain
    pub fn standard() -> Self {
        Self::from_rules(STANDARD_RULES.to_vec())
    }

    /// A chain with a custom rule order
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluate one period
    ///
    /// Stops at the first rule whose verdict is not inconclusive. When no
    /// rule decides, the last rule's inconclusive outcome is returned.
    pub fn evaluate(&self, period: PeriodRef<'_>, ctx: &RuleContext<'_>) -> ChainOutcome {
        let mut last = RuleOutcome::inconclusive();

        for rule in &self.rules {
            let outcome = (rule.check)(period, ctx);
            if outcome.verdict != Verdict::Inconclusive {
                trace!(rule = %rule.name, verdict = %outcome.verdict, party = %period.party, "rule decided period");
                return ChainOutcome {
                    outcome,
                    rule: Some(rule.name),
                };
            }
            last = outcome;
        }

        ChainOutcome {
            outcome: last,
            rule: None,
        }
    }
}

fn no_info(period: PeriodRef<'_>, _ctx: &RuleContext<'_>) -> RuleOutcome {
    if period.is_first() && after(period.earliest_possible, ERA_END) {
        RuleOutcome::new(
            Verdict::Problematic,
            format!(
                "This provenance's first recorded period begins after {}, so it must be flagged as potentially problematic.",
                ERA_END.year()
            ),
        )
    } else {
        RuleOutcome::inconclusive()
    }
}

fn first_before_period(period: PeriodRef<'_>, _ctx: &RuleContext<'_>) -> RuleOutcome {
    if before(period.latest_possible, ERA_START) {
        RuleOutcome::new(Verdict::Skip, "This period was before the nazi era")
    } else {
        RuleOutcome::inconclusive()
    }
}

fn final_transfer(period: PeriodRef<'_>, _ctx: &RuleContext<'_>) -> RuleOutcome {
    if period.ongoing {
        RuleOutcome::new(Verdict::Safe, "All periods up to the present day appear to be safe")
    } else {
        RuleOutcome::inconclusive()
    }
}

fn owned_throughout(period: PeriodRef<'_>, _ctx: &RuleContext<'_>) -> RuleOutcome {
    if before(period.earliest_definite, ERA_START) && after(period.latest_definite, ERA_END) {
        RuleOutcome::new(
            Verdict::Safe,
            "This work was owned throughout the nazi period by a single owner.",
        )
    } else {
        RuleOutcome::inconclusive()
    }
}

fn safely_after_nazi_era(period: PeriodRef<'_>, _ctx: &RuleContext<'_>) -> RuleOutcome {
    if period.transfer.is_direct() && after(period.earliest_possible, ERA_END) {
        RuleOutcome::new(Verdict::Safe, "All periods before the end of the nazi era are safe.")
    } else {
        RuleOutcome::inconclusive()
    }
}

// Only the missing earliest-possible date is checked here.
fn no_dates(period: PeriodRef<'_>, _ctx: &RuleContext<'_>) -> RuleOutcome {
    if period.is_terminal() && period.earliest_possible.is_none() {
        RuleOutcome::new(Verdict::Problematic, "This provenance has no recorded dates.")
    } else {
        RuleOutcome::inconclusive()
    }
}

fn european_transfer(period: PeriodRef<'_>, ctx: &RuleContext<'_>) -> RuleOutcome {
    if !period.transfer.is_known() {
        return RuleOutcome::inconclusive();
    }

    let overlaps_era =
        before(period.earliest_possible, ERA_END) && after(period.latest_possible, ERA_START);
    if !overlaps_era {
        return RuleOutcome::inconclusive();
    }

    let european = |p: PeriodRef<'_>| ctx.country_of(p).is_some_and(|c| is_european(&c));
    if european(period) || period.previous().is_some_and(european) {
        RuleOutcome::new(
            Verdict::Problematic,
            "This provenance has a european transfer during the nazi era",
        )
    } else {
        RuleOutcome::inconclusive()
    }
}

fn gap_in_ownership(period: PeriodRef<'_>, _ctx: &RuleContext<'_>) -> RuleOutcome {
    if period.transfer == Transfer::Gap
        && before(period.earliest_possible, ERA_START)
        && after(period.earliest_definite, ERA_END)
    {
        RuleOutcome::new(
            Verdict::Problematic,
            "This provenance has an owner whose acquisition was during the nazi era.",
        )
    } else {
        RuleOutcome::inconclusive()
    }
}

fn gap_during_nazi_era(period: PeriodRef<'_>, _ctx: &RuleContext<'_>) -> RuleOutcome {
    // No predecessor reads as a predecessor without a latest definite date.
    let predecessor_open = period
        .previous()
        .and_then(|p| p.latest_definite)
        .is_none_or(|d| d < ERA_END);

    if period.transfer == Transfer::Gap
        && after(period.earliest_possible, ERA_START)
        && predecessor_open
    {
        RuleOutcome::new(
            Verdict::Problematic,
            "This provenance has an owner whose acquisition was during the nazi era.",
        )
    } else {
        RuleOutcome::inconclusive()
    }
}

fn earliest_definite_too_late(period: PeriodRef<'_>, _ctx: &RuleContext<'_>) -> RuleOutcome {
    if after(period.earliest_definite, ERA_START) && !period.transfer.is_direct() {
        RuleOutcome::new(
            Verdict::Problematic,
            format!(
                "There is a gap, and the first certain date is after {}",
                ERA_START.year()
            ),
        )
    } else {
        RuleOutcome::inconclusive()
    }
}

fn first_known_too_late(period: PeriodRef<'_>, _ctx: &RuleContext<'_>) -> RuleOutcome {
    if period.earliest_definite.is_none()
        && !period.transfer.is_direct()
        && after(period.latest_possible, ERA_START)
    {
        RuleOutcome::new(
            Verdict::Problematic,
            format!(
                "There is no earliest date, and the first known date is after {}",
                ERA_START.year()
            ),
        )
    } else {
        RuleOutcome::inconclusive()
    }
}

fn acq_encompases_nazi(period: PeriodRef<'_>, _ctx: &RuleContext<'_>) -> RuleOutcome {
    if !period.transfer.is_direct()
        && before(period.earliest_possible, ERA_START)
        && after(period.earliest_definite, ERA_START)
    {
        RuleOutcome::new(
            Verdict::Problematic,
            format!("An acquisition's uncertainty overlaps {}", ERA_START.year()),
        )
    } else {
        RuleOutcome::inconclusive()
    }
}
