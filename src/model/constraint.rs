//! Pairing constraints and their evaluation.

use std::fmt;
use std::str::FromStr;

use super::Participant;
use crate::error::SantaError;

/// How two participants' lists under a relationship tag are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Comparator {
    /// `dst` appears in `src`'s list.
    #[cfg_attr(feature = "serde", serde(rename = "one-way contains"))]
    OneWayContains,
    /// `dst` appears in `src`'s list and `src` appears in `dst`'s list.
    #[cfg_attr(feature = "serde", serde(rename = "two-way contains"))]
    TwoWayContains,
    /// `dst` appears in `src`'s list or `src` appears in `dst`'s list.
    #[cfg_attr(feature = "serde", serde(rename = "either contains"))]
    EitherContains,
    /// Both lists are non-empty and equal element for element.
    #[cfg_attr(feature = "serde", serde(rename = "equality"))]
    Equality,
}

impl Comparator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::OneWayContains => "one-way contains",
            Comparator::TwoWayContains => "two-way contains",
            Comparator::EitherContains => "either contains",
            Comparator::Equality => "equality",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Comparator {
    type Err = SantaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one-way contains" => Ok(Comparator::OneWayContains),
            "two-way contains" => Ok(Comparator::TwoWayContains),
            "either contains" => Ok(Comparator::EitherContains),
            "equality" => Ok(Comparator::Equality),
            other => Err(SantaError::InvalidConfig(format!(
                "unknown comparator '{other}'"
            ))),
        }
    }
}

/// Severity of a constraint that fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Limit {
    /// The pairing is forbidden.
    #[cfg_attr(feature = "serde", serde(rename = "exclude"))]
    Exclude,
    /// Adds [`Limit::LOW_PENALTY`] to the pairing weight.
    #[cfg_attr(feature = "serde", serde(rename = "low-probability"))]
    LowProbability,
    /// Adds [`Limit::MEDIUM_PENALTY`] to the pairing weight.
    #[cfg_attr(feature = "serde", serde(rename = "medium-probability"))]
    MediumProbability,
}

impl Limit {
    pub const LOW_PENALTY: u32 = 4;
    pub const MEDIUM_PENALTY: u32 = 2;

    /// Weight added by this limit, or `None` when the pairing is excluded.
    pub fn penalty(&self) -> Option<u32> {
        match self {
            Limit::Exclude => None,
            Limit::LowProbability => Some(Self::LOW_PENALTY),
            Limit::MediumProbability => Some(Self::MEDIUM_PENALTY),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Limit::Exclude => "exclude",
            Limit::LowProbability => "low-probability",
            Limit::MediumProbability => "medium-probability",
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Limit {
    type Err = SantaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exclude" => Ok(Limit::Exclude),
            "low-probability" => Ok(Limit::LowProbability),
            "medium-probability" => Ok(Limit::MediumProbability),
            other => Err(SantaError::InvalidConfig(format!("unknown limit '{other}'"))),
        }
    }
}

/// A declarative rule applied to every ordered pair of participants.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    /// Relationship tag whose lists are compared.
    pub relationship_key: String,
    pub comparator: Comparator,
    pub limit: Limit,
}

impl Constraint {
    pub fn new(relationship_key: impl Into<String>, comparator: Comparator, limit: Limit) -> Self {
        Self {
            relationship_key: relationship_key.into(),
            comparator,
            limit,
        }
    }

    /// Returns true if this constraint fires for the pairing `src -> dst`.
    ///
    /// Never fires when `src` has nothing stored under the key. Direction
    /// matters for every comparator except [`Comparator::Equality`].
    pub fn meets(&self, src: &Participant, dst: &Participant) -> bool {
        let src_list = src.related(&self.relationship_key);
        if src_list.is_empty() {
            return false;
        }
        let dst_list = dst.related(&self.relationship_key);

        let forward = || src_list.contains(&dst.name);
        let backward = || dst_list.contains(&src.name);

        match self.comparator {
            Comparator::OneWayContains => forward(),
            Comparator::TwoWayContains => forward() && backward(),
            Comparator::EitherContains => forward() || backward(),
            Comparator::Equality => !dst_list.is_empty() && src_list == dst_list,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn names() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d"]), 0..4)
            .prop_map(|v| v.into_iter().map(String::from).collect())
    }

    fn comparator() -> impl Strategy<Value = Comparator> {
        prop::sample::select(vec![
            Comparator::OneWayContains,
            Comparator::TwoWayContains,
            Comparator::EitherContains,
            Comparator::Equality,
        ])
    }

    proptest! {
        /// Property: meets is a pure function of its inputs
        #[test]
        fn test_meets_is_deterministic(src in names(), dst in names(), c in comparator()) {
            let a = Participant::new("a", "a@example.com").with_relationship("k", src);
            let b = Participant::new("b", "b@example.com").with_relationship("k", dst);
            let constraint = Constraint::new("k", c, Limit::LowProbability);

            let first = constraint.meets(&a, &b);
            prop_assert_eq!(first, constraint.meets(&a, &b));
        }

        /// Property: two-way implies one-way implies either
        #[test]
        fn test_contains_comparators_nest(src in names(), dst in names()) {
            let a = Participant::new("a", "a@example.com").with_relationship("k", src);
            let b = Participant::new("b", "b@example.com").with_relationship("k", dst);
            let two = Constraint::new("k", Comparator::TwoWayContains, Limit::Exclude).meets(&a, &b);
            let one = Constraint::new("k", Comparator::OneWayContains, Limit::Exclude).meets(&a, &b);
            let either = Constraint::new("k", Comparator::EitherContains, Limit::Exclude).meets(&a, &b);

            prop_assert!(!two || one);
            prop_assert!(!one || either);
        }
    }
}
