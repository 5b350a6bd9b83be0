//! Split result model

use serde::{Deserialize, Serialize};

use super::household::Member;
use super::money::Money;

/// An amount divided between the two members
///
/// `member1 + member2 == total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SplitResult {
    pub member1: Money,
    pub member2: Money,
    pub total: Money,
    pub member1_pct: f64,
    pub member2_pct: f64,
}

impl SplitResult {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn share_of(&self, member: Member) -> Money {
        match member {
            Member::Member1 => self.member1,
            Member::Member2 => self.member2,
        }
    }

    /// Whether both shares add back up to the total
    pub fn is_closed(&self) -> bool {
        self.member1 + self.member2 == self.total
    }
}

/// Running per-member total built from several splits
///
/// Subtotals only ever grow by whole splits, so the closure of each
/// split carries over to the sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MemberTotals {
    pub member1: Money,
    pub member2: Money,
    pub total: Money,
}

impl MemberTotals {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn add_split(&mut self, split: &SplitResult) {
        self.member1 += split.member1;
        self.member2 += split.member2;
        self.total += split.total;
    }

    pub fn share_of(&self, member: Member) -> Money {
        match member {
            Member::Member1 => self.member1,
            Member::Member2 => self.member2,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.member1 + self.member2 == self.total
    }
}

impl From<SplitResult> for MemberTotals {
    fn from(split: SplitResult) -> Self {
        Self {
            member1: split.member1,
            member2: split.member2,
            total: split.total,
        }
    }
}

impl std::ops::Add for MemberTotals {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            member1: self.member1 + other.member1,
            member2: self.member2 + other.member2,
            total: self.total + other.total,
        }
    }
}

impl std::iter::Sum<SplitResult> for MemberTotals {
    fn sum<I: Iterator<Item = SplitResult>>(iter: I) -> Self {
        iter.fold(MemberTotals::zero(), |mut acc, split| {
            acc.add_split(&split);
            acc
        })
    }
}
