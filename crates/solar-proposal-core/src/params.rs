use serde::{Deserialize, Serialize};

/// Rounding policy for suggested unit counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundingMode {
    #[default]
    Ceil,
    Floor,
    Round,
}

/// How interest accrues during the grace period (carência).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraceInterestMode {
    #[default]
    Compound,
    Simple,
}

/// Whether kit and ground-structure costs are doubled before margin.
///
/// Duplication models a two-unit installation billed under one proposal:
/// the kit and the ground mount exist twice, the roof mount only once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuplicationRule {
    #[default]
    DuplicateKitAndGroundStructure,
    NoDuplication,
}

/// Global tunable constants for the proposal engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalParams {
    /// DC/AC ratio used to back-derive string-inverter power from the array
    /// when no explicit inverter power is given.
    pub default_oversizing_factor: f64,
    /// Modules served per micro-inverter when suggesting a unit count.
    pub micro_modules_per_unit: f64,
    /// Nominal AC power of one micro-inverter unit, in kW.
    pub micro_unit_power_kw: f64,
    pub micro_rounding: RoundingMode,
    pub grace_interest: GraceInterestMode,
    pub duplication_rule: DuplicationRule,
}

impl Default for ProposalParams {
    fn default() -> Self {
        Self {
            default_oversizing_factor: 1.25,
            micro_modules_per_unit: 4.0,
            micro_unit_power_kw: 2.0,
            micro_rounding: RoundingMode::Ceil,
            grace_interest: GraceInterestMode::Compound,
            duplication_rule: DuplicationRule::DuplicateKitAndGroundStructure,
        }
    }
}

/// Partial override of [`ProposalParams`], shallow-merged over the defaults
/// at `calculate_proposal` entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalParamsOverride {
    pub default_oversizing_factor: Option<f64>,
    pub micro_modules_per_unit: Option<f64>,
    pub micro_unit_power_kw: Option<f64>,
    pub micro_rounding: Option<RoundingMode>,
    pub grace_interest: Option<GraceInterestMode>,
    pub duplication_rule: Option<DuplicationRule>,
}

impl ProposalParamsOverride {
    /// Merge this override over `base`, field by field.
    pub fn apply(&self, base: &ProposalParams) -> ProposalParams {
        ProposalParams {
            default_oversizing_factor: self
                .default_oversizing_factor
                .unwrap_or(base.default_oversizing_factor),
            micro_modules_per_unit: self
                .micro_modules_per_unit
                .unwrap_or(base.micro_modules_per_unit),
            micro_unit_power_kw: self.micro_unit_power_kw.unwrap_or(base.micro_unit_power_kw),
            micro_rounding: self.micro_rounding.unwrap_or(base.micro_rounding),
            grace_interest: self.grace_interest.unwrap_or(base.grace_interest),
            duplication_rule: self.duplication_rule.unwrap_or(base.duplication_rule),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_constants() {
        let p = ProposalParams::default();
        assert_eq!(p.default_oversizing_factor, 1.25);
        assert_eq!(p.micro_modules_per_unit, 4.0);
        assert_eq!(p.micro_unit_power_kw, 2.0);
        assert_eq!(p.micro_rounding, RoundingMode::Ceil);
        assert_eq!(p.grace_interest, GraceInterestMode::Compound);
        assert_eq!(
            p.duplication_rule,
            DuplicationRule::DuplicateKitAndGroundStructure
        );
    }

    #[test]
    fn test_override_merge_is_shallow() {
        let over = ProposalParamsOverride {
            micro_modules_per_unit: Some(3.0),
            duplication_rule: Some(DuplicationRule::NoDuplication),
            ..Default::default()
        };
        let merged = over.apply(&ProposalParams::default());
        assert_eq!(merged.micro_modules_per_unit, 3.0);
        assert_eq!(merged.duplication_rule, DuplicationRule::NoDuplication);
        // untouched fields keep their defaults
        assert_eq!(merged.default_oversizing_factor, 1.25);
        assert_eq!(merged.grace_interest, GraceInterestMode::Compound);
    }

    #[test]
    fn test_override_deserializes_from_empty_object() {
        let over: ProposalParamsOverride = serde_json::from_str("{}").unwrap();
        assert_eq!(over, ProposalParamsOverride::default());
    }
}
