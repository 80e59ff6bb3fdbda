use serde::{Deserialize, Serialize};

use super::constants::{
    NEW_REGIME_SLABS, OLD_REGIME_SLABS, STANDARD_DEDUCTION_NEW_REGIME,
    STANDARD_DEDUCTION_OLD_REGIME, TaxSlab,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    New,
    Old,
}

impl Regime {
    pub fn standard_deduction(self) -> f64 {
        match self {
            Regime::New => STANDARD_DEDUCTION_NEW_REGIME,
            Regime::Old => STANDARD_DEDUCTION_OLD_REGIME,
        }
    }

    pub fn slabs(self) -> &'static [TaxSlab] {
        match self {
            Regime::New => &NEW_REGIME_SLABS,
            Regime::Old => &OLD_REGIME_SLABS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedInput {
    pub income_from_salary: f64,
    pub income_from_rent: f64,
    pub hra_component: f64,
    pub annual_rent: f64,
    pub section_80c: f64,
    pub regime: Regime,
    pub is_metro: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionBreakdown {
    pub standard_deduction: f64,
    pub hra_exemption: f64,
    #[serde(rename = "section80C")]
    pub section_80c: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxResult {
    pub regime: Regime,
    pub gross_income: f64,
    pub total_deductions: f64,
    pub taxable_income: f64,
    pub income_tax: f64,
    pub cess: f64,
    pub total_tax_liability: f64,
    pub breakdown: DeductionBreakdown,
}
