use super::constants::{CESS_PERCENT, SECTION_80C_LIMIT, TaxSlab};
use super::types::{DeductionBreakdown, NormalizedInput, Regime, TaxResult};

// Exemption is the minimum of: the HRA component itself, 50% (metro) or 40%
// (non-metro) of salary, and rent paid beyond 10% of salary. Callers pass
// salary net of the HRA component as `salary_excluding_hra`.
pub fn compute_hra_exemption(
    salary_excluding_hra: f64,
    hra_component: f64,
    annual_rent: f64,
    is_metro: bool,
) -> f64 {
    if hra_component == 0.0 || annual_rent == 0.0 {
        return 0.0;
    }

    let salary_share = if is_metro { 0.5 } else { 0.4 };
    let percentage_of_salary = salary_excluding_hra * salary_share;
    let rent_minus_tenth = (annual_rent - salary_excluding_hra * 0.1).max(0.0);

    hra_component.min(percentage_of_salary).min(rent_minus_tenth)
}

pub fn compute_progressive_tax(taxable_income: f64, slabs: &[TaxSlab]) -> f64 {
    if taxable_income <= 0.0 {
        return 0.0;
    }

    let mut tax = 0.0;
    let mut remaining = taxable_income;
    for slab in slabs {
        if remaining <= 0.0 {
            break;
        }
        let slab_income = remaining.min(slab.upper_bound - slab.lower_bound);
        tax += slab_income * (slab.rate_percent / 100.0);
        remaining -= slab_income;
    }

    tax
}

pub fn compute_tax(input: &NormalizedInput) -> TaxResult {
    let gross_income = input.income_from_salary + input.income_from_rent;
    let standard_deduction = input.regime.standard_deduction();

    let (hra_exemption, section_80c_applied) = match input.regime {
        Regime::Old => (
            compute_hra_exemption(
                input.income_from_salary - input.hra_component,
                input.hra_component,
                input.annual_rent,
                input.is_metro,
            ),
            input.section_80c.min(SECTION_80C_LIMIT),
        ),
        // HRA and 80C are statutorily inapplicable under the new regime.
        Regime::New => (0.0, 0.0),
    };

    let total_deductions = standard_deduction + hra_exemption + section_80c_applied;
    let taxable_income = (gross_income - total_deductions).max(0.0);
    let income_tax = compute_progressive_tax(taxable_income, input.regime.slabs());
    let cess = income_tax * (CESS_PERCENT / 100.0);
    let total_tax_liability = income_tax + cess;

    TaxResult {
        regime: input.regime,
        gross_income,
        total_deductions,
        taxable_income,
        income_tax: round2(income_tax),
        cess: round2(cess),
        total_tax_liability: round2(total_tax_liability),
        breakdown: DeductionBreakdown {
            standard_deduction,
            hra_exemption,
            section_80c: section_80c_applied,
        },
    }
}

fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
