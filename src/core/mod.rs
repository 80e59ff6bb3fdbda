mod constants;
mod engine;
mod types;
mod validate;

pub use constants::{
    CESS_PERCENT, NEW_REGIME_SLABS, OLD_REGIME_SLABS, SECTION_80C_LIMIT,
    STANDARD_DEDUCTION_NEW_REGIME, STANDARD_DEDUCTION_OLD_REGIME, TaxSlab,
};
pub use engine::{compute_hra_exemption, compute_progressive_tax, compute_tax};
pub use types::{DeductionBreakdown, NormalizedInput, Regime, TaxResult};
pub use validate::{ValidationOutcome, normalize, validate, validate_and_normalize};
