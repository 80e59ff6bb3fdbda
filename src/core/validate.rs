use serde_json::{Map, Value};

use super::constants::SECTION_80C_LIMIT;
use super::types::{NormalizedInput, Regime};

#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

pub fn validate(raw: &Value) -> ValidationOutcome {
    let Some(fields) = raw.as_object() else {
        return ValidationOutcome {
            is_valid: false,
            errors: vec!["Invalid input: must be an object".to_string()],
        };
    };

    let mut errors = Vec::new();

    if matches!(fields.get("incomeFromSalary"), None | Some(Value::Null)) {
        errors.push("incomeFromSalary is mandatory".to_string());
    } else {
        check_amount(fields, "incomeFromSalary", &mut errors);
    }

    for field in ["incomeFromRent", "hraComponent", "annualRent"] {
        check_amount(fields, field, &mut errors);
    }

    if let Some(value) = present(fields, "section80C") {
        match finite_number(value) {
            None => errors.push("section80C must be a valid number".to_string()),
            Some(amount) if amount < 0.0 => {
                errors.push("section80C cannot be negative".to_string());
            }
            Some(amount) if amount > SECTION_80C_LIMIT => {
                errors.push(format!("section80C cannot exceed {SECTION_80C_LIMIT}"));
            }
            Some(_) => {}
        }
    }

    if let Some(value) = present(fields, "regime") {
        // Case-sensitive: validation runs before the normalizer lower-cases
        // the regime token.
        if !matches!(value.as_str(), Some("new") | Some("old")) {
            errors.push("regime must be either \"new\" or \"old\"".to_string());
        }
    }

    if let Some(value) = present(fields, "isMetro") {
        if !value.is_boolean() {
            errors.push("isMetro must be a boolean (true or false)".to_string());
        }
    }

    ValidationOutcome {
        is_valid: errors.is_empty(),
        errors,
    }
}

// Precondition: `raw` passed `validate`. Total for any value, but the
// defaults below are only meaningful for validated input.
pub fn normalize(raw: &Value) -> NormalizedInput {
    let empty = Map::new();
    let fields = raw.as_object().unwrap_or(&empty);

    NormalizedInput {
        income_from_salary: amount_or_zero(fields, "incomeFromSalary"),
        income_from_rent: amount_or_zero(fields, "incomeFromRent"),
        hra_component: amount_or_zero(fields, "hraComponent"),
        annual_rent: amount_or_zero(fields, "annualRent"),
        section_80c: amount_or_zero(fields, "section80C").min(SECTION_80C_LIMIT),
        regime: regime_or_default(fields),
        is_metro: fields.get("isMetro").and_then(Value::as_bool) == Some(true),
    }
}

pub fn validate_and_normalize(raw: &Value) -> Result<NormalizedInput, Vec<String>> {
    let outcome = validate(raw);
    if outcome.is_valid {
        Ok(normalize(raw))
    } else {
        Err(outcome.errors)
    }
}

fn present<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|value| !value.is_null())
}

fn finite_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|number| number.is_finite())
}

fn check_amount(fields: &Map<String, Value>, field: &str, errors: &mut Vec<String>) {
    let Some(value) = present(fields, field) else {
        return;
    };
    match finite_number(value) {
        None => errors.push(format!("{field} must be a valid number")),
        Some(amount) if amount < 0.0 => errors.push(format!("{field} cannot be negative")),
        Some(_) => {}
    }
}

fn amount_or_zero(fields: &Map<String, Value>, key: &str) -> f64 {
    present(fields, key).and_then(finite_number).unwrap_or(0.0)
}

fn regime_or_default(fields: &Map<String, Value>) -> Regime {
    match fields.get("regime").and_then(Value::as_str) {
        Some(token) if token.to_lowercase() == "old" => Regime::Old,
        _ => Regime::New,
    }
}
