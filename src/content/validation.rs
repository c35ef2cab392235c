//! Range checks for tuning values, run once at startup.

use super::data::{AbilityTuning, PlayerTuning};

/// A tuning value outside its allowed range.
#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Tuning field '{}' is {} (expected {})",
            self.field, self.value, self.expected
        )
    }
}

impl std::error::Error for ValidationError {}

macro_rules! check_non_negative {
    ($errors:expr, $field:expr, $value:expr) => {
        if !($value.is_finite() && $value >= 0.0) {
            $errors.push(ValidationError {
                field: $field.to_string(),
                value: $value,
                expected: "a finite value >= 0",
            });
        }
    };
}

fn validate_ability(errors: &mut Vec<ValidationError>, name: &str, ability: &AbilityTuning) {
    check_non_negative!(errors, format!("{name}.speed"), ability.speed);
    check_non_negative!(errors, format!("{name}.active_time"), ability.active_time);
    check_non_negative!(errors, format!("{name}.impact_time"), ability.impact_time);
    check_non_negative!(errors, format!("{name}.cooldown"), ability.cooldown);
}

/// Validate every tuning value.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &PlayerTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_non_negative!(errors, "max_speed", tuning.max_speed);
    check_non_negative!(errors, "jump_takeoff_speed", tuning.jump_takeoff_speed);
    check_non_negative!(errors, "jump_modifier", tuning.jump_modifier);
    check_non_negative!(errors, "gravity", tuning.gravity);
    check_non_negative!(errors, "facing_deadzone", tuning.facing_deadzone);
    check_non_negative!(errors, "ground_probe_distance", tuning.ground_probe_distance);

    if !(0.0..=1.0).contains(&tuning.jump_deceleration) {
        errors.push(ValidationError {
            field: "jump_deceleration".to_string(),
            value: tuning.jump_deceleration,
            expected: "a value in [0, 1]",
        });
    }

    if tuning.facing_deadzone >= 1.0 {
        errors.push(ValidationError {
            field: "facing_deadzone".to_string(),
            value: tuning.facing_deadzone,
            expected: "a value below 1",
        });
    }

    validate_ability(&mut errors, "dash", &tuning.dash);
    validate_ability(&mut errors, "slam", &tuning.slam);

    errors
}
