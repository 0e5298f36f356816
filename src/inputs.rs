use serde::{Deserialize, Serialize};

/// The three independently toggled service packages. Each flag gates whole
/// groups of cost line items and whole task sets in the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSelection {
    pub space_planning: bool,
    pub interior_finishes: bool,
    pub furnishing_decor: bool,
}

impl ServiceSelection {
    pub fn all() -> Self {
        Self {
            space_planning: true,
            interior_finishes: true,
            furnishing_decor: true,
        }
    }

    pub fn none() -> Self {
        Self {
            space_planning: false,
            interior_finishes: false,
            furnishing_decor: false,
        }
    }
}

impl Default for ServiceSelection {
    fn default() -> Self {
        Self::all()
    }
}

/// Everything the user controls. Plain data; the engines recompute all
/// derived values from these fields on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInputs {
    /// Floor area in square metres.
    pub area: f64,
    pub adults: u32,
    pub children: u32,
    pub is_renovation: bool,
    pub is_urgent: bool,
    pub services: ServiceSelection,
    /// Kitchen run in linear metres.
    pub kitchen_length: f64,
    /// Wardrobe run in linear metres.
    pub wardrobe_length: f64,
}

impl Default for ProjectInputs {
    fn default() -> Self {
        Self {
            area: 60.0,
            adults: 2,
            children: 0,
            is_renovation: false,
            is_urgent: false,
            services: ServiceSelection::all(),
            kitchen_length: 3.0,
            wardrobe_length: 2.0,
        }
    }
}

impl ProjectInputs {
    /// Copy with every numeric field forced into the engine's safe domain.
    /// Callers are sliders that can transiently emit NaN or negative
    /// intermediate values; those collapse to zero instead of propagating.
    pub fn sanitized(&self) -> Self {
        let mut inputs = self.clone();
        inputs.area = guard_quantity(inputs.area);
        inputs.kitchen_length = guard_quantity(inputs.kitchen_length);
        inputs.wardrobe_length = guard_quantity(inputs.wardrobe_length);
        inputs
    }
}

fn guard_quantity(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_replaces_invalid_numerics() {
        let mut inputs = ProjectInputs::default();
        inputs.area = f64::NAN;
        inputs.kitchen_length = -3.0;
        inputs.wardrobe_length = f64::INFINITY;

        let clean = inputs.sanitized();
        assert_eq!(clean.area, 0.0);
        assert_eq!(clean.kitchen_length, 0.0);
        assert_eq!(clean.wardrobe_length, 0.0);
    }

    #[test]
    fn sanitized_keeps_valid_numerics() {
        let inputs = ProjectInputs::default();
        assert_eq!(inputs.sanitized(), inputs);
    }
}
