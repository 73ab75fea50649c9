//! Treatment method catalog
//!
//! The catalog is injected configuration: the treatment engine and preview
//! derivation take it as a parameter and embed no method names of their
//! own. Changing the deployed catalog requires no engine change.

use serde::{Deserialize, Serialize};

fn default_area_placeholder() -> String {
    "[treatment area]".to_string()
}

/// The enumerated set of treatment methods available to a report
///
/// Loaded from the `[catalog]` section of the configuration file. The
/// `exercise_style` flag drives preview phrasing: exercise-style methods
/// read `"<area> <method>"` while the rest read `"<method> to <area>"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentCatalog {
    /// Sentinel area assigned to a freshly selected method until the user
    /// edits it
    #[serde(default = "default_area_placeholder")]
    pub area_placeholder: String,

    /// Available methods, in the order they are offered to the user
    pub methods: Vec<MethodSpec>,
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSpec {
    /// Method name as shown to the user and stored on records
    pub name: String,

    /// Whether preview phrasing puts the area before the method
    #[serde(default)]
    pub exercise_style: bool,
}

impl TreatmentCatalog {
    /// Returns whether `method` is a known catalog entry
    pub fn contains(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m.name == method)
    }

    /// Classifies `method` for preview phrasing
    ///
    /// Methods absent from the catalog classify as non-exercise style;
    /// absence is never a fault.
    pub fn is_exercise_style(&self, method: &str) -> bool {
        self.methods
            .iter()
            .any(|m| m.name == method && m.exercise_style)
    }

    /// Validates the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog has no methods, a blank method name,
    /// a duplicate method name, or a blank area placeholder.
    pub fn validate(&self) -> Result<(), String> {
        if self.methods.is_empty() {
            return Err("catalog must define at least one method".to_string());
        }
        if self.area_placeholder.trim().is_empty() {
            return Err("catalog area_placeholder cannot be blank".to_string());
        }
        let mut seen = std::collections::HashSet::new();
        for method in &self.methods {
            if method.name.trim().is_empty() {
                return Err("catalog method names cannot be blank".to_string());
            }
            if !seen.insert(method.name.as_str()) {
                return Err(format!("duplicate catalog method '{}'", method.name));
            }
        }
        Ok(())
    }
}

impl Default for TreatmentCatalog {
    /// The stock physiotherapy catalog shipped with `clinedit init`
    fn default() -> Self {
        let method = |name: &str, exercise_style: bool| MethodSpec {
            name: name.to_string(),
            exercise_style,
        };
        Self {
            area_placeholder: default_area_placeholder(),
            methods: vec![
                method("Massage", false),
                method("Mobilisation", false),
                method("Dry needling", false),
                method("Electrotherapy", false),
                method("Taping", false),
                method("Strengthening exercise", true),
                method("Stretching exercise", true),
                method("Stabilisation exercise", true),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_validates() {
        TreatmentCatalog::default().validate().unwrap();
    }

    #[test]
    fn test_contains_and_classification() {
        let catalog = TreatmentCatalog::default();
        assert!(catalog.contains("Massage"));
        assert!(!catalog.is_exercise_style("Massage"));
        assert!(catalog.is_exercise_style("Strengthening exercise"));
    }

    #[test]
    fn test_unknown_method_is_not_exercise_style() {
        let catalog = TreatmentCatalog::default();
        assert!(!catalog.contains("Cupping"));
        assert!(!catalog.is_exercise_style("Cupping"));
    }

    #[test]
    fn test_validate_rejects_empty_methods() {
        let catalog = TreatmentCatalog {
            area_placeholder: "[area]".to_string(),
            methods: vec![],
        };
        let err = catalog.validate().unwrap_err();
        assert!(err.contains("at least one method"));
    }

    #[test]
    fn test_validate_rejects_duplicate_method() {
        let mut catalog = TreatmentCatalog::default();
        catalog.methods.push(MethodSpec {
            name: "Massage".to_string(),
            exercise_style: false,
        });
        let err = catalog.validate().unwrap_err();
        assert!(err.contains("duplicate"));
        assert!(err.contains("Massage"));
    }

    #[test]
    fn test_validate_rejects_blank_placeholder() {
        let catalog = TreatmentCatalog {
            area_placeholder: "   ".to_string(),
            ..TreatmentCatalog::default()
        };
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_catalog_toml_round() {
        let toml_src = r#"
area_placeholder = "[region]"

[[methods]]
name = "Massage"

[[methods]]
name = "Stretching exercise"
exercise_style = true
"#;
        let catalog: TreatmentCatalog = toml::from_str(toml_src).unwrap();
        assert_eq!(catalog.area_placeholder, "[region]");
        assert_eq!(catalog.methods.len(), 2);
        assert!(!catalog.methods[0].exercise_style);
        assert!(catalog.methods[1].exercise_style);
    }
}
