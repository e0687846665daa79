//! Deep merge algorithm for YAML configuration values.
//!
//! vercheck layers a user-global config, the project manifest and a local
//! override file. This module implements the merge semantics.
//!
//! # Merge Rules
//!
//! - Objects are merged recursively
//! - Arrays are replaced entirely (not merged)
//! - Null values in overlay delete the corresponding key from base
//! - Scalars in overlay replace scalars in base

use serde_yaml::Value;

/// Deep merge two YAML values.
///
/// Later values override earlier values at the point of conflict.
/// Objects are merged recursively. Arrays are replaced entirely.
/// Null values in overlay delete the corresponding key from base.
///
/// # Arguments
///
/// * `base` - Lower-priority layer, e.g. the user-global config
/// * `overlay` - Higher-priority layer, e.g. `vercheck.local.yml`
///
/// # Returns
///
/// A new Value; neither input is modified
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    // `~` drops an inherited requirement or module
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        // Overlay is not a mapping, or base is not a mapping: overlay wins
        (_, overlay) => overlay.clone(),
    }
}

/// Merge multiple configs in order (later overrides earlier).
///
/// # Arguments
///
/// * `configs` - Layers in discovery order: global, project, local
///
/// # Returns
///
/// The merged Value, or an empty mapping when `configs` is empty
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn requirement_override_keeps_other_entries() {
        let base = yaml(
            r#"
requirements:
  git: "2.0"
  python3: "3.8"
"#,
        );
        let overlay = yaml(
            r#"
requirements:
  python3: "3.11"
"#,
        );

        let result = deep_merge(&base, &overlay);

        assert_eq!(result["requirements"]["python3"], "3.11");
        assert_eq!(result["requirements"]["git"], "2.0");
    }

    #[test]
    fn arrays_are_replaced_not_merged() {
        let base = yaml("resolvers: [registry, path]");
        let overlay = yaml("resolvers: [path]");

        let result = deep_merge(&base, &overlay);
        let resolvers = result["resolvers"].as_sequence().unwrap();

        assert_eq!(resolvers.len(), 1);
        assert_eq!(resolvers[0], "path");
    }

    #[test]
    fn null_removes_inherited_value() {
        let base = yaml(
            r#"
requirements:
  git: "2.0"
  node: "18"
"#,
        );
        let overlay = yaml(
            r#"
requirements:
  node: ~
"#,
        );

        let result = deep_merge(&base, &overlay);

        assert_eq!(result["requirements"]["git"], "2.0");
        assert!(result["requirements"].get("node").is_none());
    }

    #[test]
    fn empty_module_entry_is_not_a_delete() {
        let base = yaml(
            r#"
modules:
  legacy:
    version: "1.0"
"#,
        );
        let overlay = yaml(
            r#"
modules:
  legacy: {}
"#,
        );

        let result = deep_merge(&base, &overlay);
        assert_eq!(result["modules"]["legacy"]["version"], "1.0");
    }

    #[test]
    fn merge_configs_applies_in_order() {
        let configs = vec![
            yaml("requirements: { git: \"1.0\" }"),
            yaml("requirements: { git: \"2.0\" }"),
            yaml("requirements: { git: \"3.0\" }"),
        ];

        let result = merge_configs(&configs);
        assert_eq!(result["requirements"]["git"], "3.0");
    }

    #[test]
    fn merge_configs_empty_is_empty_mapping() {
        let result = merge_configs(&[]);
        assert!(result.as_mapping().unwrap().is_empty());
    }
}
