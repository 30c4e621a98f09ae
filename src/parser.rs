use crate::ir::{FeatureModel, FlatFeature};
use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Parsed layout input. `model` is present when the input was a full feature
/// model document rather than an already-flat node list.
#[derive(Debug)]
pub struct ParsedInput {
    pub flat: Vec<FlatFeature>,
    pub model: Option<FeatureModel>,
}

/// Detect the input shape and parse it: a JSON array is a flat
/// `[{id, name, parentId}]` list, an object with a `"root"` key is a feature
/// model document whose tree gets flattened for layout.
pub fn parse_input(input: &str) -> Result<ParsedInput> {
    let value: Value = serde_json::from_str(input).context("input is not valid JSON")?;
    match &value {
        Value::Array(_) => {
            let flat: Vec<FlatFeature> = serde_json::from_value(value)
                .context("expected an array of {id, name, parentId} records")?;
            Ok(ParsedInput { flat, model: None })
        }
        Value::Object(map) if map.contains_key("root") => {
            let model: FeatureModel = serde_json::from_value(value)
                .context("expected a feature model document with a \"root\" feature")?;
            let flat = model.flatten();
            Ok(ParsedInput {
                flat,
                model: Some(model),
            })
        }
        _ => bail!("unrecognized input: expected a flat node array or a feature model document"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_node_array() {
        let input = r#"[
            {"id": "root", "name": "Root", "parentId": null},
            {"id": "a", "name": "A", "parentId": "root"}
        ]"#;
        let parsed = parse_input(input).expect("parse failed");
        assert!(parsed.model.is_none());
        assert_eq!(parsed.flat.len(), 2);
        assert_eq!(parsed.flat[0].parent_id, None);
        assert_eq!(parsed.flat[1].parent_id.as_deref(), Some("root"));
    }

    #[test]
    fn missing_parent_id_key_means_root_candidate() {
        let input = r#"[{"id": "solo", "name": "Solo"}]"#;
        let parsed = parse_input(input).expect("parse failed");
        assert_eq!(parsed.flat[0].parent_id, None);
    }

    #[test]
    fn parses_feature_model_document() {
        let input = r#"{
            "root": {
                "name": "Root",
                "instance_cardinality": {"intervals": [{"lower": 1, "upper": 1}]},
                "group_type_cardinality": {"intervals": []},
                "group_instance_cardinality": {"intervals": []},
                "children": [
                    {
                        "name": "A",
                        "instance_cardinality": {"intervals": [{"lower": 0, "upper": null}]},
                        "group_type_cardinality": {"intervals": []},
                        "group_instance_cardinality": {"intervals": []},
                        "children": []
                    }
                ]
            },
            "constraints": [
                {
                    "require": true,
                    "first_feature_name": "A",
                    "first_cardinality": {"intervals": [{"lower": 1, "upper": null}]},
                    "second_feature_name": "Root",
                    "second_cardinality": {"intervals": [{"lower": 1, "upper": 1}]}
                }
            ]
        }"#;
        let parsed = parse_input(input).expect("parse failed");
        let model = parsed.model.expect("model missing");
        assert!(model.is_unbound());
        assert_eq!(model.constraints.len(), 1);
        let ids: Vec<&str> = parsed.flat.iter().map(|node| node.id.as_str()).collect();
        assert_eq!(ids, ["Root", "A"]);
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(parse_input("42").is_err());
        assert!(parse_input(r#"{"nodes": []}"#).is_err());
        assert!(parse_input("not json").is_err());
    }
}
