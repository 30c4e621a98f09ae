use serde::{Deserialize, Serialize};
use std::fmt;

/// One bound of a cardinality, e.g. `1..4` or `0..*` when `upper` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub lower: u64,
    pub upper: Option<u64>,
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper {
            Some(upper) => write!(f, "{}..{}", self.lower, upper),
            None => write!(f, "{}..*", self.lower),
        }
    }
}

/// Ordered list of intervals; a value is admitted when any interval covers it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cardinality {
    pub intervals: Vec<Interval>,
}

impl Cardinality {
    pub fn allows(&self, value: u64) -> bool {
        self.intervals.iter().any(|interval| {
            interval.lower <= value && interval.upper.is_none_or(|upper| upper >= value)
        })
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for interval in &self.intervals {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{interval}")?;
            first = false;
        }
        Ok(())
    }
}

/// A feature in a cardinality-based feature model. Names are globally unique
/// and double as node ids in the flat representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub instance_cardinality: Cardinality,
    pub group_type_cardinality: Cardinality,
    pub group_instance_cardinality: Cardinality,
    #[serde(default)]
    pub children: Vec<Feature>,
}

impl Feature {
    /// A feature is required when its instance cardinality cannot be zero.
    pub fn is_required(&self) -> bool {
        self.instance_cardinality
            .intervals
            .first()
            .is_some_and(|interval| interval.lower != 0)
    }

    /// A feature is unbound when it or any descendant admits unlimited instances.
    pub fn is_unbound(&self) -> bool {
        self.instance_cardinality
            .intervals
            .last()
            .is_some_and(|interval| interval.upper.is_none())
            || self.children.iter().any(Feature::is_unbound)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Cross-tree requires/excludes constraint between two features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub require: bool,
    pub first_feature_name: String,
    pub first_cardinality: Cardinality,
    pub second_feature_name: String,
    pub second_cardinality: Cardinality,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.first_feature_name, self.second_feature_name)
    }
}

/// A full feature model document: the feature tree plus cross-tree constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureModel {
    pub root: Feature,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
}

impl FeatureModel {
    /// All features in breadth-first order, root first.
    pub fn features(&self) -> Vec<&Feature> {
        let mut features = vec![&self.root];
        let mut index = 0;
        while index < features.len() {
            let feature = features[index];
            features.extend(feature.children.iter());
            index += 1;
        }
        features
    }

    pub fn is_unbound(&self) -> bool {
        self.root.is_unbound()
    }

    /// Flatten the feature tree into the parent-pointer list the layout engine
    /// consumes, in pre-order so sibling order matches the document.
    pub fn flatten(&self) -> Vec<FlatFeature> {
        let mut flat = Vec::new();
        flatten_into(&self.root, None, &mut flat);
        flat
    }
}

fn flatten_into(feature: &Feature, parent: Option<&str>, out: &mut Vec<FlatFeature>) {
    out.push(FlatFeature {
        id: feature.name.clone(),
        name: feature.name.clone(),
        parent_id: parent.map(str::to_string),
    });
    for child in &feature.children {
        flatten_into(child, Some(&feature.name), out);
    }
}

/// Flat node record as exchanged with diagramming surfaces: a missing or null
/// `parentId` marks a root candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatFeature {
    pub id: String,
    pub name: String,
    #[serde(default, rename = "parentId")]
    pub parent_id: Option<String>,
}

impl FlatFeature {
    pub fn new(id: impl Into<String>, name: impl Into<String>, parent_id: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: parent_id.map(str::to_string),
        }
    }
}
