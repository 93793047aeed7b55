use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Bounds on the size of a client supplied filter tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterLimits {
    /// maximum nesting depth of a filter tree; a single leaf has depth 1
    #[serde(default = "max_depth_default")]
    pub max_depth: usize,
    /// maximum number of nodes (leaves and logical nodes) in a filter tree
    #[serde(default = "max_nodes_default")]
    pub max_nodes: usize,
}

impl FilterLimits {
    pub fn is_default(&self) -> bool {
        *self == FilterLimits::default()
    }
}

impl Default for FilterLimits {
    fn default() -> FilterLimits {
        FilterLimits {
            max_depth: max_depth_default(),
            max_nodes: max_nodes_default(),
        }
    }
}

fn max_depth_default() -> usize {
    16
}

fn max_nodes_default() -> usize {
    256
}
