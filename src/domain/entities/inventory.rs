//! Validated switch inventory

use super::TargetSpec;

/// Ordered set of deployable switches.
///
/// Order follows the inventory document and is the default deploy order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    targets: Vec<TargetSpec>,
}

impl Inventory {
    pub fn new(targets: Vec<TargetSpec>) -> Self {
        Self { targets }
    }

    pub fn get(&self, name: &str) -> Option<&TargetSpec> {
        self.targets.iter().find(|t| t.name == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.targets.iter().map(|t| t.name.clone()).collect()
    }

    pub fn targets(&self) -> &[TargetSpec] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
