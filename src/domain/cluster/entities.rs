use serde::{Deserialize, Serialize};

/// Virtual network description for the cluster.
///
/// An empty spec means the operator creates and owns the vnet. A non-empty
/// resource id, or a resource group different from the cluster's managed
/// one, marks an operator-supplied ("custom") vnet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VnetSpec {
    pub resource_group: String,
    pub name: String,
    pub id: String,
}

impl VnetSpec {
    /// Whether the vnet is created and owned by this operator. Security
    /// resources inside a custom vnet are hands-off: reconcile and delete
    /// must not touch them.
    pub fn is_managed(&self, cluster_resource_group: &str) -> bool {
        self.id.is_empty()
            && (self.resource_group.is_empty() || self.resource_group == cluster_resource_group)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub vnet: VnetSpec,
}

/// Read-only cluster context injected at service construction. Owned by the
/// surrounding controller; never mutated by the reconciliation core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterScope {
    pub resource_group: String,
    pub location: String,
    pub network: NetworkSpec,
}

impl ClusterScope {
    pub fn new(resource_group: &str, location: &str, network: NetworkSpec) -> Self {
        ClusterScope {
            resource_group: resource_group.to_string(),
            location: location.to_string(),
            network,
        }
    }

    pub fn is_vnet_managed(&self) -> bool {
        self.network.vnet.is_managed(&self.resource_group)
    }
}
