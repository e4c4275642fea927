use serde::{Deserialize, Serialize};

/// Per-call request for a single security group. Built fresh by the caller
/// for every reconcile or delete invocation; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityGroupSpec {
    pub name: String,
    pub is_control_plane: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleProtocol {
    Tcp,
    Udp,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleDirection {
    Inbound,
    Outbound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleAccess {
    Allow,
    Deny,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityRule {
    pub name: String,
    pub description: String,
    pub protocol: RuleProtocol,
    pub source_port_range: String,
    pub destination_port_range: String,
    pub source_address_prefix: String,
    pub destination_address_prefix: String,
    pub priority: u32,
    pub direction: RuleDirection,
    pub access: RuleAccess,
}

impl SecurityRule {
    pub fn allow_ssh() -> Self {
        SecurityRule {
            name: "allow_ssh".to_string(),
            description: "Allow SSH".to_string(),
            protocol: RuleProtocol::Tcp,
            source_port_range: "*".to_string(),
            destination_port_range: "22".to_string(),
            source_address_prefix: "*".to_string(),
            destination_address_prefix: "*".to_string(),
            priority: 100,
            direction: RuleDirection::Inbound,
            access: RuleAccess::Allow,
        }
    }

    pub fn allow_api_server() -> Self {
        SecurityRule {
            name: "allow_apiserver".to_string(),
            description: "Allow API server traffic".to_string(),
            protocol: RuleProtocol::Tcp,
            source_port_range: "*".to_string(),
            destination_port_range: "6443".to_string(),
            source_address_prefix: "*".to_string(),
            destination_address_prefix: "*".to_string(),
            priority: 101,
            direction: RuleDirection::Inbound,
            access: RuleAccess::Allow,
        }
    }
}

/// Desired state submitted to the cloud control plane. Rebuilt from scratch
/// on every reconcile, never mutated in place; the control plane stays the
/// source of truth for actual state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityGroup {
    pub location: String,
    pub security_rules: Vec<SecurityRule>,
}

impl SecurityGroup {
    /// Builds the desired body for the given role. Control plane nodes get
    /// the SSH and API server ingress rules; worker nodes keep the cloud's
    /// default rule set.
    pub fn desired(location: &str, is_control_plane: bool) -> Self {
        let security_rules = if is_control_plane {
            vec![SecurityRule::allow_ssh(), SecurityRule::allow_api_server()]
        } else {
            Vec::new()
        };

        SecurityGroup {
            location: location.to_string(),
            security_rules,
        }
    }
}
