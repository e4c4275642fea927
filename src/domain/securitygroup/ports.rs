use crate::domain::{
    error::OperatorError,
    securitygroup::entities::{SecurityGroup, SecurityGroupSpec},
};

#[cfg_attr(test, mockall::automock)]
pub trait SecurityGroupService: Send + Sync {
    fn reconcile(
        &self,
        spec: &SecurityGroupSpec,
    ) -> impl Future<Output = Result<(), OperatorError>> + Send;
    fn delete(
        &self,
        spec: &SecurityGroupSpec,
    ) -> impl Future<Output = Result<(), OperatorError>> + Send;
}

/// Narrow capability over the cloud control plane. Create-or-update is
/// idempotent on the control plane side; implementations must surface a
/// not-found delete failure as `OperatorError::CloudApi { status: 404, .. }`
/// so the service can tell it apart from real failures.
#[cfg_attr(test, mockall::automock)]
pub trait SecurityGroupClient: Send + Sync {
    fn create_or_update(
        &self,
        resource_group: &str,
        name: &str,
        security_group: &SecurityGroup,
    ) -> impl Future<Output = Result<(), OperatorError>> + Send;
    fn delete(
        &self,
        resource_group: &str,
        name: &str,
    ) -> impl Future<Output = Result<(), OperatorError>> + Send;
}
