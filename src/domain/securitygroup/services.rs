use tracing::debug;

use crate::domain::{
    common::services::Service,
    error::OperatorError,
    securitygroup::{
        entities::{SecurityGroup, SecurityGroupSpec},
        ports::{SecurityGroupClient, SecurityGroupService},
    },
};

impl<C> SecurityGroupService for Service<C>
where
    C: SecurityGroupClient,
{
    async fn reconcile(&self, spec: &SecurityGroupSpec) -> Result<(), OperatorError> {
        if spec.name.is_empty() {
            return Err(OperatorError::InvalidSpec {
                message: "security group name cannot be empty".into(),
            });
        }

        if !self.scope.is_vnet_managed() {
            debug!("skipping security group reconcile in custom vnet mode");
            return Ok(());
        }

        let desired = SecurityGroup::desired(&self.scope.location, spec.is_control_plane);

        debug!(
            "creating or updating security group {} in resource group {}",
            spec.name, self.scope.resource_group
        );
        self.client
            .create_or_update(&self.scope.resource_group, &spec.name, &desired)
            .await
    }

    async fn delete(&self, spec: &SecurityGroupSpec) -> Result<(), OperatorError> {
        if spec.name.is_empty() {
            return Err(OperatorError::InvalidSpec {
                message: "security group name cannot be empty".into(),
            });
        }

        if !self.scope.is_vnet_managed() {
            debug!("skipping security group delete in custom vnet mode");
            return Ok(());
        }

        debug!(
            "deleting security group {} in resource group {}",
            spec.name, self.scope.resource_group
        );
        match self
            .client
            .delete(&self.scope.resource_group, &spec.name)
            .await
        {
            // The group is already gone: the desired end state holds.
            Err(err) if err.is_resource_not_found() => Ok(()),
            result => result,
        }
    }
}
