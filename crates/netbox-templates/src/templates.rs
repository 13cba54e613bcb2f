//! NetBox object templates
//!
//! Each method turns a parameter struct into the JSON body NetBox expects on
//! the object-creation endpoint. References to other objects are nested by
//! name (`{"name": ...}`, or `{"model": ...}` for device types), fields with a
//! NetBox length limit are truncated, and unset fields are dropped.

use serde_json::{Value, json};
use tracing::{debug, trace, warn};

use crate::choices::{self, ChoiceValue, FieldKind, ObjectKind};
use crate::config::TemplatesConfig;
use crate::error::TemplateError;
use crate::format::{Payload, format_slug, remove_empty_fields, truncate};
use crate::models::*;
use crate::resource::Resource;
use crate::version::ApiVersion;

/// Payload builder for a specific NetBox API version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    api_version: ApiVersion,
}

impl Templates {
    /// Create templates targeting `api_version`
    pub fn new(api_version: ApiVersion) -> Self {
        Self { api_version }
    }

    /// Create templates from a dotted version string such as `"2.10.3"`
    pub fn from_version_str(api_version: &str) -> Result<Self, TemplateError> {
        Ok(Self::new(ApiVersion::parse(api_version)?))
    }

    /// Create templates from a [`TemplatesConfig`]
    pub fn from_config(config: &TemplatesConfig) -> Self {
        Self::new(config.api_version.clone())
    }

    /// API version payloads are formatted for
    pub fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Format a choice value for the configured API version
    ///
    /// Legacy integer codes are translated into their symbolic names when the
    /// API is newer than v2.6. Symbolic names always pass through, as does
    /// everything when targeting v2.6 or older.
    pub fn version_dependent(
        &self,
        object: ObjectKind,
        field: FieldKind,
        value: ChoiceValue,
    ) -> Result<ChoiceValue, TemplateError> {
        match value {
            ChoiceValue::Legacy(code) if self.api_version.uses_named_choices() => {
                let name = choices::lookup(object, field, code)?;
                trace!("Translated {}.{} {} -> {}", object, field, code, name);
                Ok(ChoiceValue::Named(name.to_string()))
            }
            other => Ok(other),
        }
    }

    fn optional_choice(
        &self,
        object: ObjectKind,
        field: FieldKind,
        value: Option<&ChoiceValue>,
    ) -> Result<Option<ChoiceValue>, TemplateError> {
        value
            .cloned()
            .map(|v| self.version_dependent(object, field, v))
            .transpose()
    }

    /// Cluster at `/virtualization/clusters/`
    pub fn cluster(&self, params: &ClusterParams) -> Payload {
        let body = json!({
            "name": truncate(&params.name, 100),
            "type": {"name": params.cluster_type},
            "group": non_empty(params.group.as_ref()).map(|g| nested_name(&truncate(g, 50))),
            "tags": params.tags,
        });
        finish(Resource::Cluster, &params.name, body)
    }

    /// Cluster group at `/virtualization/cluster-groups/`
    pub fn cluster_group(&self, params: &ClusterGroupParams) -> Payload {
        let body = json!({
            "name": truncate(&params.name, 50),
            "slug": slug_or_derived(params.slug.as_ref(), &params.name),
        });
        finish(Resource::ClusterGroup, &params.name, body)
    }

    /// Device at `/dcim/devices/`
    pub fn device(&self, params: &DeviceParams) -> Result<Payload, TemplateError> {
        let body = json!({
            "name": params.name,
            "device_role": {"name": params.device_role},
            "device_type": {"model": params.device_type},
            "display_name": params.display_name,
            "platform": non_empty(params.platform.as_ref()).map(nested_name),
            "site": non_empty(params.site.as_ref()).map(nested_name),
            "serial": non_empty(params.serial.as_ref()).map(|s| truncate(s, 50)),
            "asset_tag": non_empty(params.asset_tag.as_ref()).map(|a| truncate(a, 50)),
            "cluster": non_empty(params.cluster.as_ref()).map(|c| nested_name(&truncate(c, 100))),
            "status": self.optional_choice(ObjectKind::Devices, FieldKind::Status, params.status.as_ref())?,
            "tags": params.tags,
        });
        Ok(finish(Resource::Device, &params.name, body))
    }

    /// Device interface at `/dcim/interfaces/`
    pub fn device_interface(&self, params: &DeviceInterfaceParams) -> Result<Payload, TemplateError> {
        let body = json!({
            "device": nested_name(&params.device),
            "name": params.name,
            "type": self.optional_choice(ObjectKind::Interfaces, FieldKind::Type, params.iftype.as_ref())?,
            "enabled": params.enabled,
            "mtu": params.mtu,
            "mac_address": non_empty(params.mac_address.as_ref()).map(|m| m.to_uppercase()),
            "mgmt_only": params.mgmt_only,
            "description": params.description,
            "cable": params.cable,
            "mode": params.mode,
            "untagged_vlan": params.untagged_vlan,
            "tagged_vlans": params.tagged_vlans,
            "tags": params.tags,
        });
        Ok(finish(Resource::DeviceInterface, &params.name, body))
    }

    /// Device type at `/dcim/device-types/`
    pub fn device_type(&self, params: &DeviceTypeParams) -> Payload {
        let body = json!({
            "manufacturer": nested_name(&params.manufacturer),
            "model": truncate(&params.model, 50),
            "slug": slug_or_derived(params.slug.as_ref(), &params.model),
            "part_number": non_empty(params.part_number.as_ref()).map(|p| truncate(p, 50)),
            "tags": params.tags,
        });
        finish(Resource::DeviceType, &params.model, body)
    }

    /// IP address at `/ipam/ip-addresses/`
    ///
    /// The address is bound to an interface only when `assigned_object` is
    /// set; use [`IpAddressParams::assign`] to build it from loose parent
    /// names, which rejects a device and a virtual machine given together.
    pub fn ip_address(&self, params: &IpAddressParams) -> Result<Payload, TemplateError> {
        let mut body = json!({
            "address": params.address,
            "description": params.description,
            "dns_name": params.dns_name,
            "status": self.optional_choice(ObjectKind::IpAddresses, FieldKind::Status, params.status.as_ref())?,
            "role": self.optional_choice(ObjectKind::IpAddresses, FieldKind::Role, params.role.as_ref())?,
            "tags": params.tags,
            "tenant": non_empty(params.tenant.as_ref()).map(nested_name),
            "vrf": non_empty(params.vrf.as_ref()).map(nested_name),
        });

        match &params.assigned_object {
            Some(AssignmentTarget::DeviceInterface { device, interface }) => {
                body["assigned_object_type"] = json!("dcim.interface");
                body["assigned_object"] = json!({
                    "name": interface,
                    "device": nested_name(device),
                });
            }
            Some(AssignmentTarget::VmInterface { virtual_machine, interface }) => {
                body["assigned_object_type"] = json!("virtualization.vminterface");
                body["assigned_object"] = json!({
                    "name": interface,
                    "virtual_machine": nested_name(&truncate(virtual_machine, 64)),
                });
            }
            None => {}
        }

        Ok(finish(Resource::IpAddress, &params.address, body))
    }

    /// [`Templates::ip_address`] with the assignment given as loose names
    ///
    /// Fails with [`TemplateError::InvalidArgument`] when both `device` and
    /// `virtual_machine` are set.
    pub fn ip_address_on(
        &self,
        params: IpAddressParams,
        device: Option<&str>,
        virtual_machine: Option<&str>,
        interface: Option<&str>,
    ) -> Result<Payload, TemplateError> {
        let params = params.assign(device, virtual_machine, interface).inspect_err(|e| {
            warn!("Rejected IP address {}: {}", parent_names(device, virtual_machine), e);
        })?;
        self.ip_address(&params)
    }

    /// Manufacturer at `/dcim/manufacturers/`
    pub fn manufacturer(&self, params: &ManufacturerParams) -> Payload {
        let body = json!({
            "name": truncate(&params.name, 50),
            "slug": slug_or_derived(params.slug.as_ref(), &params.name),
        });
        finish(Resource::Manufacturer, &params.name, body)
    }

    /// Virtual machine at `/virtualization/virtual-machines/`
    pub fn virtual_machine(&self, params: &VirtualMachineParams) -> Result<Payload, TemplateError> {
        let body = json!({
            "name": params.name,
            "cluster": nested_name(&params.cluster),
            "status": self.optional_choice(ObjectKind::VirtualMachines, FieldKind::Status, params.status.as_ref())?,
            "role": non_empty(params.role.as_ref()).map(nested_name),
            "tenant": non_empty(params.tenant.as_ref()).map(nested_name),
            "platform": non_empty(params.platform.as_ref()).map(nested_name),
            "primary_ip4": params.primary_ip4,
            "primary_ip6": params.primary_ip6,
            "vcpus": params.vcpus.map(f64::from),
            "memory": params.memory,
            "disk": params.disk,
            "comments": params.comments,
            "local_context_data": params.local_context_data,
            "tags": params.tags,
        });
        Ok(finish(Resource::VirtualMachine, &params.name, body))
    }

    /// Virtual machine interface at `/virtualization/interfaces/`
    pub fn vm_interface(&self, params: &VmInterfaceParams) -> Result<Payload, TemplateError> {
        let body = json!({
            "virtual_machine": nested_name(&truncate(&params.virtual_machine, 64)),
            "name": params.name,
            "enabled": params.enabled,
            "mtu": params.mtu,
            "mac_address": non_empty(params.mac_address.as_ref()).map(|m| m.to_uppercase()),
            "description": params.description,
            "mode": params.mode,
            "untagged_vlan": params.untagged_vlan,
            "tagged_vlans": params.tagged_vlans,
            "tags": params.tags,
        });
        Ok(finish(Resource::VmInterface, &params.name, body))
    }

    /// Render any object definition, returning the endpoint it belongs to
    pub fn render(&self, template: &ObjectTemplate) -> Result<(Resource, Payload), TemplateError> {
        Ok(match template {
            ObjectTemplate::Cluster(p) => (Resource::Cluster, self.cluster(p)),
            ObjectTemplate::ClusterGroup(p) => (Resource::ClusterGroup, self.cluster_group(p)),
            ObjectTemplate::Device(p) => (Resource::Device, self.device(p)?),
            ObjectTemplate::DeviceInterface(p) => (Resource::DeviceInterface, self.device_interface(p)?),
            ObjectTemplate::DeviceType(p) => (Resource::DeviceType, self.device_type(p)),
            ObjectTemplate::IpAddress(p) => (Resource::IpAddress, self.ip_address(p)?),
            ObjectTemplate::Manufacturer(p) => (Resource::Manufacturer, self.manufacturer(p)),
            ObjectTemplate::VirtualMachine(p) => (Resource::VirtualMachine, self.virtual_machine(p)?),
            ObjectTemplate::VmInterface(p) => (Resource::VmInterface, self.vm_interface(p)?),
        })
    }
}

/// Treat empty strings like unset values
fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

fn nested_name(name: &str) -> Value {
    json!({"name": name})
}

fn slug_or_derived(slug: Option<&String>, name: &str) -> String {
    non_empty(slug).map_or_else(|| format_slug(name), str::to_string)
}

fn parent_names(device: Option<&str>, virtual_machine: Option<&str>) -> String {
    format!(
        "device={} virtual_machine={}",
        device.unwrap_or_default(),
        virtual_machine.unwrap_or_default()
    )
}

fn finish(resource: Resource, name: &str, body: Value) -> Payload {
    let Value::Object(obj) = body else {
        unreachable!("templates always build JSON objects");
    };
    let payload = remove_empty_fields(obj);
    debug!("Built {} payload for {} with {} fields", resource, name, payload.len());
    payload
}
