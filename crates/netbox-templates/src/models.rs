//! Template parameter models
//!
//! One parameter struct per NetBox object kind. Required fields are plain
//! values, everything else is an `Option` that is left out of the payload
//! when unset. All structs deserialize from the same keys NetBox uses, so
//! object definitions can be read from YAML or JSON files.

use serde::{Deserialize, Deserializer, Serialize};

use crate::choices::ChoiceValue;
use crate::error::TemplateError;

/// Tag reference, e.g. `{"name": "production"}`
pub type Tag = serde_json::Value;

/// Cluster at `/virtualization/clusters/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterParams {
    /// Name of the cluster
    pub name: String,
    /// Name of the cluster type
    #[serde(rename = "type")]
    pub cluster_type: String,
    /// Name of the cluster group
    pub group: Option<String>,
    /// Tag references
    pub tags: Option<Vec<Tag>>,
}

/// Cluster group at `/virtualization/cluster-groups/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterGroupParams {
    /// Name of the group, truncated to 50 characters
    pub name: String,
    /// Derived from `name` when unset
    pub slug: Option<String>,
}

/// Device at `/dcim/devices/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceParams {
    /// Hostname of the device
    pub name: String,
    /// Name of the device role
    pub device_role: String,
    /// Model name of the device type
    pub device_type: String,
    /// Name shown in the UI
    pub display_name: Option<String>,
    /// Name of the platform
    pub platform: Option<String>,
    /// Site the device resides in
    pub site: Option<String>,
    /// Serial number, truncated to 50 characters
    pub serial: Option<String>,
    /// Asset tag, truncated to 50 characters
    pub asset_tag: Option<String>,
    /// Cluster the device belongs to
    pub cluster: Option<String>,
    /// Lifecycle status
    pub status: Option<ChoiceValue>,
    /// Tag references
    pub tags: Option<Vec<Tag>>,
}

/// Device interface at `/dcim/interfaces/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceInterfaceParams {
    /// Name of the parent device
    pub device: String,
    /// Name of the interface
    pub name: String,
    /// `0` for virtual, `32767` for other
    #[serde(rename = "type")]
    pub iftype: Option<ChoiceValue>,
    /// Administrative state
    pub enabled: Option<bool>,
    /// Maximum transmission unit
    pub mtu: Option<u32>,
    /// MAC address, sent uppercased
    pub mac_address: Option<String>,
    /// Interface is only used for out-of-band management
    pub mgmt_only: Option<bool>,
    /// Free-form description
    pub description: Option<String>,
    /// Cable object ID
    pub cable: Option<u64>,
    /// `100` access, `200` tagged, `300` tagged-all
    pub mode: Option<ChoiceValue>,
    /// VLAN object ID
    pub untagged_vlan: Option<u64>,
    /// VLAN object IDs
    pub tagged_vlans: Option<Vec<u64>>,
    /// Tag references
    pub tags: Option<Vec<Tag>>,
}

/// Device type at `/dcim/device-types/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceTypeParams {
    /// Name of the manufacturer
    pub manufacturer: String,
    /// Model name, truncated to 50 characters
    pub model: String,
    /// Derived from `model` when unset
    pub slug: Option<String>,
    /// Part number, truncated to 50 characters
    pub part_number: Option<String>,
    /// Tag references
    pub tags: Option<Vec<Tag>>,
}

/// IP address at `/ipam/ip-addresses/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpAddressParams {
    /// Address with prefix length, e.g. `192.0.2.10/24`
    pub address: String,
    /// Free-form description
    pub description: Option<String>,
    /// Hostname the address resolves to
    pub dns_name: Option<String>,
    /// Defaults to `1` (active)
    #[serde(default = "default_ip_status")]
    pub status: Option<ChoiceValue>,
    /// Functional role, e.g. `10` loopback
    pub role: Option<ChoiceValue>,
    /// Tag references
    pub tags: Option<Vec<Tag>>,
    /// Name of the owning tenant
    pub tenant: Option<String>,
    /// Name of the VRF
    pub vrf: Option<String>,
    /// Interface the address is configured on
    pub assigned_object: Option<AssignmentTarget>,
}

fn default_ip_status() -> Option<ChoiceValue> {
    Some(ChoiceValue::Legacy(1))
}

impl Default for IpAddressParams {
    fn default() -> Self {
        Self {
            address: String::new(),
            description: None,
            dns_name: None,
            status: default_ip_status(),
            role: None,
            tags: None,
            tenant: None,
            vrf: None,
            assigned_object: None,
        }
    }
}

impl IpAddressParams {
    /// Assign the address from loose device / virtual machine / interface names
    ///
    /// See [`AssignmentTarget::from_parts`] for the rules.
    pub fn assign(
        mut self,
        device: Option<&str>,
        virtual_machine: Option<&str>,
        interface: Option<&str>,
    ) -> Result<Self, TemplateError> {
        self.assigned_object = AssignmentTarget::from_parts(device, virtual_machine, interface)?;
        Ok(self)
    }
}

/// Interface an IP address is bound to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AssignmentTarget {
    /// Interface of a physical device
    DeviceInterface {
        /// Name of the device
        device: String,
        /// Name of the interface
        interface: String,
    },
    /// Interface of a virtual machine
    VmInterface {
        /// Name of the virtual machine
        virtual_machine: String,
        /// Name of the interface
        interface: String,
    },
}

impl AssignmentTarget {
    /// Build a target from optional parent names
    ///
    /// A device and a virtual machine are mutually exclusive parents. Without
    /// an interface name, or without any parent, there is nothing to assign.
    pub fn from_parts(
        device: Option<&str>,
        virtual_machine: Option<&str>,
        interface: Option<&str>,
    ) -> Result<Option<Self>, TemplateError> {
        let device = device.filter(|d| !d.is_empty());
        let virtual_machine = virtual_machine.filter(|vm| !vm.is_empty());

        if device.is_some() && virtual_machine.is_some() {
            return Err(TemplateError::InvalidArgument(
                "Values provided for both parent device and virtual machine \
                 but they are exclusive to each other"
                    .to_string(),
            ));
        }

        let Some(interface) = interface.filter(|i| !i.is_empty()) else {
            return Ok(None);
        };

        Ok(match (device, virtual_machine) {
            (Some(device), _) => Some(Self::DeviceInterface {
                device: device.to_string(),
                interface: interface.to_string(),
            }),
            (None, Some(virtual_machine)) => Some(Self::VmInterface {
                virtual_machine: virtual_machine.to_string(),
                interface: interface.to_string(),
            }),
            (None, None) => None,
        })
    }

    /// Name of the interface
    pub fn interface(&self) -> &str {
        match self {
            Self::DeviceInterface { interface, .. } | Self::VmInterface { interface, .. } => {
                interface
            }
        }
    }
}

impl<'de> Deserialize<'de> for AssignmentTarget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            device: Option<String>,
            virtual_machine: Option<String>,
            interface: String,
        }

        let raw = Raw::deserialize(deserializer)?;
        AssignmentTarget::from_parts(
            raw.device.as_deref(),
            raw.virtual_machine.as_deref(),
            Some(&raw.interface),
        )
        .map_err(<D::Error as serde::de::Error>::custom)?
        .ok_or_else(|| {
            serde::de::Error::custom("assigned_object needs a device or virtual_machine and an interface")
        })
    }
}

/// Manufacturer at `/dcim/manufacturers/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturerParams {
    /// Name of the manufacturer
    pub name: String,
    /// Derived from `name` when unset
    pub slug: Option<String>,
}

/// Virtual machine at `/virtualization/virtual-machines/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VirtualMachineParams {
    /// Name of the virtual machine
    pub name: String,
    /// Name of the cluster the virtual machine runs on
    pub cluster: String,
    /// `0` offline, `1` active, `3` staged
    pub status: Option<ChoiceValue>,
    /// Name of the device role
    pub role: Option<String>,
    /// Name of the owning tenant
    pub tenant: Option<String>,
    /// Name of the platform
    pub platform: Option<String>,
    /// IP address object ID
    pub primary_ip4: Option<u64>,
    /// IP address object ID
    pub primary_ip6: Option<u64>,
    /// Virtual CPU count
    pub vcpus: Option<u32>,
    /// Memory in MB
    pub memory: Option<u64>,
    /// Disk in GB
    pub disk: Option<u64>,
    /// Free-form comments
    pub comments: Option<String>,
    /// Arbitrary config context
    pub local_context_data: Option<serde_json::Value>,
    /// Tag references
    pub tags: Option<Vec<Tag>>,
}

/// Virtual machine interface at `/virtualization/interfaces/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VmInterfaceParams {
    /// Name of the parent virtual machine
    pub virtual_machine: String,
    /// Name of the interface
    pub name: String,
    /// Administrative state
    pub enabled: Option<bool>,
    /// Maximum transmission unit
    pub mtu: Option<u32>,
    /// MAC address, sent uppercased
    pub mac_address: Option<String>,
    /// Free-form description
    pub description: Option<String>,
    /// `100` access, `200` tagged, `300` tagged-all
    pub mode: Option<ChoiceValue>,
    /// VLAN object ID
    pub untagged_vlan: Option<u64>,
    /// VLAN object IDs
    pub tagged_vlans: Option<Vec<u64>>,
    /// Tag references
    pub tags: Option<Vec<Tag>>,
}

/// Object definition tagged with its kind, as read from definition files
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObjectTemplate {
    /// `kind: cluster`
    Cluster(ClusterParams),
    /// `kind: cluster_group`
    ClusterGroup(ClusterGroupParams),
    /// `kind: device`
    Device(DeviceParams),
    /// `kind: device_interface`
    DeviceInterface(DeviceInterfaceParams),
    /// `kind: device_type`
    DeviceType(DeviceTypeParams),
    /// `kind: ip_address`
    IpAddress(IpAddressParams),
    /// `kind: manufacturer`
    Manufacturer(ManufacturerParams),
    /// `kind: virtual_machine`
    VirtualMachine(VirtualMachineParams),
    /// `kind: vm_interface`
    VmInterface(VmInterfaceParams),
}
