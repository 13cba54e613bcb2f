//! NetBox API endpoints the templates are submitted to

use std::fmt;

/// Object-creation endpoint for each template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// `virtualization/clusters`
    Cluster,
    /// `virtualization/cluster-groups`
    ClusterGroup,
    /// `dcim/devices`
    Device,
    /// `dcim/interfaces`
    DeviceInterface,
    /// `dcim/device-types`
    DeviceType,
    /// `ipam/ip-addresses`
    IpAddress,
    /// `dcim/manufacturers`
    Manufacturer,
    /// `virtualization/virtual-machines`
    VirtualMachine,
    /// `virtualization/interfaces`
    VmInterface,
}

impl Resource {
    /// Every resource, in declaration order
    pub const ALL: [Resource; 9] = [
        Self::Cluster,
        Self::ClusterGroup,
        Self::Device,
        Self::DeviceInterface,
        Self::DeviceType,
        Self::IpAddress,
        Self::Manufacturer,
        Self::VirtualMachine,
        Self::VmInterface,
    ];

    /// Endpoint relative to `/api/`, e.g. `dcim/devices`
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Cluster => "virtualization/clusters",
            Self::ClusterGroup => "virtualization/cluster-groups",
            Self::Device => "dcim/devices",
            Self::DeviceInterface => "dcim/interfaces",
            Self::DeviceType => "dcim/device-types",
            Self::IpAddress => "ipam/ip-addresses",
            Self::Manufacturer => "dcim/manufacturers",
            Self::VirtualMachine => "virtualization/virtual-machines",
            Self::VmInterface => "virtualization/interfaces",
        }
    }

    /// Absolute API path, e.g. `/api/dcim/devices/`
    pub fn path(self) -> String {
        format!("/api/{}/", self.endpoint())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}
