//! Choice field translation table
//!
//! Up to API v2.6 NetBox encoded multiple-choice fields (statuses, interface
//! types and modes, IP roles) as small integers. Later versions use symbolic
//! names. This table maps the legacy integers onto their names.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

/// NetBox object kinds that carry translatable choice fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    /// Circuits
    Circuits,
    /// Devices
    Devices,
    /// Device and virtual machine interfaces
    Interfaces,
    /// IP addresses
    IpAddresses,
    /// IP prefixes
    Prefixes,
    /// Sites
    Sites,
    /// VLANs
    Vlans,
    /// Virtual machines
    VirtualMachines,
}

impl ObjectKind {
    /// Key used by NetBox for this object kind
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circuits => "circuits",
            Self::Devices => "devices",
            Self::Interfaces => "interfaces",
            Self::IpAddresses => "ip_addresses",
            Self::Prefixes => "prefixes",
            Self::Sites => "sites",
            Self::Vlans => "vlans",
            Self::VirtualMachines => "virtual_machines",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Choice fields that changed representation after v2.6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Lifecycle status
    Status,
    /// Interface type
    Type,
    /// 802.1Q mode
    Mode,
    /// IP address role
    Role,
}

impl FieldKind {
    /// Payload key of this field
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Type => "type",
            Self::Mode => "mode",
            Self::Role => "role",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw value of a choice field
///
/// Callers may pass either the legacy integer code or, when they already
/// target a newer API, the symbolic name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    /// Integer code as used by NetBox API v2.6 and earlier
    Legacy(i64),
    /// Symbolic name as used by NetBox API v2.7 and later
    Named(String),
}

impl From<i64> for ChoiceValue {
    fn from(value: i64) -> Self {
        Self::Legacy(value)
    }
}

impl From<&str> for ChoiceValue {
    fn from(value: &str) -> Self {
        Self::Named(value.to_string())
    }
}

impl From<String> for ChoiceValue {
    fn from(value: String) -> Self {
        Self::Named(value)
    }
}

type ChoiceTable = HashMap<(ObjectKind, FieldKind), HashMap<i64, &'static str>>;

const CHOICES: &[(ObjectKind, FieldKind, &[(i64, &str)])] = &[
    (
        ObjectKind::Circuits,
        FieldKind::Status,
        &[
            (0, "deprovisioning"),
            (1, "active"),
            (2, "planned"),
            (3, "provisioning"),
            (4, "offline"),
            (5, "decomissioned"),
        ],
    ),
    (
        ObjectKind::Devices,
        FieldKind::Status,
        &[
            (0, "offline"),
            (1, "active"),
            (2, "planned"),
            (3, "staged"),
            (4, "failed"),
            (5, "inventory"),
            (6, "decomissioning"),
        ],
    ),
    (
        ObjectKind::Interfaces,
        FieldKind::Type,
        &[(0, "virtual"), (32767, "other")],
    ),
    (
        ObjectKind::Interfaces,
        FieldKind::Mode,
        &[(100, "access"), (200, "tagged"), (300, "tagged-all")],
    ),
    (
        ObjectKind::IpAddresses,
        FieldKind::Role,
        &[
            (10, "loopback"),
            (20, "secondary"),
            (30, "anycast"),
            (40, "vip"),
            (41, "vrrp"),
            (42, "hsrp"),
            (43, "glbp"),
            (44, "carp"),
        ],
    ),
    (
        ObjectKind::IpAddresses,
        FieldKind::Status,
        &[(1, "active"), (2, "reserved"), (3, "deprecated"), (5, "dhcp")],
    ),
    (
        ObjectKind::IpAddresses,
        FieldKind::Type,
        &[(0, "virtual"), (32767, "other")],
    ),
    (
        ObjectKind::Prefixes,
        FieldKind::Status,
        &[(0, "container"), (1, "active"), (2, "reserved"), (3, "deprecated")],
    ),
    (
        ObjectKind::Sites,
        FieldKind::Status,
        &[(1, "active"), (2, "planned"), (4, "retired")],
    ),
    (
        ObjectKind::Vlans,
        FieldKind::Status,
        &[(1, "active"), (2, "reserved"), (3, "deprecated")],
    ),
    (
        ObjectKind::VirtualMachines,
        FieldKind::Status,
        &[(0, "offline"), (1, "active"), (3, "staged")],
    ),
];

static CHOICE_TABLE: LazyLock<ChoiceTable> = LazyLock::new(|| {
    CHOICES
        .iter()
        .map(|(object, field, entries)| ((*object, *field), entries.iter().copied().collect()))
        .collect()
});

/// Look up the symbolic name of a legacy integer choice
///
/// Returns [`TemplateError::UnknownChoice`] when the object kind has no such
/// field or the field has no such value.
pub fn lookup(object: ObjectKind, field: FieldKind, value: i64) -> Result<&'static str, TemplateError> {
    CHOICE_TABLE
        .get(&(object, field))
        .and_then(|entries| entries.get(&value))
        .copied()
        .ok_or(TemplateError::UnknownChoice { object, field, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_values() {
        assert_eq!(lookup(ObjectKind::Devices, FieldKind::Status, 1).unwrap(), "active");
        assert_eq!(lookup(ObjectKind::Devices, FieldKind::Status, 6).unwrap(), "decomissioning");
        assert_eq!(lookup(ObjectKind::Circuits, FieldKind::Status, 5).unwrap(), "decomissioned");
        assert_eq!(lookup(ObjectKind::Interfaces, FieldKind::Type, 32767).unwrap(), "other");
        assert_eq!(lookup(ObjectKind::Interfaces, FieldKind::Mode, 300).unwrap(), "tagged-all");
        assert_eq!(lookup(ObjectKind::IpAddresses, FieldKind::Role, 44).unwrap(), "carp");
        assert_eq!(lookup(ObjectKind::IpAddresses, FieldKind::Status, 5).unwrap(), "dhcp");
        assert_eq!(lookup(ObjectKind::Prefixes, FieldKind::Status, 0).unwrap(), "container");
        assert_eq!(lookup(ObjectKind::Sites, FieldKind::Status, 4).unwrap(), "retired");
        assert_eq!(lookup(ObjectKind::Vlans, FieldKind::Status, 3).unwrap(), "deprecated");
        assert_eq!(lookup(ObjectKind::VirtualMachines, FieldKind::Status, 3).unwrap(), "staged");
    }

    #[test]
    fn test_lookup_unknown_value_fails() {
        // Gaps in the legacy numbering are not filled in
        let err = lookup(ObjectKind::VirtualMachines, FieldKind::Status, 2).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UnknownChoice {
                object: ObjectKind::VirtualMachines,
                field: FieldKind::Status,
                value: 2,
            }
        );
        assert_eq!(err.to_string(), "Unknown choice 2 for virtual_machines.status");
    }

    #[test]
    fn test_lookup_unknown_field_fails() {
        assert!(lookup(ObjectKind::Devices, FieldKind::Mode, 100).is_err());
        assert!(lookup(ObjectKind::Sites, FieldKind::Role, 1).is_err());
    }

    #[test]
    fn test_table_sizes() {
        let total: usize = CHOICE_TABLE.values().map(HashMap::len).sum();
        assert_eq!(CHOICE_TABLE.len(), 11);
        assert_eq!(total, 6 + 7 + 2 + 3 + 8 + 4 + 2 + 4 + 3 + 3 + 3);
    }

    #[test]
    fn test_choice_value_deserializes_untagged() {
        let legacy: ChoiceValue = serde_json::from_str("1").unwrap();
        assert_eq!(legacy, ChoiceValue::Legacy(1));

        let named: ChoiceValue = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(named, ChoiceValue::Named("active".to_string()));
    }
}
