//! The closed list of metadata and dynamic types.

use super::Family::{self, Dynamic, Metadata};
use super::TypeEntry;

const fn plain(name: &'static str, family: Family) -> TypeEntry {
    TypeEntry {
        name,
        family,
        arity: 0,
        template: None,
    }
}

const fn templated(name: &'static str, arity: usize, template: &'static str) -> TypeEntry {
    TypeEntry {
        name,
        family: Metadata,
        arity,
        template: Some(template),
    }
}

pub(super) static ENTRIES: &[TypeEntry] = &[
    plain("ami-id", Metadata),
    plain("ami-launch-index", Metadata),
    plain("ami-manifest-path", Metadata),
    plain("ancestor-ami-ids", Metadata),
    plain("block-device-mapping/ami", Metadata),
    templated("block-device-mapping/ebsN", 1, "block-device-mapping/ebs%1"),
    templated(
        "block-device-mapping/ephemeralN",
        1,
        "block-device-mapping/ephemeral%1",
    ),
    plain("block-device-mapping/root", Metadata),
    plain("block-device-mapping/swap", Metadata),
    plain("hostname", Metadata),
    plain("iam/info", Metadata),
    templated(
        "iam/security-credentials/role-name",
        1,
        "iam/security-credentials/%1",
    ),
    plain("instance-action", Metadata),
    plain("instance-id", Metadata),
    plain("instance-type", Metadata),
    plain("kernel-id", Metadata),
    plain("local-hostname", Metadata),
    plain("local-ipv4", Metadata),
    plain("mac", Metadata),
    templated(
        "network/interfaces/macs/mac/device-number",
        1,
        "network/interfaces/macs/%1/device-number",
    ),
    templated(
        "network/interfaces/macs/mac/ipv4-associations/public-ip",
        2,
        "network/interfaces/macs/%1/ipv4-associations/%2",
    ),
    templated(
        "network/interfaces/macs/mac/local-hostname",
        1,
        "network/interfaces/macs/%1/local-hostname",
    ),
    templated(
        "network/interfaces/macs/mac/local-ipv4s",
        1,
        "network/interfaces/macs/%1/local-ipv4s",
    ),
    templated(
        "network/interfaces/macs/mac/mac",
        1,
        "network/interfaces/macs/%1/mac",
    ),
    templated(
        "network/interfaces/macs/mac/owner-id",
        1,
        "network/interfaces/macs/%1/owner-id",
    ),
    templated(
        "network/interfaces/macs/mac/public-hostname",
        1,
        "network/interfaces/macs/%1/public-hostname",
    ),
    templated(
        "network/interfaces/macs/mac/public-ipv4s",
        1,
        "network/interfaces/macs/%1/public-ipv4s",
    ),
    templated(
        "network/interfaces/macs/mac/security-groups",
        1,
        "network/interfaces/macs/%1/security-groups",
    ),
    templated(
        "network/interfaces/macs/mac/security-group-ids",
        1,
        "network/interfaces/macs/%1/security-group-ids",
    ),
    templated(
        "network/interfaces/macs/mac/subnet-id",
        1,
        "network/interfaces/macs/%1/subnet-id",
    ),
    templated(
        "network/interfaces/macs/mac/subnet-ipv4-cidr-block",
        1,
        "network/interfaces/macs/%1/subnet-ipv4-cidr-block",
    ),
    templated(
        "network/interfaces/macs/mac/vpc-id",
        1,
        "network/interfaces/macs/%1/vpc-id",
    ),
    templated(
        "network/interfaces/macs/mac/vpc-ipv4-cidr-block",
        1,
        "network/interfaces/macs/%1/vpc-ipv4-cidr-block",
    ),
    plain("placement/availability-zone", Metadata),
    plain("product-codes", Metadata),
    plain("public-hostname", Metadata),
    plain("public-ipv4", Metadata),
    plain("public-keys/0/openssh-key", Metadata),
    plain("ramdisk-id", Metadata),
    plain("reservation-id", Metadata),
    plain("security-groups", Metadata),
    plain("services/domain", Metadata),
    plain("fws/instance-monitoring", Dynamic),
    plain("instance-identity/document", Dynamic),
    plain("instance-identity/pkcs7", Dynamic),
    plain("instance-identity/signature", Dynamic),
];
