//! Demo data shared by the tests of the workspace.

use std::{
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
    sync::LazyLock,
};

use folio_models::email_address::EmailAddressWithName;

pub mod contact;

pub const CLIENT_IP_1: IpAddr = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7));
pub const CLIENT_IP_2: IpAddr = IpAddr::V6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 42));

pub static OWNER: LazyLock<EmailAddressWithName> =
    LazyLock::new(|| "Portfolio Owner <owner@example.com>".parse().unwrap());
