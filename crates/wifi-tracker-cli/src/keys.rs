//! `key` subcommands: print entry keys for a standard network or a hotspot.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};

use wifi_tracker::domain::hotspot::DeviceType;
use wifi_tracker::{
    HostNetworkType, HotspotEntryKey, HotspotNetwork, NetworkProviderInfo, ScanResultKey,
    SecurityType, StandardEntryKey,
};

/// Key subcommand
#[derive(Subcommand, Debug)]
pub enum KeyCommand {
    /// Key for a network identified by SSID and security types
    Standard(StandardKeyArgs),

    /// Key for a hotspot offered by a nearby device
    Hotspot(HotspotKeyArgs),
}

/// Arguments for `key standard`
#[derive(Args, Debug)]
pub struct StandardKeyArgs {
    /// Network SSID
    #[arg(short, long)]
    pub ssid: String,

    /// Security type (open, wep, psk, eap, sae, owe, ...); repeatable
    #[arg(short = 't', long = "security", required = true)]
    pub security: Vec<SecurityType>,

    /// Suggestion profile key, for app-suggested networks
    #[arg(long)]
    pub suggestion_profile: Option<String>,

    /// Mark the entry as created by a network request
    #[arg(long)]
    pub network_request: bool,

    /// Mark the entry as targeting new networks
    #[arg(long)]
    pub targeting_new_networks: bool,
}

/// Arguments for `key hotspot`
#[derive(Args, Debug)]
pub struct HotspotKeyArgs {
    /// Provider device ID
    #[arg(long)]
    pub device_id: i64,

    /// Provider device name
    #[arg(long)]
    pub device_name: String,

    /// Provider model name
    #[arg(long)]
    pub model: String,

    /// Provider device type
    #[arg(long, value_enum, default_value = "phone")]
    pub device_type: DeviceTypeArg,

    /// Upstream network the device shares
    #[arg(long, value_enum)]
    pub network_type: NetworkTypeArg,

    /// Display name of the upstream network
    #[arg(long)]
    pub network_name: Option<String>,

    /// Hotspot SSID; without it the key is a virtual entry
    #[arg(long)]
    pub ssid: Option<String>,

    /// Hotspot BSSID
    #[arg(long)]
    pub bssid: Option<String>,

    /// Hotspot security type; repeatable
    #[arg(short = 't', long = "security")]
    pub security: Vec<SecurityType>,
}

/// Device type argument enum for CLI
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum DeviceTypeArg {
    Unknown,
    Phone,
    Tablet,
    Laptop,
    Watch,
    Auto,
}

impl From<DeviceTypeArg> for DeviceType {
    fn from(val: DeviceTypeArg) -> Self {
        match val {
            DeviceTypeArg::Unknown => DeviceType::Unknown,
            DeviceTypeArg::Phone => DeviceType::Phone,
            DeviceTypeArg::Tablet => DeviceType::Tablet,
            DeviceTypeArg::Laptop => DeviceType::Laptop,
            DeviceTypeArg::Watch => DeviceType::Watch,
            DeviceTypeArg::Auto => DeviceType::Auto,
        }
    }
}

/// Host network type argument enum for CLI
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum NetworkTypeArg {
    Unknown,
    Cellular,
    Wifi,
    Ethernet,
}

impl From<NetworkTypeArg> for HostNetworkType {
    fn from(val: NetworkTypeArg) -> Self {
        match val {
            NetworkTypeArg::Unknown => HostNetworkType::Unknown,
            NetworkTypeArg::Cellular => HostNetworkType::Cellular,
            NetworkTypeArg::Wifi => HostNetworkType::Wifi,
            NetworkTypeArg::Ethernet => HostNetworkType::Ethernet,
        }
    }
}

/// Execute a key command and print the key
pub fn execute(command: KeyCommand) -> Result<()> {
    let key = match command {
        KeyCommand::Standard(args) => standard_key(args)?.to_string(),
        KeyCommand::Hotspot(args) => hotspot_key(args)?.to_string(),
    };
    println!("{key}");
    Ok(())
}

fn standard_key(args: StandardKeyArgs) -> Result<StandardEntryKey> {
    let mut key = StandardEntryKey::new(ScanResultKey::new(args.ssid, args.security))
        .context("building standard key")?
        .with_network_request(args.network_request)
        .with_targeting_new_networks(args.targeting_new_networks);
    if let Some(profile) = args.suggestion_profile {
        key = key.with_suggestion_profile(profile);
    }
    Ok(key)
}

fn hotspot_key(args: HotspotKeyArgs) -> Result<HotspotEntryKey> {
    let provider = NetworkProviderInfo::builder(args.device_name, args.model)
        .device_type(args.device_type.into())
        .build();
    let mut builder = HotspotNetwork::builder()
        .device_id(args.device_id)
        .network_provider_info(provider)
        .host_network_type(args.network_type.into());
    if let Some(name) = args.network_name {
        builder = builder.network_name(name);
    }
    if let Some(ssid) = args.ssid {
        builder = builder.hotspot_ssid(ssid);
    }
    if let Some(bssid) = args.bssid {
        builder = builder.hotspot_bssid(bssid);
    }
    for security in args.security {
        builder = builder.add_hotspot_security_type(security);
    }
    let network = builder.build().context("building hotspot network")?;
    Ok(HotspotEntryKey::from_network(&network))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wifi_tracker::{EntryKey, EntryKind};

    #[test]
    fn standard_key_classifies_as_standard() {
        let key = standard_key(StandardKeyArgs {
            ssid: "home".into(),
            security: vec![SecurityType::Psk, SecurityType::Sae],
            suggestion_profile: None,
            network_request: false,
            targeting_new_networks: false,
        })
        .unwrap();
        let parsed = EntryKey::parse(&key.to_string()).unwrap();
        assert_eq!(parsed.kind(), EntryKind::Standard);
    }

    #[test]
    fn empty_ssid_is_refused() {
        let result = standard_key(StandardKeyArgs {
            ssid: String::new(),
            security: vec![SecurityType::Open],
            suggestion_profile: None,
            network_request: false,
            targeting_new_networks: false,
        });
        assert!(result.is_err());
    }

    #[test]
    fn hotspot_without_ssid_is_virtual() {
        let key = hotspot_key(HotspotKeyArgs {
            device_id: 7,
            device_name: "My Phone".into(),
            model: "Pixel 7".into(),
            device_type: DeviceTypeArg::Phone,
            network_type: NetworkTypeArg::Cellular,
            network_name: None,
            ssid: None,
            bssid: None,
            security: Vec::new(),
        })
        .unwrap();
        assert!(key.is_virtual_entry());
        assert_eq!(key.device_id(), 7);
        assert_eq!(EntryKey::parse(&key.to_string()).unwrap().kind(), EntryKind::Hotspot);
    }
}
