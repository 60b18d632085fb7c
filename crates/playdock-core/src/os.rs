//! Supported base operating systems and their package-manager commands.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Base OS family of the generated container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
    Ubuntu,
    Centos,
    Debian,
}

/// Shell commands used to prepare a fresh image for Ansible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageCommands {
    /// Refreshes package indexes
    pub update: &'static str,
    /// Upgrades installed packages; empty when the OS has no separate step
    pub upgrade: &'static str,
    /// Installs pip and git
    pub install: &'static str,
}

const UBUNTU: PackageCommands = PackageCommands {
    update: "apt-get -qq update",
    upgrade: "apt-get upgrade -y",
    install: "apt-get install -y python-pip git",
};

const CENTOS: PackageCommands = PackageCommands {
    update: "yum -y update",
    upgrade: "",
    install: "yum -y install python-pip git",
};

const DEBIAN: PackageCommands = PackageCommands {
    update: "aptitude -qq update",
    upgrade: "aptitude full-upgrade -y",
    install: "aptitude install -y python-pip git",
};

impl OsFamily {
    pub const ALL: [OsFamily; 3] = [OsFamily::Ubuntu, OsFamily::Centos, OsFamily::Debian];

    /// Canonical lowercase name, also used as the image name in `FROM`.
    pub fn name(self) -> &'static str {
        match self {
            OsFamily::Ubuntu => "ubuntu",
            OsFamily::Centos => "centos",
            OsFamily::Debian => "debian",
        }
    }

    pub fn commands(self) -> &'static PackageCommands {
        match self {
            OsFamily::Ubuntu => &UBUNTU,
            OsFamily::Centos => &CENTOS,
            OsFamily::Debian => &DEBIAN,
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OsFamily {
    type Err = crate::Error;

    /// Case-insensitive. The error carries the lowercased identifier.
    fn from_str(s: &str) -> crate::Result<Self> {
        let normalized = s.to_lowercase();
        OsFamily::ALL
            .into_iter()
            .find(|family| family.name() == normalized)
            .ok_or(crate::Error::UnsupportedOs { os: normalized })
    }
}

/// A base OS pinned to an image version, with its package commands.
///
/// Serializes to the `os` fields exposed to templates:
/// `name`, `version`, `update`, `upgrade`, `install`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OsProfile {
    #[serde(serialize_with = "serialize_family")]
    pub name: OsFamily,
    pub version: String,
    pub update: &'static str,
    pub upgrade: &'static str,
    pub install: &'static str,
}

impl OsProfile {
    pub fn new(family: OsFamily, version: impl Into<String>) -> Self {
        let commands = family.commands();
        Self {
            name: family,
            version: version.into(),
            update: commands.update,
            upgrade: commands.upgrade,
            install: commands.install,
        }
    }

    /// Resolves a user-supplied OS identifier into a versioned profile.
    pub fn lookup(os: &str, version: &str) -> crate::Result<Self> {
        let family: OsFamily = os.parse()?;
        tracing::debug!(os = %family, version, "resolved OS profile");
        Ok(Self::new(family, version))
    }
}

fn serialize_family<S: serde::Serializer>(
    family: &OsFamily,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(family.name())
}
