use playdock_core::{Error, OsFamily, OsProfile};
use proptest::prelude::*;

#[test]
fn ubuntu_uses_apt_get() {
    let profile = OsProfile::lookup("ubuntu", "latest").unwrap();

    assert_eq!(profile.name, OsFamily::Ubuntu);
    assert_eq!(profile.version, "latest");
    assert_eq!(profile.update, "apt-get -qq update");
    assert_eq!(profile.upgrade, "apt-get upgrade -y");
    assert_eq!(profile.install, "apt-get install -y python-pip git");
}

#[test]
fn centos_has_no_upgrade_step() {
    let profile = OsProfile::lookup("centos", "7").unwrap();

    assert_eq!(profile.name, OsFamily::Centos);
    assert_eq!(profile.version, "7");
    assert_eq!(profile.update, "yum -y update");
    assert_eq!(profile.upgrade, "");
    assert_eq!(profile.install, "yum -y install python-pip git");
    assert!(profile.upgrade.is_empty());
}

#[test]
fn debian_uses_aptitude() {
    let profile = OsProfile::lookup("debian", "bookworm").unwrap();

    assert_eq!(profile.name, OsFamily::Debian);
    assert_eq!(profile.update, "aptitude -qq update");
    assert_eq!(profile.upgrade, "aptitude full-upgrade -y");
    assert_eq!(profile.install, "aptitude install -y python-pip git");
}

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!("UBUNTU".parse::<OsFamily>().unwrap(), OsFamily::Ubuntu);
    assert_eq!("CentOS".parse::<OsFamily>().unwrap(), OsFamily::Centos);
    assert_eq!("dEbIaN".parse::<OsFamily>().unwrap(), OsFamily::Debian);
}

#[test]
fn unsupported_os_reports_lowercased_name() {
    let err = OsProfile::lookup("Alpine", "3.19").unwrap_err();

    assert!(err.is_usage());
    assert!(matches!(&err, Error::UnsupportedOs { os } if os == "alpine"));
    assert_eq!(err.to_string(), "No configuration for os 'alpine' available.");
}

#[test]
fn display_matches_canonical_name() {
    for family in OsFamily::ALL {
        assert_eq!(family.to_string(), family.name());
        assert_eq!(family.name().parse::<OsFamily>().unwrap(), family);
    }
}

fn any_casing(name: &'static str) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), name.len()).prop_map(move |upper| {
        name.chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

proptest! {
    #[test]
    fn every_casing_of_a_supported_os_resolves(
        (family, input) in prop_oneof![
            any_casing("ubuntu").prop_map(|s| (OsFamily::Ubuntu, s)),
            any_casing("centos").prop_map(|s| (OsFamily::Centos, s)),
            any_casing("debian").prop_map(|s| (OsFamily::Debian, s)),
        ]
    ) {
        let profile = OsProfile::lookup(&input, "latest").unwrap();
        prop_assert_eq!(profile.name, family);
        prop_assert_eq!(profile.update, family.commands().update);
        prop_assert_eq!(profile.upgrade, family.commands().upgrade);
        prop_assert_eq!(profile.install, family.commands().install);
    }

    #[test]
    fn anything_else_is_unsupported(input in "[a-zA-Z0-9_-]{0,12}") {
        prop_assume!(!["ubuntu", "centos", "debian"].contains(&input.to_lowercase().as_str()));
        let err = OsProfile::lookup(&input, "latest").unwrap_err();
        prop_assert!(err.is_usage());
        let is_unsupported = matches!(err, Error::UnsupportedOs { .. });
        prop_assert!(is_unsupported);
    }
}
