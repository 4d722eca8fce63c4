use lowball_cli::run;
use serial_test::serial;
use std::io::Write;

const KEYS: [&str; 5] = [
    "LOWBALL_CONFIG",
    "LOWBALL_SEED",
    "LOWBALL_SEATS",
    "LOWBALL_STACK",
    "LOWBALL_AI",
];

fn clear_env() {
    for key in KEYS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn cfg_json() -> serde_json::Value {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["lowball", "cfg"], &mut out, &mut err);
    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));
    serde_json::from_slice(&out).unwrap()
}

#[test]
#[serial]
fn file_values_override_defaults() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seats = 6\nstarting_stack = 300\ncap = 3").unwrap();
    unsafe {
        std::env::set_var("LOWBALL_CONFIG", file.path());
    }

    let json = cfg_json();
    clear_env();
    assert_eq!(json["seats"]["value"], 6);
    assert_eq!(json["seats"]["source"], "file");
    assert_eq!(json["starting_stack"]["value"], 300);
    assert_eq!(json["cap"]["value"], 3);
    assert_eq!(json["big_blind"]["source"], "default");
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seats = 6\nai = \"station\"").unwrap();
    unsafe {
        std::env::set_var("LOWBALL_CONFIG", file.path());
        std::env::set_var("LOWBALL_SEATS", "3");
    }

    let json = cfg_json();
    clear_env();
    assert_eq!(json["seats"]["value"], 3);
    assert_eq!(json["seats"]["source"], "env");
    assert_eq!(json["ai"]["value"], "station");
    assert_eq!(json["ai"]["source"], "file");
}

#[test]
#[serial]
fn cli_flags_override_env() {
    clear_env();
    unsafe {
        std::env::set_var("LOWBALL_SEED", "1");
    }
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["lowball", "deal", "--seed", "99"], &mut out, &mut err);
    clear_env();
    assert_eq!(code, 0);
    assert!(String::from_utf8_lossy(&out).contains("Seed: 99"));
}

#[test]
#[serial]
fn malformed_file_is_reported() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seats = \"many\"").unwrap();
    unsafe {
        std::env::set_var("LOWBALL_CONFIG", file.path());
    }
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["lowball", "cfg"], &mut out, &mut err);
    clear_env();
    assert_eq!(code, 2);
    assert!(String::from_utf8_lossy(&err).contains("cannot parse config file"));
}

#[test]
#[serial]
fn invalid_table_settings_are_rejected() {
    clear_env();
    unsafe {
        std::env::set_var("LOWBALL_STACK", "1");
    }
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["lowball", "cfg"], &mut out, &mut err);
    clear_env();
    assert_eq!(code, 2);
    assert!(String::from_utf8_lossy(&err).contains("Invalid configuration"));
}
