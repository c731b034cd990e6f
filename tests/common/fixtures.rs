//! Static journal fixtures used across harnesses.
//!
//! `JOURNAL_ENTRY_JSON` is a root console login as exported by
//! `journalctl -o json`; the `expected_*` functions give the record each
//! option set must turn it into.

use jmut_core::Record;

/// Field map routing `_PID` to two targets and merging three sources.
pub const FIELD_MAP_JSON: &str =
    r#"{"_PID":["msg","_PID"],"MESSAGE":"msg","_COMM":"_EXE","_CMDLINE":"command"}"#;

pub fn field_map() -> serde_json::Value {
    serde_json::from_str(FIELD_MAP_JSON).expect("fixture field map is valid JSON")
}

pub const JOURNAL_ENTRY_JSON: &str = concat!(
    r#"{"__CURSOR":"s=a1b2c3;i=2a;b=4737ffc504774b3ba67020bc947f1bc0;m=1f2e3d;t=4d8f2a0c1b7a2;x=9f8e7d","#,
    r#""__REALTIME_TIMESTAMP":"1364519243563178","__MONOTONIC_TIMESTAMP":"2043453","#,
    r#""_UID":"0","_GID":"0","_BOOT_ID":"4737ffc504774b3ba67020bc947f1bc0","#,
    r#""_MACHINE_ID":"bb9d0a52a41243829ecd729b40ac0bce","_HOSTNAME":"arch","PRIORITY":"5","#,
    r#""_TRANSPORT":"syslog","SYSLOG_FACILITY":"10","SYSLOG_IDENTIFIER":"login","_PID":"141","#,
    r#""_COMM":"login","_EXE":"/bin/login","_AUDIT_SESSION":"1","_AUDIT_LOGINUID":"0","#,
    r#""MESSAGE":"ROOT LOGIN ON tty1","_CMDLINE":"login -- root      ","#,
    r#""_SYSTEMD_CGROUP":"/user/root/1","_SYSTEMD_SESSION":"1","_SYSTEMD_OWNER_UID":"0","#,
    r#""_SOURCE_REALTIME_TIMESTAMP":"1364519243563178"}"#,
);

fn record(pairs: &[(&str, &str)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn expected_no_transform() -> Record {
    record(&[
        ("_UID", "0"),
        ("_GID", "0"),
        ("_BOOT_ID", "4737ffc504774b3ba67020bc947f1bc0"),
        ("_MACHINE_ID", "bb9d0a52a41243829ecd729b40ac0bce"),
        ("_HOSTNAME", "arch"),
        ("PRIORITY", "5"),
        ("_TRANSPORT", "syslog"),
        ("SYSLOG_FACILITY", "10"),
        ("SYSLOG_IDENTIFIER", "login"),
        ("_PID", "141"),
        ("_COMM", "login"),
        ("_EXE", "/bin/login"),
        ("_AUDIT_SESSION", "1"),
        ("_AUDIT_LOGINUID", "0"),
        ("MESSAGE", "ROOT LOGIN ON tty1"),
        ("_CMDLINE", "login -- root      "),
        ("_SYSTEMD_CGROUP", "/user/root/1"),
        ("_SYSTEMD_SESSION", "1"),
        ("_SYSTEMD_OWNER_UID", "0"),
        ("_SOURCE_REALTIME_TIMESTAMP", "1364519243563178"),
    ])
}

pub fn expected_strip_underscores() -> Record {
    record(&[
        ("UID", "0"),
        ("GID", "0"),
        ("BOOT_ID", "4737ffc504774b3ba67020bc947f1bc0"),
        ("MACHINE_ID", "bb9d0a52a41243829ecd729b40ac0bce"),
        ("HOSTNAME", "arch"),
        ("PRIORITY", "5"),
        ("TRANSPORT", "syslog"),
        ("SYSLOG_FACILITY", "10"),
        ("SYSLOG_IDENTIFIER", "login"),
        ("PID", "141"),
        ("COMM", "login"),
        ("EXE", "/bin/login"),
        ("AUDIT_SESSION", "1"),
        ("AUDIT_LOGINUID", "0"),
        ("MESSAGE", "ROOT LOGIN ON tty1"),
        ("CMDLINE", "login -- root      "),
        ("SYSTEMD_CGROUP", "/user/root/1"),
        ("SYSTEMD_SESSION", "1"),
        ("SYSTEMD_OWNER_UID", "0"),
        ("SOURCE_REALTIME_TIMESTAMP", "1364519243563178"),
    ])
}

pub fn expected_lowercase() -> Record {
    record(&[
        ("_uid", "0"),
        ("_gid", "0"),
        ("_boot_id", "4737ffc504774b3ba67020bc947f1bc0"),
        ("_machine_id", "bb9d0a52a41243829ecd729b40ac0bce"),
        ("_hostname", "arch"),
        ("priority", "5"),
        ("_transport", "syslog"),
        ("syslog_facility", "10"),
        ("syslog_identifier", "login"),
        ("_pid", "141"),
        ("_comm", "login"),
        ("_exe", "/bin/login"),
        ("_audit_session", "1"),
        ("_audit_loginuid", "0"),
        ("message", "ROOT LOGIN ON tty1"),
        ("_cmdline", "login -- root      "),
        ("_systemd_cgroup", "/user/root/1"),
        ("_systemd_session", "1"),
        ("_systemd_owner_uid", "0"),
        ("_source_realtime_timestamp", "1364519243563178"),
    ])
}

pub fn expected_field_map() -> Record {
    record(&[
        ("_UID", "0"),
        ("_GID", "0"),
        ("_BOOT_ID", "4737ffc504774b3ba67020bc947f1bc0"),
        ("_MACHINE_ID", "bb9d0a52a41243829ecd729b40ac0bce"),
        ("_HOSTNAME", "arch"),
        ("PRIORITY", "5"),
        ("_TRANSPORT", "syslog"),
        ("SYSLOG_FACILITY", "10"),
        ("SYSLOG_IDENTIFIER", "login"),
        ("_PID", "141"),
        ("_EXE", "/bin/login login"),
        ("_AUDIT_SESSION", "1"),
        ("_AUDIT_LOGINUID", "0"),
        ("msg", "141 ROOT LOGIN ON tty1"),
        ("command", "login -- root      "),
        ("_SYSTEMD_CGROUP", "/user/root/1"),
        ("_SYSTEMD_SESSION", "1"),
        ("_SYSTEMD_OWNER_UID", "0"),
        ("_SOURCE_REALTIME_TIMESTAMP", "1364519243563178"),
    ])
}

pub fn expected_field_map_strict() -> Record {
    record(&[
        ("_PID", "141"),
        ("_EXE", "login"),
        ("msg", "141 ROOT LOGIN ON tty1"),
        ("command", "login -- root      "),
    ])
}
