use std::process::Command;

#[test]
fn prints_five_factorial() {
    let out = Command::new(env!("CARGO_BIN_EXE_factorial"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "120\n");
}

#[test]
fn logging_stays_off_stdout() {
    let out = Command::new(env!("CARGO_BIN_EXE_factorial"))
        .env("RUST_LOG", "debug")
        .output()
        .unwrap();

    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "120\n");
}
