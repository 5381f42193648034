use assert_cmd::cargo::cargo_bin_cmd;
use chrono::Local;
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

fn run_session(home: &Path, data_path: &Path, script: &str) -> Output {
    cargo_bin_cmd!("addrbook")
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("RUST_LOG")
        .args(["--data-path", data_path.to_str().expect("data path")])
        .write_stdin(script)
        .output()
        .expect("run command")
}

fn run_ok(home: &Path, data_path: &Path, script: &str) -> String {
    let output = run_session(home, data_path, script);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

#[test]
fn cli_contact_session_flow() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("addressbook.json");

    let stdout = run_ok(
        temp.path(),
        &data_path,
        "hello\n\
         add John 1234567890\n\
         add John 1234567890\n\
         change John 1234567890 0987654321\n\
         phone John\n\
         show-birthday John\n\
         add Jane 12\n\
         phone Jane\n\
         change John\n\
         dance\n\
         exit\n",
    );

    assert!(stdout.starts_with("Welcome to the assistant bot!"));
    assert!(stdout.contains("How can I help you?"));
    assert_eq!(stdout.matches("Contact added.").count(), 2);
    assert!(stdout.contains("Contact updated."));
    assert!(stdout.contains("0987654321, 1234567890"));
    assert!(stdout.contains("Name: John, birthday: not specified"));
    assert!(stdout.contains("must consist of exactly 10 digits"));
    assert!(stdout.contains("Contact not found."));
    assert!(stdout.contains("Enter all required arguments."));
    assert!(stdout.contains("Invalid command."));
    assert!(stdout.trim_end().ends_with("Good bye!"));
    assert!(data_path.exists());
}

#[test]
fn cli_persists_book_between_runs() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("addressbook.json");

    run_ok(
        temp.path(),
        &data_path,
        "add John 1234567890\nadd-birthday John 05.03.1990\nclose\n",
    );

    let stdout = run_ok(temp.path(), &data_path, "all\nEXIT\n");
    assert!(stdout.contains("Contact name: John, phones: 1234567890, birthday: 05.03.1990"));
}

#[test]
fn cli_saves_on_end_of_input() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("addressbook.json");

    let stdout = run_ok(temp.path(), &data_path, "add Ann 1111111111\n");
    assert!(stdout.contains("Good bye!"));

    let stdout = run_ok(temp.path(), &data_path, "phone Ann\nexit\n");
    assert!(stdout.contains("1111111111"));
}

#[test]
fn cli_lists_birthday_happening_today() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("addressbook.json");
    let today = Local::now().date_naive().format("%d.%m").to_string();

    let stdout = run_ok(
        temp.path(),
        &data_path,
        &format!(
            "birthdays\nadd Ann 1111111111\nadd-birthday Ann {today}.2000\nbirthdays\nexit\n"
        ),
    );
    assert!(stdout.contains("No birthdays in the next 7 days."));
    let expected = format!("Name: Ann, birthday: {today}.2000, congratulation date: ");
    assert!(stdout.contains(&expected));
}

#[test]
fn cli_rejects_corrupt_data_file() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("addressbook.json");
    fs::write(&data_path, "not json").expect("write");

    let output = run_session(temp.path(), &data_path, "exit\n");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("error: load address book"));
    assert_eq!(fs::read_to_string(&data_path).expect("read"), "not json");
}

#[test]
fn cli_requires_explicit_config_file() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("addressbook.json");

    let output = cargo_bin_cmd!("addrbook")
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .args([
            "--data-path",
            data_path.to_str().expect("data path"),
            "--config",
            temp.path().join("missing.toml").to_str().expect("config path"),
        ])
        .write_stdin("exit\n")
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
    assert!(!data_path.exists());
}

#[test]
fn cli_applies_config_file_settings() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("from-config.json");
    let config_path = temp.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "data_path = \"{}\"\nbirthday_window_days = 0\n",
            data_path.display()
        ),
    )
    .expect("write config");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&config_path, fs::Permissions::from_mode(0o600)).expect("chmod");
    }
    let tomorrow = Local::now()
        .date_naive()
        .succ_opt()
        .expect("tomorrow")
        .format("%d.%m")
        .to_string();

    let output = cargo_bin_cmd!("addrbook")
        .env("XDG_DATA_HOME", temp.path().join("data"))
        .env_remove("RUST_LOG")
        .args(["--config", config_path.to_str().expect("config path")])
        .write_stdin(format!(
            "add Ann 1111111111\nadd-birthday Ann {tomorrow}.2000\nbirthdays\nexit\n"
        ))
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("No birthdays in the next 0 days."));
    assert!(!stdout.contains("congratulation date"));
    assert!(data_path.exists());
}
