use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

/// `dctf` with a deterministic, instant provider and an isolated config lookup.
fn cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dctf").unwrap();
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("DCTF_LOG")
        .env_remove("DCTF_CERT_PASSWORD")
        .args(["--delay-ms", "0", "--seed", "7"])
        .args(["--progress", "off", "--color", "never"]);
    cmd
}

fn write_cert(dir: &Path, name: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, b"\x30\x82\x05\x5c\x02\x01\x03").unwrap();
    path.display().to_string()
}

#[test]
fn version_flag() {
    let home = tempfile::tempdir().unwrap();
    cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("dctf"));
}

#[test]
fn empty_stdin_ends_session_cleanly() {
    let home = tempfile::tempdir().unwrap();
    cmd(home.path()).write_stdin("").assert().success();
}

#[test]
fn full_session_from_stdin() {
    let home = tempfile::tempdir().unwrap();
    let cert = write_cert(home.path(), "escritorio.pfx");
    let out_dir = home.path().join("exports");

    let script = format!(
        "certificate register --file {cert} --password segredo\n\
         company add --name \"Padaria Pão Quente\" --cnpj 45997418000153\n\
         company add --name \"Silva & Souza\" --cnpj 11222333000181\n\
         query\n\
         results\n\
         export --dir {}\n\
         exit\n",
        out_dir.display()
    );

    cmd(home.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Certificate registered: escritorio.pfx"))
        .stdout(contains("Company Padaria Pão Quente added at position 0."))
        .stdout(contains("Query finished: 2 companies checked."))
        .stdout(contains("Não verificado: 0"))
        .stdout(contains("Exported 2 companies to"));

    let files = std::fs::read_dir(&out_dir).unwrap().collect::<Vec<_>>();
    assert_eq!(files.len(), 1);
    let csv = std::fs::read_to_string(files[0].as_ref().unwrap().path()).unwrap();
    assert!(csv.starts_with("nome,cnpj,status,ultima_verificacao\n"));
    assert!(csv.contains("Padaria Pão Quente,45997418000153,"));
}

#[test]
fn failed_commands_do_not_end_the_session() {
    let home = tempfile::tempdir().unwrap();

    cmd(home.path())
        .write_stdin(
            "query\n\
             company add --name Alfa --cnpj 1\n\
             company add --name Outra --cnpj 1\n\
             company list\n",
        )
        .assert()
        .success()
        .stderr(contains("line 1: error: Nothing to do: no certificate registered"))
        .stderr(contains("line 3: error: CNPJ 1 is already registered"))
        .stdout(contains("Alfa"))
        .stdout(contains("Outra").not());
}

#[test]
fn pem_certificate_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    let cert = write_cert(home.path(), "cert.pem");

    cmd(home.path())
        .write_stdin(format!(
            "certificate register --file {cert} --password x\nstatus\n"
        ))
        .assert()
        .success()
        .stderr(contains("expected a .pfx or .p12 file"))
        .stdout(contains("Certificate: not registered"));
}

#[test]
fn password_can_come_from_environment() {
    let home = tempfile::tempdir().unwrap();
    let cert = write_cert(home.path(), "a1.p12");

    cmd(home.path())
        .env("DCTF_CERT_PASSWORD", "segredo")
        .write_stdin(format!("certificate register --file {cert}\nstatus\n"))
        .assert()
        .success()
        .stdout(contains("Certificate: registered (a1.p12)"));
}

#[test]
fn script_file_and_output_dir_flag() {
    let home = tempfile::tempdir().unwrap();
    let out_dir = home.path().join("relatorios");
    let script = home.path().join("session.txt");
    std::fs::write(
        &script,
        "# companies only, no query\ncompany add --name Alfa --cnpj 11111111000111\nexport\n",
    )
    .unwrap();

    cmd(home.path())
        .arg("--output-dir")
        .arg(&out_dir)
        .arg("--script")
        .arg(&script)
        .assert()
        .success();

    let csv_path = std::fs::read_dir(&out_dir)
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    let csv = std::fs::read_to_string(csv_path).unwrap();
    assert!(csv.contains("Alfa,11111111000111,Não verificado,"));
}

#[test]
fn missing_script_file_is_fatal() {
    let home = tempfile::tempdir().unwrap();

    cmd(home.path())
        .args(["--script", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(contains("dctf error: failed to open script"));
}

#[test]
fn json_format_emits_documents() {
    let home = tempfile::tempdir().unwrap();

    let output = cmd(home.path())
        .args(["--format", "raw"])
        .write_stdin("company add --name Alfa --cnpj 1\nresults\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let docs = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect::<Vec<serde_json::Value>>();
    assert_eq!(docs[0]["name"], "Alfa");
    assert_eq!(docs[1]["summary"]["unverified"], 1);
    assert_eq!(docs[1]["summary"]["total"], 1);
}

#[test]
fn config_file_in_working_directory_is_honored() {
    let home = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(home.path().join(".dctf")).unwrap();
    std::fs::write(
        home.path().join(".dctf/config.toml"),
        "[export]\nfile_prefix = \"entregas\"\noutput_dir = \"saida\"\n",
    )
    .unwrap();

    cmd(home.path())
        .write_stdin("company add --name Alfa --cnpj 1\nexport\n")
        .assert()
        .success();

    let name = std::fs::read_dir(home.path().join("saida"))
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .file_name()
        .into_string()
        .unwrap();
    assert!(name.starts_with("entregas_"));
}

#[test]
fn quiet_flag_keeps_stdout_empty_for_mutations() {
    let home = tempfile::tempdir().unwrap();

    cmd(home.path())
        .arg("--quiet")
        .write_stdin("company add --name Alfa --cnpj 1\ncompany add --name Beta --cnpj 2\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
