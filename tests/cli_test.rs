use std::process::{Command, Output};

fn shamir_share(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shamir-share"))
        .args(args)
        .output()
        .expect("failed to run shamir-share")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_prints_shares_and_public_key() {
    let output = shamir_share(&["3", "2", "1"]);
    assert!(output.status.success());
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Shares:");
    for (i, line) in lines[1..4].iter().enumerate() {
        assert!(line.starts_with(&format!("({}, ", i + 1)), "{}", line);
        assert!(line.ends_with(')'));
    }
    assert_eq!(lines[4], "Secret Public Key:");
    assert_eq!(
        lines[5],
        "(28180968562641497067278236429211977508043174361740661643726011666495902464602, \
         71059786474789917358912012681919876999588411700471748715771920653989729645170)"
    );
}

#[test]
fn test_zero_secret_has_identity_public_key() {
    let output = shamir_share(&["3", "2", "0", "secp256r1"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(text.lines().last(), Some("Infinity"));
}

#[test]
fn test_unknown_curve() {
    let output = shamir_share(&["3", "2", "1", "bogus"]);
    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Unknown curve name: bogus");
    let mut known: Vec<&str> = lines[2..].iter().map(|line| line.trim()).collect();
    known.sort();
    assert_eq!(known, vec!["secp192r1", "secp256r1", "secp521r1"]);
}

#[test]
fn test_missing_arguments_fail() {
    let output = shamir_share(&["3", "2"]);
    assert!(!output.status.success());
    let usage = String::from_utf8_lossy(&output.stderr);
    assert!(usage.contains("USAGE"), "{}", usage);
}

#[test]
fn test_invalid_numbers_fail() {
    for args in [["3", "0", "1"], ["0", "2", "1"], ["3", "2", "-1"], ["3", "two", "1"]] {
        let output = shamir_share(&args);
        assert_eq!(output.status.code(), Some(1), "{:?}", args);
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: "));
    }
}

#[test]
fn test_json_with_commitments() {
    let output = shamir_share(&["--json", "--feldman", "4", "3", "1", "secp192r1"]);
    assert!(output.status.success());
    let document: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(document["curve"], "secp192r1");
    assert_eq!(document["threshold"], 3);
    assert_eq!(document["shares"].as_array().unwrap().len(), 4);
    assert_eq!(document["shares"][3]["index"], 4);
    assert_eq!(
        document["public_key"]["x"],
        "602046282375688656758213480587526111916698976636884684818"
    );
    assert_eq!(document["commitments"].as_array().unwrap().len(), 3);
    assert_eq!(document["commitments"][0], document["public_key"]);
}

#[test]
fn test_check_flag() {
    let output = shamir_share(&["--check", "2", "2", "5", "secp521r1"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Shares:\n(1, "));
}
