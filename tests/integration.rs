use std::{fs, path::PathBuf, process::Command};

/// Replaces the `[DD/MM/YYYY HH:MM:SS]` stamp of each statement line, which depends on the wall clock
fn mask_timestamps(output: &str) -> String {
    output
        .lines()
        .map(|line| match (line.strip_prefix(" - ["), line.find(']')) {
            (Some(_), Some(end)) => format!(" - [TIMESTAMP]{}", &line[end + 1..]),
            _ => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn example_files() {
    let input_dir = PathBuf::from("./resources/test-examples/inputs");
    let expected_dir = PathBuf::from("./resources/test-examples/expected");

    // Running test for each file in input_dir
    let files_to_test = fs::read_dir(input_dir.clone()).unwrap().count();
    assert!(files_to_test > 0);

    for idx in 1..=files_to_test {
        let input_file = input_dir.join(format!("script_{idx}.csv"));
        let expected_file = expected_dir.join(format!("statements_{idx}.txt"));

        println!("Testing input: {input_file:?}");
        println!("Expected: {expected_file:?}");

        let output = Command::new(env!("CARGO_BIN_EXE_toy-retail-bank"))
            .arg(&input_file)
            .output()
            .unwrap();

        println!("{}", String::from_utf8(output.stderr).unwrap());
        assert!(output.status.success());

        let actual = mask_timestamps(&String::from_utf8(output.stdout).unwrap());
        let expected = fs::read_to_string(expected_file).unwrap();

        assert_eq!(actual.trim_end(), expected.trim_end());
    }
}

#[test]
fn fail_without_script_argument() {
    let output = Command::new(env!("CARGO_BIN_EXE_toy-retail-bank"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn fail_with_missing_script() {
    let output = Command::new(env!("CARGO_BIN_EXE_toy-retail-bank"))
        .arg("./resources/test-examples/inputs/does_not_exist.csv")
        .output()
        .unwrap();

    assert!(!output.status.success());
}
