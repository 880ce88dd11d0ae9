use std::ffi::OsStr;
use std::fs;
use std::process::{Command, Output};

use custom_mining_revenue::{write_score_file, ScoreFile, SCORE_FILE_LEN};

fn run<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_custom-mining-revenue"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run binary")
}

#[test]
fn test_successful_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("custom_mining.bin");
    let output = dir.path().join("custom_mining.csv");

    let mut scores = ScoreFile::default();
    scores.old_final_scores[0] = 1;
    scores.custom_mining_scores[0] = 2;
    scores.old_final_scores[42] = u64::MAX;
    scores.custom_mining_scores[42] = 2;
    write_score_file(&input, &scores).unwrap();

    let result = run(&[&input, &output]);
    assert_eq!(result.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("written successfully"));

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("Index,OldFinalScore,CustomMiningScore,NewScore\r\n0,1,2,2\r\n"));
    assert!(text.ends_with("675,0,0,0\r\n"));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 677);
    assert_eq!(lines[0], "Index,OldFinalScore,CustomMiningScore,NewScore");
    assert_eq!(lines[1], "0,1,2,2");
    assert_eq!(lines[43], "42,18446744073709551615,2,18446744073709551614");
}

#[test]
fn test_wrong_argument_count() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("only_one.bin");

    let result = run(&[&input]);
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Usage"));

    let result = run::<&str>(&[]);
    assert_eq!(result.status.code(), Some(1));
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.bin");
    let output = dir.path().join("out.csv");

    let result = run(&[&input, &output]);
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Cannot open file"));
    assert!(!output.exists());
}

#[test]
fn test_truncated_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("short.bin");
    let output = dir.path().join("out.csv");
    fs::write(&input, vec![7u8; SCORE_FILE_LEN - 3]).unwrap();

    let result = run(&[&input, &output]);
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Unexpected end of file"));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scores.bin");
    write_score_file(&input, &ScoreFile::default()).unwrap();
    let output = dir.path().join("missing_dir").join("out.csv");

    let result = run(&[&input, &output]);
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Error writing file"));
}

#[test]
fn test_trailing_bytes_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let exact = dir.path().join("exact.bin");
    let padded = dir.path().join("padded.bin");

    let mut scores = ScoreFile::default();
    for (i, slot) in scores.custom_mining_scores.iter_mut().enumerate() {
        *slot = i as u64;
    }
    scores.old_final_scores = [3; 676];
    write_score_file(&exact, &scores).unwrap();
    let mut bytes = fs::read(&exact).unwrap();
    bytes.extend_from_slice(b"trailing garbage");
    fs::write(&padded, bytes).unwrap();

    let out_exact = dir.path().join("exact.csv");
    let out_padded = dir.path().join("padded.csv");
    assert_eq!(run(&[&exact, &out_exact]).status.code(), Some(0));
    assert_eq!(run(&[&padded, &out_padded]).status.code(), Some(0));
    assert_eq!(
        fs::read(&out_exact).unwrap(),
        fs::read(&out_padded).unwrap()
    );
}
