use crate::helpers::cli_runner::CliRunner;
use crate::helpers::fixtures::{expected_transcript, write_plain};

#[test]
fn a1_converts_sample_log() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_plain(dir.path(), "poker_now_log.json");
    let output = dir.path().join("hands.txt");
    let output_str = output.to_string_lossy().into_owned();

    let res = CliRunner::new().run(&[input.to_string_lossy().as_ref(), &output_str, "Hero Name"]);

    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert_eq!(
        res.stdout,
        format!("Conversion complete. 2 hands written to {}\n", output_str)
    );
    let text = std::fs::read_to_string(&output).expect("read output");
    assert_eq!(text, expected_transcript("Hero Name"));
}

#[test]
fn a2_transcript_key_lines() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_plain(dir.path(), "log.json");
    let output = dir.path().join("hands.txt");

    let res = CliRunner::new().run(&[
        input.to_string_lossy().as_ref(),
        output.to_string_lossy().as_ref(),
        "Hero Name",
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let text = std::fs::read_to_string(&output).expect("read output");
    for needle in [
        "Table 'PokerNow pglXyz' 9-max Seat #1 is the button\n",
        "Seat 1: Hero Name ($100.00 in chips) \n",
        "Dealt to Hero Name [Qs Qh]\n",
        "Hero Name: raises $2.00 to $3.00 \n",
        "Hero Name collected $4.50 from pot\nHero Name: doesn't show hand \n",
        "Table 'PokerNow pglXyz' 9-max Seat #2 is the button\n",
        "*** RIVER *** [2h 7d Kc 9s] [4c]\n",
        "*** SHOW DOWN ***\n",
        "Hero Name: shows [Qs Qh] (Pair, Q's)\n",
        "Total pot $6.50 | Rake $0.50 \n",
    ] {
        assert!(text.contains(needle), "missing {:?} in:\n{}", needle, text);
    }
    assert_eq!(text.matches("*** SUMMARY ***").count(), 2);
}

#[test]
fn a3_wrong_arity_prints_usage() {
    let cli = CliRunner::new();
    for args in [&["only.json"][..], &["a.json", "b.txt"][..], &["a", "b", "c", "d"][..]] {
        let res = cli.run(args);
        assert_eq!(res.exit_code, 2);
        assert!(res.stdout.is_empty());
        assert!(
            res.stderr
                .contains("Usage: nowstars input.json output.txt \"Hero Name\""),
            "stderr={}",
            res.stderr
        );
    }
}

#[test]
fn a4_help_and_version_on_stdout() {
    let cli = CliRunner::new();
    let help = cli.run(&["--help"]);
    assert_eq!(help.exit_code, 0);
    assert!(help.stdout.contains("Usage"));
    assert!(help.stdout.contains("--config"));

    let version = cli.run(&["--version"]);
    assert_eq!(version.exit_code, 0);
    assert!(version.stdout.starts_with("nowstars "));
}

#[test]
fn a5_logging_stays_off_stdout_and_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_plain(dir.path(), "log.json");
    let output = dir.path().join("hands.txt");

    let res = CliRunner::new().run_with_env(
        &[
            input.to_string_lossy().as_ref(),
            output.to_string_lossy().as_ref(),
            "Hero Name",
        ],
        &[("RUST_LOG", "debug")],
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("wrote hand histories"));
    assert!(res.stdout.starts_with("Conversion complete."));
    let text = std::fs::read_to_string(&output).expect("read output");
    assert_eq!(text, expected_transcript("Hero Name"));
}
