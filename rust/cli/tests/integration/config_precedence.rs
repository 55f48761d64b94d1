use crate::helpers::cli_runner::CliRunner;
use crate::helpers::fixtures::write_plain;

fn first_lines(path: &std::path::Path) -> (String, String) {
    let text = std::fs::read_to_string(path).expect("read output");
    let mut lines = text.lines();
    (
        lines.next().unwrap_or_default().to_string(),
        lines.next().unwrap_or_default().to_string(),
    )
}

#[test]
fn i1_env_overrides_labels() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_plain(dir.path(), "log.json");
    let output = dir.path().join("hands.txt");

    let res = CliRunner::new().run_with_env(
        &[
            input.to_string_lossy().as_ref(),
            output.to_string_lossy().as_ref(),
            "Hero Name",
        ],
        &[
            ("NOWSTARS_SITE_NAME", "PokerStars"),
            ("NOWSTARS_TABLE_SIZE", "6"),
            ("NOWSTARS_TZ_LABEL", "UTC"),
        ],
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let (header, table) = first_lines(&output);
    assert!(header.starts_with("PokerStars Hand #"));
    assert!(header.ends_with("($0.50/$1.00 USD) - 2023/11/14 22:13:20 UTC"));
    assert_eq!(table, "Table 'PokerNow pglXyz' 6-max Seat #1 is the button");
}

#[test]
fn i2_flag_file_then_env() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_plain(dir.path(), "log.json");
    let output = dir.path().join("hands.txt");
    let cfg = dir.path().join("nowstars.toml");
    std::fs::write(
        &cfg,
        "table_prefix = \"Home\"\ncurrency = \"EUR\"\ntable_size = 8\n",
    )
    .expect("write config");

    let res = CliRunner::new().run_with_env(
        &[
            input.to_string_lossy().as_ref(),
            output.to_string_lossy().as_ref(),
            "Hero Name",
            "--config",
            cfg.to_string_lossy().as_ref(),
        ],
        &[("NOWSTARS_TABLE_SIZE", "4")],
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let (header, table) = first_lines(&output);
    assert!(header.contains("($0.50/$1.00 EUR)"));
    assert_eq!(table, "Table 'Home pglXyz' 4-max Seat #1 is the button");
}

#[test]
fn i3_config_path_from_env() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_plain(dir.path(), "log.json");
    let output = dir.path().join("hands.txt");
    let cfg = dir.path().join("env.toml");
    std::fs::write(&cfg, "site_name = \"Archive\"\n").expect("write config");

    let res = CliRunner::new().run_with_env(
        &[
            input.to_string_lossy().as_ref(),
            output.to_string_lossy().as_ref(),
            "Hero Name",
        ],
        &[("NOWSTARS_CONFIG", cfg.to_string_lossy().as_ref())],
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let (header, _) = first_lines(&output);
    assert!(header.starts_with("Archive Hand #"));
}

#[test]
fn i4_invalid_config_is_rejected_before_writing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_plain(dir.path(), "log.json");
    let output = dir.path().join("hands.txt");

    let res = CliRunner::new().run_with_env(
        &[
            input.to_string_lossy().as_ref(),
            output.to_string_lossy().as_ref(),
            "Hero Name",
        ],
        &[("NOWSTARS_TABLE_SIZE", "42")],
    );
    assert_eq!(res.exit_code, 2);
    assert!(
        res.stderr
            .starts_with("Error: Configuration error: Invalid configuration: table_size"),
        "stderr={}",
        res.stderr
    );
    assert!(!output.exists());

    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "table_size = \"nine\"\n").expect("write config");
    let res = CliRunner::new().run(&[
        input.to_string_lossy().as_ref(),
        output.to_string_lossy().as_ref(),
        "Hero Name",
        "--config",
        bad.to_string_lossy().as_ref(),
    ]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot parse config file"));
}
