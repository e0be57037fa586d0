use std::io::Write;
use std::process::{Command, Output};

use indoc::indoc;

const LDSGEN_CMD: &str = env!("CARGO_BIN_EXE_ldsgen");

fn ldsgen(args: &[&str]) -> Output {
    Command::new(LDSGEN_CMD)
        .args(args)
        .output()
        .expect("Failed to execute ldsgen")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect()
}

mod sample {
    use super::*;

    #[test]
    fn halton_csv() {
        let output = ldsgen(&["sample", "halton", "--bases", "2,3", "-n", "2"]);
        assert!(output.status.success());
        assert_eq!(
            stdout_lines(&output),
            vec!["0.5,0.3333333333333333", "0.25,0.6666666666666666"]
        );
    }

    #[test]
    fn seed_offsets_the_output() {
        let output = ldsgen(&[
            "sample",
            "vd_corput",
            "--bases",
            "2",
            "--seed",
            "2",
            "-n",
            "2",
        ]);
        assert!(output.status.success());
        assert_eq!(stdout_lines(&output), vec!["0.75", "0.125"]);
    }

    #[test]
    fn vd_corput_json() {
        let output = ldsgen(&[
            "sample",
            "vd_corput",
            "--bases",
            "2",
            "-n",
            "3",
            "--format",
            "json",
        ]);
        assert!(output.status.success());
        let rows: Vec<Vec<f64>> =
            serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(rows, vec![vec![0.5], vec![0.25], vec![0.75]]);
    }

    #[test]
    fn halton_i_prints_integers() {
        let output = ldsgen(&[
            "sample",
            "halton_i",
            "--bases",
            "2,3",
            "--scales",
            "11,7",
            "-n",
            "1",
        ]);
        assert!(output.status.success());
        assert_eq!(stdout_lines(&output), vec!["1024,729"]);
    }

    #[test]
    fn sphere_n_rows_have_one_more_coordinate_than_bases() {
        let output =
            ldsgen(&["sample", "sphere_n", "--bases", "2,3,5,7", "-n", "5"]);
        assert!(output.status.success());
        let lines = stdout_lines(&output);
        assert_eq!(lines.len(), 5);
        for line in lines {
            assert_eq!(line.split(',').count(), 5);
        }
    }

    #[test]
    fn from_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            indoc!(
                "
                kind: vd_corput
                bases: [2]
                seed: 4
                "
            )
            .as_bytes(),
        )
        .unwrap();

        let path = file.path().to_str().unwrap();
        let output = ldsgen(&["sample", "--config", path, "-n", "2"]);
        assert!(output.status.success());
        assert_eq!(stdout_lines(&output), vec!["0.625", "0.375"]);
    }

    #[test]
    fn bad_config_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"kind: torus\nbases: [2]\n").unwrap();

        let path = file.path().to_str().unwrap();
        let output = ldsgen(&["sample", "--config", path]);
        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Could not load config"));
    }

    #[test]
    fn too_few_bases_fails() {
        let output = ldsgen(&["sample", "disk", "--bases", "2"]);
        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("expected at least 2 bases, got 1"));
    }

    #[test]
    fn base_one_fails() {
        let output = ldsgen(&["sample", "vd_corput", "--bases", "1"]);
        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("base must be at least 2, got 1"));
    }

    #[test]
    fn kind_and_config_conflict() {
        let output = ldsgen(&[
            "sample",
            "halton",
            "--bases",
            "2,3",
            "--config",
            "ldsgen.yaml",
        ]);
        assert!(!output.status.success());
    }
}

mod table {
    use super::*;

    #[test]
    fn angle_grid() {
        let output = ldsgen(&["table", "0"]);
        assert!(output.status.success());
        let lines = stdout_lines(&output);
        assert_eq!(lines.len(), ldsgen::table::N_POINTS);
        assert_eq!(lines[0], "0.0,0.0");
        for line in lines {
            let cols: Vec<&str> = line.split(',').collect();
            assert_eq!(cols.len(), 2);
            assert_eq!(cols[0], cols[1]);
        }
    }

    #[test]
    fn negative_dimension_fails() {
        let output = ldsgen(&["table", "-1"]);
        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("dimension must be non-negative, got -1"));
    }
}
