//! End-to-end tests: dataset on disk → summary tables on disk
//!
//! Each test builds its own dataset and output directory in a tempdir.

#[cfg(test)]
mod report_pipeline_tests {
    use reelstats::report_core::LoadError;
    use reelstats::{run_report, ReportConfig, ReportError};
    use std::fs;
    use std::path::{Path, PathBuf};

    const HEADER: &str = "niche_category,hook_style,trending_sound_used,video_duration_seconds,views,likes,comments,shares,saves_or_favorites";

    fn write_dataset(dir: &Path, rows: &[&str]) -> PathBuf {
        let path = dir.join("posts.csv");
        let mut content = String::from(HEADER);
        content.push('\n');
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        fs::write(&path, content).unwrap();
        path
    }

    fn csv_config(dataset: PathBuf, output_dir: PathBuf) -> ReportConfig {
        let mut config = ReportConfig::new(dataset, output_dir);
        config.write_workbook = false;
        config
    }

    fn read(dir: &Path, name: &str) -> String {
        fs::read_to_string(dir.join(name)).unwrap()
    }

    #[test]
    fn test_two_row_dataset_tables() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dataset = write_dataset(
            temp_dir.path(),
            &[
                "travel,question,1,20,100,10,5,5,0",
                "travel,story,0,50,200,0,0,0,0",
            ],
        );
        let out = temp_dir.path().join("summary_tables");

        let summary = run_report(&csv_config(dataset, out.clone())).unwrap();

        assert_eq!(summary.rows_loaded, 2);
        assert_eq!(summary.csv_paths.len(), 5);
        assert!(summary.workbook_path.is_none());

        assert_eq!(
            read(&out, "hook_distribution.csv"),
            "hook_style,count,percent\r\nquestion,1,50.0\r\nstory,1,50.0\r\n"
        );
        assert_eq!(
            read(&out, "engagement_by_hook.csv"),
            "hook_style,avg_engagement_rate_no_saves_percent,avg_engagement_rate_with_saves_percent\r\n\
             question,20.0,20.0\r\n\
             story,0.0,0.0\r\n"
        );
        assert_eq!(
            read(&out, "duration_band_performance.csv"),
            "duration_band,count,avg_views,avg_engagement_rate_no_saves_percent,avg_engagement_rate_with_saves_percent\r\n\
             under_15,0,0.0,0.0,0.0\r\n\
             15_30,1,100.0,20.0,20.0\r\n\
             30_45,0,0.0,0.0,0.0\r\n\
             45_60,1,200.0,0.0,0.0\r\n\
             over_60,0,0.0,0.0,0.0\r\n"
        );
        assert_eq!(
            read(&out, "category_engagement.csv"),
            "niche_category,avg_engagement_rate_no_saves_percent,avg_engagement_rate_with_saves_percent\r\n\
             travel,10.0,10.0\r\n"
        );
        assert_eq!(
            read(&out, "trending_sound_lift.csv"),
            "group,count,avg_views\r\n\
             trending_sound_used=1,1,100.0\r\n\
             trending_sound_used=0,1,200.0\r\n\
             lift_percent,,-50.0\r\n"
        );
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dataset = write_dataset(
            temp_dir.path(),
            &[
                "food,pov,1,12.5,\"12,345\",800,40,12,95",
                "travel,question,0,31,9870,410,22,8,130",
                "travel,listicle,1,61,455,30,1,0,4",
                "fitness,pov,0,45,0,3,0,0,0",
                "food,story,1,59.9,2210.0,150,9,3,17",
            ],
        );
        let first_out = temp_dir.path().join("first");
        let second_out = temp_dir.path().join("second");

        let first = run_report(&csv_config(dataset.clone(), first_out.clone())).unwrap();
        run_report(&csv_config(dataset, second_out.clone())).unwrap();

        for path in &first.csv_paths {
            let name = path.file_name().unwrap();
            assert_eq!(
                fs::read(path).unwrap(),
                fs::read(second_out.join(name)).unwrap(),
                "{:?} differs between runs",
                name
            );
        }
    }

    #[test]
    fn test_hook_counts_sum_to_rows() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dataset = write_dataset(
            temp_dir.path(),
            &[
                "food,pov,1,10,100,1,1,1,1",
                "food,pov,0,10,100,1,1,1,1",
                "food,story,0,10,100,1,1,1,1",
            ],
        );
        let out = temp_dir.path().join("out");

        run_report(&csv_config(dataset, out.clone())).unwrap();

        let content = read(&out, "hook_distribution.csv");
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("hook_style,count,percent"));
        let total: i64 = lines
            .map(|line| line.split(',').nth(1).unwrap().parse::<i64>().unwrap())
            .sum();
        assert_eq!(total, 3);
        assert!(content.contains("pov,2,66.67\r\n"));
        assert!(content.contains("story,1,33.33\r\n"));
    }

    #[test]
    fn test_malformed_number_aborts_run() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dataset = write_dataset(
            temp_dir.path(),
            &["food,pov,1,10,100,1,1,1,1", "food,pov,1,10,n/a,1,1,1,1"],
        );
        let out = temp_dir.path().join("out");

        let err = run_report(&csv_config(dataset, out.clone())).unwrap_err();

        match err {
            ReportError::Load(LoadError::InvalidNumber { line, column, value }) => {
                assert_eq!(line, 3);
                assert_eq!(column, "views");
                assert_eq!(value, "n/a");
            }
            other => panic!("expected InvalidNumber, got {}", other),
        }
        assert!(!out.join("hook_distribution.csv").exists());
    }

    #[test]
    fn test_missing_dataset_aborts_run() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = csv_config(temp_dir.path().join("absent.csv"), temp_dir.path().join("out"));

        let err = run_report(&config).unwrap_err();
        assert!(matches!(err, ReportError::Load(LoadError::Io(_))));
    }

    #[cfg(feature = "xlsx")]
    #[test]
    fn test_workbook_written_alongside_csv() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dataset = write_dataset(temp_dir.path(), &["travel,question,1,20,100,10,5,5,0"]);
        let out = temp_dir.path().join("out");

        let summary = run_report(&ReportConfig::new(dataset, out.clone())).unwrap();

        let workbook = out.join("reproducible_summary_tables.xlsx");
        assert_eq!(summary.workbook_path, Some(workbook.clone()));
        assert!(workbook.exists());
        assert_eq!(summary.csv_paths.len(), 5);
    }

    #[cfg(not(feature = "xlsx"))]
    #[test]
    fn test_csv_written_when_workbook_unsupported() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dataset = write_dataset(temp_dir.path(), &["travel,question,1,20,100,10,5,5,0"]);
        let out = temp_dir.path().join("out");

        let summary = run_report(&ReportConfig::new(dataset, out.clone())).unwrap();

        assert!(summary.workbook_path.is_none());
        assert!(!out.join("reproducible_summary_tables.xlsx").exists());
        assert_eq!(summary.csv_paths.len(), 5);
        for path in &summary.csv_paths {
            assert!(path.exists(), "{} missing", path.display());
        }
    }

    #[test]
    fn test_huge_counts_report_without_overflow() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dataset = write_dataset(
            temp_dir.path(),
            &["travel,question,1,20,10,9e18,9e18,0,1e19"],
        );
        let out = temp_dir.path().join("out");

        let summary = run_report(&csv_config(dataset, out.clone())).unwrap();

        assert_eq!(summary.rows_loaded, 1);
        let content = read(&out, "engagement_by_hook.csv");
        let row = content.lines().nth(1).unwrap();
        assert!(row.starts_with("question,"));
        assert!(!row.contains('-'), "rate wrapped negative: {}", row);
        assert!(row.contains("e+"), "expected exponent form: {}", row);
    }
}
