use remedial_timetable::utils::error::TimetableError;
use remedial_timetable::{CliConfig, LocalStorage, RemedialPipeline, TimetableEngine};
use std::io::Read;
use tempfile::TempDir;

const TIMETABLE: &str = "\
Semester 5 Timetable
Monday 10:00-11:00 AM DBMS (AB)
Tuesday 09:00-10:00 AM Operating Systems (CD)
Faculty
AB Alice Smith
CD Bob Jones
";

fn cli_config(input: Option<&str>, formats: &[&str], bundle: bool) -> CliConfig {
    CliConfig {
        input: input.map(str::to_string),
        base_dir: ".".to_string(),
        output_path: "out".to_string(),
        formats: formats.iter().map(|f| f.to_string()).collect(),
        faculty_header: "Faculty".to_string(),
        unassigned_label: "Not Assigned".to_string(),
        bundle,
        verbose: false,
        monitor: false,
        log_json: false,
    }
}

fn setup() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("timetable.txt"), TIMETABLE).unwrap();
    temp_dir
}

#[tokio::test]
async fn test_end_to_end_csv_and_text() {
    let temp_dir = setup();
    let storage = LocalStorage::new(temp_dir.path());
    let config = cli_config(Some("timetable.txt"), &["csv", "text"], false);

    let engine = TimetableEngine::new(RemedialPipeline::new(storage, config));
    let output = engine.run().await.unwrap();

    assert!(output.contains("remedial_timetable.csv"));
    assert!(output.contains("remedial_timetable.txt"));

    let csv = std::fs::read_to_string(temp_dir.path().join("out/remedial_timetable.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Day,Time Slot,Assigned Teacher");
    assert_eq!(lines[1], "Monday,09:00-10:00 AM,Alice Smith");
    assert_eq!(lines[2], "Monday,11:00-12:00 PM,Bob Jones");
    assert!(!csv.contains("Monday,10:00-11:00 AM"));
    assert!(!csv.contains("Tuesday,09:00-10:00 AM"));
    // Monday 8 + Tuesday 8, Wednesday to Saturday absent from the document.
    assert_eq!(lines.len(), 1 + 16);

    let text = std::fs::read_to_string(temp_dir.path().join("out/remedial_timetable.txt")).unwrap();
    assert!(text.contains("Remedial Timetable"));
    assert!(text.contains("Alice Smith"));
}

#[tokio::test]
async fn test_end_to_end_zip_bundle() {
    let temp_dir = setup();
    let storage = LocalStorage::new(temp_dir.path());
    let config = cli_config(Some("timetable.txt"), &["csv", "tsv", "json"], true);

    let pipeline = RemedialPipeline::new(storage, config);
    let engine = TimetableEngine::new_with_monitoring(pipeline, true);
    let output = engine.run().await.unwrap();
    assert!(output.ends_with("remedial_timetable.zip"));

    let zip_data = std::fs::read(temp_dir.path().join("out/remedial_timetable.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
    assert_eq!(archive.len(), 3);

    let mut json = String::new();
    archive
        .by_name("remedial_timetable.json")
        .unwrap()
        .read_to_string(&mut json)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["roster"]["AB"], "Alice Smith");
    assert_eq!(value["roster"]["CD"], "Bob Jones");
    assert_eq!(value["rows"][0]["teacher"], "Alice Smith");

    let mut tsv = String::new();
    archive
        .by_name("remedial_timetable.tsv")
        .unwrap()
        .read_to_string(&mut tsv)
        .unwrap();
    assert!(tsv.starts_with("Day\tTime Slot\tAssigned Teacher"));
}

#[tokio::test]
async fn test_missing_input_is_reported() {
    let temp_dir = TempDir::new().unwrap();

    let storage = LocalStorage::new(temp_dir.path());
    let engine = TimetableEngine::new(RemedialPipeline::new(
        storage,
        cli_config(None, &["csv"], false),
    ));
    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, TimetableError::MissingInputError { .. }));

    let storage = LocalStorage::new(temp_dir.path());
    let engine = TimetableEngine::new(RemedialPipeline::new(
        storage,
        cli_config(Some("nowhere.txt"), &["csv"], false),
    ));
    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, TimetableError::MissingInputError { .. }));

    assert!(!temp_dir.path().join("out").exists());
}

#[tokio::test]
async fn test_unassigned_label_without_faculty() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("timetable.txt"),
        "Saturday 09:00-10:00 AM Seminar\n",
    )
    .unwrap();

    let storage = LocalStorage::new(temp_dir.path());
    let mut config = cli_config(Some("timetable.txt"), &["csv"], false);
    config.unassigned_label = "TBD".to_string();

    TimetableEngine::new(RemedialPipeline::new(storage, config))
        .run()
        .await
        .unwrap();

    let csv = std::fs::read_to_string(temp_dir.path().join("out/remedial_timetable.csv")).unwrap();
    let rows: Vec<&str> = csv.lines().skip(1).collect();
    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|r| r.starts_with("Saturday,") && r.ends_with(",TBD")));
}
