use std::fs;
use tempfile::TempDir;
use virtual_coach::coach::{BeginnerOrdering, PLAN_DAYS};
use virtual_coach::intake::{load_intake, UnknownFaultPolicy};
use virtual_coach::model::{DrillId, Fault, Level, Trend};
use virtual_coach::report::writer::{PLAN_FILE, REPORT_FILE};
use virtual_coach::source::{DemoSource, ListSource};
use virtual_coach::validation::validate_report;
use virtual_coach::{compute_confidence, prescribe, ReportConfig, ReportPipeline};

#[test]
fn test_default_prescription_scenario() {
    let rx = prescribe(&[], Level::Intermediate, false);

    assert_eq!(rx.len(), 2);
    assert_eq!(rx[0].fault, Fault::LateHips);
    assert_eq!(rx[0].drill.id, DrillId::HipEarlyStart);
    assert_eq!(rx[1].fault, Fault::ArmsStartDown);
    assert_eq!(rx[1].drill.id, DrillId::SeqTurtleHare);
}

#[test]
fn test_confidence_scenarios() {
    let c = compute_confidence(&[], 0);
    assert_eq!((c.score, c.phase, c.trend), (47, "Dip (normal)", Trend::Dip));

    let c = compute_confidence(&[Fault::LateHips], 4);
    assert_eq!((c.score, c.phase, c.trend), (51, "Gap Exit", Trend::Exit));

    let c = compute_confidence(&[Fault::LateHips], 10);
    assert_eq!((c.score, c.phase, c.trend), (76, "Climb", Trend::Climb));

    assert_eq!(compute_confidence(&[], 100).score, 98);
    assert_eq!(
        compute_confidence(&[Fault::EarlyExtension], -5),
        compute_confidence(&[Fault::EarlyExtension], 0)
    );
}

#[test]
fn test_written_report_validates() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out = temp_dir.path().join("report");

    let config = ReportConfig::new(Level::Advanced)
        .with_sessions(8)
        .with_player("Test Player")
        .with_output_dir(out.clone());
    let source = ListSource::new(["grip_in_palm_hinge_limited", "late_hips", "early_extension"]);

    let report = ReportPipeline::new(config, source)
        .run_and_write()
        .expect("Report run failed");

    assert!(out.join(REPORT_FILE).exists());
    assert!(out.join(PLAN_FILE).exists());
    validate_report(&out).expect("Written report should validate");

    assert_eq!(report.prescriptions[0].fault, Fault::GripInPalmHingeLimited);
    assert_eq!(report.prescriptions[1].fault, Fault::LateHips);
    // late_hips present: sequencing base 42, Climb regime at session 8
    assert_eq!(report.confidence.score, 42 + 25 + 3);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join(REPORT_FILE)).unwrap()).unwrap();
    assert_eq!(json["player"], "Test Player");
    assert_eq!(json["level"], "advanced");
    assert_eq!(json["prescriptions"][0]["fault"], "grip_in_palm_hinge_limited");
    assert_eq!(json["prescriptions"][0]["drill"]["id"], "HINGE_90_CHECK");
    assert_eq!(json["confidence"]["trend"], "climb");
    assert_eq!(
        json["practice_plan"]["days"].as_array().unwrap().len(),
        PLAN_DAYS as usize
    );
    assert!(json.get("dropped_faults").is_none());

    let plan = fs::read_to_string(out.join(PLAN_FILE)).unwrap();
    assert!(plan.starts_with("14-day plan: Grip in palm (hinge limited) + Late hips"));
}

#[test]
fn test_intake_file_drives_report() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let intake_path = temp_dir.path().join("intake.json");
    fs::write(
        &intake_path,
        r#"{"player":"Jun","level":"beginner","junior":true,"sessions":1,
            "faults":["early_extension","shank"]}"#,
    )
    .unwrap();

    let intake = load_intake(&intake_path).expect("Failed to load intake");
    let config = ReportConfig::new(intake.level.unwrap())
        .with_junior(intake.junior.unwrap_or(false))
        .with_sessions(intake.sessions.unwrap_or(0));
    let report = ReportPipeline::new(config, ListSource::new(intake.faults))
        .run()
        .unwrap();

    // Legacy beginner ordering ignores the detected fault
    let faults: Vec<Fault> = report.prescriptions.iter().map(|p| p.fault).collect();
    assert_eq!(faults, vec![Fault::LateHips, Fault::ArmsStartDown]);
    assert_eq!(report.dropped_faults, vec!["shank"]);
    // Only early_extension survives parsing: default base 55, Dip regime
    assert_eq!(report.confidence.score, 55 - 8 + 2);
}

#[test]
fn test_sequencing_first_beginner_report() {
    let config = ReportConfig::new(Level::Beginner)
        .with_beginner_ordering(BeginnerOrdering::SequencingFirst);
    let report = ReportPipeline::new(config, ListSource::new(["early_extension"]))
        .run()
        .unwrap();

    let faults: Vec<Fault> = report.prescriptions.iter().map(|p| p.fault).collect();
    assert_eq!(faults, vec![Fault::LateHips, Fault::EarlyExtension]);
}

#[test]
fn test_strict_mode_rejects_unknown_fault() {
    let config = ReportConfig::new(Level::Intermediate)
        .with_unknown_faults(UnknownFaultPolicy::Reject);
    let result = ReportPipeline::new(config, ListSource::new(["late_hips", "casting"])).run();
    assert!(result.is_err());
}

#[test]
fn test_validate_missing_report() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    assert!(validate_report(temp_dir.path()).is_err());
}

#[test]
fn test_validate_rejects_tampered_report() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out = temp_dir.path().to_path_buf();

    let config = ReportConfig::new(Level::Intermediate).with_output_dir(out.clone());
    ReportPipeline::new(config, DemoSource::new())
        .run_and_write()
        .unwrap();
    validate_report(&out).unwrap();

    let path = out.join(REPORT_FILE);
    let tampered = fs::read_to_string(&path)
        .unwrap()
        .replace("\"HIP_EARLY_START\"", "\"POSTURE_WALL\"");
    fs::write(&path, tampered).unwrap();
    assert!(validate_report(&out).is_err());
}

#[test]
fn test_validate_rejects_score_outside_regime() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out = temp_dir.path().to_path_buf();

    let config = ReportConfig::new(Level::Intermediate)
        .with_sessions(8)
        .with_output_dir(out.clone());
    let report = ReportPipeline::new(config, DemoSource::new())
        .run_and_write()
        .unwrap();
    assert_eq!(report.confidence.score, 70);
    validate_report(&out).unwrap();

    // Still in bounds and still "climb", but no fault set yields 12 at session 8
    let path = out.join(REPORT_FILE);
    let tampered = fs::read_to_string(&path)
        .unwrap()
        .replace("\"score\": 70", "\"score\": 12");
    fs::write(&path, tampered).unwrap();
    assert!(validate_report(&out).is_err());
}
