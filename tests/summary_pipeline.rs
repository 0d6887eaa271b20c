use redadeg::message::SummaryMessage;
use redadeg::package::read_package;

#[test]
fn swim_package_renders_summary_line() {
    let w = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let msg = SummaryMessage::from_workout(&w);

    assert_eq!(
        msg.to_string(),
        "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
         Mean speed: 1.000 km/h; Calories burned: 336.000."
    );
}

#[test]
fn every_demo_package_decodes_and_renders() {
    let packages: &[(&str, &[f64], &str)] = &[
        ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0], "Swimming"),
        ("RUN", &[15_000.0, 1.0, 75.0], "Running"),
        ("WLK", &[9_000.0, 1.0, 75.0, 180.0], "Walking"),
    ];

    for &(tag, data, training_type) in packages {
        let w = read_package(tag, data).unwrap();
        let line = SummaryMessage::from_workout(&w).to_string();

        assert!(
            line.starts_with(&format!("Training type: {training_type}; ")),
            "{tag}: {line}"
        );
        assert!(line.contains(" h; "), "{tag}: {line}");
        assert!(line.contains(" km; "), "{tag}: {line}");
        assert!(line.contains(" km/h; "), "{tag}: {line}");
        assert!(line.ends_with('.'), "{tag}: {line}");
    }
}

#[test]
fn bad_packages_never_build_a_record() {
    assert!(read_package("FLY", &[1.0, 1.0, 1.0]).is_err());
    assert!(read_package("RUN", &[15_000.0, 1.0]).is_err());
    assert!(read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0, 7.0]).is_err());
}
