use std::io;

use crate::{
    prelude::{
        Config, ConfigError, Error, FileInput, FileOutput, InputSource, Injector, OutputSink,
        SourcePosition,
    },
    tests::{init_logger, ELAC_INPUT},
};

use rstest::*;

/// [OutputSink] that counts write attempts
#[derive(Default)]
struct TestSink {
    writes: usize,
    text: String,
}

impl OutputSink for TestSink {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.writes += 1;
        self.text = text.to_string();
        Ok(())
    }
}

/// [InputSource] that always fails
struct BrokenInput;

impl InputSource for BrokenInput {
    fn read_lines(&mut self) -> io::Result<Vec<String>> {
        Err(io::Error::new(io::ErrorKind::NotFound, "no such input"))
    }
}

#[fixture]
fn injector() -> Injector {
    let cfg = Config::default().with_rings(&[100.0]).with_points_per_arc(3);
    Injector::new(cfg).unwrap()
}

#[rstest]
fn end_to_end(injector: Injector) {
    init_logger();
    let input = "source x=10.00 y=20.00 z=0.00\nrec x=0 y=0 z=15.0 file=R1\n";
    assert_eq!(injector.config().rings, vec![100.0]);
    assert_eq!(injector.config().points_per_arc, 3);

    let injection = injector.inject(input).unwrap();

    assert_eq!(injection.source, SourcePosition::new(10.0, 20.0));
    assert_eq!(injection.stations.len(), 6);
    assert_eq!(
        injection.text,
        "source x=10.00 y=20.00 z=0.00
rec x=0 y=0 z=0.00 file=R1

rec x=10.00 y=120.00 z=0.00 variables=acoustic sacformat=1 file=HX1_1
rec x=10.00 y=20.00 z=-100.00 variables=acoustic sacformat=1 file=HX1_2
rec x=10.00 y=-80.00 z=0.00 variables=acoustic sacformat=1 file=HX1_3
rec x=110.00 y=20.00 z=0.00 variables=acoustic sacformat=1 file=HY1_1
rec x=10.00 y=20.00 z=-100.00 variables=acoustic sacformat=1 file=HY1_2
rec x=-90.00 y=20.00 z=0.00 variables=acoustic sacformat=1 file=HY1_3
"
    );
}

#[test]
fn default_rings() {
    init_logger();
    let injector = Injector::new(Config::default()).unwrap();
    let injection = injector.inject(ELAC_INPUT).unwrap();

    let lines = injection.text.lines().collect::<Vec<_>>();
    let original = ELAC_INPUT.lines().count();

    assert_eq!(injection.stations.len(), 2 * 181 * 3);
    assert_eq!(lines.len(), original + 1 + 2 * 181 * 3);
    assert_eq!(lines[original], "");
    assert!(lines[..original].iter().all(|line| !line.contains("acoustic")));
    assert!(injection.text.ends_with("file=HY3_181\n"));
    assert!(!injection.text.ends_with("\n\n"));

    assert_eq!(
        lines[original + 1],
        "rec x=1000.00 y=-150.50 z=0.00 variables=acoustic sacformat=1 file=HX1_1"
    );
    assert_eq!(
        lines[original + 1 + 90],
        "rec x=1000.00 y=-250.50 z=-100.00 variables=acoustic sacformat=1 file=HX1_91"
    );
    assert_eq!(
        lines[original + 1 + 181 + 180],
        "rec x=900.00 y=-250.50 z=0.00 variables=acoustic sacformat=1 file=HY1_181"
    );

    // pre-existing receivers are on the ground
    for line in lines[..original].iter().filter(|l| l.starts_with("rec ")) {
        assert!(line.contains(" z=0.00 "), "{}", line);
    }
}

#[rstest]
fn run_writes_once(injector: Injector) {
    init_logger();
    let mut input = ELAC_INPUT;
    let mut output = TestSink::default();

    let injection = injector.run(&mut input, &mut output).unwrap();
    assert_eq!(output.writes, 1);
    assert_eq!(output.text, injection.text);
}

#[rstest]
fn string_sink(injector: Injector) {
    let mut input = "source x=1 y=2";
    let mut output = String::from("previous content");
    injector.run(&mut input, &mut output).unwrap();
    assert!(output.starts_with("source x=1 y=2\n\nrec x=1.00 y=102.00 z=0.00"));
}

#[rstest]
fn missing_source_writes_nothing(injector: Injector) {
    init_logger();
    let mut input = "grid nx=10\nrec x=1 y=2 z=3\n";
    let mut output = TestSink::default();

    match injector.run(&mut input, &mut output) {
        Err(Error::MissingSource) => {},
        other => panic!("expecting missing source, got {:?}", other),
    }
    assert_eq!(output.writes, 0);
}

#[rstest]
fn malformed_source_writes_nothing(injector: Injector) {
    init_logger();
    let mut input = "source x=1.2.3 y=4\n";
    let mut output = TestSink::default();

    assert!(matches!(
        injector.run(&mut input, &mut output),
        Err(Error::MalformedNumeric { .. })
    ));
    assert_eq!(output.writes, 0);
}

#[rstest]
fn broken_input(injector: Injector) {
    init_logger();
    let mut output = TestSink::default();
    assert!(matches!(
        injector.run(&mut BrokenInput, &mut output),
        Err(Error::Io(_))
    ));
    assert_eq!(output.writes, 0);
}

#[test]
fn invalid_config_rejected() {
    init_logger();
    let cfg = Config::default().with_points_per_arc(1);
    match Injector::new(cfg) {
        Err(Error::Config(ConfigError::NotEnoughArcPoints(1))) => {},
        other => panic!("expecting config error, got {:?}", other),
    }
}

#[rstest]
fn files(injector: Injector) {
    init_logger();
    let dir = std::env::temp_dir().join(format!("elac-rings-{}", std::process::id()));
    let input_path = dir.join("model.elacinput");
    let output_path = dir.join("out").join("model-air.elacinput");

    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(&input_path, ELAC_INPUT).unwrap();

    let injection = injector
        .run(&mut FileInput::new(&input_path), &mut FileOutput::new(&output_path))
        .unwrap();

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(written, injection.text);

    // missing source: output file is not created
    let failed_path = dir.join("out").join("failed.elacinput");
    std::fs::write(&input_path, "grid nx=10\n").unwrap();
    assert!(injector
        .run(&mut FileInput::new(&input_path), &mut FileOutput::new(&failed_path))
        .is_err());
    assert!(!failed_path.exists());

    std::fs::remove_dir_all(&dir).unwrap();
}
