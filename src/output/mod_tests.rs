use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert!("sarif".parse::<OutputFormat>().is_err());
}

#[test]
fn memory_reporter_keeps_order_and_severity() {
    let mut reporter = MemoryReporter::new();
    reporter.emit(Severity::Info, "first");
    reporter.emit(Severity::Error, "second");
    reporter.emit(Severity::Info, "third");

    assert_eq!(reporter.messages().len(), 3);
    assert_eq!(
        reporter.with_severity(Severity::Info).collect::<Vec<_>>(),
        vec!["first", "third"]
    );
    assert_eq!(
        reporter.with_severity(Severity::Error).collect::<Vec<_>>(),
        vec!["second"]
    );
}

fn emit_through<R: Reporter>(mut reporter: R) {
    reporter.emit(Severity::Info, "via reference");
}

#[test]
fn mutable_reference_forwards_to_reporter() {
    let mut reporter = MemoryReporter::new();
    emit_through(&mut reporter);
    assert_eq!(
        reporter.into_messages(),
        vec![(Severity::Info, "via reference".to_string())]
    );
}

#[test]
fn severity_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
}
