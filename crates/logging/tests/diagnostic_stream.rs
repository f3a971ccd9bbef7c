use logging::{Diagnostic, LogConfig, MessageSink, Severity};

#[test]
fn mixed_diagnostics_and_progress_share_one_stream() {
    let mut sink = MessageSink::new(Vec::new());

    sink.write_raw(b"\r10 bytes (   0.0 KB/s)").expect("progress");
    sink.write_raw(b"\n").expect("newline");
    sink.write(Diagnostic::error("gone.txt: No such file or directory"))
        .expect("error");

    let text = String::from_utf8(sink.into_inner()).expect("utf8");
    assert_eq!(
        text,
        "\r10 bytes (   0.0 KB/s)\ngone.txt: No such file or directory\n"
    );
}

#[test]
fn prompt_is_an_info_line() {
    let mut sink = MessageSink::new(Vec::new());
    let prompt = Diagnostic::info("Waiting for line input... (use pipe or specify files)");
    assert_eq!(prompt.severity(), Severity::Info);

    sink.write(&prompt).expect("prompt");
    assert_eq!(
        sink.into_inner(),
        b"Waiting for line input... (use pipe or specify files)\n"
    );
}

#[test]
fn explicit_filter_is_kept() {
    let config = LogConfig::new("pv_like::relay=debug");
    assert_eq!(config.filter(), "pv_like::relay=debug");
}
