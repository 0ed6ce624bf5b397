use intake_core::models::report::AssessmentReport;

#[test]
fn sanitized_html_escapes_markup() {
    let report = AssessmentReport::new(
        "<script>alert('x')</script> & \"quotes\"".to_string(),
        "stub".to_string(),
    );
    assert_eq!(
        report.sanitized_html(),
        "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; &quot;quotes&quot;"
    );
}

#[test]
fn plain_text_passes_through_unchanged() {
    let report = AssessmentReport::new("1. Admin Summary\n2. Client Handout".to_string(), "stub".to_string());
    assert_eq!(report.sanitized_html(), report.text);
}

#[test]
fn reference_id_carries_the_stamp_prefix() {
    let report = AssessmentReport::new("ok".to_string(), "stub".to_string());
    assert!(report.reference_id.starts_with("MP-"));
}
