use crate::tools::fetch::FetchResult;
use crate::tools::forms::extract_forms;
use crate::tools::report::*;

const PAGE: &str = r#"<html><body>
<form method="post" action="/khao-thi/hvsv/xem-diem-thi.html">
  <input type="text" name="mssv" id="txtMSSV">
  <input type="submit">
</form>
<form><input name="q"></form>
</body></html>"#;

#[test]
fn zero_forms() {
    assert_eq!(render_report(&[]), "Found 0 forms.\n");
}

#[test]
fn full_report_layout() {
    let expected = "\
Found 2 forms.

--- Form 1 ---
Action: /khao-thi/hvsv/xem-diem-thi.html
Method: post
Inputs (2):
  - Name: mssv, ID: txtMSSV, Type: text
  - Name: None, ID: None, Type: submit

--- Form 2 ---
Action: None
Method: None
Inputs (1):
  - Name: q, ID: None, Type: None
";
    assert_eq!(render_report(&extract_forms(PAGE)), expected);
}

#[test]
fn failure_stops_before_extraction() {
    let result = FetchResult::Failure {
        reason: "All 2 strategies failed: [primary: timed out; fallback: timed out]".into(),
    };
    assert_eq!(render_outcome(&result), "Could not fetch page.\n");
}

#[test]
fn success_reports_length_in_chars() {
    let result = FetchResult::Success {
        body: "<p>\u{111}i\u{1ec3}m</p>".into(),
        status_code: Some(200),
    };
    assert_eq!(
        render_outcome(&result),
        "Content length: 11\nFound 0 forms.\n"
    );
}
