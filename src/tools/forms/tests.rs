use crate::tools::forms::*;

fn input(name: Option<&str>, id: Option<&str>, input_type: Option<&str>) -> InputRecord {
    InputRecord {
        name: name.map(String::from),
        id: id.map(String::from),
        input_type: input_type.map(String::from),
    }
}

#[test]
fn no_forms_in_plain_page() {
    let html = "<html><body><p>Nothing to submit</p><input name=\"q\"></body></html>";
    assert!(extract_forms(html).is_empty());
}

#[test]
fn forms_in_document_order() {
    let html = r#"
        <form action="/first"><input name="a"></form>
        <div>between</div>
        <form action="/second"></form>
        <FORM ACTION="/third"></FORM>
    "#;

    let forms = extract_forms(html);
    let actions: Vec<_> = forms.iter().map(|f| f.action.as_deref()).collect();
    assert_eq!(actions, vec![Some("/first"), Some("/second"), Some("/third")]);
}

#[test]
fn form_spanning_lines() {
    let html = "<form\n  method='post'\n  action='/xem-diem'>\n<input type=\"text\" name=\"mssv\">\n</form>";

    let forms = extract_forms(html);
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].action.as_deref(), Some("/xem-diem"));
    assert_eq!(forms[0].method.as_deref(), Some("post"));
    assert_eq!(forms[0].raw_markup, html);
}

#[test]
fn missing_action_and_method_are_none() {
    let forms = extract_forms("<form><input id=\"x\"></form>");
    assert_eq!(forms[0].action, None);
    assert_eq!(forms[0].method, None);
}

#[test]
fn text_input_with_name() {
    let forms = extract_forms(r#"<form><input type="text" name="mssv"></form>"#);
    assert_eq!(forms[0].inputs, vec![input(Some("mssv"), None, Some("text"))]);
}

#[test]
fn inputs_keep_order_and_duplicates() {
    let html = r#"<form method="POST">
        <input type="hidden" name="token" id="tok" value="abc">
        <INPUT TYPE='checkbox' NAME='subject'>
        <input type="checkbox" name="subject" />
        <input disabled>
    </form>"#;

    let forms = extract_forms(html);
    assert_eq!(
        forms[0].inputs,
        vec![
            input(Some("token"), Some("tok"), Some("hidden")),
            input(Some("subject"), None, Some("checkbox")),
            input(Some("subject"), None, Some("checkbox")),
            input(None, None, None),
        ]
    );
}

#[test]
fn attribute_search_is_local_to_each_input() {
    let html = r#"<form><input name="first" id="one"><input type="submit"></form>"#;

    let inputs = &extract_forms(html)[0].inputs;
    assert_eq!(inputs[1], input(None, None, Some("submit")));
}

#[test]
fn nested_form_ends_at_first_close() {
    let html = "<form action=\"/outer\"><form action=\"/inner\"><input name=\"a\"></form><input name=\"b\"></form>";

    let forms = extract_forms(html);
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].action.as_deref(), Some("/outer"));
    assert_eq!(forms[0].inputs.len(), 1);
}

#[test]
fn unclosed_form_is_skipped() {
    assert!(extract_forms("<form action=\"/x\"><input name=\"a\">").is_empty());
}

#[test]
fn action_found_in_nested_markup() {
    let html = r#"<form><button formaction="/alt">Go</button></form>"#;
    assert_eq!(extract_forms(html)[0].action.as_deref(), Some("/alt"));
}

#[test]
fn value_ends_at_first_quote_of_either_kind() {
    let html = r#"<form action="/search?q='x'"></form>"#;
    assert_eq!(extract_forms(html)[0].action.as_deref(), Some("/search?q="));
}

#[test]
fn extraction_is_repeatable() {
    let html = r#"<form action="/a"><input name="x"></form><form><input id="y"></form>"#;
    assert_eq!(extract_forms(html), extract_forms(html));
}
