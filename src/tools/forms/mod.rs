pub mod types;
mod utils;

#[cfg(test)]
mod tests;

pub use types::*;
use utils::*;

/// Extract forms and their input fields from page text.
///
/// This is a pattern scan, not an HTML parser. A form runs from a
/// case-insensitive `<form` to the nearest following `</form>`, so nested or
/// unclosed forms produce wrong boundaries. Attribute values are taken
/// verbatim between the first pair of quotes. Absent attributes are `None`.
///
/// Pure function of its input: forms and inputs come back in document order.
///
/// ## Examples
/// ```
/// use formprobe::tools::forms::extract_forms;
///
/// let forms = extract_forms(r#"<form method="post"><input type="text" name="mssv"></form>"#);
/// assert_eq!(forms.len(), 1);
/// assert_eq!(forms[0].action, None);
/// assert_eq!(forms[0].inputs[0].name.as_deref(), Some("mssv"));
/// ```
pub fn extract_forms(html: &str) -> Vec<FormRecord> {
    find_form_regions(html)
        .into_iter()
        .map(|form| FormRecord {
            raw_markup: form.to_string(),
            action: form_action(form),
            method: form_method(form),
            inputs: find_input_tags(form).into_iter().map(parse_input).collect(),
        })
        .collect()
}
