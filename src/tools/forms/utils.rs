use once_cell::sync::Lazy;
use regex::Regex;

use super::types::InputRecord;

// Lazy static regex patterns
static FORM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<form.*?>.*?</form>").expect("valid regex"));
static INPUT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<input[^>]*>").expect("valid regex"));
static ACTION_REGEX: Lazy<Regex> = Lazy::new(|| attribute_regex("action"));
static METHOD_REGEX: Lazy<Regex> = Lazy::new(|| attribute_regex("method"));
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| attribute_regex("name"));
static ID_REGEX: Lazy<Regex> = Lazy::new(|| attribute_regex("id"));
static TYPE_REGEX: Lazy<Regex> = Lazy::new(|| attribute_regex("type"));

/// `attr="value"` or `attr='value'`, value up to the next quote of either kind.
/// Plain substring match: `id=` also hits `data-id=`.
fn attribute_regex(attr: &str) -> Regex {
    Regex::new(&format!(r#"(?i){}=["'](.*?)["']"#, regex::escape(attr))).expect("valid regex")
}

/// First captured value of `regex` in `text`.
fn capture_first(regex: &Regex, text: &str) -> Option<String> {
    regex
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

/// Non-overlapping form regions in document order.
pub(super) fn find_form_regions(html: &str) -> Vec<&str> {
    FORM_REGEX.find_iter(html).map(|m| m.as_str()).collect()
}

/// Input tags inside one form region, in document order.
pub(super) fn find_input_tags(form: &str) -> Vec<&str> {
    INPUT_REGEX.find_iter(form).map(|m| m.as_str()).collect()
}

/// The whole region is searched, so a form tag without `action` can pick up
/// one from nested markup.
pub(super) fn form_action(form: &str) -> Option<String> {
    capture_first(&ACTION_REGEX, form)
}

pub(super) fn form_method(form: &str) -> Option<String> {
    capture_first(&METHOD_REGEX, form)
}

pub(super) fn parse_input(tag: &str) -> InputRecord {
    InputRecord {
        name: capture_first(&NAME_REGEX, tag),
        id: capture_first(&ID_REGEX, tag),
        input_type: capture_first(&TYPE_REGEX, tag),
    }
}
