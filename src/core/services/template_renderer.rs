use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::rich_text::RichText;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is valid"));

/// Substitute `{name}` tokens in `template` with highlighted values.
///
/// Tokens whose name is not in `values` stay in the output literally, as
/// does all text around them. A placeholder may appear any number of
/// times, in any order.
pub fn render_with_placeholders(template: &str, values: &[(&str, String)]) -> RichText {
    let mut out = RichText::default();
    let mut cursor = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Some((_, value)) = values.iter().find(|(key, _)| *key == name.as_str()) else {
            continue;
        };
        out.push_plain(&template[cursor..whole.start()]);
        out.push_highlight(value.clone());
        cursor = whole.end();
    }

    out.push_plain(&template[cursor..]);
    out
}
