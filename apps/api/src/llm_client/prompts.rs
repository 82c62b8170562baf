// Shared prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it;
// this file holds the interpolation helper they all use.

/// Fills `{name}` placeholders in `template` from `vars` in a single pass.
///
/// Substituted values are never re-scanned, so user text that happens to
/// contain `{something}` reaches the model verbatim. Unknown placeholders are
/// left as-is.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let extra: usize = vars.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replaced = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
