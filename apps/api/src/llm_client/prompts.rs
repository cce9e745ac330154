// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to every prompt that expects a machine-readable reply.
pub const JSON_ONLY_INSTRUCTION: &str = "The output should be valid JSON, with no additional text. \
    Do not include any JSON markdown formatting or code block indicators. \
    Provide only the raw JSON as the response.";

/// Fills `{name}` placeholders in one pass over `template`.
///
/// Substituted values are never rescanned, so text inside them that looks
/// like a placeholder is left as is. Unknown `{...}` sequences are kept.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let matched = values.iter().find(|(name, _)| {
            tail[1..].starts_with(name) && tail[1 + name.len()..].starts_with('}')
        });
        match matched {
            Some((name, value)) => {
                out.push_str(value);
                rest = &tail[name.len() + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
