//! Display-name helpers.
//!
//! Upstream names are lower-case hyphenated slugs (`special-attack`,
//! `generation-ii`). These helpers turn them into the labels shown in the
//! info pane.

/// Title-case a string word by word.
///
/// Every alphabetic character that follows a non-alphabetic one (or starts
/// the string) is upper-cased; all other alphabetic characters are
/// lower-cased. Hyphens and digits are kept and act as word breaks.
///
/// ```
/// use pokefun_core::naming::title_case;
///
/// assert_eq!(title_case("umbreon"), "Umbreon");
/// assert_eq!(title_case("special-attack"), "Special-Attack");
/// assert_eq!(title_case("generation ii"), "Generation Ii");
/// ```
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;

    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}

/// Derive a human-readable generation label from a generation reference.
///
/// Takes the last non-empty `/`-separated segment, replaces hyphens with
/// spaces and title-cases the result. Returns `None` if the reference has
/// no non-empty segment.
///
/// ```
/// use pokefun_core::naming::generation_label;
///
/// assert_eq!(generation_label("generation-ii").as_deref(), Some("Generation Ii"));
/// assert_eq!(
///     generation_label("https://pokeapi.co/api/v2/generation/generation-iv/").as_deref(),
///     Some("Generation Iv"),
/// );
/// assert_eq!(generation_label("///"), None);
/// ```
pub fn generation_label(reference: &str) -> Option<String> {
    let slug = reference
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .next_back()?;

    Some(title_case(&slug.replace('-', " ")))
}
