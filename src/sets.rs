use random_string::CharClass;

/// Render every character class, in class order, for display.
pub fn render_sets() -> String {
    CharClass::ALL
        .iter()
        .map(|class| format!("{}:\n{}", class.name(), class.characters()))
        .collect::<Vec<_>>()
        .join("\n\n")
}
