//! Files written into the project by `init`

/// Global stylesheet with the CSS variables components rely on
pub const GLOBALS_CSS: &str = include_str!("../../templates/globals.css");

/// Tailwind config mapping theme colors to those variables
pub const TAILWIND_CONFIG: &str = include_str!("../../templates/tailwind.config.js");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_reference_shared_variables() {
        for variable in ["--primary", "--secondary", "--destructive"] {
            assert!(GLOBALS_CSS.contains(variable));
            assert!(TAILWIND_CONFIG.contains(variable));
        }
    }
}
