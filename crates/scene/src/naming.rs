//! Display names for objects carrying legacy suffixes

/// Suffixes stripped from object names, checked in order
const SUFFIXES: &[&str] = &[
    ".r", ".l", ".t", ".st", ".r.t", ".l.t", ".r-line", ".l-line", ".g", "-line", ".o", ".e",
];

/// Split a name into its base and the first matching known suffix
///
/// Returns an empty suffix when none matches.
///
/// ```
/// use scene_tree::clean_name;
///
/// assert_eq!(clean_name("Femur.t"), ("Femur", ".t"));
/// assert_eq!(clean_name("Femur"), ("Femur", ""));
/// ```
pub fn clean_name(name: &str) -> (&str, &str) {
    for suffix in SUFFIXES {
        if let Some(base) = name.strip_suffix(suffix) {
            return (base, suffix);
        }
    }
    (name, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name() {
        assert_eq!(clean_name("Femur.r"), ("Femur", ".r"));
        assert_eq!(clean_name("Femur.l"), ("Femur", ".l"));
        assert_eq!(clean_name("Femur.st"), ("Femur", ".st"));
        assert_eq!(clean_name("Bones of leg.g"), ("Bones of leg", ".g"));
        assert_eq!(clean_name("Femur-line"), ("Femur", "-line"));
        assert_eq!(clean_name("Femur.o"), ("Femur", ".o"));
        assert_eq!(clean_name("Skull..."), ("Skull...", ""));
    }

    #[test]
    fn test_first_match_wins() {
        // ".t" is checked before ".r.t", so only the last part is stripped
        assert_eq!(clean_name("Femur.r.t"), ("Femur.r", ".t"));
        assert_eq!(clean_name("Femur.r-line"), ("Femur", ".r-line"));
    }
}
