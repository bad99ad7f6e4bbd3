/// Identity of a Makefile target: one or more names and their dependencies.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Target {
    pub names: Vec<String>,
    pub dependencies: Vec<String>,
}

impl Target {
    /// # Panics
    ///
    /// Panics if `names` is empty; every target has at least one name.
    #[must_use]
    pub fn new(names: Vec<String>, dependencies: Vec<String>) -> Self {
        assert!(!names.is_empty(), "a target must have at least one name");
        Self { names, dependencies }
    }

    #[must_use]
    pub fn primary_name(&self) -> &str { &self.names[0] }
}

#[cfg(test)]
mod tests {
    use super::Target;

    #[test]
    fn test_primary_name() {
        let t = Target::new(vec!["all".into(), "default".into()], vec!["build".into()]);
        assert_eq!(t.primary_name(), "all");
    }

    #[test]
    #[should_panic(expected = "at least one name")]
    fn test_empty_names_panics() { let _ = Target::new(vec![], vec![]); }
}
