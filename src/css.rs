//! Instance-scoped stylesheets.
//!
//! A stylesheet is built against placeholder names and then sealed: the
//! serialized rules are hashed (SHA-256, first 8 hex digits) into a root
//! class (`ri-<hash>`) and every selector and keyframe name is prefixed
//! with it, so two instances with the same styles share a class while
//! nothing leaks into the global namespace.

use sha2::{Digest, Sha256};
use std::fmt::Write;

/// Prefix for generated root classes.
pub const CLASS_PREFIX: &str = "ri";

/// Stand-in class used when hashing the unscoped sheet.
const UNSCOPED_CLASS: &str = "_";

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

/// A block of declarations attached to a selector relative to the root.
///
/// `part` is `None` for the root element itself, or the name of a child
/// part (rendered as `.root .root__part`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub part: Option<&'static str>,
    pub modifier: Option<String>,
    pub declarations: Vec<Declaration>,
}

/// One `@keyframes` block. Stops are (selector, declarations),
/// e.g. `("0%, 100%", [opacity: 0.4])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyframes {
    pub name: &'static str,
    pub stops: Vec<(&'static str, Vec<Declaration>)>,
}

/// Builder for a scoped stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    rules: Vec<Rule>,
    keyframes: Vec<Keyframes>,
}

/// Shorthand for building a declaration.
pub fn decl(property: &'static str, value: impl Into<String>) -> Declaration {
    Declaration {
        property,
        value: value.into(),
    }
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add declarations for the root element.
    pub fn root(mut self, declarations: Vec<Declaration>) -> Self {
        self.rules.push(Rule {
            part: None,
            modifier: None,
            declarations,
        });
        self
    }

    /// Add declarations for a named child part.
    pub fn part(mut self, part: &'static str, declarations: Vec<Declaration>) -> Self {
        self.rules.push(Rule {
            part: Some(part),
            modifier: None,
            declarations,
        });
        self
    }

    /// Add declarations for a modifier of a child part (`.root__part--mod`).
    pub fn part_modifier(
        mut self,
        part: &'static str,
        modifier: impl Into<String>,
        declarations: Vec<Declaration>,
    ) -> Self {
        self.rules.push(Rule {
            part: Some(part),
            modifier: Some(modifier.into()),
            declarations,
        });
        self
    }

    /// Add a keyframes block. Reference it from declarations as `{name}`
    /// via [`StyleSheet::animation_ref`].
    pub fn keyframes(mut self, keyframes: Keyframes) -> Self {
        self.keyframes.push(keyframes);
        self
    }

    /// Placeholder for a keyframe name, replaced with the scoped name on seal.
    pub fn animation_ref(name: &str) -> String {
        format!("{{{}}}", name)
    }

    /// Hash the unscoped content and produce the final scoped stylesheet.
    pub fn seal(self) -> ScopedStyle {
        let digest = Sha256::digest(self.write_css(UNSCOPED_CLASS).as_bytes());
        let class = format!("{}-{}", CLASS_PREFIX, &hex::encode(digest)[..8]);
        let css = self.write_css(&class);
        ScopedStyle { class, css }
    }

    /// Serialize every rule and keyframes block against `class`.
    fn write_css(&self, class: &str) -> String {
        let mut css = String::new();
        for rule in &self.rules {
            let selector = match (&rule.part, &rule.modifier) {
                (None, _) => format!(".{class}"),
                (Some(part), None) => format!(".{class} .{class}__{part}"),
                (Some(part), Some(m)) => format!(".{class} .{class}__{part}--{m}"),
            };
            let _ = writeln!(css, "{selector} {{");
            for d in &rule.declarations {
                let value = self.scope_animation_names(&d.value, class);
                let _ = writeln!(css, "  {}: {};", d.property, value);
            }
            css.push_str("}\n");
        }
        for kf in &self.keyframes {
            let _ = writeln!(css, "@keyframes {class}-{} {{", kf.name);
            for (stop, declarations) in &kf.stops {
                let body: Vec<String> = declarations
                    .iter()
                    .map(|d| format!("{}: {};", d.property, d.value))
                    .collect();
                let _ = writeln!(css, "  {stop} {{ {} }}", body.join(" "));
            }
            css.push_str("}\n");
        }
        css
    }

    fn scope_animation_names(&self, value: &str, class: &str) -> String {
        let mut out = value.to_string();
        for kf in &self.keyframes {
            out = out.replace(
                &Self::animation_ref(kf.name),
                &format!("{class}-{}", kf.name),
            );
        }
        out
    }
}

/// A sealed stylesheet and the root class it is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedStyle {
    pub class: String,
    pub css: String,
}

impl ScopedStyle {
    /// Class name for a child part.
    pub fn part_class(&self, part: &str) -> String {
        format!("{}__{}", self.class, part)
    }

    /// Class name for a modifier of a child part.
    pub fn modifier_class(&self, part: &str, modifier: &str) -> String {
        format!("{}__{}--{}", self.class, part, modifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(color: &str) -> StyleSheet {
        StyleSheet::new()
            .root(vec![
                decl("color", color),
                decl(
                    "animation",
                    format!("{} 1s linear infinite", StyleSheet::animation_ref("spin")),
                ),
            ])
            .part("dot", vec![decl("width", "4px")])
            .keyframes(Keyframes {
                name: "spin",
                stops: vec![
                    ("from", vec![decl("transform", "rotate(0deg)")]),
                    ("to", vec![decl("transform", "rotate(360deg)")]),
                ],
            })
    }

    #[test]
    fn seal_is_deterministic() {
        assert_eq!(sample("red").seal(), sample("red").seal());
    }

    #[test]
    fn seal_class_is_stable_across_builds() {
        let style = StyleSheet::new().root(vec![decl("color", "red")]).seal();
        assert_eq!(style.class, "ri-6e268c05");
        assert_eq!(style.css, ".ri-6e268c05 {\n  color: red;\n}\n");
    }

    #[test]
    fn seal_class_depends_on_content() {
        assert_ne!(sample("red").seal().class, sample("blue").seal().class);
    }

    #[test]
    fn keyframes_are_scoped_to_class() {
        let style = sample("red").seal();
        let scoped = format!("{}-spin", style.class);
        assert!(style.css.contains(&format!("@keyframes {} {{", scoped)));
        assert!(style.css.contains(&format!("animation: {} 1s linear infinite;", scoped)));
        assert!(!style.css.contains("{spin}"));
    }

    #[test]
    fn every_selector_is_under_root_class() {
        let style = sample("red").seal();
        for line in style.css.lines() {
            if line.ends_with('{') && !line.starts_with("@keyframes") && !line.starts_with("  ") {
                assert!(
                    line.starts_with(&format!(".{}", style.class)),
                    "unscoped selector: {line}"
                );
            }
        }
        assert!(style.css.contains(&format!(".{} .{}__dot {{", style.class, style.class)));
    }

    #[test]
    fn part_and_modifier_class_names() {
        let style = sample("red").seal();
        assert_eq!(style.part_class("dot"), format!("{}__dot", style.class));
        assert_eq!(
            style.modifier_class("dot", "2"),
            format!("{}__dot--2", style.class)
        );
    }
}
