//! Insertion-ordered template storage with eagerly cached canonical forms.

#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

use crate::{
    error::RecognizerError,
    normalizer::{self, Parameters},
    point::Point,
};

/// A named reference stroke stored for later matching.
///
/// The raw captured points are kept as-is; the canonical form is computed
/// once at insertion time and reused for every comparison. The canonical
/// form is a cache and is not serialized; rebuild it with
/// [`GestureLibrary::from_templates`] after deserializing.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Template {
    /// Gesture class
    pub name: String,
    /// Raw stroke points as captured
    pub points: Vec<Point>,
    #[cfg_attr(feature = "serde", serde(skip))]
    canonical: Vec<Point>,
}

impl Template {
    /// The cached canonical form of this template's stroke.
    pub fn canonical(&self) -> &[Point] {
        &self.canonical
    }
}

/// A library of gesture templates.
///
/// Templates keep their insertion order; names are unique and the first
/// insertion of a name wins. All cached canonical forms are computed with
/// the library's parameters, so both sides of every comparison agree on
/// resolution and box size.
///
/// The library is read-only from the classifier's point of view: concurrent
/// `classify` calls against a shared library are safe as long as nobody
/// mutates it at the same time.
#[derive(Clone, Debug, Default)]
pub struct GestureLibrary {
    params: Parameters,
    templates: Vec<Template>,
}

impl GestureLibrary {
    /// Creates an empty library with default normalization parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty library with the given normalization parameters.
    pub fn with_parameters(params: Parameters) -> Self {
        GestureLibrary {
            params,
            templates: Vec::new(),
        }
    }

    /// Rebuilds a library from raw templates (e.g. after deserialization),
    /// recomputing every canonical cache with `params`.
    pub fn from_templates(
        params: Parameters,
        templates: Vec<Template>,
    ) -> Result<Self, RecognizerError> {
        let mut library = Self::with_parameters(params);
        for t in templates {
            library.add(&t.name, t.points)?;
        }
        Ok(library)
    }

    /// Adds a template, normalizing it eagerly.
    ///
    /// Fails if the name is empty or already taken, or if the stroke is
    /// degenerate (so every stored template is guaranteed matchable).
    pub fn add(&mut self, name: &str, points: Vec<Point>) -> Result<(), RecognizerError> {
        if name.is_empty() {
            return Err(RecognizerError::EmptyName);
        }
        if self.contains(name) {
            return Err(RecognizerError::DuplicateTemplate(name.to_owned()));
        }
        let canonical = normalizer::normalize(&points, &self.params)?;
        self.templates.push(Template {
            name: name.to_owned(),
            points,
            canonical,
        });
        Ok(())
    }

    /// The normalization parameters shared by all cached templates.
    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.iter().any(|t| t.name == name)
    }

    /// Templates in insertion order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Template names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vee() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(20.0, 40.0),
            Point::new(40.0, 0.0),
        ]
    }

    fn hook() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 40.0),
            Point::new(30.0, 40.0),
            Point::new(30.0, 25.0),
        ]
    }

    #[test]
    fn preserves_insertion_order() {
        let mut library = GestureLibrary::new();
        library.add("vee", vee()).unwrap();
        library.add("hook", hook()).unwrap();
        let names: Vec<&str> = library.names().collect();
        assert_eq!(names, ["vee", "hook"]);
    }

    #[test]
    fn rejects_duplicate_names_keeping_first() {
        let mut library = GestureLibrary::new();
        library.add("vee", vee()).unwrap();
        let err = library.add("vee", hook()).unwrap_err();
        assert_eq!(err, RecognizerError::DuplicateTemplate("vee".into()));
        assert_eq!(library.len(), 1);
        assert_eq!(library.templates()[0].points, vee());
    }

    #[test]
    fn rejects_empty_name() {
        let mut library = GestureLibrary::new();
        let err = library.add("", vee()).unwrap_err();
        assert_eq!(err, RecognizerError::EmptyName);
    }

    #[test]
    fn rejects_degenerate_template_at_insertion() {
        let mut library = GestureLibrary::new();
        let err = library.add("dot", vec![Point::new(1.0, 1.0)]).unwrap_err();
        assert_eq!(err, RecognizerError::DegenerateStroke);
        assert!(library.is_empty());
    }

    #[test]
    fn caches_canonical_form_at_insertion() {
        let params = Parameters::default();
        let mut library = GestureLibrary::with_parameters(params);
        library.add("vee", vee()).unwrap();
        let cached = library.templates()[0].canonical();
        let fresh = normalizer::normalize(&vee(), &params).unwrap();
        assert_eq!(cached, fresh.as_slice());
    }

    #[test]
    fn from_templates_rebuilds_caches() {
        let mut library = GestureLibrary::new();
        library.add("vee", vee()).unwrap();
        library.add("hook", hook()).unwrap();

        // simulate templates that lost their cache (e.g. deserialized)
        let stripped: Vec<Template> = library
            .templates()
            .iter()
            .map(|t| Template {
                name: t.name.clone(),
                points: t.points.clone(),
                canonical: Vec::new(),
            })
            .collect();

        let rebuilt =
            GestureLibrary::from_templates(Parameters::default(), stripped).unwrap();
        assert_eq!(rebuilt.len(), 2);
        for (a, b) in rebuilt.templates().iter().zip(library.templates()) {
            assert_eq!(a.canonical(), b.canonical());
        }
    }
}
