//! Animatable visual properties and the small map used for step endpoints.
//!
//! Translation is in CSS pixels, rotation in degrees, scale and opacity are
//! unitless. The rest value of a property is what an untouched element
//! renders with.

/// One animatable visual property of a target element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    TranslateX,
    TranslateY,
    Scale,
    Rotation,
    Opacity,
}

impl Property {
    pub const ALL: [Property; 5] = [
        Property::TranslateX,
        Property::TranslateY,
        Property::Scale,
        Property::Rotation,
        Property::Opacity,
    ];

    /// The value an element renders with when the property is not animated.
    pub fn rest(self) -> f32 {
        match self {
            Property::Scale | Property::Opacity => 1.0,
            Property::TranslateX | Property::TranslateY | Property::Rotation => 0.0,
        }
    }
}

/// Insertion-ordered property → value map. Timelines touch at most five
/// properties per target, so a flat vec beats a hash map here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropMap {
    entries: Vec<(Property, f32)>,
}

impl PropMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, prop: Property, value: f32) -> Self {
        self.set(prop, value);
        self
    }

    pub fn set(&mut self, prop: Property, value: f32) {
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == prop) {
            entry.1 = value;
        } else {
            self.entries.push((prop, value));
        }
    }

    pub fn get(&self, prop: Property) -> Option<f32> {
        self.entries
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, v)| *v)
    }

    /// The stored value, or the property's rest value.
    pub fn get_or_rest(&self, prop: Property) -> f32 {
        self.get(prop).unwrap_or_else(|| prop.rest())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, f32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Property, f32)> for PropMap {
    fn from_iter<I: IntoIterator<Item = (Property, f32)>>(iter: I) -> Self {
        let mut map = PropMap::new();
        for (p, v) in iter {
            map.set(p, v);
        }
        map
    }
}
