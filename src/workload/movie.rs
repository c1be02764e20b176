use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

/// A movie record: its title and its average rating.
///
/// Two movies are equal when their titles match ignoring case, whatever their
/// ratings. `Hash` follows the same rule, so `Movie` works as a key of a
/// [`ChainedHashTable`][crate::ChainedHashTable].
#[derive(Clone, Debug)]
pub struct Movie {
    title: String,
    rating: f64,
}

impl Movie {
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Self {
            title: title.into(),
            rating,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Ranks movies by rating, highest first, then by title ignoring case.
    ///
    /// This is a ranking, not the equality order: two movies that are equal can
    /// still rank apart when their ratings differ.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .rating
            .total_cmp(&self.rating)
            .then_with(|| folded(&self.title).cmp(folded(&other.title)))
    }
}

fn folded(title: &str) -> impl Iterator<Item = char> + '_ {
    title.chars().flat_map(char::to_lowercase)
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        folded(&self.title).eq(folded(&other.title))
    }
}

impl Eq for Movie {}

impl Hash for Movie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in folded(&self.title) {
            c.hash(state);
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {:.1}⭐", self.title, self.rating)
    }
}
