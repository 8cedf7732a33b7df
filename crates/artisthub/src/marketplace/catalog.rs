use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog artists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtistId(pub String);

/// A bookable performer record. Immutable once seeded; the UI never mutates
/// catalog entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub bio: String,
    /// Ordered category tags, e.g. `["Singers", "Jazz"]`.
    pub categories: Vec<String>,
    pub languages: Vec<String>,
    /// Fee-range label matched exactly by the price filter, e.g. `"$500-1000"`.
    pub fee_range: String,
    pub location: String,
    pub image_url: String,
    pub rating: f32,
    pub review_count: u32,
    pub verified: bool,
}

/// Browsable category entry for the landing and onboarding views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub listed_count: u32,
}

pub const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo {
        id: "singers",
        name: "Singers",
        description: "Professional vocalists for any occasion",
        listed_count: 247,
    },
    CategoryInfo {
        id: "dancers",
        name: "Dancers",
        description: "Choreographers and performers",
        listed_count: 189,
    },
    CategoryInfo {
        id: "speakers",
        name: "Speakers",
        description: "Motivational and keynote speakers",
        listed_count: 156,
    },
    CategoryInfo {
        id: "djs",
        name: "DJs",
        description: "Music mixers and entertainment",
        listed_count: 203,
    },
];

pub const LANGUAGES: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "German",
    "Italian",
    "Portuguese",
    "Mandarin",
    "Japanese",
    "Korean",
    "Arabic",
    "Russian",
    "Hindi",
];

pub const LOCATIONS: &[&str] = &[
    "New York, NY",
    "Los Angeles, CA",
    "Chicago, IL",
    "Houston, TX",
    "Phoenix, AZ",
    "Philadelphia, PA",
    "San Antonio, TX",
    "San Diego, CA",
    "Dallas, TX",
    "San Jose, CA",
    "Austin, TX",
    "Jacksonville, FL",
    "San Francisco, CA",
    "Columbus, OH",
    "Charlotte, NC",
    "Fort Worth, TX",
    "Detroit, MI",
    "El Paso, TX",
    "Memphis, TN",
    "Seattle, WA",
];

/// Suggested fee brackets for the onboarding form. Catalog entries keep their
/// own labels; filtering compares labels exactly rather than against this list.
pub const FEE_RANGES: &[&str] = &[
    "$200-400",
    "$400-700",
    "$700-1000",
    "$1000-1500",
    "$1500-2500",
    "$2500+",
];

struct ArtistSeed {
    id: &'static str,
    name: &'static str,
    bio: &'static str,
    categories: &'static [&'static str],
    languages: &'static [&'static str],
    fee_range: &'static str,
    location: &'static str,
    image_url: &'static str,
    rating: f32,
    review_count: u32,
    verified: bool,
}

const ARTIST_SEEDS: &[ArtistSeed] = &[
    ArtistSeed {
        id: "1",
        name: "Sarah Johnson",
        bio: "Professional jazz vocalist with 10+ years of experience performing at weddings, corporate events, and intimate venues.",
        categories: &["Singers", "Jazz"],
        languages: &["English", "French"],
        fee_range: "$500-1000",
        location: "New York, NY",
        image_url: "https://images.pexels.com/photos/1181519/pexels-photo-1181519.jpeg?auto=compress&cs=tinysrgb&w=400",
        rating: 4.9,
        review_count: 127,
        verified: true,
    },
    ArtistSeed {
        id: "2",
        name: "Marcus Thompson",
        bio: "Dynamic hip-hop dancer and choreographer. Specializes in urban dance styles and stage performances.",
        categories: &["Dancers", "Hip-Hop"],
        languages: &["English", "Spanish"],
        fee_range: "$300-700",
        location: "Los Angeles, CA",
        image_url: "https://images.pexels.com/photos/1699159/pexels-photo-1699159.jpeg?auto=compress&cs=tinysrgb&w=400",
        rating: 4.8,
        review_count: 89,
        verified: true,
    },
    ArtistSeed {
        id: "3",
        name: "Dr. Emily Chen",
        bio: "Motivational speaker and business consultant. Expert in leadership development and team building.",
        categories: &["Speakers", "Business"],
        languages: &["English", "Mandarin"],
        fee_range: "$1000-2500",
        location: "San Francisco, CA",
        image_url: "https://images.pexels.com/photos/1181690/pexels-photo-1181690.jpeg?auto=compress&cs=tinysrgb&w=400",
        rating: 5.0,
        review_count: 203,
        verified: true,
    },
    ArtistSeed {
        id: "4",
        name: "DJ Alex Rivera",
        bio: "Professional DJ with extensive experience in weddings, corporate events, and nightclub performances.",
        categories: &["DJs", "Electronic"],
        languages: &["English", "Portuguese"],
        fee_range: "$400-900",
        location: "Miami, FL",
        image_url: "https://images.pexels.com/photos/1763075/pexels-photo-1763075.jpeg?auto=compress&cs=tinysrgb&w=400",
        rating: 4.7,
        review_count: 156,
        verified: true,
    },
    ArtistSeed {
        id: "5",
        name: "Isabella Martinez",
        bio: "Classical pianist and composer. Perfect for elegant events, weddings, and intimate gatherings.",
        categories: &["Singers", "Classical"],
        languages: &["English", "Spanish", "Italian"],
        fee_range: "$600-1200",
        location: "Chicago, IL",
        image_url: "https://images.pexels.com/photos/1181345/pexels-photo-1181345.jpeg?auto=compress&cs=tinysrgb&w=400",
        rating: 4.9,
        review_count: 94,
        verified: true,
    },
    ArtistSeed {
        id: "6",
        name: "James Wilson",
        bio: "Contemporary dance instructor and performer. Specializes in modern dance and theatrical performances.",
        categories: &["Dancers", "Contemporary"],
        languages: &["English"],
        fee_range: "$350-800",
        location: "Seattle, WA",
        image_url: "https://images.pexels.com/photos/1697350/pexels-photo-1697350.jpeg?auto=compress&cs=tinysrgb&w=400",
        rating: 4.6,
        review_count: 71,
        verified: false,
    },
];

/// The static artist catalog, in insertion order.
pub fn seed_catalog() -> Vec<Artist> {
    ARTIST_SEEDS
        .iter()
        .map(|seed| Artist {
            id: ArtistId(seed.id.to_string()),
            name: seed.name.to_string(),
            bio: seed.bio.to_string(),
            categories: seed.categories.iter().map(|s| s.to_string()).collect(),
            languages: seed.languages.iter().map(|s| s.to_string()).collect(),
            fee_range: seed.fee_range.to_string(),
            location: seed.location.to_string(),
            image_url: seed.image_url.to_string(),
            rating: seed.rating,
            review_count: seed.review_count,
            verified: seed.verified,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_preserves_insertion_order() {
        let catalog = seed_catalog();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog[0].name, "Sarah Johnson");
        assert_eq!(catalog[5].name, "James Wilson");
    }

    #[test]
    fn seed_ids_are_unique() {
        let catalog = seed_catalog();
        let mut ids: Vec<_> = catalog.iter().map(|artist| artist.id.clone()).collect();
        ids.sort_by(|a, b| a.0.cmp(&b.0));
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }
}
